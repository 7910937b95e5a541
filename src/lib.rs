pub mod math;
pub mod common;
pub mod collision;
pub mod objects;
pub mod integration;
pub mod world;
pub mod error;
pub mod config;

// Re-export key types for easier use
pub use math::vec2::Vec2;
pub use common::{Material, MaterialFactory, SharedMaterial};
pub use collision::{Aabb, BoundaryContact, Plane};
pub use objects::Body;
pub use world::{BodyFailure, PhysicsWorld, StepReport};
pub use error::PhysicsError;
pub use config::{ConfigError, WorldConfig};
