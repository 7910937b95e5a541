pub mod aabb;
pub mod contact;
pub mod plane;

// Re-export key types
pub use aabb::Aabb;
pub use contact::BoundaryContact;
pub use plane::Plane;
