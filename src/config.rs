//! World settings supplied by whatever drives the simulation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collision::Plane;
use crate::error::PhysicsError;
use crate::math::vec2::Vec2;

/// Magnitude of the default downward gravity.
pub const DEFAULT_GRAVITY: f64 = 5.0;

/// Error type for loading a [`WorldConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON or wrong field types.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Well-formed but non-physical settings.
    #[error("invalid config: {0}")]
    Invalid(#[from] PhysicsError),
}

/// Plane size and gravity for a world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub plane_width: f64,
    pub plane_height: f64,
    #[serde(default = "default_gravity")]
    pub gravity: Vec2,
}

fn default_gravity() -> Vec2 {
    Vec2::DOWN * DEFAULT_GRAVITY
}

impl WorldConfig {
    /// Config for a `width` x `height` plane with default gravity.
    pub fn new(plane_width: f64, plane_height: f64) -> Self {
        Self {
            plane_width,
            plane_height,
            gravity: default_gravity(),
        }
    }

    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the plane dimensions and that gravity is finite.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        self.plane()?;
        if !self.gravity.is_finite() {
            return Err(PhysicsError::invalid("gravity must be finite"));
        }
        Ok(())
    }

    /// The plane described by this config.
    pub fn plane(&self) -> Result<Plane, PhysicsError> {
        Plane::new(self.plane_width, self.plane_height)
    }
}
