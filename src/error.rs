//! Error type shared by materials, bodies and the world.

use thiserror::Error;

/// Everything that can go wrong while building or stepping a simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// A non-physical value was supplied (zero area, negative density, bad `dt`, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A body's bounding box lies (or would lie) outside the plane.
    /// Carries the fully rendered diagnostic.
    #[error("{0}")]
    ObjectOutOfBounds(String),
    /// Integration produced NaN or infinite position/velocity for the named body.
    #[error("body {name} produced a non-finite state")]
    NonFiniteState { name: String },
}

impl PhysicsError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        PhysicsError::InvalidArgument(msg.into())
    }

    /// True for the out-of-bounds class of errors.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, PhysicsError::ObjectOutOfBounds(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PhysicsError::invalid("area must be positive");
        assert_eq!(err.to_string(), "invalid argument: area must be positive");

        let err = PhysicsError::NonFiniteState { name: "box".into() };
        assert_eq!(err.to_string(), "body box produced a non-finite state");
        assert!(!err.is_out_of_bounds());
    }

    #[test]
    fn test_out_of_bounds_displays_diagnostic_verbatim() {
        let err = PhysicsError::ObjectOutOfBounds("Object box is out of bounds".into());
        assert_eq!(err.to_string(), "Object box is out of bounds");
        assert!(err.is_out_of_bounds());
    }
}
