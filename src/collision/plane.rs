use crate::collision::{Aabb, BoundaryContact};
use crate::error::PhysicsError;

/// The bounded surface bodies move on. The origin `(MIN_X, MIN_Y)` is the top-left
/// corner; `(max_x, max_y)` is the bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    max_x: f64,
    max_y: f64,
}

impl Plane {
    /// Left edge of the plane.
    pub const MIN_X: f64 = 0.0;
    /// Top edge of the plane.
    pub const MIN_Y: f64 = 0.0;

    /// Creates a plane `width` wide and `height` tall.
    pub fn new(width: f64, height: f64) -> Result<Self, PhysicsError> {
        if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
            return Err(PhysicsError::invalid(format!(
                "plane dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { max_x: width, max_y: height })
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Sides of the plane the box crosses. Empty when the box is fully inside.
    pub fn violations(&self, aabb: &Aabb) -> BoundaryContact {
        BoundaryContact {
            left: aabb.min.x < Self::MIN_X,
            right: aabb.max.x > self.max_x,
            top: aabb.min.y < Self::MIN_Y,
            bottom: aabb.max.y > self.max_y,
        }
    }

    /// True when the box lies entirely within the plane (touching an edge is allowed).
    pub fn contains(&self, aabb: &Aabb) -> bool {
        !self.violations(aabb).any()
    }
}
