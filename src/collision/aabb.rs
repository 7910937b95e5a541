// Defines an Axis-Aligned Bounding Box

use crate::math::vec2::Vec2;

/// An Axis-Aligned Bounding Box defined by its minimum (top-left) and maximum
/// (bottom-right) corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Creates a new AABB.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        // Ensure min coordinates are <= max coordinates
        Aabb {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Box of the given extents centered on `center`.
    pub fn from_center(center: Vec2, width: u32, height: u32) -> Self {
        let half = Vec2::new(f64::from(width) / 2.0, f64::from(height) / 2.0);
        Aabb::new(center - half, center + half)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn top_left(&self) -> Vec2 {
        self.min
    }

    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.max.x, self.min.y)
    }

    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.min.x, self.max.y)
    }

    pub fn bottom_right(&self) -> Vec2 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_new_orders_corners() {
        let b = Aabb::new(Vec2::new(10.0, 20.0), Vec2::new(0.0, 5.0));
        assert_eq!(b.min, Vec2::new(0.0, 5.0));
        assert_eq!(b.max, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_aabb_from_center() {
        let b = Aabb::from_center(Vec2::new(500.0, 100.0), 100, 100);
        assert_eq!(b.min, Vec2::new(450.0, 50.0));
        assert_eq!(b.max, Vec2::new(550.0, 150.0));
        assert_eq!(b.width(), 100.0);
        assert_eq!(b.height(), 100.0);
    }

    #[test]
    fn test_aabb_from_center_odd_extents() {
        let b = Aabb::from_center(Vec2::new(10.0, 10.0), 3, 7);
        assert_eq!(b.min, Vec2::new(8.5, 6.5));
        assert_eq!(b.max, Vec2::new(11.5, 13.5));
        assert_eq!(b.width(), 3.0);
        assert_eq!(b.height(), 7.0);
    }

    #[test]
    fn test_aabb_corners() {
        let b = Aabb::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(b.top_left(), Vec2::new(1.0, 2.0));
        assert_eq!(b.top_right(), Vec2::new(3.0, 2.0));
        assert_eq!(b.bottom_left(), Vec2::new(1.0, 4.0));
        assert_eq!(b.bottom_right(), Vec2::new(3.0, 4.0));
    }
}
