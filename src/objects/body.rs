use std::fmt;

use crate::collision::{Aabb, BoundaryContact, Plane};
use crate::common::{MaterialFactory, SharedMaterial};
use crate::error::PhysicsError;
use crate::integration::integrator;
use crate::math::vec2::Vec2;

/// A rectangular body on the plane. Its bounding box is always derived from the
/// center and the fixed extents, so `end_x - start_x == width` holds at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) name: String,

    // Geometry
    pub(crate) center: Vec2,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) material: SharedMaterial,

    // Primary state
    pub(crate) velocity: Vec2,
    pub(crate) acceleration: Vec2,
}

impl Body {
    /// Creates a body made of an existing (possibly shared) material.
    /// Fails with `ObjectOutOfBounds` if the box does not lie within `plane`.
    pub fn new(
        name: impl Into<String>,
        center: Vec2,
        width: u32,
        height: u32,
        material: SharedMaterial,
        plane: &Plane,
    ) -> Result<Self, PhysicsError> {
        let name = name.into();
        check_placement(&name, center, width, height, plane)?;
        tracing::trace!(%name, x = center.x, y = center.y, width, height, "created body");

        Ok(Self {
            name,
            center,
            width,
            height,
            material,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
        })
    }

    /// Creates a body of known mass. Its material is generated by `materials` with
    /// `density = mass / (width * height)` and an auto-generated name.
    pub fn with_mass(
        name: impl Into<String>,
        center: Vec2,
        width: u32,
        height: u32,
        mass: f64,
        materials: &mut MaterialFactory,
        plane: &Plane,
    ) -> Result<Self, PhysicsError> {
        let name = name.into();
        // Validate before the factory hands out an id
        check_placement(&name, center, width, height, plane)?;
        let area = f64::from(width) * f64::from(height);
        let material = materials.from_mass(mass, area)?;
        Self::new(name, center, width, height, material, plane)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn material(&self) -> &SharedMaterial {
        &self.material
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    pub fn set_acceleration(&mut self, acceleration: Vec2) {
        self.acceleration = acceleration;
    }

    /// Mass implied by the material's density and the body's area.
    pub fn mass(&self) -> f64 {
        self.material.density() * f64::from(self.width) * f64::from(self.height)
    }

    /// The current bounding box.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.center, self.width, self.height)
    }

    pub fn start_x(&self) -> f64 {
        self.bounds().min.x
    }

    pub fn end_x(&self) -> f64 {
        self.bounds().max.x
    }

    pub fn top_y(&self) -> f64 {
        self.bounds().min.y
    }

    pub fn bottom_y(&self) -> f64 {
        self.bounds().max.y
    }

    /// Moves the body so its center is at `center`. The body is left untouched
    /// if the new placement would leave the plane.
    pub fn move_to(&mut self, center: Vec2, plane: &Plane) -> Result<(), PhysicsError> {
        check_placement(&self.name, center, self.width, self.height, plane)?;
        self.center = center;
        Ok(())
    }

    /// Advances velocity and position by `dt` under `gravity` plus the body's own
    /// acceleration. See [`integrator::integrate`].
    pub fn integrate(&mut self, dt: f64, gravity: Vec2) -> Result<(), PhysicsError> {
        integrator::integrate(self, dt, gravity)
    }

    /// Pushes any edge that left the plane back onto its boundary and zeroes the
    /// velocity on that axis. Returns the sides that were clamped.
    ///
    /// Fails without touching the body if it is wider or taller than `plane`, since
    /// no placement could satisfy both opposite edges.
    pub fn clamp_to_bounds(&mut self, plane: &Plane) -> Result<BoundaryContact, PhysicsError> {
        let contact = plane.violations(&self.bounds());
        if !contact.any() {
            return Ok(contact);
        }
        if f64::from(self.width) > plane.max_x() || f64::from(self.height) > plane.max_y() {
            return Err(PhysicsError::invalid(format!(
                "body {} ({}x{}) does not fit on a {}x{} plane",
                self.name,
                self.width,
                self.height,
                plane.max_x(),
                plane.max_y()
            )));
        }

        let half_w = f64::from(self.width) / 2.0;
        let half_h = f64::from(self.height) / 2.0;

        if contact.left {
            self.center.x = Plane::MIN_X + half_w;
        } else if contact.right {
            self.center.x = plane.max_x() - half_w;
        }
        if contact.top {
            self.center.y = Plane::MIN_Y + half_h;
        } else if contact.bottom {
            self.center.y = plane.max_y() - half_h;
        }

        // Inelastic wall: the body stops on the axis it hit
        if contact.horizontal() {
            self.velocity.x = 0.0;
        }
        if contact.vertical() {
            self.velocity.y = 0.0;
        }

        tracing::debug!(name = %self.name, sides = %contact, x = self.center.x, y = self.center.y, "clamped body to plane");
        Ok(contact)
    }

    /// Out-of-bounds diagnostic for the current box, or `None` if it is on the plane.
    pub(crate) fn escape_error(&self, plane: &Plane) -> Option<PhysicsError> {
        let bounds = self.bounds();
        if plane.contains(&bounds) {
            return None;
        }
        Some(PhysicsError::ObjectOutOfBounds(out_of_bounds_message(&self.name, &bounds, plane)))
    }

    /// Re-checks the current placement against `plane`, e.g. when a body built for
    /// one plane is handed to a world with another.
    pub(crate) fn check_within(&self, plane: &Plane) -> Result<(), PhysicsError> {
        check_placement(&self.name, self.center, self.width, self.height, plane)
    }

    /// Human readable rendering for logs. Never used for control flow.
    pub fn to_diagnostic_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Body {}:{{", self.name)?;
        writeln!(f, "   x: {:.6}", self.center.x)?;
        writeln!(f, "   y: {:.6}", self.center.y)?;
        writeln!(f, "   width: {}", self.width)?;
        writeln!(f, "   height: {}", self.height)?;
        writeln!(f, "   material: {}", self.material.name())?;
        write!(f, "}}")
    }
}

/// Rejects zero extents, non-finite centers and boxes that leave the plane.
fn check_placement(
    name: &str,
    center: Vec2,
    width: u32,
    height: u32,
    plane: &Plane,
) -> Result<(), PhysicsError> {
    if width == 0 || height == 0 {
        return Err(PhysicsError::invalid(format!(
            "body {name} must have positive extents, got {width}x{height}"
        )));
    }
    if !center.is_finite() {
        return Err(PhysicsError::invalid(format!(
            "body {name} has a non-finite center ({}, {})",
            center.x, center.y
        )));
    }

    let bounds = Aabb::from_center(center, width, height);
    if !plane.contains(&bounds) {
        let message = out_of_bounds_message(name, &bounds, plane);
        tracing::warn!(%name, "rejected out-of-bounds placement");
        return Err(PhysicsError::ObjectOutOfBounds(message));
    }
    Ok(())
}

fn out_of_bounds_message(name: &str, bounds: &Aabb, plane: &Plane) -> String {
    let (tl, tr, bl, br) = (
        bounds.top_left(),
        bounds.top_right(),
        bounds.bottom_left(),
        bounds.bottom_right(),
    );
    format!(
        "Object {name} is out of bounds:\n\
         Top left: ({:.6}, {:.6})\n\
         Top right: ({:.6}, {:.6})\n\
         Bottom left: ({:.6}, {:.6})\n\
         Bottom right: ({:.6}, {:.6})\n\
         Plane height: {}\n\
         Plane width: {}",
        tl.x, tl.y, tr.x, tr.y, bl.x, bl.y, br.x, br.y,
        plane.max_y(),
        plane.max_x(),
    )
}
