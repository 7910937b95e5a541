use crate::{
    collision::{BoundaryContact, Plane},
    common::{MaterialFactory, SharedMaterial},
    config::{WorldConfig, DEFAULT_GRAVITY},
    error::PhysicsError,
    integration::integrator,
    math::vec2::Vec2,
    objects::Body,
};

/// A body that did not step cleanly.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyFailure {
    /// Position of the body in the world's collection when the step ran.
    pub index: usize,
    pub name: String,
    pub error: PhysicsError,
    /// Sides the body was clamped against. `None` when the body's update was rejected.
    pub contact: Option<BoundaryContact>,
}

/// Outcome of one `step`: every body that went out of bounds (and was clamped back)
/// or whose integration failed. Bodies not listed stepped normally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub failures: Vec<BodyFailure>,
}

impl StepReport {
    /// True when every body stepped without touching a wall.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.failures.iter().any(|f| f.name == name)
    }

    /// Names of the failed bodies, in step order.
    pub fn names(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.name.as_str()).collect()
    }

    /// Failures that were recovered by clamping.
    pub fn clamped(&self) -> impl Iterator<Item = &BodyFailure> {
        self.failures.iter().filter(|f| f.contact.is_some())
    }
}

/// Owns the bodies and steps them across a bounded plane.
#[derive(Debug)]
pub struct PhysicsWorld {
    bodies: Vec<Body>,
    plane: Plane,
    materials: MaterialFactory,
    gravity: Vec2,
}

impl PhysicsWorld {
    /// Creates a new, empty world on `plane` with the default downward gravity.
    pub fn new(plane: Plane) -> Self {
        Self {
            bodies: Vec::new(),
            plane,
            materials: MaterialFactory::new(),
            gravity: Vec2::DOWN * DEFAULT_GRAVITY,
        }
    }

    /// Creates an empty world from validated settings.
    pub fn from_config(config: &WorldConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        let mut world = Self::new(config.plane()?);
        world.set_gravity(config.gravity)?;
        Ok(world)
    }

    /// Creates a world holding `bodies`, in the given order.
    pub fn with_bodies(plane: Plane, bodies: Vec<Body>) -> Result<Self, PhysicsError> {
        let mut world = Self::new(plane);
        for body in bodies {
            world.add_body(body)?;
        }
        Ok(world)
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Replaces the gravity applied on every step. Must be finite.
    pub fn set_gravity(&mut self, gravity: Vec2) -> Result<(), PhysicsError> {
        if !gravity.is_finite() {
            return Err(PhysicsError::invalid(format!(
                "gravity must be finite, got ({}, {})",
                gravity.x, gravity.y
            )));
        }
        self.gravity = gravity;
        Ok(())
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn materials(&self) -> &MaterialFactory {
        &self.materials
    }

    /// The factory that hands out material ids for this world.
    pub fn materials_mut(&mut self) -> &mut MaterialFactory {
        &mut self.materials
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// First body with the given name.
    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    /// Mutable access between steps, e.g. to set a velocity.
    pub fn body_mut(&mut self, name: &str) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.name() == name)
    }

    /// Adds a body and returns its index. The body must lie within this world's plane.
    /// Its material id is recorded so materials this world creates later never reuse it.
    pub fn add_body(&mut self, body: Body) -> Result<usize, PhysicsError> {
        body.check_within(&self.plane)?;
        self.materials.observe(body.material());
        let index = self.bodies.len();
        tracing::debug!(name = body.name(), index, "added body");
        self.bodies.push(body);
        Ok(index)
    }

    /// Builds a body from an existing material and adds it.
    pub fn create_body(
        &mut self,
        name: &str,
        center: Vec2,
        width: u32,
        height: u32,
        material: SharedMaterial,
    ) -> Result<usize, PhysicsError> {
        let body = Body::new(name, center, width, height, material, &self.plane)?;
        self.add_body(body)
    }

    /// Builds a body of known mass (its material generated by this world) and adds it.
    pub fn create_body_with_mass(
        &mut self,
        name: &str,
        center: Vec2,
        width: u32,
        height: u32,
        mass: f64,
    ) -> Result<usize, PhysicsError> {
        let body = Body::with_mass(name, center, width, height, mass, &mut self.materials, &self.plane)?;
        self.add_body(body)
    }

    /// Removes the first body with the given name, keeping the order of the rest.
    pub fn remove_body(&mut self, name: &str) -> Option<Body> {
        let index = self.bodies.iter().position(|b| b.name() == name)?;
        tracing::debug!(name, index, "removed body");
        Some(self.bodies.remove(index))
    }

    /// Advances the simulation by one time step `dt`.
    ///
    /// Bodies are integrated and clamped in insertion order. A body that fails is
    /// recorded in the returned report and the step carries on with the rest, so
    /// only an invalid `dt` makes the whole step fail.
    pub fn step(&mut self, dt: f64) -> Result<StepReport, PhysicsError> {
        integrator::check_dt(dt)?;

        let _span = tracing::debug_span!("step", dt, bodies = self.bodies.len()).entered();
        let mut report = StepReport::default();

        for (index, body) in self.bodies.iter_mut().enumerate() {
            // 1. Integrate motion
            if let Err(error) = body.integrate(dt, self.gravity) {
                tracing::warn!(name = body.name(), %error, "skipped body update");
                report.failures.push(BodyFailure {
                    index,
                    name: body.name().to_string(),
                    error,
                    contact: None,
                });
                continue;
            }

            // 2. Keep the body on the plane
            let escaped = body.escape_error(&self.plane);
            match body.clamp_to_bounds(&self.plane) {
                Ok(contact) => {
                    if let Some(error) = escaped {
                        report.failures.push(BodyFailure {
                            index,
                            name: body.name().to_string(),
                            error,
                            contact: Some(contact),
                        });
                    }
                }
                Err(error) => {
                    tracing::warn!(name = body.name(), %error, "could not clamp body");
                    report.failures.push(BodyFailure {
                        index,
                        name: body.name().to_string(),
                        error,
                        contact: None,
                    });
                }
            }
        }

        Ok(report)
    }
}
