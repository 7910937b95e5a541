//! Defines the material a body is made of.

use std::sync::Arc;

use crate::error::PhysicsError;

/// A material shared between every body made of it.
/// Lives as long as the longest-lived body holding it.
pub type SharedMaterial = Arc<Material>;

/// Density record of a body. Treated as read-only while the world steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    id: u64,
    density: f64,
    name: String,
}

impl Material {
    /// Unique id handed out by the factory that created this material.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the density. Only reachable while the material is uniquely owned
    /// (e.g. through `Arc::get_mut`), so never during a step.
    pub fn set_density(&mut self, density: f64) -> Result<(), PhysicsError> {
        self.density = validate_density(density)?;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

fn validate_density(density: f64) -> Result<f64, PhysicsError> {
    if !density.is_finite() || density < 0.0 {
        return Err(PhysicsError::invalid(format!(
            "density must be finite and non-negative, got {density}"
        )));
    }
    Ok(density)
}

/// Creates materials and owns the counter their ids (and generated names) come from.
#[derive(Debug, Default)]
pub struct MaterialFactory {
    count: u64,
}

impl MaterialFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next id to hand out: materials created here plus any observed ids.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Creates a material with the given density.
    /// Without a name, it is called `Material_<id>`.
    pub fn create(&mut self, name: Option<&str>, density: f64) -> Result<SharedMaterial, PhysicsError> {
        let density = validate_density(density)?;
        let id = self.next_id();
        let name = match name {
            Some(name) => name.to_string(),
            None => format!("Material_{id}"),
        };
        tracing::trace!(id, %name, density, "created material");
        Ok(Arc::new(Material { id, density, name }))
    }

    /// Creates an auto-named material whose density is `mass / area`.
    pub fn from_mass(&mut self, mass: f64, area: f64) -> Result<SharedMaterial, PhysicsError> {
        if !area.is_finite() || area <= 0.0 {
            return Err(PhysicsError::invalid(format!("area must be positive, got {area}")));
        }
        if !mass.is_finite() || mass < 0.0 {
            return Err(PhysicsError::invalid(format!(
                "mass must be finite and non-negative, got {mass}"
            )));
        }
        self.create(None, mass / area)
    }

    /// Records a material created elsewhere so later ids never collide with it.
    pub fn observe(&mut self, material: &Material) {
        self.count = self.count.max(material.id + 1);
    }

    fn next_id(&mut self) -> u64 {
        let id = self.count;
        self.count += 1;
        id
    }
}
