//! Surface materials for shading.

use crate::{hittable::HitRecord, light::diffuse_intensity, Light};
use pinhole_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Diffuse albedo used when a primitive doesn't specify one.
pub const DEFAULT_ALBEDO: Color = Color::new(0.4, 0.4, 0.3);

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Outgoing color at a hit, lit by `lights`.
    fn shade(&self, rec: &HitRecord, lights: &[Light]) -> Color;
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lambertian {
    pub albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Default for Lambertian {
    fn default() -> Self {
        Self::new(DEFAULT_ALBEDO)
    }
}

impl Material for Lambertian {
    fn shade(&self, rec: &HitRecord, lights: &[Light]) -> Color {
        self.albedo * diffuse_intensity(rec.p, rec.normal, lights)
    }
}
