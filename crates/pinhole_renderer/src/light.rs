//! Point lights and diffuse illumination.

use pinhole_math::{Vec3, Vec3Ext};
use serde::{Deserialize, Serialize};

/// A point light source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }

    /// Lambertian contribution of this light at `point` with unit `normal`.
    ///
    /// Lights behind the surface contribute nothing.
    pub fn diffuse_at(&self, point: Vec3, normal: Vec3) -> f32 {
        let light_dir = (self.position - point).unit();
        self.intensity * light_dir.dot(normal).max(0.0)
    }
}

/// Total diffuse intensity from all `lights` at a surface point.
pub fn diffuse_intensity(point: Vec3, normal: Vec3, lights: &[Light]) -> f32 {
    lights
        .iter()
        .map(|light| light.diffuse_at(point, normal))
        .sum()
}
