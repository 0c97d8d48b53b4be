//! Scene description and nearest-hit queries.
//!
//! A scene is an ordered list of primitives, a list of point lights and a
//! background color. It is built up front (in code or from JSON) and then
//! shared read-only by every render worker.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use pinhole_math::{Interval, Ray, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Color, HitRecord, Hittable, Light, Primitive, Sphere};

/// Hits at or beyond this distance count as background.
pub const MAX_HIT_DISTANCE: f32 = 1000.0;

/// Color returned for rays that hit nothing.
pub const DEFAULT_BACKGROUND: Color = Color::new(0.2, 0.7, 0.8);

/// Errors that can occur while loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid sphere {index}: radius must be positive and finite, got {radius}")]
    InvalidSphere { index: usize, radius: f32 },

    #[error("Invalid light {index}: intensity must be non-negative and finite, got {intensity}")]
    InvalidLight { index: usize, intensity: f32 },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

fn default_background() -> Color {
    DEFAULT_BACKGROUND
}

/// A renderable scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Primitives, tested in order
    pub objects: Vec<Primitive>,

    /// Point lights used for shading
    #[serde(default)]
    pub lights: Vec<Light>,

    /// Color for rays that miss every primitive
    #[serde(default = "default_background")]
    pub background: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND)
    }
}

impl Scene {
    /// Create an empty scene with the given background.
    pub fn new(background: Color) -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            background,
        }
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, object: impl Into<Primitive>) -> &mut Self {
        self.objects.push(object.into());
        self
    }

    /// Add a sphere to the scene.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32) -> &mut Self {
        self.add(Sphere::new(center, radius))
    }

    /// Add a point light to the scene.
    pub fn add_light(&mut self, position: Vec3, intensity: f32) -> &mut Self {
        self.lights.push(Light::new(position, intensity));
        self
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the nearest hit along `ray` closer than [`MAX_HIT_DISTANCE`].
    ///
    /// On equal distances the primitive that comes first in `objects` wins.
    pub fn hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.hit_within(ray, Interval::new(0.0, MAX_HIT_DISTANCE))
    }

    /// Find the nearest hit strictly inside `ray_t`.
    pub fn hit_within(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }

    /// Parse a scene from a JSON string and validate it.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        let scene: Scene = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Load a scene from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> SceneResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let scene = Self::from_json_str(&content)?;

        debug!(
            "Loaded scene {}: {} objects, {} lights",
            path.display(),
            scene.objects.len(),
            scene.lights.len()
        );
        Ok(scene)
    }

    /// Check that every sphere has a positive radius and every light a
    /// non-negative intensity.
    ///
    /// Runs on load and again at the start of every render.
    pub fn validate(&self) -> SceneResult<()> {
        for (index, object) in self.objects.iter().enumerate() {
            match object {
                Primitive::Sphere(sphere) => {
                    let radius = sphere.radius();
                    if !(radius.is_finite() && radius > 0.0) {
                        return Err(SceneError::InvalidSphere { index, radius });
                    }
                }
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            if !(light.intensity.is_finite() && light.intensity >= 0.0) {
                return Err(SceneError::InvalidLight {
                    index,
                    intensity: light.intensity,
                });
            }
        }

        if self.lights.is_empty() && !self.objects.is_empty() {
            warn!("Scene has no lights; every surface will render black");
        }

        Ok(())
    }
}
