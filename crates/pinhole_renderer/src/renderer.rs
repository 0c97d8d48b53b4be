//! Core ray casting renderer.
//!
//! One primary ray per pixel:
//! - Nearest-hit query against the scene
//! - Lambertian shading from the scene's point lights
//! - Background color on a miss
//!
//! Buckets are traced in parallel with rayon and stitched into a
//! framebuffer afterwards.

use std::f32::consts::{FRAC_PI_2, PI};
use std::time::Instant;

use log::{debug, info};
use pinhole_math::Vec3;
use rayon::prelude::*;
use thiserror::Error;

use crate::{
    generate_buckets, render_bucket, BucketResult, Camera, Color, Framebuffer, Ray, Scene,
    SceneError, DEFAULT_BUCKET_SIZE,
};

/// Errors that can occur while rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render config: {0}")]
    InvalidConfig(String),

    #[error("Invalid scene: {0}")]
    Scene(#[from] SceneError),

    #[error("Failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Camera position
    pub origin: Vec3,
    /// Edge length of a render bucket in pixels
    pub bucket_size: u32,
    /// Worker threads; `None` uses rayon's global pool
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            fov: FRAC_PI_2,
            origin: Vec3::ZERO,
            bucket_size: DEFAULT_BUCKET_SIZE,
            threads: None,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the vertical field of view in radians.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Set the camera position.
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// Set the bucket edge length.
    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    /// Render on a dedicated pool of `threads` workers.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Check the config describes a renderable image.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.fov > 0.0 && self.fov < PI) {
            return Err(RenderError::InvalidConfig(format!(
                "fov must be in (0, pi) radians, got {}",
                self.fov
            )));
        }
        if self.bucket_size == 0 {
            return Err(RenderError::InvalidConfig(
                "bucket size must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Camera described by this config.
    pub fn camera(&self) -> Camera {
        Camera::new(self.width, self.height, self.fov).with_origin(self.origin)
    }
}

/// Compute the color seen along a ray.
pub fn cast_ray(ray: &Ray, scene: &Scene) -> Color {
    match scene.hit(ray) {
        Some(rec) => rec.material.shade(&rec, &scene.lights),
        None => scene.background,
    }
}

/// Render a single pixel.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32) -> Color {
    cast_ray(&camera.get_ray(x, y), scene)
}

/// Render the entire scene to a framebuffer.
///
/// Every bucket is traced independently; the scene is only read.
/// Scenes built in code are checked here the same way loaded ones are.
pub fn render(scene: &Scene, config: &RenderConfig) -> RenderResult<Framebuffer> {
    config.validate()?;
    scene.validate()?;

    let camera = config.camera();
    let buckets = generate_buckets(config.width, config.height, config.bucket_size);

    info!(
        "Rendering {}x{} ({} buckets, {} objects, {} lights)",
        config.width,
        config.height,
        buckets.len(),
        scene.len(),
        scene.lights.len()
    );

    let start = Instant::now();
    let trace = || -> Vec<BucketResult> {
        buckets
            .par_iter()
            .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, &camera, scene)))
            .collect()
    };

    let results = match config.threads {
        Some(threads) => {
            debug!("Using dedicated pool with {} threads", threads);
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?
                .install(trace)
        }
        None => trace(),
    };

    let mut image = Framebuffer::new(config.width, config.height);
    for result in &results {
        image.write_bucket(result);
    }

    info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
