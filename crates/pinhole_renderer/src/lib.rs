//! Pinhole Renderer - CPU Ray Casting
//!
//! Casts one ray per pixel from a pinhole camera, resolves the nearest
//! sphere hit and shades it with Lambertian diffuse lighting from a set of
//! point lights. Pixels are rendered in parallel buckets with rayon.

mod bucket;
mod camera;
mod framebuffer;
mod hittable;
mod light;
mod material;
mod output;
mod renderer;
mod scene;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use framebuffer::Framebuffer;
pub use hittable::{HitRecord, Hittable, Primitive};
pub use light::{diffuse_intensity, Light};
pub use material::{Color, Lambertian, Material, DEFAULT_ALBEDO};
pub use output::{
    color_to_rgb, save_image, save_ppm, write_ppm, OutputError, OutputResult,
};
pub use renderer::{
    cast_ray, render, render_pixel, RenderConfig, RenderError, RenderResult,
};
pub use scene::{Scene, SceneError, SceneResult, DEFAULT_BACKGROUND, MAX_HIT_DISTANCE};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from pinhole_math
pub use pinhole_math::{Interval, Ray, Vec3, Vec3Ext};
