//! Pinhole camera for primary ray generation.

use crate::Ray;
use pinhole_math::Vec3;

/// Fixed-orientation pinhole camera looking down -Z with +Y up.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    origin: Vec3,
    fov: f32, // Vertical field of view in radians

    // Cached computed values
    scale_x: f32,
    scale_y: f32,
}

impl Camera {
    /// Create a camera at the world origin.
    pub fn new(image_width: u32, image_height: u32, fov: f32) -> Self {
        let half_height = (fov / 2.0).tan();
        let aspect = image_width as f32 / image_height as f32;

        Self {
            image_width,
            image_height,
            origin: Vec3::ZERO,
            fov,
            scale_x: half_height * aspect,
            scale_y: half_height,
        }
    }

    /// Set the point every ray starts from.
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Generate the ray through the center of pixel (x, y).
    ///
    /// `x` is the column and `y` the row; row 0 is the top of the image.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let ndc_x = 2.0 * (x as f32 + 0.5) / self.image_width as f32 - 1.0;
        let ndc_y = 2.0 * (y as f32 + 0.5) / self.image_height as f32 - 1.0;

        let direction = Vec3::new(ndc_x * self.scale_x, -ndc_y * self.scale_y, -1.0);
        Ray::new(self.origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_center_ray_points_forward() {
        // Odd dimensions put a pixel center exactly on the optical axis
        let camera = Camera::new(101, 51, FRAC_PI_2);
        let ray = camera.get_ray(50, 25);

        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!((ray.direction() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_ray_directions_are_unit() {
        let camera = Camera::new(64, 48, FRAC_PI_2);
        for (x, y) in [(0, 0), (63, 0), (0, 47), (63, 47), (20, 30)] {
            let d = camera.get_ray(x, y).direction();
            assert!((d.length() - 1.0).abs() < 1e-5);
            assert!(d.z < 0.0);
        }
    }

    #[test]
    fn test_corner_orientation() {
        let camera = Camera::new(64, 48, FRAC_PI_2);

        // Top-left pixel looks left and up
        let d = camera.get_ray(0, 0).direction();
        assert!(d.x < 0.0 && d.y > 0.0);

        // Bottom-right pixel looks right and down
        let d = camera.get_ray(63, 47).direction();
        assert!(d.x > 0.0 && d.y < 0.0);
    }

    #[test]
    fn test_fov_and_aspect_scaling() {
        // 90 degree fov: tan(fov/2) = 1, so the unnormalized edge of the
        // image plane sits at y = 1 and x = aspect.
        let camera = Camera::new(400, 200, FRAC_PI_2);

        let d = camera.get_ray(399, 100).direction();
        let x_over_z = d.x / -d.z;
        let expected = (2.0 * 399.5 / 400.0 - 1.0) * 2.0;
        assert!((x_over_z - expected).abs() < 1e-4);

        let d = camera.get_ray(200, 0).direction();
        let y_over_z = d.y / -d.z;
        let expected = -(2.0 * 0.5 / 200.0 - 1.0);
        assert!((y_over_z - expected).abs() < 1e-4);
    }

    #[test]
    fn test_with_origin() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let camera = Camera::new(10, 10, FRAC_PI_2).with_origin(origin);
        assert_eq!(camera.get_ray(3, 7).origin(), origin);
    }
}
