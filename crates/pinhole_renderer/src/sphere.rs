//! Sphere primitive for ray casting.

use crate::{
    hittable::{HitRecord, Hittable},
    Lambertian, Ray,
};
use pinhole_math::{Interval, Vec3, Vec3Ext};
use serde::{Deserialize, Serialize};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    #[serde(default)]
    material: Lambertian,
}

impl Sphere {
    /// Create a new sphere with the default diffuse material.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self::with_material(center, radius, Lambertian::default())
    }

    /// Create a new sphere with an explicit material.
    ///
    /// Negative radii clamp to zero; [`Scene::validate`](crate::Scene::validate)
    /// rejects the result before rendering.
    pub fn with_material(center: Vec3, radius: f32, material: Lambertian) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Lambertian {
        &self.material
    }

    /// Distance along `ray` to the near intersection, if it lies in front
    /// of the ray origin.
    ///
    /// Only the near root counts. When it is not positive (origin inside the
    /// sphere, or the sphere behind the origin) this reports a miss even if
    /// the far root is a forward hit. The ray direction must be unit length.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let l = self.center - ray.origin();
        let tca = l.dot(ray.direction());
        let d2 = l.dot(l) - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let t0 = tca - thc;
        if t0 <= 0.0 {
            return None;
        }

        Some(t0)
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, p: Vec3) -> Vec3 {
        (p - self.center).unit()
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let t = self.intersect(ray)?;
        if !ray_t.surrounds(t) {
            return None;
        }

        let p = ray.at(t);
        Some(HitRecord {
            t,
            p,
            normal: self.normal_at(p),
            material: &self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_sphere_hit_distance_through_center() {
        let center = Vec3::new(-3.0, 0.0, -16.0);
        let sphere = Sphere::new(center, 2.0);
        let origin = Vec3::new(0.5, 1.0, 0.0);

        let ray = Ray::new(origin, center - origin);
        let t = sphere.intersect(&ray).expect("ray aimed at center must hit");

        let expected = (center - origin).length() - 2.0;
        assert!((t - expected).abs() < EPS, "t={} expected={}", t, expected);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0);

        // Closest approach of the -Z axis to the center is 3 > 2
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(sphere.intersect(&ray).is_none());

        // Pointing away entirely
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin_is_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 10.0), 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        // d2 = 0 <= r2, but tca < 0: no reversed hit
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_origin_inside_sphere_is_miss() {
        // Far root is at t = 3, but only the near root (t = -1) counts
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        assert!(sphere.intersect(&ray).is_none());
        assert!(sphere.hit(&ray, Interval::new(f32::NEG_INFINITY, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_grazing_ray_hits() {
        let sphere = Sphere::new(Vec3::new(1.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let t = sphere.intersect(&ray).expect("tangent ray should hit");
        assert!((t - 5.0).abs() < EPS);
    }

    #[test]
    fn test_hit_record_normal() {
        let center = Vec3::new(0.0, 0.0, -4.0);
        let sphere = Sphere::new(center, 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.1, 0.2, -1.0));

        let rec = sphere
            .hit(&ray, Interval::new(0.0, f32::INFINITY))
            .expect("should hit");

        assert!((rec.normal.length() - 1.0).abs() < EPS);
        // Normal points away from the center
        assert!(rec.normal.dot(rec.p - center) > 0.0);
        // Hit point lies on the surface
        assert!(((rec.p - center).length() - 1.0).abs() < EPS);
        assert_eq!(rec.p, ray.at(rec.t));
    }

    #[test]
    fn test_hit_respects_interval() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        // Hit at t = 9
        assert!(sphere.hit(&ray, Interval::new(0.0, 9.5)).is_some());
        assert!(sphere.hit(&ray, Interval::new(0.0, 9.0)).is_none());
    }

    #[test]
    fn test_negative_radius_clamped() {
        let sphere = Sphere::new(Vec3::ZERO, -1.0);
        assert_eq!(sphere.radius(), 0.0);
    }
}
