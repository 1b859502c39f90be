//! Sphere primitive for ray tracing.
//!
//! Implements ray-sphere intersection using the half-b form of the quadratic formula.

use std::sync::Arc;

use glam::Vec3A;

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::surface::Surface;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere (always non-negative).
    ///
    /// Negative radius values are clamped to 0.0 in the constructor.
    pub radius: f32,

    /// Material, possibly shared with other surfaces.
    pub material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Vec3A, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Surface for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<f32> {
        // Vector from sphere center to ray origin
        let oc = r.origin - self.center;

        let a = r.direction.length_squared();
        let half_b = oc.dot(r.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let near = (-half_b - sqrtd) / a;
        if ray_t.surrounds(near) {
            return Some(near);
        }
        let far = (-half_b + sqrtd) / a;
        if ray_t.surrounds(far) {
            return Some(far);
        }
        None
    }

    fn normal_at(&self, r: &Ray, t: f32) -> Vec3A {
        r.at(t) - self.center
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit_sphere(center: Vec3A, radius: f32) -> Sphere {
        Sphere::new(center, radius, Arc::new(Material::diffuse([128, 128, 128])))
    }

    #[test]
    fn ray_at_center_hits_front_surface() {
        let s = unit_sphere(Vec3A::new(0.0, 0.0, -5.0), 1.5);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let t = s.hit(&r, Interval::HIT_WINDOW).unwrap();
        assert_abs_diff_eq!(t, 5.0 - 1.5, epsilon = 1e-5);
    }

    #[test]
    fn non_unit_direction_is_accounted_for() {
        let s = unit_sphere(Vec3A::new(0.0, 0.0, -5.0), 1.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -4.0));
        let t = s.hit(&r, Interval::HIT_WINDOW).unwrap();
        assert_abs_diff_eq!(r.at(t), Vec3A::new(0.0, 0.0, -4.0), epsilon = 1e-5);
    }

    #[test]
    fn offset_ray_misses() {
        let s = unit_sphere(Vec3A::new(0.0, 0.0, -5.0), 1.0);
        let r = Ray::new(Vec3A::new(1.01, 0.0, 0.0), Vec3A::new(0.0, 0.0, -1.0));
        assert!(s.hit(&r, Interval::HIT_WINDOW).is_none());
    }

    #[test]
    fn tangent_ray_has_single_root() {
        let s = unit_sphere(Vec3A::new(0.0, 0.0, -5.0), 1.0);
        let r = Ray::new(Vec3A::new(1.0, 0.0, 0.0), Vec3A::new(0.0, 0.0, -1.0));

        let oc = r.origin - s.center;
        let half_b = oc.dot(r.direction);
        let disc = half_b * half_b - r.direction.length_squared() * (oc.length_squared() - 1.0);
        assert_eq!(disc, 0.0);

        let t = s.hit(&r, Interval::HIT_WINDOW).unwrap();
        assert_abs_diff_eq!(t, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn origin_inside_takes_far_root() {
        let s = unit_sphere(Vec3A::ZERO, 2.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::X);
        let t = s.hit(&r, Interval::HIT_WINDOW).unwrap();
        assert_abs_diff_eq!(t, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn sphere_behind_ray_is_rejected() {
        let s = unit_sphere(Vec3A::new(0.0, 0.0, 5.0), 1.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(s.hit(&r, Interval::HIT_WINDOW).is_none());
    }

    #[test]
    fn hit_beyond_window_is_rejected() {
        let s = unit_sphere(Vec3A::new(0.0, 0.0, -5.0), 1.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(s.hit(&r, Interval::HIT_WINDOW.with_max(3.0)).is_none());
    }

    #[test]
    fn normal_points_outward() {
        let s = unit_sphere(Vec3A::new(0.0, 0.0, -5.0), 2.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let t = s.hit(&r, Interval::HIT_WINDOW).unwrap();
        assert_abs_diff_eq!(s.normal_at(&r, t), Vec3A::new(0.0, 0.0, 2.0), epsilon = 1e-5);
        assert_abs_diff_eq!(s.unit_normal_at(&r, t), Vec3A::Z, epsilon = 1e-6);
    }

    #[test]
    fn negative_radius_is_clamped() {
        assert_eq!(unit_sphere(Vec3A::ZERO, -3.0).radius, 0.0);
    }
}
