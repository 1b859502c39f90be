//! Vector math used throughout the tracer.
//!
//! Vectors are `glam::Vec3A`, which already covers addition, subtraction,
//! scaling, dot/cross products and length. This module adds the handful of
//! helpers the shading code relies on, and the color constants.

use glam::Vec3A;

/// RGB color with channels on a 0-255 scale.
pub type Color = Vec3A;

/// Largest value a single 8-bit color channel can hold.
pub const MAX_CHANNEL: f32 = 255.0;

/// Top endpoint of the vertical sky blend.
pub const WHITE: Color = Vec3A::new(MAX_CHANNEL, MAX_CHANNEL, MAX_CHANNEL);

/// Sky endpoint of the vertical sky blend.
pub const SKY: Color = Vec3A::new(127.0, 192.0, MAX_CHANNEL);

/// Pure black, returned once the bounce budget runs out.
pub const BLACK: Color = Vec3A::ZERO;

/// Scale `v` to unit length.
///
/// This is `v / |v|` with no guard: a zero vector yields non-finite
/// components. Callers that can produce degenerate vectors should use
/// [`Vec3A::try_normalize`] instead.
pub fn unit_vector(v: Vec3A) -> Vec3A {
    v / v.length()
}

/// Mirror `v` about the unit normal `n`.
pub fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

/// True when `v` lies in the hemisphere around `n` (including the boundary plane).
pub fn same_hemisphere(v: Vec3A, n: Vec3A) -> bool {
    v.dot(n) >= 0.0
}

/// Channel values divided by [`MAX_CHANNEL`], used to tint bounced light.
pub fn tint(color: Color) -> Vec3A {
    color / MAX_CHANNEL
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unit_vector_has_length_one() {
        for v in [
            Vec3A::new(3.0, 4.0, 0.0),
            Vec3A::new(-0.001, 0.002, 0.0005),
            Vec3A::new(120.0, -45.0, 7.5),
        ] {
            assert_abs_diff_eq!(unit_vector(v).length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn unit_vector_is_scale_invariant() {
        let v = Vec3A::new(1.0, -2.0, 3.0);
        assert_abs_diff_eq!(unit_vector(v * 7.5), unit_vector(v), epsilon = 1e-6);
        assert_abs_diff_eq!(unit_vector(v * -0.25), -unit_vector(v), epsilon = 1e-6);
    }

    #[test]
    fn unit_vector_of_zero_is_not_finite() {
        assert!(!unit_vector(Vec3A::ZERO).is_finite());
    }

    #[test]
    fn cross_is_orthogonal() {
        let a = Vec3A::new(1.0, 2.0, 3.0);
        let b = Vec3A::new(-4.0, 0.5, 2.0);
        let c = a.cross(b);
        assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn reflect_flips_normal_component() {
        let r = reflect(Vec3A::new(1.0, -1.0, 0.0), Vec3A::Y);
        assert_eq!(r, Vec3A::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn hemisphere_check() {
        assert!(same_hemisphere(Vec3A::new(0.3, 0.1, 0.0), Vec3A::Y));
        assert!(same_hemisphere(Vec3A::X, Vec3A::Y));
        assert!(!same_hemisphere(Vec3A::new(0.0, -0.1, 1.0), Vec3A::Y));
    }
}
