//! Surface materials.
//!
//! A material is plain data: an 8-bit base color plus roughness, transparency
//! and refraction index scalars. All light transport lives in the shader; the
//! only behavior here is the refraction kernel, which depends on nothing but
//! the refraction index.

use glam::Vec3A;
use serde::Deserialize;

use crate::vec3::{self, Color};

/// Material properties shared by every surface that references it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Material {
    /// Base color, one byte per channel.
    pub color: [u8; 3],
    /// 0.0 = mirror, 1.0 = fully diffuse.
    #[serde(default)]
    pub roughness: f32,
    /// Share of the color taken from light refracted through the surface.
    #[serde(default)]
    pub transparency: f32,
    /// Index of refraction (1.0 = air, 1.5 = glass). Only used when transparent.
    #[serde(default = "default_refraction_index")]
    pub refraction_index: f32,
}

fn default_refraction_index() -> f32 {
    1.0
}

impl Material {
    /// Create a material, clamping roughness and transparency into [0, 1].
    pub fn new(color: [u8; 3], roughness: f32, transparency: f32, refraction_index: f32) -> Self {
        Self {
            color,
            roughness: roughness.clamp(0.0, 1.0),
            transparency: transparency.clamp(0.0, 1.0),
            refraction_index,
        }
    }

    /// Fully rough opaque material.
    pub fn diffuse(color: [u8; 3]) -> Self {
        Self::new(color, 1.0, 0.0, 1.0)
    }

    /// Opaque reflective material with the given roughness.
    pub fn metal(color: [u8; 3], roughness: f32) -> Self {
        Self::new(color, roughness, 0.0, 1.0)
    }

    /// Fully transparent, smooth dielectric.
    pub fn glass(color: [u8; 3], refraction_index: f32) -> Self {
        Self::new(color, 0.0, 1.0, refraction_index)
    }

    /// Base color as floating point channels on a 0-255 scale.
    pub fn base_color(&self) -> Color {
        let [r, g, b] = self.color;
        Vec3A::new(f32::from(r), f32::from(g), f32::from(b))
    }
}

/// Which refraction kernel transparent surfaces use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefractionModel {
    /// Ratio `n` when entering, `1/n` when leaving, with `|1 - sin²|` under the
    /// square root so total internal reflection is never detected.
    #[default]
    Reference,
    /// Snell's law with a mirror bounce on total internal reflection.
    Physical,
}

/// Bend `incoming` through a surface with outward `normal`.
///
/// `hit_front` is true when the ray arrives from outside the surface.
pub fn refract(
    incoming: Vec3A,
    normal: Vec3A,
    hit_front: bool,
    refraction_index: f32,
    model: RefractionModel,
) -> Vec3A {
    match model {
        RefractionModel::Reference => refract_reference(incoming, normal, hit_front, refraction_index),
        RefractionModel::Physical => refract_physical(incoming, normal, hit_front, refraction_index),
    }
}

fn refract_reference(incoming: Vec3A, normal: Vec3A, hit_front: bool, refraction_index: f32) -> Vec3A {
    let (r_out_perp, r_out_parallel) = reference_components(incoming, normal, hit_front, refraction_index);
    r_out_perp + r_out_parallel
}

/// Perpendicular and parallel parts of the reference refraction.
fn reference_components(
    incoming: Vec3A,
    normal: Vec3A,
    hit_front: bool,
    refraction_index: f32,
) -> (Vec3A, Vec3A) {
    let cos_theta = vec3::unit_vector(incoming)
        .dot(vec3::unit_vector(normal))
        .min(1.0);
    let ratio = if hit_front {
        refraction_index
    } else {
        1.0 / refraction_index
    };

    let r_out_perp = ratio * (incoming + cos_theta * normal);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * normal;
    (r_out_perp, r_out_parallel)
}

fn refract_physical(incoming: Vec3A, normal: Vec3A, hit_front: bool, refraction_index: f32) -> Vec3A {
    // Work with a normal that faces the incoming ray
    let (facing, eta) = if hit_front {
        (normal, 1.0 / refraction_index)
    } else {
        (-normal, refraction_index)
    };

    let unit_direction = vec3::unit_vector(incoming);
    let cos_theta = (-unit_direction).dot(facing).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();

    if eta * sin_theta > 1.0 {
        return vec3::reflect(unit_direction, facing);
    }

    let r_out_perp = eta * (unit_direction + cos_theta * facing);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * facing;
    r_out_perp + r_out_parallel
}
