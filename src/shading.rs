//! Recursive color resolution.
//!
//! A ray that misses everything takes the sky gradient. A ray that hits a
//! surface blends three contributions: the surface's own color, light arriving
//! along a reflected (and roughness-scattered) ray, and light arriving along a
//! refracted ray. Each bounced ray spends one unit of the bounce budget.

use glam::Vec3A;
use serde::Deserialize;

use crate::interval::Interval;
use crate::material::RefractionModel;
use crate::random::RandomSource;
use crate::ray::Ray;
use crate::surface::{Hit, Scene};
use crate::vec3::{self, Color, BLACK, SKY, WHITE};

/// How the three color contributions of a hit are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Composition {
    /// Weighted sum scaled once more by `reflectivity + transparency`.
    ///
    /// Opaque surfaces with zero reflectivity come out black under this rule.
    #[default]
    Reference,
    /// Weighted sum without the final rescale.
    Unscaled,
}

/// Knobs that change how hits are shaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShadingOptions {
    /// Contribution blending rule
    pub composition: Composition,
    /// Refraction kernel for transparent surfaces
    pub refraction: RefractionModel,
    /// Truncate every bounce's color to whole 8-bit channel values
    pub quantize_bounces: bool,
}

/// Resolves rays into colors against a read-only scene.
#[derive(Clone, Copy)]
pub struct Shader<'a> {
    scene: &'a Scene,
    options: ShadingOptions,
}

impl<'a> Shader<'a> {
    /// Shader over `scene`.
    pub fn new(scene: &'a Scene, options: ShadingOptions) -> Self {
        Self { scene, options }
    }

    /// Scene being shaded.
    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    /// Active shading options.
    pub fn options(&self) -> ShadingOptions {
        self.options
    }

    /// Color seen along `r`, following at most `bounces` rays.
    pub fn ray_color<R: RandomSource + ?Sized>(&self, r: &Ray, bounces: u32, rng: &mut R) -> Color {
        // Out of budget, no more light is gathered
        if bounces < 1 {
            return BLACK;
        }

        let color = match self.scene.closest_hit(r, Interval::HIT_WINDOW) {
            Some(hit) => self.surface_color(r, hit, bounces, rng),
            None => sky_color(r),
        };

        if self.options.quantize_bounces {
            quantize(color)
        } else {
            color
        }
    }

    fn surface_color<R: RandomSource + ?Sized>(
        &self,
        r: &Ray,
        hit: Hit<'_>,
        bounces: u32,
        rng: &mut R,
    ) -> Color {
        let surface = hit.surface;
        let hit_point = r.at(hit.t);
        let normal = surface.unit_normal_at(r, hit.t);

        let base = surface.color();
        let tint = vec3::tint(base);
        let transparency = surface.transparency();

        let mut refracted = BLACK;
        if transparency > 0.0 {
            let hit_front = r.hits_front(normal);
            let direction = vec3::unit_vector(surface.refract(
                r.direction,
                normal,
                hit_front,
                self.options.refraction,
            ));
            refracted = self.ray_color(&Ray::new(hit_point, direction), bounces - 1, rng) * tint;
        }

        // Transparent surfaces give up part of their reflective share
        let reflectivity = tint.element_sum() / 3.0 * (1.0 - transparency);

        let mut reflected = BLACK;
        if reflectivity > 0.0 {
            let roughness = surface.roughness();
            let scatter = if roughness > 0.0 { rng.unit_vector() } else { None };
            let direction = bounce_direction(vec3::reflect(r.direction, normal), scatter, normal, roughness);

            reflected = self.ray_color(&Ray::new(hit_point, direction), bounces - 1, rng) * tint;
        }

        let composed = base * (1.0 - reflectivity - transparency)
            + reflected * reflectivity
            + refracted * transparency;

        match self.options.composition {
            Composition::Reference => composed * (reflectivity + transparency),
            Composition::Unscaled => composed,
        }
    }
}

/// Mirror direction `reflected` roughened by `scatter`.
///
/// The scatter vector is flipped into the hemisphere of `normal` and weighted
/// by `roughness`. When it cancels the reflection the ray leaves along `normal`.
fn bounce_direction(reflected: Vec3A, scatter: Option<Vec3A>, normal: Vec3A, roughness: f32) -> Vec3A {
    let mut direction = reflected;
    if let Some(scatter) = scatter {
        let scatter = if vec3::same_hemisphere(scatter, normal) {
            scatter
        } else {
            -scatter
        };
        direction += scatter * roughness;
    }
    direction += normal * (1.0 - roughness);

    if direction.try_normalize().is_some() {
        direction
    } else {
        normal
    }
}

/// Whole channel values in [0, 255], rounded toward zero.
fn quantize(color: Color) -> Color {
    let channel = |c: f32| Interval::CHANNEL.clamp(c).floor();
    Color::new(channel(color.x), channel(color.y), channel(color.z))
}

/// Background color for a ray that hits nothing.
///
/// Blends from [`WHITE`] (pointing straight down) to [`SKY`] (straight up).
pub fn sky_color(r: &Ray) -> Color {
    let unit_direction = vec3::unit_vector(r.direction);
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * WHITE + a * SKY
}
