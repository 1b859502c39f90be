//! Ray-object intersection system.
//!
//! Defines the [`Surface`] trait for geometric primitives and the [`Scene`]
//! that holds them. The shader only talks to surfaces through this trait, so a
//! new primitive needs nothing beyond an implementation of it.

use glam::Vec3A;

use crate::interval::Interval;
use crate::material::{self, Material, RefractionModel};
use crate::ray::Ray;
use crate::vec3::{self, Color};

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) so scanlines can be traced in parallel.
pub trait Surface: Sync + Send {
    /// Ray parameter of the nearest intersection strictly inside `ray_t`.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<f32>;

    /// Outward surface normal at `r.at(t)`. Not normalized.
    fn normal_at(&self, r: &Ray, t: f32) -> Vec3A;

    /// Material of the surface.
    fn material(&self) -> &Material;

    /// Outward unit normal at `r.at(t)`.
    fn unit_normal_at(&self, r: &Ray, t: f32) -> Vec3A {
        vec3::unit_vector(self.normal_at(r, t))
    }

    /// Base color, 0-255 per channel.
    fn color(&self) -> Color {
        self.material().base_color()
    }

    /// Roughness in [0, 1].
    fn roughness(&self) -> f32 {
        self.material().roughness
    }

    /// Transparency in [0, 1].
    fn transparency(&self) -> f32 {
        self.material().transparency
    }

    /// Index of refraction of the material.
    fn refraction_index(&self) -> f32 {
        self.material().refraction_index
    }

    /// Direction of a ray leaving the surface after refraction.
    ///
    /// Only meaningful for transparent surfaces. With
    /// [`RefractionModel::Reference`] the result may not be physically valid.
    fn refract(&self, incoming: Vec3A, normal: Vec3A, hit_front: bool, model: RefractionModel) -> Vec3A {
        material::refract(incoming, normal, hit_front, self.refraction_index(), model)
    }
}

/// Closest intersection found by [`Scene::closest_hit`].
#[derive(Clone, Copy)]
pub struct Hit<'a> {
    /// Surface that was struck
    pub surface: &'a dyn Surface,
    /// Ray parameter of the intersection
    pub t: f32,
}

/// Collection of objects forming a scene.
///
/// Uses linear search for intersection testing. Supports polymorphic
/// objects through `Box<dyn Surface>`.
#[derive(Default)]
pub struct Scene {
    /// Boxed surfaces, in insertion order
    pub surfaces: Vec<Box<dyn Surface>>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene.
    pub fn add(&mut self, surface: Box<dyn Surface>) {
        self.surfaces.push(surface);
    }

    /// Number of surfaces in the scene.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// True when the scene has no surfaces.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Nearest surface hit by `r` within `ray_t`.
    ///
    /// The upper bound shrinks to each accepted hit, so a later surface only
    /// wins if it is strictly closer than everything seen before it.
    pub fn closest_hit(&self, r: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        let mut window = ray_t;
        let mut closest = None;

        for surface in &self.surfaces {
            if let Some(t) = surface.hit(r, window) {
                window = window.with_max(t);
                closest = Some(Hit {
                    surface: surface.as_ref(),
                    t,
                });
            }
        }

        closest
    }
}

impl FromIterator<Box<dyn Surface>> for Scene {
    fn from_iter<I: IntoIterator<Item = Box<dyn Surface>>>(iter: I) -> Self {
        Self {
            surfaces: iter.into_iter().collect(),
        }
    }
}
