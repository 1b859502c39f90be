//! Scene construction: the built-in demo scene and scenes from configuration.

use std::collections::HashMap;
use std::sync::Arc;

use glam::Vec3A;
use log::debug;

use crate::config::SceneConfig;
use crate::error::{Error, Result};
use crate::material::Material;
use crate::sphere::Sphere;
use crate::surface::{Scene, Surface};

/// Ground plane, a glass ball and a few metal and diffuse spheres.
pub fn demo_scene() -> Scene {
    let matte_grey = Arc::new(Material::diffuse([128, 128, 128]));
    let metal = Arc::new(Material::metal([240, 240, 240], 0.0));
    let yellow_metal = Arc::new(Material::metal([255, 255, 128], 0.1));
    let dark_metal = Arc::new(Material::metal([96, 96, 128], 0.0));
    let diffuse_white = Arc::new(Material::diffuse([255, 255, 255]));
    let glass = Arc::new(Material::glass([255, 255, 255], 1.5));

    let sphere = |center: [f32; 3], radius: f32, material: &Arc<Material>| -> Box<dyn Surface> {
        Box::new(Sphere::new(Vec3A::from_array(center), radius, Arc::clone(material)))
    };

    let mut scene = Scene::new();
    scene.add(sphere([0.0, -100.5, -1.0], 100.0, &matte_grey));
    scene.add(sphere([0.0, 0.0, -2.0], 0.5, &glass));
    scene.add(sphere([-2.0, 0.5, -3.5], 1.0, &metal));
    scene.add(sphere([1.5, 0.0, -2.5], 0.5, &yellow_metal));
    scene.add(sphere([1.5, 3.5, -4.0], 3.0, &dark_metal));
    scene.add(sphere([0.0, -0.4, -1.45], 0.1, &diffuse_white));
    scene.add(sphere([0.0, 0.25, -5.0], 0.7, &matte_grey));
    scene
}

/// Build a scene from its configuration.
///
/// Each named material is created once and shared by every sphere that
/// names it. Roughness and transparency are clamped into [0, 1].
pub fn build_scene(config: &SceneConfig) -> Result<Scene> {
    let mut materials = HashMap::with_capacity(config.materials.len());
    for (name, m) in &config.materials {
        let material = Material::new(m.color, m.roughness, m.transparency, m.refraction_index);
        if material.transparency > 0.0 && material.refraction_index <= 0.0 {
            return Err(Error::InvalidRefractionIndex {
                name: name.clone(),
                value: material.refraction_index,
            });
        }
        materials.insert(name.as_str(), Arc::new(material));
    }

    let mut scene = Scene::new();
    for (index, s) in config.spheres.iter().enumerate() {
        let material = materials
            .get(s.material.as_str())
            .ok_or_else(|| Error::UnknownMaterial {
                index,
                name: s.material.clone(),
            })?;
        scene.add(Box::new(Sphere::new(
            Vec3A::from_array(s.center),
            s.radius,
            Arc::clone(material),
        )));
    }

    debug!(
        "Built scene with {} spheres sharing {} materials",
        scene.len(),
        materials.len()
    );
    Ok(scene)
}
