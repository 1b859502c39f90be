use std::sync::Arc;

use glam::Vec3A;
use image::{Rgba, RgbaImage};

use spherecast::config::RenderConfig;
use spherecast::random::{ChaChaSource, Lfsr16};
use spherecast::sampler::to_rgba;
use spherecast::scene::{build_scene, demo_scene};
use spherecast::shading::{sky_color, Composition};
use spherecast::{Camera, Material, Ray, Sampler, SamplerSettings, Scene, Shader, ShadingOptions, Sphere, Surface};

fn settings(samples_per_pixel: u32) -> SamplerSettings {
    SamplerSettings {
        samples_per_pixel,
        max_bounces: 16,
        show_progress: false,
    }
}

fn render(scene: &Scene, camera: &Camera, options: ShadingOptions, samples: u32, seed: u64) -> RgbaImage {
    let sampler = Sampler::new(camera, Shader::new(scene, options), settings(samples));
    let mut image = RgbaImage::new(camera.image_width, camera.image_height);
    sampler
        .render_into(&mut image, |row| ChaChaSource::for_stream(seed, u64::from(row)))
        .unwrap();
    image
}

#[test]
fn empty_scene_is_pure_sky_for_any_sample_count() {
    let scene = Scene::new();
    let camera = Camera::new(Vec3A::ZERO, 1.0, 1.0, 32, 18);

    for samples in [1, 4] {
        let image = render(&scene, &camera, ShadingOptions::default(), samples, 11);
        for (x, y, pixel) in image.enumerate_pixels() {
            let expected = to_rgba(sky_color(&camera.ray_toward_pixel(x, y, 0.0, 0.0)));
            // Jitter only moves the ray inside its pixel
            for c in 0..3 {
                assert!(pixel[c].abs_diff(expected[c]) <= 3, "({x}, {y}) {pixel:?} vs {expected:?}");
            }
            assert_eq!(pixel[3], 255);
        }
    }
}

#[test]
fn opaque_black_sphere_renders_black_in_front_of_camera() {
    let material = Arc::new(Material::new([0, 0, 0], 0.0, 0.0, 1.0));
    let sphere: Box<dyn Surface> = Box::new(Sphere::new(Vec3A::new(0.0, 0.0, -2.0), 0.5, material));
    let scene: Scene = [sphere].into_iter().collect();
    let camera = Camera::new(Vec3A::ZERO, 1.0, 1.0, 9, 9);

    let image = render(&scene, &camera, ShadingOptions::default(), 1, 0);
    assert_eq!(*image.get_pixel(4, 4), Rgba([0, 0, 0, 255]));
    // The corner looks past the sphere at the sky
    assert_ne!(*image.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
}

#[test]
fn grey_diffuse_sphere_brightens_without_final_rescale() {
    let material = Arc::new(Material::diffuse([128, 128, 128]));
    let sphere: Box<dyn Surface> = Box::new(Sphere::new(Vec3A::new(0.0, 0.0, -2.0), 0.5, material));
    let scene: Scene = [sphere].into_iter().collect();
    let camera = Camera::new(Vec3A::ZERO, 1.0, 1.0, 9, 9);

    let reference = render(&scene, &camera, ShadingOptions::default(), 4, 3);
    let unscaled = render(
        &scene,
        &camera,
        ShadingOptions {
            composition: Composition::Unscaled,
            ..ShadingOptions::default()
        },
        4,
        3,
    );

    let a = reference.get_pixel(4, 4);
    let b = unscaled.get_pixel(4, 4);
    assert!(b[0] > a[0], "{b:?} should be brighter than {a:?}");
}

#[test]
fn demo_scene_render_is_reproducible() {
    let scene = demo_scene();
    let camera = Camera::new(Vec3A::ZERO, 1.0, 1.0, 24, 14);

    let first = render(&scene, &camera, ShadingOptions::default(), 2, 99);
    let second = render(&scene, &camera, ShadingOptions::default(), 2, 99);
    assert_eq!(first, second);
    assert!(first.pixels().all(|p| p[3] == 255));
}

#[test]
fn lfsr_rows_render_reproducibly() {
    let scene = demo_scene();
    let camera = Camera::new(Vec3A::ZERO, 1.0, 1.0, 12, 8);
    let sampler = Sampler::new(&camera, Shader::new(&scene, ShadingOptions::default()), settings(2));

    let lfsr = Lfsr16::new(0xACE1).unwrap();
    let mut with_lfsr = RgbaImage::new(12, 8);
    sampler.render_into(&mut with_lfsr, |row| lfsr.for_row(row, 8)).unwrap();

    let mut again = RgbaImage::new(12, 8);
    sampler.render_into(&mut again, |row| lfsr.for_row(row, 8)).unwrap();
    assert_eq!(with_lfsr, again);
}

#[test]
fn config_scene_renders_like_hand_built_scene() {
    let config = RenderConfig::from_toml(
        r#"
        width = 10
        height = 6

        [scene.materials.gold]
        color = [255, 200, 60]
        roughness = 0.2

        [[scene.spheres]]
        center = [0.0, 0.0, -2.0]
        radius = 0.6
        material = "gold"
        "#,
    )
    .unwrap();
    let from_config = build_scene(config.scene.as_ref().unwrap()).unwrap();

    let by_hand: Scene = [Box::new(Sphere::new(
        Vec3A::new(0.0, 0.0, -2.0),
        0.6,
        Arc::new(Material::metal([255, 200, 60], 0.2)),
    )) as Box<dyn Surface>]
    .into_iter()
    .collect();

    let camera = config.camera();
    let a = render(&from_config, &camera, config.shading_options(), 3, 5);
    let b = render(&by_hand, &camera, config.shading_options(), 3, 5);
    assert_eq!(a, b);
}

#[test]
fn bounce_budget_zero_is_black_everywhere() {
    let scene = demo_scene();
    let shader = Shader::new(&scene, ShadingOptions::default());
    let mut rng = ChaChaSource::seeded(0);
    for dir in [Vec3A::X, Vec3A::Y, -Vec3A::Y, -Vec3A::Z, Vec3A::new(0.2, -0.3, -1.0)] {
        assert_eq!(shader.ray_color(&Ray::new(Vec3A::ZERO, dir), 0, &mut rng), Vec3A::ZERO);
    }
}
