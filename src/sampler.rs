//! Per-pixel multi-sampling and frame rendering.

use image::{Rgba, RgbaImage};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::random::RandomSource;
use crate::shading::Shader;
use crate::vec3::Color;

/// Sampling parameters for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerSettings {
    /// Number of random samples for each pixel (for anti-aliasing)
    pub samples_per_pixel: u32,
    /// Bounce budget handed to every primary ray
    pub max_bounces: u32,
    /// Draw a progress bar while rendering a frame
    pub show_progress: bool,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            samples_per_pixel: 8,
            max_bounces: 16,
            show_progress: false,
        }
    }
}

/// Turns pixel coordinates into final colors.
pub struct Sampler<'a> {
    camera: &'a Camera,
    shader: Shader<'a>,
    settings: SamplerSettings,
}

impl<'a> Sampler<'a> {
    /// Sampler for `camera` and `shader`. A sample count of zero is raised to one.
    pub fn new(camera: &'a Camera, shader: Shader<'a>, settings: SamplerSettings) -> Self {
        let settings = SamplerSettings {
            samples_per_pixel: settings.samples_per_pixel.max(1),
            ..settings
        };
        Self {
            camera,
            shader,
            settings,
        }
    }

    /// Effective settings.
    pub fn settings(&self) -> SamplerSettings {
        self.settings
    }

    /// Average color of pixel (x, y) before quantization.
    ///
    /// With more than one sample, each sample shifts the ray by the same random
    /// offset in [-0.5, 0.5) on both axes. A single sample goes through the
    /// pixel center.
    pub fn sample_color<R: RandomSource + ?Sized>(&self, x: u32, y: u32, rng: &mut R) -> Color {
        let samples = self.settings.samples_per_pixel;
        let mut pixel_color = Color::ZERO;

        for _ in 0..samples {
            let jitter = if samples > 1 { rng.next_f32() - 0.5 } else { 0.0 };
            let r = self.camera.ray_toward_pixel(x, y, jitter, jitter);
            pixel_color += self.shader.ray_color(&r, self.settings.max_bounces, rng);
        }

        pixel_color / samples as f32
    }

    /// Final 8-bit color of pixel (x, y).
    pub fn sample_pixel<R: RandomSource + ?Sized>(&self, x: u32, y: u32, rng: &mut R) -> Rgba<u8> {
        to_rgba(self.sample_color(x, y, rng))
    }

    /// Render every pixel into `target`.
    ///
    /// Scanlines are traced in parallel; `make_rng(row)` builds the random
    /// source for each one, so the output only depends on what it returns.
    /// The buffer must match the camera resolution.
    pub fn render_into<R, F>(&self, target: &mut RgbaImage, make_rng: F) -> Result<()>
    where
        R: RandomSource,
        F: Fn(u32) -> R + Sync,
    {
        let expected = (self.camera.image_width, self.camera.image_height);
        if target.dimensions() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: target.dimensions(),
            });
        }

        let (width, height) = expected;
        info!(
            "Rendering {}x{} at {} samples per pixel, {} bounces, on {} threads",
            width,
            height,
            self.settings.samples_per_pixel,
            self.settings.max_bounces,
            rayon::current_num_threads()
        );
        debug!(
            "Scene has {} surfaces, shading with {:?}",
            self.shader.scene().len(),
            self.shader.options()
        );

        let pb = self.progress_bar(height);
        let start = std::time::Instant::now();

        let row_len = width as usize * 4;
        target
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(row, pixels)| {
                let y = row as u32;
                let mut rng = make_rng(y);
                for (x, pixel) in pixels.chunks_exact_mut(4).enumerate() {
                    let Rgba(channels) = self.sample_pixel(x as u32, y, &mut rng);
                    pixel.copy_from_slice(&channels);
                }
                pb.inc(1);
            });

        pb.finish_and_clear();
        info!("Frame rendered in {:.2?}", start.elapsed());
        Ok(())
    }

    fn progress_bar(&self, rows: u32) -> ProgressBar {
        if !self.settings.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(u64::from(rows));
        if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} rows ETA: {eta}") {
            pb.set_style(style);
        }
        pb
    }
}

/// Clamp channels into the displayable range and truncate to bytes. Alpha is opaque.
pub fn to_rgba(color: Color) -> Rgba<u8> {
    let channel = |c: f32| Interval::CHANNEL.clamp(c) as u8;
    Rgba([channel(color.x), channel(color.y), channel(color.z), u8::MAX])
}
