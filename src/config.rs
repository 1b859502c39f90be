//! Render configuration loaded from TOML.
//!
//! Every field is optional; missing values fall back to [`RenderConfig::default`].
//!
//! ```toml
//! width = 320
//! height = 180
//! samples_per_pixel = 4
//! rng = "lfsr"
//! seed = 44257
//!
//! [scene.materials.glass]
//! color = [255, 255, 255]
//! transparency = 1.0
//! refraction_index = 1.5
//!
//! [[scene.spheres]]
//! center = [0.0, 0.0, -2.0]
//! radius = 0.5
//! material = "glass"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use glam::Vec3A;
use log::info;
use serde::Deserialize;

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::material::{Material, RefractionModel};
use crate::sampler::SamplerSettings;
use crate::shading::{Composition, ShadingOptions};

/// Which random source drives sampling and scattering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RngKind {
    /// ChaCha20 PRNG, one stream per scanline
    #[default]
    Chacha,
    /// 16-bit LFSR, one register per scanline
    Lfsr,
}

/// Full set of render parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of samples per pixel
    pub samples_per_pixel: u32,
    /// Bounce budget for each primary ray
    pub max_bounces: u32,
    /// Viewport height in world units
    pub viewport_height: f32,
    /// Distance from camera to viewport
    pub focal_length: f32,
    /// Camera position in world space
    pub camera_position: [f32; 3],
    /// Random source kind
    pub rng: RngKind,
    /// Seed for the random source; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Contribution blending rule
    pub composition: Composition,
    /// Refraction kernel
    pub refraction: RefractionModel,
    /// Truncate colors to 8-bit channels at every bounce
    pub quantize_bounces: bool,
    /// Show a progress bar while rendering
    pub progress: bool,
    /// Scene description; the built-in demo scene is used when absent
    pub scene: Option<SceneConfig>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
            samples_per_pixel: 8,
            max_bounces: 16,
            viewport_height: 1.0,
            focal_length: 1.0,
            camera_position: [0.0, 0.0, 0.0],
            rng: RngKind::default(),
            seed: None,
            composition: Composition::default(),
            refraction: RefractionModel::default(),
            quantize_bounces: false,
            progress: true,
            scene: None,
        }
    }
}

/// Scene made of named materials and spheres referring to them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    /// Materials by name
    #[serde(default)]
    pub materials: BTreeMap<String, Material>,
    /// Spheres in scan order
    #[serde(default)]
    pub spheres: Vec<SphereConfig>,
}

/// One sphere of a [`SceneConfig`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereConfig {
    /// Center in world space
    pub center: [f32; 3],
    /// Radius
    pub radius: f32,
    /// Name of an entry in [`SceneConfig::materials`]
    pub material: String,
}

impl RenderConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            info!("Loading configuration from {}", path.display());
            Self::load(path)
        } else {
            info!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Reject settings the renderer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Camera for the configured resolution.
    pub fn camera(&self) -> Camera {
        Camera::new(
            Vec3A::from_array(self.camera_position),
            self.focal_length,
            self.viewport_height,
            self.width,
            self.height,
        )
    }

    /// Shading options selected by this configuration.
    pub fn shading_options(&self) -> ShadingOptions {
        ShadingOptions {
            composition: self.composition,
            refraction: self.refraction,
            quantize_bounces: self.quantize_bounces,
        }
    }

    /// Sampler settings selected by this configuration.
    pub fn sampler_settings(&self) -> SamplerSettings {
        SamplerSettings {
            samples_per_pixel: self.samples_per_pixel,
            max_bounces: self.max_bounces,
            show_progress: self.progress,
        }
    }
}
