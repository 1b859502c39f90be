use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use spherecast::config::{RenderConfig, RngKind};
use spherecast::material::RefractionModel;
use spherecast::shading::Composition;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RngArg {
    Chacha,
    Lfsr,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompositionArg {
    Reference,
    Unscaled,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RefractionArg {
    Reference,
    Physical,
}

/// Command line arguments structure using clap derive macros.
///
/// Rendering options left unset keep the value from the configuration file.
#[derive(Parser)]
#[command(name = "spherecast")]
#[command(about = "A small recursive sphere ray tracer")]
pub struct Args {
    /// TOML configuration file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of samples per pixel
    #[arg(long, short = 's')]
    pub samples_per_pixel: Option<u32>,

    /// Maximum number of bounces per primary ray
    #[arg(long)]
    pub max_bounces: Option<u32>,

    /// Random source
    #[arg(long, value_enum)]
    pub rng: Option<RngArg>,

    /// Seed for the random source (low 16 bits for the LFSR)
    #[arg(long)]
    pub seed: Option<u64>,

    /// How hit colors are blended
    #[arg(long, value_enum)]
    pub composition: Option<CompositionArg>,

    /// Refraction kernel for transparent spheres
    #[arg(long, value_enum)]
    pub refraction: Option<RefractionArg>,

    /// Truncate colors to 8-bit channels at every bounce
    #[arg(long)]
    pub quantize_bounces: bool,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl Args {
    /// Overlay the options given on the command line onto `config`.
    pub fn apply(&self, config: &mut RenderConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(samples) = self.samples_per_pixel {
            config.samples_per_pixel = samples;
        }
        if let Some(bounces) = self.max_bounces {
            config.max_bounces = bounces;
        }
        if let Some(rng) = self.rng {
            config.rng = match rng {
                RngArg::Chacha => RngKind::Chacha,
                RngArg::Lfsr => RngKind::Lfsr,
            };
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(composition) = self.composition {
            config.composition = match composition {
                CompositionArg::Reference => Composition::Reference,
                CompositionArg::Unscaled => Composition::Unscaled,
            };
        }
        if let Some(refraction) = self.refraction {
            config.refraction = match refraction {
                RefractionArg::Reference => RefractionModel::Reference,
                RefractionArg::Physical => RefractionModel::Physical,
            };
        }
        if self.quantize_bounces {
            config.quantize_bounces = true;
        }
        if self.no_progress {
            config.progress = false;
        }
    }
}
