//! Error type for scene construction and the render driver.
//!
//! The tracing math itself never fails: misses, exhausted bounce budgets and
//! degenerate vectors all have defined results. Errors only come from
//! configuration, construction and output.

use std::path::PathBuf;

/// Errors raised outside of the per-ray math.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reading a file failed
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The TOML configuration could not be parsed
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A sphere refers to a material that is not defined
    #[error("sphere {index} uses undefined material '{name}'")]
    UnknownMaterial {
        /// Position of the sphere in the scene list
        index: usize,
        /// Material name that failed to resolve
        name: String,
    },

    /// A transparent material needs a positive refraction index
    #[error("material '{name}' is transparent but has refraction index {value}")]
    InvalidRefractionIndex {
        /// Material name
        name: String,
        /// Offending refraction index
        value: f32,
    },

    /// The LFSR never leaves the all-zero state
    #[error("LFSR seed must be non-zero")]
    ZeroSeed,

    /// Output resolution with a zero dimension
    #[error("invalid resolution {width}x{height}")]
    InvalidResolution {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// The target buffer does not match the camera resolution
    #[error("buffer is {actual:?} but camera renders {expected:?}")]
    BufferSize {
        /// Camera resolution
        expected: (u32, u32),
        /// Buffer dimensions
        actual: (u32, u32),
    },

    /// Encoding or writing the output image failed
    #[error("image output failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
