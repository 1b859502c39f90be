//! spherecast sphere ray tracer
//!
//! Renders a scene of spheres into a caller-owned RGBA buffer by recursive ray
//! tracing: diffuse/metal/glass materials, multi-sample anti-aliasing and a
//! bounded bounce budget. Scanlines are traced in parallel, each with its own
//! random source.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod config;
pub mod error;
pub mod interval;
pub mod material;
pub mod random;
pub mod ray;
pub mod sampler;
pub mod scene;
pub mod shading;
pub mod sphere;
pub mod surface;
pub mod vec3;

pub use camera::Camera;
pub use error::{Error, Result};
pub use material::Material;
pub use ray::Ray;
pub use sampler::{Sampler, SamplerSettings};
pub use shading::{Shader, ShadingOptions};
pub use sphere::Sphere;
pub use surface::{Scene, Surface};
