use clap::Parser;
use image::RgbaImage;
use log::{error, info};
use rand::Rng;

mod cli;
mod logger;
mod output;

use cli::Args;
use logger::init_logger;
use output::save_image_as_png;
use spherecast::config::{RenderConfig, RngKind};
use spherecast::error::Result;
use spherecast::random::{ChaChaSource, Lfsr16};
use spherecast::sampler::Sampler;
use spherecast::scene::{build_scene, demo_scene};
use spherecast::shading::Shader;

/// LFSR seed used when none is configured
const DEFAULT_LFSR_SEED: u16 = 0xACE1;

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("spherecast - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = RenderConfig::load_or_default(&args.config)?;
    args.apply(&mut config);
    config.validate()?;

    let scene = match &config.scene {
        Some(scene_config) => build_scene(scene_config)?,
        None => {
            info!("Using the built-in demo scene");
            demo_scene()
        }
    };

    let camera = config.camera();
    let shader = Shader::new(&scene, config.shading_options());
    let sampler = Sampler::new(&camera, shader, config.sampler_settings());

    // The frame buffer belongs to the driver; the sampler only fills it
    let mut image = RgbaImage::new(config.width, config.height);

    match config.rng {
        RngKind::Chacha => {
            let seed = config.seed.unwrap_or_else(|| rand::rng().random());
            info!("Sampling with ChaCha20, seed {seed}");
            sampler.render_into(&mut image, |row| ChaChaSource::for_stream(seed, u64::from(row)))?;
        }
        RngKind::Lfsr => {
            let seed = config.seed.map_or(DEFAULT_LFSR_SEED, |seed| seed as u16);
            let lfsr = Lfsr16::new(seed)?;
            info!("Sampling with 16-bit LFSR, seed {seed:#06x}");
            sampler.render_into(&mut image, |row| lfsr.for_row(row, config.height))?;
        }
    }

    save_image_as_png(&image, &args.output)
}
