//! # Output Module
//!
//! Writes a rendered frame to disk. The sampler already quantized every pixel
//! to 8-bit RGBA, so saving is a straight PNG encode.

use std::path::Path;

use image::RgbaImage;
use log::{info, warn};

use spherecast::error::Result;

/// Save an RGBA frame as PNG.
///
/// Warns when the extension is not `.png`; the file is still PNG encoded.
pub fn save_image_as_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    let is_png = output_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if !is_png {
        warn!(
            "Output {} does not end in .png, writing PNG data anyway",
            output_path.display()
        );
    }

    image.save_with_format(output_path, image::ImageFormat::Png)?;
    info!(
        "Image saved as {} ({}x{})",
        output_path.display(),
        image.width(),
        image.height()
    );
    Ok(())
}
