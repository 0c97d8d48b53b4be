//! Image serialization.
//!
//! Binary PPM (P6) is the primary output. Paths ending in `.png` are
//! written through the `image` crate instead.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use pinhole_math::Vec3Ext;
use thiserror::Error;

use crate::{Color, Framebuffer};

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Framebuffer is empty ({0}x{1})")]
    EmptyFramebuffer(u32, u32),
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Convert a color to 8-bit RGB: round(255 * clamp(c, 0, 1)) per channel.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = (color.saturate() * 255.0).round();
    // NaN saturates to 0 in the cast
    [c.x as u8, c.y as u8, c.z as u8]
}

impl Framebuffer {
    /// Convert to packed RGB bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Write a framebuffer as binary PPM (P6).
pub fn write_ppm<W: Write>(image: &Framebuffer, mut writer: W) -> OutputResult<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    writer.write_all(&image.to_rgb8())?;
    writer.flush()?;
    Ok(())
}

/// Save a framebuffer to `path` as binary PPM.
pub fn save_ppm<P: AsRef<Path>>(image: &Framebuffer, path: P) -> OutputResult<()> {
    let file = File::create(path.as_ref())?;
    write_ppm(image, BufWriter::new(file))
}

/// Save a framebuffer, picking the format from the file extension.
///
/// `.png` is encoded as 8-bit RGB PNG; anything else is written as PPM.
pub fn save_image<P: AsRef<Path>>(image: &Framebuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    if image.is_empty() {
        return Err(OutputError::EmptyFramebuffer(image.width, image.height));
    }

    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        image::save_buffer(
            path,
            &image.to_rgb8(),
            image.width,
            image.height,
            image::ColorType::Rgb8,
        )?;
    } else {
        save_ppm(image, path)?;
    }

    info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
