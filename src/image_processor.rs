use crate::error::{PaletteError, Result};
use image::DynamicImage;
use rgb::RGB8;

/// A fully decoded bitmap as a flat RGBA-interleaved buffer.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl ImageData {
    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / 4
    }
}

pub fn load_image(path: &std::path::Path) -> Result<ImageData> {
    let img = image::open(path)?;
    tracing::debug!("decoded {}", path.display());
    from_dynamic(img)
}

/// Decode an image that is already in memory (PNG, JPEG, ... bytes).
pub fn load_image_from_memory(bytes: &[u8]) -> Result<ImageData> {
    let img = image::load_from_memory(bytes)?;
    from_dynamic(img)
}

fn from_dynamic(img: DynamicImage) -> Result<ImageData> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(PaletteError::EmptyImage { width, height });
    }

    Ok(ImageData {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

/// Turn an RGBA buffer into one RGB sample per pixel, in pixel order.
/// Alpha is ignored and a trailing partial pixel is dropped.
pub fn build_samples(buffer: &[u8]) -> Vec<RGB8> {
    buffer
        .chunks_exact(4)
        .map(|px| RGB8::new(px[0], px[1], px[2]))
        .collect()
}
