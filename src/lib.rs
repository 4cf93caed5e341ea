//! img2palette - extract a design palette from a raster image
//!
//! Pixels are reduced to 16 representative colors by median-cut quantization,
//! ranked by luminance, and each color gets a complementary and two analogous
//! variants.
//!
//! ## Features
//!
//! - **Median-cut quantization** to a fixed depth of 4 (16 swatches)
//! - **Luminance ranking** with Rec. 709 weights
//! - **HSL conversion** for hue-shifted analogous colors
//! - **SVG swatch sheets**, JSON and plain-text output
//!
//! ## Example
//!
//! ```rust,no_run
//! use img2palette::{convert, RenderOptions};
//! use std::path::Path;
//!
//! let design = convert(Path::new("input.png"), Path::new("palette.svg"), &RenderOptions::default())
//!     .expect("Extraction failed");
//! println!("{} swatches", design.palette.len());
//! ```
//!
//! Working from pixels that are already decoded:
//!
//! ```rust
//! use img2palette::compute_design_palette;
//!
//! let rgba = [255, 0, 0, 255, 0, 0, 255, 255];
//! let design = compute_design_palette(&rgba);
//! assert_eq!(design.palette.len(), 2);
//! ```

pub mod color;
pub mod error;
pub mod image_processor;
pub mod palette;
pub mod quantizer;
pub mod svg_generator;

pub use color::{
    analogous, complementary, hsl_to_rgb, luminance, rgb_to_hsl, sort_by_luminance, Hsl,
};
pub use error::{PaletteError, Result};
pub use image_processor::{build_samples, load_image, load_image_from_memory, ImageData};
pub use palette::{
    compute_design_palette, extract_palette, present, DesignPalette, Destination, PaletteSink,
    TextSink,
};
pub use quantizer::{quantize, widest_channel, Channel, MAX_DEPTH};
pub use rgb::RGB8;
pub use svg_generator::{generate_svg, render_svg, RenderOptions, SvgSink};

/// Extract the design palette of an image file and write it as an SVG swatch sheet.
///
/// # Arguments
///
/// * `input_path` - Path to the input image file
/// * `output_path` - Path to the output SVG file
/// * `options` - Swatch sheet layout
///
/// # Returns
///
/// The extracted palette, for callers that also want the raw colors
pub fn convert(
    input_path: &std::path::Path,
    output_path: &std::path::Path,
    options: &RenderOptions,
) -> Result<DesignPalette> {
    let design = extract_palette(input_path)?;
    generate_svg(&design, output_path, options)?;
    Ok(design)
}
