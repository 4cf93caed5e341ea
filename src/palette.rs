//! End-to-end palette extraction and the display-side interface.

use crate::color::{analogous, complementary, sort_by_luminance, to_css};
use crate::error::Result;
use crate::image_processor::{build_samples, load_image};
use crate::quantizer::quantize;
use rgb::RGB8;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::path::Path;

/// The ranked palette together with its derived colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignPalette {
    /// Representative colors, brightest first.
    pub palette: Vec<RGB8>,
    /// `palette[i]` inverted, same order.
    pub complementary: Vec<RGB8>,
    /// Two entries per palette color: `+30°` then `-30°`.
    pub analogous: Vec<RGB8>,
}

impl DesignPalette {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run the whole pipeline over a flat RGBA buffer.
pub fn compute_design_palette(pixels: &[u8]) -> DesignPalette {
    let samples = build_samples(pixels);
    tracing::debug!(samples = samples.len(), "built color samples");

    let mut palette = quantize(&samples);
    sort_by_luminance(&mut palette);

    let complementary = palette.iter().copied().map(complementary).collect();
    let analogous = palette.iter().copied().flat_map(analogous).collect();

    DesignPalette {
        palette,
        complementary,
        analogous,
    }
}

/// Load an image file and extract its design palette.
pub fn extract_palette(input_path: &Path) -> Result<DesignPalette> {
    let image_data = load_image(input_path)?;
    tracing::info!(
        "extracting palette from {} ({}x{})",
        input_path.display(),
        image_data.width,
        image_data.height
    );
    Ok(compute_design_palette(&image_data.pixels))
}

/// Named area a sink draws colors into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Palette,
    Complementary,
}

impl Destination {
    pub fn name(self) -> &'static str {
        match self {
            Destination::Palette => "palette",
            Destination::Complementary => "complementary",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Something that can show colors, e.g. an SVG sheet or a terminal.
pub trait PaletteSink {
    /// Clear `destination` and show `colors` in it.
    fn replace(&mut self, destination: Destination, colors: &[RGB8]) -> Result<()>;

    /// Add `colors` after whatever `destination` already shows.
    fn append(&mut self, destination: Destination, colors: &[RGB8]) -> Result<()>;
}

/// Hand a design palette to a sink. The analogous colors share the
/// complementary area and follow the complementary colors.
pub fn present<S: PaletteSink + ?Sized>(design: &DesignPalette, sink: &mut S) -> Result<()> {
    sink.replace(Destination::Palette, &design.palette)?;
    sink.replace(Destination::Complementary, &design.complementary)?;
    sink.append(Destination::Complementary, &design.analogous)?;
    Ok(())
}

/// Plain-text sink: one `destination: rgb(..) rgb(..)` line per call.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, label: &str, colors: &[RGB8]) -> Result<()> {
        let swatches: Vec<String> = colors.iter().copied().map(to_css).collect();
        writeln!(self.out, "{}: {}", label, swatches.join(" "))?;
        Ok(())
    }
}

impl<W: Write> PaletteSink for TextSink<W> {
    fn replace(&mut self, destination: Destination, colors: &[RGB8]) -> Result<()> {
        self.write_line(destination.name(), colors)
    }

    fn append(&mut self, destination: Destination, colors: &[RGB8]) -> Result<()> {
        self.write_line(&format!("{} (cont.)", destination), colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Vec<u8> {
        vec![
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255, //
            255, 255, 0, 255,
        ]
    }

    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<(&'static str, Destination, Vec<RGB8>)>,
    }

    impl PaletteSink for RecordingSink {
        fn replace(&mut self, destination: Destination, colors: &[RGB8]) -> Result<()> {
            self.calls.push(("replace", destination, colors.to_vec()));
            Ok(())
        }

        fn append(&mut self, destination: Destination, colors: &[RGB8]) -> Result<()> {
            self.calls.push(("append", destination, colors.to_vec()));
            Ok(())
        }
    }

    #[test]
    fn test_two_by_two_fixture() {
        let design = compute_design_palette(&two_by_two());

        assert_eq!(
            design.palette,
            vec![
                RGB8::new(255, 255, 0),
                RGB8::new(0, 255, 0),
                RGB8::new(255, 0, 0),
                RGB8::new(0, 0, 255),
            ]
        );
        assert_eq!(
            design.complementary,
            vec![
                RGB8::new(0, 0, 255),
                RGB8::new(255, 0, 255),
                RGB8::new(0, 255, 255),
                RGB8::new(255, 255, 0),
            ]
        );
        assert_eq!(
            design.analogous,
            vec![
                RGB8::new(128, 255, 0),
                RGB8::new(255, 128, 0),
                RGB8::new(0, 255, 128),
                RGB8::new(128, 255, 0),
                RGB8::new(255, 128, 0),
                RGB8::new(255, 0, 128),
                RGB8::new(127, 0, 255),
                RGB8::new(0, 127, 255),
            ]
        );
    }

    #[test]
    fn test_alpha_does_not_change_palette() {
        let mut transparent = two_by_two();
        for px in transparent.chunks_exact_mut(4) {
            px[3] = 0;
        }
        assert_eq!(
            compute_design_palette(&transparent),
            compute_design_palette(&two_by_two())
        );
    }

    #[test]
    fn test_large_image_yields_sixteen_swatches() {
        let mut pixels = Vec::new();
        for y in 0..32u32 {
            for x in 0..32u32 {
                pixels.extend_from_slice(&[(x * 8) as u8, (y * 8) as u8, 128, 255]);
            }
        }
        let design = compute_design_palette(&pixels);
        assert_eq!(design.palette.len(), 16);
        assert_eq!(design.complementary.len(), 16);
        assert_eq!(design.analogous.len(), 32);
        for pair in design.palette.windows(2) {
            assert!(crate::color::luminance(pair[0]) >= crate::color::luminance(pair[1]));
        }
    }

    #[test]
    fn test_present_call_order() {
        let design = compute_design_palette(&two_by_two());
        let mut sink = RecordingSink::default();
        present(&design, &mut sink).unwrap();

        assert_eq!(sink.calls.len(), 3);
        assert_eq!(sink.calls[0], ("replace", Destination::Palette, design.palette.clone()));
        assert_eq!(
            sink.calls[1],
            ("replace", Destination::Complementary, design.complementary.clone())
        );
        assert_eq!(
            sink.calls[2],
            ("append", Destination::Complementary, design.analogous.clone())
        );
    }

    #[test]
    fn test_text_sink_output() {
        let mut sink = TextSink::new(Vec::new());
        sink.replace(Destination::Palette, &[RGB8::new(1, 2, 3), RGB8::new(4, 5, 6)])
            .unwrap();
        sink.append(Destination::Complementary, &[RGB8::new(7, 8, 9)])
            .unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text,
            "palette: rgb(1, 2, 3) rgb(4, 5, 6)\ncomplementary (cont.): rgb(7, 8, 9)\n"
        );
    }

    #[test]
    fn test_to_json_shape() {
        let design = compute_design_palette(&two_by_two());
        let json: serde_json::Value = serde_json::from_str(&design.to_json().unwrap()).unwrap();
        assert_eq!(json["palette"][0], serde_json::json!({ "r": 255, "g": 255, "b": 0 }));
        assert_eq!(json["complementary"].as_array().unwrap().len(), 4);
        assert_eq!(json["analogous"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_destination_names() {
        assert_eq!(Destination::Palette.to_string(), "palette");
        assert_eq!(Destination::Complementary.to_string(), "complementary");
    }
}
