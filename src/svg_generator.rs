use crate::color::to_hex;
use crate::error::Result;
use crate::palette::{present, DesignPalette, Destination, PaletteSink};
use rgb::RGB8;
use std::path::Path;
use svg::node::element::{Group, Rectangle};
use svg::Document;

/// Layout of the swatch sheet.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Side length of one swatch in pixels (default: 48)
    pub swatch_size: u32,
    /// Space between swatches in pixels (default: 4)
    pub gap: u32,
    /// Swatches per line before wrapping (default: 16)
    pub columns: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            swatch_size: 48,
            gap: 4,
            columns: 16,
        }
    }
}

/// Collects swatches per destination and lays them out as an SVG document,
/// one `<g id="...">` block per destination in first-use order.
pub struct SvgSink {
    options: RenderOptions,
    sections: Vec<(Destination, Vec<RGB8>)>,
}

impl SvgSink {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            sections: Vec::new(),
        }
    }

    fn section_mut(&mut self, destination: Destination) -> &mut Vec<RGB8> {
        let idx = match self.sections.iter().position(|(d, _)| *d == destination) {
            Some(idx) => idx,
            None => {
                self.sections.push((destination, Vec::new()));
                self.sections.len() - 1
            }
        };
        &mut self.sections[idx].1
    }

    pub fn into_document(self) -> Document {
        let step = self.options.swatch_size + self.options.gap;
        let columns = self.options.columns.max(1);

        let width = self
            .sections
            .iter()
            .map(|(_, colors)| colors.len().min(columns))
            .max()
            .unwrap_or(0) as u32
            * step
            + self.options.gap;

        let mut document = Document::new();
        let mut y = self.options.gap;

        for (destination, colors) in &self.sections {
            let mut group = Group::new().set("id", destination.name());
            for (i, color) in colors.iter().enumerate() {
                let col = (i % columns) as u32;
                let row = (i / columns) as u32;
                group = group.add(
                    Rectangle::new()
                        .set("x", self.options.gap + col * step)
                        .set("y", y + row * step)
                        .set("width", self.options.swatch_size)
                        .set("height", self.options.swatch_size)
                        .set("fill", to_hex(*color)),
                );
            }
            document = document.add(group);

            let rows = colors.len().div_ceil(columns).max(1) as u32;
            y += rows * step;
        }

        document
            .set("width", width)
            .set("height", y)
            .set("viewBox", (0, 0, width, y))
    }
}

impl PaletteSink for SvgSink {
    fn replace(&mut self, destination: Destination, colors: &[RGB8]) -> Result<()> {
        let section = self.section_mut(destination);
        section.clear();
        section.extend_from_slice(colors);
        Ok(())
    }

    fn append(&mut self, destination: Destination, colors: &[RGB8]) -> Result<()> {
        self.section_mut(destination).extend_from_slice(colors);
        Ok(())
    }
}

/// Render the swatch sheet to an SVG string.
pub fn render_svg(design: &DesignPalette, options: &RenderOptions) -> Result<String> {
    let mut sink = SvgSink::new(options.clone());
    present(design, &mut sink)?;
    Ok(sink.into_document().to_string())
}

pub fn generate_svg(
    design: &DesignPalette,
    output_path: &Path,
    options: &RenderOptions,
) -> Result<()> {
    let mut sink = SvgSink::new(options.clone());
    present(design, &mut sink)?;
    svg::save(output_path, &sink.into_document())?;
    tracing::info!("wrote swatch sheet to {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("svg_generator_tests.rs");
}
