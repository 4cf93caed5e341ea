use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// SVG swatch sheet
    Svg,
    /// Palette, complementary and analogous colors as JSON
    Json,
    /// One line of rgb(...) values per section
    Text,
}

#[derive(Parser)]
#[command(name = "img2palette")]
#[command(about = "Extract a median-cut design palette from an image")]
#[command(version)]
pub struct Cli {
    /// Input image file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file (svg defaults to <input>.palette.svg, json/text to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (default: inferred from the output extension, else svg)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Swatch size in pixels for SVG output
    #[arg(short = 's', long, default_value = "48")]
    pub swatch_size: u32,

    /// Gap between swatches in pixels for SVG output
    #[arg(short, long, default_value = "4")]
    pub gap: u32,

    /// Swatches per line before wrapping for SVG output
    #[arg(short, long, default_value = "16")]
    pub columns: usize,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The explicit `--format`, else the one implied by the output
    /// extension (`.json`, `.txt`), else svg.
    pub fn resolve_format(&self) -> OutputFormat {
        if let Some(format) = self.format {
            return format;
        }
        let extension = self
            .output
            .as_deref()
            .and_then(|path| path.extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("json") => OutputFormat::Json,
            Some("txt") => OutputFormat::Text,
            _ => OutputFormat::Svg,
        }
    }
}
