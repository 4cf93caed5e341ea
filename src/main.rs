mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, OutputFormat};
use img2palette::{extract_palette, generate_svg, present, RenderOptions, TextSink};
use std::fs::File;
use std::io::{self, Write};
use tracing::Level;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let design = extract_palette(&cli.input)
        .with_context(|| format!("Failed to extract palette from {}", cli.input.display()))?;

    match cli.resolve_format() {
        OutputFormat::Svg => {
            let output_path = cli.output.unwrap_or_else(|| {
                let mut path = cli.input.clone();
                path.set_extension("palette.svg");
                path
            });
            let options = RenderOptions {
                swatch_size: cli.swatch_size,
                gap: cli.gap,
                columns: cli.columns,
            };
            generate_svg(&design, &output_path, &options)?;
            println!(
                "Wrote {} swatches to {}",
                design.palette.len(),
                output_path.display()
            );
        }
        OutputFormat::Json => {
            let json = design.to_json()?;
            match cli.output {
                Some(path) => std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => println!("{}", json),
            }
        }
        OutputFormat::Text => {
            let out: Box<dyn Write> = match cli.output {
                Some(path) => Box::new(
                    File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?,
                ),
                None => Box::new(io::stdout().lock()),
            };
            let mut sink = TextSink::new(out);
            present(&design, &mut sink)?;
            sink.into_inner().flush()?;
        }
    }

    Ok(())
}
