//! Recompress a PDF with Ghostscript
//! Run with: cargo run --bin compress-pdf -- input.pdf -q ebook

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use cv_composer::cli::CompressArgs;
use cv_composer::compress::GhostscriptCompressor;

fn main() -> Result<()> {
    let args = CompressArgs::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let compressor = GhostscriptCompressor::new(&args.gs);
    let output_path = compressor
        .compress(&args.input, args.output.as_deref(), args.quality)
        .with_context(|| format!("Failed to compress {}", args.input.display()))?;

    let before = fs::metadata(&args.input).map(|m| m.len()).ok();
    let after = fs::metadata(&output_path).map(|m| m.len()).ok();
    if let (Some(before), Some(after)) = (before, after) {
        log::info!("{} bytes -> {} bytes", before, after);
    }

    println!("Successfully wrote PDF to {}", output_path.display());

    Ok(())
}
