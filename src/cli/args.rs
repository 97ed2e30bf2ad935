use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::compress::Quality;

#[derive(Parser, Debug)]
#[command(name = "cv-composer")]
#[command(
    author,
    version,
    about = "Compose a résumé PDF from page templates, frames and flowables"
)]
pub struct Args {
    /// Résumé content file (plain text); built-in content is used when omitted
    pub input: Option<PathBuf>,

    /// Output PDF file path (defaults to the input with .pdf extension, or output.pdf)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Page size
    #[arg(short = 's', long, value_enum, default_value = "letter")]
    pub page_size: PageSize,

    /// Page orientation
    #[arg(long, value_enum, default_value = "portrait")]
    pub orientation: Orientation,

    /// Page template for the résumé
    #[arg(short = 't', long, value_enum, default_value = "sidebar")]
    pub template: TemplateKind,

    /// Outline every frame boundary
    #[arg(long)]
    pub debug_frames: bool,

    /// Leave PDF content streams uncompressed
    #[arg(long)]
    pub no_compress_streams: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Parser, Debug)]
#[command(name = "compress-pdf")]
#[command(author, version, about = "Recompress a PDF with Ghostscript")]
pub struct CompressArgs {
    /// Input PDF file path
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output PDF file path (defaults to <input>_compressed.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Ghostscript quality preset
    #[arg(short, long, value_enum, default_value = "default")]
    pub quality: Quality,

    /// Ghostscript executable
    #[arg(long, default_value = "gs")]
    pub gs: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PageSize {
    Letter,
    A4,
    Legal,
}

impl PageSize {
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (215.9, 279.4),
            PageSize::A4 => (210.0, 297.0),
            PageSize::Legal => (215.9, 355.6),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Page template used for the résumé
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum TemplateKind {
    /// Header band with a wide main column and a narrow sidebar
    #[default]
    Sidebar,
    /// Three equal horizontal bands
    Banded,
}

impl Args {
    /// Get the output path, defaulting to input with .pdf extension
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| match &self.input {
            Some(input) => input.with_extension("pdf"),
            None => PathBuf::from("output.pdf"),
        })
    }

    /// Get page dimensions in mm (width, height) accounting for orientation
    pub fn page_dimensions(&self) -> (f32, f32) {
        let (w, h) = self.page_size.dimensions_mm();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}
