use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors raised while parsing a résumé content file
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Line {line}: {message}")]
    InvalidLine { line: usize, message: String },

    #[error("Entry at line {line} appears before any section heading")]
    OrphanEntry { line: usize },

    #[error("Missing name line (\"= Your Name\")")]
    MissingName,
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error(
        "Layout overflow: {kind} needs {needed_width:.1}x{needed_height:.1}mm but frame {frame} of template '{template}' offers {available_width:.1}x{available_height:.1}mm"
    )]
    LayoutOverflow {
        kind: &'static str,
        template: String,
        frame: usize,
        needed_width: f32,
        needed_height: f32,
        available_width: f32,
        available_height: f32,
    },

    #[error("Undefined page template: {0}")]
    UndefinedTemplate(String),

    #[error("Undefined frame {index} in template '{template}' ({count} frames)")]
    UndefinedFrame {
        template: String,
        index: usize,
        count: usize,
    },

    #[error("Invalid page template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Undefined paragraph style: {0}")]
    UndefinedStyle(String),

    #[error("Invalid quality preset '{0}' (expected screen, ebook, printer, prepress or default)")]
    InvalidQuality(String),
}

/// Errors from the external Ghostscript compression step
#[derive(Error, Debug)]
pub enum CompressError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Input file not found: {0}")]
    MissingInput(PathBuf),

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    ExternalProcess { program: String, status: ExitStatus },
}
