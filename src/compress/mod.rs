//! PDF recompression through an external Ghostscript process

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::{CompressError, ConfigError};

/// Ghostscript `-dPDFSETTINGS` presets
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum Quality {
    /// 72 dpi images
    Screen,
    /// 150 dpi images
    Ebook,
    /// 300 dpi images
    Printer,
    /// 300 dpi images, colour preserving
    Prepress,
    #[default]
    Default,
}

impl Quality {
    pub const ALL: [Quality; 5] = [
        Quality::Screen,
        Quality::Ebook,
        Quality::Printer,
        Quality::Prepress,
        Quality::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Screen => "screen",
            Quality::Ebook => "ebook",
            Quality::Printer => "printer",
            Quality::Prepress => "prepress",
            Quality::Default => "default",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().trim_start_matches('/').to_ascii_lowercase();
        Quality::ALL
            .iter()
            .copied()
            .find(|q| q.as_str() == key)
            .ok_or_else(|| ConfigError::InvalidQuality(s.to_string()))
    }
}

/// `report.pdf` becomes `report_compressed.pdf` in the same directory
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut name = format!("{}_compressed", stem);
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    input.with_file_name(name)
}

/// Command-line arguments for a Ghostscript pdfwrite pass
pub fn ghostscript_args(input: &Path, output: &Path, quality: Quality) -> Vec<OsString> {
    let mut output_arg = OsString::from("-sOutputFile=");
    output_arg.push(output);

    vec![
        "-sDEVICE=pdfwrite".into(),
        "-dCompatibilityLevel=1.4".into(),
        format!("-dPDFSETTINGS=/{}", quality).into(),
        "-dNOPAUSE".into(),
        "-dQUIET".into(),
        "-dBATCH".into(),
        output_arg,
        input.as_os_str().to_os_string(),
    ]
}

/// Runs Ghostscript to rewrite a PDF at a chosen quality
#[derive(Debug, Clone)]
pub struct GhostscriptCompressor {
    program: PathBuf,
}

impl Default for GhostscriptCompressor {
    fn default() -> Self {
        Self::new("gs")
    }
}

impl GhostscriptCompressor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Compress `input` into `output` (or the default sibling path).
    ///
    /// Blocks until Ghostscript exits and returns the output path.
    pub fn compress(
        &self,
        input: &Path,
        output: Option<&Path>,
        quality: Quality,
    ) -> Result<PathBuf, CompressError> {
        if !input.is_file() {
            return Err(CompressError::MissingInput(input.to_path_buf()));
        }

        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input));
        let program = self.program.display().to_string();

        log::info!(
            "Compressing {} -> {} ({} quality)",
            input.display(),
            output.display(),
            quality
        );

        let status = Command::new(&self.program)
            .args(ghostscript_args(input, &output, quality))
            .status()
            .map_err(|source| CompressError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(CompressError::ExternalProcess { program, status });
        }

        log::debug!("{} exited with {}", program, status);
        Ok(output)
    }

    /// Like `compress`, with the preset given by name. An unknown preset
    /// fails before any process starts.
    pub fn compress_with_preset(
        &self,
        input: &Path,
        output: Option<&Path>,
        quality: &str,
    ) -> Result<PathBuf, CompressError> {
        let quality: Quality = quality.parse()?;
        self.compress(input, output, quality)
    }
}
