pub mod cli;
pub mod compress;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

pub use cli::TemplateKind;
pub use compress::{GhostscriptCompressor, Quality};
pub use config::Settings;
pub use error::{CompressError, ConfigError, ContentError, RenderError};
pub use model::{ResumeContent, TemplateSet};
pub use parser::parse_content;
pub use render::{DocumentRenderer, LayoutEngine, ResumeRenderer, Story};

/// High-level API for rendering a résumé to PDF.
///
/// This is the recommended entry point for library consumers. Content goes
/// through the built-in templates selected by `settings.template`; frame
/// layout, styling and stream compression are handled internally.
///
/// # Arguments
///
/// * `content` - Parsed résumé content (see [`parse_content`])
/// * `settings` - Page size, template choice and typography
///
/// # Returns
///
/// PDF file contents as bytes, or a RenderError on failure.
///
/// # Example
///
/// ```no_run
/// use cv_composer::{parse_content, render_resume, Settings};
///
/// let text = std::fs::read_to_string("resume.txt").unwrap();
/// let content = parse_content(&text).unwrap();
/// let settings = Settings::default().with_title(content.name.clone());
///
/// let pdf_bytes = render_resume(&content, &settings).unwrap();
/// std::fs::write("resume.pdf", pdf_bytes).unwrap();
/// ```
pub fn render_resume(content: &ResumeContent, settings: &Settings) -> Result<Vec<u8>, RenderError> {
    ResumeRenderer::new(settings.clone()).render(content)
}
