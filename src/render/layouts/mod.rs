//! Page templates and the résumé layout built on them

pub mod resume;
pub mod templates;

pub use resume::ResumeRenderer;
pub use templates::{banded_template, resume_templates, sidebar_template, single_frame};
