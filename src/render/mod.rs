//! PDF rendering modules

pub mod document;
pub mod engine;
pub mod flowables;
pub mod helpers;
pub mod layouts;
pub mod story;

// Re-export commonly used items for convenience
pub use document::DocumentRenderer;
pub use engine::{LaidOutDocument, LaidOutPage, LayoutEngine, Placement};
pub use flowables::{Flowable, HorizontalRule, Paragraph, RuleWidth, SideBySide, Spacer};
pub use helpers::{BuiltinFontMeasurer, LayerBuilder};
pub use layouts::{resume_templates, ResumeRenderer};
pub use story::{Directive, Story, StoryItem};
