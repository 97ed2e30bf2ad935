pub mod geometry;
pub mod resume;
pub mod style;
pub mod template;

pub use geometry::{pt, Padding, Rect, Size, PT_TO_MM};
pub use resume::{Entry, EntryBlock, ResumeContent, Section, SidebarBlock};
pub use style::{Alignment, Style, StyleId, StyleSheet};
pub use template::{BackgroundRegion, Frame, PageTemplate, TemplateSet};
