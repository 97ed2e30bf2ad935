//! Page templates: frames to pour content into plus background fills

use printpdf::Rgb;

use crate::error::RenderError;

use super::geometry::{Padding, Rect, EPSILON};

/// A rectangular region on the page that receives flowables top to bottom
#[derive(Debug, Clone)]
pub struct Frame {
    pub id: Option<String>,
    pub rect: Rect,
    pub padding: Padding,
}

impl Frame {
    pub fn new(rect: Rect, padding: Padding) -> Self {
        Self {
            id: None,
            rect,
            padding,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The area available to flowables once padding is removed
    pub fn content_rect(&self) -> Rect {
        self.rect.inset(&self.padding)
    }

    /// Name used in log output
    pub fn label(&self, index: usize) -> String {
        self.id.clone().unwrap_or_else(|| format!("#{}", index))
    }
}

/// A filled rectangle painted beneath the page content
#[derive(Debug, Clone)]
pub struct BackgroundRegion {
    pub rect: Rect,
    pub color: Rgb,
}

impl BackgroundRegion {
    pub fn new(rect: Rect, color: Rgb) -> Self {
        Self { rect, color }
    }
}

/// A named page layout
#[derive(Debug, Clone)]
pub struct PageTemplate {
    pub id: String,
    pub frames: Vec<Frame>,
    pub backgrounds: Vec<BackgroundRegion>,
}

impl PageTemplate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            frames: Vec::new(),
            backgrounds: Vec::new(),
        }
    }

    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frames.push(frame);
        self
    }

    pub fn with_background(mut self, rect: Rect, color: Rgb) -> Self {
        self.backgrounds.push(BackgroundRegion::new(rect, color));
        self
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Check the frames against the page bounds and each other
    pub fn validate(&self, page: &Rect) -> Result<(), RenderError> {
        let invalid = |reason: String| RenderError::InvalidTemplate {
            template: self.id.clone(),
            reason,
        };

        if self.frames.is_empty() {
            return Err(invalid("template has no frames".to_string()));
        }

        for (i, frame) in self.frames.iter().enumerate() {
            if !page.contains(&frame.rect) {
                return Err(invalid(format!("frame {} lies outside the page", frame.label(i))));
            }
            let content = frame.content_rect();
            if content.width <= EPSILON || content.height <= EPSILON {
                return Err(invalid(format!(
                    "padding leaves no content area in frame {}",
                    frame.label(i)
                )));
            }
        }

        for (i, a) in self.frames.iter().enumerate() {
            for (j, b) in self.frames.iter().enumerate().skip(i + 1) {
                if a.rect.overlaps(&b.rect) {
                    return Err(invalid(format!(
                        "frames {} and {} overlap",
                        a.label(i),
                        b.label(j)
                    )));
                }
            }
        }

        Ok(())
    }
}

/// The validated templates for one document. The first template is the main one.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    page: Rect,
    templates: Vec<PageTemplate>,
}

impl TemplateSet {
    pub fn new(
        page_width: f32,
        page_height: f32,
        templates: Vec<PageTemplate>,
    ) -> Result<Self, RenderError> {
        let page = Rect::new(0.0, 0.0, page_width, page_height);

        if templates.is_empty() {
            return Err(RenderError::InvalidTemplate {
                template: String::new(),
                reason: "no page templates defined".to_string(),
            });
        }

        for (i, template) in templates.iter().enumerate() {
            if templates[..i].iter().any(|t| t.id == template.id) {
                return Err(RenderError::InvalidTemplate {
                    template: template.id.clone(),
                    reason: "duplicate template id".to_string(),
                });
            }
            template.validate(&page)?;
        }

        Ok(Self { page, templates })
    }

    pub fn page_rect(&self) -> Rect {
        self.page
    }

    pub fn get(&self, index: usize) -> &PageTemplate {
        &self.templates[index]
    }

    /// Resolve a template id to its index
    pub fn index_of(&self, id: &str) -> Result<usize, RenderError> {
        self.templates
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| RenderError::UndefinedTemplate(id.to_string()))
    }
}
