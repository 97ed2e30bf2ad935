use crate::model::{pt, Size};

/// Fixed-size empty space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacer {
    pub width: f32,
    pub height: f32,
}

impl Spacer {
    /// Dimensions in mm
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Vertical gap given in points
    pub fn vertical_pt(height: f32) -> Self {
        Self::new(0.0, pt(height))
    }

    pub fn measure(&self, _available_width: f32, _available_height: f32) -> Size {
        Size::new(self.width, self.height)
    }
}
