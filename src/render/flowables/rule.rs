use printpdf::{Mm, Rgb};

use crate::model::{Rect, Size};
use crate::render::helpers::colors::BLACK;
use crate::render::helpers::layer::LayerBuilder;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleWidth {
    /// Millimetres
    Fixed(f32),
    /// Whatever width the frame offers
    Full,
}

/// A horizontal line drawn inside its own allotted box
#[derive(Debug, Clone)]
pub struct HorizontalRule {
    pub width: RuleWidth,
    /// Allotted height in mm
    pub height: f32,
    /// Stroke thickness in points
    pub thickness: f32,
    pub color: Rgb,
    /// Distance of the line above the bottom of the box, in mm
    pub offset: f32,
}

impl HorizontalRule {
    pub fn new(width: RuleWidth, height: f32) -> Self {
        Self {
            width,
            height,
            thickness: 1.0,
            color: BLACK,
            offset: height / 2.0,
        }
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset.clamp(0.0, self.height);
        self
    }

    pub fn measure(&self, available_width: f32, _available_height: f32) -> Size {
        let width = match self.width {
            RuleWidth::Fixed(w) => w,
            RuleWidth::Full => available_width,
        };
        Size::new(width, self.height)
    }

    pub fn render(&self, layer: &mut LayerBuilder, rect: &Rect) {
        let y = rect.y + self.offset;
        layer.save_graphics_state();
        layer.set_outline_color(self.color.clone());
        layer.set_outline_thickness(self.thickness);
        layer.add_line(Mm(rect.x), Mm(y), Mm(rect.x + rect.width), Mm(y));
        layer.restore_graphics_state();
    }
}
