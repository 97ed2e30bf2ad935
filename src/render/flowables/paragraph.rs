use printpdf::Mm;

use crate::model::geometry::EPSILON;
use crate::model::{pt, Alignment, Rect, Size, Style};
use crate::render::helpers::layer::LayerBuilder;
use crate::render::helpers::text_metrics::BuiltinFontMeasurer;

/// A block of text wrapped to the frame width
///
/// Whitespace, including newlines, collapses to single spaces.
#[derive(Debug, Clone)]
pub struct Paragraph {
    text: String,
    style: Style,
    /// Points; cleared on the continuation of a split paragraph
    space_before: f32,
    /// Points; cleared on the head of a split paragraph
    space_after: f32,
}

impl Paragraph {
    pub fn new(text: impl AsRef<str>, style: &Style) -> Self {
        let text = text.as_ref().split_whitespace().collect::<Vec<_>>().join(" ");
        Self {
            text,
            space_before: style.space_before,
            space_after: style.space_after,
            style: style.clone(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn space_before_mm(&self) -> f32 {
        pt(self.space_before)
    }

    pub fn space_after_mm(&self) -> f32 {
        pt(self.space_after)
    }

    fn measurer(&self) -> BuiltinFontMeasurer {
        BuiltinFontMeasurer::new(self.style.font)
    }

    /// Greedy word wrap. A word wider than `width` gets a line of its own.
    pub fn wrap_lines(&self, width: f32) -> Vec<String> {
        let measurer = self.measurer();
        let size = self.style.font_size;
        let space = measurer.measure_width_mm(" ", size);

        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in self.text.split(' ').filter(|w| !w.is_empty()) {
            let word_width = measurer.measure_width_mm(word, size);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space + word_width <= width + EPSILON {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }

        lines
    }

    pub fn measure(&self, available_width: f32, _available_height: f32) -> Size {
        let lines = self.wrap_lines(available_width).len();
        Size::new(available_width, lines as f32 * self.style.leading_mm())
    }

    /// Split between lines so the head fits `available_height`.
    ///
    /// Returns `None` when no line fits or the whole paragraph already fits.
    pub fn split(&self, available_width: f32, available_height: f32) -> Option<(Paragraph, Paragraph)> {
        let lines = self.wrap_lines(available_width);
        let leading = self.style.leading_mm();
        if leading <= 0.0 {
            return None;
        }

        let fitting = ((available_height + EPSILON) / leading).floor() as usize;
        if fitting == 0 || fitting >= lines.len() {
            return None;
        }

        let head = Paragraph {
            text: lines[..fitting].join(" "),
            style: self.style.clone(),
            space_before: self.space_before,
            space_after: 0.0,
        };
        let tail = Paragraph {
            text: lines[fitting..].join(" "),
            style: self.style.clone(),
            space_before: 0.0,
            space_after: self.space_after,
        };
        Some((head, tail))
    }

    pub fn render(&self, layer: &mut LayerBuilder, rect: &Rect) {
        let measurer = self.measurer();
        let size = self.style.font_size;
        let leading = self.style.leading_mm();
        let ascender = measurer.ascender_mm(size);

        layer.set_fill_color(self.style.color.clone());

        for (i, line) in self.wrap_lines(rect.width).into_iter().enumerate() {
            let baseline = rect.top() - ascender - i as f32 * leading;
            let line_width = measurer.measure_width_mm(&line, size);
            let x = match self.style.alignment {
                Alignment::Left => rect.x,
                Alignment::Center => rect.x + (rect.width - line_width) / 2.0,
                Alignment::Right => rect.right() - line_width,
            };
            layer.use_text_builtin(line, size, Mm(x), Mm(baseline), self.style.font);
        }
    }
}
