use crate::model::{Rect, Size};
use crate::render::helpers::layer::LayerBuilder;

use super::Flowable;

/// Two flowables sharing one row, both resting on the row's bottom edge
#[derive(Debug, Clone)]
pub struct SideBySide {
    left: Box<Flowable>,
    right: Box<Flowable>,
    left_fraction: f32,
}

impl SideBySide {
    /// `left_fraction` of the width goes to `left`; it is clamped to 0..=1
    pub fn new(left: impl Into<Flowable>, right: impl Into<Flowable>, left_fraction: f32) -> Self {
        Self {
            left: Box::new(left.into()),
            right: Box::new(right.into()),
            left_fraction: left_fraction.clamp(0.0, 1.0),
        }
    }

    pub fn left(&self) -> &Flowable {
        &self.left
    }

    pub fn right(&self) -> &Flowable {
        &self.right
    }

    fn column_widths(&self, width: f32) -> (f32, f32) {
        let left = width * self.left_fraction;
        (left, width - left)
    }

    pub fn measure(&self, available_width: f32, available_height: f32) -> Size {
        let (left_width, right_width) = self.column_widths(available_width);
        let left = self.left.measure(left_width, available_height);
        let right = self.right.measure(right_width, available_height);
        Size::new(available_width, left.height.max(right.height))
    }

    pub fn render(&self, layer: &mut LayerBuilder, rect: &Rect) {
        let (left_width, right_width) = self.column_widths(rect.width);

        let left_height = self.left.measure(left_width, rect.height).height;
        self.left
            .render(layer, &Rect::new(rect.x, rect.y, left_width, left_height));

        let right_height = self.right.measure(right_width, rect.height).height;
        self.right.render(
            layer,
            &Rect::new(rect.x + left_width, rect.y, right_width, right_height),
        );
    }
}
