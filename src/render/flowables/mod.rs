//! Content blocks that the layout engine pours into frames
//!
//! Every flowable can `measure` itself against the space a frame offers and
//! `render` into the box the engine assigns. Boxes use the page's
//! bottom-left origin.

pub mod paragraph;
pub mod rule;
pub mod side_by_side;
pub mod spacer;

pub use paragraph::Paragraph;
pub use rule::{HorizontalRule, RuleWidth};
pub use side_by_side::SideBySide;
pub use spacer::Spacer;

use crate::model::{Rect, Size};
use crate::render::helpers::layer::LayerBuilder;

#[derive(Debug, Clone)]
pub enum Flowable {
    Paragraph(Paragraph),
    Spacer(Spacer),
    Rule(HorizontalRule),
    SideBySide(SideBySide),
}

impl Flowable {
    pub fn kind(&self) -> &'static str {
        match self {
            Flowable::Paragraph(_) => "paragraph",
            Flowable::Spacer(_) => "spacer",
            Flowable::Rule(_) => "rule",
            Flowable::SideBySide(_) => "side-by-side row",
        }
    }

    pub fn measure(&self, available_width: f32, available_height: f32) -> Size {
        match self {
            Flowable::Paragraph(p) => p.measure(available_width, available_height),
            Flowable::Spacer(s) => s.measure(available_width, available_height),
            Flowable::Rule(r) => r.measure(available_width, available_height),
            Flowable::SideBySide(s) => s.measure(available_width, available_height),
        }
    }

    /// Break into a head that fits the given space and a tail for the next frame
    pub fn split(&self, available_width: f32, available_height: f32) -> Option<(Flowable, Flowable)> {
        match self {
            Flowable::Paragraph(p) => p
                .split(available_width, available_height)
                .map(|(head, tail)| (head.into(), tail.into())),
            _ => None,
        }
    }

    /// Extra space above, in mm; dropped at the top of a frame
    pub fn space_before(&self) -> f32 {
        match self {
            Flowable::Paragraph(p) => p.space_before_mm(),
            _ => 0.0,
        }
    }

    /// Extra space below, in mm
    pub fn space_after(&self) -> f32 {
        match self {
            Flowable::Paragraph(p) => p.space_after_mm(),
            _ => 0.0,
        }
    }

    pub fn render(&self, layer: &mut LayerBuilder, rect: &Rect) {
        match self {
            Flowable::Paragraph(p) => p.render(layer, rect),
            Flowable::Spacer(_) => {}
            Flowable::Rule(r) => r.render(layer, rect),
            Flowable::SideBySide(s) => s.render(layer, rect),
        }
    }
}

impl From<Paragraph> for Flowable {
    fn from(p: Paragraph) -> Self {
        Flowable::Paragraph(p)
    }
}

impl From<Spacer> for Flowable {
    fn from(s: Spacer) -> Self {
        Flowable::Spacer(s)
    }
}

impl From<HorizontalRule> for Flowable {
    fn from(r: HorizontalRule) -> Self {
        Flowable::Rule(r)
    }
}

impl From<SideBySide> for Flowable {
    fn from(s: SideBySide) -> Self {
        Flowable::SideBySide(s)
    }
}
