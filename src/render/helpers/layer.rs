//! Page operation builder
//!
//! Collects drawing calls into the `Vec<Op>` a printpdf page is built from.

use printpdf::{
    BuiltinFont, Color, LinePoint, Mm, Op, PaintMode, PdfFontHandle, Point, Polygon, PolygonRing,
    Pt, Rgb, TextItem, WindingOrder,
};

use crate::model::Rect;

/// A builder that collects PDF operations for one page
#[derive(Default)]
pub struct LayerBuilder {
    ops: Vec<Op>,
}

impl LayerBuilder {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Get a reference to the operations (for inspection)
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn set_fill_color(&mut self, color: Rgb) {
        self.ops.push(Op::SetFillColor {
            col: Color::Rgb(color),
        });
    }

    pub fn set_outline_color(&mut self, color: Rgb) {
        self.ops.push(Op::SetOutlineColor {
            col: Color::Rgb(color),
        });
    }

    /// Set the outline thickness in points
    pub fn set_outline_thickness(&mut self, thickness: f32) {
        self.ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    }

    /// Draw a single line of text with its baseline starting at (x, y)
    pub fn use_text_builtin<S: Into<String>>(
        &mut self,
        text: S,
        font_size: f32,
        x: Mm,
        y: Mm,
        font: BuiltinFont,
    ) {
        let text_str = text.into();
        if text_str.is_empty() {
            return;
        }

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point {
                x: x.into(),
                y: y.into(),
            },
        });
        self.ops.push(Op::SetFont {
            size: Pt(font_size),
            font: PdfFontHandle::Builtin(font),
        });
        self.ops.push(Op::ShowText {
            items: vec![TextItem::Text(text_str)],
        });
        self.ops.push(Op::EndTextSection);
    }

    /// Fill or stroke a rectangle
    pub fn add_rect(&mut self, rect: &Rect, mode: PaintMode) {
        let corners = [
            (rect.x, rect.y),
            (rect.right(), rect.y),
            (rect.right(), rect.top()),
            (rect.x, rect.top()),
        ];
        let points = corners
            .iter()
            .map(|&(x, y)| LinePoint {
                p: Point {
                    x: Mm(x).into(),
                    y: Mm(y).into(),
                },
                bezier: false,
            })
            .collect();

        self.ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![PolygonRing { points }],
                mode,
                winding_order: WindingOrder::NonZero,
            },
        });
    }

    /// Draw a line from (x1, y1) to (x2, y2)
    pub fn add_line(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm) {
        let points = vec![
            LinePoint {
                p: Point {
                    x: x1.into(),
                    y: y1.into(),
                },
                bezier: false,
            },
            LinePoint {
                p: Point {
                    x: x2.into(),
                    y: y2.into(),
                },
                bezier: false,
            },
        ];

        self.ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![PolygonRing { points }],
                mode: PaintMode::Stroke,
                winding_order: WindingOrder::NonZero,
            },
        });
    }

    pub fn save_graphics_state(&mut self) {
        self.ops.push(Op::SaveGraphicsState);
    }

    pub fn restore_graphics_state(&mut self) {
        self.ops.push(Op::RestoreGraphicsState);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_skipped() {
        let mut layer = LayerBuilder::new();
        layer.use_text_builtin("", 12.0, Mm(0.0), Mm(0.0), BuiltinFont::Helvetica);
        assert!(layer.ops().is_empty());
    }

    #[test]
    fn test_text_section_ops() {
        let mut layer = LayerBuilder::new();
        layer.use_text_builtin("Hello", 12.0, Mm(10.0), Mm(20.0), BuiltinFont::Helvetica);
        let ops = layer.into_ops();
        assert_eq!(ops.len(), 5);
        assert!(matches!(ops[0], Op::StartTextSection));
        assert!(matches!(ops[4], Op::EndTextSection));
    }

    #[test]
    fn test_rect_is_one_polygon() {
        let mut layer = LayerBuilder::new();
        layer.add_rect(&Rect::new(0.0, 0.0, 10.0, 5.0), PaintMode::Fill);
        assert_eq!(layer.ops().len(), 1);
        assert!(matches!(layer.ops()[0], Op::DrawPolygon { .. }));
    }
}
