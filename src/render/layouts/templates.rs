//! Built-in page templates for the résumé

use printpdf::Rgb;

use crate::cli::TemplateKind;
use crate::config::Settings;
use crate::error::RenderError;
use crate::model::{pt, Frame, Padding, PageTemplate, Rect, TemplateSet};
use crate::render::helpers::colors::{
    DIM_GRAY, GHOST_WHITE, LIGHT_BLUE, LIGHT_GRAY, LIGHT_GREEN, PINK,
};

pub const SIDEBAR: &str = "sidebar";
pub const BANDED: &str = "banded";

/// Default frame padding in points
const FRAME_PADDING: f32 = 10.0;

/// Header band over the top two twelfths of the page, then a main column
/// (8/10 of the width) and a sidebar (2/10).
pub fn sidebar_template(page_width: f32, page_height: f32) -> PageTemplate {
    let row = page_height / 12.0;
    let col = page_width / 10.0;

    let header = Rect::new(0.0, 10.0 * row, 10.0 * col, 2.0 * row);
    let main = Rect::new(0.0, 0.0, 8.0 * col, 10.0 * row);
    let sidebar = Rect::new(8.0 * col, 0.0, 2.0 * col, 10.0 * row);

    PageTemplate::new(SIDEBAR)
        .with_frame(
            Frame::new(header, Padding::new(pt(30.0), pt(12.0), pt(10.0), pt(10.0))).with_id("header"),
        )
        .with_frame(Frame::new(main, Padding::uniform(pt(FRAME_PADDING))).with_id("main"))
        .with_frame(
            Frame::new(sidebar, Padding::new(pt(10.0), pt(10.0), pt(2.0), pt(2.0))).with_id("sidebar"),
        )
        .with_background(header, DIM_GRAY)
        .with_background(main, GHOST_WHITE)
        .with_background(sidebar, LIGHT_GRAY)
}

/// Three equal horizontal bands, top to bottom
pub fn banded_template(page_width: f32, page_height: f32) -> PageTemplate {
    let band = page_height / 3.0;
    let colors = [LIGHT_BLUE, LIGHT_GREEN, PINK];

    colors
        .into_iter()
        .enumerate()
        .fold(PageTemplate::new(BANDED), |template, (i, color)| {
            let rect = Rect::new(0.0, (2 - i) as f32 * band, page_width, band);
            template
                .with_frame(
                    Frame::new(rect, Padding::uniform(pt(FRAME_PADDING)))
                        .with_id(format!("band{}", i + 1)),
                )
                .with_background(rect, color)
        })
}

/// One padded frame over `rect` with a matching background
pub fn single_frame(id: impl Into<String>, rect: Rect, color: Rgb) -> PageTemplate {
    PageTemplate::new(id)
        .with_frame(Frame::new(rect, Padding::uniform(pt(FRAME_PADDING))))
        .with_background(rect, color)
}

/// Both built-in templates; the one chosen in `settings` comes first
pub fn resume_templates(settings: &Settings) -> Result<TemplateSet, RenderError> {
    let (w, h) = (settings.page_width, settings.page_height);
    let templates = match settings.template {
        TemplateKind::Sidebar => vec![sidebar_template(w, h), banded_template(w, h)],
        TemplateKind::Banded => vec![banded_template(w, h), sidebar_template(w, h)],
    };
    TemplateSet::new(w, h, templates)
}
