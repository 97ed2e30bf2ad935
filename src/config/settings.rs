use printpdf::BuiltinFont;

use crate::cli::{Args, TemplateKind};
use crate::model::{Style, StyleId, StyleSheet};

use super::defaults::*;

/// Runtime settings for résumé generation
#[derive(Debug, Clone)]
pub struct Settings {
    // Page dimensions (mm)
    pub page_width: f32,
    pub page_height: f32,

    pub template: TemplateKind,

    /// PDF document title
    pub title: String,

    // Output options
    pub debug_frames: bool,
    pub compress_streams: bool,

    // Typography (in points)
    pub title_font_size: f32,
    pub header1_font_size: f32,
    pub header2_font_size: f32,
    pub header3_font_size: f32,
    pub body_font_size: f32,
    pub normal_font_size: f32,

    // Story spacing
    pub title_gap: f32,
    pub rule_thickness: f32,
    pub entry_title_fraction: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,

            template: TemplateKind::Sidebar,
            title: "Curriculum Vitae".to_string(),

            debug_frames: false,
            compress_streams: true,

            title_font_size: DEFAULT_TITLE_FONT_SIZE,
            header1_font_size: DEFAULT_HEADER1_FONT_SIZE,
            header2_font_size: DEFAULT_HEADER2_FONT_SIZE,
            header3_font_size: DEFAULT_HEADER3_FONT_SIZE,
            body_font_size: DEFAULT_BODY_FONT_SIZE,
            normal_font_size: DEFAULT_NORMAL_FONT_SIZE,

            title_gap: DEFAULT_TITLE_GAP,
            rule_thickness: DEFAULT_RULE_THICKNESS,
            entry_title_fraction: DEFAULT_ENTRY_TITLE_FRACTION,
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        let (page_width, page_height) = args.page_dimensions();

        Self {
            page_width,
            page_height,
            template: args.template,
            debug_frames: args.debug_frames,
            compress_streams: !args.no_compress_streams,
            ..Default::default()
        }
    }

    /// Use the résumé owner's name as the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_template(mut self, template: TemplateKind) -> Self {
        self.template = template;
        self
    }

    /// The fixed style registry at the configured sizes
    pub fn style_sheet(&self) -> StyleSheet {
        StyleSheet::build(|id| match id {
            // Display line: leading equals the font size
            StyleId::Title => Style::new(BuiltinFont::HelveticaBold, self.title_font_size)
                .with_leading(self.title_font_size)
                .with_space_after(10.0),
            StyleId::Header1 => Style::new(BuiltinFont::HelveticaBold, self.header1_font_size)
                .with_space_after(10.0),
            StyleId::Header2 => Style::new(BuiltinFont::HelveticaBold, self.header2_font_size),
            StyleId::Header3 => Style::new(BuiltinFont::HelveticaBold, self.header3_font_size)
                .with_space_before(6.0)
                .with_space_after(2.0),
            StyleId::Body => {
                Style::new(BuiltinFont::Helvetica, self.body_font_size).with_space_after(4.0)
            }
            StyleId::Strong => {
                Style::new(BuiltinFont::HelveticaBold, self.body_font_size).with_space_before(4.0)
            }
            // Matches the stock "Normal" style: 10pt on 12pt leading
            StyleId::Normal => Style::new(BuiltinFont::Helvetica, self.normal_font_size)
                .with_leading(self.normal_font_size + 2.0),
        })
    }
}
