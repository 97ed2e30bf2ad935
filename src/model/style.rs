//! Paragraph styles and the fixed style registry

use std::fmt;
use std::str::FromStr;

use printpdf::{BuiltinFont, Rgb};

use crate::error::ConfigError;

use super::geometry::pt;

const TEXT_COLOR: Rgb = Rgb {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    icc_profile: None,
};

/// Closed set of paragraph styles known to the composer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleId {
    Title,
    Header1,
    Header2,
    Header3,
    Body,
    /// Bold body text for entry titles and sidebar headings
    Strong,
    Normal,
}

impl StyleId {
    pub const ALL: [StyleId; 7] = [
        StyleId::Title,
        StyleId::Header1,
        StyleId::Header2,
        StyleId::Header3,
        StyleId::Body,
        StyleId::Strong,
        StyleId::Normal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StyleId::Title => "title",
            StyleId::Header1 => "header1",
            StyleId::Header2 => "header2",
            StyleId::Header3 => "header3",
            StyleId::Body => "body",
            StyleId::Strong => "strong",
            StyleId::Normal => "normal",
        }
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleId {
    type Err = ConfigError;

    /// Accepts both "header2" and the "header2_style" spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let key = key.strip_suffix("_style").unwrap_or(&key);
        StyleId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == key)
            .ok_or_else(|| ConfigError::UndefinedStyle(s.to_string()))
    }
}

/// Horizontal alignment of paragraph lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Text rendering attributes. Sizes are in points.
#[derive(Debug, Clone)]
pub struct Style {
    pub font: BuiltinFont,
    pub font_size: f32,
    pub leading: f32,
    pub color: Rgb,
    pub space_before: f32,
    pub space_after: f32,
    pub alignment: Alignment,
}

impl Style {
    pub fn new(font: BuiltinFont, font_size: f32) -> Self {
        Self {
            font,
            font_size,
            leading: font_size * 1.2,
            color: TEXT_COLOR,
            space_before: 0.0,
            space_after: 0.0,
            alignment: Alignment::Left,
        }
    }

    pub fn with_space_after(mut self, points: f32) -> Self {
        self.space_after = points;
        self
    }

    pub fn with_space_before(mut self, points: f32) -> Self {
        self.space_before = points;
        self
    }

    pub fn with_leading(mut self, points: f32) -> Self {
        self.leading = points;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn leading_mm(&self) -> f32 {
        pt(self.leading)
    }
}

/// Registry mapping every `StyleId` to an immutable `Style`
#[derive(Debug, Clone)]
pub struct StyleSheet {
    title: Style,
    header1: Style,
    header2: Style,
    header3: Style,
    body: Style,
    strong: Style,
    normal: Style,
}

impl StyleSheet {
    /// Resolve every style id once through `style_for`
    pub fn build(mut style_for: impl FnMut(StyleId) -> Style) -> Self {
        Self {
            title: style_for(StyleId::Title),
            header1: style_for(StyleId::Header1),
            header2: style_for(StyleId::Header2),
            header3: style_for(StyleId::Header3),
            body: style_for(StyleId::Body),
            strong: style_for(StyleId::Strong),
            normal: style_for(StyleId::Normal),
        }
    }

    pub fn get(&self, id: StyleId) -> &Style {
        match id {
            StyleId::Title => &self.title,
            StyleId::Header1 => &self.header1,
            StyleId::Header2 => &self.header2,
            StyleId::Header3 => &self.header3,
            StyleId::Body => &self.body,
            StyleId::Strong => &self.strong,
            StyleId::Normal => &self.normal,
        }
    }

    /// Look up a style by its textual name
    pub fn lookup(&self, name: &str) -> Result<&Style, ConfigError> {
        let id: StyleId = name.parse()?;
        Ok(self.get(id))
    }
}
