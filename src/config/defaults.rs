/// Letter page width in mm
pub const DEFAULT_PAGE_WIDTH: f32 = 215.9;

/// Letter page height in mm
pub const DEFAULT_PAGE_HEIGHT: f32 = 279.4;

/// Title (name) font size in points
pub const DEFAULT_TITLE_FONT_SIZE: f32 = 36.0;

/// Header font sizes in points
pub const DEFAULT_HEADER1_FONT_SIZE: f32 = 30.0;
pub const DEFAULT_HEADER2_FONT_SIZE: f32 = 24.0;
pub const DEFAULT_HEADER3_FONT_SIZE: f32 = 18.0;

/// Body text font size in points
pub const DEFAULT_BODY_FONT_SIZE: f32 = 12.0;

/// Sidebar and fallback text font size in points
pub const DEFAULT_NORMAL_FONT_SIZE: f32 = 10.0;

/// Gap between the name and the designation, in points
pub const DEFAULT_TITLE_GAP: f32 = 6.0;

/// Section rule thickness in points
pub const DEFAULT_RULE_THICKNESS: f32 = 0.75;

/// Share of the main column given to an entry's title (the rest holds dates)
pub const DEFAULT_ENTRY_TITLE_FRACTION: f32 = 0.7;
