//! Named colors used by the built-in templates

use printpdf::Rgb;

const fn rgb(r: f32, g: f32, b: f32) -> Rgb {
    Rgb {
        r,
        g,
        b,
        icc_profile: None,
    }
}

pub const BLACK: Rgb = rgb(0.0, 0.0, 0.0);

pub const WHITE: Rgb = rgb(1.0, 1.0, 1.0);

/// Header band background
pub const DIM_GRAY: Rgb = rgb(0.412, 0.412, 0.412);

/// Main column background
pub const GHOST_WHITE: Rgb = rgb(0.973, 0.973, 1.0);

/// Sidebar background
pub const LIGHT_GRAY: Rgb = rgb(0.827, 0.827, 0.827);

// Banded template
pub const LIGHT_BLUE: Rgb = rgb(0.678, 0.847, 0.902);
pub const LIGHT_GREEN: Rgb = rgb(0.565, 0.933, 0.565);
pub const PINK: Rgb = rgb(1.0, 0.753, 0.796);

/// Section rules
pub const RULE_GRAY: Rgb = rgb(0.35, 0.35, 0.35);

/// Frame outlines drawn with --debug-frames
pub const DEBUG_FRAME_COLOR: Rgb = rgb(0.9, 0.1, 0.1);
