//! Text measurement for the PDF standard fonts
//!
//! Widths come from Adobe's AFM files for the Standard 14 fonts, in 1000
//! units per em. Only the ASCII printable range is tabulated; accented
//! Latin-1 letters are measured as their base letter.

use printpdf::BuiltinFont;

use crate::model::PT_TO_MM;

/// Width used for characters outside the tables
const FALLBACK_WIDTH: u16 = 500;

/// Measures strings set in one builtin font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinFontMeasurer {
    font: BuiltinFont,
}

impl BuiltinFontMeasurer {
    pub fn new(font: BuiltinFont) -> Self {
        Self { font }
    }

    fn widths(&self) -> Option<&'static [u16; 128]> {
        match self.font {
            BuiltinFont::TimesRoman | BuiltinFont::TimesItalic => Some(&TIMES_ROMAN_WIDTHS),
            BuiltinFont::TimesBold | BuiltinFont::TimesBoldItalic => Some(&TIMES_BOLD_WIDTHS),
            BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => Some(&HELVETICA_WIDTHS),
            BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => {
                Some(&HELVETICA_BOLD_WIDTHS)
            }
            _ => None,
        }
    }

    fn char_width(&self, c: char) -> u16 {
        match self.font {
            BuiltinFont::Courier
            | BuiltinFont::CourierBold
            | BuiltinFont::CourierOblique
            | BuiltinFont::CourierBoldOblique => return 600,
            _ => {}
        }
        let c = if c.is_ascii() {
            c
        } else {
            match base_letter(c) {
                Some(base) => base,
                None => return FALLBACK_WIDTH,
            }
        };
        self.widths()
            .map(|table| table[c as usize])
            .filter(|&w| w > 0)
            .unwrap_or(FALLBACK_WIDTH)
    }

    /// Text width in points
    pub fn measure_width_pt(&self, text: &str, font_size: f32) -> f32 {
        let total: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        (total as f32 / 1000.0) * font_size
    }

    /// Text width in mm
    pub fn measure_width_mm(&self, text: &str, font_size: f32) -> f32 {
        self.measure_width_pt(text, font_size) * PT_TO_MM
    }

    /// Ascender height in mm
    pub fn ascender_mm(&self, font_size: f32) -> f32 {
        let units = match self.font {
            BuiltinFont::TimesRoman
            | BuiltinFont::TimesBold
            | BuiltinFont::TimesItalic
            | BuiltinFont::TimesBoldItalic => 683,
            BuiltinFont::Courier
            | BuiltinFont::CourierBold
            | BuiltinFont::CourierOblique
            | BuiltinFont::CourierBoldOblique => 629,
            _ => 718,
        };
        (units as f32 / 1000.0) * font_size * PT_TO_MM
    }
}

/// ASCII letter an accented Latin-1 letter is measured as.
///
/// The standard fonts give accented letters the advance of their base
/// letter, apart from a few points on the Helvetica dotless-i forms.
fn base_letter(c: char) -> Option<char> {
    let base = match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' | 'Ÿ' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => return None,
    };
    Some(base)
}

#[rustfmt::skip]
static TIMES_ROMAN_WIDTHS: [u16; 128] = [
    // 0-31: Control characters (use 0)
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 32-47: space ! " # $ % & ' ( ) * + , - . /
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    // 48-63: 0 1 2 3 4 5 6 7 8 9 : ; < = > ?
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    // 64-79: @ A B C D E F G H I J K L M N O
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    // 80-95: P Q R S T U V W X Y Z [ \ ] ^ _
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    // 96-111: ` a b c d e f g h i j k l m n o
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    // 112-127: p q r s t u v w x y z { | } ~ DEL
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541, 0,
];

#[rustfmt::skip]
static TIMES_BOLD_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520, 0,
];

#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
];

#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_scales_with_size() {
        let measurer = BuiltinFontMeasurer::new(BuiltinFont::Helvetica);
        let width = measurer.measure_width_mm("Hello", 11.0);
        assert!(width > 0.0);
        assert!(measurer.measure_width_mm("Hello World", 11.0) > width);
        assert!((measurer.measure_width_mm("Hello", 22.0) - width * 2.0).abs() < 0.01);
    }

    #[test]
    fn test_known_helvetica_width() {
        // "Hi" = 722 + 222 units
        let measurer = BuiltinFontMeasurer::new(BuiltinFont::Helvetica);
        assert!((measurer.measure_width_pt("Hi", 10.0) - 9.44).abs() < 0.001);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = BuiltinFontMeasurer::new(BuiltinFont::Helvetica);
        let bold = BuiltinFontMeasurer::new(BuiltinFont::HelveticaBold);
        assert!(bold.measure_width_mm("Data Engineer", 12.0) > regular.measure_width_mm("Data Engineer", 12.0));
    }

    #[test]
    fn test_courier_is_monospace() {
        let courier = BuiltinFontMeasurer::new(BuiltinFont::Courier);
        assert_eq!(courier.measure_width_pt("iiii", 10.0), courier.measure_width_pt("MMMM", 10.0));
    }

    #[test]
    fn test_accented_letters_use_base_width() {
        let measurer = BuiltinFontMeasurer::new(BuiltinFont::Helvetica);
        assert_eq!(
            measurer.measure_width_pt("Résumé", 12.0),
            measurer.measure_width_pt("Resume", 12.0)
        );
        assert_eq!(
            measurer.measure_width_pt("ÀÇÑØÜ", 10.0),
            measurer.measure_width_pt("ACNOU", 10.0)
        );
    }

    #[test]
    fn test_unmapped_characters_use_fallback() {
        let measurer = BuiltinFontMeasurer::new(BuiltinFont::TimesRoman);
        assert!((measurer.measure_width_pt("\u{4e2d}", 10.0) - 5.0).abs() < 0.001);
        assert!((measurer.measure_width_pt("\u{e6}", 10.0) - 5.0).abs() < 0.001);
    }
}
