//! Fonts and text alignment styles.
//!
//! Text sizes are given in sp and scaled by the viewport density, but the
//! display only has bitmap fonts. [`font_for`] picks the tallest font of the
//! role's family that still fits the requested pixel height, falling back to
//! the smallest one.
//!
//! Metric values are always bold. The embedded-graphics faces in the value
//! ladder are bold cuts. ProFont has no bold weight, so values set in it are
//! double-struck with a 1 px horizontal offset (see [`double_strike`]).
//!
//! Styles are `const` so no style objects are built per frame.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{
    FONT_4X6,
    FONT_5X8,
    FONT_6X10,
    FONT_6X12,
    FONT_6X13_BOLD,
    FONT_7X13_BOLD,
    FONT_7X14,
    FONT_9X15_BOLD,
    FONT_9X18_BOLD,
    FONT_10X20,
};
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::frame::{TextAnchor, TextRole};

/// Metric values: bold faces, ProFont for the large sizes.
const VALUE_FONTS: [&MonoFont<'static>; 6] = [
    &FONT_6X13_BOLD,
    &FONT_7X13_BOLD,
    &FONT_9X15_BOLD,
    &FONT_9X18_BOLD,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
];

/// Whether each `VALUE_FONTS` entry is a bold cut.
const VALUE_FONTS_BOLD: [bool; 6] = [true, true, true, true, false, false];

/// Unit captions and the time label.
const LABEL_FONTS: [&MonoFont<'static>; 6] = [&FONT_4X6, &FONT_5X8, &FONT_6X10, &FONT_6X12, &FONT_7X14, &FONT_10X20];

/// Horizontally centered, anchored at the top of the glyph box.
pub const TOP_CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Centered on both axes. Used for curved time glyphs.
pub const MIDDLE_CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned, top anchored. Used by debug overlays.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

const fn fonts_for(role: TextRole) -> &'static [&'static MonoFont<'static>] {
    match role {
        TextRole::Value => &VALUE_FONTS,
        TextRole::Unit | TextRole::Time => &LABEL_FONTS,
    }
}

/// Index of the tallest font at most `size_px` high, else of the smallest.
fn pick(
    fonts: &[&MonoFont<'_>],
    size_px: u32,
) -> usize {
    let height = |i: &usize| fonts[*i].character_size.height;
    (0..fonts.len())
        .filter(|i| height(i) <= size_px)
        .max_by_key(height)
        .or_else(|| (0..fonts.len()).min_by_key(height))
        .unwrap_or(0)
}

/// Tallest font for `role` that is at most `size_px` high.
pub fn font_for(
    role: TextRole,
    size_px: u32,
) -> &'static MonoFont<'static> {
    let fonts = fonts_for(role);
    fonts.get(pick(fonts, size_px)).copied().unwrap_or(&FONT_6X10)
}

/// Whether text of `role` at `size_px` must be drawn twice to read as bold.
pub fn double_strike(
    role: TextRole,
    size_px: u32,
) -> bool {
    match role {
        TextRole::Value => !VALUE_FONTS_BOLD[pick(&VALUE_FONTS, size_px)],
        TextRole::Unit | TextRole::Time => false,
    }
}

/// Text style for an anchor.
pub const fn text_style(anchor: TextAnchor) -> TextStyle {
    match anchor {
        TextAnchor::Top => TOP_CENTERED,
        TextAnchor::Middle => MIDDLE_CENTERED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_fits_requested_height() {
        // 13 px is the smallest value face
        for px in [13, 15, 18, 22, 30, 40] {
            let font = font_for(TextRole::Value, px);
            assert!(font.character_size.height <= px, "{px}px picked a taller font");
        }
    }

    #[test]
    fn test_small_value_falls_back_to_smallest_bold() {
        for px in [1, 6, 11, 12] {
            assert_eq!(font_for(TextRole::Value, px).character_size, FONT_6X13_BOLD.character_size);
            assert!(!double_strike(TextRole::Value, px));
        }
    }

    #[test]
    fn test_square_preview_values_are_bold() {
        // 11 sp at density 1
        let font = font_for(TextRole::Value, 11);
        assert_eq!(font.character_size, FONT_6X13_BOLD.character_size);
        assert!(!double_strike(TextRole::Value, 11), "Bold cut needs no second pass");
    }

    #[test]
    fn test_profont_values_are_double_struck() {
        let px = 40;
        assert_eq!(font_for(TextRole::Value, px).character_size, PROFONT_24_POINT.character_size);
        assert!(double_strike(TextRole::Value, px));
    }

    #[test]
    fn test_labels_never_double_struck() {
        for px in [1, 6, 12, 24, 40] {
            assert!(!double_strike(TextRole::Unit, px));
            assert!(!double_strike(TextRole::Time, px));
        }
    }

    #[test]
    fn test_font_grows_with_size() {
        let small = font_for(TextRole::Unit, 6);
        let large = font_for(TextRole::Unit, 24);
        assert!(large.character_size.height > small.character_size.height);
    }

    #[test]
    fn test_font_falls_back_to_smallest() {
        let font = font_for(TextRole::Unit, 1);
        assert_eq!(font.character_size.height, FONT_4X6.character_size.height);
    }

    #[test]
    fn test_exact_height_match() {
        assert_eq!(font_for(TextRole::Unit, 6).character_size, FONT_4X6.character_size);
        assert_eq!(font_for(TextRole::Time, 12).character_size, FONT_6X12.character_size);
        assert_eq!(font_for(TextRole::Value, 15).character_size, FONT_9X15_BOLD.character_size);
    }
}
