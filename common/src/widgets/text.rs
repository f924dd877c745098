use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::frame::{TextAnchor, TextRole};
use crate::styles::{double_strike, font_for, text_style};

/// Draw horizontally centered text in the font picked for `role` and `size_px`.
///
/// Values in a face without a bold cut get a second pass 1 px to the right.
pub fn draw_label<D>(
    display: &mut D,
    text: &str,
    position: Point,
    role: TextRole,
    size_px: u32,
    anchor: TextAnchor,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let character_style = MonoTextStyle::new(font_for(role, size_px), color);
    if double_strike(role, size_px) {
        Text::with_text_style(text, position + Point::new(1, 0), character_style, text_style(anchor))
            .draw(display)?;
    }
    Text::with_text_style(text, position, character_style, text_style(anchor)).draw(display)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    use crate::colors::WHITE;

    #[test]
    fn test_profont_value_is_widened_by_second_pass() {
        let position = Point::new(32, 0);
        assert!(double_strike(TextRole::Value, 40));

        let mut single: MockDisplay<Rgb565> = MockDisplay::new();
        let style = MonoTextStyle::new(font_for(TextRole::Value, 40), WHITE);
        Text::with_text_style("8", position, style, text_style(TextAnchor::Top)).draw(&mut single).ok();

        let mut doubled: MockDisplay<Rgb565> = MockDisplay::new();
        doubled.set_allow_overdraw(true);
        draw_label(&mut doubled, "8", position, TextRole::Value, 40, TextAnchor::Top, WHITE).ok();

        assert_eq!(doubled.affected_area().size.width, single.affected_area().size.width + 1);
    }

    #[test]
    fn test_bold_cut_value_drawn_once() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        // overdraw would panic if a second pass ran
        draw_label(&mut display, "8", Point::new(32, 0), TextRole::Value, 11, TextAnchor::Top, WHITE).ok();
        assert!(!display.affected_area().is_zero_sized());
    }
}
