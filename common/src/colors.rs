//! Color palette for the watch face.
//!
//! Theme colors are authored as 24-bit RGB hex values and converted to
//! RGB565 at compile time, so the table below reads the same as a design
//! palette while the display gets its native pixel format.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! Conversion drops the low bits of each channel (`r >> 3`, `g >> 2`, `b >> 3`).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Convert a `0xRRGGBB` value to RGB565.
pub const fn from_rgb888(rgb: u32) -> Rgb565 {
    let r = ((rgb >> 16) & 0xFF) as u8;
    let g = ((rgb >> 8) & 0xFF) as u8;
    let b = (rgb & 0xFF) as u8;
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

/// Composite `fg` over `bg` with an 8-bit alpha (`alpha / 256`).
///
/// Both colors are `0xRRGGBB`; the result is `0xRRGGBB` as well.
pub const fn blend_rgb888(
    fg: u32,
    bg: u32,
    alpha: u32,
) -> u32 {
    let mut out = 0;
    let mut shift = 0;
    while shift <= 16 {
        let f = (fg >> shift) & 0xFF;
        let b = (bg >> shift) & 0xFF;
        let c = (f * alpha + b * (256 - alpha)) / 256;
        out |= c << shift;
        shift += 8;
    }
    out
}

// =============================================================================
// Theme Colors
// =============================================================================

const DARK_BLUE_RGB: u32 = 0x2C_3E_50;
const NEUTRAL_GRAY_RGB: u32 = 0x88_88_88;

/// Primary dark blue. Screen background.
pub const DARK_BLUE: Rgb565 = from_rgb888(DARK_BLUE_RGB);

/// Heart-rate accent.
pub const LIGHT_BLUE: Rgb565 = from_rgb888(0x34_98_DB);

/// Steps accent and arc color.
pub const TEAL: Rgb565 = from_rgb888(0x1A_BC_9C);

pub const RED: Rgb565 = from_rgb888(0xE7_4C_3C);

/// Calories accent and arc color.
pub const ORANGE: Rgb565 = from_rgb888(0xE6_7E_22);

pub const YELLOW: Rgb565 = from_rgb888(0xF1_C4_0F);

pub const WHITE: Rgb565 = Rgb565::WHITE;

pub const LIGHT_GRAY: Rgb565 = from_rgb888(0xEC_F0_F1);

pub const GRAY: Rgb565 = from_rgb888(0x95_A5_A6);

pub const DARK_GRAY: Rgb565 = from_rgb888(0x7F_8C_8D);

/// Used by the debug page.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Background ring track: neutral gray at 30% alpha over the background.
///
/// The display has no alpha channel, so the blend is resolved against
/// `DARK_BLUE` ahead of time (77 / 256 ≈ 0.30).
pub const TRACK: Rgb565 = from_rgb888(blend_rgb888(NEUTRAL_GRAY_RGB, DARK_BLUE_RGB, 77));

// =============================================================================
// Theme Palette
// =============================================================================

/// Color roles for the watch theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb565,
    pub on_background: Rgb565,
    /// Empty part of the ring.
    pub track: Rgb565,
    /// Headings and the splash progress ring.
    pub accent: Rgb565,
    /// Dividers and panels on the debug page.
    pub surface: Rgb565,
}

/// The VitalSense theme: dark blue background with teal accents.
pub const VITALSENSE_PALETTE: Palette = Palette {
    background: DARK_BLUE,
    on_background: WHITE,
    track: TRACK,
    accent: TEAL,
    surface: DARK_GRAY,
};
