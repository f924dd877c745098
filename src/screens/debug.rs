//! Debug/profiling page rendering.
//!
//! Displays frame timing, simulator and redraw counters, and the event log.
//! Accessible by pressing `Y` to toggle from the watch face.
//!
//! # Layout
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │        DEBUG  UP 00:12:34  50 FPS      │
//! ├────────────────────────────────────────┤
//! │  TIMING             FACE               │
//! │  Frame:  20.0ms     Ticks:   377       │
//! │  Render: 0.4ms      Redraws: 380       │
//! │  Sleep:  19.5ms     Skipped: 37320     │
//! │  Min:    19.8ms     Steps:   152       │
//! │  Max:    25.1ms     BPM:     66        │
//! │  Avg:    20.1ms     Cal:     81        │
//! ├────────────────────────────────────────┤
//! │  > Tick 377: 152 st 66 bpm 81 cal      │
//! │  > _                                   │
//! └────────────────────────────────────────┘
//! ```
//!
//! Positions scale with the display so the page fits both previews. Margins
//! keep text inside the inscribed circle on round screens.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use rand::Rng;
use vitalsense_common::colors::{BLACK, GRAY, LIGHT_GRAY, VITALSENSE_PALETTE, WHITE, YELLOW};
use vitalsense_common::styles::{TOP_CENTERED, TOP_LEFT};
use vitalsense_common::{EventLog, WatchFace};

use crate::profiling::ProfilingMetrics;

// =============================================================================
// Layout
// =============================================================================

/// Height of each stat and log line.
const LINE_HEIGHT: i32 = 12;

/// Gap between a divider and the text below it.
const DIVIDER_GAP: i32 = 6;

/// Number of stat rows per column.
const STAT_ROWS: i32 = 6;

/// Positions derived from the display size.
struct DebugLayout {
    width: i32,
    left_x: i32,
    right_x: i32,
    header_y: i32,
    header_divider_y: i32,
    section_y: i32,
    stats_y: i32,
    log_divider_y: i32,
    log_y: i32,
}

impl DebugLayout {
    fn new(size: Size) -> Self {
        let width = size.width as i32;
        let height = size.height as i32;
        let margin_x = width / 10;
        let header_y = height / 10;
        let header_divider_y = header_y + LINE_HEIGHT + 2;
        let section_y = header_divider_y + DIVIDER_GAP;
        let stats_y = section_y + LINE_HEIGHT + 2;
        let log_divider_y = stats_y + STAT_ROWS * LINE_HEIGHT + 4;

        Self {
            width,
            left_x: margin_x,
            right_x: width / 2 + margin_x / 4,
            header_y,
            header_divider_y,
            section_y,
            stats_y,
            log_divider_y,
            log_y: log_divider_y + DIVIDER_GAP,
        }
    }
}

// =============================================================================
// Colors
// =============================================================================

const DEBUG_BG: Rgb565 = BLACK;
const HEADER_COLOR: Rgb565 = VITALSENSE_PALETTE.accent;
const SECTION_COLOR: Rgb565 = GRAY;
const VALUE_COLOR: Rgb565 = WHITE;
const HIGHLIGHT_COLOR: Rgb565 = YELLOW;
const LOG_PROMPT_COLOR: Rgb565 = VITALSENSE_PALETTE.accent;
const LOG_TEXT_COLOR: Rgb565 = LIGHT_GRAY;
const DIVIDER_COLOR: Rgb565 = VITALSENSE_PALETTE.surface;

// =============================================================================
// Debug Page Drawing
// =============================================================================

/// Draw the debug/profiling page over the whole display.
pub fn draw_debug_page<R: Rng>(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
    face: &WatchFace<R>,
    log: &EventLog,
) {
    let layout = DebugLayout::new(display.size());

    display.clear(DEBUG_BG).ok();

    draw_header(display, &layout, metrics);
    draw_divider(display, &layout, layout.header_divider_y);

    let section_style = MonoTextStyle::new(&FONT_6X10, SECTION_COLOR);
    Text::with_text_style("TIMING", Point::new(layout.left_x, layout.section_y), section_style, TOP_LEFT)
        .draw(display)
        .ok();
    Text::with_text_style("FACE", Point::new(layout.right_x, layout.section_y), section_style, TOP_LEFT)
        .draw(display)
        .ok();

    draw_timing_column(display, &layout, metrics);
    draw_face_column(display, &layout, metrics, face);

    draw_divider(display, &layout, layout.log_divider_y);
    draw_log_terminal(display, &layout, log);
}

/// Title, uptime and FPS on one centered line.
fn draw_header(
    display: &mut SimulatorDisplay<Rgb565>,
    layout: &DebugLayout,
    metrics: &ProfilingMetrics,
) {
    let style = MonoTextStyle::new(&FONT_6X10, HEADER_COLOR);
    let mut s: String<40> = String::new();
    let _ = write!(s, "DEBUG  UP {}  {:.0} FPS", metrics.uptime_string(), metrics.fps());
    Text::with_text_style(&s, Point::new(layout.width / 2, layout.header_y), style, TOP_CENTERED)
        .draw(display)
        .ok();
}

/// Current, min, max and average frame timing (left column).
fn draw_timing_column(
    display: &mut SimulatorDisplay<Rgb565>,
    layout: &DebugLayout,
    metrics: &ProfilingMetrics,
) {
    let ms = |us: u32| us as f32 / 1000.0;
    let rows: [(&str, u32, Rgb565); 6] = [
        ("Frame: ", metrics.frame_time_us, VALUE_COLOR),
        ("Render:", metrics.render_time_us, VALUE_COLOR),
        ("Sleep: ", metrics.sleep_time_us, VALUE_COLOR),
        ("Min:   ", metrics.frame_time_min_us(), HIGHLIGHT_COLOR),
        ("Max:   ", metrics.frame_time_max_us, HIGHLIGHT_COLOR),
        ("Avg:   ", metrics.frame_time_avg_us(), HIGHLIGHT_COLOR),
    ];

    let mut y = layout.stats_y;
    for (label, us, color) in rows {
        let mut s: String<20> = String::new();
        let _ = write!(s, "{label} {:.1}ms", ms(us));
        Text::with_text_style(&s, Point::new(layout.left_x, y), MonoTextStyle::new(&FONT_6X10, color), TOP_LEFT)
            .draw(display)
            .ok();
        y += LINE_HEIGHT;
    }
}

/// Simulator ticks, redraw counters and current readings (right column).
fn draw_face_column<R: Rng>(
    display: &mut SimulatorDisplay<Rgb565>,
    layout: &DebugLayout,
    metrics: &ProfilingMetrics,
    face: &WatchFace<R>,
) {
    let state = face.state();
    let rows: [(&str, u64); 6] = [
        ("Ticks:  ", u64::from(face.ticks())),
        ("Redraws:", u64::from(metrics.face_redraws)),
        ("Skipped:", u64::from(metrics.skipped_frames)),
        ("Steps:  ", u64::from(state.steps)),
        ("BPM:    ", u64::from(state.heart_rate)),
        ("Cal:    ", u64::from(state.calories)),
    ];

    let style = MonoTextStyle::new(&FONT_6X10, VALUE_COLOR);
    let mut y = layout.stats_y;
    for (label, value) in rows {
        let mut s: String<20> = String::new();
        let _ = write!(s, "{label} {value}");
        Text::with_text_style(&s, Point::new(layout.right_x, y), style, TOP_LEFT)
            .draw(display)
            .ok();
        y += LINE_HEIGHT;
    }
}

/// Event log lines, oldest first, followed by a cursor.
fn draw_log_terminal(
    display: &mut SimulatorDisplay<Rgb565>,
    layout: &DebugLayout,
    log: &EventLog,
) {
    let prompt_style = MonoTextStyle::new(&FONT_6X10, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(&FONT_6X10, LOG_TEXT_COLOR);

    let mut y = layout.log_y;
    for line in log.iter() {
        Text::with_text_style(">", Point::new(layout.left_x, y), prompt_style, TOP_LEFT)
            .draw(display)
            .ok();
        Text::with_text_style(line, Point::new(layout.left_x + 10, y), text_style, TOP_LEFT)
            .draw(display)
            .ok();
        y += LINE_HEIGHT;
    }

    Text::with_text_style("> _", Point::new(layout.left_x, y), prompt_style, TOP_LEFT)
        .draw(display)
        .ok();
}

/// Horizontal divider inside the side margins.
fn draw_divider(
    display: &mut SimulatorDisplay<Rgb565>,
    layout: &DebugLayout,
    y: i32,
) {
    Line::new(Point::new(layout.left_x, y), Point::new(layout.width - layout.left_x, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use vitalsense_common::{Goals, Viewport};

    use super::*;

    #[test]
    fn test_layout_fits_event_log() {
        use vitalsense_common::event_log::LOG_CAPACITY;

        for viewport in [Viewport::SQUARE_PREVIEW, Viewport::ROUND_PREVIEW] {
            let size = viewport.size_px();
            let layout = DebugLayout::new(size);
            // Log lines plus the cursor line
            let bottom = layout.log_y + (LOG_CAPACITY as i32 + 1) * LINE_HEIGHT;
            assert!(bottom <= size.height as i32, "Log overflows {size:?}");
            assert!(layout.left_x < layout.right_x);
        }
    }

    #[test]
    fn test_draw_debug_page_clears_to_black() {
        let viewport = Viewport::SQUARE_PREVIEW;
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(viewport.size_px());
        let face = WatchFace::new(SmallRng::seed_from_u64(1), Goals::DEFAULT, viewport);
        let mut log = EventLog::new();
        log.push("Page: Debug");

        draw_debug_page(&mut display, &ProfilingMetrics::new(), &face, &log);

        assert_eq!(display.get_pixel(Point::new(0, 0)), DEBUG_BG);
        let layout = DebugLayout::new(viewport.size_px());
        assert_eq!(display.get_pixel(Point::new(layout.width / 2, layout.log_divider_y)), DIVIDER_COLOR);
    }
}
