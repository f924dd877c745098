//! Splash screen shown while the watch face starts.
//!
//! ```text
//! ┌──────────────────────┐
//! │      .-------.       │  Loading ring (teal, fills clockwise)
//! │    /   ♥       \     │  Heart mark
//! │   |  VitalSense |    │  App name
//! │    \           /     │
//! │      '-------'       │
//! └──────────────────────┘
//! ```
//!
//! Every position scales with the display size so the same screen works for
//! the square and round previews.

use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::geometry::Angle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, PrimitiveStyle, Triangle};
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};
use vitalsense_common::colors::{RED, VITALSENSE_PALETTE};
use vitalsense_common::frame::{TextAnchor, TextRole};
use vitalsense_common::widgets::draw_label;

use crate::config::FRAME_TIME;

const APP_NAME: &str = "VitalSense";

/// Run the splash screen for `duration`.
///
/// Returns `false` if the window is closed, `true` when the time is up.
pub fn run_splash_screen(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    duration: Duration,
) -> bool {
    let start = Instant::now();

    loop {
        for event in window.events() {
            if matches!(event, SimulatorEvent::Quit) {
                return false;
            }
        }

        let elapsed = start.elapsed();
        draw_splash(display, splash_progress(elapsed, duration));
        window.update(display);

        if elapsed >= duration {
            return true;
        }
        thread::sleep(FRAME_TIME);
    }
}

/// Fraction of the splash duration that has passed, in `[0, 1]`.
pub fn splash_progress(
    elapsed: Duration,
    duration: Duration,
) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Draw one splash frame with the loading ring filled to `progress`.
fn draw_splash(
    display: &mut SimulatorDisplay<Rgb565>,
    progress: f32,
) {
    let size = display.size();
    let center = Point::new((size.width / 2) as i32, (size.height / 2) as i32);
    let radius = size.width.min(size.height) as f32 / 2.0;

    display.clear(VITALSENSE_PALETTE.background).ok();

    // Loading ring
    let ring_diameter = (radius * 1.7) as u32;
    let ring_width = ((radius / 40.0) as u32).max(2);
    Circle::with_center(center, ring_diameter)
        .into_styled(PrimitiveStyle::with_stroke(VITALSENSE_PALETTE.track, ring_width))
        .draw(display)
        .ok();
    if progress > 0.0 {
        Arc::with_center(
            center,
            ring_diameter,
            Angle::from_degrees(-90.0),
            Angle::from_degrees(360.0 * progress),
        )
        .into_styled(PrimitiveStyle::with_stroke(VITALSENSE_PALETTE.accent, ring_width))
        .draw(display)
        .ok();
    }

    draw_heart(display, center - Point::new(0, (radius * 0.2) as i32), (radius * 0.18) as i32);

    // App name
    let name_pos = center + Point::new(0, (radius * 0.25) as i32);
    draw_label(
        display,
        APP_NAME,
        name_pos,
        TextRole::Value,
        (radius * 0.2) as u32,
        TextAnchor::Middle,
        VITALSENSE_PALETTE.on_background,
    )
    .ok();
}

/// Heart built from two round lobes and a triangle, `lobe` pixels across.
fn draw_heart(
    display: &mut SimulatorDisplay<Rgb565>,
    center: Point,
    lobe: i32,
) {
    let lobe = lobe.max(4);
    let fill = PrimitiveStyle::with_fill(RED);
    let half = lobe / 2;

    for dx in [-half, half] {
        Circle::with_center(center + Point::new(dx, 0), lobe as u32)
            .into_styled(fill)
            .draw(display)
            .ok();
    }
    Triangle::new(
        center + Point::new(-lobe, 1),
        center + Point::new(lobe, 1),
        center + Point::new(0, lobe + lobe / 4),
    )
    .into_styled(fill)
    .draw(display)
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_progress() {
        let duration = Duration::from_millis(1000);
        assert!(splash_progress(Duration::ZERO, duration).abs() < f32::EPSILON);
        assert!((splash_progress(Duration::from_millis(500), duration) - 0.5).abs() < 0.001);
        assert!((splash_progress(Duration::from_millis(5000), duration) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_duration_is_complete() {
        assert!((splash_progress(Duration::ZERO, Duration::ZERO) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_draw_splash_colors() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(192, 192));
        draw_splash(&mut display, 1.0);

        assert_eq!(display.get_pixel(Point::new(0, 0)), VITALSENSE_PALETTE.background);
        // Heart center: (96, 96 - 19), just below where the lobes meet
        assert_eq!(display.get_pixel(Point::new(96, 81)), RED);
        // Full progress paints the ring teal, bottom is mid-sweep
        let ring_bottom = Point::new(96, 96 + 163 / 2);
        assert_eq!(display.get_pixel(ring_bottom), VITALSENSE_PALETTE.accent);
    }
}
