//! Frame execution and redraw tracking.
//!
//! [`draw_frame`] runs the commands produced by
//! [`compose`](crate::frame::compose) against any RGB565 draw target.
//! [`RenderState`] decides whether a new frame is needed at all: the face
//! only changes when a metric ticks or the minute rolls over, so most loop
//! iterations skip composition and drawing entirely.
//!
//! # Update Strategy
//!
//! | Trigger | Redraw |
//! |---------|--------|
//! | First frame | Full |
//! | Display cleared (page switch) | Full |
//! | Metric state changed | Full |
//! | Minute changed | Full |
//! | Otherwise | None |

use chrono::{NaiveTime, Timelike};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::frame::{DrawCommand, Frame};
use crate::metrics::MetricState;
use crate::widgets::{draw_label, draw_progress_arc, draw_ring};

// =============================================================================
// Frame Execution
// =============================================================================

/// Draw every command of `frame` in order.
pub fn draw_frame<D>(
    display: &mut D,
    frame: &Frame,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for command in frame.commands() {
        match command {
            DrawCommand::Fill(color) => display.clear(*color)?,
            DrawCommand::Ring {
                center,
                diameter,
                stroke_width,
                color,
            } => draw_ring(display, *center, *diameter, *stroke_width, *color)?,
            DrawCommand::Arc {
                center,
                diameter,
                stroke_width,
                spec,
            } => draw_progress_arc(display, *center, *diameter, *stroke_width, spec)?,
            DrawCommand::Text {
                text,
                position,
                role,
                size_px,
                anchor,
                color,
            } => draw_label(display, text, *position, *role, *size_px, *anchor, *color)?,
        }
    }
    Ok(())
}

// =============================================================================
// Render State
// =============================================================================

/// Tracks what was last drawn so unchanged frames can be skipped.
pub struct RenderState {
    first_frame: bool,

    /// Set when something else drew over the display (e.g., the debug page).
    display_cleared: bool,

    prev_state: Option<MetricState>,

    /// Minute of day of the last drawn time label.
    prev_minute: Option<u32>,
}

impl RenderState {
    pub const fn new() -> Self {
        Self {
            first_frame: true,
            display_cleared: false,
            prev_state: None,
            prev_minute: None,
        }
    }

    /// Whether the face must be redrawn for `state` at `time`.
    ///
    /// Records the inputs, so a second call with the same values returns
    /// `false` unless a flag forces a redraw.
    pub fn check_dirty(
        &mut self,
        state: &MetricState,
        time: NaiveTime,
    ) -> bool {
        let minute = time.hour() * 60 + time.minute();
        let dirty = self.first_frame
            || self.display_cleared
            || self.prev_state != Some(*state)
            || self.prev_minute != Some(minute);

        self.prev_state = Some(*state);
        self.prev_minute = Some(minute);
        dirty
    }

    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Call after the display was cleared outside the face.
    pub const fn mark_display_cleared(&mut self) { self.display_cleared = true; }

    /// Call at end of frame to reset per-frame flags.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.display_cleared = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
