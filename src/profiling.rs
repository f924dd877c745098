//! Frame timing and redraw statistics for the debug page.
//!
//! ```ignore
//! let mut metrics = ProfilingMetrics::new();
//!
//! // In main loop:
//! let frame_start = Instant::now();
//! // ... render work ...
//! let render_time = frame_start.elapsed();
//! // ... sleep ...
//! metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
//! ```
//!
//! The event log shown next to these numbers lives in the core crate
//! ([`vitalsense_common::EventLog`]) since it has no time dependency.

use core::fmt::Write;
use std::time::{Duration, Instant};

use heapless::String;

// =============================================================================
// Profiling Metrics
// =============================================================================

/// Frame timing and render counters, updated once per loop iteration.
pub struct ProfilingMetrics {
    // Frame timing (microseconds for precision)
    /// Total frame time (render + sleep + overhead)
    pub frame_time_us: u32,
    /// Time spent composing and drawing
    pub render_time_us: u32,
    /// Time spent sleeping (rate limiting)
    pub sleep_time_us: u32,

    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    /// Exponential moving average of the frame time
    frame_time_avg_us: f32,

    // Counters
    pub total_frames: u64,
    /// Frames in which the watch face was recomposed and drawn
    pub face_redraws: u32,
    /// Watch face frames skipped because nothing changed
    pub skipped_frames: u32,

    start_time: Instant,
}

impl ProfilingMetrics {
    /// Create new profiling metrics, starting the uptime timer.
    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            face_redraws: 0,
            skipped_frames: 0,
            start_time: Instant::now(),
        }
    }

    /// Exponential moving average alpha (0.1 for smooth updates).
    const EMA_ALPHA: f32 = 0.1;

    /// Record frame timing for this frame.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = micros(total_time);
        self.frame_time_us = total_us;
        self.render_time_us = micros(render_time);
        self.sleep_time_us = micros(sleep_time);

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    /// Frames per second derived from the average frame time.
    pub fn fps(&self) -> f32 {
        if self.frame_time_avg_us > 0.0 {
            1_000_000.0 / self.frame_time_avg_us
        } else {
            0.0
        }
    }

    /// Minimum frame time, or zero before the first frame.
    pub const fn frame_time_min_us(&self) -> u32 {
        if self.frame_time_min_us == u32::MAX {
            0
        } else {
            self.frame_time_min_us
        }
    }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    pub fn uptime_string(&self) -> String<12> { format_uptime(self.uptime().as_secs()) }

    #[inline]
    pub const fn inc_face_redraws(&mut self) { self.face_redraws += 1; }

    #[inline]
    pub const fn inc_skipped_frames(&mut self) { self.skipped_frames += 1; }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

fn micros(duration: Duration) -> u32 { u32::try_from(duration.as_micros()).unwrap_or(u32::MAX) }

/// `HH:MM:SS`, hours keep counting past 24.
pub fn format_uptime(total_secs: u64) -> String<12> {
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    let mut s = String::new();
    let _ = write!(s, "{hours:02}:{mins:02}:{secs:02}");
    s
}

// =============================================================================
// Unit Tests
// =============================================================================
