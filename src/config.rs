//! Command-line configuration and host timing constants.
//!
//! Everything tunable about the face itself lives in
//! [`vitalsense_common::config`]; this module only maps command-line
//! overrides onto it. Validation happens when the arguments are turned into
//! core types, so a bad value surfaces as a [`ConfigError`] instead of being
//! replaced silently.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use vitalsense_common::config::{CALORIES_GOAL, MAX_HEART_RATE, STEPS_GOAL, UPDATE_PERIOD_MS};
use vitalsense_common::{ConfigError, Goals, Viewport};

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// How long the splash screen stays up.
pub const SPLASH_DURATION: Duration = Duration::from_millis(1500);

pub const WINDOW_TITLE: &str = "VitalSense";

// =============================================================================
// Command Line
// =============================================================================

/// Device preview the window emulates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Preview {
    /// 360 × 360 dp square screen.
    Square,
    /// Small round watch, 192 × 192 dp at 2x density.
    #[default]
    Round,
}

impl Preview {
    pub const fn viewport(self) -> Viewport {
        match self {
            Self::Square => Viewport::SQUARE_PREVIEW,
            Self::Round => Viewport::ROUND_PREVIEW,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "watch", version, about = "VitalSense watch face simulator")]
pub struct Args {
    /// Device preview to start from
    #[arg(long, value_enum, default_value_t = Preview::Round)]
    pub preview: Preview,

    /// Screen width in dp, overrides the preview
    #[arg(long)]
    pub width: Option<u32>,

    /// Screen height in dp, overrides the preview
    #[arg(long)]
    pub height: Option<u32>,

    /// Pixels per dp, overrides the preview
    #[arg(long)]
    pub density: Option<f32>,

    /// Window magnification
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=8))]
    pub scale: u32,

    /// Seed for a reproducible metric sequence
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between metric updates
    #[arg(long, default_value_t = UPDATE_PERIOD_MS)]
    pub tick_ms: u64,

    #[arg(long, default_value_t = STEPS_GOAL)]
    pub steps_goal: u32,

    #[arg(long, default_value_t = MAX_HEART_RATE)]
    pub max_heart_rate: u32,

    #[arg(long, default_value_t = CALORIES_GOAL)]
    pub calories_goal: u32,

    /// Skip the splash screen
    #[arg(long)]
    pub no_splash: bool,
}

impl Args {
    /// Preview viewport with any size or density overrides applied.
    pub fn viewport(&self) -> Result<Viewport, ConfigError> {
        let base = self.preview.viewport();
        Viewport::new(
            self.width.unwrap_or(base.width_dp()),
            self.height.unwrap_or(base.height_dp()),
            self.density.unwrap_or(base.density()),
        )
    }

    pub fn goals(&self) -> Result<Goals, ConfigError> {
        Goals::new(self.steps_goal, self.max_heart_rate, self.calories_goal)
    }

    #[inline]
    pub const fn update_period_ms(&self) -> u64 { self.tick_ms }
}

// =============================================================================
// Unit Tests
// =============================================================================
