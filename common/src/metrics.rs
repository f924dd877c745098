//! Metric values, goals and progress fractions.

use core::fmt;
use core::num::NonZeroU32;

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{LIGHT_BLUE, ORANGE, TEAL};
use crate::config::{
    CALORIES_ARC_RANGE_DEG,
    CALORIES_ARC_START_DEG,
    CALORIES_GOAL,
    CALORIES_WALK,
    HEART_RATE_WALK,
    MAX_HEART_RATE,
    RandomWalk,
    STEPS_ARC_RANGE_DEG,
    STEPS_ARC_START_DEG,
    STEPS_GOAL,
    STEPS_WALK,
};
use crate::error::ConfigError;

/// The three simulated metrics, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricKind {
    Steps,
    HeartRate,
    Calories,
}

impl MetricKind {
    pub const ALL: [Self; 3] = [Self::Steps, Self::HeartRate, Self::Calories];

    pub const fn walk(self) -> RandomWalk {
        match self {
            Self::Steps => STEPS_WALK,
            Self::HeartRate => HEART_RATE_WALK,
            Self::Calories => CALORIES_WALK,
        }
    }

    /// Caption drawn under the value.
    pub const fn unit_label(self) -> &'static str {
        match self {
            Self::Steps => "Steps",
            Self::HeartRate => "BPM",
            Self::Calories => "Calories",
        }
    }

    /// Accent color for the caption and arc.
    pub const fn accent(self) -> Rgb565 {
        match self {
            Self::Steps => TEAL,
            Self::HeartRate => LIGHT_BLUE,
            Self::Calories => ORANGE,
        }
    }

    /// `(start, full_sweep)` in degrees, or `None` when the metric has no arc.
    ///
    /// Heart rate only appears in the center stack.
    pub const fn arc_range(self) -> Option<(f32, f32)> {
        match self {
            Self::Steps => Some((STEPS_ARC_START_DEG, STEPS_ARC_RANGE_DEG)),
            Self::HeartRate => None,
            Self::Calories => Some((CALORIES_ARC_START_DEG, CALORIES_ARC_RANGE_DEG)),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(match self {
            Self::Steps => "steps",
            Self::HeartRate => "heart rate",
            Self::Calories => "calories",
        })
    }
}

// =============================================================================
// Metric State
// =============================================================================

/// Current simulated readings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricState {
    pub steps: u32,
    pub heart_rate: u32,
    pub calories: u32,
}

impl MetricState {
    /// Starting readings before the first update.
    pub const fn initial() -> Self {
        Self {
            steps: STEPS_WALK.initial,
            heart_rate: HEART_RATE_WALK.initial,
            calories: CALORIES_WALK.initial,
        }
    }

    pub const fn get(
        &self,
        kind: MetricKind,
    ) -> u32 {
        match kind {
            MetricKind::Steps => self.steps,
            MetricKind::HeartRate => self.heart_rate,
            MetricKind::Calories => self.calories,
        }
    }

    pub const fn get_mut(
        &mut self,
        kind: MetricKind,
    ) -> &mut u32 {
        match kind {
            MetricKind::Steps => &mut self.steps,
            MetricKind::HeartRate => &mut self.heart_rate,
            MetricKind::Calories => &mut self.calories,
        }
    }
}

impl Default for MetricState {
    fn default() -> Self { Self::initial() }
}

// =============================================================================
// Goals
// =============================================================================

const fn nonzero(value: u32) -> NonZeroU32 {
    match NonZeroU32::new(value) {
        Some(v) => v,
        None => panic!("goal constants must be non-zero"),
    }
}

/// Targets each metric's progress is measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Goals {
    steps_goal: NonZeroU32,
    max_heart_rate: NonZeroU32,
    calories_goal: NonZeroU32,
}

impl Goals {
    pub const DEFAULT: Self = Self {
        steps_goal: nonzero(STEPS_GOAL),
        max_heart_rate: nonzero(MAX_HEART_RATE),
        calories_goal: nonzero(CALORIES_GOAL),
    };

    /// Build goals from raw numbers, rejecting zero.
    pub fn new(
        steps_goal: u32,
        max_heart_rate: u32,
        calories_goal: u32,
    ) -> Result<Self, ConfigError> {
        let check = |value: u32, kind| NonZeroU32::new(value).ok_or(ConfigError::ZeroGoal(kind));
        Ok(Self {
            steps_goal: check(steps_goal, MetricKind::Steps)?,
            max_heart_rate: check(max_heart_rate, MetricKind::HeartRate)?,
            calories_goal: check(calories_goal, MetricKind::Calories)?,
        })
    }

    pub const fn get(
        &self,
        kind: MetricKind,
    ) -> NonZeroU32 {
        match kind {
            MetricKind::Steps => self.steps_goal,
            MetricKind::HeartRate => self.max_heart_rate,
            MetricKind::Calories => self.calories_goal,
        }
    }

    /// Progress of one metric of `state` toward its goal.
    pub fn progress(
        &self,
        state: &MetricState,
        kind: MetricKind,
    ) -> f32 {
        progress(state.get(kind), self.get(kind))
    }
}

impl Default for Goals {
    fn default() -> Self { Self::DEFAULT }
}

/// `value / goal` clamped to `[0, 1]`.
#[inline]
pub fn progress(
    value: u32,
    goal: NonZeroU32,
) -> f32 {
    (value as f32 / goal.get() as f32).clamp(0.0, 1.0)
}
