//! Simulation and layout configuration constants.
//!
//! All values are compile-time constants with `const` assertions so a bad
//! edit (an initial value outside its clamp range, a zero goal) fails the
//! build instead of producing a broken watch face.
//!
//! Layout values are in density-independent units (dp for geometry, sp for
//! text). [`Viewport`](crate::layout::Viewport) converts them to pixels.

// =============================================================================
// Random Walk Parameters
// =============================================================================

/// Bounded random walk for one simulated metric.
///
/// Each update adds a uniform integer in `-max_step..=max_step` and clamps
/// the result to `min..=max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomWalk {
    pub initial: u32,
    pub min: u32,
    pub max: u32,
    pub max_step: u32,
}

impl RandomWalk {
    pub const fn new(
        initial: u32,
        min: u32,
        max: u32,
        max_step: u32,
    ) -> Self {
        Self {
            initial,
            min,
            max,
            max_step,
        }
    }

    /// `min <= initial <= max` and the step fits an `i32` delta.
    pub const fn is_valid(&self) -> bool {
        self.min <= self.initial && self.initial <= self.max && self.max_step <= i32::MAX as u32
    }
}

/// Steps: starts at 149, wanders by up to 5 inside 140..=170.
pub const STEPS_WALK: RandomWalk = RandomWalk::new(149, 140, 170, 5);

/// Heart rate: starts at 65 BPM, wanders by up to 2 inside 60..=80.
pub const HEART_RATE_WALK: RandomWalk = RandomWalk::new(65, 60, 80, 2);

/// Calories: starts at 79, wanders by up to 3 inside 70..=90.
pub const CALORIES_WALK: RandomWalk = RandomWalk::new(79, 70, 90, 3);

const _: () = assert!(STEPS_WALK.is_valid());
const _: () = assert!(HEART_RATE_WALK.is_valid());
const _: () = assert!(CALORIES_WALK.is_valid());

/// Interval between simulator updates.
pub const UPDATE_PERIOD_MS: u64 = 2_000;

// =============================================================================
// Goals
// =============================================================================

pub const STEPS_GOAL: u32 = 10_000;
pub const MAX_HEART_RATE: u32 = 200;
pub const CALORIES_GOAL: u32 = 500;

const _: () = assert!(STEPS_GOAL > 0);
const _: () = assert!(MAX_HEART_RATE > 0);
const _: () = assert!(CALORIES_GOAL > 0);

// =============================================================================
// Radial Layout
// =============================================================================

/// Share of the smaller screen dimension used by the progress component.
pub const COMPONENT_SCALE: f32 = 0.85;

/// Padding between the component box and its drawing area.
pub const COMPONENT_PADDING_DP: f32 = 8.0;

/// Gap between the drawing area edge and the ring's center line.
pub const RING_INSET_DP: f32 = 16.0;

/// Stroke width of the background ring and progress arcs.
pub const ARC_WIDTH_DP: f32 = 12.0;

/// Steps arc covers the right side of the ring: -60° .. +60°.
pub const STEPS_ARC_START_DEG: f32 = -60.0;
pub const STEPS_ARC_RANGE_DEG: f32 = 120.0;

/// Calories arc covers the upper left: 200° .. 260°.
pub const CALORIES_ARC_START_DEG: f32 = 200.0;
pub const CALORIES_ARC_RANGE_DEG: f32 = 60.0;

const _: () = assert!(STEPS_ARC_RANGE_DEG > 0.0 && STEPS_ARC_RANGE_DEG <= 360.0);
const _: () = assert!(CALORIES_ARC_RANGE_DEG > 0.0 && CALORIES_ARC_RANGE_DEG <= 360.0);

/// Largest screen side in physical pixels. Keeps pixel coordinates well
/// inside `i32`.
pub const MAX_VIEWPORT_PX: u32 = 4_096;

// =============================================================================
// Text
// =============================================================================

/// Metric value size (bold).
pub const VALUE_TEXT_SP: f32 = 11.0;

/// Unit caption size under each value.
pub const UNIT_TEXT_SP: f32 = 6.0;

/// Vertical gap between metric groups.
pub const METRIC_SPACER_DP: f32 = 4.0;

/// Time label size.
pub const TIME_TEXT_SP: f32 = 12.0;

/// Time label offset from the top edge on square screens.
pub const TIME_TOP_PADDING_SQUARE_DP: f32 = 10.0;

/// Time label offset from the bezel on round screens.
pub const TIME_TOP_PADDING_ROUND_DP: f32 = 9.0;
