//! Random-walk metric simulator.
//!
//! Each tick perturbs every metric by a uniform integer delta and clamps the
//! result to the metric's range, so readings drift believably without ever
//! leaving the configured window.
//!
//! The random source is injected. The desktop binary seeds a `SmallRng`
//! from the OS (or from `--seed`); tests use a fixed seed.

use rand::Rng;

use crate::config::RandomWalk;
use crate::metrics::{MetricKind, MetricState};

/// Owns the metric state and advances it on demand.
pub struct MetricSimulator<R> {
    state: MetricState,
    rng: R,
    ticks: u32,
}

impl<R: Rng> MetricSimulator<R> {
    /// Start from the configured initial readings.
    pub fn new(rng: R) -> Self { Self::with_state(MetricState::initial(), rng) }

    pub fn with_state(
        state: MetricState,
        rng: R,
    ) -> Self {
        Self { state, rng, ticks: 0 }
    }

    /// Apply one update to every metric (steps, heart rate, calories).
    pub fn tick(&mut self) -> MetricState {
        for kind in MetricKind::ALL {
            let value = self.state.get_mut(kind);
            *value = step(*value, kind.walk(), &mut self.rng);
        }
        self.ticks = self.ticks.wrapping_add(1);
        self.state
    }

    #[inline]
    pub const fn state(&self) -> &MetricState { &self.state }

    /// Number of updates applied so far.
    #[inline]
    pub const fn ticks(&self) -> u32 { self.ticks }
}

/// One random-walk step: `clamp(value + delta, min, max)`.
fn step<R: Rng>(
    value: u32,
    walk: RandomWalk,
    rng: &mut R,
) -> u32 {
    let bound = walk.max_step as i32;
    let delta = rng.random_range(-bound..=bound);
    value.saturating_add_signed(delta).clamp(walk.min, walk.max)
}
