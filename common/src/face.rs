//! The watch face screen: simulator, timer, goals and redraw tracking.
//!
//! `WatchFace` is the single state holder the host loop talks to. Each loop
//! iteration calls [`WatchFace::update`] with the clock, then asks
//! [`WatchFace::needs_redraw`] before composing and drawing a frame.

use chrono::NaiveTime;
use rand::Rng;

use crate::clock::{Clock, Ticker};
use crate::config::UPDATE_PERIOD_MS;
use crate::error::ConfigError;
use crate::frame::{Frame, compose};
use crate::layout::Viewport;
use crate::metrics::{Goals, MetricState};
use crate::render::RenderState;
use crate::simulator::MetricSimulator;

pub struct WatchFace<R> {
    simulator: MetricSimulator<R>,
    ticker: Ticker,
    goals: Goals,
    viewport: Viewport,
    render_state: RenderState,
}

impl<R: Rng> WatchFace<R> {
    pub fn new(
        rng: R,
        goals: Goals,
        viewport: Viewport,
    ) -> Self {
        Self {
            simulator: MetricSimulator::new(rng),
            ticker: Ticker::new(UPDATE_PERIOD_MS),
            goals,
            viewport,
            render_state: RenderState::new(),
        }
    }

    /// Replace the 2 s update period.
    pub fn with_update_period(
        mut self,
        period_ms: u64,
    ) -> Result<Self, ConfigError> {
        if period_ms == 0 {
            return Err(ConfigError::ZeroUpdatePeriod);
        }
        self.ticker = Ticker::new(period_ms);
        Ok(self)
    }

    /// Advance the simulator if the timer is due. Returns `true` on a tick.
    pub fn update<C: Clock>(
        &mut self,
        clock: &C,
    ) -> bool {
        if self.ticker.poll(clock.now_ms()) {
            self.simulator.tick();
            true
        } else {
            false
        }
    }

    /// Whether the face changed since the last drawn frame.
    pub fn needs_redraw(
        &mut self,
        time: NaiveTime,
    ) -> bool {
        let state = *self.simulator.state();
        self.render_state.check_dirty(&state, time)
    }

    /// Drawing instructions for the current state.
    pub fn compose(
        &self,
        time: NaiveTime,
    ) -> Frame {
        compose(self.simulator.state(), &self.goals, &self.viewport, time)
    }

    #[inline]
    pub const fn mark_display_cleared(&mut self) { self.render_state.mark_display_cleared(); }

    #[inline]
    pub const fn end_frame(&mut self) { self.render_state.end_frame(); }

    #[inline]
    pub const fn state(&self) -> &MetricState { self.simulator.state() }

    #[inline]
    pub const fn goals(&self) -> &Goals { &self.goals }

    #[inline]
    pub const fn viewport(&self) -> &Viewport { &self.viewport }

    #[inline]
    pub const fn ticks(&self) -> u32 { self.simulator.ticks() }

    #[inline]
    pub const fn update_period_ms(&self) -> u64 { self.ticker.period_ms() }
}
