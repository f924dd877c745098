//! Time sources and the repeating update timer.
//!
//! The core never reads a system clock directly. Hosts implement [`Clock`]
//! (the desktop binary wraps `Instant` and the local time zone) and tests
//! drive a [`ManualClock`].

use core::cell::Cell;

use chrono::NaiveTime;

/// Monotonic milliseconds plus wall-clock time of day.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin. Never decreases.
    fn now_ms(&self) -> u64;

    /// Local time of day for the time label.
    fn time_of_day(&self) -> NaiveTime;
}

/// Clock that only moves when told to.
pub struct ManualClock {
    now_ms: Cell<u64>,
    time: Cell<NaiveTime>,
}

impl ManualClock {
    pub const fn new(time: NaiveTime) -> Self {
        Self {
            now_ms: Cell::new(0),
            time: Cell::new(time),
        }
    }

    pub fn advance(
        &self,
        ms: u64,
    ) {
        self.now_ms.set(self.now_ms.get() + ms);
    }

    pub fn set_time(
        &self,
        time: NaiveTime,
    ) {
        self.time.set(time);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 { self.now_ms.get() }

    fn time_of_day(&self) -> NaiveTime { self.time.get() }
}

/// Fixed-period timer polled from the frame loop.
///
/// Fires on the first poll, then once the period has elapsed since the last
/// firing. A late poll fires once and schedules the next deadline from that
/// poll, so a stalled frame never produces a burst of catch-up updates.
#[derive(Clone, Copy, Debug)]
pub struct Ticker {
    period_ms: u64,
    next_due_ms: Option<u64>,
}

impl Ticker {
    pub const fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            next_due_ms: None,
        }
    }

    #[inline]
    pub const fn period_ms(&self) -> u64 { self.period_ms }

    /// Returns `true` when an update is due at `now_ms`.
    pub fn poll(
        &mut self,
        now_ms: u64,
    ) -> bool {
        match self.next_due_ms {
            Some(due) if now_ms < due => false,
            _ => {
                self.next_due_ms = Some(now_ms.saturating_add(self.period_ms));
                true
            }
        }
    }

    /// Forget the schedule; the next poll fires immediately.
    pub fn reset(&mut self) { self.next_due_ms = None; }
}
