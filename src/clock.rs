//! Wall-clock time source for the desktop host.

use std::time::Instant;

use chrono::{Local, NaiveTime};
use vitalsense_common::Clock;

/// Monotonic time from `Instant`, time of day from the local time zone.
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self { Self { start: Instant::now() } }
}

impl Default for SystemClock {
    fn default() -> Self { Self::new() }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 { u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX) }

    fn time_of_day(&self) -> NaiveTime { Local::now().time() }
}
