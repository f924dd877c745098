//! On-screen event log.
//!
//! A fixed-capacity ring buffer of short text lines. The watch face records
//! simulator ticks and UI events here and the debug page renders the most
//! recent lines. There is no global logger; whoever owns the log writes to it.
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.push("Watch face started");
//! log.push_fmt(format_args!("Tick {}: {} steps", 1, 152));
//!
//! for line in log.iter() {
//!     println!("{line}");
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

// =============================================================================
// Configuration
// =============================================================================

/// Number of lines kept before the oldest is dropped.
pub const LOG_CAPACITY: usize = 8;

/// Maximum characters per line, longer messages are truncated.
pub const LOG_LINE_LENGTH: usize = 48;

pub type LogLine = String<LOG_LINE_LENGTH>;

// =============================================================================
// Event Log
// =============================================================================

/// Ring buffer of the last [`LOG_CAPACITY`] messages.
pub struct EventLog {
    buffer: Deque<LogLine, LOG_CAPACITY>,
    total: u32,
}

impl EventLog {
    pub const fn new() -> Self {
        Self {
            buffer: Deque::new(),
            total: 0,
        }
    }

    /// Append a message, dropping the oldest line when full.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        let mut line = LogLine::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        self.push_line(line);
    }

    /// Append a formatted message without allocating.
    pub fn push_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        let mut writer = Truncating(LogLine::new());
        // Truncating never reports an error.
        let _ = writer.write_fmt(args);
        self.push_line(writer.0);
    }

    fn push_line(
        &mut self,
        line: LogLine,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(line).ok();
        self.total = self.total.saturating_add(1);
    }

    /// Lines in insertion order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    /// Most recent line, if any.
    pub fn last(&self) -> Option<&str> { self.buffer.back().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    /// Messages pushed since creation, including dropped ones.
    #[inline]
    pub const fn total(&self) -> u32 { self.total }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

/// `fmt::Write` adapter that silently stops at the line capacity.
struct Truncating(LogLine);

impl Write for Truncating {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
