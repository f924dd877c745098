//! Core of the VitalSense watch face.
//!
//! Platform-agnostic code shared by every host that can provide an RGB565
//! `DrawTarget`:
//!
//! - [`simulator`]: random-walk metric simulator
//! - [`clock`]: injected time source and the repeating update timer
//! - [`metrics`]: metric state, goals and progress fractions
//! - [`layout`]: viewport, device shape and radial geometry
//! - [`frame`]: pure composition of a frame into draw commands
//! - [`render`]: frame execution and redraw tracking
//! - [`widgets`]: ring, arc and text drawing
//! - [`face`]: the watch face state holder driven by the host loop
//! - [`event_log`]: on-screen ring buffer of events
//! - [`colors`], [`config`], [`styles`]: theme and tuning constants
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` and allocation-free. Time and randomness are
//! injected, so it has no dependency on `std::time` or an OS entropy source.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod clock;
pub mod colors;
pub mod config;
pub mod error;
pub mod event_log;
pub mod face;
pub mod frame;
pub mod layout;
pub mod metrics;
pub mod render;
pub mod simulator;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use clock::{Clock, ManualClock, Ticker};
pub use error::ConfigError;
pub use event_log::EventLog;
pub use face::WatchFace;
pub use frame::{DrawCommand, Frame, compose};
pub use layout::{ArcSpec, DeviceShape, RadialLayout, Viewport};
pub use metrics::{Goals, MetricKind, MetricState, progress};
pub use render::{RenderState, draw_frame};
pub use simulator::MetricSimulator;
