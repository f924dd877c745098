//! Configuration errors.
//!
//! Simulation and layout cannot fail once their inputs are constructed;
//! the only fallible step is building those inputs from user-supplied
//! numbers.

use thiserror::Error;

use crate::metrics::MetricKind;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A goal of zero would make its progress fraction undefined.
    #[error("{0} goal must be greater than zero")]
    ZeroGoal(MetricKind),

    #[error("viewport {width}x{height} dp has no drawable area")]
    EmptyViewport { width: u32, height: u32 },

    #[error("viewport {width}x{height} px exceeds the {max} px limit")]
    ViewportTooLarge { width: f32, height: f32, max: u32 },

    #[error("density {0} must be a positive, finite number")]
    InvalidDensity(f32),

    #[error("update period must be greater than zero")]
    ZeroUpdatePeriod,
}
