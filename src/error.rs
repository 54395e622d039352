//! Error types for dispatch input construction.
//!
//! The assignment engine itself is total over valid input; every error in
//! this module is raised while turning caller data into [`Order`]s or a
//! [`DispatchConfig`], before any assignment runs.
//!
//! [`Order`]: crate::models::Order
//! [`DispatchConfig`]: crate::config::DispatchConfig

use thiserror::Error;

use crate::models::OrderId;

/// Errors raised while parsing or constructing dispatch inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// Time text is not a valid "HH:MM" clock time.
    #[error("invalid time format '{0}', expected HH:MM")]
    InvalidFormat(String),

    /// A minute offset is not within one day.
    #[error("minute {0} is outside the day (0..=1439)")]
    MinuteOutOfRange(u16),

    /// Window end is not strictly after its start.
    #[error("window end {end} is not after start {start}")]
    InvertedWindow {
        /// Start, minutes since midnight.
        start: u16,
        /// End, minutes since midnight.
        end: u16,
    },

    /// Latitude or longitude is non-finite or out of range.
    #[error("invalid coordinates ({lat}, {lng})")]
    InvalidCoordinates {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lng: f64,
    },

    /// Only one of latitude / longitude was supplied.
    #[error("order {0} has only one of lat/lng")]
    PartialCoordinates(OrderId),

    /// Configuration could not be loaded.
    #[error("invalid dispatch config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DispatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
