//! Delivery time windows.
//!
//! # Time Model
//! Clock times are minutes since midnight of the delivery date, parsed
//! from "HH:MM" text. Windows are half-open: `[start, end)`.
//!
//! Two back-to-back windows (one ends exactly when the other starts) do
//! not overlap, so a driver can take both.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;

/// Minutes in a day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Parses "HH:MM" into minutes since midnight.
///
/// Hours take one or two digits in `0..=23`, minutes exactly two digits in
/// `0..=59`. Anything else is [`DispatchError::InvalidFormat`].
///
/// # Example
/// ```
/// use u_dispatch::models::parse_clock;
///
/// assert_eq!(parse_clock("09:30").unwrap(), 570);
/// assert!(parse_clock("24:00").is_err());
/// ```
pub fn parse_clock(text: &str) -> Result<u16, DispatchError> {
    let invalid = || DispatchError::InvalidFormat(text.to_string());

    let (hh, mm) = text.split_once(':').ok_or_else(invalid)?;
    if hh.is_empty() || hh.len() > 2 || mm.len() != 2 {
        return Err(invalid());
    }
    if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: u16 = hh.parse().map_err(|_| invalid())?;
    let minutes: u16 = mm.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Renders minutes since midnight as "HH:MM".
pub fn format_clock(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// A delivery window [start, end) in minutes since midnight.
///
/// Deserialization goes through [`TimeWindow::new`], so a decoded window
/// always satisfies `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct TimeWindow {
    /// Window start (minutes, inclusive).
    start: u16,
    /// Window end (minutes, exclusive).
    end: u16,
}

impl TimeWindow {
    /// Creates a window from minute offsets.
    ///
    /// Fails with [`DispatchError::MinuteOutOfRange`] if either bound lies
    /// outside the day, and with [`DispatchError::InvertedWindow`] unless
    /// `start < end`.
    pub fn new(start: u16, end: u16) -> Result<Self, DispatchError> {
        if let Some(bad) = [start, end].into_iter().find(|&m| m >= MINUTES_PER_DAY) {
            return Err(DispatchError::MinuteOutOfRange(bad));
        }
        if start >= end {
            return Err(DispatchError::InvertedWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses a window from two "HH:MM" strings.
    ///
    /// # Example
    /// ```
    /// use u_dispatch::models::TimeWindow;
    ///
    /// let w = TimeWindow::parse("09:00", "10:30").unwrap();
    /// assert_eq!(w.start(), 540);
    /// assert_eq!(w.end(), 630);
    /// assert!(TimeWindow::parse("10:00", "09:00").is_err());
    /// ```
    pub fn parse(start: &str, end: &str) -> Result<Self, DispatchError> {
        Self::new(parse_clock(start)?, parse_clock(end)?)
    }

    /// Window start (minutes since midnight).
    #[inline]
    pub fn start(&self) -> u16 {
        self.start
    }

    /// Window end (minutes since midnight, exclusive).
    #[inline]
    pub fn end(&self) -> u16 {
        self.end
    }

    /// Length of the window in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end - self.start
    }

    /// Whether a clock minute falls within this window.
    #[inline]
    pub fn contains(&self, minute: u16) -> bool {
        minute >= self.start && minute < self.end
    }

    /// Whether two windows share at least one instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[derive(Deserialize)]
struct RawWindow {
    start: u16,
    end: u16,
}

impl TryFrom<RawWindow> for TimeWindow {
    type Error = DispatchError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_clock(self.start), format_clock(self.end))
    }
}
