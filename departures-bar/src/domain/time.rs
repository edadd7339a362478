//! Clock times from departure boards.
//!
//! Darwin reports scheduled and estimated departures as "HH:MM" strings,
//! but the estimate field doubles as a status ("On time", "Delayed",
//! "Cancelled"). `ClockTime::parse` is the test that tells the two apart.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when a string is not a clock time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a clock time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day with no date attached.
///
/// Accepts any `digits:digits` string naming a real time of day, so "8:05"
/// parses while "Delayed" and "25:00" do not.
///
/// # Examples
///
/// ```
/// use departures_bar::domain::ClockTime;
///
/// let std = ClockTime::parse("08:00").unwrap();
/// let etd = ClockTime::parse("08:05").unwrap();
/// assert_eq!(etd.minutes_since(std), 5);
///
/// assert!(ClockTime::parse("Delayed").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Parse a `digits:digits` clock time.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let (hours, minutes) = s
            .split_once(':')
            .ok_or_else(|| TimeError::new("expected HH:MM format"))?;

        let hour = parse_digits(hours).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute =
            parse_digits(minutes).ok_or_else(|| TimeError::new("invalid minute digits"))?;

        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| TimeError::new("hour or minute out of range"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Whole minutes from `earlier` to `self`, truncated toward zero.
    ///
    /// Both times are taken to be on the same day, so an estimate that
    /// has rolled past midnight comes out negative: 00:05 since 23:58 is
    /// -1433, not 7.
    pub fn minutes_since(&self, earlier: ClockTime) -> i64 {
        self.0.signed_duration_since(earlier.0).num_minutes()
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({self})")
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
