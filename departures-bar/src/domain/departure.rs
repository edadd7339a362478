//! Departure status classification.

use super::ClockTime;

/// The exact estimate string Darwin uses for a service running to time.
pub const ON_TIME: &str = "On time";

/// What the estimated departure field says about a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartureStatus {
    /// Estimate is exactly "On time".
    OnTime,
    /// Both scheduled and estimated departures are clock times.
    Delayed { minutes: i64 },
    /// Any other status text, lowercased ("delayed", "cancelled", ...).
    Other(String),
}

impl DepartureStatus {
    /// Classify a service from its scheduled and estimated departure strings.
    ///
    /// The "On time" comparison is case-sensitive. An estimate that is a
    /// clock time only counts as a known delay if the scheduled time also
    /// parses; otherwise it falls through to [`DepartureStatus::Other`].
    pub fn classify(scheduled: &str, estimated: &str) -> Self {
        if estimated == ON_TIME {
            return Self::OnTime;
        }

        match (ClockTime::parse(scheduled), ClockTime::parse(estimated)) {
            (Ok(std), Ok(etd)) => Self::Delayed {
                minutes: etd.minutes_since(std),
            },
            _ => Self::Other(estimated.to_lowercase()),
        }
    }

    /// Whether this status should turn the status bar the alert colour.
    pub fn is_alert(&self) -> bool {
        !matches!(self, Self::OnTime)
    }
}

/// A service that departs the origin, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Scheduled departure exactly as the board reported it.
    pub scheduled: String,
    pub status: DepartureStatus,
}

impl Departure {
    /// Classify a departure from its raw board strings.
    pub fn new(scheduled: impl Into<String>, estimated: &str) -> Self {
        let scheduled = scheduled.into();
        let status = DepartureStatus::classify(&scheduled, estimated);
        Self { scheduled, status }
    }
}
