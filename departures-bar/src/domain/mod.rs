//! Domain types for departure status.
//!
//! Station codes are validated at construction; clock times and statuses
//! are derived from the raw board strings and never fail to classify.

mod departure;
mod station;
mod time;

pub use departure::{Departure, DepartureStatus, ON_TIME};
pub use station::{Crs, InvalidCrs};
pub use time::{ClockTime, TimeError};
