//! Huxley departure board client.
//!
//! Huxley (<https://github.com/jpsingleton/Huxley>) wraps the National Rail
//! Darwin Live Departure Boards API in plain JSON over GET requests, with
//! the Darwin token passed as a query parameter.
//!
//! Key characteristics of the board:
//! - Times are "HH:MM" strings in UK local time
//! - `etd` is either a time or a status such as "On time" or "Cancelled"
//! - `std` is missing for services that do not pick up at the board station

mod client;
mod convert;
mod debug_log;
mod error;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, HuxleyClient, HuxleyConfig};
pub use convert::{ConversionError, convert_service_item, departs_from_board, select_departures};
pub use debug_log::{DEFAULT_DEBUG_LOG_PATH, DebugLog};
pub use error::HuxleyError;
pub use types::{DepartureBoard, ServiceItem};
