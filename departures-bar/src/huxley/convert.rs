//! Conversion from Huxley DTOs to departures.

use crate::domain::Departure;

use super::types::{DepartureBoard, ServiceItem};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A departing service had no estimate at all
    #[error("service {service} has no {field}")]
    MissingField {
        field: &'static str,
        service: String,
    },
}

/// Whether a service picks up passengers at the board station.
///
/// Darwin leaves `std` out when the board station is the service's
/// destination or it does not pick up there.
pub fn departs_from_board(item: &ServiceItem) -> bool {
    item.std.as_deref().is_some_and(|std| !std.is_empty())
}

/// The first `count` services departing the board station, classified.
///
/// Order is the board's own; services without a scheduled departure are
/// dropped before counting.
pub fn select_departures(
    board: &DepartureBoard,
    count: usize,
) -> Result<Vec<Departure>, ConversionError> {
    board
        .services()
        .iter()
        .filter(|item| departs_from_board(item))
        .take(count)
        .map(convert_service_item)
        .collect()
}

/// Convert a single departing service item.
pub fn convert_service_item(item: &ServiceItem) -> Result<Departure, ConversionError> {
    let (Some(std), Some(etd)) = (item.std.as_deref(), item.etd.as_deref()) else {
        return Err(ConversionError::MissingField {
            field: if item.std.is_none() { "std" } else { "etd" },
            service: item.service_id.clone().unwrap_or_else(|| "(no id)".into()),
        });
    };

    Ok(Departure::new(std, etd))
}
