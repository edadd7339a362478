//! Huxley API response DTOs.
//!
//! Huxley is a JSON proxy for the Darwin Live Departure Boards SOAP API and
//! keeps Darwin's field names. Only the fields the status line needs are
//! declared; everything else in the payload is ignored, so optional Darwin
//! fields that come back null or oddly shaped never fail a board.

use serde::Deserialize;

/// Response from `/departures/{crs}/to/{filterCrs}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureBoard {
    /// Train services, in departure order. Absent when nothing is running.
    pub train_services: Option<Vec<ServiceItem>>,
}

impl DepartureBoard {
    /// Train services on the board; empty if the field was absent.
    pub fn services(&self) -> &[ServiceItem] {
        self.train_services.as_deref().unwrap_or(&[])
    }
}

/// A service on the departure board.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    /// Ephemeral Darwin service ID, used to name a service in errors.
    #[serde(rename = "serviceID")]
    pub service_id: Option<String>,

    /// Scheduled time of departure from the board station.
    ///
    /// Absent when the board station is this service's destination or it
    /// does not pick up passengers there.
    pub std: Option<String>,

    /// Estimated time of departure.
    /// May be "On time", "Delayed", "Cancelled", or a time like "10:15".
    pub etd: Option<String>,
}
