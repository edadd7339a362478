//! One fetch-and-render cycle.

use tracing::{info, warn};

use crate::config::{Config, ConfigError};
use crate::display::{Formats, StatusLine};
use crate::huxley::{
    ConversionError, DepartureBoard, HuxleyClient, HuxleyError, select_departures,
};

/// What a run produced for the host to display.
#[derive(Debug)]
pub enum Outcome {
    /// The departures status line.
    Departures(StatusLine),
    /// Configuration needs fixing; no request was made.
    Misconfigured(ConfigError),
}

/// Failures that end a run abnormally.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to fetch departures: {0}")]
    Huxley(#[from] HuxleyError),

    #[error("unexpected departure board: {0}")]
    Conversion(#[from] ConversionError),
}

/// Validate `config`, fetch the board, and render it.
///
/// Configuration problems come back as [`Outcome::Misconfigured`] before any
/// network access; everything else that goes wrong is an [`AppError`].
pub async fn run(config: &Config) -> Result<Outcome, AppError> {
    let (route, formats) = match config.validate() {
        Ok(valid) => valid,
        Err(e) => {
            warn!(error = %e, "configuration is not usable");
            return Ok(Outcome::Misconfigured(e));
        }
    };

    let client = HuxleyClient::new(config.huxley())?;
    let board = client
        .get_departures_to(&route.origin, &route.destination)
        .await?;

    let line = render_board(&board, config.service_count, &formats)?;
    info!(
        from = %route.origin,
        to = %route.destination,
        shown = line.services().len(),
        alerts = line.has_alerts(),
        "rendered departures"
    );

    Ok(Outcome::Departures(line))
}

/// Filter, classify and render a board.
pub fn render_board(
    board: &DepartureBoard,
    service_count: usize,
    formats: &Formats,
) -> Result<StatusLine, ConversionError> {
    let departures = select_departures(board, service_count)?;
    Ok(formats.render_all(&departures))
}
