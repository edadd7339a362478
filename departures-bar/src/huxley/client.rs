//! Huxley HTTP client.
//!
//! One request per run: fetch the departure board from an origin, filtered
//! to services calling at a destination.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::Crs;

use super::debug_log::DebugLog;
use super::error::HuxleyError;
use super::types::DepartureBoard;

/// Default base URL for the public Huxley instance.
pub const DEFAULT_BASE_URL: &str = "https://huxley.apphb.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the Huxley client.
#[derive(Debug, Clone)]
pub struct HuxleyConfig {
    /// Darwin access token, passed as the `accessToken` query parameter
    pub access_token: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Where to append raw payloads, if anywhere
    pub debug_log: Option<PathBuf>,
}

impl HuxleyConfig {
    /// Create a new config with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            debug_log: None,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Append every raw payload to `path`.
    pub fn with_debug_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.debug_log = Some(path.into());
        self
    }
}

/// Huxley API client.
#[derive(Debug, Clone)]
pub struct HuxleyClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
    debug_log: Option<DebugLog>,
}

impl HuxleyClient {
    /// Create a new Huxley client with the given configuration.
    pub fn new(config: HuxleyConfig) -> Result<Self, HuxleyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token,
            debug_log: config.debug_log.map(DebugLog::new),
        })
    }

    /// URL of the filtered departure board, without the access token.
    pub fn departures_url(&self, from: &Crs, to: &Crs) -> String {
        format!("{}/departures/{}/to/{}", self.base_url, from, to)
    }

    /// Get the departure board at `from` for services calling at `to`.
    ///
    /// An empty board is a success; every transport, status or decoding
    /// failure is an error.
    pub async fn get_departures_to(
        &self,
        from: &Crs,
        to: &Crs,
    ) -> Result<DepartureBoard, HuxleyError> {
        let url = self.departures_url(from, to);
        debug!(%url, "fetching departure board");

        let response = self
            .http
            .get(&url)
            .query(&[("accessToken", self.access_token.as_str())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(HuxleyError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(HuxleyError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HuxleyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let payload: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| HuxleyError::json(e, &body))?;

        if let Some(log) = &self.debug_log
            && let Err(e) = log.append(&payload)
        {
            warn!(path = %log.path().display(), error = %e, "failed to write debug log");
        }

        let board: DepartureBoard =
            serde_json::from_value(payload).map_err(|e| HuxleyError::json(e, &body))?;

        debug!(services = board.services().len(), "received departure board");
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crs(s: &str) -> Crs {
        Crs::parse(s).unwrap()
    }

    #[test]
    fn config_builder() {
        let config = HuxleyConfig::new("token")
            .with_base_url("http://localhost:8080")
            .with_timeout(3)
            .with_debug_log("/tmp/log.json");

        assert_eq!(config.access_token, "token");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.debug_log, Some(PathBuf::from("/tmp/log.json")));
    }

    #[test]
    fn config_defaults() {
        let config = HuxleyConfig::new("token");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 10);
        assert!(config.debug_log.is_none());
    }

    #[test]
    fn departures_url() {
        let client = HuxleyClient::new(HuxleyConfig::new("token")).unwrap();
        assert_eq!(
            client.departures_url(&crs("PAD"), &crs("RDG")),
            "https://huxley.apphb.com/departures/PAD/to/RDG"
        );
    }

    #[test]
    fn departures_url_with_trailing_slash() {
        let config = HuxleyConfig::new("token").with_base_url("http://localhost:8080/");
        let client = HuxleyClient::new(config).unwrap();
        assert_eq!(
            client.departures_url(&crs("KGX"), &crs("CBG")),
            "http://localhost:8080/departures/KGX/to/CBG"
        );
    }
}
