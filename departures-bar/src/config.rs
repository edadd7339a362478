//! Run configuration.
//!
//! Defaults are compiled in and can be overridden per plugin through
//! environment variables. The configuration is immutable once loaded and is
//! passed explicitly to [`crate::app::run`].

use std::path::PathBuf;

use crate::display::{Formats, TemplateError, TemplateKind};
use crate::domain::{Crs, InvalidCrs};
use crate::huxley::{DEFAULT_BASE_URL, DEFAULT_DEBUG_LOG_PATH, DEFAULT_TIMEOUT_SECS, HuxleyConfig};

/// Station code meaning "not configured yet".
pub const PLACEHOLDER_CODE: &str = "xxx";

/// Public Huxley demo token.
pub const DEFAULT_ACCESS_TOKEN: &str = "DA1C7740-9DA0-11E4-80E6-A920340000B1";

pub const ORIGIN_VAR: &str = "RAIL_FROM";
pub const DESTINATION_VAR: &str = "RAIL_TO";
pub const SERVICE_COUNT_VAR: &str = "RAIL_SERVICE_COUNT";
pub const ON_TIME_FORMAT_VAR: &str = "RAIL_ON_TIME_FORMAT";
pub const KNOWN_DELAY_FORMAT_VAR: &str = "RAIL_KNOWN_DELAY_FORMAT";
pub const OTHER_FORMAT_VAR: &str = "RAIL_OTHER_FORMAT";
pub const ALERT_COLOR_VAR: &str = "RAIL_ALERT_COLOR";
pub const SEPARATOR_VAR: &str = "RAIL_SEPARATOR";
pub const BASE_URL_VAR: &str = "HUXLEY_URL";
pub const ACCESS_TOKEN_VAR: &str = "HUXLEY_ACCESS_TOKEN";
pub const DEBUG_VAR: &str = "RAIL_DEBUG";
pub const DEBUG_LOG_VAR: &str = "RAIL_DEBUG_LOG";

/// Configuration problems. These are reported to the user as a menu, not
/// treated as failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Origin or destination still unset or the placeholder
    #[error("{origin_var} and {destination_var} are not set")]
    MissingRoute {
        origin_var: &'static str,
        destination_var: &'static str,
    },

    /// A station code that is not a CRS code
    #[error("{var} is wrong: {source}")]
    InvalidStation {
        var: &'static str,
        source: InvalidCrs,
    },

    #[error("{var} must be a whole number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },

    #[error("{kind} template is wrong: {source}")]
    Template {
        kind: TemplateKind,
        source: TemplateError,
    },
}

/// The three per-service format templates.
///
/// Fields available: `{departure_time}` in all three, `{delay_minutes}` in
/// `known_delay`, `{status}` in `other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    pub on_time: String,
    pub known_delay: String,
    pub other: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            on_time: "{departure_time} on time".to_string(),
            known_delay: ":rage: {departure_time}: {delay_minutes}m late".to_string(),
            other: ":rage: {departure_time} {status}".to_string(),
        }
    }
}

/// A validated origin/destination pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub origin: Crs,
    pub destination: Crs,
}

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Station to depart from (CRS code)
    pub origin: String,
    /// Station the services must call at (CRS code)
    pub destination: String,
    /// Number of upcoming services to show. Menu bar hosts may hide a
    /// plugin whose title gets too long.
    pub service_count: usize,
    pub templates: Templates,
    /// Colour name passed to the host when any service is not on time
    pub alert_color: String,
    /// Placed between services
    pub separator: String,
    pub api_base_url: String,
    pub access_token: String,
    pub timeout_secs: u64,
    /// Append every raw API payload to `debug_log_path`
    pub debug: bool,
    pub debug_log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: PLACEHOLDER_CODE.to_string(),
            destination: PLACEHOLDER_CODE.to_string(),
            service_count: 2,
            templates: Templates::default(),
            alert_color: "red".to_string(),
            separator: "    ".to_string(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            access_token: DEFAULT_ACCESS_TOKEN.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            debug: false,
            debug_log_path: PathBuf::from(DEFAULT_DEBUG_LOG_PATH),
        }
    }
}

impl Config {
    /// Load the defaults overlaid with any `RAIL_*` / `HUXLEY_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the defaults overlaid with values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = lookup(ORIGIN_VAR) {
            config.origin = v;
        }
        if let Some(v) = lookup(DESTINATION_VAR) {
            config.destination = v;
        }
        if let Some(v) = lookup(SERVICE_COUNT_VAR) {
            config.service_count = v.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                var: SERVICE_COUNT_VAR,
                value: v.clone(),
            })?;
        }
        if let Some(v) = lookup(ON_TIME_FORMAT_VAR) {
            config.templates.on_time = v;
        }
        if let Some(v) = lookup(KNOWN_DELAY_FORMAT_VAR) {
            config.templates.known_delay = v;
        }
        if let Some(v) = lookup(OTHER_FORMAT_VAR) {
            config.templates.other = v;
        }
        if let Some(v) = lookup(ALERT_COLOR_VAR) {
            config.alert_color = v;
        }
        if let Some(v) = lookup(SEPARATOR_VAR) {
            config.separator = v;
        }
        if let Some(v) = lookup(BASE_URL_VAR) {
            config.api_base_url = v;
        }
        if let Some(v) = lookup(ACCESS_TOKEN_VAR) {
            config.access_token = v;
        }
        if let Some(v) = lookup(DEBUG_VAR) {
            config.debug = parse_flag(&v).ok_or_else(|| ConfigError::InvalidFlag {
                var: DEBUG_VAR,
                value: v.clone(),
            })?;
        }
        if let Some(v) = lookup(DEBUG_LOG_VAR) {
            config.debug_log_path = PathBuf::from(v);
        }

        Ok(config)
    }

    /// Set the origin and destination station codes.
    pub fn with_route(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.origin = origin.into();
        self.destination = destination.into();
        self
    }

    /// Set how many services to show.
    pub fn with_service_count(mut self, n: usize) -> Self {
        self.service_count = n;
        self
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Turn on payload logging to `path`.
    pub fn with_debug_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.debug = true;
        self.debug_log_path = path.into();
        self
    }

    /// The configured route, if both ends are set to real station codes.
    pub fn route(&self) -> Result<Route, ConfigError> {
        let unset = |code: &str| {
            let code = code.trim();
            code.is_empty() || code.eq_ignore_ascii_case(PLACEHOLDER_CODE)
        };

        if unset(&self.origin) || unset(&self.destination) {
            return Err(ConfigError::MissingRoute {
                origin_var: ORIGIN_VAR,
                destination_var: DESTINATION_VAR,
            });
        }

        let origin = Crs::parse(&self.origin).map_err(|source| ConfigError::InvalidStation {
            var: ORIGIN_VAR,
            source,
        })?;
        let destination =
            Crs::parse(&self.destination).map_err(|source| ConfigError::InvalidStation {
                var: DESTINATION_VAR,
                source,
            })?;

        Ok(Route {
            origin,
            destination,
        })
    }

    /// The parsed output templates.
    pub fn formats(&self) -> Result<Formats, ConfigError> {
        Formats::parse(
            &self.templates.on_time,
            &self.templates.known_delay,
            &self.templates.other,
            self.separator.as_str(),
            self.alert_color.as_str(),
        )
        .map_err(|(kind, source)| ConfigError::Template { kind, source })
    }

    /// Route and formats together, or the first problem found.
    pub fn validate(&self) -> Result<(Route, Formats), ConfigError> {
        Ok((self.route()?, self.formats()?))
    }

    /// Client settings for the departures API.
    pub fn huxley(&self) -> HuxleyConfig {
        let config = HuxleyConfig::new(self.access_token.as_str())
            .with_base_url(self.api_base_url.as_str())
            .with_timeout(self.timeout_secs);

        if self.debug {
            config.with_debug_log(self.debug_log_path.clone())
        } else {
            config
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.origin, "xxx");
        assert_eq!(config.destination, "xxx");
        assert_eq!(config.service_count, 2);
        assert_eq!(config.alert_color, "red");
        assert_eq!(config.separator, "    ");
        assert_eq!(config.api_base_url, "https://huxley.apphb.com");
        assert_eq!(config.timeout_secs, 10);
        assert!(!config.debug);
        assert_eq!(config.debug_log_path, PathBuf::from("/tmp/train-times.log"));
    }

    #[test]
    fn default_route_is_unset() {
        assert_eq!(
            Config::default().route().unwrap_err(),
            ConfigError::MissingRoute {
                origin_var: "RAIL_FROM",
                destination_var: "RAIL_TO"
            }
        );
    }

    #[test]
    fn one_end_unset_is_missing() {
        let config = Config::default().with_route("PAD", "xxx");
        assert!(matches!(
            config.route(),
            Err(ConfigError::MissingRoute { .. })
        ));

        let config = Config::default().with_route("", "RDG");
        assert!(matches!(
            config.route(),
            Err(ConfigError::MissingRoute { .. })
        ));

        let config = Config::default().with_route("PAD", "XXX");
        assert!(matches!(
            config.route(),
            Err(ConfigError::MissingRoute { .. })
        ));
    }

    #[test]
    fn route_parses_codes() {
        let route = Config::default().with_route("pad", "RDG").route().unwrap();
        assert_eq!(route.origin.as_str(), "PAD");
        assert_eq!(route.destination.as_str(), "RDG");
    }

    #[test]
    fn invalid_station_code() {
        let err = Config::default()
            .with_route("PAD", "Reading")
            .route()
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidStation { var: "RAIL_TO", .. }
        ));
        assert!(err.to_string().starts_with("RAIL_TO is wrong: "));
    }

    #[test]
    fn from_lookup_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("RAIL_FROM", "KGX"),
            ("RAIL_TO", "CBG"),
            ("RAIL_SERVICE_COUNT", " 3 "),
            ("RAIL_ALERT_COLOR", "orange"),
            ("RAIL_SEPARATOR", " | "),
            ("RAIL_ON_TIME_FORMAT", "{departure_time} ok"),
            ("HUXLEY_URL", "http://localhost:8080"),
            ("HUXLEY_ACCESS_TOKEN", "secret"),
            ("RAIL_DEBUG", "yes"),
            ("RAIL_DEBUG_LOG", "/var/tmp/trains.log"),
        ]))
        .unwrap();

        assert_eq!(config.origin, "KGX");
        assert_eq!(config.destination, "CBG");
        assert_eq!(config.service_count, 3);
        assert_eq!(config.alert_color, "orange");
        assert_eq!(config.separator, " | ");
        assert_eq!(config.templates.on_time, "{departure_time} ok");
        assert_eq!(config.templates.other, Templates::default().other);
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.access_token, "secret");
        assert!(config.debug);
        assert_eq!(config.debug_log_path, PathBuf::from("/var/tmp/trains.log"));
    }

    #[test]
    fn from_lookup_with_nothing_set_is_default() {
        assert_eq!(Config::from_lookup(|_| None).unwrap(), Config::default());
    }

    #[test]
    fn invalid_service_count() {
        let err = Config::from_lookup(lookup(&[("RAIL_SERVICE_COUNT", "-1")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                var: "RAIL_SERVICE_COUNT",
                value: "-1".into()
            }
        );
    }

    #[test]
    fn invalid_debug_flag() {
        let err = Config::from_lookup(lookup(&[("RAIL_DEBUG", "maybe")])).unwrap_err();
        assert_eq!(err.to_string(), "RAIL_DEBUG must be true or false, got \"maybe\"");
    }

    #[test]
    fn parse_flag_values() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("2"), None);
    }

    #[test]
    fn default_formats_parse() {
        assert!(Config::default().formats().is_ok());
    }

    #[test]
    fn bad_template() {
        let mut config = Config::default();
        config.templates.known_delay = "{departure_time} {delay}".to_string();

        let err = config.formats().unwrap_err();
        assert_eq!(
            err.to_string(),
            "known-delay template is wrong: unknown field {delay}"
        );
    }

    #[test]
    fn huxley_config() {
        let config = Config::default().with_base_url("http://localhost:1234");
        let huxley = config.huxley();
        assert_eq!(huxley.base_url, "http://localhost:1234");
        assert_eq!(huxley.access_token, DEFAULT_ACCESS_TOKEN);
        assert!(huxley.debug_log.is_none());

        let huxley = config.with_debug_log("/tmp/x.log").huxley();
        assert_eq!(huxley.debug_log, Some(PathBuf::from("/tmp/x.log")));
    }
}
