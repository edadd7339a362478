//! The menu shown instead of departures when configuration is unusable.

use crate::config::ConfigError;

/// Title line of the misconfiguration menu.
pub const MISCONFIGURED_TITLE: &str = "Misconfigured - click for info | color=red";

/// Set by SwiftBar to the plugin script that launched us.
pub const PLUGIN_PATH_VAR: &str = "SWIFTBAR_PLUGIN_PATH";

/// The file a user edits to fix the configuration.
///
/// Settings come from the environment, which the host plugin script sets,
/// so prefer the script's path when the host reports it over our own.
pub fn plugin_path(lookup: impl Fn(&str) -> Option<String>, program: Option<String>) -> String {
    lookup(PLUGIN_PATH_VAR)
        .filter(|path| !path.is_empty())
        .or(program)
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// Build the multi-line menu text for a configuration error.
///
/// The first line is the status bar title; everything after the `---`
/// separator is only shown when the menu is opened. `program` is the path
/// the user should edit, usually from [`plugin_path`].
pub fn misconfiguration_message(err: &ConfigError, program: &str) -> String {
    let explanation = match err {
        ConfigError::MissingRoute {
            origin_var,
            destination_var,
        } => format!("{origin_var} and {destination_var} must be set for your route."),
        other => format!("{}.", capitalise(&other.to_string())),
    };

    [
        MISCONFIGURED_TITLE.to_string(),
        "---".to_string(),
        explanation,
        format!("Fix this by editing {program}"),
    ]
    .join("\n")
}

fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
