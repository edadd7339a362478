use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use departures_bar::app::{Outcome, run};
use departures_bar::config::Config;
use departures_bar::display::{misconfiguration_message, plugin_path};

/// Log filter when `RUST_LOG` is unset. Stdout belongs to the menu bar host,
/// so logs go to stderr and stay quiet by default.
const DEFAULT_LOG_FILTER: &str = "warn";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let program = plugin_path(|var| std::env::var(var).ok(), std::env::args().next());

    let outcome = match Config::from_env() {
        Ok(config) => run(&config).await,
        Err(e) => Ok(Outcome::Misconfigured(e)),
    };

    match outcome {
        Ok(Outcome::Departures(line)) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Misconfigured(e)) => {
            println!("{}", misconfiguration_message(&e, &program));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}
