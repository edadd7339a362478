//! Append-only log of raw board payloads, for diagnosing odd output.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default location of the debug log.
pub const DEFAULT_DEBUG_LOG_PATH: &str = "/tmp/train-times.log";

/// Appends pretty-printed JSON payloads to a file.
#[derive(Debug, Clone)]
pub struct DebugLog {
    path: PathBuf,
}

impl DebugLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one payload, creating the file if needed.
    pub fn append(&self, payload: &serde_json::Value) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(payload)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
