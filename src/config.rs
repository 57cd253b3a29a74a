//! Runtime settings.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Environment variable naming an optional TOML settings file.
pub const SETTINGS_ENV: &str = "TEXTLENS_CONFIG";

/// Application settings. All fields have workable defaults, so running with
/// no settings file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Bind address for the `serve` command (port, host, or host:port).
    pub bind: String,
    /// Outbound fetch timeout in seconds.
    pub fetch_timeout_secs: u64,
    /// User agent sent with outbound fetches.
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3030".to_string(),
            fetch_timeout_secs: 30,
            user_agent: concat!("textlens/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the file named by `TEXTLENS_CONFIG`, or defaults
    /// when the variable is unset.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var(SETTINGS_ENV) {
            Ok(path) => Self::from_path(Path::new(&path)),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load settings from a TOML file.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let settings = toml::from_str(&raw)
            .with_context(|| format!("invalid settings file {}", path.display()))?;
        Ok(settings)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
