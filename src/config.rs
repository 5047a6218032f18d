use std::path::{Path, PathBuf};

use serde::Deserialize;

// =============================================================================
// Network-related constants
// =============================================================================

/// Default repository host
pub const DEFAULT_BASE_URL: &str = "https://github.com";

/// Default timeout for the release lookup in milliseconds (10 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Maximum number of redirects followed while resolving the latest release
pub const MAX_REDIRECTS: usize = 10;

/// Checker configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    /// Host serving `<owner>/<repository>/releases/latest`
    pub base_url: String,
    /// Timeout for the whole request, redirects included
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: format!("release-checker/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl CheckerConfig {
    /// Loads a JSON configuration file, using defaults for missing fields
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

/// Returns the default log file: `<local data dir>/release-checker/release-checker.log`,
/// relative to the current directory when no data directory is known.
pub fn log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("release-checker")
        .join("release-checker.log")
}
