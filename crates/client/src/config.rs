//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use loremaster_runtime::DEFAULT_MAX_VERSIONS;

use crate::dirs;

/// Where the CLI finds reference data and keeps the roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    pub roster_dir: PathBuf,
    pub max_versions: usize,
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            roster_dir: dirs::roster_dir(),
            max_versions: DEFAULT_MAX_VERSIONS,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `LOREMASTER_DATA_DIR` - Reference data directory (default: ./data)
    /// - `LOREMASTER_ROSTER_DIR` - Roster storage (default: platform-specific)
    /// - `LOREMASTER_MAX_VERSIONS` - Version history per character (default: 20)
    /// - `LOREMASTER_LOG_DIR` - Also write logs to a file here (default: unset)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("LOREMASTER_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(dir) = lookup("LOREMASTER_ROSTER_DIR") {
            config.roster_dir = PathBuf::from(dir);
        }

        if let Some(max) = lookup("LOREMASTER_MAX_VERSIONS").and_then(|v| v.parse::<usize>().ok())
        {
            config.max_versions = max.max(1);
        }

        config.log_dir = lookup("LOREMASTER_LOG_DIR").map(PathBuf::from);

        config
    }
}
