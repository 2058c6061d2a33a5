//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific roster directory for Loremaster
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/loremaster/roster`
/// - Linux: `~/.local/share/loremaster/roster` (or `$XDG_DATA_HOME/loremaster/roster`)
/// - Windows: `%APPDATA%\loremaster\roster`
/// - Fallback: `./roster`
pub fn roster_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "loremaster")
        .map(|dirs| dirs.data_dir().join("roster"))
        .unwrap_or_else(|| PathBuf::from("./roster"))
}
