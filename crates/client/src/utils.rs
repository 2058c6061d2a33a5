//! Utility functions shared by commands

use std::path::Path;

use anyhow::{Context, Result};
use loremaster_content::ContentFactory;
use loremaster_core::{Character, ReferenceData};
use loremaster_runtime::FileRoster;

use crate::config::ClientConfig;

/// Loads every reference table from the configured data directory.
pub fn load_reference_data(config: &ClientConfig) -> Result<ReferenceData> {
    ContentFactory::new(config.data_dir.clone())
        .load_reference_data()
        .with_context(|| {
            format!(
                "Failed to load reference data from {}\n\nHint: set LOREMASTER_DATA_DIR or pass --data-dir",
                config.data_dir.display()
            )
        })
}

pub fn open_roster(config: &ClientConfig) -> Result<FileRoster> {
    let roster = FileRoster::new(&config.roster_dir).with_context(|| {
        format!(
            "Failed to open roster directory: {}",
            config.roster_dir.display()
        )
    })?;
    Ok(roster.with_max_versions(config.max_versions))
}

/// Reads a character document without any acceptance checks.
pub fn read_character(path: &Path) -> Result<Character> {
    let json = read_text(path)?;
    serde_json::from_str(&json)
        .with_context(|| format!("Not a character file: {}", path.display()))
}

pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
