//! Manage saved characters.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use console::style;
use loremaster_runtime::{RosterRepository, import_character};

use super::sheet::{self, OutputFormat};
use crate::config::ClientConfig;
use crate::utils;

/// List saved characters, newest first
#[derive(Parser)]
pub struct RosterList {}

impl RosterList {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let roster = utils::open_roster(config)?;
        let entries = roster.index()?;

        println!(
            "{} {}",
            style("Roster:").bold().cyan(),
            roster.base_dir().display()
        );
        if entries.is_empty() {
            println!("  (empty)");
            return Ok(());
        }
        for entry in entries {
            println!(
                "  {}  {:<24} {:<10} {:<16} step {:>2}  {}",
                style(&entry.id).dim(),
                entry.name,
                entry.culture_id.as_deref().unwrap_or("-"),
                entry.calling_id.as_deref().unwrap_or("-"),
                entry.wizard_step,
                entry.saved_at.format("%Y-%m-%d %H:%M")
            );
        }
        Ok(())
    }
}

/// Import a character file into the roster
#[derive(Parser)]
pub struct RosterSave {
    /// Character JSON file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Overwrite this roster entry instead of creating a new one
    #[arg(long, value_name = "ID")]
    id: Option<String>,
}

impl RosterSave {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let data = utils::load_reference_data(config)?;
        let roster = utils::open_roster(config)?;

        let json = utils::read_text(&self.file)?;
        let mut character = import_character(&json, &data.env())
            .with_context(|| format!("Failed to import {}", self.file.display()))?;

        if let Some(id) = self.id {
            if !roster.exists(&id)? {
                bail!("No roster entry with id {id}");
            }
            character.roster_id = Some(id);
        }

        let id = roster.save(&character)?;
        println!(
            "{} {} as {}",
            style("Saved").bold().green(),
            character.display_name(),
            id
        );
        Ok(())
    }
}

/// Show a saved character's sheet
#[derive(Parser)]
pub struct RosterShow {
    #[arg(value_name = "ID")]
    id: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl RosterShow {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let data = utils::load_reference_data(config)?;
        let roster = utils::open_roster(config)?;
        let Some(character) = roster.load(&self.id)? else {
            bail!("No roster entry with id {}", self.id);
        };
        sheet::render(&character, &data.env(), self.format)
    }
}

/// Delete a saved character and its history
#[derive(Parser)]
pub struct RosterDelete {
    #[arg(value_name = "ID")]
    id: String,
}

impl RosterDelete {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let roster = utils::open_roster(config)?;
        if !roster.exists(&self.id)? {
            bail!("No roster entry with id {}", self.id);
        }
        roster.delete(&self.id)?;
        println!("{} {}", style("Deleted").bold().red(), self.id);
        Ok(())
    }
}

/// List recorded versions of a saved character
#[derive(Parser)]
pub struct RosterVersions {
    #[arg(value_name = "ID")]
    id: String,

    /// Write the version at this position (0 = newest) to a file
    #[arg(long, value_name = "N", requires = "output")]
    restore: Option<usize>,

    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl RosterVersions {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let roster = utils::open_roster(config)?;
        let versions = roster.versions(&self.id)?;
        if versions.is_empty() {
            bail!("No versions recorded for {}", self.id);
        }

        if let (Some(index), Some(path)) = (self.restore, &self.output) {
            let Some(version) = versions.get(index) else {
                bail!("Only {} versions recorded", versions.len());
            };
            let json = serde_json::to_string_pretty(&version.character)
                .context("Failed to serialize character")?;
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} version {} -> {}",
                style("Restored").bold().green(),
                index,
                path.display()
            );
            return Ok(());
        }

        println!("{}", style(format!("Versions of {}:", self.id)).bold().cyan());
        for (index, version) in versions.iter().enumerate() {
            println!(
                "  {:>2}. {}  {:<24} step {:>2}",
                index,
                version.timestamp.format("%Y-%m-%d %H:%M:%S"),
                version.character_name,
                version.step
            );
        }
        Ok(())
    }
}
