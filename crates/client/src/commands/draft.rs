//! Inspect the autosave slot.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use loremaster_core::first_incomplete_step;
use loremaster_runtime::{DraftRepository, export_character};

use crate::config::ClientConfig;
use crate::utils;

/// Show the autosaved draft
#[derive(Parser)]
pub struct DraftShow {
    /// Write the draft character to a file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl DraftShow {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let roster = utils::open_roster(config)?;
        let Some(draft) = roster.load_draft()? else {
            println!("No draft saved.");
            return Ok(());
        };

        let data = utils::load_reference_data(config)?;
        let character = &draft.character;
        println!(
            "{} {} (saved {})",
            style("Draft:").bold().cyan(),
            character.display_name(),
            draft.saved_at.format("%Y-%m-%d %H:%M")
        );
        match first_incomplete_step(character, &data.env()) {
            Some(step) => println!("  Next to finish: {}. {}", step.number(), step.title()),
            None => println!("  {}", style("Complete").green()),
        }

        if let Some(path) = self.output {
            std::fs::write(&path, export_character(character)?)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("  Written to {}", path.display());
        }
        Ok(())
    }
}

/// Autosave a character file into the draft slot
#[derive(Parser)]
pub struct DraftSave {
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

impl DraftSave {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let roster = utils::open_roster(config)?;
        let character = utils::read_character(&self.file)?;
        roster.save_draft(&character)?;
        println!("{} {}", style("Draft saved:").bold().green(), character.display_name());
        Ok(())
    }
}

/// Discard the autosaved draft
#[derive(Parser)]
pub struct DraftClear {}

impl DraftClear {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let roster = utils::open_roster(config)?;
        roster.clear_draft()?;
        println!("Draft cleared.");
        Ok(())
    }
}
