//! Encode and decode share links.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use loremaster_runtime::{
    decode_share_link, encode_share_link, export_character, export_file_name, share_url,
};

use crate::config::ClientConfig;
use crate::utils;

/// Turn a character file into a share link
#[derive(Parser)]
pub struct ShareEncode {
    /// Character JSON file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Page the link should open (prints the bare payload when omitted)
    #[arg(short, long, value_name = "URL")]
    base_url: Option<String>,
}

impl ShareEncode {
    pub fn execute(self) -> Result<()> {
        let character = utils::read_character(&self.file)?;
        let link = match &self.base_url {
            Some(base) => share_url(base, &character)?,
            None => encode_share_link(&character)?,
        };
        println!("{link}");
        Ok(())
    }
}

/// Turn a share link back into a character file
#[derive(Parser)]
pub struct ShareDecode {
    /// Share URL or bare payload
    #[arg(value_name = "LINK")]
    link: String,

    /// Write the character here instead of printing it
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write into the current directory, named after the hero
    #[arg(long, conflicts_with = "output")]
    save: bool,
}

impl ShareDecode {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let data = utils::load_reference_data(config)?;
        let character = decode_share_link(&self.link, &data.env())
            .context("Failed to open share link")?;
        let json = export_character(&character)?;

        let output = match (self.output, self.save) {
            (Some(path), _) => Some(path),
            (None, true) => Some(PathBuf::from(export_file_name(&character))),
            (None, false) => None,
        };

        match output {
            Some(path) => {
                std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!(
                    "{} {} -> {}",
                    style("Decoded").bold().green(),
                    character.display_name(),
                    path.display()
                );
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}
