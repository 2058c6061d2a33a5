//! Loremaster command line.
//!
//! Validates, renders, shares and stores The One Ring characters using the
//! reference data in `LOREMASTER_DATA_DIR`. Run with: `loremaster <command>`

mod commands;
mod config;
mod dirs;
mod logging;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{
    DraftClear, DraftSave, DraftShow, RosterDelete, RosterList, RosterSave, RosterShow,
    RosterVersions, ShareDecode, ShareEncode, Sheet, Validate,
};
use config::ClientConfig;

/// Character tools for The One Ring, second edition
#[derive(Parser)]
#[command(name = "loremaster")]
#[command(about = "Character tools for The One Ring", long_about = None)]
#[command(version)]
struct Cli {
    /// Reference data directory (overrides LOREMASTER_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Roster directory (overrides LOREMASTER_ROSTER_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    roster_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Check a character file against the wizard steps
    Validate(Validate),

    /// Show a character sheet
    Sheet(Sheet),

    /// Share link commands
    #[command(subcommand)]
    Share(ShareCommand),

    /// Saved character commands
    #[command(subcommand)]
    Roster(RosterCommand),

    /// Autosave slot commands
    #[command(subcommand)]
    Draft(DraftCommand),
}

#[derive(Parser)]
enum ShareCommand {
    /// Encode a character file as a share link
    Encode(ShareEncode),

    /// Decode a share link into a character
    Decode(ShareDecode),
}

#[derive(Parser)]
enum RosterCommand {
    /// List saved characters
    List(RosterList),

    /// Save a character file to the roster
    Save(RosterSave),

    /// Show a saved character
    Show(RosterShow),

    /// Delete a saved character
    Delete(RosterDelete),

    /// List or restore recorded versions
    Versions(RosterVersions),
}

#[derive(Parser)]
enum DraftCommand {
    /// Show the autosaved draft
    Show(DraftShow),

    /// Put a character file in the autosave slot
    Save(DraftSave),

    /// Discard the autosaved draft
    Clear(DraftClear),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for LOREMASTER_* variables)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(dir) = cli.roster_dir {
        config.roster_dir = dir;
    }

    let _guard = logging::setup_logging(config.log_dir.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Command::Validate(cmd) => cmd.execute(&config),
        Command::Sheet(cmd) => cmd.execute(&config),
        Command::Share(share_cmd) => match share_cmd {
            ShareCommand::Encode(cmd) => cmd.execute(),
            ShareCommand::Decode(cmd) => cmd.execute(&config),
        },
        Command::Roster(roster_cmd) => match roster_cmd {
            RosterCommand::List(cmd) => cmd.execute(&config),
            RosterCommand::Save(cmd) => cmd.execute(&config),
            RosterCommand::Show(cmd) => cmd.execute(&config),
            RosterCommand::Delete(cmd) => cmd.execute(&config),
            RosterCommand::Versions(cmd) => cmd.execute(&config),
        },
        Command::Draft(draft_cmd) => match draft_cmd {
            DraftCommand::Show(cmd) => cmd.execute(&config),
            DraftCommand::Save(cmd) => cmd.execute(&config),
            DraftCommand::Clear(cmd) => cmd.execute(&config),
        },
    }
}
