//! Render the character sheet for a character file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use loremaster_core::{Attribute, Character, CharacterSheet, LoadStatus, RulesEnv};
use loremaster_runtime::export_sheet;

use crate::config::ClientConfig;
use crate::utils;

/// Show the assembled character sheet
#[derive(Parser)]
pub struct Sheet {
    /// Character JSON file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sheet
    Summary,
    /// Full JSON export of the sheet
    Json,
}

impl Sheet {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let data = utils::load_reference_data(config)?;
        let character = utils::read_character(&self.file)?;
        render(&character, &data.env(), self.format)
    }
}

/// Builds and prints the sheet; also used by `roster show`.
pub fn render(character: &Character, env: &RulesEnv<'_>, format: OutputFormat) -> Result<()> {
    let sheet = CharacterSheet::build(character, env);
    match format {
        OutputFormat::Summary => print_summary(&sheet),
        OutputFormat::Json => {
            let json = export_sheet(&sheet).context("Failed to serialize sheet to JSON")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn print_summary(sheet: &CharacterSheet) {
    println!("{}", style(format!("=== {} ===", sheet.name)).bold().green());
    println!(
        "  {} / {}",
        sheet.culture.as_deref().unwrap_or("No culture"),
        sheet.calling.as_deref().unwrap_or("No calling")
    );
    if let Some(living) = &sheet.standard_of_living {
        println!("  Standard of Living: {living}");
    }
    if let Some(path) = &sheet.shadow_path {
        println!("  Shadow Path: {path}");
    }
    println!();

    println!("{}", style("Attributes:").bold().yellow());
    for attribute in Attribute::ALL {
        let score = sheet.attributes.get(attribute);
        let marker = if sheet.attribute_bonus == Some(attribute) {
            " (+1)"
        } else {
            ""
        };
        let label = attribute.label();
        match score {
            Some(score) => println!("  {label:<9} {score:>2}{marker}"),
            None => println!("  {label:<9}  -"),
        }
    }
    println!();

    match &sheet.derived {
        Some(derived) => {
            println!("{}", style("Derived:").bold().yellow());
            println!(
                "  TN  Strength {}  Heart {}  Wits {}",
                derived.strength_tn, derived.heart_tn, derived.wits_tn
            );
            println!(
                "  Endurance {}  Hope {}  Parry {}",
                derived.endurance, derived.hope, derived.parry
            );
            println!(
                "  Wound at {}  Weary at {}  Miserable at {}",
                derived.wound_threshold, derived.weary_threshold, derived.miserable_threshold
            );
        }
        None => println!("{}", style("Derived stats need a culture.").dim()),
    }
    println!();

    println!("{}", style("Skills:").bold().yellow());
    for line in sheet.skills.iter().filter(|l| l.rank > 0 || l.favoured) {
        let favoured = if line.favoured { "*" } else { " " };
        println!("  {favoured} {:<11} {}", line.label, line.rank);
    }
    for line in sheet.combat.iter().filter(|l| l.rank > 0) {
        println!("    {:<11} {}", line.label, line.rank);
    }
    println!();

    if !sheet.virtues.is_empty() || !sheet.distinctive_features.is_empty() {
        println!("{}", style("Virtues & Features:").bold().yellow());
        for entry in sheet.virtues.iter().chain(&sheet.distinctive_features) {
            println!("  {}", entry.name);
        }
        println!();
    }

    println!("{}", style("Gear:").bold().yellow());
    println!("  Armour {}  Load {}", sheet.armour_total, sheet.total_load);
    let status = match sheet.load_status {
        LoadStatus::None => style("unburdened").green(),
        LoadStatus::WearyOnNextHit => style("weary on next hit").yellow(),
        LoadStatus::Weary => style("weary").red(),
    };
    println!("  Status: {status}");
    if let Some(tracking) = &sheet.tracking {
        println!(
            "  Endurance {}/{}  Hope {}/{}  Shadow {}",
            tracking.current_endurance,
            tracking.max_endurance,
            tracking.current_hope,
            tracking.max_hope,
            tracking.current_shadow
        );
    }
    println!("  Valour {}  Wisdom {}", sheet.valour, sheet.wisdom);
}
