//! Run the wizard gates against a character file.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use loremaster_core::{
    Character, RulesEnv, StepValidation, WizardStep, check_character, validate_step,
};

use crate::config::ClientConfig;
use crate::utils;

/// Check which wizard steps a character file passes
#[derive(Parser)]
pub struct Validate {
    /// Character JSON file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Only check this step (1-10)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=10))]
    step: Option<u8>,
}

impl Validate {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let data = utils::load_reference_data(config)?;
        let env = data.env();
        let character = utils::read_character(&self.file)?;

        println!(
            "{} {}",
            style("Character:").bold().cyan(),
            character.display_name()
        );

        if let Err(e) = check_character(&character, &env) {
            println!("{} {}", style("Rejected:").bold().red(), e);
            bail!("{} would be refused on import", self.file.display());
        }
        println!();

        let steps: Vec<WizardStep> = match self.step.and_then(WizardStep::from_number) {
            Some(step) => vec![step],
            None => all_steps(),
        };

        let failures = report(&character, &env, &steps);
        if failures > 0 {
            bail!("{failures} step(s) incomplete");
        }

        println!();
        println!("{}", style("All checked steps are complete.").bold().green());
        Ok(())
    }
}

fn report(character: &Character, env: &RulesEnv<'_>, steps: &[WizardStep]) -> usize {
    let mut failures = 0;
    for step in steps {
        let StepValidation { valid, message } = validate_step(step.number(), character, env);
        if valid {
            println!(
                "  {} {:>2}. {}",
                style("✓").green(),
                step.number(),
                step.title()
            );
        } else {
            failures += 1;
            println!(
                "  {} {:>2}. {}  {}",
                style("✗").red(),
                step.number(),
                step.title(),
                style(message).yellow()
            );
        }
    }
    failures
}

fn all_steps() -> Vec<WizardStep> {
    (WizardStep::FIRST.number()..=WizardStep::LAST.number())
        .filter_map(WizardStep::from_number)
        .collect()
}
