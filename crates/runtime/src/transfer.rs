//! Character file import and export.

use loremaster_core::{Character, CharacterError, CharacterSheet, RulesEnv, check_character};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("not a character file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("imported character rejected: {0}")]
    Rejected(#[from] CharacterError),
}

/// Parses and checks a character file.
///
/// The roster id is dropped so saving an import never overwrites a roster
/// entry by accident.
pub fn import_character(json: &str, env: &RulesEnv<'_>) -> Result<Character, TransferError> {
    let mut character: Character = serde_json::from_str(json)?;
    character.roster_id = None;
    check_character(&character, env)?;
    tracing::info!(name = %character.display_name(), "imported character");
    Ok(character)
}

/// Pretty JSON of the character document.
pub fn export_character(character: &Character) -> Result<String, TransferError> {
    Ok(serde_json::to_string_pretty(character)?)
}

/// Pretty JSON of the assembled sheet view.
pub fn export_sheet(sheet: &CharacterSheet) -> Result<String, TransferError> {
    Ok(serde_json::to_string_pretty(sheet)?)
}

/// File name for an exported character: the hero's name, lowercased and
/// reduced to letters, digits and dashes.
pub fn export_file_name(character: &Character) -> String {
    let slug = character
        .display_name()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    format!("{slug}.json")
}
