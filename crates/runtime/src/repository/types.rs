//! Records kept by roster repositories.

use chrono::{DateTime, Utc};
use loremaster_core::Character;
use serde::{Deserialize, Serialize};

/// Version history entries kept per character unless configured otherwise.
pub const DEFAULT_MAX_VERSIONS: usize = 20;

/// One line of the roster index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    pub culture_id: Option<String>,
    pub calling_id: Option<String>,
    pub saved_at: DateTime<Utc>,
    pub wizard_step: u8,
}

impl RosterEntry {
    pub fn for_character(id: &str, character: &Character, saved_at: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            name: character.display_name().to_string(),
            culture_id: character.culture_id.clone(),
            calling_id: character.calling_id.clone(),
            saved_at,
            wizard_step: character.wizard_step,
        }
    }
}

/// A snapshot recorded each time a character is saved to the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterVersion {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub character_name: String,
    pub step: u8,
    pub character: Character,
}

impl CharacterVersion {
    pub fn snapshot(character: &Character, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp,
            character_name: character.display_name().to_string(),
            step: character.wizard_step,
            character: character.clone(),
        }
    }
}

/// The autosaved work-in-progress draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDraft {
    pub character: Character,
    pub saved_at: DateTime<Utc>,
}

/// Returns the character's roster id, minting a new one for first saves.
pub(crate) fn assign_roster_id(character: &Character) -> (String, Character) {
    let id = character
        .roster_id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let stored = Character {
        roster_id: Some(id.clone()),
        ..character.clone()
    };
    (id, stored)
}

/// Inserts or replaces the entry for `entry.id`, keeping the index newest first.
pub(crate) fn upsert_entry(index: &mut Vec<RosterEntry>, entry: RosterEntry) {
    index.retain(|e| e.id != entry.id);
    index.insert(0, entry);
    index.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
}

/// Prepends `version` and drops the oldest beyond `max`.
pub(crate) fn push_version(history: &mut Vec<CharacterVersion>, version: CharacterVersion, max: usize) {
    history.insert(0, version);
    history.truncate(max);
}

/// Roster ids double as file names, so only a safe alphabet is accepted.
pub(crate) fn check_id(id: &str) -> super::Result<()> {
    let valid = !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(super::RepositoryError::InvalidId(id.to_string()))
    }
}
