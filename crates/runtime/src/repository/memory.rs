//! In-memory roster for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use loremaster_core::Character;

use super::types::{assign_roster_id, push_version, upsert_entry};
use super::{
    CharacterVersion, DEFAULT_MAX_VERSIONS, DraftRepository, RepositoryError, Result,
    RosterEntry, RosterRepository, SavedDraft,
};

#[derive(Default)]
struct RosterState {
    index: Vec<RosterEntry>,
    characters: HashMap<String, Character>,
    versions: HashMap<String, Vec<CharacterVersion>>,
    draft: Option<SavedDraft>,
}

/// Thread-safe but not persistent across process restarts.
pub struct MemoryRoster {
    state: RwLock<RosterState>,
    max_versions: usize,
}

impl MemoryRoster {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RosterState::default()),
            max_versions: DEFAULT_MAX_VERSIONS,
        }
    }

    pub fn with_max_versions(mut self, max_versions: usize) -> Self {
        self.max_versions = max_versions.max(1);
        self
    }
}

impl Default for MemoryRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterRepository for MemoryRoster {
    fn save(&self, character: &Character) -> Result<String> {
        let (id, stored) = assign_roster_id(character);
        let now = Utc::now();
        let mut state = self
            .state
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let history = state.versions.entry(id.clone()).or_default();
        push_version(
            history,
            CharacterVersion::snapshot(&stored, now),
            self.max_versions,
        );
        upsert_entry(
            &mut state.index,
            RosterEntry::for_character(&id, &stored, now),
        );
        state.characters.insert(id.clone(), stored);
        Ok(id)
    }

    fn load(&self, id: &str) -> Result<Option<Character>> {
        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(state.characters.get(id).cloned())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        state.index.retain(|entry| entry.id != id);
        state.characters.remove(id);
        state.versions.remove(id);
        Ok(())
    }

    fn index(&self) -> Result<Vec<RosterEntry>> {
        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(state.index.clone())
    }

    fn versions(&self, id: &str) -> Result<Vec<CharacterVersion>> {
        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(state.versions.get(id).cloned().unwrap_or_default())
    }
}

impl DraftRepository for MemoryRoster {
    fn save_draft(&self, character: &Character) -> Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        state.draft = Some(SavedDraft {
            character: character.clone(),
            saved_at: Utc::now(),
        });
        Ok(())
    }

    fn load_draft(&self) -> Result<Option<SavedDraft>> {
        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(state.draft.clone())
    }

    fn clear_draft(&self) -> Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        state.draft = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Character {
        let mut c = Character::new();
        c.identity.name = name.into();
        c
    }

    #[test]
    fn save_assigns_id_and_records_versions() {
        let roster = MemoryRoster::new().with_max_versions(2);
        let id = roster.save(&named("Bilbo")).unwrap();

        let mut stored = roster.load(&id).unwrap().unwrap();
        assert_eq!(stored.roster_id.as_deref(), Some(id.as_str()));

        stored.wizard_step = 5;
        assert_eq!(roster.save(&stored).unwrap(), id);
        stored.wizard_step = 6;
        roster.save(&stored).unwrap();

        let versions = roster.versions(&id).unwrap();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0].step, 6);
        assert_eq!(versions[0].character_name, "Bilbo");
        assert_eq!(roster.index().unwrap().len(), 1);
        assert!(roster.exists(&id).unwrap());
    }

    #[test]
    fn delete_removes_everything() {
        let roster = MemoryRoster::new();
        let id = roster.save(&named("Frodo")).unwrap();
        roster.delete(&id).unwrap();
        assert!(roster.load(&id).unwrap().is_none());
        assert!(roster.versions(&id).unwrap().is_empty());
        assert!(roster.index().unwrap().is_empty());
    }

    #[test]
    fn draft_slot_round_trip() {
        let roster = MemoryRoster::new();
        assert!(roster.load_draft().unwrap().is_none());
        roster.save_draft(&named("Sam")).unwrap();
        let draft = roster.load_draft().unwrap().unwrap();
        assert_eq!(draft.character.identity.name, "Sam");
        roster.clear_draft().unwrap();
        assert!(roster.load_draft().unwrap().is_none());
    }
}
