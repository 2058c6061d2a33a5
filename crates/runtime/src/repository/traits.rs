//! Repository contracts for saving and loading characters.

use loremaster_core::Character;

use super::{CharacterVersion, Result, RosterEntry, SavedDraft};

/// Named collection of saved characters with per-character version history.
pub trait RosterRepository: Send + Sync {
    /// Saves `character`, returning its roster id.
    ///
    /// A character without a roster id gets a fresh one. The stored copy
    /// carries the id, the index entry is replaced, and a version is recorded.
    fn save(&self, character: &Character) -> Result<String>;

    /// Loads a saved character. `Ok(None)` when the id is not on the roster.
    fn load(&self, id: &str) -> Result<Option<Character>>;

    /// Removes the index entry, the character and its history.
    fn delete(&self, id: &str) -> Result<()>;

    /// Index entries, most recently saved first.
    fn index(&self) -> Result<Vec<RosterEntry>>;

    /// Recorded versions of a character, newest first.
    fn versions(&self, id: &str) -> Result<Vec<CharacterVersion>>;

    fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.index()?.iter().any(|entry| entry.id == id))
    }
}

/// Single autosave slot for the character currently being edited.
pub trait DraftRepository: Send + Sync {
    fn save_draft(&self, character: &Character) -> Result<()>;

    /// The last autosaved draft, `Ok(None)` when the slot is empty.
    fn load_draft(&self) -> Result<Option<SavedDraft>>;

    fn clear_draft(&self) -> Result<()>;
}
