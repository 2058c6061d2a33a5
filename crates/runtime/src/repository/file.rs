//! File-based roster and draft storage.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use loremaster_core::Character;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{assign_roster_id, check_id, push_version, upsert_entry};
use super::{
    CharacterVersion, DEFAULT_MAX_VERSIONS, DraftRepository, RepositoryError, Result,
    RosterEntry, RosterRepository, SavedDraft,
};

/// JSON files under one directory.
///
/// ```text
/// base_dir/
/// ├── roster.json            index, newest first
/// ├── draft.json             autosave slot
/// ├── characters/<id>.json
/// └── versions/<id>.json
/// ```
///
/// Every write goes to a temp file that is then renamed into place. Saves are
/// serialized through an internal lock so the index is never updated by two
/// writers at once.
pub struct FileRoster {
    base_dir: PathBuf,
    max_versions: usize,
    write_lock: Mutex<()>,
}

impl FileRoster {
    /// Create a roster rooted at `base_dir`, creating directories as needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(base_dir.join("characters"))?;
        fs::create_dir_all(base_dir.join("versions"))?;
        Ok(Self {
            base_dir,
            max_versions: DEFAULT_MAX_VERSIONS,
            write_lock: Mutex::new(()),
        })
    }

    pub fn with_max_versions(mut self, max_versions: usize) -> Self {
        self.max_versions = max_versions.max(1);
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn index_path(&self) -> PathBuf {
        self.base_dir.join("roster.json")
    }

    fn draft_path(&self) -> PathBuf {
        self.base_dir.join("draft.json")
    }

    fn character_path(&self, id: &str) -> PathBuf {
        self.base_dir.join("characters").join(format!("{id}.json"))
    }

    fn versions_path(&self, id: &str) -> PathBuf {
        self.base_dir.join("versions").join(format!("{id}.json"))
    }

    fn read_index(&self) -> Result<Vec<RosterEntry>> {
        Ok(read_json(&self.index_path())?.unwrap_or_default())
    }
}

impl RosterRepository for FileRoster {
    fn save(&self, character: &Character) -> Result<String> {
        let (id, stored) = assign_roster_id(character);
        check_id(&id)?;
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let now = Utc::now();
        write_json(&self.character_path(&id), &stored)?;

        let mut history: Vec<CharacterVersion> =
            read_json(&self.versions_path(&id))?.unwrap_or_default();
        push_version(
            &mut history,
            CharacterVersion::snapshot(&stored, now),
            self.max_versions,
        );
        write_json(&self.versions_path(&id), &history)?;

        // Index last: an entry never points at a missing character file.
        let mut index = self.read_index()?;
        upsert_entry(&mut index, RosterEntry::for_character(&id, &stored, now));
        write_json(&self.index_path(), &index)?;

        tracing::info!(id = %id, name = %stored.display_name(), "saved character to roster");
        Ok(id)
    }

    fn load(&self, id: &str) -> Result<Option<Character>> {
        check_id(id)?;
        let character: Option<Character> = read_json(&self.character_path(id))?;
        if character.is_some() {
            tracing::debug!(id = %id, "loaded character from roster");
        }
        Ok(character)
    }

    fn delete(&self, id: &str) -> Result<()> {
        check_id(id)?;
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let mut index = self.read_index()?;
        let before = index.len();
        index.retain(|entry| entry.id != id);
        if index.len() != before {
            write_json(&self.index_path(), &index)?;
        }
        remove_if_exists(&self.character_path(id))?;
        remove_if_exists(&self.versions_path(id))?;

        tracing::info!(id = %id, "deleted character from roster");
        Ok(())
    }

    fn index(&self) -> Result<Vec<RosterEntry>> {
        self.read_index()
    }

    fn versions(&self, id: &str) -> Result<Vec<CharacterVersion>> {
        check_id(id)?;
        Ok(read_json(&self.versions_path(id))?.unwrap_or_default())
    }
}

impl DraftRepository for FileRoster {
    fn save_draft(&self, character: &Character) -> Result<()> {
        let draft = SavedDraft {
            character: character.clone(),
            saved_at: Utc::now(),
        };
        write_json(&self.draft_path(), &draft)?;
        tracing::debug!(step = character.wizard_step, "autosaved draft");
        Ok(())
    }

    fn load_draft(&self) -> Result<Option<SavedDraft>> {
        read_json(&self.draft_path())
    }

    fn clear_draft(&self) -> Result<()> {
        remove_if_exists(&self.draft_path())
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    let json =
        serde_json::to_string_pretty(value).map_err(|e| RepositoryError::Json(e.to_string()))?;
    fs::write(&temp_path, json)?;

    // Atomic rename
    fs::rename(&temp_path, path)?;

    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

/// Missing file is `Ok(None)`; unreadable JSON is corruption, not absence.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|e| RepositoryError::CorruptedData(format!("{}: {}", path.display(), e)))
}

fn remove_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}
