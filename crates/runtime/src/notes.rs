//! Session notes attached to a character.

use chrono::{SecondsFormat, Utc};
use loremaster_core::Note;

/// Editing helpers over a character's note list.
pub struct NoteBook<'a> {
    notes: &'a mut Vec<Note>,
}

impl<'a> NoteBook<'a> {
    pub fn new(notes: &'a mut Vec<Note>) -> Self {
        Self { notes }
    }

    /// Adds a note at the front and returns its id.
    pub fn add(&mut self, title: impl Into<String>, body: impl Into<String>) -> String {
        let now = timestamp();
        let note = Note {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            body: body.into(),
            created_at: now.clone(),
            updated_at: now,
        };
        let id = note.id.clone();
        self.notes.insert(0, note);
        id
    }

    /// Rewrites a note and bumps its update time. Returns false for unknown ids.
    pub fn update(&mut self, id: &str, title: impl Into<String>, body: impl Into<String>) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        note.title = title.into();
        note.body = body.into();
        note.updated_at = timestamp();
        true
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.notes.len() != before
    }

    /// Notes by most recent update first.
    pub fn sorted(&self) -> Vec<&Note> {
        let mut sorted: Vec<&Note> = self.notes.iter().collect();
        sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        sorted
    }
}

// Fixed-width UTC so string order is time order.
fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
