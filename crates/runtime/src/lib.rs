//! Host-side services around the character engine.
//!
//! Everything that touches storage, encoding or the clock lives here so the
//! core stays pure:
//! - [`repository`] keeps the roster, version history and autosaved draft
//! - [`share`] encodes characters into shareable links and back
//! - [`transfer`] imports and exports character files
//! - [`notes`] edits the session notes stored on a character
pub mod notes;
pub mod repository;
pub mod share;
pub mod transfer;

pub use notes::NoteBook;
pub use repository::{
    CharacterVersion, DEFAULT_MAX_VERSIONS, DraftRepository, FileRoster, MemoryRoster,
    RepositoryError, RosterEntry, RosterRepository, SavedDraft,
};
pub use share::{SHARE_FRAGMENT, ShareError, decode_share_link, encode_share_link, share_url};
pub use transfer::{
    TransferError, export_character, export_file_name, export_sheet, import_character,
};
