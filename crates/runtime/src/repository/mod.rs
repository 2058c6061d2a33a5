//! Repository layer for saved characters.
//!
//! Repositories handle data the player creates:
//! - The roster of saved characters and its index
//! - Version history per character
//! - The autosaved work-in-progress draft
//!
//! Static rule tables are handled by the content crate, not repositories.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileRoster;
pub use memory::MemoryRoster;
pub use traits::{DraftRepository, RosterRepository};
pub use types::{CharacterVersion, DEFAULT_MAX_VERSIONS, RosterEntry, SavedDraft};
