//! Command implementations for the CLI
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod draft;
mod roster;
mod share;
mod sheet;
mod validate;

pub use draft::{DraftClear, DraftSave, DraftShow};
pub use roster::{RosterDelete, RosterList, RosterSave, RosterShow, RosterVersions};
pub use share::{ShareDecode, ShareEncode};
pub use sheet::Sheet;
pub use validate::Validate;
