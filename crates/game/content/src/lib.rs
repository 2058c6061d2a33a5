//! Data-driven rule tables and their loaders.
//!
//! This crate reads the static reference dataset from a data directory:
//! - Heroic Cultures, Callings (RON)
//! - Virtues and distinctive features (RON)
//! - The equipment catalogue (RON)
//! - Rules caps (TOML)
//!
//! All loaders produce loremaster-core types directly via serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CallingLoader, ConfigLoader, ContentFactory, CultureLoader, EquipmentLoader, FeatureLoader,
    LoadResult, VirtueLoader,
};
