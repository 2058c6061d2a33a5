//! Content loaders for reading rule tables from files.
//!
//! Each loader turns one RON/TOML file into the matching core types. The
//! [`ContentFactory`] ties them together for a whole data directory.

pub mod callings;
pub mod config;
pub mod cultures;
pub mod equipment;
pub mod factory;
pub mod qualities;

pub use callings::CallingLoader;
pub use config::ConfigLoader;
pub use cultures::CultureLoader;
pub use equipment::EquipmentLoader;
pub use factory::ContentFactory;
pub use qualities::{FeatureLoader, VirtueLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Parses RON text, naming `what` and the file in the error.
pub(crate) fn parse_ron<T>(content: &str, what: &str, path: &Path) -> LoadResult<T>
where
    T: serde::de::DeserializeOwned,
{
    ron::from_str(content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} RON at {}: {}", what, path.display(), e))
}
