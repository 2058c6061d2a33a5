//! Heroic Culture loader.

use std::collections::HashSet;
use std::path::Path;

use loremaster_core::Culture;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron, read_file};

/// Culture table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CultureTable {
    pub cultures: Vec<Culture>,
}

/// Loader for the culture table.
pub struct CultureLoader;

impl CultureLoader {
    /// Load cultures from a RON file, in file order.
    ///
    /// Duplicate ids and cultures without any attribute set are rejected.
    pub fn load(path: &Path) -> LoadResult<Vec<Culture>> {
        let content = read_file(path)?;
        let table: CultureTable = parse_ron(&content, "culture table", path)?;

        let mut seen = HashSet::new();
        for culture in &table.cultures {
            if !seen.insert(culture.id.as_str()) {
                anyhow::bail!("Duplicate culture id '{}' in {}", culture.id, path.display());
            }
            if culture.attribute_sets.is_empty() {
                anyhow::bail!("Culture '{}' offers no attribute sets", culture.id);
            }
        }

        tracing::debug!(count = table.cultures.len(), path = %path.display(), "loaded cultures");
        Ok(table.cultures)
    }
}
