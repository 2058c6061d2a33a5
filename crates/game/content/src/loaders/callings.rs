//! Calling loader.

use std::collections::HashSet;
use std::path::Path;

use loremaster_core::Calling;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallingTable {
    pub callings: Vec<Calling>,
}

pub struct CallingLoader;

impl CallingLoader {
    /// Load callings from a RON file.
    ///
    /// A calling must offer at least as many favoured skills as it asks the
    /// player to pick, or its wizard step could never pass.
    pub fn load(path: &Path) -> LoadResult<Vec<Calling>> {
        let content = read_file(path)?;
        let table: CallingTable = parse_ron(&content, "calling table", path)?;

        let mut seen = HashSet::new();
        for calling in &table.callings {
            if !seen.insert(calling.id.as_str()) {
                anyhow::bail!("Duplicate calling id '{}' in {}", calling.id, path.display());
            }
            if calling.favoured_skills.len() < calling.favoured_skill_count {
                anyhow::bail!(
                    "Calling '{}' asks for {} favoured skills but offers {}",
                    calling.id,
                    calling.favoured_skill_count,
                    calling.favoured_skills.len()
                );
            }
        }

        tracing::debug!(count = table.callings.len(), path = %path.display(), "loaded callings");
        Ok(table.callings)
    }
}
