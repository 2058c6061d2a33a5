//! Virtue and distinctive-feature loaders.

use std::path::Path;

use loremaster_core::{Feature, Virtue};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtueTable {
    pub virtues: Vec<Virtue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureTable {
    pub features: Vec<Feature>,
}

pub struct VirtueLoader;

impl VirtueLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Virtue>> {
        let content = read_file(path)?;
        let table: VirtueTable = parse_ron(&content, "virtue table", path)?;
        tracing::debug!(count = table.virtues.len(), path = %path.display(), "loaded virtues");
        Ok(table.virtues)
    }
}

pub struct FeatureLoader;

impl FeatureLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Feature>> {
        let content = read_file(path)?;
        let table: FeatureTable = parse_ron(&content, "feature table", path)?;
        tracing::debug!(count = table.features.len(), path = %path.display(), "loaded features");
        Ok(table.features)
    }
}
