//! Content factory for building the reference dataset from data files.

use std::path::{Path, PathBuf};

use loremaster_core::{
    Calling, Culture, EquipmentCatalogue, Feature, ReferenceData, RulesConfig, Virtue,
};

use crate::loaders::{
    CallingLoader, ConfigLoader, CultureLoader, EquipmentLoader, FeatureLoader, LoadResult,
    VirtueLoader,
};

/// Content factory that loads all rule tables from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// ├── cultures.ron
/// ├── callings.ron
/// ├── virtues.ron
/// ├── features.ron
/// └── equipment.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rules configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<RulesConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join("config.toml"))
    }

    pub fn load_cultures(&self) -> LoadResult<Vec<Culture>> {
        CultureLoader::load(&self.data_dir.join("cultures.ron"))
    }

    pub fn load_callings(&self) -> LoadResult<Vec<Calling>> {
        CallingLoader::load(&self.data_dir.join("callings.ron"))
    }

    pub fn load_virtues(&self) -> LoadResult<Vec<Virtue>> {
        VirtueLoader::load(&self.data_dir.join("virtues.ron"))
    }

    pub fn load_features(&self) -> LoadResult<Vec<Feature>> {
        FeatureLoader::load(&self.data_dir.join("features.ron"))
    }

    pub fn load_equipment(&self) -> LoadResult<EquipmentCatalogue> {
        EquipmentLoader::load(&self.data_dir.join("equipment.ron"))
    }

    /// Load every table and check cross-references between them.
    ///
    /// Culture feature lists naming a feature that does not exist are logged
    /// and tolerated; those names simply never show up as choices.
    pub fn load_reference_data(&self) -> LoadResult<ReferenceData> {
        let data = ReferenceData {
            cultures: self.load_cultures()?,
            callings: self.load_callings()?,
            virtues: self.load_virtues()?,
            features: self.load_features()?,
            equipment: self.load_equipment()?,
            rules: self.load_config()?,
        };

        for culture in &data.cultures {
            for name in &culture.distinctive_features {
                if !data.features.iter().any(|f| &f.name == name) {
                    tracing::warn!(
                        culture = %culture.id,
                        feature = %name,
                        "culture lists an unknown distinctive feature"
                    );
                }
            }
        }

        tracing::info!(
            data_dir = %self.data_dir.display(),
            cultures = data.cultures.len(),
            callings = data.callings.len(),
            virtues = data.virtues.len(),
            features = data.features.len(),
            "reference data loaded"
        );
        Ok(data)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_tables_are_reported() {
        let factory = ContentFactory::new("/nonexistent/loremaster");
        let err = factory.load_reference_data().unwrap_err();
        assert!(err.to_string().contains("cultures.ron"));
    }
}
