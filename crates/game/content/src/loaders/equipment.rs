//! Equipment catalogue loader.

use std::path::Path;

use loremaster_core::{EquipmentCatalogue, NO_ITEM};

use crate::loaders::{LoadResult, parse_ron, read_file};

pub struct EquipmentLoader;

impl EquipmentLoader {
    /// Load the armour, helm, shield and weapon catalogue from a RON file.
    ///
    /// The id `"none"` is reserved for empty slots.
    pub fn load(path: &Path) -> LoadResult<EquipmentCatalogue> {
        let content = read_file(path)?;
        let catalogue: EquipmentCatalogue = parse_ron(&content, "equipment catalogue", path)?;

        let reserved = catalogue
            .armour
            .iter()
            .chain(&catalogue.helms)
            .map(|entry| entry.id.as_str())
            .chain(catalogue.shields.iter().map(|entry| entry.id.as_str()))
            .any(|id| id == NO_ITEM);
        if reserved {
            anyhow::bail!("Equipment id '{}' is reserved ({})", NO_ITEM, path.display());
        }

        tracing::debug!(
            armour = catalogue.armour.len(),
            helms = catalogue.helms.len(),
            shields = catalogue.shields.len(),
            weapons = catalogue.weapons.len(),
            "loaded equipment catalogue"
        );
        Ok(catalogue)
    }
}
