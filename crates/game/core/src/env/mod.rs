//! Traits describing read-only rule tables.
//!
//! Oracles expose cultures, callings, virtues, distinctive features and the
//! equipment catalogue. The [`RulesEnv`] aggregate bundles them so validation
//! and sheet assembly can reach everything they need without a global table
//! and without coupling to a concrete loader.
mod callings;
mod cultures;
mod equipment;
mod qualities;
mod tables;

pub use callings::{Calling, CallingOracle};
pub use cultures::{
    AttributeSet, Blessing, CombatProficiencies, Culture, CultureOracle, DerivedModifiers,
    ProficiencyRank,
};
pub use equipment::{ArmourEntry, EquipmentCatalogue, EquipmentOracle, ShieldEntry, WeaponPreset};
pub use qualities::{
    Feature, FeatureOracle, Restriction, Virtue, VirtueOracle, available_features,
    available_virtues,
};
pub use tables::ReferenceData;

use crate::config::RulesConfig;

static DEFAULT_RULES: RulesConfig = RulesConfig::new();

/// Aggregates the read-only oracles consulted by the engine.
///
/// Any oracle may be absent. Lookups through a missing oracle behave like a
/// lookup miss, which the engine treats as "not chosen yet".
#[derive(Clone, Copy)]
pub struct RulesEnv<'a> {
    cultures: Option<&'a dyn CultureOracle>,
    callings: Option<&'a dyn CallingOracle>,
    virtues: Option<&'a dyn VirtueOracle>,
    features: Option<&'a dyn FeatureOracle>,
    equipment: Option<&'a dyn EquipmentOracle>,
    rules: &'a RulesConfig,
}

impl<'a> RulesEnv<'a> {
    pub fn new(
        cultures: Option<&'a dyn CultureOracle>,
        callings: Option<&'a dyn CallingOracle>,
        virtues: Option<&'a dyn VirtueOracle>,
        features: Option<&'a dyn FeatureOracle>,
        equipment: Option<&'a dyn EquipmentOracle>,
        rules: &'a RulesConfig,
    ) -> Self {
        Self {
            cultures,
            callings,
            virtues,
            features,
            equipment,
            rules,
        }
    }

    pub fn with_all(
        cultures: &'a dyn CultureOracle,
        callings: &'a dyn CallingOracle,
        virtues: &'a dyn VirtueOracle,
        features: &'a dyn FeatureOracle,
        equipment: &'a dyn EquipmentOracle,
        rules: &'a RulesConfig,
    ) -> Self {
        Self::new(
            Some(cultures),
            Some(callings),
            Some(virtues),
            Some(features),
            Some(equipment),
            rules,
        )
    }

    /// No tables, default rules.
    pub fn empty() -> Self {
        Self::new(None, None, None, None, None, &DEFAULT_RULES)
    }

    pub fn rules(&self) -> &'a RulesConfig {
        self.rules
    }

    pub fn culture(&self, id: Option<&str>) -> Option<&'a Culture> {
        self.cultures?.culture(id?)
    }

    pub fn calling(&self, id: Option<&str>) -> Option<&'a Calling> {
        self.callings?.calling(id?)
    }

    pub fn virtue(&self, id: &str) -> Option<&'a Virtue> {
        self.virtues?.virtue(id)
    }

    pub fn virtues(&self) -> &'a [Virtue] {
        self.virtues.map(|o| o.virtues()).unwrap_or_default()
    }

    pub fn feature(&self, id: &str) -> Option<&'a Feature> {
        self.features?.feature(id)
    }

    pub fn features(&self) -> &'a [Feature] {
        self.features.map(|o| o.features()).unwrap_or_default()
    }

    pub fn catalogue(&self) -> Option<&'a EquipmentCatalogue> {
        self.equipment.map(|o| o.catalogue())
    }
}

impl core::fmt::Debug for RulesEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RulesEnv")
            .field("cultures", &self.cultures.is_some())
            .field("callings", &self.callings.is_some())
            .field("virtues", &self.virtues.is_some())
            .field("features", &self.features.is_some())
            .field("equipment", &self.equipment.is_some())
            .field("rules", self.rules)
            .finish()
    }
}
