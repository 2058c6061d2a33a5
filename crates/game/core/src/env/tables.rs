//! In-memory reference dataset backing every oracle.

use super::{
    Calling, CallingOracle, Culture, CultureOracle, EquipmentCatalogue, EquipmentOracle, Feature,
    FeatureOracle, RulesEnv, Virtue, VirtueOracle,
};
use crate::config::RulesConfig;

/// All static rule tables plus the rules config, owned in memory.
///
/// Loaded once by the host (see the content crate) and then only read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceData {
    pub cultures: Vec<Culture>,
    pub callings: Vec<Calling>,
    pub virtues: Vec<Virtue>,
    pub features: Vec<Feature>,
    pub equipment: EquipmentCatalogue,
    pub rules: RulesConfig,
}

impl ReferenceData {
    /// Borrows every table as a [`RulesEnv`].
    pub fn env(&self) -> RulesEnv<'_> {
        RulesEnv::with_all(self, self, self, self, self, &self.rules)
    }
}

impl CultureOracle for ReferenceData {
    fn culture(&self, id: &str) -> Option<&Culture> {
        self.cultures.iter().find(|c| c.id == id)
    }

    fn cultures(&self) -> &[Culture] {
        &self.cultures
    }
}

impl CallingOracle for ReferenceData {
    fn calling(&self, id: &str) -> Option<&Calling> {
        self.callings.iter().find(|c| c.id == id)
    }

    fn callings(&self) -> &[Calling] {
        &self.callings
    }
}

impl VirtueOracle for ReferenceData {
    fn virtue(&self, id: &str) -> Option<&Virtue> {
        self.virtues.iter().find(|v| v.id == id)
    }

    fn virtues(&self) -> &[Virtue] {
        &self.virtues
    }
}

impl FeatureOracle for ReferenceData {
    fn feature(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    fn features(&self) -> &[Feature] {
        &self.features
    }
}

impl EquipmentOracle for ReferenceData {
    fn catalogue(&self) -> &EquipmentCatalogue {
        &self.equipment
    }
}
