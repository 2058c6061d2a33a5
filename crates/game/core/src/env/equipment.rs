pub trait EquipmentOracle: Send + Sync {
    fn catalogue(&self) -> &EquipmentCatalogue;
}

/// Body armour or helm.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmourEntry {
    pub id: String,
    pub name: String,
    pub rating: i32,
    pub load: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShieldEntry {
    pub id: String,
    pub name: String,
    pub parry_bonus: i32,
    pub load: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponPreset {
    pub name: String,
    pub damage: u32,
    pub injury: String,
    pub load: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EquipmentCatalogue {
    pub armour: Vec<ArmourEntry>,
    pub helms: Vec<ArmourEntry>,
    pub shields: Vec<ShieldEntry>,
    pub weapons: Vec<WeaponPreset>,
}

impl EquipmentCatalogue {
    pub fn armour(&self, id: &str) -> Option<&ArmourEntry> {
        self.armour.iter().find(|a| a.id == id)
    }

    pub fn helm(&self, id: &str) -> Option<&ArmourEntry> {
        self.helms.iter().find(|h| h.id == id)
    }

    pub fn shield(&self, id: &str) -> Option<&ShieldEntry> {
        self.shields.iter().find(|s| s.id == id)
    }

    pub fn weapon(&self, name: &str) -> Option<&WeaponPreset> {
        self.weapons.iter().find(|w| w.name.eq_ignore_ascii_case(name))
    }
}
