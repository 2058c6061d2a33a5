//! Worn and carried gear.
//!
//! Selecting an armour, helm or shield copies the catalogue values onto the
//! character so a saved sheet stays readable even if the catalogue changes.

use crate::env::{ArmourEntry, ShieldEntry, WeaponPreset};

/// Catalogue id used for an empty armour, helm or shield slot.
pub const NO_ITEM: &str = "none";

/// A weapon on the character's sheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Weapon {
    pub name: String,
    pub damage: u32,
    /// Injury rating; versatile weapons list two values ("14/16").
    pub injury: String,
    pub load: i32,
    pub notes: Option<String>,
}

impl From<&WeaponPreset> for Weapon {
    fn from(preset: &WeaponPreset) -> Self {
        Self {
            name: preset.name.clone(),
            damage: preset.damage,
            injury: preset.injury.clone(),
            load: preset.load,
            notes: preset.notes.clone(),
        }
    }
}

/// Miscellaneous carried item with a load value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GearItem {
    pub name: String,
    pub load: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Equipment {
    pub weapons: Vec<Weapon>,
    pub armour_id: String,
    pub armour_load: i32,
    pub armour_rating: i32,
    pub helm_id: String,
    pub helm_load: i32,
    pub helm_rating: i32,
    pub shield_id: String,
    pub shield_load: i32,
    pub shield_parry_bonus: i32,
    pub gear: Vec<GearItem>,
}

impl Default for Equipment {
    fn default() -> Self {
        Self {
            weapons: Vec::new(),
            armour_id: NO_ITEM.to_string(),
            armour_load: 0,
            armour_rating: 0,
            helm_id: NO_ITEM.to_string(),
            helm_load: 0,
            helm_rating: 0,
            shield_id: NO_ITEM.to_string(),
            shield_load: 0,
            shield_parry_bonus: 0,
            gear: Vec::new(),
        }
    }
}

impl Equipment {
    /// Wears `entry`, or strips the slot when `None`.
    pub fn equip_armour(&mut self, entry: Option<&ArmourEntry>) {
        match entry {
            Some(armour) => {
                self.armour_id = armour.id.clone();
                self.armour_load = armour.load;
                self.armour_rating = armour.rating;
            }
            None => {
                self.armour_id = NO_ITEM.to_string();
                self.armour_load = 0;
                self.armour_rating = 0;
            }
        }
    }

    pub fn equip_helm(&mut self, entry: Option<&ArmourEntry>) {
        match entry {
            Some(helm) => {
                self.helm_id = helm.id.clone();
                self.helm_load = helm.load;
                self.helm_rating = helm.rating;
            }
            None => {
                self.helm_id = NO_ITEM.to_string();
                self.helm_load = 0;
                self.helm_rating = 0;
            }
        }
    }

    pub fn equip_shield(&mut self, entry: Option<&ShieldEntry>) {
        match entry {
            Some(shield) => {
                self.shield_id = shield.id.clone();
                self.shield_load = shield.load;
                self.shield_parry_bonus = shield.parry_bonus;
            }
            None => {
                self.shield_id = NO_ITEM.to_string();
                self.shield_load = 0;
                self.shield_parry_bonus = 0;
            }
        }
    }

    /// Appends a weapon. Custom weapons without a name are ignored.
    pub fn add_weapon(&mut self, weapon: Weapon) -> bool {
        if weapon.name.trim().is_empty() {
            return false;
        }
        self.weapons.push(weapon);
        true
    }

    /// Removes the weapon at `index`, returning it if the index was valid.
    pub fn remove_weapon(&mut self, index: usize) -> Option<Weapon> {
        (index < self.weapons.len()).then(|| self.weapons.remove(index))
    }

    pub fn add_gear(&mut self, item: GearItem) {
        self.gear.push(item);
    }

    /// Armour rating of body armour plus helm.
    pub const fn armour_total(&self) -> i32 {
        self.armour_rating.saturating_add(self.helm_rating)
    }

    pub fn has_shield(&self) -> bool {
        self.shield_id != NO_ITEM
    }
}
