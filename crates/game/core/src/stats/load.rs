//! Load and the Weary condition.

use crate::character::Equipment;

/// How close the hero is to becoming Weary from carried Load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case")]
pub enum LoadStatus {
    #[default]
    None,
    /// One more point of Endurance lost makes the hero Weary.
    WearyOnNextHit,
    /// Current Endurance is at or below Load.
    Weary,
}

impl LoadStatus {
    pub const fn is_severe(self) -> bool {
        matches!(self, LoadStatus::Weary)
    }
}

/// Total Load: armour, helm, shield, every weapon and every gear item.
/// Saturates at the `i32` bounds.
pub fn compute_load(equipment: &Equipment) -> i32 {
    [
        equipment.armour_load,
        equipment.helm_load,
        equipment.shield_load,
    ]
    .into_iter()
    .chain(equipment.weapons.iter().map(|w| w.load))
    .chain(equipment.gear.iter().map(|g| g.load))
    .fold(0, i32::saturating_add)
}

/// Classifies current Endurance against total Load. No Load, no status.
pub fn compute_load_status(total_load: i32, current_endurance: i32) -> LoadStatus {
    if total_load == 0 {
        LoadStatus::None
    } else if current_endurance <= total_load {
        LoadStatus::Weary
    } else if current_endurance.saturating_sub(total_load) == 1 {
        LoadStatus::WearyOnNextHit
    } else {
        LoadStatus::None
    }
}
