//! Derived statistics.
//!
//! Endurance, Hope, Parry and the condition thresholds are pure functions of
//! the base attributes, the culture's modifiers and the shield. They are NOT
//! stored; every read recomputes them from the draft.

use crate::character::Character;
use crate::env::Culture;

/// Target numbers are this value minus the attribute score.
pub const TN_BASE: i32 = 20;

/// All derived statistics of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DerivedStats {
    /// Strength TN from the score passed in (no attribute bonus applied here)
    pub strength_tn: i32,
    pub heart_tn: i32,
    pub wits_tn: i32,

    /// Maximum Endurance: Strength + culture modifier
    pub endurance: i32,

    /// Maximum Hope: Heart + culture modifier
    pub hope: i32,

    /// Wits + culture modifier + shield parry bonus
    pub parry: i32,

    /// Half of Endurance, rounded up
    pub wound_threshold: i32,

    /// Weary once current Endurance drops to the carried Load or below
    pub weary_threshold: i32,

    /// Miserable once Shadow reaches Hope
    pub miserable_threshold: i32,
}

/// Computes every derived statistic for `character`.
///
/// Returns `None` while no culture is resolved: the numbers are not
/// computable yet, which is not an error. Unassigned attributes count as 0.
/// Sums saturate, so unchecked input never panics.
///
/// The attribute bonus is never applied here. Callers that want
/// bonus-adjusted values pass a character whose attributes are already
/// adjusted (see [`crate::character::Attributes::with_bonus`]).
pub fn derive_stats(character: &Character, culture: Option<&Culture>) -> Option<DerivedStats> {
    let culture = culture?;

    let strength = character.attributes.strength.unwrap_or(0);
    let heart = character.attributes.heart.unwrap_or(0);
    let wits = character.attributes.wits.unwrap_or(0);

    let modifiers = &culture.derived_stats;
    let endurance = strength.saturating_add(modifiers.endurance);
    let hope = heart.saturating_add(modifiers.hope);
    let base_parry = wits.saturating_add(modifiers.parry);
    let parry = base_parry.saturating_add(character.equipment.shield_parry_bonus);

    Some(DerivedStats {
        strength_tn: TN_BASE.saturating_sub(strength),
        heart_tn: TN_BASE.saturating_sub(heart),
        wits_tn: TN_BASE.saturating_sub(wits),
        endurance,
        hope,
        parry,
        wound_threshold: half_rounded_up(endurance),
        weary_threshold: endurance,
        miserable_threshold: hope,
    })
}

/// `ceil(value / 2)` for any sign.
const fn half_rounded_up(value: i32) -> i32 {
    value.div_euclid(2) + value.rem_euclid(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Attributes, SkillAllocation};
    use crate::env::{Blessing, CombatProficiencies, DerivedModifiers};

    fn culture(endurance: i32, hope: i32, parry: i32) -> Culture {
        Culture {
            id: "test".into(),
            name: "Test".into(),
            standard_of_living: "Common".into(),
            base_skills: SkillAllocation::new(),
            combat_proficiencies: CombatProficiencies::default(),
            derived_stats: DerivedModifiers {
                endurance,
                hope,
                parry,
            },
            cultural_blessing: Blessing::default(),
            attribute_sets: Vec::new(),
            favoured_skill_choices: Vec::new(),
            distinctive_features: Vec::new(),
            attribute_bonus: false,
        }
    }

    fn character(strength: i32, heart: i32, wits: i32) -> Character {
        Character {
            attributes: Attributes::new(strength, heart, wits),
            ..Character::default()
        }
    }

    #[test]
    fn missing_culture_yields_nothing() {
        assert_eq!(derive_stats(&character(5, 4, 6), None), None);
    }

    #[test]
    fn zero_modifier_scenario_with_shield() {
        let mut c = character(5, 4, 6);
        c.equipment.shield_parry_bonus = 1;

        let stats = derive_stats(&c, Some(&culture(0, 0, 0))).unwrap();
        assert_eq!(stats.endurance, 5);
        assert_eq!(stats.hope, 4);
        assert_eq!(stats.parry, 7);
        assert_eq!(stats.wound_threshold, 3);
        assert_eq!(stats.weary_threshold, 5);
        assert_eq!(stats.miserable_threshold, 4);
        assert_eq!(stats.strength_tn, 15);
        assert_eq!(stats.heart_tn, 16);
        assert_eq!(stats.wits_tn, 14);
    }

    #[test]
    fn endurance_tracks_strength_plus_modifier() {
        for modifier in [-3, 0, 20, 22] {
            let culture = culture(modifier, 0, 0);
            for strength in -5..=25 {
                let stats = derive_stats(&character(strength, 0, 0), Some(&culture)).unwrap();
                assert_eq!(stats.endurance, strength + modifier);
                assert_eq!(stats.weary_threshold, stats.endurance);
            }
        }
    }

    #[test]
    fn wound_threshold_rounds_up() {
        let culture = culture(0, 0, 0);
        let wound = |e| {
            derive_stats(&character(e, 0, 0), Some(&culture))
                .unwrap()
                .wound_threshold
        };
        assert_eq!(wound(7), 4);
        assert_eq!(wound(8), 4);
        assert_eq!(wound(0), 0);
        assert_eq!(wound(1), 1);
        assert_eq!(wound(-3), -1);
        assert_eq!(wound(-4), -2);
    }

    #[test]
    fn unassigned_attributes_count_as_zero() {
        let stats = derive_stats(&Character::new(), Some(&culture(20, 8, 12))).unwrap();
        assert_eq!(stats.endurance, 20);
        assert_eq!(stats.hope, 8);
        assert_eq!(stats.parry, 12);
        assert_eq!(stats.strength_tn, 20);
    }

    #[test]
    fn bonus_is_not_applied_by_the_deriver() {
        let mut c = character(5, 4, 6);
        c.attribute_bonus = Some(crate::character::Attribute::Strength);
        let culture = culture(20, 0, 0);

        let base = derive_stats(&c, Some(&culture)).unwrap();
        assert_eq!(base.endurance, 25);
        assert_eq!(base.strength_tn, 15);

        let adjusted = Character {
            attributes: c.attributes.with_bonus(c.attribute_bonus),
            ..c.clone()
        };
        let boosted = derive_stats(&adjusted, Some(&culture)).unwrap();
        assert_eq!(boosted.endurance, 26);
        assert_eq!(boosted.strength_tn, 14);
    }

    #[test]
    fn extreme_inputs_saturate() {
        let mut c = character(i32::MAX, i32::MIN, 6);
        c.equipment.shield_parry_bonus = i32::MAX;

        let stats = derive_stats(&c, Some(&culture(20, -8, 12))).unwrap();
        assert_eq!(stats.endurance, i32::MAX);
        assert_eq!(stats.hope, i32::MIN);
        assert_eq!(stats.parry, i32::MAX);
        assert_eq!(stats.wound_threshold, i32::MAX / 2 + 1);
        assert_eq!(stats.strength_tn, TN_BASE - i32::MAX);
        assert_eq!(stats.heart_tn, i32::MAX);
    }

    #[test]
    fn derivation_is_deterministic_and_leaves_inputs_alone() {
        let c = character(6, 5, 7);
        let culture = culture(18, 10, 12);
        let before = (c.clone(), culture.clone());
        let first = derive_stats(&c, Some(&culture));
        let second = derive_stats(&c, Some(&culture));
        assert_eq!(first, second);
        assert_eq!((c, culture), before);
    }
}
