//! Skill and combat-skill identifiers plus their point allocations.
//!
//! The 18 common skills and 5 combat skills are fixed by the rules. Both are
//! closed enums so an allocation map can never carry an unknown key.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

/// One of the 18 common skills.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Skill {
    Awe,
    Athletics,
    Awareness,
    Hunting,
    Song,
    Craft,
    Enhearten,
    Battle,
    Travel,
    Courtesy,
    Insight,
    Healing,
    Persuade,
    Stealth,
    Scan,
    Explore,
    Riddle,
    Lore,
}

impl Skill {
    pub const COUNT: usize = 18;

    /// Attribute column the skill is listed under on the sheet.
    pub const fn group(self) -> SkillGroup {
        match self {
            Skill::Awe
            | Skill::Athletics
            | Skill::Awareness
            | Skill::Hunting
            | Skill::Song
            | Skill::Craft => SkillGroup::Strength,
            Skill::Enhearten
            | Skill::Battle
            | Skill::Travel
            | Skill::Courtesy
            | Skill::Insight
            | Skill::Healing => SkillGroup::Heart,
            Skill::Persuade
            | Skill::Stealth
            | Skill::Scan
            | Skill::Explore
            | Skill::Riddle
            | Skill::Lore => SkillGroup::Wits,
        }
    }

    /// Human-readable label ("Awe", "Enhearten", ...).
    pub const fn label(self) -> &'static str {
        match self {
            Skill::Awe => "Awe",
            Skill::Athletics => "Athletics",
            Skill::Awareness => "Awareness",
            Skill::Hunting => "Hunting",
            Skill::Song => "Song",
            Skill::Craft => "Craft",
            Skill::Enhearten => "Enhearten",
            Skill::Battle => "Battle",
            Skill::Travel => "Travel",
            Skill::Courtesy => "Courtesy",
            Skill::Insight => "Insight",
            Skill::Healing => "Healing",
            Skill::Persuade => "Persuade",
            Skill::Stealth => "Stealth",
            Skill::Scan => "Scan",
            Skill::Explore => "Explore",
            Skill::Riddle => "Riddle",
            Skill::Lore => "Lore",
        }
    }

    /// Skills listed under the given column, in sheet order.
    pub fn in_group(group: SkillGroup) -> impl Iterator<Item = Skill> {
        Skill::iter().filter(move |skill| skill.group() == group)
    }
}

/// Sheet column a common skill belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum SkillGroup {
    Strength,
    Heart,
    Wits,
}

/// One of the 5 combat proficiencies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CombatSkill {
    Axes,
    Bows,
    Spears,
    Swords,
    Knives,
}

impl CombatSkill {
    pub const COUNT: usize = 5;

    pub const fn label(self) -> &'static str {
        match self {
            CombatSkill::Axes => "Axes",
            CombatSkill::Bows => "Bows",
            CombatSkill::Spears => "Spears",
            CombatSkill::Swords => "Swords",
            CombatSkill::Knives => "Knives",
        }
    }
}

/// Additional points spent on common skills, one entry per skill.
pub type SkillAllocation = BTreeMap<Skill, u32>;

/// Additional points spent on combat proficiencies, one entry per combat skill.
pub type CombatAllocation = BTreeMap<CombatSkill, u32>;

/// Returns an allocation with every common skill at zero.
pub fn empty_skill_allocation() -> SkillAllocation {
    Skill::iter().map(|skill| (skill, 0)).collect()
}

/// Returns an allocation with every combat skill at zero.
pub fn empty_combat_allocation() -> CombatAllocation {
    CombatSkill::iter().map(|skill| (skill, 0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eighteen_skills_split_evenly_across_groups() {
        assert_eq!(Skill::iter().count(), Skill::COUNT);
        assert_eq!(Skill::in_group(SkillGroup::Strength).count(), 6);
        assert_eq!(Skill::in_group(SkillGroup::Heart).count(), 6);
        assert_eq!(Skill::in_group(SkillGroup::Wits).count(), 6);
    }

    #[test]
    fn skill_ids_parse_from_lowercase() {
        assert_eq!("enhearten".parse::<Skill>(), Ok(Skill::Enhearten));
        assert_eq!("Lore".parse::<Skill>(), Ok(Skill::Lore));
        assert_eq!(Skill::Awe.as_ref(), "awe");
        assert_eq!("knives".parse::<CombatSkill>(), Ok(CombatSkill::Knives));
        assert!("polearms".parse::<CombatSkill>().is_err());
    }

    #[test]
    fn empty_allocations_cover_every_key() {
        let skills = empty_skill_allocation();
        assert_eq!(skills.len(), Skill::COUNT);
        assert!(skills.values().all(|v| *v == 0));

        let combat = empty_combat_allocation();
        assert_eq!(combat.len(), CombatSkill::COUNT);
    }
}
