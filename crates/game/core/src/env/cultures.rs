use crate::character::{Attributes, CombatAllocation, CombatSkill, Skill, SkillAllocation};

pub trait CultureOracle: Send + Sync {
    fn culture(&self, id: &str) -> Option<&Culture>;

    /// Returns all cultures in presentation order.
    fn cultures(&self) -> &[Culture];
}

/// A Heroic Culture.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Culture {
    pub id: String,
    pub name: String,
    pub standard_of_living: String,
    /// Starting ranks in common skills. Shown on the sheet for reference; the
    /// skill pool is spent independently of them.
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_skills: SkillAllocation,
    #[cfg_attr(feature = "serde", serde(default))]
    pub combat_proficiencies: CombatProficiencies,
    pub derived_stats: DerivedModifiers,
    pub cultural_blessing: Blessing,
    pub attribute_sets: Vec<AttributeSet>,
    pub favoured_skill_choices: Vec<Skill>,
    /// Names of the distinctive features this culture may choose from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub distinctive_features: Vec<String>,
    /// Whether heroes of this culture may add +1 to one attribute.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attribute_bonus: bool,
}

impl Culture {
    /// Combat ranks granted outright by the culture.
    ///
    /// Entries offering an alternative ("Bows or Spears") are left at zero for
    /// the player to pick.
    pub fn combat_base(&self) -> CombatAllocation {
        let mut base = crate::character::empty_combat_allocation();
        for rank in &self.combat_proficiencies.fixed {
            if rank.or.is_none() {
                base.insert(rank.skill, rank.rank);
            }
        }
        base
    }

    pub fn has_free_assign_set(&self) -> bool {
        self.attribute_sets
            .iter()
            .any(|set| matches!(set, AttributeSet::FreeAssign))
    }
}

/// Flat modifiers added to attributes to produce Endurance, Hope and Parry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedModifiers {
    pub endurance: i32,
    pub hope: i32,
    pub parry: i32,
}

/// A named rules feature with its text (cultural blessing, calling feature).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blessing {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatProficiencies {
    pub fixed: Vec<ProficiencyRank>,
}

/// A starting combat rank, optionally with an alternative skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProficiencyRank {
    pub skill: CombatSkill,
    pub rank: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub or: Option<CombatSkill>,
}

/// One of the attribute arrays a culture offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeSet {
    Fixed { strength: i32, heart: i32, wits: i32 },
    /// The player distributes the configured free-assign values.
    FreeAssign,
}

impl AttributeSet {
    /// Scores to store when this set is picked. The free-assign set starts
    /// empty until all of its values are placed.
    pub const fn attributes(&self) -> Attributes {
        match *self {
            AttributeSet::Fixed {
                strength,
                heart,
                wits,
            } => Attributes::new(strength, heart, wits),
            AttributeSet::FreeAssign => Attributes::unassigned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combat_base_skips_alternatives() {
        let culture = Culture {
            id: "bardings".into(),
            name: "Bardings".into(),
            standard_of_living: "Prosperous".into(),
            base_skills: SkillAllocation::new(),
            combat_proficiencies: CombatProficiencies {
                fixed: vec![
                    ProficiencyRank {
                        skill: CombatSkill::Swords,
                        rank: 2,
                        or: None,
                    },
                    ProficiencyRank {
                        skill: CombatSkill::Bows,
                        rank: 1,
                        or: Some(CombatSkill::Spears),
                    },
                ],
            },
            derived_stats: DerivedModifiers::default(),
            cultural_blessing: Blessing::default(),
            attribute_sets: vec![AttributeSet::FreeAssign],
            favoured_skill_choices: Vec::new(),
            distinctive_features: Vec::new(),
            attribute_bonus: false,
        };

        let base = culture.combat_base();
        assert_eq!(base[&CombatSkill::Swords], 2);
        assert_eq!(base[&CombatSkill::Bows], 0);
        assert_eq!(base[&CombatSkill::Spears], 0);
        assert!(culture.has_free_assign_set());
    }

    #[test]
    fn fixed_sets_assign_scores() {
        let set = AttributeSet::Fixed {
            strength: 5,
            heart: 7,
            wits: 2,
        };
        assert_eq!(set.attributes(), Attributes::new(5, 7, 2));
        assert!(!AttributeSet::FreeAssign.attributes().is_complete());
    }
}
