//! Read-only character sheet view.
//!
//! Everything here is assembled from the draft and the reference tables at
//! build time. The sheet is what gets rendered or exported; it is never read
//! back.

use strum::IntoEnumIterator;

use crate::character::{
    Attribute, Attributes, Character, CombatSkill, Skill, SkillGroup, TrackingValues,
};
use crate::env::{Blessing, RulesEnv};
use crate::stats::{
    DerivedStats, LoadStatus, compute_favoured_skills, compute_load, compute_load_status,
    derive_stats,
};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SkillLine {
    pub skill: Skill,
    pub label: &'static str,
    pub group: SkillGroup,
    /// Culture starting rank plus points spent.
    pub rank: u32,
    pub favoured: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CombatLine {
    pub skill: CombatSkill,
    pub label: &'static str,
    pub rank: u32,
}

/// A virtue or feature id with its display name; unknown ids show as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NamedEntry {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CharacterSheet {
    pub name: String,
    pub culture: Option<String>,
    pub calling: Option<String>,
    pub standard_of_living: Option<String>,
    pub shadow_path: Option<String>,
    pub cultural_blessing: Option<Blessing>,
    pub calling_feature: Option<Blessing>,
    /// Scores with the attribute bonus folded in.
    pub attributes: Attributes,
    pub attribute_bonus: Option<Attribute>,
    /// Derived from the bonus-adjusted scores. Absent without a culture.
    pub derived: Option<DerivedStats>,
    pub skills: Vec<SkillLine>,
    pub combat: Vec<CombatLine>,
    pub virtues: Vec<NamedEntry>,
    pub distinctive_features: Vec<NamedEntry>,
    pub armour_total: i32,
    pub total_load: i32,
    pub load_status: LoadStatus,
    pub tracking: Option<TrackingValues>,
    pub valour: i32,
    pub wisdom: i32,
}

impl CharacterSheet {
    pub fn build(character: &Character, env: &RulesEnv<'_>) -> Self {
        let culture = env.culture(character.culture_id.as_deref());
        let calling = env.calling(character.calling_id.as_deref());

        let attributes = character.attributes.with_bonus(character.attribute_bonus);
        let adjusted = Character {
            attributes,
            ..character.clone()
        };
        let derived = derive_stats(&adjusted, culture);
        let tracking = derived.as_ref().map(|d| character.tracking.resolve(d));

        let favoured = compute_favoured_skills(character);
        let skills = Skill::iter()
            .map(|skill| {
                let base = culture
                    .and_then(|c| c.base_skills.get(&skill).copied())
                    .unwrap_or(0);
                let spent = character.additional_skills.get(&skill).copied().unwrap_or(0);
                SkillLine {
                    skill,
                    label: skill.label(),
                    group: skill.group(),
                    rank: base.saturating_add(spent),
                    favoured: favoured.contains(&skill),
                }
            })
            .collect();

        let combat_base = culture.map(|c| c.combat_base()).unwrap_or_default();
        let combat = CombatSkill::iter()
            .map(|skill| CombatLine {
                skill,
                label: skill.label(),
                rank: combat_base
                    .get(&skill)
                    .copied()
                    .unwrap_or(0)
                    .saturating_add(character.additional_combat.get(&skill).copied().unwrap_or(0)),
            })
            .collect();

        let virtues = character
            .virtues
            .iter()
            .map(|id| NamedEntry {
                id: id.clone(),
                name: env.virtue(id).map_or_else(|| id.clone(), |v| v.name.clone()),
            })
            .collect();
        let distinctive_features = character
            .distinctive_features
            .iter()
            .map(|id| NamedEntry {
                id: id.clone(),
                name: env.feature(id).map_or_else(|| id.clone(), |f| f.name.clone()),
            })
            .collect();

        let total_load = compute_load(&character.equipment);
        let load_status = tracking
            .map(|t| compute_load_status(total_load, t.current_endurance))
            .unwrap_or_default();

        Self {
            name: character.display_name().to_string(),
            culture: culture.map(|c| c.name.clone()),
            calling: calling.map(|c| c.name.clone()),
            standard_of_living: culture.map(|c| c.standard_of_living.clone()),
            shadow_path: calling.map(|c| c.shadow_path.clone()),
            cultural_blessing: culture.map(|c| c.cultural_blessing.clone()),
            calling_feature: calling.map(|c| c.additional_feature.clone()),
            attributes,
            attribute_bonus: character.attribute_bonus,
            derived,
            skills,
            combat,
            virtues,
            distinctive_features,
            armour_total: character.equipment.armour_total(),
            total_load,
            load_status,
            tracking,
            valour: character.valour,
            wisdom: character.wisdom,
        }
    }
}
