//! The character draft.
//!
//! A [`Character`] holds only raw selections; every number shown on a sheet is
//! derived from it on demand (see [`crate::stats`]). The host owns the draft and
//! mutates it through the editing helpers below as the player works through the
//! wizard. None of the helpers consult anything but their arguments.

mod attributes;
mod equipment;
mod skills;
mod tracking;

pub use attributes::{Attribute, Attributes, FreeAssignment};
pub use equipment::{Equipment, GearItem, NO_ITEM, Weapon};
pub use skills::{
    CombatAllocation, CombatSkill, Skill, SkillAllocation, SkillGroup, empty_combat_allocation,
    empty_skill_allocation,
};
pub use tracking::{Note, Tracking, TrackingValues};

use std::collections::BTreeMap;

use crate::config::RulesConfig;
use crate::env::{Calling, Culture};

/// Biographical details. Only `name` is required to finish the wizard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Identity {
    pub name: String,
    pub age: String,
    pub height: String,
    pub eye_colour: String,
    pub hair_colour: String,
    pub patron: String,
    pub backstory: String,
}

/// A player-hero draft, from an empty sheet to a finished character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Character {
    /// Wizard step the draft was last saved on (1..=10).
    pub wizard_step: u8,
    pub identity: Identity,
    pub culture_id: Option<String>,
    pub calling_id: Option<String>,
    pub attributes: Attributes,
    pub attribute_bonus: Option<Attribute>,
    pub additional_skills: SkillAllocation,
    pub additional_combat: CombatAllocation,
    pub culture_favoured_skill: Option<Skill>,
    pub calling_favoured_skills: Vec<Skill>,
    pub virtues: Vec<String>,
    pub distinctive_features: Vec<String>,
    pub equipment: Equipment,
    pub valour: i32,
    pub wisdom: i32,
    #[cfg_attr(feature = "serde", serde(rename = "_tracking"))]
    pub tracking: Tracking,
    #[cfg_attr(feature = "serde", serde(rename = "_notes"))]
    pub notes: Vec<Note>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "_rosterId", skip_serializing_if = "Option::is_none")
    )]
    pub roster_id: Option<String>,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            wizard_step: 1,
            identity: Identity::default(),
            culture_id: None,
            calling_id: None,
            attributes: Attributes::unassigned(),
            attribute_bonus: None,
            additional_skills: empty_skill_allocation(),
            additional_combat: empty_combat_allocation(),
            culture_favoured_skill: None,
            calling_favoured_skills: Vec::new(),
            virtues: Vec::new(),
            distinctive_features: Vec::new(),
            equipment: Equipment::default(),
            valour: 1,
            wisdom: 1,
            tracking: Tracking::default(),
            notes: Vec::new(),
            roster_id: None,
        }
    }
}

impl Character {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name, falling back to "Unnamed Hero".
    pub fn display_name(&self) -> &str {
        let name = self.identity.name.trim();
        if name.is_empty() { "Unnamed Hero" } else { name }
    }

    /// Picks a culture and resets every later choice that depends on it.
    pub fn select_culture(&mut self, culture: &Culture) {
        self.culture_id = Some(culture.id.clone());
        self.calling_id = None;
        self.attributes = Attributes::unassigned();
        self.attribute_bonus = None;
        self.additional_skills = empty_skill_allocation();
        self.additional_combat = empty_combat_allocation();
        self.culture_favoured_skill = None;
        self.calling_favoured_skills.clear();
        self.virtues.clear();
        self.distinctive_features.clear();
    }

    /// Picks a calling; favoured skills chosen for a previous calling are dropped.
    pub fn select_calling(&mut self, calling: &Calling) {
        self.calling_id = Some(calling.id.clone());
        self.calling_favoured_skills.clear();
    }

    /// Toggles a calling favoured skill. Skills the calling does not offer, or
    /// picks beyond its count, are refused.
    pub fn toggle_calling_favoured_skill(&mut self, skill: Skill, calling: &Calling) -> bool {
        if let Some(pos) = self.calling_favoured_skills.iter().position(|s| *s == skill) {
            self.calling_favoured_skills.remove(pos);
            return true;
        }
        if !calling.favoured_skills.contains(&skill)
            || self.calling_favoured_skills.len() >= calling.favoured_skill_count
        {
            return false;
        }
        self.calling_favoured_skills.push(skill);
        true
    }

    /// Toggles the single culture favoured skill between the offered choices.
    pub fn toggle_culture_favoured_skill(&mut self, skill: Skill, culture: &Culture) -> bool {
        if !culture.favoured_skill_choices.contains(&skill) {
            return false;
        }
        self.culture_favoured_skill = if self.culture_favoured_skill == Some(skill) {
            None
        } else {
            Some(skill)
        };
        true
    }

    /// Toggles the +1 attribute bonus.
    pub fn toggle_attribute_bonus(&mut self, attribute: Attribute) {
        self.attribute_bonus = if self.attribute_bonus == Some(attribute) {
            None
        } else {
            Some(attribute)
        };
    }

    /// Sets the additional ranks of a common skill, unless that would exceed
    /// the skill pool.
    pub fn set_skill_rank(&mut self, skill: Skill, rank: u32, rules: &RulesConfig) -> bool {
        let others = spent_elsewhere(&self.additional_skills, &skill);
        if !fits_pool(others, rank, rules.skill_point_pool) {
            return false;
        }
        self.additional_skills.insert(skill, rank);
        true
    }

    /// Sets the additional ranks of a combat skill, unless that would exceed
    /// the combat pool.
    pub fn set_combat_rank(&mut self, skill: CombatSkill, rank: u32, rules: &RulesConfig) -> bool {
        let others = spent_elsewhere(&self.additional_combat, &skill);
        if !fits_pool(others, rank, rules.combat_point_pool) {
            return false;
        }
        self.additional_combat.insert(skill, rank);
        true
    }

    /// Toggles a virtue, refusing additions beyond `max`.
    pub fn toggle_virtue(&mut self, virtue_id: &str, max: usize) -> bool {
        toggle_bounded(&mut self.virtues, virtue_id, max)
    }

    /// Toggles a distinctive feature, refusing additions beyond `max`.
    pub fn toggle_distinctive_feature(&mut self, feature_id: &str, max: usize) -> bool {
        toggle_bounded(&mut self.distinctive_features, feature_id, max)
    }
}

/// Points spent on every key other than `key`, saturating.
fn spent_elsewhere<K: Ord>(ranks: &BTreeMap<K, u32>, key: &K) -> u32 {
    ranks
        .iter()
        .filter(|(k, _)| *k != key)
        .fold(0, |total: u32, (_, rank)| total.saturating_add(*rank))
}

/// Whether `rank` more points fit beside `others` already spent.
fn fits_pool(others: u32, rank: u32, pool: u32) -> bool {
    others.checked_add(rank).is_some_and(|used| used <= pool)
}

fn toggle_bounded(selected: &mut Vec<String>, id: &str, max: usize) -> bool {
    if let Some(pos) = selected.iter().position(|s| s == id) {
        selected.remove(pos);
        return true;
    }
    if selected.len() >= max {
        return false;
    }
    selected.push(id.to_string());
    true
}
