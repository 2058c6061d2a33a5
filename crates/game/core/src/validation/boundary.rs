//! Acceptance checks for characters arriving from outside the host.
//!
//! An imported file or a decoded share link can claim anything. The wizard
//! gates only ask "is this step done?"; these checks ask "could the wizard
//! have produced this?". Incompleteness is allowed, contradictions are not.

use std::collections::BTreeSet;

use crate::character::{Attribute, Character, Equipment};
use crate::config::RulesConfig;
use crate::env::RulesEnv;
use crate::error::CharacterError;
use crate::stats::{validate_combat_points, validate_skill_points};

/// Rejects characters that reference unknown data or break a hard cap.
pub fn check_character(character: &Character, env: &RulesEnv<'_>) -> Result<(), CharacterError> {
    let rules = env.rules();

    if !(1..=RulesConfig::STEP_COUNT).contains(&character.wizard_step) {
        return Err(CharacterError::StepOutOfRange(character.wizard_step));
    }

    for attribute in Attribute::ALL {
        if let Some(value) = character.attributes.get(attribute)
            && !(RulesConfig::MIN_ATTRIBUTE..=RulesConfig::MAX_ATTRIBUTE).contains(&value)
        {
            return Err(CharacterError::AttributeOutOfRange {
                attribute: attribute.to_string(),
                value,
            });
        }
    }

    check_equipment(&character.equipment)?;

    let culture = match character.culture_id.as_deref() {
        Some(id) => Some(
            env.culture(Some(id))
                .ok_or_else(|| CharacterError::UnknownCulture(id.to_string()))?,
        ),
        None => None,
    };

    if let Some(skill) = character.culture_favoured_skill
        && let Some(culture) = culture
        && !culture.favoured_skill_choices.contains(&skill)
    {
        return Err(CharacterError::CultureSkillNotOffered(skill.to_string()));
    }

    if let Some(id) = character.calling_id.as_deref() {
        if culture.is_none() {
            return Err(CharacterError::CallingWithoutCulture(id.to_string()));
        }
        let calling = env
            .calling(Some(id))
            .ok_or_else(|| CharacterError::UnknownCalling(id.to_string()))?;

        let count = character.calling_favoured_skills.len();
        if count > calling.favoured_skill_count {
            return Err(CharacterError::TooManyFavouredSkills {
                count,
                max: calling.favoured_skill_count,
            });
        }
        if let Some(skill) = character
            .calling_favoured_skills
            .iter()
            .find(|s| !calling.favoured_skills.contains(s))
        {
            return Err(CharacterError::FavouredSkillNotOffered(skill.to_string()));
        }

        let count = character.virtues.len();
        if count > calling.starting_virtues {
            return Err(CharacterError::TooManyVirtues {
                count,
                max: calling.starting_virtues,
            });
        }
    }

    if let Some(&rank) = character
        .additional_skills
        .values()
        .find(|&&rank| rank > rules.skill_point_pool)
    {
        return Err(CharacterError::SkillPoolExceeded {
            allocated: rank,
            max: rules.skill_point_pool,
        });
    }
    if let Some(&rank) = character
        .additional_combat
        .values()
        .find(|&&rank| rank > rules.combat_point_pool)
    {
        return Err(CharacterError::CombatPoolExceeded {
            allocated: rank,
            max: rules.combat_point_pool,
        });
    }

    let skills = validate_skill_points(&character.additional_skills, rules.skill_point_pool);
    if !skills.valid {
        return Err(CharacterError::SkillPoolExceeded {
            allocated: skills.allocated,
            max: skills.max,
        });
    }
    let combat = validate_combat_points(&character.additional_combat, rules.combat_point_pool);
    if !combat.valid {
        return Err(CharacterError::CombatPoolExceeded {
            allocated: combat.allocated,
            max: combat.max,
        });
    }

    let count = character.distinctive_features.len();
    if count > rules.distinctive_feature_count {
        return Err(CharacterError::TooManyFeatures {
            count,
            max: rules.distinctive_feature_count,
        });
    }
    if let Some(dup) = first_duplicate(&character.distinctive_features) {
        return Err(CharacterError::DuplicateFeature(dup.to_string()));
    }
    if let Some(unknown) = character
        .distinctive_features
        .iter()
        .find(|id| env.feature(id).is_none())
    {
        return Err(CharacterError::UnknownFeature(unknown.clone()));
    }

    if let Some(dup) = first_duplicate(&character.virtues) {
        return Err(CharacterError::DuplicateVirtue(dup.to_string()));
    }
    if let Some(unknown) = character.virtues.iter().find(|id| env.virtue(id).is_none()) {
        return Err(CharacterError::UnknownVirtue(unknown.clone()));
    }

    Ok(())
}

/// Every load, rating and bonus must lie in `0..=MAX_EQUIPMENT_VALUE`.
fn check_equipment(equipment: &Equipment) -> Result<(), CharacterError> {
    let slots = [
        ("armour load", equipment.armour_load),
        ("armour rating", equipment.armour_rating),
        ("helm load", equipment.helm_load),
        ("helm rating", equipment.helm_rating),
        ("shield load", equipment.shield_load),
        ("shield parry bonus", equipment.shield_parry_bonus),
    ]
    .into_iter()
    .map(|(field, value)| (field.to_string(), i64::from(value)));

    let weapons = equipment.weapons.iter().flat_map(|w| {
        [
            (format!("{} load", w.name), i64::from(w.load)),
            (format!("{} damage", w.name), i64::from(w.damage)),
        ]
    });
    let gear = equipment
        .gear
        .iter()
        .map(|g| (format!("{} load", g.name), i64::from(g.load)));

    let range = 0..=i64::from(RulesConfig::MAX_EQUIPMENT_VALUE);
    match slots
        .chain(weapons)
        .chain(gear)
        .find(|(_, value)| !range.contains(value))
    {
        Some((field, value)) => Err(CharacterError::EquipmentOutOfRange { field, value }),
        None => Ok(()),
    }
}

fn first_duplicate(ids: &[String]) -> Option<&str> {
    let mut seen = BTreeSet::new();
    ids.iter()
        .map(String::as_str)
        .find(|id| !seen.insert(*id))
}
