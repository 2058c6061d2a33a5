//! Per-step gate checks of the creation wizard.

use super::WizardStep;
use crate::character::Character;
use crate::env::RulesEnv;
use crate::stats::{validate_combat_points, validate_skill_points};

/// Outcome of a step check. `message` is empty when the step passes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepValidation {
    pub valid: bool,
    pub message: String,
}

impl StepValidation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    fn check(valid: bool, message: impl Into<String>) -> Self {
        if valid { Self::ok() } else { Self::fail(message) }
    }
}

/// Checks whether `character` satisfies the gate of step `step_number`.
///
/// Step numbers outside 1..=10 have no gate and always pass.
pub fn validate_step(step_number: u8, character: &Character, env: &RulesEnv<'_>) -> StepValidation {
    match WizardStep::from_number(step_number) {
        Some(step) => validate(step, character, env),
        None => StepValidation::ok(),
    }
}

/// Typed form of [`validate_step`].
pub fn validate(step: WizardStep, character: &Character, env: &RulesEnv<'_>) -> StepValidation {
    let rules = env.rules();
    match step {
        WizardStep::Welcome => StepValidation::ok(),

        WizardStep::Culture => StepValidation::check(
            character.culture_id.is_some(),
            "Please select a Heroic Culture.",
        ),

        WizardStep::Calling => {
            if character.calling_id.is_none() {
                return StepValidation::fail("Please select a Calling.");
            }
            // A calling missing from the tables counts as unsatisfied.
            let satisfied = env
                .calling(character.calling_id.as_deref())
                .is_some_and(|calling| {
                    character.calling_favoured_skills.len() >= calling.favoured_skill_count
                });
            StepValidation::check(satisfied, "Please choose your Calling favoured skills.")
        }

        WizardStep::Attributes => StepValidation::check(
            character.attributes.is_complete(),
            "Please select an attribute set.",
        ),

        WizardStep::Skills => {
            let skills = validate_skill_points(&character.additional_skills, rules.skill_point_pool);
            if !skills.valid {
                return StepValidation::fail(format!(
                    "Skill points exceed maximum ({}).",
                    skills.max
                ));
            }
            let combat =
                validate_combat_points(&character.additional_combat, rules.combat_point_pool);
            StepValidation::check(
                combat.valid,
                format!("Combat points exceed maximum ({}).", combat.max),
            )
        }

        // Empty or short virtue picks pass; the calling's cap is enforced on import.
        WizardStep::Virtues => StepValidation::ok(),

        WizardStep::Features => {
            let required = rules.distinctive_feature_count;
            StepValidation::check(
                character.distinctive_features.len() == required,
                format!("Please select exactly {required} Distinctive Features."),
            )
        }

        WizardStep::Equipment => StepValidation::ok(),

        WizardStep::Identity => StepValidation::check(
            !character.identity.name.is_empty(),
            "Please enter a character name.",
        ),

        WizardStep::Review => StepValidation::ok(),
    }
}

/// First step whose gate fails, if any.
pub fn first_incomplete_step(character: &Character, env: &RulesEnv<'_>) -> Option<WizardStep> {
    use strum::IntoEnumIterator;
    WizardStep::iter().find(|step| !validate(*step, character, env).valid)
}

/// True once every step's gate passes.
pub fn is_complete(character: &Character, env: &RulesEnv<'_>) -> bool {
    first_incomplete_step(character, env).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Attributes, CombatSkill, Skill};
    use crate::testing::{complete_character, reference_data};

    #[test]
    fn ungated_steps_always_pass() {
        let data = reference_data();
        let env = data.env();
        let empty = Character::new();
        for step in [1, 6, 8, 10, 0, 11, 255] {
            assert_eq!(validate_step(step, &empty, &env), StepValidation::ok());
        }
    }

    #[test]
    fn culture_step_requires_a_culture() {
        let data = reference_data();
        let mut c = Character::new();
        let result = validate_step(2, &c, &data.env());
        assert!(!result.valid);
        assert_eq!(result.message, "Please select a Heroic Culture.");

        c.culture_id = Some("hobbits".into());
        assert!(validate_step(2, &c, &data.env()).valid);
    }

    #[test]
    fn calling_step_requires_enough_favoured_skills() {
        let data = reference_data();
        let env = data.env();
        let mut c = Character::new();
        assert_eq!(validate_step(3, &c, &env).message, "Please select a Calling.");

        c.calling_id = Some("captain".into());
        c.calling_favoured_skills = vec![Skill::Battle];
        let result = validate_step(3, &c, &env);
        assert!(!result.valid);
        assert_eq!(result.message, "Please choose your Calling favoured skills.");

        c.calling_favoured_skills = vec![Skill::Battle, Skill::Awe];
        assert!(validate_step(3, &c, &env).valid);
    }

    #[test]
    fn unknown_calling_is_unsatisfied_not_a_crash() {
        let data = reference_data();
        let mut c = Character::new();
        c.calling_id = Some("burglar".into());
        c.calling_favoured_skills = vec![Skill::Stealth, Skill::Scan, Skill::Riddle];
        let result = validate_step(3, &c, &data.env());
        assert!(!result.valid);
        assert_eq!(result.message, "Please choose your Calling favoured skills.");

        let result = validate_step(3, &c, &RulesEnv::empty());
        assert!(!result.valid);
    }

    #[test]
    fn attributes_step_needs_all_three_scores() {
        let data = reference_data();
        let mut c = Character::new();
        c.attributes.strength = Some(5);
        c.attributes.heart = Some(7);
        let result = validate_step(4, &c, &data.env());
        assert_eq!(result.message, "Please select an attribute set.");

        c.attributes = Attributes::new(5, 7, 6);
        assert!(validate_step(4, &c, &data.env()).valid);
    }

    #[test]
    fn skills_step_flips_exactly_past_the_caps() {
        let data = reference_data();
        let env = data.env();
        let mut c = Character::new();
        c.additional_skills.insert(Skill::Lore, 12);
        c.additional_skills.insert(Skill::Craft, 8);
        c.additional_combat.insert(CombatSkill::Bows, 3);
        assert!(validate_step(5, &c, &env).valid);

        c.additional_skills.insert(Skill::Scan, 1);
        c.additional_combat.insert(CombatSkill::Axes, 1);
        let result = validate_step(5, &c, &env);
        assert!(!result.valid);
        assert_eq!(result.message, "Skill points exceed maximum (20).");

        c.additional_skills.insert(Skill::Scan, 0);
        let result = validate_step(5, &c, &env);
        assert_eq!(result.message, "Combat points exceed maximum (3).");
    }

    #[test]
    fn skills_step_rejects_allocations_that_would_wrap() {
        let data = reference_data();
        let env = data.env();
        let mut c = complete_character();
        c.additional_skills.insert(Skill::Awe, u32::MAX);
        c.additional_skills.insert(Skill::Lore, 1);
        let result = validate_step(5, &c, &env);
        assert!(!result.valid);
        assert_eq!(result.message, "Skill points exceed maximum (20).");
        assert!(!is_complete(&c, &env));

        let mut c = complete_character();
        c.additional_combat.insert(CombatSkill::Axes, u32::MAX);
        c.additional_combat.insert(CombatSkill::Spears, 1);
        assert!(!validate_step(5, &c, &env).valid);
    }

    #[test]
    fn virtue_count_is_not_enforced() {
        let data = reference_data();
        let mut c = complete_character();
        c.virtues.clear();
        assert!(validate_step(6, &c, &data.env()).valid);
    }

    #[test]
    fn features_step_wants_exactly_two() {
        let data = reference_data();
        let env = data.env();
        let mut c = Character::new();
        for (features, valid) in [
            (vec![], false),
            (vec!["bold"], false),
            (vec!["bold", "eager"], true),
            (vec!["bold", "eager", "fierce"], false),
        ] {
            c.distinctive_features = features.into_iter().map(String::from).collect();
            let result = validate_step(7, &c, &env);
            assert_eq!(result.valid, valid);
            if !valid {
                assert_eq!(result.message, "Please select exactly 2 Distinctive Features.");
            }
        }
    }

    #[test]
    fn identity_step_needs_a_name() {
        let data = reference_data();
        let mut c = Character::new();
        assert_eq!(
            validate_step(9, &c, &data.env()).message,
            "Please enter a character name."
        );
        c.identity.name = "Bilbo".into();
        assert!(validate_step(9, &c, &data.env()).valid);
    }

    #[test]
    fn completion_reports_first_failing_step() {
        let data = reference_data();
        let env = data.env();
        assert_eq!(
            first_incomplete_step(&Character::new(), &env),
            Some(WizardStep::Culture)
        );

        let mut c = complete_character();
        assert!(is_complete(&c, &env));

        c.distinctive_features.pop();
        assert_eq!(first_incomplete_step(&c, &env), Some(WizardStep::Features));
        assert!(!is_complete(&c, &env));
    }
}
