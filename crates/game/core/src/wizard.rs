//! Step-by-step navigation over a character draft.
//!
//! The wizard owns the draft while it is being edited and remembers which
//! pages the player has already passed. Moving forward runs the page's gate;
//! moving back never does.

use std::collections::BTreeSet;

use strum::IntoEnumIterator;

use crate::character::Character;
use crate::env::RulesEnv;
use crate::validation::{StepValidation, WizardStep, validate};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wizard {
    step: WizardStep,
    completed: BTreeSet<WizardStep>,
    character: Character,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(Character::new())
    }
}

impl Wizard {
    /// Opens the wizard on the welcome page.
    pub fn new(character: Character) -> Self {
        Self {
            step: WizardStep::FIRST,
            completed: BTreeSet::new(),
            character,
        }
    }

    /// Opens a loaded or decoded character on the review page with every
    /// step marked done, so the player can jump anywhere.
    pub fn resume_complete(mut character: Character) -> Self {
        character.wizard_step = WizardStep::LAST.number();
        Self {
            step: WizardStep::LAST,
            completed: WizardStep::iter().collect(),
            character,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn completed(&self) -> &BTreeSet<WizardStep> {
        &self.completed
    }

    pub fn is_completed(&self, step: WizardStep) -> bool {
        self.completed.contains(&step)
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    pub fn into_character(self) -> Character {
        self.character
    }

    /// Leaves the welcome page.
    pub fn start(&mut self) {
        self.completed.insert(WizardStep::Welcome);
        self.move_to(WizardStep::Culture);
    }

    /// Validates the current page and advances when it passes.
    ///
    /// On the last page a passing check only marks it completed.
    pub fn next(&mut self, env: &RulesEnv<'_>) -> Result<WizardStep, StepValidation> {
        let result = validate(self.step, &self.character, env);
        if !result.valid {
            return Err(result);
        }
        self.completed.insert(self.step);
        if let Some(next) = self.step.next() {
            self.move_to(next);
        }
        Ok(self.step)
    }

    /// Goes back one page without validating.
    pub fn previous(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.move_to(previous);
        }
        self.step
    }

    /// Jumps to `number` (clamped to the wizard's range).
    ///
    /// Only pages already reached are allowed: earlier pages, completed pages,
    /// and the page right after a completed one. Returns whether it moved.
    pub fn navigate(&mut self, number: u8) -> bool {
        let target = WizardStep::clamped(number);
        let reachable = target <= self.step
            || self.completed.contains(&target)
            || target
                .previous()
                .is_some_and(|previous| self.completed.contains(&previous));
        if reachable {
            self.move_to(target);
        }
        reachable
    }

    fn move_to(&mut self, step: WizardStep) {
        self.step = step;
        self.character.wizard_step = step.number();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Skill;
    use crate::testing::{complete_character, reference_data};

    #[test]
    fn start_leaves_the_welcome_page() {
        let mut wizard = Wizard::default();
        assert_eq!(wizard.step(), WizardStep::Welcome);
        wizard.start();
        assert_eq!(wizard.step(), WizardStep::Culture);
        assert!(wizard.is_completed(WizardStep::Welcome));
        assert_eq!(wizard.character().wizard_step, 2);
    }

    #[test]
    fn next_is_gated_by_the_current_page() {
        let data = reference_data();
        let env = data.env();
        let mut wizard = Wizard::default();
        wizard.start();

        let err = wizard.next(&env).unwrap_err();
        assert_eq!(err.message, "Please select a Heroic Culture.");
        assert_eq!(wizard.step(), WizardStep::Culture);

        wizard.character_mut().culture_id = Some("hobbits".into());
        assert_eq!(wizard.next(&env), Ok(WizardStep::Calling));

        wizard.character_mut().calling_id = Some("captain".into());
        wizard.character_mut().calling_favoured_skills = vec![Skill::Battle];
        assert!(wizard.next(&env).is_err());
        assert_eq!(wizard.previous(), WizardStep::Culture);
        assert_eq!(wizard.character().wizard_step, 2);
    }

    #[test]
    fn walking_a_complete_character_reaches_review() {
        let data = reference_data();
        let env = data.env();
        let mut wizard = Wizard::new(complete_character());
        wizard.start();
        while wizard.step() != WizardStep::Review {
            wizard.next(&env).unwrap();
        }
        assert_eq!(wizard.next(&env), Ok(WizardStep::Review));
        assert_eq!(wizard.completed().len(), 10);
    }

    #[test]
    fn navigation_only_reaches_visited_pages() {
        let mut wizard = Wizard::default();
        wizard.start();
        assert!(!wizard.navigate(7));
        assert!(wizard.navigate(1));
        assert_eq!(wizard.step(), WizardStep::Welcome);
        assert!(wizard.navigate(2));
        assert!(!wizard.navigate(3));
    }

    #[test]
    fn resumed_characters_open_on_review() {
        let mut wizard = Wizard::resume_complete(complete_character());
        assert_eq!(wizard.step(), WizardStep::Review);
        assert!(WizardStep::iter().all(|s| wizard.is_completed(s)));
        assert!(wizard.navigate(4));
        assert!(wizard.navigate(0));
        assert_eq!(wizard.step(), WizardStep::Welcome);
        assert!(wizard.navigate(99));
        assert_eq!(wizard.into_character().wizard_step, 10);
    }
}
