use std::collections::BTreeSet;

use crate::character::{Character, Skill};

/// Union of the culture favoured skill and the calling favoured skills.
pub fn compute_favoured_skills(character: &Character) -> BTreeSet<Skill> {
    character
        .culture_favoured_skill
        .into_iter()
        .chain(character.calling_favoured_skills.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favoured_skills_merge_without_duplicates() {
        let mut c = Character::new();
        assert!(compute_favoured_skills(&c).is_empty());

        c.culture_favoured_skill = Some(Skill::Battle);
        c.calling_favoured_skills = vec![Skill::Battle, Skill::Awe];
        let favoured = compute_favoured_skills(&c);
        assert_eq!(favoured.len(), 2);
        assert!(favoured.contains(&Skill::Awe));
        assert!(favoured.contains(&Skill::Battle));
    }
}
