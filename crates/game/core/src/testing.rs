//! Small reference dataset shared by unit tests.

use crate::character::{Attributes, Character, CombatSkill, Skill, SkillAllocation};
use crate::config::RulesConfig;
use crate::env::{
    ArmourEntry, AttributeSet, Blessing, Calling, CombatProficiencies, Culture, DerivedModifiers,
    EquipmentCatalogue, Feature, ProficiencyRank, ReferenceData, Restriction, ShieldEntry, Virtue,
    WeaponPreset,
};

fn blessing(name: &str) -> Blessing {
    Blessing {
        name: name.into(),
        description: format!("{name} text"),
    }
}

fn hobbits() -> Culture {
    let mut base_skills = SkillAllocation::new();
    base_skills.insert(Skill::Stealth, 3);
    base_skills.insert(Skill::Riddle, 2);
    Culture {
        id: "hobbits".into(),
        name: "Hobbits of the Shire".into(),
        standard_of_living: "Common".into(),
        base_skills,
        combat_proficiencies: CombatProficiencies {
            fixed: vec![
                ProficiencyRank {
                    skill: CombatSkill::Bows,
                    rank: 2,
                    or: None,
                },
                ProficiencyRank {
                    skill: CombatSkill::Knives,
                    rank: 1,
                    or: Some(CombatSkill::Swords),
                },
            ],
        },
        derived_stats: DerivedModifiers {
            endurance: 18,
            hope: 10,
            parry: 12,
        },
        cultural_blessing: blessing("Hobbit-sense"),
        attribute_sets: vec![
            AttributeSet::Fixed {
                strength: 3,
                heart: 6,
                wits: 5,
            },
            AttributeSet::FreeAssign,
        ],
        favoured_skill_choices: vec![Skill::Courtesy, Skill::Stealth],
        distinctive_features: vec!["Bold".into(), "Eager".into(), "Fierce".into()],
        attribute_bonus: false,
    }
}

fn rangers() -> Culture {
    Culture {
        id: "rangers".into(),
        name: "Rangers of the North".into(),
        standard_of_living: "Frugal".into(),
        base_skills: SkillAllocation::new(),
        combat_proficiencies: CombatProficiencies::default(),
        derived_stats: DerivedModifiers {
            endurance: 20,
            hope: 6,
            parry: 14,
        },
        cultural_blessing: blessing("Kings of Men"),
        attribute_sets: vec![AttributeSet::Fixed {
            strength: 7,
            heart: 5,
            wits: 6,
        }],
        favoured_skill_choices: vec![Skill::Awareness, Skill::Explore],
        distinctive_features: vec!["Fierce".into(), "Tall".into()],
        attribute_bonus: true,
    }
}

fn captain() -> Calling {
    Calling {
        id: "captain".into(),
        name: "Captain".into(),
        shadow_path: "Lure of Power".into(),
        favoured_skills: vec![Skill::Battle, Skill::Enhearten, Skill::Persuade],
        favoured_skill_count: 2,
        starting_virtues: 1,
        additional_feature: blessing("Leadership"),
        description: String::new(),
    }
}

fn scholar() -> Calling {
    Calling {
        id: "scholar".into(),
        name: "Scholar".into(),
        shadow_path: "Lure of Secrets".into(),
        favoured_skills: vec![Skill::Craft, Skill::Lore, Skill::Riddle],
        favoured_skill_count: 2,
        starting_virtues: 1,
        additional_feature: blessing("Rhymes of Lore"),
        description: String::new(),
    }
}

fn virtue(id: &str, restriction: Option<Restriction>, is_cultural_blessing: bool) -> Virtue {
    Virtue {
        id: id.into(),
        name: id.replace('-', " "),
        description: String::new(),
        restriction,
        is_cultural_blessing,
    }
}

fn feature(id: &str, name: &str) -> Feature {
    Feature {
        id: id.into(),
        name: name.into(),
        description: String::new(),
    }
}

pub(crate) fn reference_data() -> ReferenceData {
    ReferenceData {
        cultures: vec![hobbits(), rangers()],
        callings: vec![captain(), scholar()],
        virtues: vec![
            virtue("confidence", None, false),
            virtue("hardiness", None, false),
            virtue("hobbit-sense", None, true),
            virtue(
                "small-folk",
                Some(Restriction::Cultures(vec!["hobbits".into()])),
                false,
            ),
        ],
        features: vec![
            feature("bold", "Bold"),
            feature("eager", "Eager"),
            feature("fierce", "Fierce"),
            feature("tall", "Tall"),
        ],
        equipment: EquipmentCatalogue {
            armour: vec![ArmourEntry {
                id: "leather-shirt".into(),
                name: "Leather shirt".into(),
                rating: 1,
                load: 3,
            }],
            helms: vec![ArmourEntry {
                id: "helm".into(),
                name: "Helm".into(),
                rating: 4,
                load: 4,
            }],
            shields: vec![ShieldEntry {
                id: "buckler".into(),
                name: "Buckler".into(),
                parry_bonus: 1,
                load: 2,
            }],
            weapons: vec![WeaponPreset {
                name: "Short sword".into(),
                damage: 3,
                injury: "16".into(),
                load: 2,
                notes: None,
            }],
        },
        rules: RulesConfig::default(),
    }
}

/// A hobbit captain that passes every step.
pub(crate) fn complete_character() -> Character {
    let mut c = Character::new();
    c.culture_id = Some("hobbits".into());
    c.calling_id = Some("captain".into());
    c.attributes = Attributes::new(3, 6, 5);
    c.culture_favoured_skill = Some(Skill::Stealth);
    c.calling_favoured_skills = vec![Skill::Battle, Skill::Enhearten];
    c.additional_skills.insert(Skill::Awareness, 4);
    c.additional_combat.insert(CombatSkill::Knives, 1);
    c.virtues = vec!["confidence".into()];
    c.distinctive_features = vec!["bold".into(), "eager".into()];
    c.identity.name = "Fosco Brandybuck".into();
    c.wizard_step = 10;
    c
}
