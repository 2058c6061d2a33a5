use std::path::PathBuf;

use loremaster_content::ContentFactory;
use loremaster_core::{
    Character, CharacterError, CharacterSheet, CombatSkill, ReferenceData, Skill, is_complete,
};
use loremaster_runtime::{
    MemoryRoster, NoteBook, RosterRepository, ShareError, TransferError, decode_share_link,
    export_character, import_character, share_url,
};

fn load() -> ReferenceData {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
    ContentFactory::new(data_dir)
        .load_reference_data()
        .expect("seed data loads")
}

fn hobbit(data: &ReferenceData) -> Character {
    let culture = data.cultures.iter().find(|c| c.id == "hobbits").unwrap();
    let calling = data.callings.iter().find(|c| c.id == "treasure-hunter").unwrap();

    let mut hero = Character::new();
    hero.select_culture(culture);
    hero.select_calling(calling);
    assert!(hero.toggle_calling_favoured_skill(Skill::Explore, calling));
    hero.identity.name = "Lobelia".into();
    hero.wizard_step = 4;
    hero
}

#[test]
fn a_shared_draft_opens_on_another_host() {
    let data = load();
    let mut hero = hobbit(&data);
    NoteBook::new(&mut hero.notes).add("Session 1", "Left the Shire.");

    let roster = MemoryRoster::new();
    let id = roster.save(&hero).unwrap();
    let saved = roster.load(&id).unwrap().unwrap();

    let url = share_url("https://example.org/", &saved).unwrap();
    let opened = decode_share_link(&url, &data.env()).unwrap();

    assert_eq!(opened.roster_id, None);
    assert_eq!(opened.culture_id.as_deref(), Some("hobbits"));
    assert_eq!(opened.calling_favoured_skills, [Skill::Explore]);
    assert_eq!(opened.notes.len(), 1);
    assert!(!is_complete(&opened, &data.env()));

    let sheet = CharacterSheet::build(&opened, &data.env());
    assert_eq!(sheet.name, "Lobelia");
    assert!(sheet.derived.is_some());
}

#[test]
fn links_naming_unknown_callings_are_rejected() {
    let data = load();
    let mut hero = hobbit(&data);
    hero.calling_id = Some("burglar".into());

    let url = share_url("https://example.org/", &hero).unwrap();
    assert!(matches!(
        decode_share_link(&url, &data.env()),
        Err(ShareError::Rejected(CharacterError::UnknownCalling(_)))
    ));
}

#[test]
fn links_with_wrapping_point_totals_are_rejected() {
    let data = load();

    let mut hero = hobbit(&data);
    hero.additional_skills.insert(Skill::Awe, u32::MAX);
    hero.additional_skills.insert(Skill::Lore, 1);
    let url = share_url("https://example.org/", &hero).unwrap();
    assert!(matches!(
        decode_share_link(&url, &data.env()),
        Err(ShareError::Rejected(CharacterError::SkillPoolExceeded { .. }))
    ));

    let mut hero = hobbit(&data);
    hero.additional_combat.insert(CombatSkill::Bows, u32::MAX);
    hero.additional_combat.insert(CombatSkill::Swords, 1);
    let url = share_url("https://example.org/", &hero).unwrap();
    assert!(matches!(
        decode_share_link(&url, &data.env()),
        Err(ShareError::Rejected(CharacterError::CombatPoolExceeded { .. }))
    ));
}

#[test]
fn tampered_equipment_numbers_are_rejected() {
    let data = load();
    let hero = hobbit(&data);

    let mut value: serde_json::Value =
        serde_json::from_str(&export_character(&hero).unwrap()).unwrap();
    value["equipment"]["shieldParryBonus"] = serde_json::json!(i32::MAX);
    let json = value.to_string();

    assert!(matches!(
        import_character(&json, &data.env()),
        Err(TransferError::Rejected(CharacterError::EquipmentOutOfRange { .. }))
    ));

    let tampered: Character = serde_json::from_str(&json).unwrap();
    let url = share_url("https://example.org/", &tampered).unwrap();
    assert_eq!(
        decode_share_link(&url, &data.env()).unwrap_err().to_string(),
        "shared character rejected: shield parry bonus value 2147483647 out of range"
    );
}

#[test]
fn imported_files_are_checked_against_seed_data() {
    let data = load();
    let hero = hobbit(&data);

    let json = export_character(&hero).unwrap();
    let imported = import_character(&json, &data.env()).unwrap();
    assert_eq!(imported, hero);

    let mut greedy = hero.clone();
    greedy.calling_favoured_skills = vec![Skill::Explore, Skill::Scan, Skill::Stealth];
    let json = export_character(&greedy).unwrap();
    assert!(matches!(
        import_character(&json, &data.env()),
        Err(TransferError::Rejected(CharacterError::TooManyFavouredSkills { .. }))
    ));
}
