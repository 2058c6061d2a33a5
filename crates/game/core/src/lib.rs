//! Character-creation rules for The One Ring, second edition.
//!
//! `loremaster-core` defines the character draft, the read-only reference
//! tables, the per-step wizard gates and the stat derivation. Every API here
//! is pure: reference data comes in through [`env::RulesEnv`], nothing is
//! cached, and incomplete drafts are reported as data rather than errors.
pub mod character;
pub mod config;
pub mod env;
pub mod error;
pub mod sheet;
pub mod stats;
pub mod validation;
pub mod wizard;

#[cfg(test)]
pub(crate) mod testing;

pub use character::{
    Attribute, Attributes, Character, CombatAllocation, CombatSkill, Equipment, FreeAssignment,
    GearItem, Identity, NO_ITEM, Note, Skill, SkillAllocation, SkillGroup, Tracking,
    TrackingValues, Weapon,
};
pub use config::RulesConfig;
pub use env::{
    ArmourEntry, AttributeSet, Blessing, Calling, CallingOracle, Culture, CultureOracle,
    DerivedModifiers, EquipmentCatalogue, EquipmentOracle, Feature, FeatureOracle,
    ReferenceData, Restriction, RulesEnv, ShieldEntry, Virtue, VirtueOracle, WeaponPreset,
};
pub use error::{CharacterError, ErrorSeverity, RulesError};
pub use sheet::CharacterSheet;
pub use stats::{
    DerivedStats, LoadStatus, PointPool, compute_favoured_skills, compute_load,
    compute_load_status, derive_stats, total_combat_points, total_skill_points,
    validate_combat_points, validate_skill_points,
};
pub use validation::{
    StepValidation, WizardStep, check_character, first_incomplete_step, is_complete,
    validate_step,
};
pub use wizard::Wizard;
