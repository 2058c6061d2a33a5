/// Rules constants and tunable caps used by validation and derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// Points a player may spend on common skills.
    pub skill_point_pool: u32,
    /// Points a player may spend on combat proficiencies.
    pub combat_point_pool: u32,
    /// Number of distinctive features a finished character has.
    pub distinctive_feature_count: usize,
    /// Values distributed by the free-assign attribute set.
    pub free_assign_values: [i32; 3],
}

impl RulesConfig {
    // ===== compile-time constants =====
    /// Number of wizard steps, from the welcome page to the review.
    pub const STEP_COUNT: u8 = 10;
    /// Attribute scores accepted from imported characters.
    pub const MIN_ATTRIBUTE: i32 = 1;
    pub const MAX_ATTRIBUTE: i32 = 20;
    /// Upper bound for any load, rating, parry bonus or damage on an
    /// imported sheet. Catalogue items stay far below it.
    pub const MAX_EQUIPMENT_VALUE: i32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SKILL_POINT_POOL: u32 = 20;
    pub const DEFAULT_COMBAT_POINT_POOL: u32 = 3;
    pub const DEFAULT_DISTINCTIVE_FEATURE_COUNT: usize = 2;
    pub const DEFAULT_FREE_ASSIGN_VALUES: [i32; 3] = [7, 6, 5];

    pub const fn new() -> Self {
        Self {
            skill_point_pool: Self::DEFAULT_SKILL_POINT_POOL,
            combat_point_pool: Self::DEFAULT_COMBAT_POINT_POOL,
            distinctive_feature_count: Self::DEFAULT_DISTINCTIVE_FEATURE_COUNT,
            free_assign_values: Self::DEFAULT_FREE_ASSIGN_VALUES,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
