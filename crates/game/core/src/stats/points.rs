//! Skill and combat point pools.

use crate::character::{CombatAllocation, SkillAllocation};

/// Spending summary of a point pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointPool {
    pub allocated: u32,
    pub max: u32,
    pub valid: bool,
    /// Negative when the pool is overspent.
    pub remaining: i64,
}

impl PointPool {
    pub fn new(allocated: u32, max: u32) -> Self {
        Self {
            allocated,
            max,
            valid: allocated <= max,
            remaining: i64::from(max) - i64::from(allocated),
        }
    }
}

/// Sum of additional common-skill points, saturating at `u32::MAX`.
///
/// Combat skills live in their own [`CombatAllocation`], so they can never be
/// counted here.
pub fn total_skill_points(skills: &SkillAllocation) -> u32 {
    saturating_total(skills.values())
}

/// Sum of additional combat-proficiency points, saturating at `u32::MAX`.
pub fn total_combat_points(combat: &CombatAllocation) -> u32 {
    saturating_total(combat.values())
}

fn saturating_total<'a>(ranks: impl Iterator<Item = &'a u32>) -> u32 {
    ranks.fold(0, |total, rank| total.saturating_add(*rank))
}

pub fn validate_skill_points(skills: &SkillAllocation, max: u32) -> PointPool {
    PointPool::new(total_skill_points(skills), max)
}

pub fn validate_combat_points(combat: &CombatAllocation, max: u32) -> PointPool {
    PointPool::new(total_combat_points(combat), max)
}
