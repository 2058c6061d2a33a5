use super::Blessing;
use crate::character::Skill;

pub trait CallingOracle: Send + Sync {
    fn calling(&self, id: &str) -> Option<&Calling>;

    /// Returns all callings in presentation order.
    fn callings(&self) -> &[Calling];
}

/// A Calling: the hero's reason to take up the adventuring life.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Calling {
    pub id: String,
    pub name: String,
    pub shadow_path: String,
    /// Skills offered as calling favoured skills.
    pub favoured_skills: Vec<Skill>,
    /// How many of `favoured_skills` the player must pick.
    pub favoured_skill_count: usize,
    pub starting_virtues: usize,
    pub additional_feature: Blessing,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}
