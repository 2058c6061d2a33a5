//! Strength, Heart and Wits.
//!
//! Attribute scores stay `None` until the player picks an attribute set. The
//! optional +1 culture bonus is recorded separately and only folded in by
//! [`Attributes::with_bonus`], so the stored scores are always the base ones.

/// One of the three attributes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Attribute {
    Strength,
    Heart,
    Wits,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [Attribute::Strength, Attribute::Heart, Attribute::Wits];

    pub const fn label(self) -> &'static str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Heart => "Heart",
            Attribute::Wits => "Wits",
        }
    }
}

/// Base attribute scores of a character draft.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub strength: Option<i32>,
    pub heart: Option<i32>,
    pub wits: Option<i32>,
}

impl Attributes {
    pub const fn new(strength: i32, heart: i32, wits: i32) -> Self {
        Self {
            strength: Some(strength),
            heart: Some(heart),
            wits: Some(wits),
        }
    }

    /// All three scores unassigned.
    pub const fn unassigned() -> Self {
        Self {
            strength: None,
            heart: None,
            wits: None,
        }
    }

    pub const fn get(&self, attribute: Attribute) -> Option<i32> {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Heart => self.heart,
            Attribute::Wits => self.wits,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: Option<i32>) {
        match attribute {
            Attribute::Strength => self.strength = value,
            Attribute::Heart => self.heart = value,
            Attribute::Wits => self.wits = value,
        }
    }

    /// True once every score has been assigned.
    pub const fn is_complete(&self) -> bool {
        self.strength.is_some() && self.heart.is_some() && self.wits.is_some()
    }

    /// Returns a copy with the +1 bonus applied to `bonus`, if that score is
    /// assigned. Unassigned scores are left untouched.
    #[must_use]
    pub fn with_bonus(&self, bonus: Option<Attribute>) -> Self {
        let mut adjusted = *self;
        if let Some(attribute) = bonus
            && let Some(score) = self.get(attribute)
        {
            adjusted.set(attribute, Some(score.saturating_add(1)));
        }
        adjusted
    }
}

/// Work-in-progress for the free-assign attribute set.
///
/// Each value from the pool can sit on at most one attribute. Assigning a
/// value that another attribute already holds moves it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FreeAssignment {
    pub strength: Option<i32>,
    pub heart: Option<i32>,
    pub wits: Option<i32>,
}

impl FreeAssignment {
    fn slot(&mut self, attribute: Attribute) -> &mut Option<i32> {
        match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Heart => &mut self.heart,
            Attribute::Wits => &mut self.wits,
        }
    }

    fn values(&self) -> [Option<i32>; 3] {
        [self.strength, self.heart, self.wits]
    }

    /// Puts `value` on `attribute` (or clears it with `None`).
    ///
    /// Values outside `pool` are ignored and return `false`.
    pub fn assign(&mut self, attribute: Attribute, value: Option<i32>, pool: &[i32]) -> bool {
        if let Some(v) = value {
            if !pool.contains(&v) {
                return false;
            }
            for other in Attribute::ALL {
                if other != attribute && *self.slot(other) == Some(v) {
                    *self.slot(other) = None;
                }
            }
        }
        *self.slot(attribute) = value;
        true
    }

    /// True when every value of `pool` is placed.
    pub fn is_complete(&self, pool: &[i32]) -> bool {
        let values = self.values();
        pool.iter().all(|v| values.contains(&Some(*v)))
    }

    /// Scores to store on the character: all assigned once the pool is fully
    /// placed, all unassigned otherwise.
    pub fn to_attributes(&self, pool: &[i32]) -> Attributes {
        if self.is_complete(pool) {
            Attributes {
                strength: self.strength,
                heart: self.heart,
                wits: self.wits,
            }
        } else {
            Attributes::unassigned()
        }
    }
}
