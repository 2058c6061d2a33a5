use crate::config::RulesConfig;

/// The ten pages of the creation wizard, in order.
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
#[repr(u8)]
pub enum WizardStep {
    Welcome = 1,
    Culture = 2,
    Calling = 3,
    Attributes = 4,
    Skills = 5,
    Virtues = 6,
    Features = 7,
    Equipment = 8,
    Identity = 9,
    Review = 10,
}

impl WizardStep {
    pub const FIRST: Self = Self::Welcome;
    pub const LAST: Self = Self::Review;

    /// Maps a 1-based step number; anything outside 1..=10 has no step.
    pub const fn from_number(number: u8) -> Option<Self> {
        Some(match number {
            1 => Self::Welcome,
            2 => Self::Culture,
            3 => Self::Calling,
            4 => Self::Attributes,
            5 => Self::Skills,
            6 => Self::Virtues,
            7 => Self::Features,
            8 => Self::Equipment,
            9 => Self::Identity,
            10 => Self::Review,
            _ => return None,
        })
    }

    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Page title shown in the step indicator.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Culture => "Heroic Culture",
            Self::Calling => "Calling",
            Self::Attributes => "Attributes",
            Self::Skills => "Skills",
            Self::Virtues => "Virtues",
            Self::Features => "Distinctive Features",
            Self::Equipment => "Equipment",
            Self::Identity => "Identity",
            Self::Review => "Review",
        }
    }

    pub const fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub const fn previous(self) -> Option<Self> {
        Self::from_number(self.number().saturating_sub(1))
    }

    /// Clamps any step number into the wizard's range.
    pub fn clamped(number: u8) -> Self {
        Self::from_number(number.clamp(1, RulesConfig::STEP_COUNT)).unwrap_or(Self::FIRST)
    }
}
