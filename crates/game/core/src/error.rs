//! Common error infrastructure for loremaster-core.
//!
//! The engine itself reports "not done yet" as data (see
//! [`crate::validation::StepValidation`]); errors exist only where a whole
//! character crosses a trust boundary, such as an imported file or a decoded
//! share link.

/// Severity level of an error, used for categorization and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The character names something the loaded reference data lacks.
    ///
    /// Usually a dataset mismatch between the exporting and importing hosts.
    Reference,

    /// The character breaks a rule and cannot be accepted without changes.
    ///
    /// Examples: pools over their caps, too many features
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Validation => "validation",
        }
    }
}

/// Common trait for all loremaster-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
pub trait RulesError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Reasons an untrusted character is rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterError {
    #[error("unknown culture '{0}'")]
    UnknownCulture(String),

    #[error("unknown calling '{0}'")]
    UnknownCalling(String),

    #[error("unknown virtue '{0}'")]
    UnknownVirtue(String),

    #[error("unknown distinctive feature '{0}'")]
    UnknownFeature(String),

    #[error("calling '{0}' chosen without a culture")]
    CallingWithoutCulture(String),

    #[error("skill points exceed maximum: {allocated} of {max}")]
    SkillPoolExceeded { allocated: u32, max: u32 },

    #[error("combat points exceed maximum: {allocated} of {max}")]
    CombatPoolExceeded { allocated: u32, max: u32 },

    #[error("too many distinctive features: {count} of {max}")]
    TooManyFeatures { count: usize, max: usize },

    #[error("distinctive feature '{0}' chosen twice")]
    DuplicateFeature(String),

    #[error("too many virtues: {count} of {max}")]
    TooManyVirtues { count: usize, max: usize },

    #[error("virtue '{0}' chosen twice")]
    DuplicateVirtue(String),

    #[error("too many calling favoured skills: {count} of {max}")]
    TooManyFavouredSkills { count: usize, max: usize },

    #[error("calling does not offer favoured skill '{0}'")]
    FavouredSkillNotOffered(String),

    #[error("culture does not offer favoured skill '{0}'")]
    CultureSkillNotOffered(String),

    #[error("wizard step {0} out of range")]
    StepOutOfRange(u8),

    #[error("{attribute} score {value} out of range")]
    AttributeOutOfRange { attribute: String, value: i32 },

    #[error("{field} value {value} out of range")]
    EquipmentOutOfRange { field: String, value: i64 },
}

impl RulesError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownCulture(_)
            | Self::UnknownCalling(_)
            | Self::UnknownVirtue(_)
            | Self::UnknownFeature(_) => ErrorSeverity::Reference,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCulture(_) => "CHARACTER_UNKNOWN_CULTURE",
            Self::UnknownCalling(_) => "CHARACTER_UNKNOWN_CALLING",
            Self::UnknownVirtue(_) => "CHARACTER_UNKNOWN_VIRTUE",
            Self::UnknownFeature(_) => "CHARACTER_UNKNOWN_FEATURE",
            Self::CallingWithoutCulture(_) => "CHARACTER_CALLING_WITHOUT_CULTURE",
            Self::SkillPoolExceeded { .. } => "CHARACTER_SKILL_POOL_EXCEEDED",
            Self::CombatPoolExceeded { .. } => "CHARACTER_COMBAT_POOL_EXCEEDED",
            Self::TooManyFeatures { .. } => "CHARACTER_TOO_MANY_FEATURES",
            Self::DuplicateFeature(_) => "CHARACTER_DUPLICATE_FEATURE",
            Self::TooManyVirtues { .. } => "CHARACTER_TOO_MANY_VIRTUES",
            Self::DuplicateVirtue(_) => "CHARACTER_DUPLICATE_VIRTUE",
            Self::TooManyFavouredSkills { .. } => "CHARACTER_TOO_MANY_FAVOURED_SKILLS",
            Self::FavouredSkillNotOffered(_) => "CHARACTER_FAVOURED_SKILL_NOT_OFFERED",
            Self::CultureSkillNotOffered(_) => "CHARACTER_CULTURE_SKILL_NOT_OFFERED",
            Self::StepOutOfRange(_) => "CHARACTER_STEP_OUT_OF_RANGE",
            Self::AttributeOutOfRange { .. } => "CHARACTER_ATTRIBUTE_OUT_OF_RANGE",
            Self::EquipmentOutOfRange { .. } => "CHARACTER_EQUIPMENT_OUT_OF_RANGE",
        }
    }
}
