//! In-play values entered by the player during sessions.
//!
//! Unlike every derived statistic these are explicit overrides: once set they
//! are stored and shown as-is, never recomputed.

use crate::stats::DerivedStats;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Tracking {
    pub current_endurance: Option<i32>,
    pub current_hope: Option<i32>,
    pub current_shadow: Option<i32>,
    pub fellowship_points: Option<i32>,
    pub adventure_points: Option<i32>,
    pub treasure_points: Option<i32>,
}

/// Tracking values with defaults filled in from derived stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TrackingValues {
    pub current_endurance: i32,
    pub max_endurance: i32,
    pub current_hope: i32,
    pub max_hope: i32,
    pub current_shadow: i32,
    pub fellowship_points: i32,
    pub adventure_points: i32,
    pub treasure_points: i32,
}

impl Tracking {
    /// Resolves every value, defaulting current Endurance and Hope to their
    /// maxima and the rest to zero.
    pub fn resolve(&self, derived: &DerivedStats) -> TrackingValues {
        TrackingValues {
            current_endurance: self.current_endurance.unwrap_or(derived.endurance),
            max_endurance: derived.endurance,
            current_hope: self.current_hope.unwrap_or(derived.hope),
            max_hope: derived.hope,
            current_shadow: self.current_shadow.unwrap_or(0),
            fellowship_points: self.fellowship_points.unwrap_or(0),
            adventure_points: self.adventure_points.unwrap_or(0),
            treasure_points: self.treasure_points.unwrap_or(0),
        }
    }
}

/// Free-form session note attached to a character.
///
/// Timestamps are RFC 3339 strings supplied by the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derived() -> DerivedStats {
        DerivedStats {
            strength_tn: 15,
            heart_tn: 16,
            wits_tn: 14,
            endurance: 25,
            hope: 12,
            parry: 13,
            wound_threshold: 13,
            weary_threshold: 25,
            miserable_threshold: 12,
        }
    }

    #[test]
    fn unset_values_fall_back_to_derived_maxima() {
        let values = Tracking::default().resolve(&derived());
        assert_eq!(values.current_endurance, 25);
        assert_eq!(values.current_hope, 12);
        assert_eq!(values.current_shadow, 0);
        assert_eq!(values.treasure_points, 0);
    }

    #[test]
    fn overrides_are_kept_verbatim() {
        let tracking = Tracking {
            current_endurance: Some(9),
            current_shadow: Some(3),
            ..Tracking::default()
        };
        let values = tracking.resolve(&derived());
        assert_eq!(values.current_endurance, 9);
        assert_eq!(values.max_endurance, 25);
        assert_eq!(values.current_shadow, 3);
    }
}
