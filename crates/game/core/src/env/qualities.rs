//! Virtues and distinctive features.

use super::Culture;
use crate::character::Character;

pub trait VirtueOracle: Send + Sync {
    fn virtue(&self, id: &str) -> Option<&Virtue>;

    fn virtues(&self) -> &[Virtue];
}

pub trait FeatureOracle: Send + Sync {
    fn feature(&self, id: &str) -> Option<&Feature>;

    fn features(&self) -> &[Feature];
}

/// Who may take a restricted virtue.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Restriction {
    Cultures(Vec<String>),
    Callings(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Virtue {
    pub id: String,
    pub name: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub restriction: Option<Restriction>,
    /// Cultural blessings are granted by the culture and never picked.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_cultural_blessing: bool,
}

impl Virtue {
    /// Whether `character` may pick this virtue at creation.
    pub fn is_available_to(&self, character: &Character) -> bool {
        if self.is_cultural_blessing {
            return false;
        }
        match &self.restriction {
            None => true,
            Some(Restriction::Cultures(ids)) => character
                .culture_id
                .as_ref()
                .is_some_and(|id| ids.contains(id)),
            Some(Restriction::Callings(ids)) => character
                .calling_id
                .as_ref()
                .is_some_and(|id| ids.contains(id)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feature {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

/// Virtues the character may choose from.
pub fn available_virtues<'a>(virtues: &'a [Virtue], character: &Character) -> Vec<&'a Virtue> {
    virtues
        .iter()
        .filter(|v| v.is_available_to(character))
        .collect()
}

/// Distinctive features listed by the culture. No culture, no features.
pub fn available_features<'a>(features: &'a [Feature], culture: Option<&Culture>) -> Vec<&'a Feature> {
    let Some(culture) = culture else {
        return Vec::new();
    };
    features
        .iter()
        .filter(|f| culture.distinctive_features.contains(&f.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn virtue(id: &str, restriction: Option<Restriction>, blessing: bool) -> Virtue {
        Virtue {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            restriction,
            is_cultural_blessing: blessing,
        }
    }

    #[test]
    fn restrictions_filter_available_virtues() {
        let virtues = vec![
            virtue("confidence", None, false),
            virtue("stout-hearted", None, true),
            virtue(
                "dwarf-only",
                Some(Restriction::Cultures(vec!["dwarves".into()])),
                false,
            ),
            virtue(
                "captain-only",
                Some(Restriction::Callings(vec!["captain".into()])),
                false,
            ),
        ];

        let mut c = Character::new();
        c.culture_id = Some("dwarves".into());
        let ids: Vec<_> = available_virtues(&virtues, &c)
            .into_iter()
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(ids, vec!["confidence", "dwarf-only"]);

        c.calling_id = Some("captain".into());
        assert_eq!(available_virtues(&virtues, &c).len(), 3);
    }

    #[test]
    fn features_without_culture_are_empty() {
        let features = vec![Feature {
            id: "bold".into(),
            name: "Bold".into(),
            description: String::new(),
        }];
        assert!(available_features(&features, None).is_empty());
    }
}
