//! Scoring weights, presets and recommendation tiers.
//!
//! Validation is advisory by default: `validate` returns warnings that the
//! aggregator logs and attaches to the result. `validate_strict` turns the
//! same checks into a `WeightError` for callers that prefer to reject.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Allowed drift of the weight total away from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

#[derive(Debug, Error, PartialEq)]
pub enum WeightError {
    #[error("Scoring weights sum to {0:.2}, should be 1.0")]
    InvalidSum(f64),

    #[error("Scoring weight '{0}' is negative")]
    Negative(&'static str),

    #[error("Unknown weight preset '{0}' (expected 'standard' or 'ats_focused')")]
    UnknownPreset(String),

    #[error("Recommendation thresholds must be strictly descending")]
    InvalidTiers,
}

// ────────────────────────────────────────────────────────────────────────────
// WeightConfig
// ────────────────────────────────────────────────────────────────────────────

/// Which component fills the shared fourth weight slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FourthSlot {
    #[default]
    Semantic,
    Ats,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub ats_semantic: f64,
    pub keywords: f64,
    #[serde(default)]
    pub fourth_slot: FourthSlot,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl WeightConfig {
    pub fn standard() -> Self {
        Self {
            skills: 0.35,
            experience: 0.25,
            education: 0.15,
            ats_semantic: 0.15,
            keywords: 0.10,
            fourth_slot: FourthSlot::Semantic,
        }
    }

    pub fn ats_focused() -> Self {
        Self {
            skills: 0.40,
            experience: 0.25,
            education: 0.15,
            ats_semantic: 0.10,
            keywords: 0.10,
            fourth_slot: FourthSlot::Ats,
        }
    }

    pub fn preset(preset: WeightPreset) -> Self {
        match preset {
            WeightPreset::Standard => Self::standard(),
            WeightPreset::AtsFocused => Self::ats_focused(),
        }
    }

    pub fn total(&self) -> f64 {
        self.skills + self.experience + self.education + self.ats_semantic + self.keywords
    }

    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
            ("ats_semantic", self.ats_semantic),
            ("keywords", self.keywords),
        ]
    }

    /// Every problem found, as human-readable warnings. Empty when valid.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings: Vec<String> = self
            .fields()
            .into_iter()
            .filter(|(_, value)| *value < 0.0)
            .map(|(name, _)| WeightError::Negative(name).to_string())
            .collect();

        let total = self.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            warnings.push(WeightError::InvalidSum(total).to_string());
        }
        warnings
    }

    /// First problem found, as an error.
    pub fn validate_strict(&self) -> Result<(), WeightError> {
        if let Some((name, _)) = self.fields().into_iter().find(|(_, value)| *value < 0.0) {
            return Err(WeightError::Negative(name));
        }
        let total = self.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightError::InvalidSum(total));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightPreset {
    Standard,
    AtsFocused,
}

impl WeightPreset {
    pub const ALL: [WeightPreset; 2] = [WeightPreset::Standard, WeightPreset::AtsFocused];

    pub fn as_str(self) -> &'static str {
        match self {
            WeightPreset::Standard => "standard",
            WeightPreset::AtsFocused => "ats_focused",
        }
    }
}

impl fmt::Display for WeightPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightPreset {
    type Err = WeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "standard" => Ok(WeightPreset::Standard),
            "ats_focused" | "ats" => Ok(WeightPreset::AtsFocused),
            other => Err(WeightError::UnknownPreset(other.to_string())),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Recommendation tiers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Strong Match")]
    StrongMatch,
    #[serde(rename = "Good Match")]
    GoodMatch,
    #[serde(rename = "Moderate Match")]
    ModerateMatch,
    #[serde(rename = "Weak Match")]
    WeakMatch,
    #[serde(rename = "Poor Match — Reject")]
    PoorMatch,
}

impl Recommendation {
    pub fn label(self) -> &'static str {
        match self {
            Recommendation::StrongMatch => "Strong Match",
            Recommendation::GoodMatch => "Good Match",
            Recommendation::ModerateMatch => "Moderate Match",
            Recommendation::WeakMatch => "Weak Match",
            Recommendation::PoorMatch => "Poor Match — Reject",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower bounds (inclusive) of each tier above "Poor".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationTiers {
    pub strong: f64,
    pub good: f64,
    pub moderate: f64,
    pub weak: f64,
}

impl Default for RecommendationTiers {
    fn default() -> Self {
        Self {
            strong: 85.0,
            good: 70.0,
            moderate: 55.0,
            weak: 40.0,
        }
    }
}

impl RecommendationTiers {
    pub fn validate(&self) -> Result<(), WeightError> {
        if self.strong > self.good && self.good > self.moderate && self.moderate > self.weak {
            Ok(())
        } else {
            Err(WeightError::InvalidTiers)
        }
    }

    pub fn classify(&self, score: f64) -> Recommendation {
        if score >= self.strong {
            Recommendation::StrongMatch
        } else if score >= self.good {
            Recommendation::GoodMatch
        } else if score >= self.moderate {
            Recommendation::ModerateMatch
        } else if score >= self.weak {
            Recommendation::WeakMatch
        } else {
            Recommendation::PoorMatch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for preset in WeightPreset::ALL {
            let weights = WeightConfig::preset(preset);
            assert!(weights.validate().is_empty(), "{preset} invalid");
            assert!(weights.validate_strict().is_ok());
        }
        assert_eq!(WeightConfig::ats_focused().fourth_slot, FourthSlot::Ats);
    }

    #[test]
    fn test_bad_sum_warns() {
        let weights = WeightConfig {
            skills: 0.5,
            ..WeightConfig::standard()
        };
        let warnings = weights.validate();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("1.15"), "{}", warnings[0]);
        assert!(matches!(weights.validate_strict(), Err(WeightError::InvalidSum(_))));
    }

    #[test]
    fn test_tolerance_accepts_small_drift() {
        let weights = WeightConfig {
            keywords: 0.105,
            ..WeightConfig::standard()
        };
        assert!(weights.validate().is_empty());
    }

    #[test]
    fn test_negative_weight_reported() {
        let weights = WeightConfig {
            education: -0.15,
            keywords: 0.40,
            ..WeightConfig::standard()
        };
        assert_eq!(weights.validate_strict(), Err(WeightError::Negative("education")));
    }

    #[test]
    fn test_preset_parsing() {
        assert_eq!("standard".parse::<WeightPreset>(), Ok(WeightPreset::Standard));
        assert_eq!("ATS-Focused".parse::<WeightPreset>(), Ok(WeightPreset::AtsFocused));
        assert!("balanced".parse::<WeightPreset>().is_err());
    }

    #[test]
    fn test_fourth_slot_defaults_when_omitted() {
        let json = r#"{"skills":0.4,"experience":0.2,"education":0.2,"ats_semantic":0.1,"keywords":0.1}"#;
        let weights: WeightConfig = serde_json::from_str(json).unwrap();
        assert_eq!(weights.fourth_slot, FourthSlot::Semantic);
    }

    #[test]
    fn test_tier_boundaries() {
        let tiers = RecommendationTiers::default();
        assert_eq!(tiers.classify(85.0), Recommendation::StrongMatch);
        assert_eq!(tiers.classify(84.9), Recommendation::GoodMatch);
        assert_eq!(tiers.classify(55.0), Recommendation::ModerateMatch);
        assert_eq!(tiers.classify(40.0), Recommendation::WeakMatch);
        assert_eq!(tiers.classify(39.9), Recommendation::PoorMatch);
    }

    #[test]
    fn test_tiers_must_descend() {
        assert!(RecommendationTiers::default().validate().is_ok());
        let tiers = RecommendationTiers {
            good: 90.0,
            ..RecommendationTiers::default()
        };
        assert_eq!(tiers.validate(), Err(WeightError::InvalidTiers));
    }

    #[test]
    fn test_recommendation_serializes_as_label() {
        let json = serde_json::to_string(&Recommendation::GoodMatch).unwrap();
        assert_eq!(json, "\"Good Match\"");
    }
}
