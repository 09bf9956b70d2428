//! Score aggregation: weighted overall score, recommendation tier, confidence
//! and the strengths / weaknesses bullets.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::resume::ResumeFacts;
use crate::scoring::skill_match::SkillMatchDetail;
use crate::scoring::weights::{FourthSlot, Recommendation, RecommendationTiers, WeightConfig};

const STRONG_SKILL: f64 = 70.0;
const EXCELLENT_EXPERIENCE: f64 = 80.0;
const LIMITED_EXPERIENCE: f64 = 60.0;
const STRONG_EDUCATION: f64 = 80.0;
const ATS_FRIENDLY: f64 = 80.0;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// From the number of populated evidence signals (0 – 3).
    pub fn from_signals(count: usize) -> Self {
        match count {
            0 | 1 => ConfidenceLevel::Low,
            2 => ConfidenceLevel::Medium,
            _ => ConfidenceLevel::High,
        }
    }
}

/// Final result of one resume × job analysis. Scores are 0 – 100, one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub overall_score: f64,
    pub skill_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub keyword_score: f64,
    pub semantic_score: f64,
    pub ats_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub related_matches: Vec<String>,
    pub preferred_matched: Vec<String>,
    pub recommendation: Recommendation,
    pub confidence_level: ConfidenceLevel,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub warnings: Vec<String>,
}

/// Raw (unrounded) component scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScores {
    pub skill: f64,
    pub experience: f64,
    pub education: f64,
    pub keyword: f64,
    pub semantic: f64,
    pub ats: f64,
}

/// What the bullets and confidence are derived from.
pub struct Evidence<'a> {
    pub skills: &'a SkillMatchDetail,
    pub resume: &'a ResumeFacts,
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregation
// ────────────────────────────────────────────────────────────────────────────

pub fn aggregate(
    components: &ComponentScores,
    evidence: &Evidence<'_>,
    weights: &WeightConfig,
    tiers: &RecommendationTiers,
) -> MatchScore {
    let warnings = weights.validate();
    for warning in &warnings {
        warn!(%warning, "scoring with invalid weights");
    }

    let fourth = match weights.fourth_slot {
        FourthSlot::Semantic => components.semantic,
        FourthSlot::Ats => components.ats,
    };
    let overall = components.skill * weights.skills
        + components.experience * weights.experience
        + components.education * weights.education
        + fourth * weights.ats_semantic
        + components.keyword * weights.keywords;
    let overall_score = round1(overall.clamp(0.0, 100.0));

    let (strengths, weaknesses) = strengths_and_weaknesses(components, evidence);

    MatchScore {
        overall_score,
        skill_score: round1(components.skill),
        experience_score: round1(components.experience),
        education_score: round1(components.education),
        keyword_score: round1(components.keyword),
        semantic_score: round1(components.semantic),
        ats_score: round1(components.ats),
        matched_skills: evidence.skills.direct_matches.clone(),
        missing_skills: evidence.skills.missing_required.clone(),
        related_matches: evidence.skills.related_matches.clone(),
        preferred_matched: evidence.skills.preferred_matches.clone(),
        recommendation: tiers.classify(overall_score),
        confidence_level: confidence(evidence),
        strengths,
        weaknesses,
        warnings,
    }
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn confidence(evidence: &Evidence<'_>) -> ConfidenceLevel {
    let signals = [
        !evidence.skills.direct_matches.is_empty(),
        evidence.resume.has_experience(),
        evidence.resume.has_education(),
    ];
    ConfidenceLevel::from_signals(signals.iter().filter(|present| **present).count())
}

/// Fixed rule order; each list keeps that order.
fn strengths_and_weaknesses(
    components: &ComponentScores,
    evidence: &Evidence<'_>,
) -> (Vec<String>, Vec<String>) {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let years = evidence.resume.years_of_experience;

    if components.skill >= STRONG_SKILL {
        strengths.push(format!(
            "Strong skill match ({} matching skills)",
            evidence.skills.direct_matches.len()
        ));
    } else {
        weaknesses.push(format!(
            "Skill gaps ({} missing skills)",
            evidence.skills.missing_required_total
        ));
    }

    if components.experience >= EXCELLENT_EXPERIENCE {
        strengths.push(format!("Excellent experience ({years:.1} years)"));
    } else if components.experience < LIMITED_EXPERIENCE {
        weaknesses.push(format!("Limited experience ({years:.1} years)"));
    }

    if components.education >= STRONG_EDUCATION {
        strengths.push("Strong educational background".to_string());
    }

    if components.ats >= ATS_FRIENDLY {
        strengths.push("ATS-friendly resume format".to_string());
    } else {
        weaknesses.push("Resume may have ATS compatibility issues".to_string());
    }

    if !evidence.resume.certifications.is_empty() {
        strengths.push(format!(
            "Relevant certifications ({})",
            evidence.resume.certifications.len()
        ));
    }

    (strengths, weaknesses)
}
