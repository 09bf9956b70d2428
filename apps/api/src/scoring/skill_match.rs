//! Skill matcher: direct and taxonomy-expanded overlap between a candidate's
//! skills and a job's required / preferred skills.
//!
//! Algorithm:
//! 1. Normalize all three lists (lower-case, trimmed, unique).
//! 2. direct_required = candidate ∩ required, direct_preferred = candidate ∩ preferred
//! 3. related = required skills not matched directly whose taxonomy relations
//!    intersect the candidate's skills
//! 4. required_rate = (|direct_required| + 0.5·|related|) / |required|, 0.5 if none
//! 5. preferred_rate = |direct_preferred| / |preferred|, 0.5 if none
//! 6. score = 100·(0.8·required_rate + 0.2·preferred_rate), clamped to [0, 100]
//!
//! A related skill earns half credit but is never reported as missing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extraction::skills::normalize_skills;
use crate::scoring::taxonomy::SkillTaxonomy;

pub const MAX_MISSING_DISPLAYED: usize = 10;

const NEUTRAL_RATE: f64 = 0.5;
const RELATED_CREDIT: f64 = 0.5;
const REQUIRED_WEIGHT: f64 = 0.8;
const PREFERRED_WEIGHT: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatchDetail {
    /// 0 – 100, unrounded.
    pub score: f64,
    pub required_match_rate: f64,
    pub preferred_match_rate: f64,
    /// Required skills the candidate lists verbatim, in job order.
    pub direct_matches: Vec<String>,
    /// Required skills credited through the taxonomy, in job order.
    pub related_matches: Vec<String>,
    pub preferred_matches: Vec<String>,
    /// First ten unmatched required skills, in job order.
    pub missing_required: Vec<String>,
    pub missing_required_total: usize,
}

pub struct SkillMatcher<'a> {
    taxonomy: &'a SkillTaxonomy,
}

impl<'a> SkillMatcher<'a> {
    pub fn new(taxonomy: &'a SkillTaxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn match_skills<S: AsRef<str>>(
        &self,
        candidate: &[S],
        required: &[S],
        preferred: &[S],
    ) -> SkillMatchDetail {
        let candidate: HashSet<String> = normalize_skills(candidate).into_iter().collect();
        let required = normalize_skills(required);
        let preferred = normalize_skills(preferred);

        let mut direct_matches = Vec::new();
        let mut related_matches = Vec::new();
        let mut missing = Vec::new();

        for skill in &required {
            if candidate.contains(skill) {
                direct_matches.push(skill.clone());
            } else if self.is_related(skill, &candidate) {
                related_matches.push(skill.clone());
            } else {
                missing.push(skill.clone());
            }
        }

        let preferred_matches: Vec<String> = preferred
            .iter()
            .filter(|skill| candidate.contains(*skill))
            .cloned()
            .collect();

        let required_match_rate = if required.is_empty() {
            NEUTRAL_RATE
        } else {
            (direct_matches.len() as f64 + RELATED_CREDIT * related_matches.len() as f64)
                / required.len() as f64
        };
        let preferred_match_rate = if preferred.is_empty() {
            NEUTRAL_RATE
        } else {
            preferred_matches.len() as f64 / preferred.len() as f64
        };

        let score = (100.0
            * (REQUIRED_WEIGHT * required_match_rate + PREFERRED_WEIGHT * preferred_match_rate))
            .clamp(0.0, 100.0);

        debug!(
            score,
            direct = direct_matches.len(),
            related = related_matches.len(),
            missing = missing.len(),
            "skill match computed"
        );

        let missing_required_total = missing.len();
        missing.truncate(MAX_MISSING_DISPLAYED);

        SkillMatchDetail {
            score,
            required_match_rate,
            preferred_match_rate,
            direct_matches,
            related_matches,
            preferred_matches,
            missing_required: missing,
            missing_required_total,
        }
    }

    fn is_related(&self, skill: &str, candidate: &HashSet<String>) -> bool {
        self.taxonomy
            .related_skills(skill)
            .iter()
            .any(|related| candidate.contains(related))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> SkillMatcher<'static> {
        SkillMatcher::new(SkillTaxonomy::default_taxonomy())
    }

    fn strs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_scenario_two_of_three_required() {
        let detail = matcher().match_skills(
            &strs(&["python", "aws"]),
            &strs(&["python", "machine learning", "aws"]),
            &strs(&[]),
        );
        assert_eq!(detail.direct_matches, vec!["python", "aws"]);
        assert!(detail.related_matches.is_empty());
        assert!((detail.required_match_rate - 2.0 / 3.0).abs() < 1e-9);
        assert!((detail.score - 63.333).abs() < 0.01, "score was {}", detail.score);
        assert_eq!(detail.missing_required, vec!["machine learning"]);
    }

    #[test]
    fn test_empty_candidate_scores_zero_on_required() {
        let detail = matcher().match_skills(
            &strs(&[]),
            &strs(&["python", "docker"]),
            &strs(&["kafka"]),
        );
        assert_eq!(detail.score, 0.0);
        assert!(detail.direct_matches.is_empty());
        assert!(detail.related_matches.is_empty());
    }

    #[test]
    fn test_no_requirements_is_neutral_fifty() {
        let detail = matcher().match_skills(&strs(&["python"]), &strs(&[]), &strs(&[]));
        assert_eq!(detail.score, 50.0);
    }

    #[test]
    fn test_related_match_half_credit_and_not_missing() {
        // tensorflow is a child of machine learning
        let detail = matcher().match_skills(
            &strs(&["tensorflow"]),
            &strs(&["machine learning", "kotlin"]),
            &strs(&[]),
        );
        assert_eq!(detail.related_matches, vec!["machine learning"]);
        assert_eq!(detail.missing_required, vec!["kotlin"]);
        // (0 + 0.5·1) / 2 = 0.25 → 0.8·25 + 0.2·50 = 30
        assert!((detail.score - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_sibling_counts_as_related() {
        let detail = matcher().match_skills(&strs(&["kubernetes"]), &strs(&["docker"]), &strs(&[]));
        assert_eq!(detail.related_matches, vec!["docker"]);
    }

    #[test]
    fn test_verbatim_match_is_never_missing() {
        let detail = matcher().match_skills(
            &strs(&["Rust ", "go"]),
            &strs(&["rust", "GO", "java"]),
            &strs(&[]),
        );
        assert!(detail.direct_matches.contains(&"rust".to_string()));
        assert!(detail.direct_matches.contains(&"go".to_string()));
        assert!(!detail.missing_required.contains(&"rust".to_string()));
        assert!(!detail.missing_required.contains(&"go".to_string()));
    }

    #[test]
    fn test_preferred_rate() {
        let detail = matcher().match_skills(
            &strs(&["kafka"]),
            &strs(&[]),
            &strs(&["kafka", "spark"]),
        );
        assert_eq!(detail.preferred_matches, vec!["kafka"]);
        // 0.8·50 + 0.2·50
        assert!((detail.score - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_list_capped_with_total() {
        let required: Vec<String> = (0..15).map(|i| format!("skill-{i}")).collect();
        let detail = matcher().match_skills(&[], &required, &[]);
        assert_eq!(detail.missing_required.len(), MAX_MISSING_DISPLAYED);
        assert_eq!(detail.missing_required_total, 15);
        assert_eq!(detail.missing_required[0], "skill-0");
    }

    #[test]
    fn test_more_direct_matches_never_lower_score() {
        let required = strs(&["python", "aws", "docker", "sql"]);
        let mut previous = -1.0;
        for n in 0..=required.len() {
            let candidate = required[..n].to_vec();
            let score = matcher().match_skills(&candidate, &required, &[]).score;
            assert!(score >= previous);
            previous = score;
        }
    }
}
