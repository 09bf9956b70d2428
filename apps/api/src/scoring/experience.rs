//! Experience scorer: years of experience plus seniority.
//!
//! Two policies:
//! - `ExplicitRequirement`: the posting states "N years". Tiered against N:
//!   ≥100 % → 100, ≥80 % → 80, ≥50 % → 60, else 40. Always wins when present.
//! - `Blended`: 0.6·years_match + 0.4·level_match when the candidate's
//!   seniority is known, years_match alone otherwise.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extraction::jd_parser::extract_required_years;
use crate::extraction::seniority::{max_seniority, SeniorityLevel};
use crate::models::job::JobFacts;
use crate::models::resume::ResumeFacts;

const YEARS_WEIGHT: f64 = 0.6;
const LEVEL_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperiencePolicy {
    ExplicitRequirement,
    Blended,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceDetail {
    pub score: f64,
    pub policy: ExperiencePolicy,
    pub years_of_experience: f64,
    pub required_years: Option<u32>,
    pub candidate_level: Option<SeniorityLevel>,
    pub required_level: SeniorityLevel,
    pub years_match: f64,
    pub level_match: Option<f64>,
    pub num_roles: usize,
}

pub fn score_experience(resume: &ResumeFacts, job: &JobFacts) -> ExperienceDetail {
    let years = resume.years_of_experience;
    let candidate_level = max_seniority(resume.experience_entries.iter().map(|e| e.title.as_str()));
    let required_level = job.required_level.unwrap_or_default();
    let level_match = candidate_level.map(|level| level_match(level, required_level));

    let explicit_years = extract_required_years(&job.raw_text);

    let detail = match explicit_years {
        Some(required) => {
            let score = tiered_score(years, required);
            ExperienceDetail {
                score,
                policy: ExperiencePolicy::ExplicitRequirement,
                years_of_experience: years,
                required_years: Some(required),
                candidate_level,
                required_level,
                years_match: score,
                level_match,
                num_roles: resume.experience_entries.len(),
            }
        }
        None => {
            let years_match = years_match(years, job.required_years);
            let score = match level_match {
                Some(level) => YEARS_WEIGHT * years_match + LEVEL_WEIGHT * level,
                None => years_match,
            };
            ExperienceDetail {
                score,
                policy: ExperiencePolicy::Blended,
                years_of_experience: years,
                required_years: job.required_years,
                candidate_level,
                required_level,
                years_match,
                level_match,
                num_roles: resume.experience_entries.len(),
            }
        }
    };

    debug!(score = detail.score, policy = ?detail.policy, years, "experience scored");
    detail
}

pub fn tiered_score(years: f64, required: u32) -> f64 {
    let required = f64::from(required);
    if years >= required {
        100.0
    } else if years >= required * 0.8 {
        80.0
    } else if years >= required * 0.5 {
        60.0
    } else {
        40.0
    }
}

/// Ratio against a stated requirement, or a step function when there is none.
pub fn years_match(years: f64, required: Option<u32>) -> f64 {
    match required {
        Some(required) if required > 0 => (years / f64::from(required)).min(1.0) * 100.0,
        _ => step_years(years),
    }
}

fn step_years(years: f64) -> f64 {
    if years >= 10.0 {
        100.0
    } else if years >= 5.0 {
        90.0
    } else if years >= 3.0 {
        75.0
    } else if years >= 1.0 {
        60.0
    } else {
        40.0
    }
}

pub fn level_match(candidate: SeniorityLevel, required: SeniorityLevel) -> f64 {
    (f64::from(candidate.rank()) / f64::from(required.rank())).min(1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceEntry;

    fn resume(years: f64, titles: &[&str]) -> ResumeFacts {
        ResumeFacts {
            name: "Unknown".to_string(),
            email: String::new(),
            phone: String::new(),
            skills: vec![],
            experience_entries: titles
                .iter()
                .map(|t| ExperienceEntry {
                    title: t.to_string(),
                    date_range_raw: "2020 - 2021".to_string(),
                })
                .collect(),
            years_of_experience: years,
            education: vec![],
            certifications: vec![],
            summary: None,
            raw_text: String::new(),
        }
    }

    fn job(raw_text: &str, required_years: Option<u32>, level: Option<SeniorityLevel>) -> JobFacts {
        JobFacts {
            title: "Engineer".to_string(),
            required_skills: vec![],
            preferred_skills: vec![],
            responsibilities: vec![],
            required_years,
            required_level: level,
            keywords: vec![],
            raw_text: raw_text.to_string(),
        }
    }

    #[test]
    fn test_explicit_requirement_tiers() {
        let posting = job("Requires 5+ years of Python", Some(5), None);
        assert_eq!(score_experience(&resume(6.0, &[]), &posting).score, 100.0);
        assert_eq!(score_experience(&resume(4.0, &[]), &posting).score, 80.0);
        assert_eq!(score_experience(&resume(2.5, &[]), &posting).score, 60.0);
        assert_eq!(score_experience(&resume(1.0, &[]), &posting).score, 40.0);
        assert_eq!(
            score_experience(&resume(1.0, &[]), &posting).policy,
            ExperiencePolicy::ExplicitRequirement
        );
    }

    #[test]
    fn test_explicit_requirement_wins_over_level() {
        let posting = job("3 years required", None, Some(SeniorityLevel::Principal));
        let detail = score_experience(&resume(3.0, &["Junior Developer"]), &posting);
        assert_eq!(detail.score, 100.0);
        assert_eq!(detail.required_years, Some(3));
    }

    #[test]
    fn test_blended_step_function_without_level() {
        let posting = job("Build things", None, None);
        assert_eq!(score_experience(&resume(0.0, &[]), &posting).score, 40.0);
        assert_eq!(score_experience(&resume(1.0, &[]), &posting).score, 60.0);
        assert_eq!(score_experience(&resume(3.0, &[]), &posting).score, 75.0);
        assert_eq!(score_experience(&resume(5.0, &[]), &posting).score, 90.0);
        assert_eq!(score_experience(&resume(12.0, &[]), &posting).score, 100.0);
    }

    #[test]
    fn test_blended_with_level() {
        // years 5 → 90, junior (2) vs default mid-level (3) → 66.67
        let posting = job("Build things", None, None);
        let detail = score_experience(&resume(5.0, &["Junior Developer"]), &posting);
        assert_eq!(detail.policy, ExperiencePolicy::Blended);
        let expected = 0.6 * 90.0 + 0.4 * (200.0 / 3.0);
        assert!((detail.score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_blended_ratio_when_required_years_supplied() {
        let posting = job("Build things", Some(4), Some(SeniorityLevel::Senior));
        let detail = score_experience(&resume(2.0, &["Senior Engineer"]), &posting);
        // 0.6·50 + 0.4·100
        assert!((detail.score - 70.0).abs() < 1e-9);
        assert_eq!(detail.years_match, 50.0);
    }

    #[test]
    fn test_level_match_caps_at_hundred() {
        assert_eq!(level_match(SeniorityLevel::Staff, SeniorityLevel::Senior), 100.0);
        assert_eq!(level_match(SeniorityLevel::Intern, SeniorityLevel::Lead), 20.0);
    }
}
