//! Keyword density: share of job keywords literally present in the resume.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::job::JobFacts;

/// Score when the posting yields no keywords to look for.
pub const NO_KEYWORDS_SCORE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDetail {
    pub score: f64,
    pub total_keywords: usize,
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

/// Required skills plus caller keywords, deduplicated case-insensitively,
/// checked as substrings of the lower-cased resume text.
pub fn score_keywords(resume_text: &str, job: &JobFacts) -> KeywordDetail {
    let mut seen = HashSet::new();
    let keywords: Vec<String> = job
        .required_skills
        .iter()
        .chain(job.keywords.iter())
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty() && seen.insert(k.clone()))
        .collect();

    if keywords.is_empty() {
        return KeywordDetail {
            score: NO_KEYWORDS_SCORE,
            total_keywords: 0,
            found: vec![],
            missing: vec![],
        };
    }

    let haystack = resume_text.to_lowercase();
    let total = keywords.len();
    let (found, missing): (Vec<String>, Vec<String>) =
        keywords.into_iter().partition(|k| haystack.contains(k.as_str()));

    KeywordDetail {
        score: found.len() as f64 / total as f64 * 100.0,
        total_keywords: total,
        found,
        missing,
    }
}
