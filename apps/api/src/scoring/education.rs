use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Credential tier detected in the education snippets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeLevel {
    Other,
    Bachelor,
    Master,
    Doctorate,
}

impl DegreeLevel {
    pub fn score(self) -> f64 {
        match self {
            DegreeLevel::Doctorate => 100.0,
            DegreeLevel::Master => 90.0,
            DegreeLevel::Bachelor => 80.0,
            DegreeLevel::Other => 60.0,
        }
    }
}

/// Score awarded when the resume lists no education at all.
pub const NO_EDUCATION_SCORE: f64 = 50.0;

// Leading word boundary on every marker so "mba" never matches inside "Mumbai".
static DOCTORATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:ph\.?d\b|doctorate\b)").unwrap());

static MASTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:masters?\b|mba\b|m\.tech\b|m\.s\.|m\.a\.)").unwrap()
});

static BACHELOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:bachelors?\b|b\.tech\b|b\.s\.|b\.a\.)").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationDetail {
    pub score: f64,
    pub highest_degree: Option<DegreeLevel>,
    pub entries: usize,
}

pub fn score_education<S: AsRef<str>>(education: &[S]) -> EducationDetail {
    if education.is_empty() {
        return EducationDetail {
            score: NO_EDUCATION_SCORE,
            highest_degree: None,
            entries: 0,
        };
    }

    let combined = education
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n");

    let level = if DOCTORATE_RE.is_match(&combined) {
        DegreeLevel::Doctorate
    } else if MASTER_RE.is_match(&combined) {
        DegreeLevel::Master
    } else if BACHELOR_RE.is_match(&combined) {
        DegreeLevel::Bachelor
    } else {
        DegreeLevel::Other
    };

    EducationDetail {
        score: level.score(),
        highest_degree: Some(level),
        entries: education.len(),
    }
}
