//! ATS formatting heuristics. Pure text checks; no layout information.

use serde::{Deserialize, Serialize};

use crate::extraction::contact::EMAIL_RE;

const START_SCORE: i32 = 100;
const MAX_PIPES: usize = 5;
const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 1500;
/// Below this the standard formatting recommendations are attached.
pub const RECOMMENDATION_THRESHOLD: f64 = 80.0;

const DECORATIVE_CHARS: &[&str] = &["â€¢", "★", "◆", "▪"];
const STANDARD_SECTIONS: &[&str] = &["experience", "education", "skills"];

const RECOMMENDATIONS: &[&str] = &[
    "Use standard section headers (EXPERIENCE, EDUCATION, SKILLS)",
    "Avoid tables, text boxes, and images",
    "Use simple bullet points (• or -)",
    "Save as .docx or .pdf format",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsDetail {
    pub score: f64,
    pub word_count: usize,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

pub fn score_ats(text: &str) -> AtsDetail {
    let mut score = START_SCORE;
    let mut issues = Vec::new();

    if text.matches('|').count() > MAX_PIPES {
        score -= 15;
        issues.push("Contains tables or complex formatting".to_string());
    }

    if DECORATIVE_CHARS.iter().any(|c| text.contains(c)) {
        score -= 10;
        issues.push("Contains special characters that may not parse correctly".to_string());
    }

    let lower = text.to_lowercase();
    let sections = STANDARD_SECTIONS
        .iter()
        .filter(|section| lower.contains(*section))
        .count();
    if sections < 2 {
        score -= 20;
        issues.push("Missing standard section headers".to_string());
    }

    let word_count = text.split_whitespace().count();
    if word_count < MIN_WORDS {
        score -= 15;
        issues.push("Resume may be too short".to_string());
    } else if word_count > MAX_WORDS {
        score -= 10;
        issues.push("Resume may be too long".to_string());
    }

    if !EMAIL_RE.is_match(text) {
        score -= 10;
        issues.push("Missing email address".to_string());
    }

    let score = f64::from(score.max(0));
    let recommendations = if score < RECOMMENDATION_THRESHOLD {
        RECOMMENDATIONS.iter().map(|r| r.to_string()).collect()
    } else {
        vec![]
    };

    AtsDetail {
        score,
        word_count,
        issues,
        recommendations,
    }
}
