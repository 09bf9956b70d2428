//! Education snippets and certification lines.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_EDUCATION: usize = 5;
pub const MAX_CERTIFICATIONS: usize = 10;
const MAX_CERTIFICATION_LINE: usize = 150;

static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:bachelor|master|phd|doctorate|b\.s\.|m\.s\.|b\.a\.|m\.a\.|mba|b\.tech|m\.tech)[^\n]{0,100}",
    )
    .unwrap()
});

static INSTITUTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:university|college|institute)[^\n]{0,100}").unwrap());

const CERTIFICATION_KEYWORDS: &[&str] = &[
    "certified",
    "certification",
    "certificate",
    "aws certified",
    "azure certified",
    "google certified",
    "pmp",
    "cissp",
    "cisa",
];

const CERTIFICATION_HEADERS: &[&str] = &["certifications", "certification", "certificates"];

/// Degree snippets first, then institution snippets; each up to 100 trailing
/// characters on its line.
pub fn extract_education(text: &str) -> Vec<String> {
    let snippets = DEGREE_RE
        .find_iter(text)
        .chain(INSTITUTION_RE.find_iter(text))
        .map(|m| m.as_str().trim().to_string());
    dedup_capped(snippets, MAX_EDUCATION)
}

/// Lines under 150 characters that mention a certification keyword. A bare
/// section header is not a certification.
pub fn extract_certifications(text: &str) -> Vec<String> {
    let lines = text.lines().map(str::trim).filter(|line| {
        if line.is_empty() || line.chars().count() >= MAX_CERTIFICATION_LINE {
            return false;
        }
        let lower = line.to_lowercase();
        let is_header = CERTIFICATION_HEADERS.contains(&lower.trim_end_matches(':'));
        !is_header && CERTIFICATION_KEYWORDS.iter().any(|kw| lower.contains(kw))
    });
    dedup_capped(lines.map(str::to_string), MAX_CERTIFICATIONS)
}

fn dedup_capped<I>(items: I, cap: usize) -> Vec<String>
where
    I: Iterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .filter(|item| !item.is_empty() && seen.insert(item.to_lowercase()))
        .take(cap)
        .collect()
}
