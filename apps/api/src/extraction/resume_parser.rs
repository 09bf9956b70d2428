//! Resume parser: composes the individual extractors into `ResumeFacts`.

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extraction::contact::extract_contact_info;
use crate::extraction::education::{extract_certifications, extract_education};
use crate::extraction::experience::{extract_experience, years_of_experience};
use crate::extraction::lexicon::SkillLexicon;
use crate::extraction::skills::extract_skills;
use crate::models::resume::ResumeFacts;

const MAX_SUMMARY_CHARS: usize = 500;

static SUMMARY_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:professional\s+summary|summary|objective|profile|about\s+me)\b\s*:?\s*(.*)$")
        .unwrap()
});

static SECTION_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:work\s+experience|professional\s+experience|experience|employment\s+history|education|skills|technical\s+skills|certifications|projects)\s*:?$",
    )
    .unwrap()
});

/// Parses resume text with the built-in lexicon, resolving "Present" date
/// ranges against the current calendar year.
pub fn parse_resume(text: &str) -> ResumeFacts {
    parse_resume_with(text, SkillLexicon::default_lexicon(), Utc::now().year())
}

/// Parses resume text. Pure: the same inputs always produce the same facts.
pub fn parse_resume_with(text: &str, lexicon: &SkillLexicon, reference_year: i32) -> ResumeFacts {
    let contact = extract_contact_info(text);
    let skills = extract_skills(text, lexicon);
    let experience_entries = extract_experience(text);
    let years = years_of_experience(text, &experience_entries, reference_year);
    let education = extract_education(text);
    let certifications = extract_certifications(text);
    let summary = extract_summary(text);

    debug!(
        name = %contact.name,
        skills = skills.len(),
        entries = experience_entries.len(),
        years,
        "parsed resume"
    );

    ResumeFacts {
        name: contact.name,
        email: contact.email,
        phone: contact.phone,
        skills,
        experience_entries,
        years_of_experience: years,
        education,
        certifications,
        summary,
        raw_text: text.to_string(),
    }
}

/// Text under a summary/objective header, up to the next section header,
/// truncated to 500 characters.
pub fn extract_summary(text: &str) -> Option<String> {
    let mut lines = text.lines().map(str::trim);
    let first = lines.find_map(|line| {
        SUMMARY_HEADER_RE
            .captures(line)
            .map(|caps| caps[1].trim().to_string())
    })?;

    let mut parts: Vec<String> = Vec::new();
    if !first.is_empty() {
        parts.push(first);
    }
    for line in lines {
        if SECTION_HEADER_RE.is_match(line) {
            break;
        }
        if !line.is_empty() {
            parts.push(line.to_string());
        }
    }

    let summary: String = parts.join(" ").chars().take(MAX_SUMMARY_CHARS).collect();
    if summary.is_empty() {
        None
    } else {
        Some(summary)
    }
}
