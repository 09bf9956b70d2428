//! JD Parser: extracts title, required/preferred skills, responsibilities and
//! experience requirements from a raw job description.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extraction::lexicon::SkillLexicon;
use crate::extraction::seniority::detect_seniority;
use crate::extraction::skills::extract_skills;
use crate::models::job::JobFacts;

pub const DEFAULT_JOB_TITLE: &str = "Job Position";
pub const MAX_RESPONSIBILITIES: usize = 10;

const TITLE_SCAN_LINES: usize = 5;

/// "5+ years", "3 yrs". The experience scorer treats any match in the
/// posting as an explicit requirement.
static REQUIRED_YEARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})\+?\s*(?:years?|yrs?)\b").unwrap());

/// A header line such as "Preferred Qualifications:" or "Nice to have:".
/// Inline uses ("Docker experience is preferred") are not headers.
static PREFERRED_START_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?:preferred|nice[ \t-]to[ \t-]have|bonus[ \t]+points)(?:[ \t]+(?:qualifications|skills|experience|requirements))?[ \t]*(?::|$)",
    )
    .unwrap()
});

static PREFERRED_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:benefits|perks)(?:[ \t]+(?:&|and)[ \t]+perks)?[ \t]*(?::|$)")
        .unwrap()
});

static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[•\-*]\s*([^\n•\-*]{20,200})").unwrap());

const ACTION_VERBS: &[&str] = &[
    "develop",
    "design",
    "implement",
    "manage",
    "lead",
    "collaborate",
    "build",
    "create",
];

/// Parses a job description with the built-in lexicon.
pub fn parse_job(text: &str) -> JobFacts {
    parse_job_with(text, SkillLexicon::default_lexicon())
}

pub fn parse_job_with(text: &str, lexicon: &SkillLexicon) -> JobFacts {
    let title = extract_title(text);
    let sections = split_preferred_section(text);
    let required_skills = extract_skills(&sections.main, lexicon);
    let preferred_skills = sections
        .preferred
        .as_deref()
        .map(|section| extract_skills(section, lexicon))
        .unwrap_or_default();
    let responsibilities = extract_responsibilities(text);
    let required_years = extract_required_years(text);
    let required_level = detect_seniority(&title);

    debug!(
        %title,
        required = required_skills.len(),
        preferred = preferred_skills.len(),
        ?required_years,
        "parsed job description"
    );

    JobFacts {
        title,
        required_skills,
        preferred_skills,
        responsibilities,
        required_years,
        required_level,
        keywords: Vec::new(),
        raw_text: text.to_string(),
    }
}

/// First substantial line among the opening five: longer than 5 and shorter
/// than 100 characters, no `@`.
pub fn extract_title(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(TITLE_SCAN_LINES)
        .find(|line| {
            let len = line.chars().count();
            len > 5 && len < 100 && !line.contains('@')
        })
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_JOB_TITLE.to_string())
}

/// The posting split into the preferred / nice-to-have section and the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSections {
    pub main: String,
    pub preferred: Option<String>,
}

/// The preferred section runs from its header to a "Benefits" header or the
/// end of the text. Text after the header's colon belongs to the section.
pub fn split_preferred_section(text: &str) -> JobSections {
    let Some(start) = PREFERRED_START_RE.find(text) else {
        return JobSections {
            main: text.to_string(),
            preferred: None,
        };
    };
    let end = PREFERRED_END_RE
        .find_at(text, start.end())
        .map(|m| m.start())
        .unwrap_or(text.len());

    let mut main = String::with_capacity(text.len());
    main.push_str(&text[..start.start()]);
    main.push('\n');
    main.push_str(&text[end..]);

    JobSections {
        main,
        preferred: Some(text[start.end()..end].to_string()),
    }
}

/// Bullet sentences (20–200 characters) that contain an action verb.
pub fn extract_responsibilities(text: &str) -> Vec<String> {
    BULLET_RE
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            ACTION_VERBS.iter().any(|verb| lower.contains(verb))
        })
        .take(MAX_RESPONSIBILITIES)
        .collect()
}

pub fn extract_required_years(text: &str) -> Option<u32> {
    REQUIRED_YEARS_RE
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}
