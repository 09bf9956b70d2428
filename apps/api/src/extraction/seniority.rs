use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Ordered seniority ladder. `Principal` and `Staff` share the top rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeniorityLevel {
    Intern,
    Junior,
    #[default]
    MidLevel,
    Senior,
    Lead,
    Principal,
    Staff,
}

/// Detection takes the highest rank among the words present.
const LEVEL_KEYWORDS: &[(&str, SeniorityLevel)] = &[
    ("intern", SeniorityLevel::Intern),
    ("junior", SeniorityLevel::Junior),
    (r"mid[\s-]level", SeniorityLevel::MidLevel),
    ("senior", SeniorityLevel::Senior),
    ("lead", SeniorityLevel::Lead),
    ("principal", SeniorityLevel::Principal),
    ("staff", SeniorityLevel::Staff),
];

/// Whole-word matchers, so "Internal" is not an intern and "Leadership" is not a lead.
static LEVEL_PATTERNS: Lazy<Vec<(Regex, SeniorityLevel)>> = Lazy::new(|| {
    LEVEL_KEYWORDS
        .iter()
        .map(|(keyword, level)| {
            let re = Regex::new(&format!(r"(?i)\b{keyword}\b")).unwrap();
            (re, *level)
        })
        .collect()
});

impl SeniorityLevel {
    pub fn rank(self) -> u8 {
        match self {
            SeniorityLevel::Intern => 1,
            SeniorityLevel::Junior => 2,
            SeniorityLevel::MidLevel => 3,
            SeniorityLevel::Senior => 4,
            SeniorityLevel::Lead => 5,
            SeniorityLevel::Principal | SeniorityLevel::Staff => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeniorityLevel::Intern => "intern",
            SeniorityLevel::Junior => "junior",
            SeniorityLevel::MidLevel => "mid-level",
            SeniorityLevel::Senior => "senior",
            SeniorityLevel::Lead => "lead",
            SeniorityLevel::Principal => "principal",
            SeniorityLevel::Staff => "staff",
        }
    }
}

/// Highest seniority word in `title` (case-insensitive, whole words only).
pub fn detect_seniority(title: &str) -> Option<SeniorityLevel> {
    LEVEL_PATTERNS
        .iter()
        .filter(|(re, _)| re.is_match(title))
        .map(|(_, level)| *level)
        .max_by_key(|level| level.rank())
}

/// Highest seniority across several titles.
pub fn max_seniority<'a, I>(titles: I) -> Option<SeniorityLevel>
where
    I: IntoIterator<Item = &'a str>,
{
    titles
        .into_iter()
        .filter_map(detect_seniority)
        .max_by_key(|level| level.rank())
}
