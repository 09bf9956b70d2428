//! Skill lexicon: the fixed vocabulary the extractor recognizes.
//!
//! Entries are matched case-insensitively and literally: `c++` and `node.js`
//! are escaped before compilation. A match must be bounded on both sides by a
//! non-word character (or the text edge), so `go` does not fire inside
//! `google` while `c++` still fires before a comma.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    Web,
    Database,
    Cloud,
    Devops,
    Data,
    MlAi,
    Mobile,
    Other,
}

const DEFAULT_ENTRIES: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Programming,
        &[
            "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "go", "rust",
            "swift", "kotlin", "php", "r", "matlab", "scala",
        ],
    ),
    (
        SkillCategory::Web,
        &[
            "html", "css", "react", "angular", "vue", "node.js", "express", "django", "flask",
            "fastapi", "spring", "asp.net",
        ],
    ),
    (
        SkillCategory::Database,
        &[
            "sql", "mysql", "postgresql", "mongodb", "redis", "cassandra", "oracle", "dynamodb",
            "sqlite",
        ],
    ),
    (
        SkillCategory::Cloud,
        &[
            "aws", "azure", "gcp", "google cloud", "heroku", "digitalocean", "cloudflare",
        ],
    ),
    (
        SkillCategory::Devops,
        &[
            "docker", "kubernetes", "jenkins", "gitlab", "github actions", "terraform",
            "ansible", "ci/cd",
        ],
    ),
    (
        SkillCategory::Data,
        &[
            "pandas", "numpy", "spark", "hadoop", "kafka", "airflow", "dbt", "tableau",
            "power bi", "excel",
        ],
    ),
    (
        SkillCategory::MlAi,
        &[
            "machine learning", "deep learning", "nlp", "computer vision", "tensorflow",
            "pytorch", "scikit-learn", "keras", "transformers", "llm", "opencv",
        ],
    ),
    (
        SkillCategory::Mobile,
        &["ios", "android", "react native", "flutter", "xamarin", "swift", "kotlin"],
    ),
    (
        SkillCategory::Other,
        &[
            "git", "agile", "scrum", "jira", "rest api", "graphql", "microservices", "testing",
            "junit", "selenium",
        ],
    ),
];

static DEFAULT_LEXICON: Lazy<SkillLexicon> = Lazy::new(|| {
    SkillLexicon::new(DEFAULT_ENTRIES.iter().flat_map(|(category, skills)| {
        skills.iter().map(move |skill| (*category, *skill))
    }))
});

#[derive(Debug, Clone)]
struct SkillPattern {
    skill: String,
    category: SkillCategory,
    matcher: Regex,
}

/// A skill found in text, with the byte offset of its first occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillHit {
    pub skill: String,
    pub category: SkillCategory,
    pub position: usize,
}

/// Compiled, immutable skill vocabulary. Built once and shared by reference.
#[derive(Debug, Clone)]
pub struct SkillLexicon {
    patterns: Vec<SkillPattern>,
}

impl SkillLexicon {
    /// Compiles a lexicon from `(category, skill)` pairs. Skills are
    /// lower-cased; a skill listed under two categories keeps the first.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (SkillCategory, S)>,
        S: AsRef<str>,
    {
        let mut patterns: Vec<SkillPattern> = Vec::new();
        for (category, skill) in entries {
            let skill = skill.as_ref().trim().to_lowercase();
            if skill.is_empty() || patterns.iter().any(|p| p.skill == skill) {
                continue;
            }
            let pattern = format!(r"(?i)(?:^|\W){}(?:\W|$)", regex::escape(&skill));
            if let Ok(matcher) = Regex::new(&pattern) {
                patterns.push(SkillPattern {
                    skill,
                    category,
                    matcher,
                });
            }
        }
        Self { patterns }
    }

    /// The built-in lexicon (programming, web, database, cloud, devops, data,
    /// ML/AI, mobile, other).
    pub fn default_lexicon() -> &'static SkillLexicon {
        &DEFAULT_LEXICON
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        let skill = skill.trim().to_lowercase();
        self.patterns.iter().any(|p| p.skill == skill)
    }

    pub fn category_of(&self, skill: &str) -> Option<SkillCategory> {
        let skill = skill.trim().to_lowercase();
        self.patterns
            .iter()
            .find(|p| p.skill == skill)
            .map(|p| p.category)
    }

    /// Scans `text` for every lexicon entry, returning one hit per skill in
    /// lexicon order.
    pub fn scan(&self, text: &str) -> Vec<SkillHit> {
        self.patterns
            .iter()
            .filter_map(|p| {
                p.matcher.find(text).map(|m| SkillHit {
                    skill: p.skill.clone(),
                    category: p.category,
                    position: m.start(),
                })
            })
            .collect()
    }
}
