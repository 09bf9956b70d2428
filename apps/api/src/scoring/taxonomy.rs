//! Skill taxonomy: parent → children relationships used for related-skill
//! credit. The table is data: the built-in default can be replaced by a JSON
//! file at startup without touching the matcher.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extraction::skills::{normalize_skill, normalize_skills};

const DEFAULT_TABLE: &[(&str, &[&str])] = &[
    ("python", &["pandas", "numpy", "scikit-learn", "django", "flask", "fastapi"]),
    (
        "machine learning",
        &["deep learning", "neural networks", "tensorflow", "pytorch", "keras"],
    ),
    (
        "data science",
        &["machine learning", "statistics", "data analysis", "visualization"],
    ),
    ("cloud", &["aws", "azure", "gcp", "google cloud"]),
    ("devops", &["docker", "kubernetes", "ci/cd", "jenkins", "terraform"]),
    (
        "web development",
        &["react", "angular", "vue.js", "node.js", "javascript"],
    ),
    ("backend", &["api", "rest", "graphql", "microservices", "database"]),
    ("frontend", &["html", "css", "javascript", "react", "responsive design"]),
    ("database", &["sql", "mysql", "postgresql", "mongodb", "redis"]),
    (
        "testing",
        &["unit testing", "integration testing", "pytest", "jest", "selenium"],
    ),
];

static DEFAULT_TAXONOMY: Lazy<SkillTaxonomy> = Lazy::new(|| {
    SkillTaxonomy::new(DEFAULT_TABLE.iter().map(|(parent, children)| TaxonomyEntry {
        parent: parent.to_string(),
        children: children.iter().map(|c| c.to_string()).collect(),
    }))
});

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("failed to read taxonomy file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid taxonomy JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One parent skill and its children, e.g. `python → [pandas, numpy, …]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub parent: String,
    pub children: Vec<String>,
}

/// Read-only skill relationship table. Lookups follow table order, so a
/// child listed under two parents resolves to the first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SkillTaxonomy {
    entries: Vec<TaxonomyEntry>,
}

impl SkillTaxonomy {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = TaxonomyEntry>,
    {
        let mut taxonomy = Self::default();
        taxonomy.extend(entries);
        taxonomy
    }

    pub fn default_taxonomy() -> &'static SkillTaxonomy {
        &DEFAULT_TAXONOMY
    }

    /// Parses `[{"parent": "...", "children": ["..."]}, ...]`.
    pub fn from_json(json: &str) -> Result<Self, TaxonomyError> {
        let entries: Vec<TaxonomyEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn from_path(path: &Path) -> Result<Self, TaxonomyError> {
        let json = std::fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Merges entries into the table. Children of an existing parent are
    /// appended; new parents go to the end.
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = TaxonomyEntry>,
    {
        for entry in entries {
            let parent = normalize_skill(&entry.parent);
            if parent.is_empty() {
                continue;
            }
            match self.entries.iter_mut().find(|e| e.parent == parent) {
                Some(existing) => {
                    let merged = existing.children.iter().chain(entry.children.iter());
                    existing.children = normalize_skills(merged);
                }
                None => self.entries.push(TaxonomyEntry {
                    parent,
                    children: normalize_skills(&entry.children),
                }),
            }
        }
    }

    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Skills related to `skill`:
    /// - a parent → its children;
    /// - a child → its parent plus all siblings;
    /// - otherwise nothing.
    pub fn related_skills(&self, skill: &str) -> Vec<String> {
        let skill = normalize_skill(skill);

        if let Some(entry) = self.entries.iter().find(|e| e.parent == skill) {
            return entry.children.clone();
        }

        self.entries
            .iter()
            .find(|e| e.children.contains(&skill))
            .map(|entry| {
                std::iter::once(entry.parent.clone())
                    .chain(entry.children.iter().cloned())
                    .collect()
            })
            .unwrap_or_default()
    }
}
