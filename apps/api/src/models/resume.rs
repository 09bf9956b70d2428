use serde::{Deserialize, Serialize};

/// One `<title> | <start> - <end>` line found in a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub date_range_raw: String,
}

/// Structured facts extracted from a resume.
///
/// Every field has a neutral value, so text with no recognizable structure
/// still yields a well-formed `ResumeFacts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeFacts {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Lower-cased lexicon skills, unique, in order of first appearance.
    pub skills: Vec<String>,
    /// At most 10 entries, document order.
    pub experience_entries: Vec<ExperienceEntry>,
    pub years_of_experience: f64,
    /// At most 5 snippets.
    pub education: Vec<String>,
    /// At most 10 lines.
    pub certifications: Vec<String>,
    pub summary: Option<String>,
    pub raw_text: String,
}

impl ResumeFacts {
    pub fn has_experience(&self) -> bool {
        !self.experience_entries.is_empty()
    }

    pub fn has_education(&self) -> bool {
        !self.education.is_empty()
    }
}
