use serde::{Deserialize, Serialize};

use crate::extraction::seniority::SeniorityLevel;

/// Structured facts extracted from a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFacts {
    pub title: String,
    pub required_skills: Vec<String>,
    /// Skills listed under a preferred / nice-to-have section. May overlap
    /// with `required_skills` when the posting lists a skill in both places.
    pub preferred_skills: Vec<String>,
    /// At most 10 bullet sentences, document order.
    pub responsibilities: Vec<String>,
    pub required_years: Option<u32>,
    pub required_level: Option<SeniorityLevel>,
    /// Extra keywords supplied by the caller for keyword-density scoring.
    #[serde(default)]
    pub keywords: Vec<String>,
    pub raw_text: String,
}

impl JobFacts {
    /// Returns a copy with `keywords` appended, keeping the first spelling of
    /// case-insensitive duplicates.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for keyword in keywords {
            let keyword: String = keyword.into();
            let trimmed = keyword.trim();
            if trimmed.is_empty() {
                continue;
            }
            if !self
                .keywords
                .iter()
                .any(|k| k.eq_ignore_ascii_case(trimmed))
            {
                self.keywords.push(trimmed.to_string());
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_job() -> JobFacts {
        JobFacts {
            title: "Job Position".to_string(),
            required_skills: vec![],
            preferred_skills: vec![],
            responsibilities: vec![],
            required_years: None,
            required_level: None,
            keywords: vec![],
            raw_text: String::new(),
        }
    }

    #[test]
    fn test_with_keywords_dedups_case_insensitively() {
        let job = empty_job().with_keywords(["Cloud", "cloud", "  ", "production"]);
        assert_eq!(job.keywords, vec!["Cloud", "production"]);
    }

    #[test]
    fn test_keywords_default_when_missing_from_json() {
        let json = r#"{
            "title": "Engineer",
            "required_skills": ["python"],
            "preferred_skills": [],
            "responsibilities": [],
            "required_years": 3,
            "required_level": null,
            "raw_text": "Engineer"
        }"#;
        let job: JobFacts = serde_json::from_str(json).unwrap();
        assert!(job.keywords.is_empty());
        assert_eq!(job.required_years, Some(3));
    }
}
