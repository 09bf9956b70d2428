//! Semantic similarity between resume and posting text.
//!
//! `MatchEngine` holds an `Arc<dyn SemanticScorer>`, so an embedding backend
//! can replace the default TF-IDF scorer without touching callers.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Score when either side has nothing to compare.
pub const NO_TEXT_SCORE: f64 = 50.0;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9]{2,}").unwrap());

const STOP_WORDS: &[&str] = &[
    "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "have", "in", "is", "it",
    "of", "on", "or", "our", "that", "the", "this", "to", "we", "will", "with", "you", "your",
];

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Similarity backend. Implementations must be pure: same texts, same score.
pub trait SemanticScorer: Send + Sync {
    /// Backend name reported in `SemanticDetail.method`.
    fn name(&self) -> &'static str;

    /// Similarity in `[0, 100]`.
    fn similarity(&self, resume_text: &str, job_text: &str) -> f64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticDetail {
    pub score: f64,
    pub method: String,
}

pub fn score_semantic(
    scorer: &dyn SemanticScorer,
    resume_text: &str,
    job_text: &str,
) -> SemanticDetail {
    SemanticDetail {
        score: scorer.similarity(resume_text, job_text).clamp(0.0, 100.0),
        method: scorer.name().to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// TfIdfSemanticScorer: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Cosine similarity of TF-IDF vectors fitted on the two documents.
///
/// idf = ln((1 + n) / (1 + df)) + 1, vectors L2-normalized.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfSemanticScorer;

impl SemanticScorer for TfIdfSemanticScorer {
    fn name(&self) -> &'static str {
        "tfidf"
    }

    fn similarity(&self, resume_text: &str, job_text: &str) -> f64 {
        let docs = [term_counts(resume_text), term_counts(job_text)];
        if docs.iter().any(HashMap::is_empty) {
            return NO_TEXT_SCORE;
        }

        let n = docs.len() as f64;
        let vocabulary: HashSet<&str> = docs
            .iter()
            .flat_map(|d| d.keys().map(String::as_str))
            .collect();
        let idf: HashMap<&str, f64> = vocabulary
            .into_iter()
            .map(|term| {
                let df = docs.iter().filter(|d| d.contains_key(term)).count() as f64;
                (term, ((1.0 + n) / (1.0 + df)).ln() + 1.0)
            })
            .collect();

        let resume_vec = tfidf_vector(&docs[0], &idf);
        let job_vec = tfidf_vector(&docs[1], &idf);

        let cosine: f64 = resume_vec
            .iter()
            .filter_map(|(term, a)| job_vec.get(term).map(|b| a * b))
            .sum();

        (cosine * 100.0).clamp(0.0, 100.0)
    }
}

fn term_counts(text: &str) -> HashMap<String, f64> {
    let lower = text.to_lowercase();
    let mut counts = HashMap::new();
    for token in TOKEN_RE.find_iter(&lower).map(|m| m.as_str()) {
        if STOP_WORDS.contains(&token) {
            continue;
        }
        *counts.entry(token.to_string()).or_insert(0.0) += 1.0;
    }
    counts
}

/// tf·idf weights, L2-normalized.
fn tfidf_vector<'a>(
    counts: &'a HashMap<String, f64>,
    idf: &HashMap<&str, f64>,
) -> HashMap<&'a str, f64> {
    let mut vector: HashMap<&str, f64> = counts
        .iter()
        .map(|(term, tf)| (term.as_str(), tf * idf.get(term.as_str()).copied().unwrap_or(1.0)))
        .collect();
    let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        vector.values_mut().for_each(|w| *w /= norm);
    }
    vector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_full() {
        let text = "Senior Rust engineer building distributed systems";
        let score = TfIdfSemanticScorer.similarity(text, text);
        assert!((score - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        let score = TfIdfSemanticScorer.similarity("python django postgres", "welding forklift");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_side_is_neutral() {
        assert_eq!(TfIdfSemanticScorer.similarity("", "rust engineer"), 50.0);
        // stop words and single characters carry no tokens
        assert_eq!(TfIdfSemanticScorer.similarity("the and a", "rust"), 50.0);
    }

    #[test]
    fn test_overlap_ranks_closer_text_higher() {
        let job = "Rust engineer for async network services with tokio";
        let close =
            TfIdfSemanticScorer.similarity("Built async network services in Rust using tokio", job);
        let far = TfIdfSemanticScorer.similarity("Managed retail store staff and inventory", job);
        assert!(close > far);
        assert!(close > 0.0 && close < 100.0);
    }

    #[test]
    fn test_detail_reports_method() {
        let detail = score_semantic(&TfIdfSemanticScorer, "rust", "rust");
        assert_eq!(detail.method, "tfidf");
        assert!((detail.score - 100.0).abs() < 1e-6);
    }
}
