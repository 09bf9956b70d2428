//! Match engine. Owns the shared read-only tables and runs the pipeline:
//! extract → skill match → component scores → aggregate → report.
//!
//! One `Arc<MatchEngine>` is shared by every request and batch worker.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::analysis::report::{AnalysisReport, ScoreDetails};
use crate::extraction::jd_parser::parse_job_with;
use crate::extraction::lexicon::SkillLexicon;
use crate::extraction::resume_parser::parse_resume_with;
use crate::models::job::JobFacts;
use crate::models::resume::ResumeFacts;
use crate::scoring::aggregator::{aggregate, ComponentScores, Evidence, MatchScore};
use crate::scoring::ats::score_ats;
use crate::scoring::education::score_education;
use crate::scoring::experience::score_experience;
use crate::scoring::keyword::score_keywords;
use crate::scoring::semantic::{score_semantic, SemanticScorer, TfIdfSemanticScorer};
use crate::scoring::skill_match::SkillMatcher;
use crate::scoring::taxonomy::SkillTaxonomy;
use crate::scoring::weights::{RecommendationTiers, WeightConfig};

static DEFAULT_ENGINE: Lazy<MatchEngine> = Lazy::new(MatchEngine::default);

#[derive(Clone)]
pub struct MatchEngine {
    lexicon: SkillLexicon,
    taxonomy: SkillTaxonomy,
    weights: WeightConfig,
    tiers: RecommendationTiers,
    semantic: Arc<dyn SemanticScorer>,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self {
            lexicon: SkillLexicon::default_lexicon().clone(),
            taxonomy: SkillTaxonomy::default_taxonomy().clone(),
            weights: WeightConfig::standard(),
            tiers: RecommendationTiers::default(),
            semantic: Arc::new(TfIdfSemanticScorer),
        }
    }
}

impl MatchEngine {
    pub fn with_lexicon(mut self, lexicon: SkillLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_taxonomy(mut self, taxonomy: SkillTaxonomy) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    pub fn with_weights(mut self, weights: WeightConfig) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_tiers(mut self, tiers: RecommendationTiers) -> Self {
        self.tiers = tiers;
        self
    }

    pub fn with_semantic_scorer(mut self, scorer: Arc<dyn SemanticScorer>) -> Self {
        self.semantic = scorer;
        self
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    pub fn tiers(&self) -> &RecommendationTiers {
        &self.tiers
    }

    pub fn semantic_backend(&self) -> &'static str {
        self.semantic.name()
    }

    pub fn parse_resume(&self, text: &str) -> ResumeFacts {
        self.parse_resume_at(text, Utc::now().year())
    }

    /// Resolves "Present" date ranges against `reference_year`.
    pub fn parse_resume_at(&self, text: &str, reference_year: i32) -> ResumeFacts {
        parse_resume_with(text, &self.lexicon, reference_year)
    }

    pub fn parse_job(&self, text: &str) -> JobFacts {
        parse_job_with(text, &self.lexicon)
    }

    /// Scores already-parsed facts. `weights` overrides the engine default.
    pub fn score_match(
        &self,
        resume: &ResumeFacts,
        job: &JobFacts,
        weights: Option<&WeightConfig>,
    ) -> MatchScore {
        self.evaluate(resume, job, weights).0
    }

    /// Parses both texts and produces a full report.
    pub fn analyze(
        &self,
        resume_text: &str,
        job_text: &str,
        weights: Option<&WeightConfig>,
    ) -> AnalysisReport {
        let job = self.parse_job(job_text);
        self.analyze_facts(self.parse_resume(resume_text), &job, weights)
    }

    pub fn analyze_facts(
        &self,
        resume: ResumeFacts,
        job: &JobFacts,
        weights: Option<&WeightConfig>,
    ) -> AnalysisReport {
        let (score, details) = self.evaluate(&resume, job, weights);
        AnalysisReport::new(resume, &job.title, score, details)
    }

    fn evaluate(
        &self,
        resume: &ResumeFacts,
        job: &JobFacts,
        weights: Option<&WeightConfig>,
    ) -> (MatchScore, ScoreDetails) {
        let weights = weights.unwrap_or(&self.weights);

        let skills = SkillMatcher::new(&self.taxonomy).match_skills(
            &resume.skills,
            &job.required_skills,
            &job.preferred_skills,
        );
        let experience = score_experience(resume, job);
        let education = score_education(&resume.education);
        let keywords = score_keywords(&resume.raw_text, job);
        let ats = score_ats(&resume.raw_text);
        let semantic = score_semantic(self.semantic.as_ref(), &resume.raw_text, &job.raw_text);

        let components = ComponentScores {
            skill: skills.score,
            experience: experience.score,
            education: education.score,
            keyword: keywords.score,
            semantic: semantic.score,
            ats: ats.score,
        };
        let evidence = Evidence {
            skills: &skills,
            resume,
        };
        let score = aggregate(&components, &evidence, weights, &self.tiers);

        debug!(
            candidate = %resume.name,
            job = %job.title,
            overall = score.overall_score,
            "match scored"
        );

        let details = ScoreDetails {
            skills,
            experience,
            education,
            keywords,
            ats,
            semantic,
        };
        (score, details)
    }
}

/// Scores with the built-in lexicon, taxonomy and TF-IDF semantic scorer.
pub fn score_match(
    resume: &ResumeFacts,
    job: &JobFacts,
    weights: Option<&WeightConfig>,
) -> MatchScore {
    DEFAULT_ENGINE.score_match(resume, job, weights)
}
