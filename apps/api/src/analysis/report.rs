use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::ResumeFacts;
use crate::scoring::aggregator::MatchScore;
use crate::scoring::ats::AtsDetail;
use crate::scoring::education::EducationDetail;
use crate::scoring::experience::ExperienceDetail;
use crate::scoring::keyword::KeywordDetail;
use crate::scoring::semantic::SemanticDetail;
use crate::scoring::skill_match::SkillMatchDetail;

/// Per-component evidence behind a `MatchScore`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub skills: SkillMatchDetail,
    pub experience: ExperienceDetail,
    pub education: EducationDetail,
    pub keywords: KeywordDetail,
    pub ats: AtsDetail,
    pub semantic: SemanticDetail,
}

/// Full analysis of one resume against one job, returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub candidate_name: String,
    pub job_title: String,
    pub resume: ResumeFacts,
    pub score: MatchScore,
    pub details: ScoreDetails,
}

impl AnalysisReport {
    pub fn new(
        resume: ResumeFacts,
        job_title: &str,
        score: MatchScore,
        details: ScoreDetails,
    ) -> Self {
        Self {
            analysis_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            candidate_name: resume.name.clone(),
            job_title: job_title.to_string(),
            resume,
            score,
            details,
        }
    }
}
