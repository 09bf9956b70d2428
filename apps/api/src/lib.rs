//! Resume ↔ job-description matching: heuristic extraction, taxonomy-aware
//! skill matching, weighted component scoring and an HTTP API over them.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod routes;
pub mod scoring;
pub mod state;

pub use analysis::engine::{score_match, MatchEngine};
pub use analysis::report::AnalysisReport;
pub use extraction::jd_parser::parse_job;
pub use extraction::resume_parser::parse_resume;
pub use models::job::JobFacts;
pub use models::resume::ResumeFacts;
pub use scoring::aggregator::MatchScore;
pub use scoring::weights::{WeightConfig, WeightPreset};
