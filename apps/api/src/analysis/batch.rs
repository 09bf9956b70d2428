//! Batch analysis: N resumes against one job.
//!
//! The job is parsed once; each resume is scored on the blocking pool and the
//! results are ranked by overall score (descending, ties by submission order).

use std::cmp::Ordering;
use std::sync::Arc;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::info;

use crate::analysis::engine::MatchEngine;
use crate::analysis::report::AnalysisReport;
use crate::scoring::weights::WeightConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedReport {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Position of the resume in the submitted list.
    pub index: usize,
    pub report: AnalysisReport,
}

pub async fn analyze_batch(
    engine: Arc<MatchEngine>,
    job_text: &str,
    resumes: Vec<String>,
    weights: Option<WeightConfig>,
) -> anyhow::Result<Vec<RankedReport>> {
    let job = {
        let engine = Arc::clone(&engine);
        let job_text = job_text.to_owned();
        tokio::task::spawn_blocking(move || engine.parse_job(&job_text))
            .await
            .context("job parsing worker failed")?
    };
    let job = Arc::new(job);
    let total = resumes.len();

    let mut tasks = JoinSet::new();
    for (index, resume_text) in resumes.into_iter().enumerate() {
        let engine = Arc::clone(&engine);
        let job = Arc::clone(&job);
        tasks.spawn_blocking(move || {
            let resume = engine.parse_resume(&resume_text);
            (index, engine.analyze_facts(resume, &job, weights.as_ref()))
        });
    }

    let mut scored = Vec::with_capacity(total);
    while let Some(joined) = tasks.join_next().await {
        scored.push(joined.context("batch analysis worker failed")?);
    }

    let ranked = rank(scored);
    info!(job = %job.title, resumes = total, "batch analysis complete");
    Ok(ranked)
}

fn rank(mut scored: Vec<(usize, AnalysisReport)>) -> Vec<RankedReport> {
    scored.sort_by(|(ia, a), (ib, b)| {
        b.score
            .overall_score
            .partial_cmp(&a.score.overall_score)
            .unwrap_or(Ordering::Equal)
            .then(ia.cmp(ib))
    });
    scored
        .into_iter()
        .enumerate()
        .map(|(position, (index, report))| RankedReport {
            rank: position + 1,
            index,
            report,
        })
        .collect()
}
