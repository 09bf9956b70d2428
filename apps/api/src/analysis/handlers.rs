//! Axum route handlers for the Analysis API.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::batch::{analyze_batch, RankedReport};
use crate::analysis::report::AnalysisReport;
use crate::errors::AppError;
use crate::extraction::skills::normalize_skill;
use crate::models::job::JobFacts;
use crate::models::resume::ResumeFacts;
use crate::scoring::weights::{RecommendationTiers, WeightConfig, WeightPreset};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ParseJobRequest {
    pub job_text: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_text: String,
    pub weights: Option<WeightConfig>,
    /// Extra keywords for keyword-density scoring.
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct BatchAnalyzeRequest {
    pub job_text: String,
    pub resumes: Vec<String>,
    pub weights: Option<WeightConfig>,
}

#[derive(Debug, Serialize)]
pub struct BatchAnalyzeResponse {
    pub total: usize,
    pub results: Vec<RankedReport>,
}

#[derive(Debug, Serialize)]
pub struct WeightsResponse {
    pub active: WeightConfig,
    pub strict: bool,
    pub tiers: RecommendationTiers,
    pub semantic_backend: String,
    pub presets: BTreeMap<String, WeightConfig>,
}

#[derive(Debug, Serialize)]
pub struct RelatedSkillsResponse {
    pub skill: String,
    pub related: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/parse
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(request): Json<ParseResumeRequest>,
) -> Result<Json<ResumeFacts>, AppError> {
    check_text_size("resume_text", &request.resume_text, state.config.max_text_bytes)?;

    let engine = state.engine.clone();
    let resume = run_blocking(move || engine.parse_resume(&request.resume_text)).await?;
    Ok(Json(resume))
}

/// POST /api/v1/jobs/parse
pub async fn handle_parse_job(
    State(state): State<AppState>,
    Json(request): Json<ParseJobRequest>,
) -> Result<Json<JobFacts>, AppError> {
    check_text_size("job_text", &request.job_text, state.config.max_text_bytes)?;

    let engine = state.engine.clone();
    let job = run_blocking(move || engine.parse_job(&request.job_text)).await?;
    Ok(Json(job))
}

/// POST /api/v1/analysis
///
/// Parses both texts and scores the pair. Request weights replace the
/// configured weights for this call only.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    check_text_size("resume_text", &request.resume_text, state.config.max_text_bytes)?;
    check_text_size("job_text", &request.job_text, state.config.max_text_bytes)?;
    let weights = request_weights(&state, request.weights)?;

    let engine = state.engine.clone();
    let report = run_blocking(move || {
        let job = engine.parse_job(&request.job_text).with_keywords(request.keywords);
        let resume = engine.parse_resume(&request.resume_text);
        engine.analyze_facts(resume, &job, weights.as_ref())
    })
    .await?;

    info!(
        analysis_id = %report.analysis_id,
        overall = report.score.overall_score,
        recommendation = %report.score.recommendation,
        "analysis complete"
    );

    Ok(Json(report))
}

/// POST /api/v1/analysis/batch
///
/// Scores every resume against one job and returns them ranked.
pub async fn handle_batch_analyze(
    State(state): State<AppState>,
    Json(request): Json<BatchAnalyzeRequest>,
) -> Result<Json<BatchAnalyzeResponse>, AppError> {
    let max_bytes = state.config.max_text_bytes;
    let max_resumes = state.config.batch_max_resumes;

    if request.resumes.is_empty() {
        return Err(AppError::Validation("resumes cannot be empty".to_string()));
    }
    if request.resumes.len() > max_resumes {
        return Err(AppError::Validation(format!(
            "at most {max_resumes} resumes per batch, got {}",
            request.resumes.len()
        )));
    }
    check_text_size("job_text", &request.job_text, max_bytes)?;
    for (index, resume) in request.resumes.iter().enumerate() {
        check_text_size(&format!("resumes[{index}]"), resume, max_bytes)?;
    }
    let weights = request_weights(&state, request.weights)?;

    let results = analyze_batch(
        state.engine.clone(),
        &request.job_text,
        request.resumes,
        weights,
    )
    .await?;

    Ok(Json(BatchAnalyzeResponse {
        total: results.len(),
        results,
    }))
}

/// GET /api/v1/weights
pub async fn handle_get_weights(State(state): State<AppState>) -> Json<WeightsResponse> {
    let presets = WeightPreset::ALL
        .into_iter()
        .map(|preset| (preset.to_string(), WeightConfig::preset(preset)))
        .collect();

    Json(WeightsResponse {
        active: *state.engine.weights(),
        strict: state.config.strict_weights,
        tiers: *state.engine.tiers(),
        semantic_backend: state.engine.semantic_backend().to_string(),
        presets,
    })
}

/// GET /api/v1/taxonomy/:skill
pub async fn handle_related_skills(
    State(state): State<AppState>,
    Path(skill): Path<String>,
) -> Result<Json<RelatedSkillsResponse>, AppError> {
    let skill = normalize_skill(&skill);
    let related = state.engine.taxonomy().related_skills(&skill);
    if related.is_empty() {
        return Err(AppError::NotFound(format!("Skill '{skill}' is not in the taxonomy")));
    }

    Ok(Json(RelatedSkillsResponse { skill, related }))
}

// ────────────────────────────────────────────────────────────────────────────
// Validation helpers
// ────────────────────────────────────────────────────────────────────────────

/// Extraction and scoring are CPU-bound; keep them off the async workers.
async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed: {e}")))
}

fn check_text_size(field: &str, text: &str, max_bytes: usize) -> Result<(), AppError> {
    if text.len() > max_bytes {
        return Err(AppError::Validation(format!(
            "{field} exceeds {max_bytes} bytes"
        )));
    }
    Ok(())
}

/// Request weights pass through unchanged unless strict mode is on, in which
/// case invalid ones are rejected.
fn request_weights(
    state: &AppState,
    weights: Option<WeightConfig>,
) -> Result<Option<WeightConfig>, AppError> {
    if state.config.strict_weights {
        if let Some(weights) = &weights {
            weights.validate_strict()?;
        }
    }
    Ok(weights)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::engine::MatchEngine;
    use crate::config::Config;
    use crate::routes::build_router;

    const RESUME: &str = "Jane Doe\njane@example.com\n\nEXPERIENCE\nSenior Data Engineer | 2018 - 2023\n\nEDUCATION\nBachelor of Science\n\nSKILLS\nPython, SQL, Airflow\n";
    const JOB: &str = "Data Engineer\n\nRequirements: Python, SQL and Spark.\n";

    fn app_with(config: Config) -> Router {
        build_router(AppState {
            config,
            engine: Arc::new(MatchEngine::default()),
        })
    }

    fn app() -> Router {
        app_with(Config::default())
    }

    async fn send(
        app: Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_run_blocking_maps_worker_panic_to_internal() {
        let value = run_blocking(|| 21 * 2).await.unwrap();
        assert_eq!(value, 42);

        let result = run_blocking::<(), _>(|| panic!("extraction worker panicked")).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_parse_resume() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/resumes/parse",
            Some(json!({ "resume_text": RESUME })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Jane Doe");
        assert_eq!(body["email"], "jane@example.com");
        assert_eq!(body["skills"], json!(["python", "sql", "airflow"]));
    }

    #[tokio::test]
    async fn test_parse_job() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/jobs/parse",
            Some(json!({ "job_text": JOB })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Data Engineer");
        assert_eq!(body["required_skills"], json!(["python", "sql", "spark"]));
    }

    #[tokio::test]
    async fn test_analyze_with_keywords() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/analysis",
            Some(json!({
                "resume_text": RESUME,
                "job_text": JOB,
                "keywords": ["airflow"]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["candidate_name"], "Jane Doe");
        assert_eq!(body["job_title"], "Data Engineer");
        assert_eq!(body["score"]["matched_skills"], json!(["python", "sql"]));
        assert_eq!(body["score"]["missing_skills"], json!(["spark"]));
        assert_eq!(body["details"]["keywords"]["total_keywords"], 4);
        assert!(body["analysis_id"].is_string());
    }

    #[tokio::test]
    async fn test_invalid_request_weights_warn_by_default() {
        let weights = json!({
            "skills": 0.9, "experience": 0.25, "education": 0.15,
            "ats_semantic": 0.15, "keywords": 0.10
        });
        let body = json!({ "resume_text": RESUME, "job_text": JOB, "weights": weights });

        let (status, lenient) = send(app(), "POST", "/api/v1/analysis", Some(body.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(lenient["score"]["warnings"].as_array().unwrap().len(), 1);

        let strict = Config {
            strict_weights: true,
            ..Config::default()
        };
        let (status, error) = send(app_with(strict), "POST", "/api/v1/analysis", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["error"]["code"], "INVALID_WEIGHTS");
    }

    #[tokio::test]
    async fn test_text_size_limit() {
        let config = Config {
            max_text_bytes: 16,
            ..Config::default()
        };
        let (status, body) = send(
            app_with(config),
            "POST",
            "/api/v1/resumes/parse",
            Some(json!({ "resume_text": RESUME })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_batch_ranked() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/analysis/batch",
            Some(json!({
                "job_text": JOB,
                "resumes": ["Sam Smith\nSKILLS\nExcel", RESUME]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["results"][0]["index"], 1);
        assert_eq!(body["results"][0]["rank"], 1);
        assert_eq!(body["results"][1]["index"], 0);
    }

    #[tokio::test]
    async fn test_batch_limits() {
        let (status, _) = send(
            app(),
            "POST",
            "/api/v1/analysis/batch",
            Some(json!({ "job_text": JOB, "resumes": [] })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let config = Config {
            batch_max_resumes: 1,
            ..Config::default()
        };
        let (status, _) = send(
            app_with(config),
            "POST",
            "/api/v1/analysis/batch",
            Some(json!({ "job_text": JOB, "resumes": [RESUME, RESUME] })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_weights_endpoint() {
        let (status, body) = send(app(), "GET", "/api/v1/weights", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["active"]["skills"], 0.35);
        assert_eq!(body["presets"]["ats_focused"]["fourth_slot"], "ats");
        assert_eq!(body["tiers"]["strong"], 85.0);
        assert_eq!(body["semantic_backend"], "tfidf");
    }

    #[tokio::test]
    async fn test_taxonomy_lookup() {
        let (status, body) = send(app(), "GET", "/api/v1/taxonomy/Docker", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skill"], "docker");
        assert_eq!(body["related"][0], "devops");

        let (status, _) = send(app(), "GET", "/api/v1/taxonomy/cobol", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
