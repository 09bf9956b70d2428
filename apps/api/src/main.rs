use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_matcher::analysis::engine::MatchEngine;
use resume_matcher::config::Config;
use resume_matcher::routes::build_router;
use resume_matcher::scoring::taxonomy::SkillTaxonomy;
use resume_matcher::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Matcher API v{}", env!("CARGO_PKG_VERSION"));

    // Scoring weights: warn and proceed unless STRICT_WEIGHTS is set
    let weights = config.weights();
    if config.strict_weights {
        weights
            .validate_strict()
            .context("Invalid scoring weights with STRICT_WEIGHTS=true")?;
    } else {
        for warning in weights.validate() {
            warn!(%warning, "configured scoring weights are invalid; continuing");
        }
    }
    info!(
        preset = %config.weight_preset,
        overridden = config.scoring_weights.is_some(),
        "Scoring weights loaded"
    );

    // Skill taxonomy: built-in table unless a JSON file replaces it
    let taxonomy = match &config.skill_taxonomy_path {
        Some(path) => {
            let taxonomy = SkillTaxonomy::from_path(path)
                .with_context(|| format!("Failed to load skill taxonomy from {}", path.display()))?;
            info!(path = %path.display(), parents = taxonomy.len(), "Skill taxonomy loaded");
            taxonomy
        }
        None => SkillTaxonomy::default_taxonomy().clone(),
    };

    let engine = MatchEngine::default()
        .with_taxonomy(taxonomy)
        .with_weights(weights);
    info!(semantic = engine.semantic_backend(), "Match engine initialized");

    // Build app state
    let state = AppState {
        config: config.clone(),
        engine: Arc::new(engine),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
