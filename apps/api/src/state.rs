use std::sync::Arc;

use crate::analysis::engine::MatchEngine;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Lexicon, taxonomy, default weights and the pluggable semantic scorer.
    pub engine: Arc<MatchEngine>,
}
