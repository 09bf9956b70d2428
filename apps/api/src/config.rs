use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::scoring::weights::{WeightConfig, WeightPreset};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub weight_preset: WeightPreset,
    /// Full override of the preset, parsed from `SCORING_WEIGHTS` JSON.
    pub scoring_weights: Option<WeightConfig>,
    /// Reject invalid weights instead of warning.
    pub strict_weights: bool,
    pub skill_taxonomy_path: Option<PathBuf>,
    pub batch_max_resumes: usize,
    pub max_text_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            weight_preset: WeightPreset::Standard,
            scoring_weights: None,
            strict_weights: false,
            skill_taxonomy_path: None,
            batch_max_resumes: 50,
            max_text_bytes: 200_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let weight_preset = match lookup("WEIGHT_PRESET") {
            Some(value) => value.parse().context("WEIGHT_PRESET is not a known preset")?,
            None => defaults.weight_preset,
        };
        let scoring_weights = lookup("SCORING_WEIGHTS")
            .map(|json| serde_json::from_str::<WeightConfig>(&json))
            .transpose()
            .context("SCORING_WEIGHTS must be a JSON weight object")?;

        Ok(Config {
            port: parse_or("PORT", &lookup, defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            weight_preset,
            scoring_weights,
            strict_weights: parse_or("STRICT_WEIGHTS", &lookup, defaults.strict_weights)?,
            skill_taxonomy_path: lookup("SKILL_TAXONOMY_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            batch_max_resumes: parse_or("BATCH_MAX_RESUMES", &lookup, defaults.batch_max_resumes)?,
            max_text_bytes: parse_or("MAX_TEXT_BYTES", &lookup, defaults.max_text_bytes)?,
        })
    }

    /// `SCORING_WEIGHTS` when set, otherwise the preset.
    pub fn weights(&self) -> WeightConfig {
        self.scoring_weights
            .unwrap_or_else(|| WeightConfig::preset(self.weight_preset))
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value")),
        None => Ok(default),
    }
}
