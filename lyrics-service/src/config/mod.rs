use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Public Gemini v1beta REST endpoint. Overridable so tests can point the
/// provider at a local stub server.
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, Deserialize)]
pub struct LyricsConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: String,
    pub api_base: String,
    /// When false, the mock text provider is used instead of Gemini.
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model used for both lyric variants (e.g., gemini-1.5-flash)
    pub text_model: String,
}

impl LyricsConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(LyricsConfig {
            common: common_config,
            google: GoogleConfig {
                api_key: get_env("GOOGLE_API_KEY", Some(""), is_prod)?,
                api_base: get_env("GOOGLE_API_BASE", Some(DEFAULT_GEMINI_API_BASE), is_prod)?,
                enabled: get_env("GEMINI_ENABLED", Some("false"), is_prod)?
                    .parse()
                    .unwrap_or(false),
            },
            models: ModelConfig {
                text_model: get_env("LYRICS_TEXT_MODEL", Some("gemini-1.5-flash"), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
