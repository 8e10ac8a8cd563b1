// src/config.rs

use std::{env, path::PathBuf, time::Duration};

use thiserror::Error;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Startup configuration problems. Reported once before the server binds.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} must be a number, got '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub llm_model_name: String,
    pub llm_base_url: String,
    pub database_file: PathBuf,
    /// Pause between the lesson and quiz stages of content generation.
    pub stage_delay: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    /// Reads the process environment. `.env` is loaded by `main` beforehand.
    pub fn from_env() -> Result<Self, ConfigError> {
        let google_api_key =
            env::var("GOOGLE_API_KEY").map_err(|_| ConfigError::Missing("GOOGLE_API_KEY"))?;

        let llm_model_name =
            env::var("LLM_MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let llm_base_url =
            env::var("LLM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let database_file = env::var("DATABASE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("database.json"));

        let stage_delay = Duration::from_secs(parse_or("STAGE_DELAY_SECS", 5)?);

        let port = parse_or("PORT", 8000)?;

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            google_api_key,
            llm_model_name,
            llm_base_url,
            database_file,
            stage_delay,
            port,
            rust_log,
        })
    }
}

/// Reads a numeric variable, falling back to `default` when it is unset.
fn parse_or<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}
