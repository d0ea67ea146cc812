use std::env;
use thiserror::Error;

/// Largest result count the query endpoint accepts per request.
pub const MAX_RESULT_LIMIT: usize = 50;
/// Result count used when neither the environment nor the CLI supplies one.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable was not provided.
    #[error("Missing environment variable: {0}")]
    MissingVariable(String),
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration for the ragline client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the RAG platform's REST API.
    pub api_url: String,
    /// Optional tenant API key sent as a bearer token.
    pub api_key: Option<String>,
    /// Optional default set of dataset identifiers to scope queries to.
    pub dataset_ids: Option<Vec<String>>,
    /// Optional override for the retrieval result count.
    pub result_limit: Option<usize>,
    /// Optional override for the server-side query-rewrite flag.
    pub query_rewrite: Option<bool>,
}

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: load_env("RAG_API_URL")?,
            api_key: load_env_optional("RAG_API_KEY"),
            dataset_ids: parse_dataset_ids(load_env_optional("RAG_DATASET_IDS")),
            result_limit: parse_result_limit(load_env_optional("RAG_RESULT_LIMIT"))?,
            query_rewrite: parse_bool_flag("RAG_QUERY_REWRITE", load_env_optional("RAG_QUERY_REWRITE"))?,
        })
    }
}

fn load_env(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingVariable(key.to_string()))
}

fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Split a comma-separated dataset list, dropping blank entries.
fn parse_dataset_ids(raw: Option<String>) -> Option<Vec<String>> {
    let ids: Vec<String> = raw?
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();
    if ids.is_empty() { None } else { Some(ids) }
}

/// Parse and range-check the retrieval result limit (`1..=50`).
fn parse_result_limit(raw: Option<String>) -> Result<Option<usize>, ConfigError> {
    let Some(value) = raw else { return Ok(None) };
    let limit: usize = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue("RAG_RESULT_LIMIT".to_string()))?;
    if limit == 0 || limit > MAX_RESULT_LIMIT {
        return Err(ConfigError::InvalidValue("RAG_RESULT_LIMIT".to_string()));
    }
    Ok(Some(limit))
}

fn parse_bool_flag(key: &str, raw: Option<String>) -> Result<Option<bool>, ConfigError> {
    let Some(value) = raw else { return Ok(None) };
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(Some(true)),
        "0" | "false" | "no" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidValue(key.to_string())),
    }
}
