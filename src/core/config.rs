use std::env;

use thiserror::Error;

/// Runtime configuration, read from the process environment once at startup
/// and injected into the request handlers through `AppState`.
///
/// Credential values intentionally default to empty strings: a missing
/// token surfaces as an authentication failure on the first real outbound
/// call, not at boot.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub agents_api_key: String,
    pub agents_base_url: String,
    pub confluence_base_url: String,
    pub confluence_username: String,
    pub confluence_token: String,
    pub confluence_space_key: String,
    pub jira_base_url: String,
    pub jira_username: String,
    pub jira_token: String,
    pub jira_project_key: String,
    pub poll_interval_seconds: u64,
    pub poll_timeout_seconds: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid integer in env var {0}")]
    ParseInt(String),
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: env::var("SCRIBE_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            agents_api_key: env::var("AGENTS_API_KEY").unwrap_or_default(),
            agents_base_url: env::var("AGENTS_BASE_URL")
                .unwrap_or_else(|_| "https://api.julep.ai/api".to_string()),
            confluence_base_url: env::var("CONFLUENCE_BASE_URL").unwrap_or_default(),
            confluence_username: env::var("CONFLUENCE_API_USERNAME").unwrap_or_default(),
            confluence_token: env::var("CONFLUENCE_API_TOKEN").unwrap_or_default(),
            confluence_space_key: env::var("CONFLUENCE_SPACE_KEY")
                .unwrap_or_else(|_| "~712020a9eff71a5a5a4d99a7b4663b8b5602d6".to_string()),
            jira_base_url: env::var("JIRA_BASE_URL").unwrap_or_default(),
            jira_username: env::var("JIRA_API_USERNAME").unwrap_or_default(),
            jira_token: env::var("JIRA_API_TOKEN").unwrap_or_default(),
            jira_project_key: env::var("JIRA_PROJECT_KEY").unwrap_or_else(|_| "KAN".to_string()),
            poll_interval_seconds: parse_u64_env("EXECUTION_POLL_INTERVAL_SECONDS", 1)?,
            poll_timeout_seconds: parse_u64_env("EXECUTION_POLL_TIMEOUT_SECONDS", 300)?,
        })
    }
}

fn parse_u64_env(key: &str, default: u64) -> Result<u64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|_| ConfigError::ParseInt(key.to_string())),
        Err(_) => Ok(default),
    }
}
