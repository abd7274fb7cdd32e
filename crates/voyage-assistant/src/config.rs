//! Assistant configuration read from the process environment.

use std::{fmt, time::Duration};

use crate::error::{AssistantError, Result};

/// Environment variable holding the API credential (required).
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable selecting the model.
pub const MODEL_VAR: &str = "OPENAI_MODEL";
/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_VAR: &str = "VOYAGE_ASSIST_TIMEOUT_SECS";

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings for the chat-completion service.
#[derive(Clone, PartialEq)]
pub struct AssistantConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl AssistantConfig {
    /// Creates a configuration with default model, endpoint and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::Configuration` when `OPENAI_API_KEY` is
    /// missing or empty, or the timeout is not a positive whole number of
    /// seconds.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = non_empty(API_KEY_VAR).ok_or_else(|| {
            AssistantError::configuration(format!(
                "{API_KEY_VAR} is not set; AI travel assistance needs an API key"
            ))
        })?;

        let mut config = Self::new(api_key);
        if let Some(model) = non_empty(MODEL_VAR) {
            config.model = model;
        }
        if let Some(base_url) = non_empty(BASE_URL_VAR) {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(raw) = non_empty(TIMEOUT_VAR) {
            config.timeout = parse_timeout(&raw)?;
        }
        Ok(config)
    }

    /// Chat-completion endpoint derived from the base URL.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(AssistantError::configuration(format!(
            "{TIMEOUT_VAR} must be a positive number of seconds, got '{raw}'"
        ))),
    }
}
