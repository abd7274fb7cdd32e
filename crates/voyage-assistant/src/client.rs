//! Chat-completion clients.

use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    config::AssistantConfig,
    error::{AssistantError, Result},
};

/// A single-shot text-generation service: one prompt in, one text out.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends `prompt` as a single user message and returns the reply text
    /// verbatim.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// [`CompletionClient`] for OpenAI-compatible `/chat/completions` endpoints.
pub struct OpenAiClient {
    http: reqwest::Client,
    config: AssistantConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

impl OpenAiClient {
    /// Creates a client whose HTTP requests are bounded by the configured
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::Configuration` if the HTTP client cannot be
    /// constructed.
    pub fn new(config: AssistantConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AssistantError::configuration(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!("Calling chat completions with model: {}", self.config.model);

        let response = self
            .http
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::unavailable(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Chat completions returned {status}");
            return Err(AssistantError::unavailable(format!(
                "Service returned {status}: {body}"
            )));
        }

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::unavailable(format!("Unreadable response: {e}")))?;

        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AssistantError::unavailable("Response contained no text"))
    }
}
