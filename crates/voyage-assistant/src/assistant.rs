//! The travel assistant facade.

use std::time::Duration;

use log::{debug, warn};
use tokio::time;
use voyage_core::Destination;

use crate::{
    client::{CompletionClient, OpenAiClient},
    config::AssistantConfig,
    error::{AssistantError, Result},
    prompts,
};

/// Generates travel advice for a destination through an injected
/// [`CompletionClient`].
///
/// Every request is bounded by `timeout`; exceeding it yields
/// [`AssistantError::Unavailable`].
pub struct TravelAssistant<C> {
    client: C,
    timeout: Duration,
}

impl TravelAssistant<OpenAiClient> {
    /// Builds an assistant backed by the OpenAI-compatible client.
    pub fn from_config(config: AssistantConfig) -> Result<Self> {
        let timeout = config.timeout;
        Ok(Self::new(OpenAiClient::new(config)?, timeout))
    }

    /// Builds an assistant from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::Configuration` when the API key is missing.
    pub fn from_env() -> Result<Self> {
        Self::from_config(AssistantConfig::from_env()?)
    }
}

impl<C: CompletionClient> TravelAssistant<C> {
    /// Wraps a completion client.
    pub fn new(client: C, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Asks for a detailed day-by-day itinerary for the destination.
    pub async fn generate_itinerary(&self, destination: &Destination) -> Result<String> {
        self.ask("itinerary", prompts::itinerary_prompt(destination))
            .await
    }

    /// Asks for budget-saving tips for the destination.
    pub async fn generate_budget_tips(&self, destination: &Destination) -> Result<String> {
        self.ask("budget tips", prompts::budget_tips_prompt(destination))
            .await
    }

    async fn ask(&self, kind: &str, prompt: String) -> Result<String> {
        debug!("Requesting {kind} ({} prompt bytes)", prompt.len());
        match time::timeout(self.timeout, self.client.complete(&prompt)).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => {
                warn!("{kind} request failed: {e}");
                Err(e)
            }
            Err(_) => {
                warn!("{kind} request timed out after {:?}", self.timeout);
                Err(AssistantError::unavailable(format!(
                    "Request timed out after {} seconds",
                    self.timeout.as_secs_f64()
                )))
            }
        }
    }
}
