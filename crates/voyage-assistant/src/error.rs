//! Error types for the travel assistant.

use thiserror::Error;

/// Errors raised while asking the text-generation service for help.
///
/// None of these affect itinerary state.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Required settings (such as the API key) are missing or invalid
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The service could not be reached, failed, timed out, or returned no
    /// text
    #[error("Assistance unavailable: {message}")]
    Unavailable { message: String },
}

impl AssistantError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub(crate) fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, AssistantError>;
