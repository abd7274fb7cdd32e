//! AI travel assistance for Voyage itineraries.
//!
//! A thin pass-through to an OpenAI-compatible chat-completion service: a
//! [`TravelAssistant`] turns a [`voyage_core::Destination`] into a prompt,
//! sends it through a [`CompletionClient`], and returns the reply text
//! unchanged. It never reads or writes the itinerary.
//!
//! The client is injected, so callers construct one assistant and reuse it
//! across requests:
//!
//! ```rust,no_run
//! use voyage_assistant::TravelAssistant;
//! use voyage_core::Destination;
//!
//! # async fn example() -> voyage_assistant::Result<()> {
//! let assistant = TravelAssistant::from_env()?;
//! let lisbon = Destination::new(
//!     "Lisbon",
//!     "Portugal",
//!     "2025-09-10",
//!     "2025-09-14",
//!     1100.0,
//!     vec!["Fado".to_string()],
//! );
//! println!("{}", assistant.generate_itinerary(&lisbon).await?);
//! # Ok(())
//! # }
//! ```
//!
//! Configuration comes from the environment (see [`config`]); a missing API
//! key is reported as [`AssistantError::Configuration`] when the assistant is
//! first built, not at process start.

pub mod assistant;
pub mod client;
pub mod config;
pub mod error;
pub mod prompts;

pub use assistant::TravelAssistant;
pub use client::{CompletionClient, OpenAiClient};
pub use config::AssistantConfig;
pub use error::{AssistantError, Result};
