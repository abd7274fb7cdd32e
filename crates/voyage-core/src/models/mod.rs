//! Data models for destinations.
//!
//! [`Destination`] is the only record the itinerary stores. Its
//! [`std::fmt::Display`] implementation (in [`crate::display::models`])
//! produces the one-line summary used by listings, and its serde derives
//! define the persisted JSON shape.
//!
//! # Examples
//!
//! ```rust
//! use voyage_core::models::{Destination, DestinationUpdate};
//!
//! let mut rome = Destination::new(
//!     "Rome",
//!     "Italy",
//!     "2025-05-01",
//!     "2025-05-04",
//!     1200.0,
//!     vec!["Colosseum".to_string(), "Vatican".to_string()],
//! );
//! assert_eq!(
//!     rome.to_string(),
//!     "Rome, Italy | 2025-05-01 to 2025-05-04 | Budget: $1200.0 | Activities: Colosseum, Vatican"
//! );
//!
//! rome.apply_update(DestinationUpdate {
//!     budget: Some(900.0),
//!     ..Default::default()
//! });
//! assert_eq!(rome.budget, 900.0);
//! assert_eq!(rome.country, "Italy");
//! ```

pub mod destination;
pub mod update;


pub use destination::{format_budget, Destination};
pub use update::DestinationUpdate;
