//! Core library for the Voyage travel itinerary planner.
//!
//! This crate owns the destination data model, the itinerary store with its
//! identity and partial-update semantics, keyword search, and the JSON file
//! round trip.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): [`Destination`] implements
//!   [`std::fmt::Display`] as its one-line summary
//! - **Display Wrappers** ([`display`]): lists, detail views and operation
//!   results as markdown
//! - **Terminal Rendering**: done by the CLI
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use voyage_core::{params::AddDestination, ItineraryBuilder};
//!
//! # fn example() -> voyage_core::Result<()> {
//! let mut itinerary = ItineraryBuilder::new()
//!     .with_file_path(Some("trips.json"))
//!     .build()?;
//!
//! itinerary.add_destination(&AddDestination {
//!     city: "Paris".to_string(),
//!     country: "France".to_string(),
//!     start_date: "2025-06-01".to_string(),
//!     end_date: "2025-06-05".to_string(),
//!     budget: 1500.0,
//!     activities: vec!["Louvre".to_string()],
//! })?;
//!
//! for line in itinerary.list_all() {
//!     println!("{line}");
//! }
//! itinerary.save()?;
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use display::{
    CreateResult, DeleteResult, DestinationDetail, Destinations, OperationStatus, UpdateResult,
};
pub use error::{ItineraryError, Result};
pub use models::{Destination, DestinationUpdate};
pub use params::{AddDestination, CityRef, SearchDestinations, UpdateDestination};
pub use store::{Itinerary, ItineraryBuilder, DEFAULT_FILE_NAME};
