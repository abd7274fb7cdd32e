//! The itinerary store.
//!
//! [`Itinerary`] owns the ordered list of destinations and its JSON file
//! contract. It is organized like this:
//!
//! - [`builder`]: [`ItineraryBuilder`], resolves the file path and performs
//!   the initial load
//! - [`ops`]: raw collection operations (add, remove, update, search, list)
//!   returning `bool`/`Option` for lookups
//! - [`persistence`]: whole-file save and load
//! - [`handlers`]: parameter-driven operations returning display wrappers,
//!   used by interfaces; failed lookups become [`ItineraryError::NotFound`]
//!
//! Lookups by city are case-insensitive linear scans and always act on the
//! first match in insertion order. Duplicate cities are allowed.
//!
//! # Usage
//!
//! ```rust
//! use voyage_core::{models::Destination, ItineraryBuilder};
//!
//! let mut itinerary = ItineraryBuilder::new().build_empty();
//! itinerary.add(Destination::new(
//!     "Paris",
//!     "France",
//!     "2025-06-01",
//!     "2025-06-05",
//!     1500.0,
//!     vec!["Louvre".to_string()],
//! ));
//!
//! assert_eq!(itinerary.search("louvre").len(), 1);
//! assert!(itinerary.remove("PARIS"));
//! assert!(itinerary.is_empty());
//! ```
//!
//! [`ItineraryError::NotFound`]: crate::ItineraryError::NotFound

use std::path::{Path, PathBuf};

pub mod builder;
pub mod handlers;
pub mod ops;
pub mod persistence;

#[cfg(test)]
mod tests;

pub use builder::ItineraryBuilder;

use crate::models::Destination;

/// File name used when no path is configured, relative to the working
/// directory.
pub const DEFAULT_FILE_NAME: &str = "itinerary.json";

/// Ordered collection of destinations bound to a file path.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub(crate) destinations: Vec<Destination>,
    pub(crate) file_path: PathBuf,
}

impl Itinerary {
    /// Creates an empty itinerary persisting to `file_path`.
    pub(crate) fn new(file_path: PathBuf) -> Self {
        Self {
            destinations: Vec::new(),
            file_path,
        }
    }

    /// Path used by [`Itinerary::save`] and [`Itinerary::load`].
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}
