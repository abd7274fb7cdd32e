//! Error types for the itinerary library.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all itinerary operations.
#[derive(Error, Debug)]
pub enum ItineraryError {
    /// No destination matched the given city
    #[error("Destination '{city}' not found")]
    NotFound { city: String },
    /// Stored data does not have the expected destination record shape
    #[error("Malformed itinerary data: {message}")]
    MalformedRecord { message: String },
    /// Destinations could not be encoded as JSON
    #[error("Failed to encode itinerary: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ItineraryError {
        ItineraryError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ItineraryError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a not-found error for a city lookup.
    pub fn not_found(city: impl Into<String>) -> Self {
        Self::NotFound { city: city.into() }
    }

    /// Returns true when the error is a failed city lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Extension trait attaching a path to `std::io::Error` results.
pub trait FsResultExt<T> {
    /// Map an I/O error into [`ItineraryError::FileSystem`] for `path`.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> FsResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| ItineraryError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for itinerary operations
pub type Result<T> = std::result::Result<T, ItineraryError>;
