//! Builder for creating and configuring Itinerary instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::{Itinerary, DEFAULT_FILE_NAME};
use crate::error::Result;

/// Builder for creating and configuring Itinerary instances.
#[derive(Debug, Clone, Default)]
pub struct ItineraryBuilder {
    file_path: Option<PathBuf>,
}

impl ItineraryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom itinerary file path.
    ///
    /// If not specified, uses `itinerary.json` in the current working
    /// directory.
    pub fn with_file_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.file_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the itinerary and loads any existing data from its file.
    ///
    /// A missing file yields an empty itinerary.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::MalformedRecord` if the file exists but does
    /// not hold a valid destination list.
    /// Returns `ItineraryError::FileSystem` if the file cannot be read.
    pub fn build(self) -> Result<Itinerary> {
        let mut itinerary = self.build_empty();
        itinerary.load()?;
        Ok(itinerary)
    }

    /// Builds an empty itinerary without touching the file system.
    pub fn build_empty(self) -> Itinerary {
        let file_path = self
            .file_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME));
        debug!("Itinerary bound to {}", file_path.display());
        Itinerary::new(file_path)
    }
}
