//! Whole-file persistence for the Itinerary.
//!
//! The file holds a single pretty-printed JSON array of six-field destination
//! objects. Saves go through a temporary file in the target directory that is
//! renamed over the destination, so an interrupted save never truncates the
//! previous file. Loads parse the entire file before replacing anything in
//! memory.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use log::{debug, info};
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};
use tempfile::NamedTempFile;

use super::Itinerary;
use crate::{
    error::{FsResultExt, ItineraryError, Result},
    models::Destination,
};

const INDENT: &[u8] = b"    ";

impl Itinerary {
    /// Saves every destination to the itinerary's file path.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::FileSystem` if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.file_path)
    }

    /// Saves every destination to `path`, replacing any existing content.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::InvalidInput` if a budget is NaN or infinite,
    /// leaving any existing file untouched, and `ItineraryError::FileSystem`
    /// if the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = encode(&self.destinations)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).fs_context(dir)?;

        let mut file = NamedTempFile::new_in(dir).fs_context(dir)?;
        debug!("Writing itinerary to temporary file {}", file.path().display());
        file.write_all(&contents).fs_context(path)?;
        file.as_file().sync_all().fs_context(path)?;
        file.persist(path)
            .map_err(|e| ItineraryError::FileSystem {
                path: path.to_path_buf(),
                source: e.error,
            })?;

        info!(
            "Saved {} destinations to {}",
            self.destinations.len(),
            path.display()
        );
        Ok(())
    }

    /// Replaces the in-memory destinations with the content of the
    /// itinerary's file path.
    ///
    /// See [`Itinerary::load_from`].
    pub fn load(&mut self) -> Result<usize> {
        let path = self.file_path.clone();
        self.load_from(&path)
    }

    /// Replaces the in-memory destinations with the content of `path` and
    /// returns how many were loaded.
    ///
    /// A missing file is not an error: the itinerary becomes empty.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::MalformedRecord` if the file is not a JSON
    /// array of destination records, and `ItineraryError::FileSystem` if it
    /// exists but cannot be read. In both cases the in-memory destinations
    /// are left unchanged.
    pub fn load_from(&mut self, path: &Path) -> Result<usize> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "No itinerary file at {}, starting empty",
                    path.display()
                );
                self.destinations.clear();
                return Ok(0);
            }
            Err(e) => return Err(e).fs_context(path),
        };

        let destinations = decode(path, &contents)?;
        let count = destinations.len();
        self.destinations = destinations;

        info!("Loaded {count} destinations from {}", path.display());
        Ok(count)
    }
}

fn encode(destinations: &[Destination]) -> Result<Vec<u8>> {
    // JSON has no NaN or infinity; serde_json would write them as null.
    if let Some((index, destination)) = destinations
        .iter()
        .enumerate()
        .find(|(_, destination)| !destination.budget.is_finite())
    {
        return Err(ItineraryError::invalid_input("budget").with_reason(format!(
            "record {} ({}) has a non-finite budget {}",
            index + 1,
            destination.city,
            destination.budget
        )));
    }

    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    destinations.serialize(&mut serializer)?;
    buffer.push(b'\n');
    Ok(buffer)
}

fn decode(path: &Path, contents: &str) -> Result<Vec<Destination>> {
    let malformed = |message: String| ItineraryError::MalformedRecord {
        message: format!("'{}': {message}", path.display()),
    };

    let records: Vec<Value> =
        serde_json::from_str(contents).map_err(|e| malformed(e.to_string()))?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Destination::from_value(record).map_err(|e| match e {
                ItineraryError::MalformedRecord { message } => {
                    malformed(format!("record {}: {message}", index + 1))
                }
                other => other,
            })
        })
        .collect()
}
