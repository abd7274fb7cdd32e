//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of add, update,
//! and remove operations with consistent messaging and resource display.

use std::fmt;

use super::DestinationDetail;
use crate::models::Destination;

/// Wrapper type for displaying the result of add operations.
///
/// # Examples
///
/// ```rust
/// use voyage_core::{display::CreateResult, models::Destination};
///
/// let destination = Destination::new("Quito", "Ecuador", "2025-08-01", "2025-08-02", 300.0, vec![]);
/// let output = CreateResult::new(destination).to_string();
/// assert!(output.starts_with("Added destination: Quito"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Destination> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added destination: {}", self.resource.city)?;
        writeln!(f)?;
        write!(f, "{}", DestinationDetail(&self.resource))
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The wrapper can track and display specific changes made during the update,
/// providing users with clear feedback about what was modified.
#[derive(Debug)]
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Destination> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated destination: {}", self.resource.city)?;

        if self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "No changes made.")?;
        } else {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", DestinationDetail(&self.resource))
    }
}

/// Wrapper type for displaying the result of remove operations.
#[derive(Debug)]
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Destination> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed destination '{}, {}'",
            self.resource.city, self.resource.country
        )
    }
}
