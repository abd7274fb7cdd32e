//! Collection wrapper types for displaying groups of destinations.

use std::fmt;

use crate::models::Destination;

/// Newtype wrapper for displaying an ordered collection of destinations.
///
/// Each destination is rendered as a numbered line using its one-line
/// summary. Handles empty collections gracefully.
///
/// # Examples
///
/// ```rust
/// use voyage_core::{display::Destinations, models::Destination};
///
/// let destinations = Destinations(vec![Destination::new(
///     "Hanoi",
///     "Vietnam",
///     "2025-03-01",
///     "2025-03-05",
///     800.0,
///     vec!["Street food".to_string()],
/// )]);
///
/// let output = format!("{}", destinations);
/// assert!(output.starts_with("1. Hanoi, Vietnam"));
///
/// assert_eq!(Destinations(vec![]).to_string(), "No destinations found.\n");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Destinations(pub Vec<Destination>);

impl Destinations {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of destinations in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Destinations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No destinations found.")
        } else {
            for (position, destination) in self.0.iter().enumerate() {
                writeln!(f, "{}. {}", position + 1, destination)?;
            }
            Ok(())
        }
    }
}
