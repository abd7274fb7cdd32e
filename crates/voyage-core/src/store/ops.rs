//! Collection operations for the Itinerary.

use log::debug;

use super::Itinerary;
use crate::models::{Destination, DestinationUpdate};

impl Itinerary {
    /// Appends a destination to the end of the itinerary.
    ///
    /// No duplicate check is performed.
    pub fn add(&mut self, destination: Destination) {
        debug!("Adding destination {}", destination.city);
        self.destinations.push(destination);
    }

    /// Removes the first destination whose city matches, ignoring case.
    ///
    /// Returns `false` and leaves the itinerary untouched when nothing
    /// matches.
    pub fn remove(&mut self, city: &str) -> bool {
        self.take(city).is_some()
    }

    /// Removes and returns the first destination whose city matches.
    pub fn take(&mut self, city: &str) -> Option<Destination> {
        let index = self.position(city)?;
        debug!("Removing destination {city} at position {index}");
        Some(self.destinations.remove(index))
    }

    /// Applies a partial update to the first destination whose city matches.
    ///
    /// Changing the city changes the key used by later lookups; the order of
    /// the itinerary is not affected.
    pub fn update(&mut self, city: &str, update: DestinationUpdate) -> bool {
        self.update_first(city, update).is_some()
    }

    /// Like [`Itinerary::update`], returning the updated destination.
    pub fn update_first(&mut self, city: &str, update: DestinationUpdate) -> Option<&Destination> {
        let index = self.position(city)?;
        debug!("Updating destination {city} at position {index}");
        let destination = &mut self.destinations[index];
        destination.apply_update(update);
        Some(&*destination)
    }

    /// First destination whose city matches, ignoring case.
    pub fn find(&self, city: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.matches_city(city))
    }

    /// Destinations whose city, country or any activity contains `keyword`,
    /// ignoring case, in itinerary order.
    pub fn search(&self, keyword: &str) -> Vec<Destination> {
        let matches: Vec<Destination> = self
            .destinations
            .iter()
            .filter(|d| d.matches_keyword(keyword))
            .cloned()
            .collect();
        debug!("Search for '{keyword}' matched {} destinations", matches.len());
        matches
    }

    /// One-line summary of every destination, in order.
    pub fn list_all(&self) -> Vec<String> {
        self.destinations.iter().map(ToString::to_string).collect()
    }

    /// All destinations in order.
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Number of destinations.
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Returns true when the itinerary holds no destinations.
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    fn position(&self, city: &str) -> Option<usize> {
        self.destinations.iter().position(|d| d.matches_city(city))
    }
}
