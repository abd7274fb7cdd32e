use std::path::PathBuf;

use tempfile::TempDir;
use voyage_core::{Destination, Itinerary, ItineraryBuilder};

/// Helper function to create an empty itinerary in a temporary directory
pub fn create_test_itinerary() -> (TempDir, PathBuf, Itinerary) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("itinerary.json");
    let itinerary = ItineraryBuilder::new()
        .with_file_path(Some(&path))
        .build()
        .expect("Failed to create itinerary");
    (temp_dir, path, itinerary)
}

/// Helper function to build a destination with fixed dates
pub fn destination(city: &str, country: &str, budget: f64, activities: &[&str]) -> Destination {
    Destination::new(
        city,
        country,
        "2025-09-01",
        "2025-09-04",
        budget,
        activities.iter().map(|a| a.to_string()).collect(),
    )
}
