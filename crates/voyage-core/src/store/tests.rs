//! Tests for the store module.

use std::fs;

use tempfile::TempDir;

use super::*;
use crate::{
    error::ItineraryError,
    models::DestinationUpdate,
    params::{AddDestination, CityRef, SearchDestinations, UpdateDestination},
};

fn destination(city: &str, country: &str, budget: f64, activities: &[&str]) -> Destination {
    Destination::new(
        city,
        country,
        "2025-05-01",
        "2025-05-07",
        budget,
        activities.iter().map(|a| a.to_string()).collect(),
    )
}

/// Helper function to create an itinerary backed by a temporary directory
fn create_test_itinerary() -> (TempDir, Itinerary) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("itinerary.json");
    let itinerary = ItineraryBuilder::new()
        .with_file_path(Some(&path))
        .build_empty();
    (temp_dir, itinerary)
}

fn populated() -> (TempDir, Itinerary) {
    let (temp_dir, mut itinerary) = create_test_itinerary();
    itinerary.add(destination("Paris", "France", 1500.0, &["Louvre", "Seine cruise"]));
    itinerary.add(destination("Rome", "Italy", 1200.0, &["Colosseum"]));
    itinerary.add(destination("Rome", "Italy", 800.0, &["Trastevere"]));
    itinerary.add(destination("Florence", "Italy", 900.0, &["Uffizi"]));
    (temp_dir, itinerary)
}

#[test]
fn test_default_file_path() {
    let itinerary = ItineraryBuilder::new().build_empty();
    assert_eq!(itinerary.file_path(), Path::new(DEFAULT_FILE_NAME));
    assert!(itinerary.is_empty());
}

#[test]
fn test_add_appends_without_duplicate_check() {
    let (_temp_dir, mut itinerary) = create_test_itinerary();
    itinerary.add(destination("Rome", "Italy", 1.0, &[]));
    itinerary.add(destination("Rome", "Italy", 1.0, &[]));

    assert_eq!(itinerary.len(), 2);
    assert_eq!(itinerary.destinations()[0], itinerary.destinations()[1]);
}

#[test]
fn test_remove_is_case_insensitive() {
    let (_temp_dir, mut itinerary) = populated();

    assert!(itinerary.remove("PARIS"));
    assert_eq!(itinerary.len(), 3);
    assert!(itinerary.find("paris").is_none());
}

#[test]
fn test_remove_missing_city_is_noop() {
    let (_temp_dir, mut itinerary) = populated();
    let before = itinerary.clone();

    assert!(!itinerary.remove("Berlin"));
    assert_eq!(itinerary, before);
}

#[test]
fn test_remove_only_first_duplicate() {
    let (_temp_dir, mut itinerary) = populated();

    assert!(itinerary.remove("rome"));
    let romes: Vec<_> = itinerary
        .destinations()
        .iter()
        .filter(|d| d.city == "Rome")
        .collect();
    assert_eq!(romes.len(), 1);
    assert_eq!(romes[0].budget, 800.0);
    assert_eq!(
        itinerary.list_all()[1],
        "Rome, Italy | 2025-05-01 to 2025-05-07 | Budget: $800.0 | Activities: Trastevere"
    );
}

#[test]
fn test_update_first_match_only() {
    let (_temp_dir, mut itinerary) = populated();

    let updated = itinerary.update(
        "Rome",
        DestinationUpdate {
            budget: Some(500.0),
            ..Default::default()
        },
    );

    assert!(updated);
    assert_eq!(itinerary.destinations()[1].budget, 500.0);
    assert_eq!(itinerary.destinations()[2].budget, 800.0);
    assert_eq!(itinerary.destinations()[1].activities, vec!["Colosseum".to_string()]);
}

#[test]
fn test_update_missing_city() {
    let (_temp_dir, mut itinerary) = populated();
    let before = itinerary.clone();

    assert!(!itinerary.update(
        "Madrid",
        DestinationUpdate {
            budget: Some(1.0),
            ..Default::default()
        }
    ));
    assert_eq!(itinerary, before);
}

#[test]
fn test_update_city_changes_identity_not_order() {
    let (_temp_dir, mut itinerary) = populated();

    assert!(itinerary.update(
        "paris",
        DestinationUpdate {
            city: Some("Lyon".to_string()),
            ..Default::default()
        }
    ));

    assert_eq!(itinerary.destinations()[0].city, "Lyon");
    assert!(itinerary.find("Paris").is_none());
    assert_eq!(itinerary.find("LYON").map(|d| d.budget), Some(1500.0));
}

#[test]
fn test_search_or_over_fields_preserves_order() {
    let (_temp_dir, itinerary) = populated();

    let italian = itinerary.search("ital");
    let cities: Vec<&str> = italian.iter().map(|d| d.city.as_str()).collect();
    assert_eq!(cities, vec!["Rome", "Rome", "Florence"]);

    let by_activity = itinerary.search("SEINE");
    assert_eq!(by_activity.len(), 1);
    assert_eq!(by_activity[0].city, "Paris");

    let by_city = itinerary.search("flor");
    assert_eq!(by_city.len(), 1);

    assert!(itinerary.search("tokyo").is_empty());
}

#[test]
fn test_search_empty_keyword_matches_all() {
    let (_temp_dir, itinerary) = populated();
    assert_eq!(itinerary.search(""), itinerary.destinations().to_vec());
}

#[test]
fn test_search_returns_copies() {
    let (_temp_dir, mut itinerary) = populated();
    let mut results = itinerary.search("paris");
    results[0].budget = 1.0;

    assert_eq!(itinerary.find("Paris").map(|d| d.budget), Some(1500.0));
    itinerary.add(destination("Paris", "France", 2.0, &[]));
    assert_eq!(results.len(), 1);
}

#[test]
fn test_list_all_in_order() {
    let (_temp_dir, itinerary) = populated();
    let lines = itinerary.list_all();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Paris, France |"));
    assert!(lines[3].starts_with("Florence, Italy |"));
}

#[test]
fn test_save_then_load_round_trip() {
    let (_temp_dir, itinerary) = populated();
    itinerary.save().expect("Failed to save");

    let mut reloaded = ItineraryBuilder::new()
        .with_file_path(Some(itinerary.file_path()))
        .build_empty();
    let count = reloaded.load().expect("Failed to load");

    assert_eq!(count, 4);
    assert_eq!(reloaded, itinerary);
}

#[test]
fn test_round_trip_preserves_awkward_values() {
    let (_temp_dir, mut itinerary) = create_test_itinerary();
    itinerary.add(Destination::new(
        "São Paulo",
        "Brasil \"BR\"",
        "",
        "2025-01-01",
        0.1 + 0.2,
        vec![String::new(), "dup".to_string(), "dup".to_string(), "line\nbreak".to_string()],
    ));
    itinerary.add(destination("Zürich", "Switzerland", 1e12, &[]));
    itinerary.save().expect("Failed to save");

    let reloaded = ItineraryBuilder::new()
        .with_file_path(Some(itinerary.file_path()))
        .build()
        .expect("Failed to build");

    assert_eq!(reloaded.destinations(), itinerary.destinations());
}

#[test]
fn test_round_trip_preserves_budget_bits() {
    let (_temp_dir, mut itinerary) = create_test_itinerary();
    let mut budgets = vec![1008636.7142857143, 0.1 + 0.2, f64::MAX, f64::MIN_POSITIVE, 5e-324];
    budgets.extend((1_000_000_i32..1_002_000).map(|n| f64::from(n) / 7.0));
    for budget in &budgets {
        itinerary.add(destination("Split", "Croatia", *budget, &[]));
    }
    itinerary.save().expect("Failed to save");

    let reloaded = ItineraryBuilder::new()
        .with_file_path(Some(itinerary.file_path()))
        .build()
        .expect("Failed to build");

    let reloaded_bits: Vec<u64> = reloaded
        .destinations()
        .iter()
        .map(|d| d.budget.to_bits())
        .collect();
    let expected_bits: Vec<u64> = budgets.iter().map(|b| b.to_bits()).collect();
    assert_eq!(reloaded_bits, expected_bits);
}

#[test]
fn test_save_rejects_non_finite_budget() {
    for budget in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let (_temp_dir, mut itinerary) = populated();
        itinerary.save().expect("Failed to save");
        let saved = fs::read_to_string(itinerary.file_path()).unwrap();

        itinerary.add(destination("Nowhere", "Atlantis", budget, &[]));
        let err = itinerary.save().unwrap_err();

        match err {
            ItineraryError::InvalidInput { field, reason } => {
                assert_eq!(field, "budget");
                assert!(reason.contains("record 5 (Nowhere)"), "unexpected reason: {reason}");
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(itinerary.file_path()).unwrap(), saved);
    }
}

#[test]
fn test_save_uses_pretty_json_array() {
    let (_temp_dir, itinerary) = populated();
    itinerary.save().expect("Failed to save");

    let contents = fs::read_to_string(itinerary.file_path()).unwrap();
    assert!(contents.starts_with("[\n    {\n        \"city\": \"Paris\""));
    assert!(contents.ends_with("]\n"));

    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let first = value[0].as_object().unwrap();
    assert_eq!(first.len(), 6);
    assert!(first["budget"].is_number());
    assert!(first["activities"].is_array());
}

#[test]
fn test_save_empty_itinerary() {
    let (_temp_dir, itinerary) = create_test_itinerary();
    itinerary.save().expect("Failed to save");

    assert_eq!(fs::read_to_string(itinerary.file_path()).unwrap(), "[]\n");
}

#[test]
fn test_save_overwrites_and_creates_parent_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested/trips/plan.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "old content that is much longer than an empty list").unwrap();

    let itinerary = ItineraryBuilder::new()
        .with_file_path(Some(&path))
        .build_empty();
    itinerary.save().expect("Failed to save");
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");

    let fresh = temp_dir.path().join("another/dir/plan.json");
    itinerary.save_to(&fresh).expect("Failed to save to new dir");
    assert!(fresh.exists());
}

#[test]
fn test_save_to_unwritable_path() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("not-a-dir");
    fs::write(&blocker, "file").unwrap();

    let (_other, itinerary) = populated();
    let result = itinerary.save_to(&blocker.join("itinerary.json"));

    assert!(matches!(result, Err(ItineraryError::FileSystem { .. })));
}

#[test]
fn test_load_missing_file_resets_to_empty() {
    let (temp_dir, mut itinerary) = populated();

    let count = itinerary
        .load_from(&temp_dir.path().join("does/not/exist.json"))
        .expect("Missing file should not be an error");

    assert_eq!(count, 0);
    assert!(itinerary.is_empty());
}

#[test]
fn test_load_malformed_json_keeps_state() {
    let (temp_dir, mut itinerary) = populated();
    let before = itinerary.clone();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "[{\"city\": \"Paris\",").unwrap();

    let result = itinerary.load_from(&path);

    assert!(matches!(result, Err(ItineraryError::MalformedRecord { .. })));
    assert_eq!(itinerary, before);
}

#[test]
fn test_load_wrong_record_shape_keeps_state() {
    let (temp_dir, mut itinerary) = populated();
    let before = itinerary.clone();
    let path = temp_dir.path().join("shape.json");
    fs::write(
        &path,
        r#"[
            {"city": "Oslo", "country": "Norway", "start_date": "2025-01-01",
             "end_date": "2025-01-02", "budget": 10, "activities": []},
            {"city": "Bergen", "country": "Norway", "start_date": "2025-01-03",
             "budget": 10, "activities": []}
        ]"#,
    )
    .unwrap();

    let err = itinerary.load_from(&path).unwrap_err();

    match err {
        ItineraryError::MalformedRecord { message } => {
            assert!(message.contains("record 2:"), "unexpected message: {message}");
            assert!(message.contains("shape.json"));
            assert!(message.contains("end_date"));
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
    assert_eq!(itinerary, before);
}

#[test]
fn test_load_non_array_document() {
    let (temp_dir, mut itinerary) = create_test_itinerary();
    let path = temp_dir.path().join("object.json");
    fs::write(&path, r#"{"city": "Oslo"}"#).unwrap();

    assert!(matches!(
        itinerary.load_from(&path),
        Err(ItineraryError::MalformedRecord { .. })
    ));
}

#[test]
fn test_load_directory_is_filesystem_error() {
    let (temp_dir, mut itinerary) = populated();

    let result = itinerary.load_from(temp_dir.path());

    assert!(matches!(result, Err(ItineraryError::FileSystem { .. })));
    assert_eq!(itinerary.len(), 4);
}

#[test]
fn test_add_destination_handler_validates() {
    let (_temp_dir, mut itinerary) = create_test_itinerary();

    let result = itinerary.add_destination(&AddDestination {
        city: String::new(),
        country: "Nowhere".to_string(),
        start_date: "2025-01-01".to_string(),
        end_date: "2025-01-01".to_string(),
        budget: 1.0,
        activities: vec![],
    });

    assert!(matches!(result, Err(ItineraryError::InvalidInput { .. })));
    assert!(itinerary.is_empty());
}

#[test]
fn test_update_destination_handler_reports_changes() {
    let (_temp_dir, mut itinerary) = populated();

    let result = itinerary
        .update_destination(&UpdateDestination {
            city: "ROME".to_string(),
            budget: Some(650.0),
            country: Some(String::new()),
            ..Default::default()
        })
        .expect("Failed to update");

    assert_eq!(result.resource.budget, 650.0);
    assert_eq!(result.resource.country, "Italy");
    assert_eq!(result.changes, vec!["Set budget to $650.0".to_string()]);
    assert_eq!(itinerary.destinations()[2].budget, 800.0);
}

#[test]
fn test_handlers_report_not_found() {
    let (_temp_dir, mut itinerary) = populated();
    let berlin = CityRef {
        city: "Berlin".to_string(),
    };

    assert!(itinerary.remove_destination(&berlin).unwrap_err().is_not_found());
    assert!(itinerary.show_destination(&berlin).unwrap_err().is_not_found());
    assert!(itinerary
        .update_destination(&UpdateDestination {
            city: "Berlin".to_string(),
            ..Default::default()
        })
        .unwrap_err()
        .is_not_found());
}

#[test]
fn test_remove_destination_handler_returns_removed() {
    let (_temp_dir, mut itinerary) = populated();

    let removed = itinerary
        .remove_destination(&CityRef {
            city: "florence".to_string(),
        })
        .expect("Failed to remove");

    assert_eq!(removed.resource.city, "Florence");
    assert_eq!(itinerary.len(), 3);
}

#[test]
fn test_search_and_list_handlers() {
    let (_temp_dir, itinerary) = populated();

    let results = itinerary.search_destinations(&SearchDestinations {
        keyword: "colosseum".to_string(),
    });
    assert_eq!(results.len(), 1);
    assert_eq!(results.0[0].budget, 1200.0);

    let all = itinerary.list_destinations();
    assert_eq!(all.len(), 4);
    assert!(all.to_string().starts_with("1. Paris, France"));
}
