mod common;

use std::fs;

use common::{create_test_itinerary, destination};
use voyage_core::{
    params::{parse_activities, AddDestination, CityRef, SearchDestinations, UpdateDestination},
    DestinationUpdate, ItineraryBuilder, ItineraryError,
};

#[test]
#[allow(clippy::too_many_lines)]
fn test_complete_itinerary_workflow() {
    let (_temp_dir, path, mut itinerary) = create_test_itinerary();
    assert!(itinerary.is_empty());

    // Add destinations through the handler layer
    itinerary
        .add_destination(&AddDestination {
            city: "Paris".to_string(),
            country: "France".to_string(),
            start_date: "2025-06-01".to_string(),
            end_date: "2025-06-05".to_string(),
            budget: 1500.0,
            activities: parse_activities("Louvre, Eiffel Tower , Seine cruise"),
        })
        .expect("Failed to add Paris");
    itinerary
        .add_destination(&AddDestination {
            city: "Rome".to_string(),
            country: "Italy".to_string(),
            start_date: "2025-06-06".to_string(),
            end_date: "2025-06-09".to_string(),
            budget: 1200.0,
            activities: parse_activities("Colosseum,Vatican"),
        })
        .expect("Failed to add Rome");
    itinerary.add(destination("Barcelona", "Spain", 900.0, &["Sagrada Familia"]));

    assert_eq!(itinerary.len(), 3);
    assert_eq!(
        itinerary.list_all()[0],
        "Paris, France | 2025-06-01 to 2025-06-05 | Budget: $1500.0 | Activities: Louvre, Eiffel Tower, Seine cruise"
    );

    // Update with blank fields meaning "keep current value"
    let result = itinerary
        .update_destination(&UpdateDestination {
            city: "rome".to_string(),
            new_city: Some(String::new()),
            country: Some(String::new()),
            start_date: None,
            end_date: Some("2025-06-10".to_string()),
            budget: None,
            activities: Some(parse_activities("")),
        })
        .expect("Failed to update Rome");
    assert_eq!(result.resource.end_date, "2025-06-10");
    assert_eq!(result.resource.city, "Rome");
    assert_eq!(result.resource.activities.len(), 2);

    // Search
    let spanish = itinerary.search_destinations(&SearchDestinations {
        keyword: "SPA".to_string(),
    });
    assert_eq!(spanish.len(), 1);
    assert_eq!(spanish.0[0].city, "Barcelona");

    // Persist and reload in a fresh store
    itinerary.save().expect("Failed to save");
    let reloaded = ItineraryBuilder::new()
        .with_file_path(Some(&path))
        .build()
        .expect("Failed to reload");
    assert_eq!(reloaded.destinations(), itinerary.destinations());

    // Remove and persist again
    itinerary
        .remove_destination(&CityRef {
            city: "PARIS".to_string(),
        })
        .expect("Failed to remove Paris");
    itinerary.save().expect("Failed to save after removal");

    let reloaded = ItineraryBuilder::new()
        .with_file_path(Some(&path))
        .build()
        .expect("Failed to reload after removal");
    let cities: Vec<&str> = reloaded
        .destinations()
        .iter()
        .map(|d| d.city.as_str())
        .collect();
    assert_eq!(cities, vec!["Rome", "Barcelona"]);
}

#[test]
fn test_first_match_semantics_survive_round_trip() {
    let (_temp_dir, path, mut itinerary) = create_test_itinerary();
    itinerary.add(destination("Rome", "Italy", 1000.0, &["Forum"]));
    itinerary.add(destination("Rome", "Italy", 2000.0, &["Pantheon"]));
    itinerary.save().expect("Failed to save");

    let mut reloaded = ItineraryBuilder::new()
        .with_file_path(Some(&path))
        .build()
        .expect("Failed to reload");
    assert!(reloaded.update(
        "ROME",
        DestinationUpdate {
            budget: Some(500.0),
            ..Default::default()
        }
    ));

    assert_eq!(reloaded.destinations()[0].budget, 500.0);
    assert_eq!(reloaded.destinations()[1].budget, 2000.0);
    assert_eq!(reloaded.destinations()[1].activities, vec!["Pantheon".to_string()]);
}

#[test]
fn test_build_reads_file_written_by_hand() {
    let (temp_dir, _path, _itinerary) = create_test_itinerary();
    let path = temp_dir.path().join("hand.json");
    fs::write(
        &path,
        r#"[
    {
        "city": "Cairo",
        "country": "Egypt",
        "start_date": "2025-12-01",
        "end_date": "2025-12-05",
        "budget": 750.5,
        "activities": ["Pyramids", "Nile cruise"]
    }
]"#,
    )
    .unwrap();

    let itinerary = ItineraryBuilder::new()
        .with_file_path(Some(&path))
        .build()
        .expect("Failed to build from file");

    assert_eq!(itinerary.len(), 1);
    assert_eq!(
        itinerary.list_all()[0],
        "Cairo, Egypt | 2025-12-01 to 2025-12-05 | Budget: $750.5 | Activities: Pyramids, Nile cruise"
    );
}

#[test]
fn test_build_fails_on_malformed_file() {
    let (temp_dir, _path, _itinerary) = create_test_itinerary();
    let path = temp_dir.path().join("bad.json");
    fs::write(&path, "not json at all").unwrap();

    let result = ItineraryBuilder::new().with_file_path(Some(&path)).build();

    assert!(matches!(result, Err(ItineraryError::MalformedRecord { .. })));
}

#[test]
fn test_reload_discards_unsaved_changes() {
    let (_temp_dir, _path, mut itinerary) = create_test_itinerary();
    itinerary.add(destination("Accra", "Ghana", 600.0, &[]));
    itinerary.save().expect("Failed to save");

    itinerary.add(destination("Lagos", "Nigeria", 500.0, &[]));
    assert_eq!(itinerary.len(), 2);

    let count = itinerary.load().expect("Failed to reload");
    assert_eq!(count, 1);
    assert_eq!(itinerary.destinations()[0].city, "Accra");
}
