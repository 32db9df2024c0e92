//! Golden values for location resolution and true-solar-time correction.

use serde_json::json;
use xuanji_time::{
    LocationSource, SolarTimeInput, compute_true_solar_time, list_known_locations,
    resolve_location_coordinates,
};

#[test]
fn swapped_pair_is_rescued() {
    let loc = resolve_location_coordinates("120, 30").unwrap();
    assert_eq!(loc.latitude, 30.0);
    assert_eq!(loc.longitude, 120.0);
    assert_eq!(loc.source, LocationSource::Coordinates);
}

#[test]
fn impossible_pair_is_rejected() {
    assert!(resolve_location_coordinates("200, 200").is_none());
}

#[test]
fn known_location_json() {
    let loc = resolve_location_coordinates("  shanghai ").unwrap();
    let v = serde_json::to_value(loc).unwrap();
    assert_eq!(v["source"], json!("known"));
    assert_eq!(v["name"], json!("Shanghai"));
}

#[test]
fn listing_has_no_duplicate_names_and_is_sorted() {
    let list = list_known_locations();
    let names: Vec<&str> = list.iter().map(|l| l.name).collect();
    let mut sorted = names.clone();
    sorted.sort_by_key(|n| n.to_lowercase());
    assert_eq!(names, sorted);
    let mut deduped = names.clone();
    deduped.dedup();
    assert_eq!(names.len(), deduped.len());
    assert!(names.contains(&"Beijing"));
}

#[test]
fn solar_time_from_json_input() {
    let input: SolarTimeInput = serde_json::from_value(json!({
        "birthYear": 1990, "birthMonth": 5, "birthDay": 15,
        "birthHour": 8, "birthMinute": 0,
        "timezoneOffsetMinutes": 480,
        "longitude": "104.0668"
    }))
    .unwrap();
    let r = compute_true_solar_time(&input).unwrap();
    assert_eq!(r.correction_minutes, -64);
    let v = serde_json::to_value(r).unwrap();
    assert_eq!(v["applied"], json!(true));
    assert_eq!(v["correctedDate"], json!("1990-05-15T06:56:00"));
}

#[test]
fn solar_time_without_longitude() {
    let input: SolarTimeInput = serde_json::from_value(json!({
        "birthYear": 1990, "birthMonth": 5, "birthDay": 15,
        "timezoneOffsetMinutes": 480
    }))
    .unwrap();
    assert!(compute_true_solar_time(&input).is_none());
}
