//! JSON shapes produced by the facade.

use serde_json::{Value, json};
use xuanji_rs::*;

fn to_value<T: serde::Serialize>(v: &T) -> Value {
    serde_json::to_value(v).unwrap()
}

#[test]
fn solar_time_from_payload() {
    let request: SolarTimeRequest = from_json(
        r#"{"birthYear":"2024","birthMonth":3,"birthDay":1,"birthHour":12,"birthMinute":0,
            "location":"Chengdu"}"#,
    )
    .unwrap();
    let v = to_value(&solar_time(&request, None));
    assert_eq!(
        v,
        json!({
            "applied": true,
            "correctedIso": "2024-03-01T10:56:00",
            "correctionMinutes": -64,
            "location": {
                "latitude": 30.5728,
                "longitude": 104.0668,
                "source": "known",
                "name": "Chengdu",
                "timezone": "Asia/Shanghai"
            }
        })
    );
}

#[test]
fn explicit_offset_beats_gazetteer_zone() {
    let request = SolarTimeRequest {
        birth: BirthFields::new(2024, 3, 1, 12, 0),
        timezone_offset_minutes: Some(540.0),
        location: Some("Chengdu".into()),
        ..Default::default()
    };
    // (104.0668 - 135) * 4 = -123.7
    assert_eq!(solar_time(&request, None).correction_minutes, Some(-124));
}

#[test]
fn coordinates_need_a_zone() {
    let request = SolarTimeRequest {
        birth: BirthFields::new(2024, 3, 1, 12, 0),
        location: Some("30.5728, 104.0668".into()),
        ..Default::default()
    };
    let v = to_value(&solar_time(&request, None));
    assert_eq!(v["applied"], false);
    assert_eq!(v["correctedIso"], Value::Null);
    assert_eq!(v["correctionMinutes"], Value::Null);
    assert_eq!(v["location"]["source"], "coordinates");

    let applied = solar_time(&request, Some("UTC+08:00"));
    assert_eq!(applied.correction_minutes, Some(-64));
}

#[test]
fn unknown_place_not_applied() {
    let request = SolarTimeRequest {
        birth: BirthFields::new(2024, 3, 1, 12, 0),
        timezone: Some("Asia/Shanghai".into()),
        location: Some("Atlantis".into()),
        ..Default::default()
    };
    let report = solar_time(&request, None);
    assert!(!report.applied);
    assert!(report.location.is_none());
}

#[test]
fn timezone_resolution_shape() {
    let payload: BirthTimePayload =
        from_json(r#"{"birthYear":1990,"birthMonth":5,"birthDay":15,"timezone":"UTC+05:30"}"#)
            .unwrap();
    let v = to_value(&resolve_timezone(&payload, None));
    assert_eq!(
        v,
        json!({ "offsetMinutes": 330, "offsetLabel": "UTC+05:30", "source": "label" })
    );
}

#[test]
fn birth_meta_invalid_date_is_all_null() {
    let payload: BirthTimePayload =
        from_json(r#"{"birthYear":"abc","birthMonth":5,"birthDay":15,"timezone":"Asia/Tokyo"}"#)
            .unwrap();
    assert_eq!(
        to_value(&birth_meta(&payload, Some("UTC"))),
        json!({ "timezoneOffsetMinutes": null, "birthTimestamp": null, "birthIso": null })
    );
}

#[test]
fn malformed_json_is_an_error() {
    let err = from_json::<BirthTimePayload>("{not json").unwrap_err();
    assert!(matches!(err, FacadeError::Payload(_)));
}

#[test]
fn hexagram_shape() {
    let cast = hexagram("1", "8", &[6]).unwrap();
    let v = to_value(&cast);
    assert_eq!(v["hexagram"]["lines"], json!([0, 0, 0, 1, 1, 1]));
    assert_eq!(v["hexagram"]["upperTrigram"]["name"], "Qian");
    assert_eq!(v["changingLines"], json!([6]));
    assert_eq!(v["lines"][5]["isChanging"], true);
    assert_eq!(v["lines"][0]["status"], "solid");
}

#[test]
fn tarot_shape() {
    let v = to_value(&draw(Some("ThreeCard"), Some(1)));
    assert_eq!(v["spreadType"], "ThreeCard");
    assert_eq!(v["cards"].as_array().map(Vec::len), Some(3));
    assert_eq!(v["spreadMeta"]["positions"][0]["label"], "Past");
}
