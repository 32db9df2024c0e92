//! Timezone resolution, birth metadata and true solar time.
//!
//! Zone hints are tried in order: the payload's own `timezone`, the
//! gazetteer zone of a named location, then the caller's default. An
//! explicit `timezoneOffsetMinutes` beats all of them.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use xuanji_math::lenient;
use xuanji_time::{
    BirthFields, BirthTimeMeta, BirthTimePayload, CivilTime, ResolvedLocation, SolarTimeInput,
    TimezoneResolution, build_birth_time_meta, compute_true_solar_time,
    resolve_location_coordinates, resolve_timezone_offset,
};

use crate::error::FacadeError;

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Wall-clock rendering of a corrected solar time.
const SOLAR_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Decode a JSON request payload.
pub fn from_json<T: DeserializeOwned>(payload: &str) -> Result<T, FacadeError> {
    Ok(serde_json::from_str(payload)?)
}

/// Parse `YYYY-MM-DDThh:mm` (also a space separator, seconds, or a bare
/// date meaning midnight).
pub fn parse_civil(value: &str) -> Result<CivilTime, FacadeError> {
    let s = value.trim();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .and_then(|dt| CivilTime::new(dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute()))
        .ok_or_else(|| FacadeError::DateTime(value.to_string()))
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Resolve the birth offset, falling back to `default_timezone`.
pub fn resolve_timezone(
    payload: &BirthTimePayload,
    default_timezone: Option<&str>,
) -> Option<TimezoneResolution> {
    let civil = payload.birth.civil()?;
    let zone = non_empty(payload.timezone.as_deref()).or(non_empty(default_timezone));
    let resolved = resolve_timezone_offset(payload.timezone_offset_minutes, zone, &civil);
    if resolved.is_none() {
        debug!(?zone, "timezone unresolved");
    }
    resolved
}

/// Birth metadata, applying `default_timezone` when the payload names
/// neither an offset nor a zone.
#[instrument(level = "debug", skip(payload))]
pub fn birth_meta(payload: &BirthTimePayload, default_timezone: Option<&str>) -> BirthTimeMeta {
    let has_hint = payload.timezone_offset_minutes.is_some_and(f64::is_finite)
        || non_empty(payload.timezone.as_deref()).is_some();
    let meta = match non_empty(default_timezone) {
        Some(zone) if !has_hint => {
            debug!(zone, "using default timezone");
            build_birth_time_meta(&BirthTimePayload {
                timezone: Some(zone.to_string()),
                ..payload.clone()
            })
        }
        _ => build_birth_time_meta(payload),
    };
    if meta.birth_timestamp.is_some() && meta.timezone_offset_minutes.is_none() {
        debug!("offset unresolved, civil time read as UTC");
    }
    meta
}

/// Request for [`solar_time`]. `location` may be a place name or a
/// `"lat, lng"` pair; an explicit `longitude` wins over it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarTimeRequest {
    #[serde(flatten)]
    pub birth: BirthFields,
    #[serde(default, deserialize_with = "lenient::number")]
    pub timezone_offset_minutes: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub longitude: Option<f64>,
}

/// Solar-time result. Unapplied corrections carry `null` time fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarTimeReport {
    pub applied: bool,
    pub corrected_iso: Option<String>,
    pub correction_minutes: Option<i32>,
    pub location: Option<ResolvedLocation>,
}

/// Correct a birth time to true local solar time.
#[instrument(level = "debug", skip(request))]
pub fn solar_time(request: &SolarTimeRequest, default_timezone: Option<&str>) -> SolarTimeReport {
    let location = non_empty(request.location.as_deref()).and_then(|raw| {
        let resolved = resolve_location_coordinates(raw);
        if resolved.is_none() {
            debug!(location = raw, "location did not resolve");
        }
        resolved
    });
    let longitude = request
        .longitude
        .filter(|l| l.is_finite())
        .or(location.map(|l| l.longitude));
    let zone = non_empty(request.timezone.as_deref())
        .or(location.and_then(|l| l.timezone))
        .or(non_empty(default_timezone));
    let offset = request
        .birth
        .civil()
        .and_then(|civil| resolve_timezone_offset(request.timezone_offset_minutes, zone, &civil));

    let input = SolarTimeInput {
        birth: request.birth.clone(),
        timezone_offset_minutes: offset.as_ref().map(|r| f64::from(r.offset_minutes)),
        longitude,
    };
    match compute_true_solar_time(&input) {
        Some(c) => SolarTimeReport {
            applied: c.applied,
            corrected_iso: Some(c.corrected_date.format(SOLAR_ISO_FORMAT).to_string()),
            correction_minutes: Some(c.correction_minutes),
            location,
        },
        None => {
            debug!(?zone, ?longitude, "true solar time not applied");
            SolarTimeReport {
                applied: false,
                corrected_iso: None,
                correction_minutes: None,
                location,
            }
        }
    }
}
