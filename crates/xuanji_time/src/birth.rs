//! Birth-time metadata: one canonical offset and the UTC birth instant.
//!
//! Offset precedence:
//! 1. an explicit, finite `timezoneOffsetMinutes` within ±14 hours
//! 2. a UTC-label `timezone` such as `"UTC+08:00"`
//! 3. an IANA `timezone` evaluated at the civil birth time

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use xuanji_math::lenient;

use crate::civil::{BirthFields, CivilTime};
use crate::offset::{MAX_OFFSET_MINUTES, format_timezone_offset, parse_timezone_offset_minutes};

/// Request payload for birth-time resolution.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthTimePayload {
    #[serde(flatten)]
    pub birth: BirthFields,
    #[serde(default, deserialize_with = "lenient::number")]
    pub timezone_offset_minutes: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Where a resolved offset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetSource {
    Explicit,
    Label,
    Iana,
}

/// A resolved offset with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimezoneResolution {
    pub offset_minutes: i32,
    pub offset_label: String,
    pub source: OffsetSource,
}

/// Resolved birth instant. All three fields are `None` for an invalid date
/// or one whose UTC instant is out of range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthTimeMeta {
    pub timezone_offset_minutes: Option<i32>,
    pub birth_timestamp: Option<i64>,
    pub birth_iso: Option<String>,
}

/// Offset of an IANA zone at a wall-clock time in that zone.
///
/// Ambiguous times (DST fall-back) take the earlier reading; skipped times
/// (spring-forward gap) use the offset in force at the same UTC reading.
fn iana_offset_at_local(tz: Tz, local: NaiveDateTime) -> i32 {
    let offset = match tz.offset_from_local_datetime(&local) {
        LocalResult::Single(o) | LocalResult::Ambiguous(o, _) => o.fix(),
        LocalResult::None => tz.offset_from_utc_datetime(&local).fix(),
    };
    offset.local_minus_utc() / 60
}

/// Resolve one offset for `civil` from the available timezone hints.
pub fn resolve_timezone_offset(
    explicit_minutes: Option<f64>,
    timezone: Option<&str>,
    civil: &CivilTime,
) -> Option<TimezoneResolution> {
    let resolved = if let Some(m) = explicit_minutes
        .filter(|m| m.is_finite() && m.abs() <= f64::from(MAX_OFFSET_MINUTES))
    {
        #[allow(clippy::cast_possible_truncation)]
        Some((m.round() as i32, OffsetSource::Explicit))
    } else {
        timezone.map(str::trim).filter(|t| !t.is_empty()).and_then(|tz| {
            parse_timezone_offset_minutes(tz)
                .map(|m| (m, OffsetSource::Label))
                .or_else(|| {
                    let zone: Tz = tz.parse().ok()?;
                    Some((iana_offset_at_local(zone, civil.to_naive()), OffsetSource::Iana))
                })
        })
    };
    resolved.map(|(offset_minutes, source)| TimezoneResolution {
        offset_minutes,
        offset_label: format_timezone_offset(f64::from(offset_minutes)),
        source,
    })
}

/// The UTC instant for a civil time at a fixed offset.
///
/// `None` when the instant falls outside chrono's representable range.
pub fn civil_to_utc(civil: &CivilTime, offset_minutes: i32) -> Option<DateTime<Utc>> {
    civil
        .to_naive()
        .checked_sub_signed(Duration::minutes(i64::from(offset_minutes)))
        .map(|utc| utc.and_utc())
}

/// Resolve the birth offset and UTC instant.
///
/// When no offset can be resolved the civil time is read as UTC and the
/// offset is reported as `None`.
pub fn build_birth_time_meta(payload: &BirthTimePayload) -> BirthTimeMeta {
    let Some(civil) = payload.birth.civil() else {
        return BirthTimeMeta::default();
    };
    let offset = resolve_timezone_offset(
        payload.timezone_offset_minutes,
        payload.timezone.as_deref(),
        &civil,
    )
    .map(|r| r.offset_minutes);
    let Some(instant) = civil_to_utc(&civil, offset.unwrap_or(0)) else {
        return BirthTimeMeta::default();
    };
    BirthTimeMeta {
        timezone_offset_minutes: offset,
        birth_timestamp: Some(instant.timestamp_millis()),
        birth_iso: Some(instant.to_rfc3339_opts(SecondsFormat::Millis, true)),
    }
}
