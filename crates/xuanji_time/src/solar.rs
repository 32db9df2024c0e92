//! Longitude-based true-solar-time correction.
//!
//! A civil timezone keeps the clock of its nominal meridian
//! (offset in minutes / 4 degrees). Local solar noon moves 4 minutes for every
//! degree of longitude away from that meridian, east earlier and west later,
//! so the correction is `(longitude - meridian) * 4` minutes.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use xuanji_math::lenient;

use crate::civil::BirthFields;

/// Minutes of clock time per degree of longitude (1440 min / 360 deg).
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Input for [`compute_true_solar_time`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarTimeInput {
    #[serde(flatten)]
    pub birth: BirthFields,
    #[serde(default, deserialize_with = "lenient::number")]
    pub timezone_offset_minutes: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub longitude: Option<f64>,
}

/// Result of a successful correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarTimeCorrection {
    pub applied: bool,
    /// Corrected wall-clock time (true local solar time).
    pub corrected_date: NaiveDateTime,
    pub correction_minutes: i32,
}

/// Nominal central meridian, in degrees east, of a UTC offset.
pub fn timezone_meridian_deg(offset_minutes: f64) -> f64 {
    offset_minutes / MINUTES_PER_DEGREE
}

/// Apply the longitude correction to a civil birth time.
///
/// Returns `None` for a non-finite offset, a missing or out-of-range
/// longitude, an invalid birth date, or a corrected time outside chrono's
/// calendar range.
pub fn compute_true_solar_time(input: &SolarTimeInput) -> Option<SolarTimeCorrection> {
    let offset = input.timezone_offset_minutes.filter(|m| m.is_finite())?;
    let longitude = input
        .longitude
        .filter(|l| l.is_finite() && (-180.0..=180.0).contains(l))?;
    let civil = input.birth.civil()?;

    let delta_deg = longitude - timezone_meridian_deg(offset);
    #[allow(clippy::cast_possible_truncation)]
    let correction_minutes = (delta_deg * MINUTES_PER_DEGREE).round() as i32;
    let corrected_date = civil
        .to_naive()
        .checked_add_signed(Duration::minutes(i64::from(correction_minutes)))?;
    Some(SolarTimeCorrection {
        applied: true,
        corrected_date,
        correction_minutes,
    })
}
