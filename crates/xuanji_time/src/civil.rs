//! Civil (wall-clock) birth date and time.
//!
//! `CivilTime` carries no offset; pairing it with a resolved UTC offset
//! yields a UTC instant.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use xuanji_math::lenient;

/// Validated wall-clock date and time to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CivilTime {
    /// Build from components, rejecting impossible calendar dates/times.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?;
        NaiveTime::from_hms_opt(hour, minute, 0)?;
        Some(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    /// Build from loosely-typed components.
    ///
    /// Year, month and day are required; a missing hour or minute is midnight.
    pub fn from_fields(
        year: Option<i64>,
        month: Option<i64>,
        day: Option<i64>,
        hour: Option<i64>,
        minute: Option<i64>,
    ) -> Option<Self> {
        let year = i32::try_from(year?).ok()?;
        let month = u32::try_from(month?).ok()?;
        let day = u32::try_from(day?).ok()?;
        let hour = u32::try_from(hour.unwrap_or(0)).ok()?;
        let minute = u32::try_from(minute.unwrap_or(0)).ok()?;
        Self::new(year, month, day, hour, minute)
    }

    /// The wall-clock value as a chrono `NaiveDateTime`.
    pub fn to_naive(&self) -> NaiveDateTime {
        // Components were validated on construction.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, 0))
            .unwrap_or_default()
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Birth date/time fields as they arrive in a request payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthFields {
    #[serde(default, deserialize_with = "lenient::integer")]
    pub birth_year: Option<i64>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub birth_month: Option<i64>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub birth_day: Option<i64>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub birth_hour: Option<i64>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub birth_minute: Option<i64>,
}

impl BirthFields {
    pub fn new(year: i64, month: i64, day: i64, hour: i64, minute: i64) -> Self {
        Self {
            birth_year: Some(year),
            birth_month: Some(month),
            birth_day: Some(day),
            birth_hour: Some(hour),
            birth_minute: Some(minute),
        }
    }

    pub fn civil(&self) -> Option<CivilTime> {
        CivilTime::from_fields(
            self.birth_year,
            self.birth_month,
            self.birth_day,
            self.birth_hour,
            self.birth_minute,
        )
    }
}
