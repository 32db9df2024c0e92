//! Civil time, timezone offsets, and true-solar-time correction.
//!
//! This crate provides:
//! - `CivilTime`, a validated wall-clock birth time
//! - UTC offset label parsing/formatting and IANA zone offset lookup
//! - Birth-time metadata (resolved offset, UTC instant, ISO string)
//! - A fixed gazetteer and location-to-coordinate resolution
//! - Longitude-based true-solar-time correction
//!
//! Every operation returns `None` (or an empty value) on unusable input
//! rather than an error.

pub mod birth;
pub mod civil;
pub mod location;
pub mod offset;
pub mod solar;

pub use birth::{
    BirthTimeMeta, BirthTimePayload, OffsetSource, TimezoneResolution, build_birth_time_meta,
    resolve_timezone_offset,
};
pub use civil::{BirthFields, CivilTime};
pub use location::{
    KnownLocation, LocationSource, LocationSummary, ResolvedLocation, find_known_location,
    list_known_locations, normalize_location_key, resolve_location_coordinates,
};
pub use offset::{
    MAX_OFFSET_MINUTES, format_timezone_offset, get_offset_minutes_from_time_zone,
    is_known_timezone, parse_timezone_offset_minutes,
};
pub use solar::{SolarTimeCorrection, SolarTimeInput, compute_true_solar_time};
