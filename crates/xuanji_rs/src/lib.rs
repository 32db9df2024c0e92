//! Convenience facade for the xuanji divination engine.
//!
//! Accepts loosely-typed input (strings, JSON payloads, `YYYY-MM-DDThh:mm`
//! dates) and returns the serializable shapes clients consume, logging
//! resolution fallbacks through `tracing`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use xuanji_rs::*;
//!
//! let civil = parse_civil("2024-12-25T09:30")?;
//! let cast = cast_time(&civil)?;
//! println!("{}", serde_json::to_string_pretty(&cast)?);
//!
//! let draw = draw(Some("ThreeCard"), Some(42));
//! ```

pub mod error;
pub mod iching;
pub mod tarot;
pub mod time;

pub use error::FacadeError;
pub use iching::{cast_numbers, cast_time, hexagram, trigram};
pub use tarot::draw;
pub use time::{
    SolarTimeReport, SolarTimeRequest, birth_meta, from_json, parse_civil, resolve_timezone,
    solar_time,
};

// Re-export the value types so callers only need `use xuanji_rs::*`.
pub use xuanji_iching::{Cast, DetailedLine, Hexagram, HexagramName, LineStatus, Trigram};
pub use xuanji_tarot::{DrawnCard, SpreadType, TarotDraw};
pub use xuanji_time::{
    BirthFields, BirthTimeMeta, BirthTimePayload, CivilTime, LocationSummary, OffsetSource,
    ResolvedLocation, TimezoneResolution, format_timezone_offset,
    get_offset_minutes_from_time_zone, list_known_locations, parse_timezone_offset_minutes,
};
