//! UTC offset labels and IANA zone lookup.
//!
//! Offsets are signed minutes east of UTC. Accepted label grammar
//! (case-insensitive, whitespace ignored):
//!
//! ```text
//! UTC | GMT | Z
//! [UTC|GMT] (+|-) H[H] [[:]MM]
//! ```
//!
//! Hours may not exceed 14, minutes must be below 60, and the total may not
//! exceed 14:00 in either direction.

use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

/// Largest offset in use anywhere (UTC+14:00, Line Islands).
pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Parse a UTC offset label into signed minutes.
pub fn parse_timezone_offset_minutes(label: &str) -> Option<i32> {
    let compact: String = label
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '\u{2212}' { '-' } else { c })
        .collect::<String>()
        .to_ascii_uppercase();
    if compact.is_empty() {
        return None;
    }
    if compact == "Z" {
        return Some(0);
    }
    let rest = compact
        .strip_prefix("UTC")
        .or_else(|| compact.strip_prefix("GMT"))
        .unwrap_or(&compact);
    if rest.is_empty() {
        // bare "UTC"/"GMT"; an unprefixed empty string was rejected above
        return Some(0);
    }

    let (sign, body) = match rest.as_bytes()[0] {
        b'+' => (1, &rest[1..]),
        b'-' => (-1, &rest[1..]),
        _ => return None,
    };
    let (hours, minutes) = split_hours_minutes(body)?;
    if hours > 14 || minutes >= 60 {
        return None;
    }
    let total = (hours * 60 + minutes) as i32;
    (total <= MAX_OFFSET_MINUTES).then_some(sign * total)
}

fn split_hours_minutes(body: &str) -> Option<(u32, u32)> {
    if !body.chars().all(|c| c.is_ascii_digit() || c == ':') {
        return None;
    }
    let (h, m) = match body.split_once(':') {
        Some((h, m)) if m.len() == 2 => (h, m),
        Some(_) => return None,
        None => match body.len() {
            1 | 2 => (body, "0"),
            3 | 4 => body.split_at(body.len() - 2),
            _ => return None,
        },
    };
    if h.is_empty() || h.len() > 2 || m.contains(':') {
        return None;
    }
    Some((h.parse().ok()?, m.parse().ok()?))
}

/// Render signed minutes as `UTC±HH:MM`; zero and non-finite input give `UTC`.
pub fn format_timezone_offset(minutes: f64) -> String {
    if !minutes.is_finite() {
        return "UTC".to_string();
    }
    #[allow(clippy::cast_possible_truncation)]
    let total = minutes.round() as i64;
    if total == 0 {
        return "UTC".to_string();
    }
    let sign = if total < 0 { '-' } else { '+' };
    let abs = total.unsigned_abs();
    format!("UTC{sign}{:02}:{:02}", abs / 60, abs % 60)
}

/// Offset of an IANA zone at a UTC instant, honouring that zone's DST rules.
///
/// Returns `None` for names missing from the timezone database.
pub fn get_offset_minutes_from_time_zone(iana_name: &str, at: DateTime<Utc>) -> Option<i32> {
    let tz: Tz = iana_name.trim().parse().ok()?;
    let offset = tz.offset_from_utc_datetime(&at.naive_utc()).fix();
    Some(offset.local_minus_utc() / 60)
}

/// True if `name` is an offset label or an IANA zone name.
pub fn is_known_timezone(name: &str) -> bool {
    parse_timezone_offset_minutes(name).is_some() || name.trim().parse::<Tz>().is_ok()
}
