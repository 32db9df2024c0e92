//! Gazetteer and location-to-coordinate resolution.
//!
//! Input is either a coordinate pair ("lat, lng") or a place name. A
//! coordinate-looking input is never reinterpreted as a name: if neither
//! `(a, b)` nor the swapped `(b, a)` is a valid latitude/longitude pair the
//! resolution fails.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

/// One gazetteer row. Several rows may share a canonical `name` (aliases).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownLocation {
    /// Lookup key, already in `normalize_location_key` form.
    pub key: &'static str,
    /// Canonical display name.
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone for civil time at this place.
    pub timezone: &'static str,
}

const fn place(
    key: &'static str,
    name: &'static str,
    latitude: f64,
    longitude: f64,
    timezone: &'static str,
) -> KnownLocation {
    KnownLocation {
        key,
        name,
        latitude,
        longitude,
        timezone,
    }
}

/// The gazetteer. Lookup walks this table in order.
pub const KNOWN_LOCATIONS: &[KnownLocation] = &[
    place("beijing", "Beijing", 39.9042, 116.4074, "Asia/Shanghai"),
    place("北京", "Beijing", 39.9042, 116.4074, "Asia/Shanghai"),
    place("peking", "Beijing", 39.9042, 116.4074, "Asia/Shanghai"),
    place("shanghai", "Shanghai", 31.2304, 121.4737, "Asia/Shanghai"),
    place("上海", "Shanghai", 31.2304, 121.4737, "Asia/Shanghai"),
    place("guangzhou", "Guangzhou", 23.1291, 113.2644, "Asia/Shanghai"),
    place("广州", "Guangzhou", 23.1291, 113.2644, "Asia/Shanghai"),
    place("canton", "Guangzhou", 23.1291, 113.2644, "Asia/Shanghai"),
    place("shenzhen", "Shenzhen", 22.5431, 114.0579, "Asia/Shanghai"),
    place("深圳", "Shenzhen", 22.5431, 114.0579, "Asia/Shanghai"),
    place("chengdu", "Chengdu", 30.5728, 104.0668, "Asia/Shanghai"),
    place("成都", "Chengdu", 30.5728, 104.0668, "Asia/Shanghai"),
    place("chongqing", "Chongqing", 29.4316, 106.9123, "Asia/Shanghai"),
    place("重庆", "Chongqing", 29.4316, 106.9123, "Asia/Shanghai"),
    place("xi an", "Xi'an", 34.3416, 108.9398, "Asia/Shanghai"),
    place("xian", "Xi'an", 34.3416, 108.9398, "Asia/Shanghai"),
    place("西安", "Xi'an", 34.3416, 108.9398, "Asia/Shanghai"),
    place("wuhan", "Wuhan", 30.5928, 114.3055, "Asia/Shanghai"),
    place("武汉", "Wuhan", 30.5928, 114.3055, "Asia/Shanghai"),
    place("hangzhou", "Hangzhou", 30.2741, 120.1551, "Asia/Shanghai"),
    place("杭州", "Hangzhou", 30.2741, 120.1551, "Asia/Shanghai"),
    place("nanjing", "Nanjing", 32.0603, 118.7969, "Asia/Shanghai"),
    place("南京", "Nanjing", 32.0603, 118.7969, "Asia/Shanghai"),
    place("harbin", "Harbin", 45.8038, 126.5350, "Asia/Shanghai"),
    place("哈尔滨", "Harbin", 45.8038, 126.5350, "Asia/Shanghai"),
    place("kunming", "Kunming", 25.0389, 102.7183, "Asia/Shanghai"),
    place("昆明", "Kunming", 25.0389, 102.7183, "Asia/Shanghai"),
    place("lhasa", "Lhasa", 29.6520, 91.1721, "Asia/Shanghai"),
    place("拉萨", "Lhasa", 29.6520, 91.1721, "Asia/Shanghai"),
    place("urumqi", "Urumqi", 43.8256, 87.6168, "Asia/Shanghai"),
    place("乌鲁木齐", "Urumqi", 43.8256, 87.6168, "Asia/Shanghai"),
    place("hong kong", "Hong Kong", 22.3193, 114.1694, "Asia/Hong_Kong"),
    place("hongkong", "Hong Kong", 22.3193, 114.1694, "Asia/Hong_Kong"),
    place("香港", "Hong Kong", 22.3193, 114.1694, "Asia/Hong_Kong"),
    place("macau", "Macau", 22.1987, 113.5439, "Asia/Macau"),
    place("macao", "Macau", 22.1987, 113.5439, "Asia/Macau"),
    place("澳门", "Macau", 22.1987, 113.5439, "Asia/Macau"),
    place("taipei", "Taipei", 25.0330, 121.5654, "Asia/Taipei"),
    place("台北", "Taipei", 25.0330, 121.5654, "Asia/Taipei"),
    place("臺北", "Taipei", 25.0330, 121.5654, "Asia/Taipei"),
    place("singapore", "Singapore", 1.3521, 103.8198, "Asia/Singapore"),
    place("新加坡", "Singapore", 1.3521, 103.8198, "Asia/Singapore"),
    place("kuala lumpur", "Kuala Lumpur", 3.1390, 101.6869, "Asia/Kuala_Lumpur"),
    place("bangkok", "Bangkok", 13.7563, 100.5018, "Asia/Bangkok"),
    place("tokyo", "Tokyo", 35.6762, 139.6503, "Asia/Tokyo"),
    place("东京", "Tokyo", 35.6762, 139.6503, "Asia/Tokyo"),
    place("seoul", "Seoul", 37.5665, 126.9780, "Asia/Seoul"),
    place("首尔", "Seoul", 37.5665, 126.9780, "Asia/Seoul"),
    place("sydney", "Sydney", -33.8688, 151.2093, "Australia/Sydney"),
    place("悉尼", "Sydney", -33.8688, 151.2093, "Australia/Sydney"),
    place("london", "London", 51.5074, -0.1278, "Europe/London"),
    place("伦敦", "London", 51.5074, -0.1278, "Europe/London"),
    place("paris", "Paris", 48.8566, 2.3522, "Europe/Paris"),
    place("巴黎", "Paris", 48.8566, 2.3522, "Europe/Paris"),
    place("new york", "New York", 40.7128, -74.0060, "America/New_York"),
    place("new york city", "New York", 40.7128, -74.0060, "America/New_York"),
    place("nyc", "New York", 40.7128, -74.0060, "America/New_York"),
    place("纽约", "New York", 40.7128, -74.0060, "America/New_York"),
    place("los angeles", "Los Angeles", 34.0522, -118.2437, "America/Los_Angeles"),
    place("洛杉矶", "Los Angeles", 34.0522, -118.2437, "America/Los_Angeles"),
    place("san francisco", "San Francisco", 37.7749, -122.4194, "America/Los_Angeles"),
    place("旧金山", "San Francisco", 37.7749, -122.4194, "America/Los_Angeles"),
    place("vancouver", "Vancouver", 49.2827, -123.1207, "America/Vancouver"),
    place("温哥华", "Vancouver", 49.2827, -123.1207, "America/Vancouver"),
    place("toronto", "Toronto", 43.6532, -79.3832, "America/Toronto"),
    place("多伦多", "Toronto", 43.6532, -79.3832, "America/Toronto"),
];

/// How a location was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    /// Parsed from a numeric pair.
    Coordinates,
    /// Matched against the gazetteer.
    Known,
}

/// A resolved location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub source: LocationSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<&'static str>,
}

/// Gazetteer entry as listed to clients: one per canonical name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: &'static str,
    pub aliases: Vec<&'static str>,
}

/// Canonical lookup key: lowercase, punctuation to spaces, whitespace collapsed.
///
/// Letters and digits of any script are kept, so CJK names survive.
pub fn normalize_location_key(raw: &str) -> String {
    let spaced: String = raw
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn valid_latitude(v: f64) -> bool {
    (-90.0..=90.0).contains(&v)
}

fn valid_longitude(v: f64) -> bool {
    (-180.0..=180.0).contains(&v)
}

/// Parse exactly two finite numbers separated by comma, semicolon or spaces.
fn parse_pair(raw: &str) -> Option<(f64, f64)> {
    let mut parts = raw
        .split(|c: char| c == ',' || c == ';' || c == '，' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let a: f64 = parts.next()?.parse().ok()?;
    let b: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !a.is_finite() || !b.is_finite() {
        return None;
    }
    Some((a, b))
}

/// Find a gazetteer entry for a free-form place name.
///
/// Exact key match wins; otherwise the first row whose key contains the
/// query, or which the query contains, is returned. Queries shorter than two
/// characters only match exactly.
pub fn find_known_location(raw: &str) -> Option<&'static KnownLocation> {
    let key = normalize_location_key(raw);
    if key.is_empty() {
        return None;
    }
    if let Some(hit) = KNOWN_LOCATIONS.iter().find(|l| l.key == key) {
        return Some(hit);
    }
    if key.chars().count() < 2 {
        return None;
    }
    KNOWN_LOCATIONS
        .iter()
        .find(|l| key.contains(l.key) || l.key.contains(key.as_str()))
}

/// Resolve free-form input to coordinates.
pub fn resolve_location_coordinates(raw: &str) -> Option<ResolvedLocation> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Some((a, b)) = parse_pair(raw) {
        let (latitude, longitude) = if valid_latitude(a) && valid_longitude(b) {
            (a, b)
        } else if valid_latitude(b) && valid_longitude(a) {
            (b, a)
        } else {
            return None;
        };
        return Some(ResolvedLocation {
            latitude,
            longitude,
            source: LocationSource::Coordinates,
            name: None,
            timezone: None,
        });
    }
    find_known_location(raw).map(|l| ResolvedLocation {
        latitude: l.latitude,
        longitude: l.longitude,
        source: LocationSource::Known,
        name: Some(l.name),
        timezone: Some(l.timezone),
    })
}

fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Every canonical place once, sorted by name.
pub fn list_known_locations() -> Vec<LocationSummary> {
    let mut merged: BTreeMap<&'static str, LocationSummary> = BTreeMap::new();
    for row in KNOWN_LOCATIONS {
        merged
            .entry(row.name)
            .or_insert_with(|| LocationSummary {
                name: row.name,
                latitude: row.latitude,
                longitude: row.longitude,
                timezone: row.timezone,
                aliases: Vec::new(),
            })
            .aliases
            .push(row.key);
    }
    let mut out: Vec<LocationSummary> = merged.into_values().collect();
    out.sort_by(|a, b| collate(a.name, b.name));
    out
}
