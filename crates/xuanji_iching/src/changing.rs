//! Changing-line derivation.
//!
//! Both derivations return an ascending, duplicate-free `Vec` of positions
//! in 1..=6, and an empty `Vec` when the input cannot be used.

use serde::Deserialize;
use serde_json::Value;
use xuanji_math::{AsNumber, normalize_number, wrap_1_based};

use crate::hexagram::LINE_COUNT;
use crate::trigram::TRIGRAM_COUNT;

const LINE_MODULUS: u32 = LINE_COUNT as u32;

/// Derive the changing line from exactly three drawn numbers.
///
/// Each number is wrapped into 1..=8, the three are summed, and the sum is
/// wrapped into 1..=6. Any other length, or any non-numeric element, yields
/// an empty set.
pub fn derive_changing_lines_from_numbers<T: AsNumber>(numbers: &[T]) -> Vec<u8> {
    let [a, b, c] = numbers else {
        return Vec::new();
    };
    let parts = [a, b, c].map(|n| normalize_number(n, TRIGRAM_COUNT));
    let mut sum = 0_i64;
    for part in parts {
        match part {
            Some(v) => sum += i64::from(v),
            None => return Vec::new(),
        }
    }
    vec![wrap_1_based(sum, LINE_MODULUS) as u8]
}

/// Civil date and time used for time-based casting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct TimeContext {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl TimeContext {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Decode from a loosely-typed JSON object.
    ///
    /// Each field may be a number or numeric string; a missing, fractional
    /// or non-numeric field makes the whole context unusable.
    pub fn from_value(value: &Value) -> Option<Self> {
        let field = |key: &str| -> Option<i64> {
            let n = AsNumber::as_number(value.get(key)?)?;
            (n.is_finite() && n.fract() == 0.0).then_some(n as i64)
        };
        let unsigned = |key: &str| field(key).and_then(|n| u32::try_from(n).ok());
        Some(Self {
            year: i32::try_from(field("year")?).ok()?,
            month: unsigned("month")?,
            day: unsigned("day")?,
            hour: unsigned("hour")?,
            minute: unsigned("minute")?,
        })
    }

    /// Sum of the date components.
    pub fn date_sum(&self) -> i64 {
        i64::from(self.year) + i64::from(self.month) + i64::from(self.day)
    }

    /// Minutes elapsed since midnight.
    pub fn minute_of_day(&self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }
}

/// Derive changing lines from a date/time context.
///
/// One line comes from the date (`year + month + day`), one from the time of
/// day (`hour * 60 + minute`), each wrapped into 1..=6. Coinciding lines
/// collapse to a single entry.
pub fn derive_changing_lines_from_time_context(ctx: Option<&TimeContext>) -> Vec<u8> {
    let Some(ctx) = ctx else {
        return Vec::new();
    };
    let date_line = wrap_1_based(ctx.date_sum(), LINE_MODULUS) as u8;
    let time_line = wrap_1_based(ctx.minute_of_day(), LINE_MODULUS) as u8;
    let mut lines = vec![date_line, time_line];
    lines.sort_unstable();
    lines.dedup();
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn three_numbers() {
        assert_eq!(derive_changing_lines_from_numbers(&[1, 2, 3]), vec![6]);
        assert_eq!(derive_changing_lines_from_numbers(&[8, 8, 8]), vec![6]);
        assert_eq!(derive_changing_lines_from_numbers(&[1, 1, 1]), vec![3]);
    }

    #[test]
    fn numbers_are_wrapped_before_summing() {
        // 9 → 1, 10 → 2, 11 → 3
        assert_eq!(derive_changing_lines_from_numbers(&[9, 10, 11]), vec![6]);
    }

    #[test]
    fn wrong_length_is_empty() {
        assert!(derive_changing_lines_from_numbers::<i32>(&[]).is_empty());
        assert!(derive_changing_lines_from_numbers(&[1, 2]).is_empty());
        assert!(derive_changing_lines_from_numbers(&[1, 2, 3, 4]).is_empty());
    }

    #[test]
    fn non_numeric_element_is_empty() {
        let v = [json!(1), json!("x"), json!(3)];
        assert!(derive_changing_lines_from_numbers(&v).is_empty());
        let s = [json!("4"), json!("5"), json!(6)];
        assert_eq!(derive_changing_lines_from_numbers(&s), vec![3]);
    }

    #[test]
    fn christmas_morning() {
        let ctx = TimeContext::new(2024, 12, 25, 9, 30);
        assert_eq!(derive_changing_lines_from_time_context(Some(&ctx)), vec![3, 6]);
    }

    #[test]
    fn coinciding_lines_collapse() {
        // 2024+1+1 = 2026 → 4; 0*60+4 = 4 → 4
        let ctx = TimeContext::new(2024, 1, 1, 0, 4);
        assert_eq!(derive_changing_lines_from_time_context(Some(&ctx)), vec![4]);
    }

    #[test]
    fn missing_context_is_empty() {
        assert!(derive_changing_lines_from_time_context(None).is_empty());
    }

    #[test]
    fn from_value_lenient() {
        let v = json!({ "year": "2024", "month": 12, "day": 25, "hour": 9, "minute": "30" });
        assert_eq!(TimeContext::from_value(&v), Some(TimeContext::new(2024, 12, 25, 9, 30)));
    }

    #[test]
    fn from_value_rejects_junk() {
        assert!(TimeContext::from_value(&json!(null)).is_none());
        assert!(TimeContext::from_value(&json!({ "year": 2024 })).is_none());
        let v = json!({ "year": "soon", "month": 1, "day": 1, "hour": 0, "minute": 0 });
        assert!(TimeContext::from_value(&v).is_none());
        let v = json!({ "year": 2024, "month": -1, "day": 1, "hour": 0, "minute": 0 });
        assert!(TimeContext::from_value(&v).is_none());
    }
}
