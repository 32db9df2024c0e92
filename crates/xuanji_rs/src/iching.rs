//! Hexagram casting from loosely-typed input.

use tracing::debug;
use xuanji_iching::{
    Cast, TimeContext, Trigram, cast_from_numbers, cast_from_time_context, cast_from_trigrams,
    pick_trigram,
};
use xuanji_time::CivilTime;

use crate::error::FacadeError;

/// Resolve a trigram from a numeric string, wrapping modulo 8.
pub fn trigram(value: &str) -> Result<&'static Trigram, FacadeError> {
    pick_trigram(value).ok_or_else(|| FacadeError::Trigram(value.to_string()))
}

/// Cast from an explicit trigram pair and changing-line positions.
pub fn hexagram(upper: &str, lower: &str, changing: &[i64]) -> Result<Cast, FacadeError> {
    let cast = cast_from_trigrams(trigram(upper)?, trigram(lower)?, changing);
    if cast.changing_lines.len() != changing.len() {
        debug!(requested = ?changing, kept = ?cast.changing_lines, "changing lines normalised");
    }
    Ok(cast)
}

/// Cast from three drawn numbers (numeric strings allowed).
pub fn cast_numbers<S: AsRef<str>>(numbers: &[S]) -> Result<Cast, FacadeError> {
    if numbers.len() != 3 {
        return Err(FacadeError::CastArity(numbers.len()));
    }
    let values: Vec<&str> = numbers.iter().map(|s| s.as_ref()).collect();
    cast_from_numbers(&values).ok_or_else(|| FacadeError::Cast(values.join(",")))
}

/// Cast from a civil date and time.
pub fn cast_time(civil: &CivilTime) -> Result<Cast, FacadeError> {
    let ctx = TimeContext::new(civil.year, civil.month, civil.day, civil.hour, civil.minute);
    cast_from_time_context(&ctx).ok_or_else(|| FacadeError::Cast(civil.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigram_from_strings() {
        assert_eq!(trigram("3").unwrap().name, "Li");
        assert_eq!(trigram(" 16 ").unwrap().name, "Kun");
        assert!(matches!(trigram("abc"), Err(FacadeError::Trigram(s)) if s == "abc"));
    }

    #[test]
    fn hexagram_with_changing() {
        let cast = hexagram("1", "8", &[1, 9]).unwrap();
        assert_eq!(cast.changing_lines, vec![1]);
        assert_eq!(cast.resulting_hexagram.lines, [1, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn number_cast_arity() {
        assert!(matches!(cast_numbers(&["1", "2"]), Err(FacadeError::CastArity(2))));
        assert!(matches!(cast_numbers(&["1", "x", "3"]), Err(FacadeError::Cast(_))));
        let cast = cast_numbers(&["1", "2", "3"]).unwrap();
        assert_eq!(cast.changing_lines, vec![6]);
    }

    #[test]
    fn time_cast_matches_engine() {
        let civil = CivilTime::new(2024, 12, 25, 9, 30).unwrap();
        let cast = cast_time(&civil).unwrap();
        assert_eq!(cast.changing_lines, vec![3, 6]);
        assert_eq!(cast.hexagram.upper_trigram.name, "Xun");
    }
}
