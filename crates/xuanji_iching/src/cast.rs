//! Complete castings: primary hexagram, changing lines, resulting hexagram.
//!
//! Number casting takes the upper trigram from the first number and the
//! lower from the second. Time casting takes the upper trigram from the date
//! sum and the lower from the date sum plus the hour.

use serde::Serialize;
use xuanji_math::AsNumber;

use crate::changing::{
    TimeContext, derive_changing_lines_from_numbers, derive_changing_lines_from_time_context,
};
use crate::hexagram::{
    DetailedLine, Hexagram, LINE_COUNT, apply_changing_lines, build_hexagram, get_detailed_lines,
};
use crate::king_wen::{HexagramName, king_wen_name};
use crate::trigram::{Trigram, pick_trigram};

/// A full reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cast {
    pub hexagram: Hexagram,
    pub hexagram_name: HexagramName,
    pub changing_lines: Vec<u8>,
    pub resulting_hexagram: Hexagram,
    pub resulting_name: HexagramName,
    pub lines: [DetailedLine; 6],
}

impl Cast {
    fn from_parts(hexagram: Hexagram, changing_lines: Vec<u8>) -> Self {
        let resulting_hexagram = apply_changing_lines(&hexagram, &changing_lines);
        Self {
            hexagram_name: king_wen_name(&hexagram),
            resulting_name: king_wen_name(&resulting_hexagram),
            lines: get_detailed_lines(&hexagram, &changing_lines),
            hexagram,
            changing_lines,
            resulting_hexagram,
        }
    }
}

/// Cast from a chosen trigram pair and changing-line set.
///
/// Positions outside 1..=6 are dropped and duplicates collapse, so the
/// reported set is always sorted and unique.
pub fn cast_from_trigrams<P>(upper: &Trigram, lower: &Trigram, changing: &[P]) -> Cast
where
    P: Copy + Into<i64>,
{
    let mut lines: Vec<u8> = changing
        .iter()
        .filter_map(|&p| u8::try_from(p.into()).ok())
        .filter(|p| (1..=LINE_COUNT as u8).contains(p))
        .collect();
    lines.sort_unstable();
    lines.dedup();
    let hexagram = Hexagram::from_trigrams(upper, lower);
    Cast::from_parts(hexagram, lines)
}

/// Cast from three drawn numbers.
///
/// Returns `None` unless exactly three numeric values are supplied.
pub fn cast_from_numbers<T: AsNumber>(numbers: &[T]) -> Option<Cast> {
    let [upper, lower, _] = numbers else {
        return None;
    };
    let hexagram = build_hexagram(pick_trigram(upper), pick_trigram(lower))?;
    let changing = derive_changing_lines_from_numbers(numbers);
    if changing.is_empty() {
        return None;
    }
    Some(Cast::from_parts(hexagram, changing))
}

/// Cast from a civil date and time.
pub fn cast_from_time_context(ctx: &TimeContext) -> Option<Cast> {
    let upper = pick_trigram(&ctx.date_sum());
    let lower = pick_trigram(&(ctx.date_sum() + i64::from(ctx.hour)));
    let hexagram = build_hexagram(upper, lower)?;
    let changing = derive_changing_lines_from_time_context(Some(ctx));
    Some(Cast::from_parts(hexagram, changing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_cast() {
        let cast = cast_from_numbers(&[1, 8, 3]).unwrap();
        assert_eq!(cast.hexagram.lines, [0, 0, 0, 1, 1, 1]);
        // 1 + 8 + 3 = 12 → line 6
        assert_eq!(cast.changing_lines, vec![6]);
        assert_eq!(cast.resulting_hexagram.lines, [0, 0, 0, 1, 1, 0]);
        assert_eq!(cast.hexagram_name.name, "Pi");
        assert!(cast.lines[5].is_changing);
    }

    #[test]
    fn number_cast_rejects_bad_input() {
        assert!(cast_from_numbers(&[1, 2]).is_none());
        assert!(cast_from_numbers(&["1", "x", "3"]).is_none());
    }

    #[test]
    fn trigram_cast_sanitises_lines() {
        let qian = pick_trigram(&1).unwrap();
        let kun = pick_trigram(&8).unwrap();
        let cast = cast_from_trigrams(qian, kun, &[6_i64, 0, 7, 2, 6, -3]);
        assert_eq!(cast.changing_lines, vec![2, 6]);
        assert_eq!(cast.resulting_hexagram.lines, [0, 1, 0, 1, 1, 0]);
        let still = cast_from_trigrams::<i64>(qian, kun, &[]);
        assert_eq!(still.resulting_hexagram, still.hexagram);
    }

    #[test]
    fn time_cast() {
        let ctx = TimeContext::new(2024, 12, 25, 9, 30);
        let cast = cast_from_time_context(&ctx).unwrap();
        // 2061 → 5 (Xun), 2070 → 6 (Kan)
        assert_eq!(cast.hexagram.upper_trigram.name, "Xun");
        assert_eq!(cast.hexagram.lower_trigram.name, "Kan");
        assert_eq!(cast.changing_lines, vec![3, 6]);
        assert_eq!(
            cast.resulting_hexagram,
            apply_changing_lines(&cast.hexagram, &[3_u8, 6])
        );
    }
}
