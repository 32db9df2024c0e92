//! Hexagram composition and changing-line application.
//!
//! A hexagram's `lines` are the upper trigram's three lines followed by the
//! lower trigram's three lines. Changing-line position `p` (1..=6) addresses
//! `lines[p - 1]`; positions outside that range are ignored everywhere.

use serde::Serialize;

use crate::trigram::Trigram;

/// Lines in a hexagram.
pub const LINE_COUNT: usize = 6;

/// A six-line symbol formed from an upper and a lower trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hexagram {
    pub upper_trigram: Trigram,
    pub lower_trigram: Trigram,
    pub lines: [u8; LINE_COUNT],
}

impl Hexagram {
    /// Upper trigram's lines followed by the lower trigram's.
    pub fn from_trigrams(upper: &Trigram, lower: &Trigram) -> Self {
        let mut lines = [0u8; LINE_COUNT];
        lines[..3].copy_from_slice(&upper.lines);
        lines[3..].copy_from_slice(&lower.lines);
        Self {
            upper_trigram: *upper,
            lower_trigram: *lower,
            lines,
        }
    }

    /// Rebuild a hexagram from six lines, re-resolving both trigrams.
    pub fn from_lines(lines: [u8; LINE_COUNT]) -> Self {
        let lines = lines.map(|l| l & 1);
        let upper = Trigram::from_lines([lines[0], lines[1], lines[2]]);
        let lower = Trigram::from_lines([lines[3], lines[4], lines[5]]);
        Self {
            upper_trigram: *upper,
            lower_trigram: *lower,
            lines,
        }
    }
}

/// Stack two trigrams into a hexagram.
///
/// Returns `None` if either trigram is absent; a partial hexagram is never
/// constructed.
pub fn build_hexagram(upper: Option<&Trigram>, lower: Option<&Trigram>) -> Option<Hexagram> {
    Some(Hexagram::from_trigrams(upper?, lower?))
}

/// Map a 1-based position to a line index, ignoring anything out of range.
fn line_index(position: i64) -> Option<usize> {
    (1..=LINE_COUNT as i64)
        .contains(&position)
        .then(|| (position - 1) as usize)
}

/// Flip the lines at `positions`, producing a new hexagram.
///
/// Each occurrence flips, so a duplicated position cancels itself out.
/// Out-of-range positions are skipped and `hexagram` is left untouched.
pub fn apply_changing_lines<P>(hexagram: &Hexagram, positions: &[P]) -> Hexagram
where
    P: Copy + Into<i64>,
{
    let mut lines = hexagram.lines;
    for idx in positions.iter().filter_map(|&p| line_index(p.into())) {
        lines[idx] ^= 1;
    }
    Hexagram::from_lines(lines)
}

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStatus {
    Solid,
    Broken,
}

impl LineStatus {
    pub const fn from_bit(bit: u8) -> Self {
        if bit & 1 == 0 { Self::Solid } else { Self::Broken }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Broken => "broken",
        }
    }
}

/// Per-line descriptor for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedLine {
    /// 1-based position.
    pub position: u8,
    /// Raw bit.
    pub value: u8,
    pub is_changing: bool,
    pub status: LineStatus,
}

/// Describe all six lines in position order.
pub fn get_detailed_lines<P>(hexagram: &Hexagram, positions: &[P]) -> [DetailedLine; LINE_COUNT]
where
    P: Copy + Into<i64>,
{
    let mut changing = [false; LINE_COUNT];
    for idx in positions.iter().filter_map(|&p| line_index(p.into())) {
        changing[idx] = true;
    }
    std::array::from_fn(|i| DetailedLine {
        position: (i + 1) as u8,
        value: hexagram.lines[i],
        is_changing: changing[i],
        status: LineStatus::from_bit(hexagram.lines[i]),
    })
}
