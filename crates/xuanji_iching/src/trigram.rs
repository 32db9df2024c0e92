//! The eight trigrams and index-based lookup.
//!
//! The table order (and therefore each `id`) is the Xiantian sequence
//! Qian, Dui, Li, Zhen, Xun, Kan, Gen, Kun. Persisted readings refer to
//! trigrams by id, so this order must never change.

use serde::Serialize;
use xuanji_math::{AsNumber, normalize_number};

/// Number of trigrams, and the modulus used to resolve one from a number.
pub const TRIGRAM_COUNT: u32 = 8;

/// A three-line symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Trigram {
    /// Stable id, 1..=8.
    pub id: u8,
    /// Pinyin name.
    pub name: &'static str,
    /// Chinese character.
    pub chinese: &'static str,
    /// Natural image (heaven, lake, ...).
    pub image: &'static str,
    /// Associated five-phase element.
    pub element: &'static str,
    /// Lines, top to bottom. `0` = solid, `1` = broken.
    pub lines: [u8; 3],
}

/// All eight trigrams, index 0 = id 1.
pub const TRIGRAMS: [Trigram; 8] = [
    Trigram { id: 1, name: "Qian", chinese: "乾", image: "heaven", element: "metal", lines: [0, 0, 0] },
    Trigram { id: 2, name: "Dui", chinese: "兑", image: "lake", element: "metal", lines: [1, 0, 0] },
    Trigram { id: 3, name: "Li", chinese: "离", image: "fire", element: "fire", lines: [0, 1, 0] },
    Trigram { id: 4, name: "Zhen", chinese: "震", image: "thunder", element: "wood", lines: [1, 1, 0] },
    Trigram { id: 5, name: "Xun", chinese: "巽", image: "wind", element: "wood", lines: [0, 0, 1] },
    Trigram { id: 6, name: "Kan", chinese: "坎", image: "water", element: "water", lines: [1, 0, 1] },
    Trigram { id: 7, name: "Gen", chinese: "艮", image: "mountain", element: "earth", lines: [0, 1, 1] },
    Trigram { id: 8, name: "Kun", chinese: "坤", image: "earth", element: "earth", lines: [1, 1, 1] },
];

/// Trigram id for each 3-bit line code (top line = bit 2).
const ID_BY_CODE: [u8; 8] = [1, 5, 3, 7, 2, 6, 4, 8];

/// Look up a trigram by its exact id (1..=8).
pub fn trigram_by_id(id: u8) -> Option<&'static Trigram> {
    TRIGRAMS.get(usize::from(id).checked_sub(1)?)
}

/// Resolve any numeric-ish value to a trigram, wrapping modulo 8.
///
/// Returns `None` if the value has no finite numeric reading.
pub fn pick_trigram<T: AsNumber + ?Sized>(value: &T) -> Option<&'static Trigram> {
    let idx = normalize_number(value, TRIGRAM_COUNT)?;
    TRIGRAMS.get(idx as usize - 1)
}

impl Trigram {
    /// Resolve the trigram drawn by three lines (top to bottom).
    ///
    /// Only the low bit of each line is considered, so this is total.
    pub fn from_lines(lines: [u8; 3]) -> &'static Trigram {
        let code = ((lines[0] & 1) << 2) | ((lines[1] & 1) << 1) | (lines[2] & 1);
        let id = ID_BY_CODE[usize::from(code)];
        &TRIGRAMS[usize::from(id - 1)]
    }
}
