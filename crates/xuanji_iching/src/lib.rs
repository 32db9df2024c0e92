//! I Ching symbolic construction.
//!
//! This crate provides:
//! - The eight trigrams in the Xiantian order (Qian=1 .. Kun=8)
//! - Hexagram composition and changing-line application
//! - Changing-line derivation from drawn numbers or a date/time context
//! - Traditional (King Wen) sequence lookup
//!
//! Line bits follow the application convention: index 0 is the topmost
//! line, `0` is a solid (yang) line and `1` a broken (yin) line.

pub mod cast;
pub mod changing;
pub mod hexagram;
pub mod king_wen;
pub mod trigram;

pub use cast::{Cast, cast_from_numbers, cast_from_time_context, cast_from_trigrams};
pub use changing::{
    TimeContext, derive_changing_lines_from_numbers, derive_changing_lines_from_time_context,
};
pub use hexagram::{
    DetailedLine, Hexagram, LINE_COUNT, LineStatus, apply_changing_lines, build_hexagram,
    get_detailed_lines,
};
pub use king_wen::{HexagramName, king_wen_name, king_wen_number};
pub use trigram::{TRIGRAMS, Trigram, pick_trigram, trigram_by_id};
