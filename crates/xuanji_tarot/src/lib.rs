//! Tarot deck, spreads, and deterministic-under-test drawing.
//!
//! This crate provides:
//! - The 78-card deck as an immutable table
//! - Named spread layouts with per-position labels and meanings
//! - `RandomSource`, the injection point for randomness
//! - A Fisher–Yates shuffle-then-slice draw with reversal flags

pub mod deck;
pub mod draw;
pub mod rng;
pub mod spread;

pub use deck::{Arcana, DECK_SIZE, Suit, TAROT_DECK, TarotCard};
pub use draw::{DrawnCard, REVERSAL_THRESHOLD, SpreadMeta, TarotDraw, draw_tarot, draw_tarot_random};
pub use rng::{RandomSource, SeededSource, ThreadSource};
pub use spread::{SpreadConfig, SpreadPosition, SpreadType, UnknownSpread, get_tarot_spread_config};
