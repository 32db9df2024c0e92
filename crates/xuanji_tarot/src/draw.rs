//! Shuffle-then-slice drawing.
//!
//! Randomness consumption order is part of the contract: `len - 1` calls
//! for the shuffle (index `len-1` down to `1`), then one call per drawn
//! card for its reversal flag.

use serde::Serialize;

use crate::deck::{TAROT_DECK, TarotCard};
use crate::rng::{RandomSource, ThreadSource};
use crate::spread::{SpreadPosition, SpreadType, get_tarot_spread_config};

/// A card is reversed when its draw is strictly below this value.
pub const REVERSAL_THRESHOLD: f64 = 0.3;

/// A card as placed in a spread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawnCard {
    #[serde(flatten)]
    pub card: TarotCard,
    /// 1-based slot in the spread.
    pub position: usize,
    pub position_label: Option<&'static str>,
    pub position_meaning: Option<&'static str>,
    pub is_reversed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpreadMeta {
    pub positions: &'static [SpreadPosition],
}

/// The result of a draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotDraw {
    pub spread_type: SpreadType,
    pub cards: Vec<DrawnCard>,
    pub spread_meta: SpreadMeta,
}

/// Swap partner for index `i` given a draw `r` in `[0, 1)`.
///
/// Out-of-range draws (`r >= 1`, negative, NaN) are clamped into `0..=i`.
fn swap_index(r: f64, i: usize) -> usize {
    let j = (r * (i + 1) as f64).floor();
    if j.is_nan() || j < 0.0 {
        0
    } else {
        (j as usize).min(i)
    }
}

/// In-place Fisher–Yates over a copy of the deck.
fn shuffle<R: RandomSource + ?Sized>(deck: &mut [TarotCard], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = swap_index(rng.next_f64(), i);
        deck.swap(i, j);
    }
}

/// Draw a spread using the supplied random source.
///
/// Unknown or missing spread names draw a single card.
pub fn draw_tarot<R: RandomSource + ?Sized>(spread_type: Option<&str>, rng: &mut R) -> TarotDraw {
    let config = get_tarot_spread_config(spread_type);

    let mut deck = TAROT_DECK;
    shuffle(&mut deck, rng);

    let cards = deck
        .iter()
        .take(config.count)
        .enumerate()
        .map(|(i, card)| {
            let slot = config.positions.get(i);
            DrawnCard {
                card: *card,
                position: i + 1,
                position_label: slot.map(|p| p.label),
                position_meaning: slot.map(|p| p.meaning),
                is_reversed: rng.next_f64() < REVERSAL_THRESHOLD,
            }
        })
        .collect();

    TarotDraw {
        spread_type: config.spread_type,
        cards,
        spread_meta: SpreadMeta { positions: config.positions },
    }
}

/// Draw a spread with the thread-local RNG.
pub fn draw_tarot_random(spread_type: Option<&str>) -> TarotDraw {
    draw_tarot(spread_type, &mut ThreadSource::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DECK_SIZE;

    #[test]
    fn swap_index_clamps() {
        assert_eq!(swap_index(0.0, 5), 0);
        assert_eq!(swap_index(0.999, 5), 5);
        assert_eq!(swap_index(1.0, 5), 5);
        assert_eq!(swap_index(7.5, 5), 5);
        assert_eq!(swap_index(-0.2, 5), 0);
        assert_eq!(swap_index(f64::NAN, 5), 0);
    }

    #[test]
    fn high_draws_keep_deck_order() {
        let draw = draw_tarot(Some("CelticCross"), &mut || 0.99);
        let ids: Vec<u8> = draw.cards.iter().map(|c| c.card.id).collect();
        assert_eq!(ids, (0..10).collect::<Vec<u8>>());
        assert!(draw.cards.iter().all(|c| !c.is_reversed));
    }

    #[test]
    fn zero_draws_rotate_and_reverse() {
        // j = 0 every step: each swap moves the old front card to index i,
        // leaving card 1 on top, then 2, 3, ...
        let draw = draw_tarot(Some("ThreeCard"), &mut || 0.0);
        let ids: Vec<u8> = draw.cards.iter().map(|c| c.card.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(draw.cards.iter().all(|c| c.is_reversed));
    }

    #[test]
    fn reversal_draws_follow_shuffle() {
        let mut calls = 0usize;
        let mut rng = || {
            calls += 1;
            // Shuffle consumes the first DECK_SIZE - 1 values.
            if calls < DECK_SIZE { 0.99 } else { 0.1 }
        };
        let draw = draw_tarot(Some("Horseshoe"), &mut rng);
        assert_eq!(calls, DECK_SIZE - 1 + 7);
        assert!(draw.cards.iter().all(|c| c.is_reversed));
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut calls = 0usize;
        let mut rng = || {
            calls += 1;
            if calls < DECK_SIZE { 0.5 } else { REVERSAL_THRESHOLD }
        };
        let draw = draw_tarot(None, &mut rng);
        assert!(!draw.cards[0].is_reversed);
    }

    #[test]
    fn positions_labelled() {
        let draw = draw_tarot(Some("ThreeCard"), &mut || 0.42);
        let labels: Vec<_> = draw.cards.iter().map(|c| (c.position, c.position_label)).collect();
        assert_eq!(
            labels,
            vec![(1, Some("Past")), (2, Some("Present")), (3, Some("Future"))]
        );
        assert_eq!(draw.spread_meta.positions.len(), 3);
    }

    #[test]
    fn canonical_deck_untouched() {
        let _ = draw_tarot(Some("CelticCross"), &mut || 0.0);
        for (i, card) in TAROT_DECK.iter().enumerate() {
            assert_eq!(usize::from(card.id), i);
        }
    }

    #[test]
    fn drawn_cards_are_copies_of_the_table() {
        let first = draw_tarot(Some("CelticCross"), &mut || 0.0);
        let second = draw_tarot(Some("CelticCross"), &mut || 0.99);
        for drawn in first.cards.iter().chain(&second.cards) {
            assert_eq!(drawn.card, TAROT_DECK[usize::from(drawn.card.id)]);
        }
        // A second shuffle starts from the canonical order again.
        assert_eq!(second.cards[0].card.id, 0);
    }

    #[test]
    fn random_draw_has_spread_count() {
        let draw = draw_tarot_random(Some("Relationship"));
        assert_eq!(draw.spread_type, SpreadType::Relationship);
        assert_eq!(draw.cards.len(), 5);
    }
}
