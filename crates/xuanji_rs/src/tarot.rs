use tracing::{debug, instrument};
use xuanji_tarot::{SeededSource, SpreadType, TarotDraw, ThreadSource, draw_tarot};

/// Draw a spread, reproducibly when `seed` is set.
#[instrument(level = "debug")]
pub fn draw(spread: Option<&str>, seed: Option<u64>) -> TarotDraw {
    let result = match seed {
        Some(seed) => draw_tarot(spread, &mut SeededSource::new(seed)),
        None => draw_tarot(spread, &mut ThreadSource::new()),
    };
    if spread.is_some_and(|s| s.parse::<SpreadType>().is_err()) {
        debug!(?spread, fallback = %result.spread_type, "unknown spread");
    }
    result
}
