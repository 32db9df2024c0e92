//! Spread layouts.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A named spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpreadType {
    SingleCard,
    ThreeCard,
    CelticCross,
    Relationship,
    Horseshoe,
}

impl SpreadType {
    pub const ALL: [SpreadType; 5] = [
        SpreadType::SingleCard,
        SpreadType::ThreeCard,
        SpreadType::CelticCross,
        SpreadType::Relationship,
        SpreadType::Horseshoe,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SpreadType::SingleCard => "SingleCard",
            SpreadType::ThreeCard => "ThreeCard",
            SpreadType::CelticCross => "CelticCross",
            SpreadType::Relationship => "Relationship",
            SpreadType::Horseshoe => "Horseshoe",
        }
    }

    pub const fn config(self) -> &'static SpreadConfig {
        match self {
            SpreadType::SingleCard => &SINGLE_CARD,
            SpreadType::ThreeCard => &THREE_CARD,
            SpreadType::CelticCross => &CELTIC_CROSS,
            SpreadType::Relationship => &RELATIONSHIP,
            SpreadType::Horseshoe => &HORSESHOE,
        }
    }
}

impl fmt::Display for SpreadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised spread name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSpread(pub String);

impl fmt::Display for UnknownSpread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown spread: {}", self.0)
    }
}

impl std::error::Error for UnknownSpread {}

impl FromStr for SpreadType {
    type Err = UnknownSpread;

    /// Matches names case-insensitively, ignoring `-`, `_` and spaces, so
    /// `CelticCross`, `celtic-cross` and `celtic_cross` are the same spread.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        SpreadType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(&key))
            .ok_or_else(|| UnknownSpread(s.to_string()))
    }
}

/// One slot of a spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpreadPosition {
    pub label: &'static str,
    pub meaning: &'static str,
}

/// Card count and labelled positions for a spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadConfig {
    pub spread_type: SpreadType,
    pub count: usize,
    pub positions: &'static [SpreadPosition],
}

const fn pos(label: &'static str, meaning: &'static str) -> SpreadPosition {
    SpreadPosition { label, meaning }
}

const SINGLE_CARD: SpreadConfig = SpreadConfig {
    spread_type: SpreadType::SingleCard,
    count: 1,
    positions: &[pos("Guidance", "The central message for the question")],
};

const THREE_CARD: SpreadConfig = SpreadConfig {
    spread_type: SpreadType::ThreeCard,
    count: 3,
    positions: &[
        pos("Past", "Influences that led to the present situation"),
        pos("Present", "The current state of affairs"),
        pos("Future", "The likely direction if nothing changes"),
    ],
};

const CELTIC_CROSS: SpreadConfig = SpreadConfig {
    spread_type: SpreadType::CelticCross,
    count: 10,
    positions: &[
        pos("Present", "The heart of the matter"),
        pos("Challenge", "What crosses or complicates the situation"),
        pos("Foundation", "The root cause beneath the surface"),
        pos("Recent Past", "What is passing out of influence"),
        pos("Crown", "The best outcome that can be reached"),
        pos("Near Future", "What is about to come into play"),
        pos("Self", "Your attitude and position"),
        pos("Environment", "The people and forces around you"),
        pos("Hopes and Fears", "What you anticipate or dread"),
        pos("Outcome", "Where the current path leads"),
    ],
};

const RELATIONSHIP: SpreadConfig = SpreadConfig {
    spread_type: SpreadType::Relationship,
    count: 5,
    positions: &[
        pos("You", "Your role and feelings in the relationship"),
        pos("Partner", "Their role and feelings in the relationship"),
        pos("Connection", "What binds the two of you"),
        pos("Challenge", "What strains the relationship"),
        pos("Potential", "Where the relationship can go"),
    ],
};

const HORSESHOE: SpreadConfig = SpreadConfig {
    spread_type: SpreadType::Horseshoe,
    count: 7,
    positions: &[
        pos("Past", "Past influences"),
        pos("Present", "The present situation"),
        pos("Hidden Influences", "Factors not yet visible"),
        pos("Obstacles", "What stands in the way"),
        pos("External Influences", "Attitudes of others"),
        pos("Advice", "The suggested course of action"),
        pos("Outcome", "The probable result"),
    ],
};

/// Resolve a spread by name. Unknown or missing names fall back to
/// `SingleCard`.
pub fn get_tarot_spread_config(spread_type: Option<&str>) -> &'static SpreadConfig {
    spread_type
        .and_then(|s| s.parse::<SpreadType>().ok())
        .unwrap_or(SpreadType::SingleCard)
        .config()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        let counts: Vec<usize> = SpreadType::ALL.iter().map(|t| t.config().count).collect();
        assert_eq!(counts, vec![1, 3, 10, 5, 7]);
    }

    #[test]
    fn every_position_labelled() {
        for t in SpreadType::ALL {
            let cfg = t.config();
            assert_eq!(cfg.spread_type, t);
            assert_eq!(cfg.positions.len(), cfg.count, "{t}");
        }
    }

    #[test]
    fn three_card_is_past_present_future() {
        let labels: Vec<_> = SpreadType::ThreeCard.config().positions.iter().map(|p| p.label).collect();
        assert_eq!(labels, ["Past", "Present", "Future"]);
    }

    #[test]
    fn lookup_and_fallback() {
        assert_eq!(get_tarot_spread_config(Some("CelticCross")).count, 10);
        assert_eq!(get_tarot_spread_config(Some("celtic-cross")).count, 10);
        assert_eq!(get_tarot_spread_config(Some("three_card")).count, 3);
        assert_eq!(get_tarot_spread_config(Some("Nonexistent")).spread_type, SpreadType::SingleCard);
        assert_eq!(get_tarot_spread_config(None).spread_type, SpreadType::SingleCard);
        assert_eq!(get_tarot_spread_config(Some("")).spread_type, SpreadType::SingleCard);
    }

    #[test]
    fn parse_error_names_input() {
        let err = "Pentagram".parse::<SpreadType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown spread: Pentagram");
    }
}
