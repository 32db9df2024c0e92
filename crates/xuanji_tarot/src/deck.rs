//! The 78-card tarot deck.
//!
//! Ids are positions in [`TAROT_DECK`]: majors 0..=21, then Wands, Cups,
//! Swords, Pentacles in blocks of 14 (Ace..King). The table is never
//! mutated; a draw shuffles its own by-value copy of the array.

use serde::Serialize;

pub const DECK_SIZE: usize = 78;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    Major,
    Minor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Wands => "Wands",
            Suit::Cups => "Cups",
            Suit::Swords => "Swords",
            Suit::Pentacles => "Pentacles",
        }
    }
}

/// A single card with its upright and reversed keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TarotCard {
    pub id: u8,
    pub name: &'static str,
    pub arcana: Arcana,
    pub suit: Option<Suit>,
    /// Major: 0..=21 (The Fool = 0). Minor: 1..=14 (Ace = 1, King = 14).
    pub rank: u8,
    pub upright: &'static str,
    pub reversed: &'static str,
}

const fn major(id: u8, name: &'static str, upright: &'static str, reversed: &'static str) -> TarotCard {
    TarotCard { id, name, arcana: Arcana::Major, suit: None, rank: id, upright, reversed }
}

const fn minor(
    id: u8,
    suit: Suit,
    rank: u8,
    name: &'static str,
    upright: &'static str,
    reversed: &'static str,
) -> TarotCard {
    TarotCard { id, name, arcana: Arcana::Minor, suit: Some(suit), rank, upright, reversed }
}

use Suit::{Cups, Pentacles, Swords, Wands};

#[rustfmt::skip]
pub const TAROT_DECK: [TarotCard; DECK_SIZE] = [
    major(0, "The Fool", "beginnings, innocence, spontaneity", "recklessness, hesitation, poor judgement"),
    major(1, "The Magician", "willpower, skill, manifestation", "manipulation, untapped talent, trickery"),
    major(2, "The High Priestess", "intuition, mystery, inner voice", "secrets, withdrawal, ignored intuition"),
    major(3, "The Empress", "abundance, nurturing, fertility", "dependence, creative block, smothering"),
    major(4, "The Emperor", "authority, structure, stability", "rigidity, domination, lack of discipline"),
    major(5, "The Hierophant", "tradition, guidance, convention", "rebellion, nonconformity, new approaches"),
    major(6, "The Lovers", "union, harmony, choices", "disharmony, imbalance, misalignment"),
    major(7, "The Chariot", "determination, victory, control", "aggression, lack of direction, obstacles"),
    major(8, "Strength", "courage, patience, compassion", "self-doubt, weakness, insecurity"),
    major(9, "The Hermit", "introspection, solitude, guidance", "isolation, loneliness, withdrawal"),
    major(10, "Wheel of Fortune", "cycles, fate, turning point", "bad luck, resistance to change, delay"),
    major(11, "Justice", "fairness, truth, accountability", "injustice, dishonesty, avoidance"),
    major(12, "The Hanged Man", "surrender, new perspective, pause", "stalling, resistance, indecision"),
    major(13, "Death", "endings, transformation, transition", "fear of change, stagnation, holding on"),
    major(14, "Temperance", "balance, moderation, patience", "excess, imbalance, haste"),
    major(15, "The Devil", "attachment, temptation, materialism", "release, breaking free, detachment"),
    major(16, "The Tower", "upheaval, revelation, sudden change", "averted disaster, fear of change, delay"),
    major(17, "The Star", "hope, renewal, serenity", "despair, discouragement, disconnection"),
    major(18, "The Moon", "illusion, dreams, the unconscious", "clarity, released fear, confusion lifting"),
    major(19, "The Sun", "joy, success, vitality", "temporary gloom, overconfidence, delay"),
    major(20, "Judgement", "reflection, awakening, reckoning", "self-doubt, refusal of the call, harsh judgement"),
    major(21, "The World", "completion, fulfilment, wholeness", "incompletion, shortcuts, loose ends"),

    minor(22, Wands, 1, "Ace of Wands", "inspiration, new venture, spark", "delays, lack of motivation"),
    minor(23, Wands, 2, "Two of Wands", "planning, first steps, decisions", "fear of the unknown, poor planning"),
    minor(24, Wands, 3, "Three of Wands", "expansion, foresight, progress", "setbacks, frustration, limited vision"),
    minor(25, Wands, 4, "Four of Wands", "celebration, homecoming, harmony", "instability, lack of support"),
    minor(26, Wands, 5, "Five of Wands", "competition, conflict, tension", "avoiding conflict, truce"),
    minor(27, Wands, 6, "Six of Wands", "recognition, victory, confidence", "ego, fall from grace"),
    minor(28, Wands, 7, "Seven of Wands", "defence, perseverance, standing firm", "overwhelm, giving up"),
    minor(29, Wands, 8, "Eight of Wands", "speed, momentum, swift news", "delays, frustration, waiting"),
    minor(30, Wands, 9, "Nine of Wands", "resilience, persistence, last stand", "exhaustion, paranoia"),
    minor(31, Wands, 10, "Ten of Wands", "burden, responsibility, hard work", "delegation, release of load"),
    minor(32, Wands, 11, "Page of Wands", "enthusiasm, exploration, discovery", "hasty plans, lack of direction"),
    minor(33, Wands, 12, "Knight of Wands", "energy, adventure, passion", "impulsiveness, frustration"),
    minor(34, Wands, 13, "Queen of Wands", "confidence, warmth, determination", "jealousy, selfishness"),
    minor(35, Wands, 14, "King of Wands", "vision, leadership, boldness", "impulsiveness, overbearing"),

    minor(36, Cups, 1, "Ace of Cups", "new love, compassion, emotional openness", "blocked emotion, emptiness"),
    minor(37, Cups, 2, "Two of Cups", "partnership, attraction, unity", "imbalance, broken bond"),
    minor(38, Cups, 3, "Three of Cups", "friendship, celebration, community", "overindulgence, gossip"),
    minor(39, Cups, 4, "Four of Cups", "contemplation, apathy, reevaluation", "renewed interest, acceptance"),
    minor(40, Cups, 5, "Five of Cups", "loss, grief, regret", "moving on, forgiveness"),
    minor(41, Cups, 6, "Six of Cups", "nostalgia, memories, innocence", "living in the past, naivety"),
    minor(42, Cups, 7, "Seven of Cups", "choices, fantasy, illusion", "clarity, focus, decision"),
    minor(43, Cups, 8, "Eight of Cups", "walking away, seeking meaning", "fear of change, aimless drifting"),
    minor(44, Cups, 9, "Nine of Cups", "contentment, satisfaction, wishes granted", "smugness, dissatisfaction"),
    minor(45, Cups, 10, "Ten of Cups", "harmony, family, lasting happiness", "broken home, misaligned values"),
    minor(46, Cups, 11, "Page of Cups", "curiosity, creative message, sensitivity", "emotional immaturity, blocked creativity"),
    minor(47, Cups, 12, "Knight of Cups", "romance, charm, following the heart", "moodiness, unrealistic ideals"),
    minor(48, Cups, 13, "Queen of Cups", "empathy, care, intuition", "insecurity, codependence"),
    minor(49, Cups, 14, "King of Cups", "emotional balance, diplomacy, calm", "manipulation, volatility"),

    minor(50, Swords, 1, "Ace of Swords", "clarity, breakthrough, truth", "confusion, miscommunication"),
    minor(51, Swords, 2, "Two of Swords", "stalemate, difficult choice, truce", "information overload, indecision"),
    minor(52, Swords, 3, "Three of Swords", "heartbreak, sorrow, grief", "recovery, forgiveness"),
    minor(53, Swords, 4, "Four of Swords", "rest, recovery, contemplation", "restlessness, burnout"),
    minor(54, Swords, 5, "Five of Swords", "conflict, hollow victory, tension", "reconciliation, making amends"),
    minor(55, Swords, 6, "Six of Swords", "transition, moving on, passage", "unfinished business, resistance"),
    minor(56, Swords, 7, "Seven of Swords", "deception, strategy, stealth", "confession, conscience"),
    minor(57, Swords, 8, "Eight of Swords", "restriction, self-imposed limits", "release, new perspective"),
    minor(58, Swords, 9, "Nine of Swords", "anxiety, worry, sleeplessness", "hope, reaching out"),
    minor(59, Swords, 10, "Ten of Swords", "painful ending, rock bottom", "recovery, regeneration"),
    minor(60, Swords, 11, "Page of Swords", "curiosity, vigilance, new ideas", "deception, haste"),
    minor(61, Swords, 12, "Knight of Swords", "ambition, drive, fast thinking", "recklessness, burnout"),
    minor(62, Swords, 13, "Queen of Swords", "clear boundaries, independence, honesty", "coldness, bitterness"),
    minor(63, Swords, 14, "King of Swords", "intellect, authority, truth", "abuse of power, cruelty"),

    minor(64, Pentacles, 1, "Ace of Pentacles", "opportunity, prosperity, new venture", "missed chance, poor planning"),
    minor(65, Pentacles, 2, "Two of Pentacles", "balance, adaptability, juggling", "overcommitment, disorganisation"),
    minor(66, Pentacles, 3, "Three of Pentacles", "teamwork, craftsmanship, learning", "disharmony, poor work"),
    minor(67, Pentacles, 4, "Four of Pentacles", "security, saving, control", "greed, possessiveness"),
    minor(68, Pentacles, 5, "Five of Pentacles", "hardship, insecurity, isolation", "recovery, spiritual aid"),
    minor(69, Pentacles, 6, "Six of Pentacles", "generosity, charity, sharing", "debt, strings attached"),
    minor(70, Pentacles, 7, "Seven of Pentacles", "patience, long-term view, investment", "impatience, limited reward"),
    minor(71, Pentacles, 8, "Eight of Pentacles", "diligence, mastery, skill", "perfectionism, lack of focus"),
    minor(72, Pentacles, 9, "Nine of Pentacles", "independence, luxury, self-sufficiency", "overwork, setbacks"),
    minor(73, Pentacles, 10, "Ten of Pentacles", "legacy, wealth, family", "financial loss, instability"),
    minor(74, Pentacles, 11, "Page of Pentacles", "ambition, study, manifestation", "procrastination, lack of progress"),
    minor(75, Pentacles, 12, "Knight of Pentacles", "routine, reliability, hard work", "boredom, stagnation"),
    minor(76, Pentacles, 13, "Queen of Pentacles", "practicality, nurturing, security", "self-neglect, work-life imbalance"),
    minor(77, Pentacles, 14, "King of Pentacles", "abundance, discipline, security", "greed, stubbornness"),
];

impl TarotCard {
    /// Look up a card by id.
    pub fn by_id(id: u8) -> Option<&'static TarotCard> {
        TAROT_DECK.get(usize::from(id))
    }
}
