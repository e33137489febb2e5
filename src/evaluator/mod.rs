pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank, Suit};
use core::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Poker hand category from weakest to strongest. `NotRankable` sits below every real hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    NotRankable = 0,
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    /// Strength number: higher is stronger, `NotRankable` is 0 and `RoyalFlush` is 10.
    pub const fn strength(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::NotRankable => "Not Rankable",
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The rank of a hand: its category plus exactly the ranks that break ties inside it.
///
/// Ordering follows poker strength. Equality means "same strength", so two royal flushes
/// are equal whatever their suits, and so are flushes that differ only by suit.
#[derive(Debug, Clone)]
pub enum HandRank {
    /// Suit is kept for display only.
    RoyalFlush(Suit),
    /// High rank of the run.
    StraightFlush(Rank),
    FourOfAKind {
        quad: Rank,
        kicker: Rank,
    },
    FullHouse {
        trips: Rank,
        pair: Rank,
    },
    /// The five cards, rank descending.
    Flush([Card; 5]),
    /// High rank of the run.
    Straight(Rank),
    ThreeOfAKind {
        trips: Rank,
        kickers: [Rank; 2],
    },
    TwoPair {
        high: Rank,
        low: Rank,
        kicker: Rank,
    },
    OnePair {
        pair: Rank,
        kickers: [Rank; 3],
    },
    /// The five cards, rank descending.
    HighCard([Card; 5]),
    /// Input that did not hold exactly five cards, as given.
    NotRankable(Vec<Card>),
}

impl HandRank {
    pub fn category(&self) -> Category {
        match self {
            HandRank::RoyalFlush(_) => Category::RoyalFlush,
            HandRank::StraightFlush(_) => Category::StraightFlush,
            HandRank::FourOfAKind { .. } => Category::FourOfAKind,
            HandRank::FullHouse { .. } => Category::FullHouse,
            HandRank::Flush(_) => Category::Flush,
            HandRank::Straight(_) => Category::Straight,
            HandRank::ThreeOfAKind { .. } => Category::ThreeOfAKind,
            HandRank::TwoPair { .. } => Category::TwoPair,
            HandRank::OnePair { .. } => Category::OnePair,
            HandRank::HighCard(_) => Category::HighCard,
            HandRank::NotRankable(_) => Category::NotRankable,
        }
    }

    /// Ranks compared, most significant first, once categories are equal.
    pub fn tiebreak(&self) -> Vec<Rank> {
        match self {
            HandRank::RoyalFlush(_) | HandRank::NotRankable(_) => Vec::new(),
            HandRank::StraightFlush(high) | HandRank::Straight(high) => vec![*high],
            HandRank::FourOfAKind { quad, kicker } => vec![*quad, *kicker],
            HandRank::FullHouse { trips, pair } => vec![*trips, *pair],
            HandRank::Flush(cards) | HandRank::HighCard(cards) => ranks_desc(cards),
            HandRank::ThreeOfAKind { trips, kickers } => {
                vec![*trips, kickers[0], kickers[1]]
            }
            HandRank::TwoPair { high, low, kicker } => vec![*high, *low, *kicker],
            HandRank::OnePair { pair, kickers } => vec![*pair, kickers[0], kickers[1], kickers[2]],
        }
    }

    pub fn is_rankable(&self) -> bool {
        !matches!(self, HandRank::NotRankable(_))
    }

    /// Short label naming the category and its defining ranks.
    ///
    /// ```
    /// use poker_hands::cards::parse_cards;
    /// use poker_hands::evaluator::evaluate;
    ///
    /// let rank = evaluate(&parse_cards("As Ah Ad Ks Kh").unwrap());
    /// assert_eq!(rank.describe(), "Full House, Aces over Kings");
    /// ```
    pub fn describe(&self) -> String {
        match self {
            HandRank::RoyalFlush(suit) => format!("Royal Flush of {}", suit.name()),
            HandRank::StraightFlush(high) => format!("Straight Flush, {} high", high.name()),
            HandRank::FourOfAKind { quad, .. } => format!("Four of a Kind, {}", quad.plural()),
            HandRank::FullHouse { trips, pair } => {
                format!("Full House, {} over {}", trips.plural(), pair.plural())
            }
            HandRank::Flush(cards) => format!("Flush, {} high", high_rank(cards).name()),
            HandRank::Straight(high) => format!("Straight, {} high", high.name()),
            HandRank::ThreeOfAKind { trips, .. } => {
                format!("Three of a Kind, {}", trips.plural())
            }
            HandRank::TwoPair { high, low, .. } => {
                format!("Two Pair, {} and {}", high.plural(), low.plural())
            }
            HandRank::OnePair { pair, .. } => format!("One Pair, {}", pair.plural()),
            HandRank::HighCard(cards) => format!("High Card, {}", high_rank(cards).name()),
            HandRank::NotRankable(cards) => format!("Not Rankable ({} cards)", cards.len()),
        }
    }
}

fn ranks_desc(cards: &[Card; 5]) -> Vec<Rank> {
    let mut ranks: Vec<Rank> = cards.iter().map(|c| c.rank()).collect();
    ranks.sort_by(|a, b| b.cmp(a));
    ranks
}

fn high_rank(cards: &[Card; 5]) -> Rank {
    cards.iter().map(|c| c.rank()).fold(cards[0].rank(), Rank::max)
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category().cmp(&other.category()).then_with(|| self.tiebreak().cmp(&other.tiebreak()))
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandRank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandRank {}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Rule switches the ranker is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankingRules {
    /// Count A-2-3-4-5 as the lowest straight (high card Five). Off by default.
    pub ace_low_straights: bool,
}

impl RankingRules {
    pub const STANDARD: RankingRules = RankingRules { ace_low_straights: false };
    pub const ACE_LOW: RankingRules = RankingRules { ace_low_straights: true };
}

impl fmt::Display for RankingRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ace_low_straights {
            f.write_str("ace-low")
        } else {
            f.write_str("standard")
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RulesParseError {
    #[error("unknown ranking rules: '{0}' (expected 'standard' or 'ace-low')")]
    Unknown(String),
}

impl FromStr for RankingRules {
    type Err = RulesParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "ace-high" => Ok(RankingRules::STANDARD),
            "ace-low" | "wheel" => Ok(RankingRules::ACE_LOW),
            _ => Err(RulesParseError::Unknown(s.to_string())),
        }
    }
}

/// A strategy that turns cards into a [`HandRank`].
pub trait HandRanker: Send + Sync {
    fn rank(&self, cards: &[Card]) -> HandRank;
}

/// Category detection over a fixed precedence table, strongest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRanker {
    rules: RankingRules,
}

impl StandardRanker {
    pub const fn new(rules: RankingRules) -> Self {
        Self { rules }
    }
}

impl HandRanker for StandardRanker {
    fn rank(&self, cards: &[Card]) -> HandRank {
        use detector::DETECTORS;
        use hand_analysis::HandAnalysis;

        let Ok(five) = <[Card; 5]>::try_from(cards) else {
            log::trace!("{} cards given, hand is not rankable", cards.len());
            return HandRank::NotRankable(cards.to_vec());
        };

        // Build analysis once (sorted copy, rank groups, flush/straight info)
        let analysis = HandAnalysis::new(&five, self.rules);

        // Duplicate cards can produce a rank shape no detector accepts; report those
        // as high card rather than failing.
        let rank = match DETECTORS.iter().find_map(|detector| detector.detect(&analysis)) {
            Some(rank) => rank,
            None => {
                log::debug!("no category fits {:?}, duplicate cards? ranking as high card", five);
                HandRank::HighCard(analysis.sorted_cards)
            }
        };
        log::trace!("ranked {:?} as {rank}", analysis.ranks);
        rank
    }
}

/// Rank cards with the standard (Ace-high only) rules.
///
/// Any input that is not exactly five cards yields [`HandRank::NotRankable`].
///
/// ```
/// use poker_hands::cards::parse_cards;
/// use poker_hands::evaluator::{evaluate, Category};
///
/// let royal = evaluate(&parse_cards("Td Jd Qd Kd Ad").unwrap());
/// let straight_flush = evaluate(&parse_cards("9c Tc Jc Qc Kc").unwrap());
/// assert_eq!(royal.category(), Category::RoyalFlush);
/// assert!(royal > straight_flush);
///
/// let short = evaluate(&parse_cards("2c 3d 4h").unwrap());
/// assert_eq!(short.category(), Category::NotRankable);
/// ```
pub fn evaluate(cards: &[Card]) -> HandRank {
    StandardRanker::default().rank(cards)
}

/// Compare two ranks by poker strength.
pub fn compare(a: &HandRank, b: &HandRank) -> Ordering {
    a.cmp(b)
}

/// Human-readable label for a rank.
pub fn describe(rank: &HandRank) -> String {
    rank.describe()
}
