use crate::cards::{parse_cards, Card};
use crate::deck::{CardSource, DeckError};
use crate::evaluator::{HandRank, HandRanker, StandardRanker};
use std::cmp::Ordering;
use std::str::FromStr;

/// Cards in a poker hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("insufficient cards: the source has no cards left to deal")]
    InsufficientCards,
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's cards together with their rank.
///
/// Ordering and equality follow the rank, so sorting hands sorts them by strength.
///
/// ```
/// use poker_hands::evaluator::{RankingRules, StandardRanker};
/// use poker_hands::cards::parse_cards;
/// use poker_hands::hand::Hand;
///
/// let ranker = StandardRanker::new(RankingRules::STANDARD);
/// let full_house = Hand::new(&parse_cards("As Ah Ad Ks Kh").unwrap(), &ranker);
/// let trips = Hand::new(&parse_cards("As Ah Ad Ks Qh").unwrap(), &ranker);
/// assert!(full_house > trips);
/// assert_eq!(full_house.describe(), "Full House, Aces over Kings");
/// ```
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    rank: HandRank,
}

impl Hand {
    /// Rank `cards` with `ranker`. The cards are copied; wrong counts give a
    /// `NotRankable` hand rather than an error.
    pub fn new(cards: &[Card], ranker: &dyn HandRanker) -> Self {
        Self { cards: cards.to_vec(), rank: ranker.rank(cards) }
    }

    /// Deal five cards from `source` and rank them.
    ///
    /// A source with no cards at all is a dealing bug and fails with
    /// [`HandError::InsufficientCards`]; a partly exhausted source fails with the
    /// deck's invalid-argument error.
    pub fn deal<S>(source: &mut S, ranker: &dyn HandRanker) -> Result<Self, HandError>
    where
        S: CardSource + ?Sized,
    {
        let cards = source.pick(HAND_SIZE).map_err(|err| {
            log::debug!("dealing a hand failed: {err}");
            match err {
                DeckError::Empty => HandError::InsufficientCards,
                other => HandError::Deck(other),
            }
        })?;
        Ok(Self::new(&cards, ranker))
    }

    /// Cards in the order they were given.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn rank(&self) -> &HandRank {
        &self.rank
    }

    pub fn describe(&self) -> String {
        self.rank.describe()
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Hand {}

impl FromStr for Hand {
    type Err = HandError;

    /// Parse cards and rank them with the standard rules.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Ok(Self::new(&cards, &StandardRanker::default()))
    }
}

/// Indices of the strongest hands; more than one on a split.
///
/// ```
/// use poker_hands::hand::{best_hands, Hand};
///
/// let hands: Vec<Hand> = ["2c 3d 4h 5s 7c", "Ah Ad Ts 9c 2d", "As Ac Th 9d 2h"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(best_hands(&hands), vec![1, 2]);
/// ```
pub fn best_hands(hands: &[Hand]) -> Vec<usize> {
    let Some(best) = hands.iter().max() else {
        return Vec::new();
    };
    hands.iter().enumerate().filter(|(_, h)| *h == best).map(|(i, _)| i).collect()
}
