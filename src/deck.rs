use crate::cards::{Card, Rank, Suit};
use parking_lot::Mutex;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("no cards left in the deck")]
    Empty,
    #[error("cannot pick {requested} cards, only {remaining} remain")]
    InvalidArgument { requested: usize, remaining: usize },
}

/// Anything hands can be dealt from.
pub trait CardSource {
    /// Number of cards still available.
    fn remaining(&self) -> usize;

    /// Remove and return exactly `n` cards.
    ///
    /// Fails with [`DeckError::Empty`] when nothing is left, and with
    /// [`DeckError::InvalidArgument`] when fewer than `n` cards remain.
    fn pick(&mut self, n: usize) -> Result<Vec<Card>, DeckError>;
}

/// A standard 52-card deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled deck, clubs first.
    ///
    /// ```
    /// use poker_hands::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// Standard deck shuffled with a seeded RNG.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_seeded(seed);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        log::debug!("shuffling {} cards with seed {seed}", self.cards.len());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle in place with a caller-owned RNG, so one stream can drive many reshuffles.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

impl CardSource for Deck {
    fn remaining(&self) -> usize {
        self.cards.len()
    }

    fn pick(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if remaining == 0 && n > 0 {
            return Err(DeckError::Empty);
        }
        if n > remaining {
            return Err(DeckError::InvalidArgument { requested: n, remaining });
        }
        let mut picked = self.cards.split_off(remaining - n);
        // top of the deck is the end of the vector
        picked.reverse();
        Ok(picked)
    }
}

/// Cloneable handle to one deck; every pick runs under a single lock so the
/// remaining-count check and the removal cannot interleave.
#[derive(Debug, Clone)]
pub struct SharedDeck {
    deck: Arc<Mutex<Deck>>,
}

impl SharedDeck {
    pub fn new(deck: Deck) -> Self {
        Self { deck: Arc::new(Mutex::new(deck)) }
    }
}

impl CardSource for SharedDeck {
    fn remaining(&self) -> usize {
        self.deck.lock().len()
    }

    fn pick(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        self.deck.lock().pick(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.as_slice().iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let d1 = Deck::shuffled(42);
        let d2 = Deck::shuffled(42);
        assert_eq!(d1.cards, d2.cards);
        assert_ne!(d1.cards, Deck::standard().cards);
    }

    #[test]
    fn draw_and_pick_reduce_length() {
        let mut d = Deck::shuffled(7);
        let c1 = d.draw().unwrap();
        let c2 = d.draw().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 50);
        let hand = d.pick(5).unwrap();
        assert_eq!(hand.len(), 5);
        assert_eq!(d.remaining(), 45);
    }

    #[test]
    fn pick_takes_from_the_top() {
        let mut a = Deck::shuffled(3);
        let mut b = a.clone();
        let drawn: Vec<Card> = (0..3).filter_map(|_| b.draw()).collect();
        assert_eq!(a.pick(3).unwrap(), drawn);
    }

    #[test]
    fn pick_more_than_remaining_is_rejected() {
        let mut d = Deck::standard();
        d.pick(50).unwrap();
        let err = d.pick(5).unwrap_err();
        assert_eq!(err, DeckError::InvalidArgument { requested: 5, remaining: 2 });
        // nothing was removed by the failed pick
        assert_eq!(d.remaining(), 2);
    }

    #[test]
    fn pick_from_empty_deck_reports_empty() {
        let mut d = Deck::standard();
        d.pick(52).unwrap();
        assert_eq!(d.pick(1).unwrap_err(), DeckError::Empty);
        assert_eq!(d.pick(0).unwrap(), Vec::<Card>::new());
    }

    #[test]
    fn shared_deck_handles_see_one_deck() {
        let mut a = SharedDeck::new(Deck::standard());
        let b = a.clone();
        a.pick(10).unwrap();
        assert_eq!(b.remaining(), 42);
    }
}
