use crate::cards::{Card, Suit};

/// Whether all cards share one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let first = cards[0].suit();
        let flush_suit = cards.iter().all(|c| c.suit() == first).then_some(first);
        SuitInfo { flush_suit }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn suited(suit: Suit) -> [Card; 5] {
        [
            Card::new(Rank::Ace, suit),
            Card::new(Rank::King, suit),
            Card::new(Rank::Queen, suit),
            Card::new(Rank::Jack, suit),
            Card::new(Rank::Nine, suit),
        ]
    }

    #[test]
    fn every_suit_is_detected() {
        for suit in Suit::ALL {
            let info = SuitInfo::detect(&suited(suit));
            assert!(info.is_flush());
            assert_eq!(info.flush_suit, Some(suit));
        }
    }

    #[test]
    fn one_off_suit_breaks_the_flush() {
        let mut cards = suited(Suit::Spades);
        cards[3] = Card::new(Rank::Jack, Suit::Hearts);
        let info = SuitInfo::detect(&cards);
        assert!(!info.is_flush());
        assert_eq!(info.flush_suit, None);
    }
}
