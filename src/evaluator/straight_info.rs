use super::RankingRules;
use crate::cards::Rank;

const TEN_TO_ACE: [Rank; 5] = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];
const WHEEL: [Rank; 5] = [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two];

/// Whether five ranks form a straight, and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
    /// Ranks are exactly 10-J-Q-K-A.
    pub ten_to_ace: bool,
}

impl StraightInfo {
    /// Detect a straight from 5 ranks in any order.
    ///
    /// A run of five consecutive face values is a straight; 10-J-Q-K-A is also matched
    /// literally. A-2-3-4-5 only counts when `rules.ace_low_straights` is set.
    pub fn detect(ranks: &[Rank; 5], rules: RankingRules) -> Self {
        let mut desc = *ranks;
        desc.sort_by(|a, b| b.cmp(a));

        let ten_to_ace = desc == TEN_TO_ACE;
        let consecutive = desc.windows(2).all(|w| w[0].value() == w[1].value() + 1);

        let top_rank = if consecutive || ten_to_ace {
            Some(desc[0])
        } else if rules.ace_low_straights && desc == WHEEL {
            Some(Rank::Five)
        } else {
            None
        };
        StraightInfo { top_rank, ten_to_ace }
    }

    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn regular_straight() {
        let info = StraightInfo::detect(&[King, Queen, Jack, Ten, Nine], RankingRules::STANDARD);
        assert_eq!(info.top_rank, Some(King));
        assert!(!info.ten_to_ace);
    }

    #[test]
    fn ten_to_ace_matches_both_ways() {
        let ranks = [Ace, King, Queen, Jack, Ten];
        let info = StraightInfo::detect(&ranks, RankingRules::STANDARD);
        assert!(info.ten_to_ace);
        assert_eq!(info.top_rank, Some(Ace));
        let consecutive = ranks.windows(2).all(|w| w[0].value() == w[1].value() + 1);
        assert!(consecutive);
    }

    #[test]
    fn low_straight() {
        let info = StraightInfo::detect(&[Six, Five, Four, Three, Two], RankingRules::STANDARD);
        assert_eq!(info.top_rank, Some(Six));
    }

    #[test]
    fn wheel_needs_ace_low_rules() {
        let ranks = [Ace, Two, Three, Four, Five];
        assert!(!StraightInfo::detect(&ranks, RankingRules::STANDARD).is_straight());
        let info = StraightInfo::detect(&ranks, RankingRules::ACE_LOW);
        assert_eq!(info.top_rank, Some(Five));
        assert!(!info.ten_to_ace);
    }

    #[test]
    fn no_wrap_around() {
        let ranks = [Queen, King, Ace, Two, Three];
        assert!(!StraightInfo::detect(&ranks, RankingRules::ACE_LOW).is_straight());
    }

    #[test]
    fn gaps_and_pairs_are_not_straights() {
        let gap = [Ace, King, Queen, Jack, Nine];
        assert!(!StraightInfo::detect(&gap, RankingRules::STANDARD).is_straight());
        let pair = [Ace, Ace, King, Queen, Jack];
        assert!(!StraightInfo::detect(&pair, RankingRules::STANDARD).is_straight());
    }

    #[test]
    fn unsorted_input() {
        let info = StraightInfo::detect(&[Nine, King, Ten, Jack, Queen], RankingRules::STANDARD);
        assert_eq!(info.top_rank, Some(King));
    }
}
