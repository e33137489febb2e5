use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use super::RankingRules;
use crate::cards::{Card, Rank};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Copy of the input, rank descending then suit descending.
    pub sorted_cards: [Card; 5],
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5], rules: RankingRules) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.cmp(a));

        let ranks = sorted_cards.map(Card::rank);
        let rank_groups = RankGroups::from_ranks(&ranks);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight_info = StraightInfo::detect(&ranks, rules);

        Self { sorted_cards, ranks, rank_groups, suit_info, straight_info }
    }
}
