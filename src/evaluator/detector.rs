use super::hand_analysis::HandAnalysis;
use super::HandRank;
use crate::cards::Rank;

/// Strategy pattern: each detector recognises one category and builds its tie-break payload.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: 10-J-Q-K-A, all same suit
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let suit = analysis.suit_info.flush_suit?;
        analysis.straight_info.ten_to_ace.then_some(HandRank::RoyalFlush(suit))
    }
}

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let info = &analysis.straight_info;
        if !(analysis.suit_info.is_flush() && info.is_straight()) {
            return None;
        }
        info.top_rank.map(HandRank::StraightFlush)
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let groups = &analysis.rank_groups;
        if !groups.has_shape(&[4, 1]) {
            return None;
        }
        let quad = groups.quad()?;
        let kicker = *groups.kickers().first()?;
        Some(HandRank::FourOfAKind { quad, kicker })
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let groups = &analysis.rank_groups;
        if !groups.has_shape(&[3, 2]) {
            return None;
        }
        let trips = groups.trips()?;
        let pair = *groups.pairs().first()?;
        Some(HandRank::FullHouse { trips, pair })
    }
}

/// Flush: All five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        analysis.suit_info.is_flush().then_some(HandRank::Flush(analysis.sorted_cards))
    }
}

/// Straight: Five consecutive ranks (not all same suit)
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let info = &analysis.straight_info;
        if !info.is_straight() {
            return None;
        }
        info.top_rank.map(HandRank::Straight)
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let groups = &analysis.rank_groups;
        if !groups.has_shape(&[3, 1, 1]) {
            return None;
        }
        let trips = groups.trips()?;
        let kickers: [Rank; 2] = groups.kickers().try_into().ok()?;
        Some(HandRank::ThreeOfAKind { trips, kickers })
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let groups = &analysis.rank_groups;
        if !groups.has_shape(&[2, 2, 1]) {
            return None;
        }
        let [high, low]: [Rank; 2] = groups.pairs().try_into().ok()?;
        let kicker = *groups.kickers().first()?;
        Some(HandRank::TwoPair { high, low, kicker })
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let groups = &analysis.rank_groups;
        if !groups.has_shape(&[2, 1, 1, 1]) {
            return None;
        }
        let pair = *groups.pairs().first()?;
        let kickers: [Rank; 3] = groups.kickers().try_into().ok()?;
        Some(HandRank::OnePair { pair, kickers })
    }
}

/// High Card: five distinct ranks with no flush or straight
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        analysis
            .rank_groups
            .has_shape(&[1, 1, 1, 1, 1])
            .then_some(HandRank::HighCard(analysis.sorted_cards))
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
