use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Count each rank in `ranks` and group them.
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for r in ranks {
            counts[r.value() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = counts[rank.value() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// True when the rank-count multiset, largest count first, equals `shape`.
    /// A full house is `[3, 2]`, two pair is `[2, 2, 1]`.
    pub fn has_shape(&self, shape: &[u8]) -> bool {
        self.groups.len() == shape.len()
            && self.groups.iter().zip(shape).all(|((_, count), want)| count == want)
    }

    /// Returns the rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.rank_with_count(4)
    }

    /// Returns the rank of a three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.rank_with_count(3)
    }

    /// Returns all pair ranks, in descending order.
    pub fn pairs(&self) -> Vec<Rank> {
        self.ranks_with_count(2)
    }

    /// Returns all singleton (kicker) ranks, in descending order.
    pub fn kickers(&self) -> Vec<Rank> {
        self.ranks_with_count(1)
    }

    fn rank_with_count(&self, n: u8) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == n).map(|(rank, _)| *rank)
    }

    fn ranks_with_count(&self, n: u8) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == n).map(|(rank, _)| *rank).collect()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
