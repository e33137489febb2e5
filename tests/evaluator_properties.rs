use poker_hands::cards::{Card, Rank, Suit};
use poker_hands::deck::Deck;
use poker_hands::evaluator::{compare, evaluate, Category, HandRank};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::HashMap;

fn any_hand() -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(Deck::standard().as_slice().to_vec(), 5).prop_shuffle()
}

fn rank_counts(cards: &[Card]) -> Vec<u8> {
    let mut counts: HashMap<Rank, u8> = HashMap::new();
    for c in cards {
        *counts.entry(c.rank()).or_default() += 1;
    }
    let mut shape: Vec<u8> = counts.into_values().collect();
    shape.sort_unstable_by(|a, b| b.cmp(a));
    shape
}

fn straight_cards(top: u8, suits: [Suit; 5]) -> Vec<Card> {
    (0..5)
        .map(|i| Card::new(Rank::from_value(top - i).unwrap(), suits[i as usize]))
        .collect()
}

const MIXED: [Suit; 5] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];

proptest! {
    #[test]
    fn compare_is_a_total_order(a in any_hand(), b in any_hand(), c in any_hand()) {
        let (ea, eb, ec) = (evaluate(&a), evaluate(&b), evaluate(&c));
        prop_assert_eq!(compare(&ea, &ea), Ordering::Equal);
        prop_assert_eq!(compare(&ea, &eb), compare(&eb, &ea).reverse());
        if compare(&ea, &eb) != Ordering::Less && compare(&eb, &ec) != Ordering::Less {
            prop_assert_ne!(compare(&ea, &ec), Ordering::Less);
        }
    }

    #[test]
    fn permutation_does_not_change_the_rank(
        (hand, shuffled) in any_hand().prop_flat_map(|h| (Just(h.clone()), Just(h).prop_shuffle()))
    ) {
        let a = evaluate(&hand);
        let b = evaluate(&shuffled);
        prop_assert_eq!(format!("{a:?}"), format!("{b:?}"));
    }

    #[test]
    fn category_matches_rank_shape(hand in any_hand()) {
        let e = evaluate(&hand);
        let shape = rank_counts(&hand);
        let expected: &[Category] = match shape.as_slice() {
            [4, 1] => &[Category::FourOfAKind],
            [3, 2] => &[Category::FullHouse],
            [3, 1, 1] => &[Category::ThreeOfAKind],
            [2, 2, 1] => &[Category::TwoPair],
            [2, 1, 1, 1] => &[Category::OnePair],
            _ => &[
                Category::RoyalFlush,
                Category::StraightFlush,
                Category::Flush,
                Category::Straight,
                Category::HighCard,
            ],
        };
        prop_assert!(expected.contains(&e.category()), "{:?} for shape {:?}", e, shape);
        let flush = hand.iter().all(|c| c.suit() == hand[0].suit());
        let flush_category =
            matches!(e.category(), Category::Flush | Category::StraightFlush | Category::RoyalFlush);
        prop_assert_eq!(flush, flush_category);
    }

    #[test]
    fn higher_straight_wins(top_a in 6u8..=14, top_b in 6u8..=14) {
        let a = evaluate(&straight_cards(top_a, MIXED));
        let b = evaluate(&straight_cards(top_b, MIXED));
        prop_assert_eq!(a.category(), Category::Straight);
        prop_assert_eq!(compare(&a, &b), top_a.cmp(&top_b));
    }

    #[test]
    fn ranked_hands_beat_not_rankable(hand in any_hand(), short in 0usize..5) {
        let ranked = evaluate(&hand);
        let unranked = evaluate(&hand[..short]);
        prop_assert_eq!(unranked.category(), Category::NotRankable);
        prop_assert_eq!(compare(&ranked, &unranked), Ordering::Greater);
    }

    #[test]
    fn evaluation_leaves_input_untouched(hand in any_hand()) {
        let before = hand.clone();
        let _ = evaluate(&hand);
        prop_assert_eq!(hand, before);
    }
}

#[test]
fn flush_kickers_decide_in_order() {
    let flush = |ranks: [Rank; 5], suit: Suit| -> HandRank {
        evaluate(&ranks.map(|r| Card::new(r, suit)))
    };
    use Rank::*;
    let a = flush([Ace, Jack, Nine, Seven, Three], Suit::Hearts);
    let b = flush([Ace, Jack, Nine, Seven, Two], Suit::Spades);
    let c = flush([Ace, Jack, Nine, Seven, Three], Suit::Clubs);
    assert_eq!(compare(&a, &b), Ordering::Greater);
    assert_eq!(compare(&a, &c), Ordering::Equal);
    assert_eq!(a, c);
}
