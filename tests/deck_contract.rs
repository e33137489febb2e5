use poker_hands::deck::{CardSource, Deck, DeckError, SharedDeck};
use poker_hands::evaluator::StandardRanker;
use poker_hands::hand::{Hand, HandError, HAND_SIZE};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::thread;

#[test]
fn empty_deck_is_a_hard_failure() {
    let mut deck = Deck::shuffled(3);
    let all = deck.pick(52).expect("full deck");
    assert_eq!(all.len(), 52);
    assert_eq!(deck.remaining(), 0);
    assert_eq!(deck.pick(5), Err(DeckError::Empty));
    let err = Hand::deal(&mut deck, &StandardRanker::default()).unwrap_err();
    assert_eq!(err, HandError::InsufficientCards);
}

#[test]
fn over_picking_is_rejected_without_drawing() {
    let mut deck = Deck::standard();
    deck.pick(49).unwrap();
    assert_eq!(deck.pick(5), Err(DeckError::InvalidArgument { requested: 5, remaining: 3 }));
    assert_eq!(deck.remaining(), 3);
    let err = Hand::deal(&mut deck, &StandardRanker::default()).unwrap_err();
    assert!(matches!(err, HandError::Deck(DeckError::InvalidArgument { remaining: 3, .. })));
}

#[test]
fn seeded_shuffles_repeat() {
    assert_eq!(Deck::shuffled(11).as_slice(), Deck::shuffled(11).as_slice());
    assert_ne!(Deck::shuffled(11).as_slice(), Deck::standard().as_slice());
}

#[test]
fn rng_driven_shuffle_keeps_every_card() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut deck = Deck::standard();
    deck.shuffle_with(&mut rng);
    assert_ne!(deck.as_slice(), Deck::standard().as_slice());
    let mut shuffled = deck.as_slice().to_vec();
    let mut fresh = Deck::standard().as_slice().to_vec();
    shuffled.sort();
    fresh.sort();
    assert_eq!(shuffled, fresh);

    let mut again = Deck::standard();
    again.shuffle_with(&mut ChaCha8Rng::seed_from_u64(5));
    assert_eq!(deck.as_slice(), again.as_slice());
}

#[test]
fn shared_deck_never_hands_out_a_card_twice() {
    let shared = SharedDeck::new(Deck::shuffled(42));
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let mut source = shared.clone();
            thread::spawn(move || {
                let ranker = StandardRanker::default();
                let mut dealt = Vec::new();
                while let Ok(hand) = Hand::deal(&mut source, &ranker) {
                    dealt.extend_from_slice(hand.cards());
                }
                dealt
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for worker in workers {
        for card in worker.join().unwrap() {
            assert!(seen.insert(card), "card {card} dealt twice");
        }
    }
    assert_eq!(seen.len(), 52 / HAND_SIZE * HAND_SIZE);
    assert_eq!(shared.remaining(), 52 % HAND_SIZE);
}
