use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_hands::cards::parse_cards;
use poker_hands::deck::{CardSource, Deck};
use poker_hands::evaluator::{compare, evaluate, RankingRules, HandRanker, StandardRanker};

fn bench_evaluate(c: &mut Criterion) {
    let cases = [
        ("high_card", "Ah Kd 7s 5c 2d"),
        ("two_pair", "4s 4h 9d 9c 2h"),
        ("full_house", "As Ah Ad Ks Kh"),
        ("royal_flush", "As Ks Qs Js Ts"),
    ];
    let mut g = c.benchmark_group("evaluate");
    for (name, hand) in cases {
        let cards = parse_cards(hand).expect("valid bench hand");
        g.bench_with_input(BenchmarkId::new(name, hand), &cards, |b, input| {
            b.iter(|| evaluate(black_box(input)))
        });
    }
    g.finish();
}

fn bench_wheel_rules(c: &mut Criterion) {
    let ranker = StandardRanker::new(RankingRules::ACE_LOW);
    let wheel = parse_cards("Ac 2d 3h 4s 5c").expect("valid bench hand");
    c.bench_function("rank_wheel_ace_low", |b| b.iter(|| ranker.rank(black_box(&wheel))));
}

fn bench_showdown(c: &mut Criterion) {
    let mut deck = Deck::shuffled(1);
    let hands: Vec<_> = (0..10).map(|_| evaluate(&deck.pick(5).expect("enough cards"))).collect();
    c.bench_function("compare_ten_hands", |b| {
        b.iter(|| {
            black_box(&hands).iter().fold(&hands[0], |best, h| {
                if compare(h, best).is_gt() {
                    h
                } else {
                    best
                }
            })
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_wheel_rules, bench_showdown);
criterion_main!(benches);
