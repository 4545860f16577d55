use criterion::{Criterion, criterion_group, criterion_main};
use holdem_play::core::{Deck, Hole, Rankable, evaluate};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sample(n: usize) -> Vec<holdem_play::core::Card> {
    let mut deck = Deck::new();
    deck.shuffle(&mut StdRng::seed_from_u64(420));
    deck.into_iter().take(n).collect()
}

fn rank_one(c: &mut Criterion) {
    let cards = sample(5);
    c.bench_function("Rank one 5 card hand", move |b| {
        b.iter(|| cards.best_hand())
    });
}

fn rank_best_seven(c: &mut Criterion) {
    let cards = sample(7);
    let hole = Hole::new(cards[0], cards[1]);
    let board = cards[2..].to_vec();
    c.bench_function("Rank best 5 card hand from 7", move |b| {
        b.iter(|| evaluate(&hole, &board))
    });
}

criterion_group!(benches, rank_one, rank_best_seven);
criterion_main!(benches);
