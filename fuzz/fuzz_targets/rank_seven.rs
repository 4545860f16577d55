#![no_main]

use holdem_play::core::{Hole, HandComparison, Rankable, evaluate, parse_cards};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(cards) = parse_cards(s) else {
        return;
    };
    if cards.len() != 7 {
        return;
    }
    let hole = Hole::new(cards[0], cards[1]);
    let best = evaluate(&hole, &cards[2..]).unwrap();

    // No five card subset may beat the best hand found from all seven.
    for skip_a in 0..7 {
        for skip_b in (skip_a + 1)..7 {
            let five: Vec<_> = cards
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip_a && *i != skip_b)
                .map(|(_, c)| *c)
                .collect();
            assert_ne!(HandComparison::Lose, best.compare_to(&five.best_hand()));
        }
    }
});
