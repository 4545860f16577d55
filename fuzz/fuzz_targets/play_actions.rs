#![no_main]

use arbitrary::Arbitrary;
use holdem_play::core::Deck;
use holdem_play::holdem::{Action, Game, GameError, TableConfig};
use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Arbitrary)]
struct Input {
    players: u8,
    seed: u64,
    actions: Vec<(Action, Option<u32>)>,
}

fuzz_target!(|input: Input| {
    let players = 2 + (input.players % 7) as usize;
    let names: Vec<String> = (0..players).map(|i| format!("p{i}")).collect();
    let mut game =
        Game::with_rng(names, TableConfig::default(), StdRng::seed_from_u64(input.seed)).unwrap();
    let mut deck = Deck::new();
    deck.shuffle(&mut StdRng::seed_from_u64(input.seed));
    let mut state = game.initial_state_with_deck(None, deck).unwrap();
    let total = state.pot() + (0..players).map(|s| state.chips(s)).sum::<u32>();

    for (action, amount) in input.actions {
        match state.result(action, amount) {
            Ok(next) => state = next,
            Err(
                GameError::IllegalAction(_)
                | GameError::OutOfRangeBet { .. }
                | GameError::MissingBetAmount
                | GameError::HandOver,
            ) => {}
            Err(e) => panic!("unexpected error {e}"),
        }
        let now = state.pot() + (0..players).map(|s| state.chips(s)).sum::<u32>();
        assert_eq!(total, now);
        for seat in 0..players {
            assert!(state.total_bet(seat) >= state.round_bet(seat));
        }
        if let Some(seat) = state.current_player() {
            assert!(!state.folded().get(seat));
        }
    }
});
