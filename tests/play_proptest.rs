//! Property based tests over whole plays driven by random legal actions.
//!
//! Every reachable state is checked for chip conservation, card
//! conservation and turn order.
use std::collections::BTreeSet;

use holdem_play::core::{Card, Deck};
use holdem_play::holdem::{Action, Chips, Game, LegalAction, State, TableConfig};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

fn pick_action<R: Rng>(state: &State, rng: &mut R) -> (Action, Option<Chips>) {
    let legal = state.actions();
    match legal.choose(rng) {
        Some(LegalAction::BetOrRaise { min, max }) => {
            (Action::BetOrRaise, Some(rng.random_range(*min..=*max)))
        }
        Some(other) => (other.action(), None),
        None => (Action::Fold, None),
    }
}

fn table_chips(state: &State) -> Chips {
    state
        .players()
        .iter()
        .map(|p| state.chips(p.seat) + state.total_bet(p.seat))
        .sum()
}

fn assert_state_invariants(state: &State, expected_chips: Chips) -> Result<(), TestCaseError> {
    let seats = state.players().len();
    let bets: Chips = (0..seats).map(|s| state.total_bet(s)).sum();
    prop_assert_eq!(bets, state.pot());
    prop_assert_eq!(expected_chips, table_chips(state));
    for seat in 0..seats {
        prop_assert!(state.total_bet(seat) >= state.round_bet(seat));
        prop_assert!(state.starting_chips(seat) >= state.total_bet(seat));
    }

    match state.current_player() {
        Some(seat) => {
            prop_assert!(!state.is_final());
            prop_assert!(!state.folded().get(seat));
            prop_assert!(state.chips(seat) > 0);
        }
        None => prop_assert!(state.is_final()),
    }

    // The deck and every dealt card make up the full deck exactly once.
    let mut seen: Vec<Card> = state.deck().iter().copied().collect();
    seen.extend(state.community().iter().copied());
    for seat in 0..seats {
        if let Some(hole) = state.hole(seat) {
            seen.extend(hole.cards().iter().copied());
        }
    }
    let unique: BTreeSet<Card> = seen.iter().copied().collect();
    prop_assert_eq!(52, seen.len());
    prop_assert_eq!(unique, Deck::new().into_iter().collect::<BTreeSet<Card>>());
    Ok(())
}

proptest! {
    #[test]
    fn test_random_play_invariants(players in 2usize..=8, seed in any::<u64>()) {
        let names: Vec<String> = (0..players).map(|i| format!("p{i}")).collect();
        let mut game = Game::with_rng(names, TableConfig::default(), StdRng::seed_from_u64(seed)).unwrap();
        let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
        let expected = 2_000 * players as Chips;

        let mut state = game.initial_state(None).unwrap();
        let mut steps = 0;
        while !state.is_final() {
            assert_state_invariants(&state, expected)?;
            let (action, amount) = pick_action(&state, &mut rng);
            let next = state.result(action, amount).unwrap();
            prop_assert_eq!(state.id() + 1, next.id());
            state = next;
            steps += 1;
            prop_assert!(steps < 1_000);
        }
        assert_state_invariants(&state, expected)?;
        prop_assert!(!state.winners().empty());
        prop_assert_eq!(5, state.community().len());
        let paid: Chips = (0..players).map(|s| state.winnings(s)).sum();
        prop_assert!(paid > 0);
    }

    #[test]
    fn test_chips_conserved_across_plays(players in 2usize..=6, seed in any::<u64>()) {
        let names: Vec<String> = (0..players).map(|i| format!("p{i}")).collect();
        let mut game = Game::with_rng(names, TableConfig::default(), StdRng::seed_from_u64(seed)).unwrap();
        let mut rng = StdRng::seed_from_u64(seed.rotate_left(7));
        let expected = 2_000 * players as Chips;

        let mut prior: Option<State> = None;
        for _ in 0..20 {
            let mut state = game.initial_state(prior.as_ref()).unwrap();
            while !state.is_final() {
                let (action, amount) = pick_action(&state, &mut rng);
                state = state.result(action, amount).unwrap();
            }
            prop_assert_eq!(expected, table_chips(&state));
            for seat in 0..players {
                prop_assert_eq!(state.chips(seat) > 0, state.seating().is_active(seat));
            }
            if state.is_endgame() {
                break;
            }
            prior = Some(state);
        }
    }

    #[test]
    fn test_rejected_actions_change_nothing(seed in any::<u64>(), amount in any::<u32>()) {
        let names = vec!["a", "b", "c"];
        let mut game = Game::with_rng(names, TableConfig::default(), StdRng::seed_from_u64(seed)).unwrap();
        let state = game.initial_state(None).unwrap();
        let before = state.clone();
        for action in [Action::Fold, Action::Call, Action::Check, Action::BetOrRaise] {
            let _ = state.result(action, Some(amount));
        }
        prop_assert_eq!(before, state);
    }
}
