use holdem_play::holdem::{GameError, Seating};
use proptest::prelude::*;

fn seating_with(stacks: &[u32]) -> Seating {
    let names: Vec<String> = (0..stacks.len()).map(|i| format!("p{i}")).collect();
    let mut seating = Seating::new(names).unwrap();
    seating.remove_losers(stacks);
    seating
}

proptest! {
    #[test]
    fn test_round_robin(stacks in prop::collection::vec(0u32..3, 2..=8)) {
        let seating = seating_with(&stacks);
        if seating.num_active() < 2 {
            for seat in 0..stacks.len() {
                prop_assert_eq!(Err(GameError::InsufficientActivePlayers), seating.next_to(seat));
            }
            return Ok(());
        }
        for seat in seating.active_seats() {
            let prev = seating.previous_than(seat).unwrap();
            let next = seating.next_to(seat).unwrap();
            prop_assert_eq!(seat, seating.next_to(prev).unwrap());
            prop_assert_eq!(seat, seating.previous_than(next).unwrap());
            prop_assert_ne!(seat, next);
        }
    }

    #[test]
    fn test_next_to_lands_on_active(stacks in prop::collection::vec(0u32..3, 2..=8), seat in 0usize..8) {
        let seating = seating_with(&stacks);
        prop_assume!(seating.num_active() >= 2);
        if seat >= stacks.len() {
            prop_assert_eq!(Err(GameError::UnknownPlayer(seat)), seating.next_to(seat));
        } else {
            let next = seating.next_to(seat).unwrap();
            prop_assert!(seating.is_active(next));
            // Nobody active is skipped on the way.
            let n = stacks.len();
            let mut s = (seat + 1) % n;
            while s != next {
                prop_assert!(!seating.is_active(s));
                s = (s + 1) % n;
            }
        }
    }
}
