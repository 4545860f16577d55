use tracing::{Level, event, instrument};

use crate::core::PlayerBitSet;

use super::{Chips, GameError, RemainderPolicy, Round, State, get_winners};

/// Pay out the pot of a play that reached showdown and close it.
///
/// The pot is taken apart in tiers. Each tier is the smallest contribution
/// still outstanding times the number of seats that made it, and it can
/// only be won by the contributors that didn't fold. A player who went all
/// in for less than the others can therefore only win the tiers they paid
/// into. A tier that every contributor folded out of goes to the winners of
/// the tier before it.
///
/// The returned state is final: stacks carry the winnings, bets are
/// zeroed, and seats left without chips are out of the game.
#[instrument(level = "debug", skip(state), fields(pot = state.pot()))]
pub(crate) fn settle(mut state: State) -> Result<State, GameError> {
    let num_seats = state.seating.num_starting();
    let mut outstanding = state.total_bets.clone();
    let mut winnings: Vec<Chips> = vec![0; num_seats];
    let mut winners = PlayerBitSet::default();
    let mut previous_winners: Vec<usize> = Vec::new();

    loop {
        let contributors: Vec<usize> = (0..num_seats).filter(|&s| outstanding[s] > 0).collect();
        let Some(level) = contributors.iter().map(|&s| outstanding[s]).min() else {
            break;
        };
        let tier = level * contributors.len() as Chips;
        for &seat in &contributors {
            outstanding[seat] -= level;
        }

        let eligible: Vec<usize> = contributors
            .iter()
            .copied()
            .filter(|&s| !state.folded.get(s))
            .collect();
        let tier_winners = if !eligible.is_empty() {
            let tier_winners = get_winners(&eligible, &state.holes, &state.community)?;
            winners = winners | tier_winners.iter().copied().collect::<PlayerBitSet>();
            previous_winners.clone_from(&tier_winners);
            tier_winners
        } else if !previous_winners.is_empty() {
            previous_winners.clone()
        } else {
            contributors.clone()
        };

        let shares = split(
            tier,
            &tier_winners,
            state.dealer,
            num_seats,
            state.remainder_policy,
        );
        event!(
            Level::INFO,
            tier,
            ?eligible,
            ?tier_winners,
            ?shares,
            "pot tier settled"
        );
        for (seat, share) in shares {
            winnings[seat] += share;
        }
    }

    state.starting_chips = (0..num_seats)
        .map(|seat| state.chips(seat) + winnings[seat])
        .collect();
    state.total_bets.iter_mut().for_each(|b| *b = 0);
    state.round_bets.iter_mut().for_each(|b| *b = 0);
    state.seating.remove_losers(&state.starting_chips);
    state.round = Round::End;
    state.current_player = None;
    state.round_last_better = None;
    state.is_final = true;
    state.winners = winners;
    state.winnings = winnings;
    Ok(state)
}

/// Divide a tier between its winners according to the remainder policy.
fn split(
    tier: Chips,
    tier_winners: &[usize],
    dealer: usize,
    num_seats: usize,
    policy: RemainderPolicy,
) -> Vec<(usize, Chips)> {
    if tier_winners.is_empty() {
        return Vec::new();
    }
    let count = tier_winners.len() as Chips;
    match policy {
        RemainderPolicy::CeilEach => {
            let share = tier.div_ceil(count);
            tier_winners.iter().map(|&s| (s, share)).collect()
        }
        RemainderPolicy::OddChipsLeftOfDealer => {
            let share = tier / count;
            let odd = (tier % count) as usize;
            let mut ordered = tier_winners.to_vec();
            ordered.sort_by_key(|&s| (s + num_seats - dealer - 1) % num_seats);
            ordered
                .into_iter()
                .enumerate()
                .map(|(i, s)| (s, share + Chips::from(i < odd)))
                .collect()
        }
    }
}
