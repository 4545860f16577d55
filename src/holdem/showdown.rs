use tracing::{Level, event};

use crate::core::{BestHand, Card, HandComparison, Hole, evaluate};

use super::GameError;

/// Find the seats holding the best hand among `players`.
///
/// Every candidate is evaluated against every other one and dropped as soon
/// as somebody strictly beats them, so ties of any size come back as
/// several winners. The result keeps the order of `players`. A single
/// candidate wins without being evaluated.
///
/// ```
/// use holdem_play::core::{Hole, parse_cards};
/// use holdem_play::holdem::get_winners;
///
/// let holes = vec![
///     Some(Hole::new_from_str("AsAd").unwrap()),
///     Some(Hole::new_from_str("KsKd").unwrap()),
/// ];
/// let board = parse_cards("2c7h9dTcJs").unwrap();
/// assert_eq!(vec![0], get_winners(&[0, 1], &holes, &board).unwrap());
/// ```
pub fn get_winners(
    players: &[usize],
    holes: &[Option<Hole>],
    community: &[Card],
) -> Result<Vec<usize>, GameError> {
    if players.len() <= 1 {
        return Ok(players.to_vec());
    }

    let hands = players
        .iter()
        .map(|&seat| {
            let hole = holes
                .get(seat)
                .copied()
                .flatten()
                .ok_or(GameError::UnknownPlayer(seat))?;
            Ok((seat, evaluate(&hole, community)?))
        })
        .collect::<Result<Vec<(usize, BestHand)>, GameError>>()?;

    let winners: Vec<usize> = hands
        .iter()
        .filter(|(_, hand)| {
            hands
                .iter()
                .all(|(_, other)| hand.compare_to(other) != HandComparison::Lose)
        })
        .map(|(seat, _)| *seat)
        .collect();

    for (seat, hand) in &hands {
        event!(Level::TRACE, seat, %hand, "showdown hand");
    }
    Ok(winners)
}

#[cfg(test)]
mod tests {
    use crate::core::parse_cards;

    use super::*;

    fn holes(holes: &[&str]) -> Vec<Option<Hole>> {
        holes
            .iter()
            .map(|h| Some(Hole::new_from_str(h).unwrap()))
            .collect()
    }

    #[test]
    fn test_single_candidate_short_circuits() {
        // No hole cards needed when nobody else is left.
        assert_eq!(Ok(vec![3]), get_winners(&[3], &[], &[]));
    }

    #[test]
    fn test_three_way_tie() {
        let board = parse_cards("AsKsQsJsTs").unwrap();
        let holes = holes(&["2c3c", "4d5d", "6h7h"]);
        assert_eq!(Ok(vec![0, 1, 2]), get_winners(&[0, 1, 2], &holes, &board));
    }

    #[test]
    fn test_kicker_decides() {
        let board = parse_cards("AhAd7c5s2h").unwrap();
        let holes = holes(&["Kc3d", "Qc3h", "Ks4c"]);
        // Both king kickers tie, the queen loses.
        assert_eq!(Ok(vec![0, 2]), get_winners(&[0, 1, 2], &holes, &board));
    }

    #[test]
    fn test_only_candidates_count() {
        let board = parse_cards("2c7h9dTcJs").unwrap();
        let holes = holes(&["AsAd", "KsKd", "QsQd"]);
        assert_eq!(Ok(vec![1]), get_winners(&[1, 2], &holes, &board));
    }

    #[test]
    fn test_missing_hole() {
        let board = parse_cards("2c7h9dTcJs").unwrap();
        let mut holes = holes(&["AsAd", "KsKd"]);
        holes[1] = None;
        assert_eq!(
            Err(GameError::UnknownPlayer(1)),
            get_winners(&[0, 1], &holes, &board)
        );
    }
}
