use crate::database::models::Standing;

use super::types::{Pairing, Pairings};

/// Pair standings entries by position: (0, 1), (2, 3), ...
///
/// Input order is kept as given. There is no rematch check. With an odd
/// count the last entry is returned in `unpaired`.
pub fn pair_adjacent(standings: &[Standing]) -> Pairings {
    let mut chunks = standings.chunks_exact(2);
    let pairs = chunks
        .by_ref()
        .map(|pair| Pairing::new(&pair[0], &pair[1]))
        .collect();
    let unpaired = chunks.remainder().first().cloned();

    if let Some(player) = &unpaired {
        log::warn!(
            "Odd number of players ({}), {} (id {}) is left without an opponent",
            standings.len(),
            player.name,
            player.id
        );
    }

    Pairings { pairs, unpaired }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(id: i64, name: &str, wins: i32) -> Standing {
        Standing {
            id,
            name: name.to_string(),
            wins,
            matches: wins,
        }
    }

    #[test]
    fn test_empty_field() {
        let pairings = pair_adjacent(&[]);
        assert!(pairings.is_empty());
        assert!(pairings.is_complete());
    }

    #[test]
    fn test_four_players_pair_in_order() {
        let standings = vec![
            standing(1, "A", 0),
            standing(2, "B", 0),
            standing(3, "C", 0),
            standing(4, "D", 0),
        ];

        let pairings = pair_adjacent(&standings);

        let ids: Vec<_> = pairings.pairs.iter().map(Pairing::ids).collect();
        assert_eq!(ids, vec![(1, 2), (3, 4)]);
        assert_eq!(pairings.pairs[0].name1, "A");
        assert_eq!(pairings.pairs[1].name2, "D");
        assert!(pairings.is_complete());
    }

    #[test]
    fn test_input_order_is_not_resorted() {
        let standings = vec![
            standing(7, "G", 3),
            standing(2, "B", 0),
            standing(5, "E", 1),
            standing(1, "A", 2),
        ];

        let ids: Vec<_> = pair_adjacent(&standings)
            .pairs
            .iter()
            .map(Pairing::ids)
            .collect();
        assert_eq!(ids, vec![(7, 2), (5, 1)]);
    }

    #[test]
    fn test_odd_field_reports_leftover() {
        let standings = vec![
            standing(1, "A", 0),
            standing(2, "B", 0),
            standing(3, "C", 1),
        ];

        let pairings = pair_adjacent(&standings);

        assert_eq!(pairings.len(), 1);
        assert_eq!(pairings.unpaired, Some(standing(3, "C", 1)));
        assert!(!pairings.is_complete());
    }

    #[test]
    fn test_every_player_appears_at_most_once() {
        let standings: Vec<_> = (1..=9).map(|id| standing(id, "P", (id % 3) as i32)).collect();

        let pairings = pair_adjacent(&standings);

        assert_eq!(pairings.len(), standings.len() / 2);
        let mut seen: Vec<_> = pairings
            .pairs
            .iter()
            .flat_map(|p| [p.id1, p.id2])
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), pairings.len() * 2);
    }
}
