//! Per-player goal tallies.

use rustc_hash::FxHashMap;

use crate::aggregate::{summarise, QuarterScores};
use crate::record::StatRecord;
use crate::score::QuarterScore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerTally {
    pub player_id: Option<u64>,
    pub quarters: QuarterScores,
    pub total: QuarterScore,
}

/// Groups records by player and aggregates each player's quarters. Records without a player are
/// grouped together under `None`. Sorted by most goals scored, then by player.
pub fn player_tallies(records: &[StatRecord]) -> Vec<PlayerTally> {
    let mut by_player: FxHashMap<Option<u64>, QuarterScores> =
        FxHashMap::with_capacity_and_hasher(records.len(), Default::default());
    for record in records {
        by_player.entry(record.player_id).or_default().accumulate(record);
    }

    let mut tallies: Vec<_> = by_player
        .into_iter()
        .map(|(player_id, quarters)| PlayerTally {
            player_id,
            total: summarise(&quarters),
            quarters,
        })
        .collect();
    tallies.sort_by(|a, b| {
        b.total
            .goals_for
            .cmp(&a.total.goals_for)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    tallies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::GameScores;
    use crate::quarter::Quarter;
    use crate::testing::{player_record, record};

    #[test]
    fn empty() {
        assert!(player_tallies(&[]).is_empty());
    }

    #[test]
    fn grouped_and_sorted() {
        let records = [
            player_record(9, 1, 2, 0),
            player_record(4, 1, 5, 1),
            player_record(9, 3, 3, 2),
            player_record(2, 2, 5, 0),
            record(4, 0, 3),
        ];
        let tallies = player_tallies(&records);
        let order: Vec<_> = tallies.iter().map(|tally| tally.player_id).collect();
        assert_eq!(vec![Some(2), Some(4), Some(9), None], order);

        let nine = &tallies[2];
        assert_eq!(QuarterScore::new(2, 0), nine.quarters[Quarter::First]);
        assert_eq!(QuarterScore::new(3, 2), nine.quarters[Quarter::Third]);
        assert_eq!(QuarterScore::new(5, 2), nine.total);

        let unattributed = &tallies[3];
        assert_eq!(QuarterScore::new(0, 3), unattributed.total);
    }

    #[test]
    fn tallies_sum_to_game() {
        let records = [
            player_record(1, 1, 4, 1),
            player_record(2, 1, 2, 2),
            player_record(1, 2, 3, 0),
            player_record(3, 4, 1, 5),
            player_record(2, 7, 9, 9),
        ];
        let game = GameScores::from_records(&records);
        let total: QuarterScore = player_tallies(&records).iter().map(|tally| tally.total).sum();
        assert_eq!(game.final_score, total);
    }
}
