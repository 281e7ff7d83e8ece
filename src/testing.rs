//! Testing helpers.

use crate::record::StatRecord;

/// A record with both goal counts present.
pub fn record(quarter: i64, goals_for: i32, goals_against: i32) -> StatRecord {
    StatRecord::new(quarter, Some(goals_for), Some(goals_against))
}

/// A record attributed to a player.
pub fn player_record(player_id: u64, quarter: i64, goals_for: i32, goals_against: i32) -> StatRecord {
    record(quarter, goals_for, goals_against).with_player(player_id)
}

/// One record per quarter, in order, from `(for, against)` pairs.
pub fn quarter_records(scores: [(i32, i32); 4]) -> Vec<StatRecord> {
    scores
        .into_iter()
        .enumerate()
        .map(|(index, (goals_for, goals_against))| record(index as i64 + 1, goals_for, goals_against))
        .collect()
}
