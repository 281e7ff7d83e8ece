//! Per-quarter aggregation of stat records and the derived game score.

use std::ops::{Index, IndexMut};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use strum::{EnumCount, IntoEnumIterator};
use tracing::debug;

use crate::quarter::Quarter;
use crate::record::StatRecord;
use crate::score::{classify, GameResult, QuarterScore};

/// Scores for each of the four quarters. All four are always present; an unplayed or unrecorded
/// quarter holds `0-0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct QuarterScores {
    scores: [QuarterScore; Quarter::COUNT],
}
impl QuarterScores {
    pub fn new(scores: [QuarterScore; Quarter::COUNT]) -> Self {
        Self { scores }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Quarter, &QuarterScore)> {
        Quarter::iter().zip(self.scores.iter())
    }

    pub fn as_slice(&self) -> &[QuarterScore] {
        &self.scores
    }

    /// Adds the goals of a single record to its quarter. Returns `false`, leaving the scores
    /// untouched, if the record's quarter is not one of the four.
    pub fn accumulate(&mut self, record: &StatRecord) -> bool {
        match record.quarter() {
            None => false,
            Some(quarter) => {
                self[quarter] += QuarterScore::new(
                    i64::from(record.goals_for_or_zero()),
                    i64::from(record.goals_against_or_zero()),
                );
                true
            }
        }
    }

    pub fn flip(&self) -> QuarterScores {
        Self {
            scores: self.scores.map(|score| score.flip()),
        }
    }
}

impl Index<Quarter> for QuarterScores {
    type Output = QuarterScore;

    fn index(&self, quarter: Quarter) -> &Self::Output {
        &self.scores[quarter.index()]
    }
}

impl IndexMut<Quarter> for QuarterScores {
    fn index_mut(&mut self, quarter: Quarter) -> &mut Self::Output {
        &mut self.scores[quarter.index()]
    }
}

/// Serialised as a map keyed by quarter number: `{"1": {...}, "2": {...}, ...}`.
impl Serialize for QuarterScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Quarter::COUNT))?;
        for (quarter, score) in self.iter() {
            map.serialize_entry(&quarter.number().to_string(), score)?;
        }
        map.end()
    }
}

/// Sums goals for and against into each of the four quarters. Records may arrive in any order and
/// several may share a quarter (typically one per player). Missing goal counts count as zero.
/// Records whose quarter falls outside `1..=4` are left out of every quarter.
pub fn aggregate_quarters(records: &[StatRecord]) -> QuarterScores {
    let mut scores = QuarterScores::default();
    let mut excluded = 0;
    for record in records {
        if !scores.accumulate(record) {
            excluded += 1;
        }
    }
    if excluded > 0 {
        debug!("excluded {excluded} of {} records with no valid quarter", records.len());
    }
    scores
}

/// Sums the four quarter scores into the final score.
pub fn summarise(quarters: &QuarterScores) -> QuarterScore {
    quarters.as_slice().iter().sum()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScores {
    pub quarters: QuarterScores,
    pub final_score: QuarterScore,
}
impl GameScores {
    pub fn from_records(records: &[StatRecord]) -> Self {
        Self::from(aggregate_quarters(records))
    }

    pub fn result(&self) -> GameResult {
        classify(&self.final_score)
    }

    /// The same game from the opposing side's perspective.
    pub fn flip(&self) -> GameScores {
        Self {
            quarters: self.quarters.flip(),
            final_score: self.final_score.flip(),
        }
    }
}

impl From<QuarterScores> for GameScores {
    fn from(quarters: QuarterScores) -> Self {
        let final_score = summarise(&quarters);
        Self {
            quarters,
            final_score,
        }
    }
}
