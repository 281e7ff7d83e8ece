//! Cross-checks two teams' records of the same game.
//!
//! Each team records its own goals as _for_ and the opposition's as _against_, so one side's
//! goals for in a quarter must equal the other side's goals against, and vice versa.

use std::fmt::{Display, Formatter};

use thiserror::Error;
use tracing::warn;

use crate::aggregate::GameScores;
use crate::quarter::Quarter;
use crate::score::QuarterScore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{quarter} mismatch: ours {}-{}, theirs {}-{}", .ours.goals_for, .ours.goals_against, .theirs.goals_for, .theirs.goals_against)]
pub struct ScoreMismatch {
    pub quarter: Quarter,
    pub ours: QuarterScore,
    pub theirs: QuarterScore,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} quarter(s) disagree{}", .0.len(), DisplayMismatches(.0))]
pub struct ScoreMismatches(pub Vec<ScoreMismatch>);

struct DisplayMismatches<'a>(&'a [ScoreMismatch]);

impl Display for DisplayMismatches<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for mismatch in self.0 {
            write!(f, "; {mismatch}")?;
        }
        Ok(())
    }
}

/// Compares `ours` against `theirs` quarter by quarter, reporting every quarter that disagrees.
/// Final scores are not compared separately; they agree whenever all quarters do.
pub fn reconcile(ours: &GameScores, theirs: &GameScores) -> Result<(), ScoreMismatches> {
    let mismatches: Vec<_> = ours
        .quarters
        .iter()
        .zip(theirs.quarters.iter())
        .filter(|((_, our_score), (_, their_score))| our_score.flip() != **their_score)
        .map(|((quarter, our_score), (_, their_score))| ScoreMismatch {
            quarter,
            ours: *our_score,
            theirs: *their_score,
        })
        .collect();

    if mismatches.is_empty() {
        Ok(())
    } else {
        for mismatch in &mismatches {
            warn!("{mismatch}");
        }
        Err(ScoreMismatches(mismatches))
    }
}
