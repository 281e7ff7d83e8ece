use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Goals for and against over some span of play: a single quarter or the whole game. Sums saturate
/// at the `i64` bounds rather than overflow.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterScore {
    #[serde(rename = "for")]
    pub goals_for: i64,
    #[serde(rename = "against")]
    pub goals_against: i64,
}
impl QuarterScore {
    pub fn new(goals_for: i64, goals_against: i64) -> Self {
        Self {
            goals_for,
            goals_against,
        }
    }

    pub fn nil_all() -> Self {
        Self::default()
    }

    pub fn margin(&self) -> i64 {
        self.goals_for.saturating_sub(self.goals_against)
    }

    /// The same score as seen by the opposing side.
    pub fn flip(&self) -> QuarterScore {
        Self {
            goals_for: self.goals_against,
            goals_against: self.goals_for,
        }
    }

    pub fn result(&self) -> GameResult {
        classify(self)
    }
}

impl Add for QuarterScore {
    type Output = QuarterScore;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            goals_for: self.goals_for.saturating_add(rhs.goals_for),
            goals_against: self.goals_against.saturating_add(rhs.goals_against),
        }
    }
}

impl AddAssign for QuarterScore {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for QuarterScore {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(QuarterScore::default(), Add::add)
    }
}

impl<'a> Sum<&'a QuarterScore> for QuarterScore {
    fn sum<I: Iterator<Item = &'a QuarterScore>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Classifies a final score. Defined for every input, negative counts included; validating them is
/// left to whoever produced the records.
pub fn classify(final_score: &QuarterScore) -> GameResult {
    use std::cmp::Ordering;
    match final_score.goals_for.cmp(&final_score.goals_against) {
        Ordering::Greater => GameResult::Win,
        Ordering::Less => GameResult::Loss,
        Ordering::Equal => GameResult::Draw,
    }
}
