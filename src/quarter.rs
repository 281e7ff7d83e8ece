//! The four fixed playing periods of a netball game.

use ordinalizer::Ordinal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter};

#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Ordinal,
    EnumCount,
    EnumIter,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Quarter {
    #[strum(serialize = "Q1")]
    First,
    #[strum(serialize = "Q2")]
    Second,
    #[strum(serialize = "Q3")]
    Third,
    #[strum(serialize = "Q4")]
    Fourth,
}
impl Quarter {
    /// Maps a recorded quarter number onto a [`Quarter`]. Anything outside `1..=4` yields `None`.
    pub fn from_number(number: i64) -> Option<Quarter> {
        match number {
            1 => Some(Quarter::First),
            2 => Some(Quarter::Second),
            3 => Some(Quarter::Third),
            4 => Some(Quarter::Fourth),
            _ => None,
        }
    }

    #[inline]
    pub fn number(&self) -> u8 {
        self.ordinal() as u8 + 1
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.ordinal()
    }
}

impl From<Quarter> for usize {
    fn from(quarter: Quarter) -> Self {
        quarter.ordinal()
    }
}
