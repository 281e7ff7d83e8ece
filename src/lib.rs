//! Score derivation for netball games recorded as per-player, per-quarter statistics.
//! Aggregates goals into the four quarters of a game, sums them into a final score and
//! classifies the result. Also cross-checks two teams' records of the same game.

pub mod aggregate;
pub mod csv;
pub mod file;
pub mod print;
pub mod quarter;
pub mod reconcile;
pub mod record;
pub mod score;
pub mod tally;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
