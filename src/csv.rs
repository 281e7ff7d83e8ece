//! CSV export of game scores.

use std::borrow::Cow;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::ops::{Index, IndexMut};
use std::path::Path;

use ordinalizer::Ordinal;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount, EnumIter};

use crate::aggregate::GameScores;

pub struct CsvWriter {
    writer: BufWriter<File>,
}
impl CsvWriter {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        Ok(Self { writer })
    }

    pub fn append<R>(&mut self, record: R) -> Result<(), io::Error>
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        let mut first = true;
        for datum in record.into_iter() {
            if first {
                first = false;
            } else {
                self.writer.write_all(b",")?;
            }
            self.writer.write_all(datum.as_ref().as_bytes())?;
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), io::Error> {
        self.writer.flush()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    items: Vec<Cow<'static, str>>,
}
impl Record {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut items = Vec::with_capacity(capacity);
        items.resize_with(capacity, || Cow::Borrowed(""));
        Self { items }
    }

    pub fn with_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let items = values
            .into_iter()
            .map(|value| Cow::Owned(value.to_string()))
            .collect();
        Self { items }
    }

    pub fn set(&mut self, ordinal: impl Into<usize>, value: impl ToString) {
        self.items[ordinal.into()] = Cow::Owned(value.to_string())
    }
}

impl IntoIterator for Record {
    type Item = Cow<'static, str>;
    type IntoIter = std::vec::IntoIter<Cow<'static, str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<I: Into<usize>> Index<I> for Record {
    type Output = Cow<'static, str>;

    fn index(&self, index: I) -> &Self::Output {
        &self.items[index.into()]
    }
}

impl<I: Into<usize>> IndexMut<I> for Record {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.items[index.into()]
    }
}

/// Columns of the score export, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Ordinal, EnumCount, EnumIter, Display)]
pub enum Column {
    GameId,
    Quarter,
    GoalsFor,
    GoalsAgainst,
}

impl From<Column> for usize {
    fn from(column: Column) -> Self {
        column.ordinal()
    }
}

pub const FINAL_LABEL: &str = "Final";

pub fn header() -> Record {
    Record::with_values(Column::iter())
}

/// One row per quarter followed by the final score. An absent `game_id` is written as an empty cell.
pub fn game_rows(game_id: Option<u64>, scores: &GameScores) -> Vec<Record> {
    let game_id = game_id.map(|id| id.to_string()).unwrap_or_default();
    let row = |label: String, goals_for: i64, goals_against: i64| {
        let mut record = Record::with_capacity(Column::COUNT);
        record.set(Column::GameId, &game_id);
        record.set(Column::Quarter, label);
        record.set(Column::GoalsFor, goals_for);
        record.set(Column::GoalsAgainst, goals_against);
        record
    };
    scores
        .quarters
        .iter()
        .map(|(quarter, score)| row(quarter.to_string(), score.goals_for, score.goals_against))
        .chain([row(
            FINAL_LABEL.to_string(),
            scores.final_score.goals_for,
            scores.final_score.goals_against,
        )])
        .collect()
}

/// Writes the header and the rows of each game to a new file at `path`.
pub fn export<'a>(
    path: impl AsRef<Path>,
    games: impl IntoIterator<Item = (Option<u64>, &'a GameScores)>,
) -> Result<(), io::Error> {
    let mut csv = CsvWriter::create(path)?;
    csv.append(header())?;
    for (game_id, scores) in games {
        for record in game_rows(game_id, scores) {
            csv.append(record)?;
        }
    }
    csv.flush()
}
