//! Recorded in-game statistics and their retrieval from JSON files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::file;
use crate::file::ReadJsonFile;
use crate::quarter::Quarter;

/// One row of recorded statistics for a player within a quarter of a game. The quarter is kept as
/// recorded; numbers outside `1..=4` are not rejected here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRecord {
    #[serde(default)]
    pub game_id: Option<u64>,
    #[serde(default)]
    pub team_id: Option<u64>,
    #[serde(default)]
    pub player_id: Option<u64>,
    pub quarter: i64,
    #[serde(default)]
    pub goals_for: Option<i32>,
    #[serde(default)]
    pub goals_against: Option<i32>,
}
impl StatRecord {
    pub fn new(quarter: i64, goals_for: Option<i32>, goals_against: Option<i32>) -> Self {
        Self {
            quarter,
            goals_for,
            goals_against,
            ..Self::default()
        }
    }

    pub fn with_game(mut self, game_id: u64) -> Self {
        self.game_id = Some(game_id);
        self
    }

    pub fn with_team(mut self, team_id: u64) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn with_player(mut self, player_id: u64) -> Self {
        self.player_id = Some(player_id);
        self
    }

    #[inline]
    pub fn quarter(&self) -> Option<Quarter> {
        Quarter::from_number(self.quarter)
    }

    #[inline]
    pub fn goals_for_or_zero(&self) -> i32 {
        self.goals_for.unwrap_or_default()
    }

    #[inline]
    pub fn goals_against_or_zero(&self) -> i32 {
        self.goals_against.unwrap_or_default()
    }
}

#[derive(Debug)]
pub enum Predicate {
    Game { game_id: u64 },
    Team { team_id: u64 },
}
impl Predicate {
    pub fn closure(self) -> impl FnMut(&StatRecord) -> bool {
        move |record| match &self {
            Predicate::Game { game_id } => record.game_id == Some(*game_id),
            Predicate::Team { team_id } => record.team_id == Some(*team_id),
        }
    }
}

pub type PredicateClosure = Box<dyn FnMut(&StatRecord) -> bool>;

pub struct PredicateClosures {
    closures: Vec<PredicateClosure>,
}

impl<P: Into<PredicateClosure>> From<Vec<P>> for PredicateClosures {
    fn from(closurelikes: Vec<P>) -> Self {
        Self {
            closures: closurelikes.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<PredicateClosures> for PredicateClosure {
    fn from(mut predicates: PredicateClosures) -> Self {
        Box::new(move |record| {
            for closure in predicates.closures.iter_mut() {
                if !closure(record) {
                    return false;
                }
            }
            true
        })
    }
}

impl From<Predicate> for PredicateClosure {
    fn from(predicate: Predicate) -> Self {
        Box::new(predicate.closure())
    }
}

/// Records that cannot be summed into one team's view of one game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MixedRecords {
    #[error("records span more than one game: {0:?}")]
    Games(Vec<Option<u64>>),

    #[error("records span more than one team: {0:?}")]
    Teams(Vec<Option<u64>>),
}

fn distinct(ids: impl Iterator<Item = Option<u64>>) -> Vec<Option<u64>> {
    let mut ids: Vec<_> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Checks that all records belong to a single game and a single team. A missing identifier counts as
/// its own value, so records with and without a game id are mixed.
pub fn check_single_game_and_team(records: &[StatRecord]) -> Result<(), MixedRecords> {
    let games = distinct(records.iter().map(|record| record.game_id));
    if games.len() > 1 {
        return Err(MixedRecords::Games(games));
    }
    let teams = distinct(records.iter().map(|record| record.team_id));
    if teams.len() > 1 {
        return Err(MixedRecords::Teams(teams));
    }
    Ok(())
}

/// Reads a JSON array of records from a single file.
pub fn read_from_file(path: impl AsRef<Path>) -> anyhow::Result<Vec<StatRecord>> {
    Vec::<StatRecord>::read_json_file(path)
}

/// Reads every `.json` file under `path` (or `path` itself, if it is a file), keeping only those
/// records accepted by the predicate.
pub fn read_from_dir(
    path: impl AsRef<Path>,
    closurelike: impl Into<PredicateClosure>,
) -> anyhow::Result<Vec<StatRecord>> {
    let mut files = vec![];
    file::recurse_dir(path.as_ref().into(), &mut files, &mut |ext| ext == "json")?;
    let mut closure = closurelike.into();
    let mut records = vec![];
    for file in files {
        let file_records = read_from_file(&file)?;
        let read = file_records.len();
        let before = records.len();
        records.extend(file_records.into_iter().filter(|record| closure(record)));
        debug!(
            "read {read} records from {}, kept {}",
            file.display(),
            records.len() - before
        );
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("netball-stats-record-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn deserialize_nullable_goals() {
        let json = r#"[
            {"gameId": 7, "playerId": 3, "quarter": 1, "goalsFor": null},
            {"quarter": 2, "goalsFor": 4, "goalsAgainst": 1}
        ]"#;
        let records: Vec<StatRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(2, records.len());
        assert_eq!(Some(7), records[0].game_id);
        assert_eq!(Some(3), records[0].player_id);
        assert_eq!(None, records[0].team_id);
        assert_eq!(None, records[0].goals_for);
        assert_eq!(None, records[0].goals_against);
        assert_eq!(0, records[0].goals_for_or_zero());
        assert_eq!(0, records[0].goals_against_or_zero());
        assert_eq!(StatRecord::new(2, Some(4), Some(1)), records[1]);
    }

    #[test]
    fn quarter_out_of_range() {
        assert_eq!(Some(Quarter::Third), StatRecord::new(3, None, None).quarter());
        assert_eq!(None, StatRecord::new(0, None, None).quarter());
        assert_eq!(None, StatRecord::new(5, None, None).quarter());
    }

    #[test]
    fn predicates() {
        let record = StatRecord::new(1, Some(1), Some(0)).with_game(10).with_team(20);
        assert!(Predicate::Game { game_id: 10 }.closure()(&record));
        assert!(!Predicate::Game { game_id: 11 }.closure()(&record));
        assert!(Predicate::Team { team_id: 20 }.closure()(&record));

        let mut all: PredicateClosure = PredicateClosures::from(vec![
            Predicate::Game { game_id: 10 },
            Predicate::Team { team_id: 21 },
        ])
        .into();
        assert!(!all(&record));

        let mut none: PredicateClosure = PredicateClosures::from(Vec::<Predicate>::new()).into();
        assert!(none(&record));
    }

    #[test]
    fn single_game_and_team() {
        assert_eq!(Ok(()), check_single_game_and_team(&[]));
        let records = [
            StatRecord::new(1, Some(2), Some(1)).with_game(5).with_team(1),
            StatRecord::new(2, Some(1), Some(0)).with_game(5).with_team(1),
        ];
        assert_eq!(Ok(()), check_single_game_and_team(&records));

        let records = [StatRecord::new(1, Some(2), None), StatRecord::new(3, None, Some(4))];
        assert_eq!(Ok(()), check_single_game_and_team(&records));
    }

    #[test]
    fn mixed_games_rejected() {
        let records = [
            StatRecord::new(1, Some(2), Some(1)).with_game(6).with_team(1),
            StatRecord::new(1, Some(3), Some(3)).with_game(5).with_team(1),
            StatRecord::new(2, Some(1), Some(0)).with_team(1),
        ];
        assert_eq!(
            Err(MixedRecords::Games(vec![None, Some(5), Some(6)])),
            check_single_game_and_team(&records)
        );
    }

    #[test]
    fn both_teams_of_one_game_rejected() {
        let records = [
            StatRecord::new(1, Some(2), Some(1)).with_game(5).with_team(1),
            StatRecord::new(1, Some(1), Some(2)).with_game(5).with_team(2),
        ];
        let err = check_single_game_and_team(&records).unwrap_err();
        assert_eq!(MixedRecords::Teams(vec![Some(1), Some(2)]), err);
        assert_eq!("records span more than one team: [Some(1), Some(2)]", err.to_string());
    }

    #[test]
    fn read_from_dir_with_predicate() {
        let dir = scratch_dir("dir");
        fs::write(
            dir.join("game1.json"),
            r#"[{"gameId": 1, "quarter": 1, "goalsFor": 3, "goalsAgainst": 2},
                {"gameId": 2, "quarter": 1, "goalsFor": 9, "goalsAgainst": 9}]"#,
        )
        .unwrap();
        fs::write(
            dir.join("game1-more.json"),
            r#"[{"gameId": 1, "quarter": 4, "goalsFor": 1}]"#,
        )
        .unwrap();

        let records = read_from_dir(&dir, Predicate::Game { game_id: 1 }).unwrap();
        assert_eq!(2, records.len());
        assert!(records.iter().all(|record| record.game_id == Some(1)));

        let records = read_from_file(dir.join("game1.json")).unwrap();
        assert_eq!(2, records.len());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn read_from_file_malformed() {
        let dir = scratch_dir("malformed");
        let path = dir.join("bad.json");
        fs::write(&path, r#"[{"goalsFor": 1}]"#).unwrap();
        assert!(read_from_file(&path).is_err());
        fs::remove_dir_all(dir).unwrap();
    }
}
