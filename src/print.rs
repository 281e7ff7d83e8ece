use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};
use strum::{EnumCount, IntoEnumIterator};

use crate::aggregate::GameScores;
use crate::quarter::Quarter;
use crate::tally::PlayerTally;

fn score_cols() -> Vec<Col> {
    let mut cols = vec![Col::new(Styles::default().with(MinWidth(10)).with(Left))];
    for _ in 0..Quarter::COUNT {
        cols.push(Col::new(Styles::default().with(MinWidth(5)).with(HAlign::Right)));
    }
    cols.push(Col::new(
        Styles::default()
            .with(Separator(true))
            .with(MinWidth(7))
            .with(HAlign::Right),
    ));
    cols
}

fn score_header(first: &str, last: Option<&str>) -> Row {
    let mut header_cells = vec![first.to_string().into()];
    for quarter in Quarter::iter() {
        header_cells.push(quarter.to_string().into());
    }
    header_cells.push("Final".into());
    if let Some(last) = last {
        header_cells.push(last.to_string().into());
    }
    Row::new(Styles::default().with(Header(true)).with(Separator(true)), header_cells)
}

pub fn tabulate(scores: &GameScores) -> Table {
    let mut cols = score_cols();
    cols.push(Col::new(
        Styles::default()
            .with(Separator(true))
            .with(MinWidth(8))
            .with(HAlign::Centred),
    ));
    let mut table = Table::default()
        .with_cols(cols)
        .with_row(score_header("", Some("Result")));

    let mut goals_for = vec!["Goals for".into()];
    let mut goals_against = vec!["Goals against".into()];
    for (_, score) in scores.quarters.iter() {
        goals_for.push(score.goals_for.to_string().into());
        goals_against.push(score.goals_against.to_string().into());
    }
    goals_for.push(scores.final_score.goals_for.to_string().into());
    goals_against.push(scores.final_score.goals_against.to_string().into());
    goals_for.push(scores.result().to_string().into());
    goals_against.push("".into());

    table.push_row(Row::new(Styles::default(), goals_for));
    table.push_row(Row::new(Styles::default(), goals_against));
    table
}

/// Goals scored by each player, per quarter and in total.
pub fn tabulate_players(tallies: &[PlayerTally]) -> Table {
    let mut table = Table::default()
        .with_cols(score_cols())
        .with_row(score_header("Player", None));
    for tally in tallies {
        let mut row_cells = vec![match tally.player_id {
            None => "(none)".into(),
            Some(player_id) => player_id.to_string().into(),
        }];
        for (_, score) in tally.quarters.iter() {
            row_cells.push(score.goals_for.to_string().into());
        }
        row_cells.push(tally.total.goals_for.to_string().into());
        table.push_row(Row::new(Styles::default(), row_cells));
    }
    table
}
