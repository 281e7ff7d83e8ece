use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info, warn};

use netball_stats::aggregate::GameScores;
use netball_stats::record::{check_single_game_and_team, Predicate, PredicateClosures, StatRecord};
use netball_stats::reconcile::reconcile;
use netball_stats::tally::player_tallies;
use netball_stats::{csv, file, print, record};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file or directory to source the stat records from
    path: Option<PathBuf>,

    /// only use records for this game
    #[clap(short = 'g', long)]
    game: Option<u64>,

    /// only use records for this team
    #[clap(short = 't', long)]
    team: Option<u64>,

    /// file or directory holding the opposing team's records of the same game
    #[clap(long)]
    opponent: Option<PathBuf>,

    /// opposing team, when the opponent's records hold more than one team
    #[clap(long)]
    opponent_team: Option<u64>,

    /// also print goals per player
    #[clap(short = 'p', long)]
    players: bool,

    /// where to write the CSV export to
    #[clap(short = 'o', long)]
    out: Option<PathBuf>,

    /// where to write the scores as JSON
    #[clap(long)]
    json: Option<PathBuf>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        self.path.as_ref().ok_or(anyhow!("stat records path must be specified"))?;
        if self.opponent_team.is_some() && self.opponent.is_none() {
            return Err(anyhow!("--opponent-team requires --opponent"));
        }
        if self.opponent.is_some() && self.game.is_none() {
            return Err(anyhow!("--opponent requires --game"));
        }
        Ok(())
    }
}

fn load(path: &Path, game: Option<u64>, team: Option<u64>) -> anyhow::Result<Vec<StatRecord>> {
    let mut predicates = vec![];
    if let Some(game_id) = game {
        predicates.push(Predicate::Game { game_id });
    }
    if let Some(team_id) = team {
        predicates.push(Predicate::Team { team_id });
    }
    let records = record::read_from_dir(path, PredicateClosures::from(predicates))?;
    check_single_game_and_team(&records)
        .with_context(|| format!("narrow {} down with --game/--team", path.display()))?;
    Ok(records)
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let path = args.path.as_ref().ok_or(anyhow!("stat records path must be specified"))?;
    let records = load(path, args.game, args.team)?;
    if records.is_empty() {
        warn!("no stat records matched in {}", path.display());
    }
    let scores = GameScores::from_records(&records);
    info!(
        "{} records, final score {}-{} ({}):\n{}",
        records.len(),
        scores.final_score.goals_for,
        scores.final_score.goals_against,
        scores.result(),
        Console::default().render(&print::tabulate(&scores))
    );

    if args.players {
        let tallies = player_tallies(&records);
        info!("players:\n{}", Console::default().render(&print::tabulate_players(&tallies)));
    }

    if let Some(out) = &args.out {
        csv::export(out, [(args.game, &scores)])?;
        info!("wrote CSV export to {}", out.display());
    }

    if let Some(json) = &args.json {
        file::write_json(json, &scores)?;
        info!("wrote scores to {}", json.display());
    }

    if let Some(opponent) = &args.opponent {
        let opponent_records = load(opponent, args.game, args.opponent_team)?;
        let opponent_scores = GameScores::from_records(&opponent_records);
        match reconcile(&scores, &opponent_scores) {
            Ok(()) => info!("opponent's records agree in every quarter"),
            Err(mismatches) => return Err(mismatches.into()),
        }
    }

    Ok(())
}
