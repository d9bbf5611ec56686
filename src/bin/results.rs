use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::anyhow;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info, warn};

use southpaw::ingest::GameLog;
use southpaw::{file, movement, print, report, sort, stats};

/// Aggregates per-pitcher statistics for every game file in a directory, writing one
/// results CSV per game and one movement CSV per pitcher per game.
#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// directory of sorted per-game pitch logs
    dir: Option<PathBuf>,

    /// where to write the per-game results CSVs
    #[clap(short = 'o', long, default_value = "PitcherGameResults")]
    out: PathBuf,

    /// where to write the per-pitcher movement CSVs
    #[clap(short = 'm', long, default_value = "PitcherMovement")]
    movement: PathBuf,

    /// print the per-game statistics tables
    #[clap(short = 't', long)]
    table: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        self.dir
            .as_ref()
            .ok_or(anyhow!("games directory must be specified"))?;
        Ok(())
    }
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

    let start_time = Instant::now();
    fs::create_dir_all(&args.out)?;
    fs::create_dir_all(&args.movement)?;

    let game_files = file::csv_files(args.dir.as_ref().unwrap())?;
    let mut processed = 0;
    for game_file in &game_files {
        let game_id = sort::game_id(game_file);

        // one game's failure must not sink the rest of the batch
        match process_game(game_file, &game_id, &args.out, args.table) {
            Ok(pitchers) => {
                processed += 1;
                debug!("game {game_id}: {pitchers} pitchers");
            }
            Err(error) => warn!("error processing {game_file:?}: {error}"),
        }
        if let Err(error) = extract_movement(game_file, &game_id, &args.movement) {
            warn!("error processing movement data for {game_file:?}: {error}");
        }
    }
    let elapsed_time = start_time.elapsed();
    info!(
        "aggregated {processed} of {} games in {}s",
        game_files.len(),
        elapsed_time.as_millis() as f64 / 1_000.
    );

    Ok(())
}

fn process_game(
    game_file: &Path,
    game_id: &str,
    out_dir: &Path,
    table: bool,
) -> anyhow::Result<usize> {
    let log = GameLog::read(game_file)?;
    let events = log.pitch_events()?;
    let records = stats::aggregate(&events);
    report::write(report::report_path(out_dir, game_id), &records)?;
    if table {
        let table = print::tabulate(&records);
        info!("game {game_id}:\n{}", Console::default().render(&table));
    }
    Ok(records.len())
}

fn extract_movement(game_file: &Path, game_id: &str, out_dir: &Path) -> anyhow::Result<usize> {
    let log = GameLog::read(game_file)?;
    let pitchers = movement::extract(&log)?;
    for (pitcher_id, records) in &pitchers {
        movement::write(
            movement::movement_path(out_dir, game_id, *pitcher_id),
            records,
        )?;
    }
    Ok(pitchers.len())
}
