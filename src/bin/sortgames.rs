use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::anyhow;
use clap::Parser;
use tracing::{debug, info, warn};

use southpaw::file;
use southpaw::sort;

/// Splits a master pitch log into per-game files and sorts each into at-bat/pitch order.
#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// master pitch log to split
    source: Option<PathBuf>,

    /// directory to write the per-game files to
    #[clap(short = 'd', long, default_value = "gamesSorted")]
    dir: PathBuf,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        self.source
            .as_ref()
            .ok_or(anyhow!("source file must be specified"))?;
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
    let written = sort::split_by_game(args.source.unwrap(), &args.dir)?;
    info!("wrote {written} per-game files to {:?}", args.dir);

    for game_file in file::csv_files(&args.dir)? {
        if let Err(error) = sort::sort_game_file(&game_file) {
            warn!("could not sort {game_file:?}: {error}");
        }
    }
    let elapsed_time = start_time.elapsed();
    info!(
        "split and sorted {written} games in {}s",
        elapsed_time.as_millis() as f64 / 1_000.
    );

    Ok(())
}
