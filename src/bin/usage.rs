use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};
use tracing::{debug, info, warn};

use southpaw::file;
use southpaw::ingest::GameLog;
use southpaw::usage::{self, PitchPalette, UsageSlice};

/// Prints the pitch-usage breakdown of every pitcher in a directory of per-game results
/// CSVs, with chart colours resolved from a palette file.
#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// directory of per-game results CSVs
    dir: Option<PathBuf>,

    /// pitch colour palette file
    #[clap(short = 'c', long, default_value = "PitchColors.json")]
    colors: PathBuf,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        self.dir
            .as_ref()
            .ok_or(anyhow!("results directory must be specified"))?;
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

    let palette = PitchPalette::load(&args.colors);
    for results_file in file::csv_files(args.dir.as_ref().unwrap())? {
        let breakdowns = match GameLog::read(&results_file)
            .and_then(|log| Ok(usage::from_report(&log)?))
        {
            Ok(breakdowns) => breakdowns,
            Err(error) => {
                warn!("error processing {results_file:?}: {error}");
                continue;
            }
        };
        for (pitcher_id, slices) in &breakdowns {
            let table = tabulate(slices, &palette);
            info!(
                "{:?}, pitcher {pitcher_id}:\n{}",
                results_file.file_name().unwrap_or_default(),
                Console::default().render(&table)
            );
        }
    }

    Ok(())
}

fn tabulate(slices: &[UsageSlice], palette: &PitchPalette) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(7)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(7)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Centred)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec!["Pitch".into(), "Count".into(), "Usage".into(), "Colour".into()],
        ));
    for slice in slices {
        let code = slice.pitch_type.to_string();
        table.push_row(Row::new(
            Styles::default(),
            vec![
                code.clone().into(),
                format!("{}", slice.count).into(),
                format!("{:.1}%", slice.share * 100.0).into(),
                palette.colour(&code).to_string().into(),
            ],
        ));
    }
    table
}
