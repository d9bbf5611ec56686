//! Per-game report writing: one CSV row per finalized pitcher record, in the accumulator's
//! emission order, with the fixed identity/tally/derived column set followed by a count and
//! strikeout-percentage column pair for each of the seven pitch types.

use std::io;
use std::path::{Path, PathBuf};

use ordinalizer::Ordinal;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount, EnumIter};

use crate::csv::{CsvWriter, Record};
use crate::event::PitchType;
use crate::stats::PitcherStats;

/// The fixed leading columns of a report row. Per-type column pairs follow these, ordered
/// by [PitchType] ordinal.
#[derive(Debug, Clone, PartialEq, Ordinal, Display, EnumCount, EnumIter)]
pub enum Column {
    PitcherId,
    PitcherTeam,
    PitcherHand,
    OutsRecorded,
    InningsPitched,
    #[strum(serialize = "1B")]
    Singles,
    #[strum(serialize = "2B")]
    Doubles,
    #[strum(serialize = "3B")]
    Triples,
    #[strum(serialize = "HR")]
    HomeRuns,
    Strikeouts,
    Walks,
    TotalBattersFaced,
    #[strum(serialize = "BAA")]
    BattingAverageAgainst,
    #[strum(serialize = "WHIP")]
    Whip,
    TotalPitches,
    Strikes,
    StrikePercentage,
}

impl From<Column> for usize {
    fn from(column: Column) -> Self {
        column.ordinal()
    }
}

const RECORD_WIDTH: usize = Column::COUNT + 2 * PitchType::COUNT;

pub fn header() -> Record {
    let fixed = Column::iter().map(|column| column.to_string());
    let per_type =
        PitchType::iter().flat_map(|pitch_type| [pitch_type.to_string(), format!("{pitch_type}_K%")]);
    Record::with_values(fixed.chain(per_type))
}

pub fn record(stats: &PitcherStats) -> Record {
    let mut record = Record::with_capacity(RECORD_WIDTH);
    record.set(Column::PitcherId, stats.pitcher_id);
    record.set(Column::PitcherTeam, stats.team);
    record.set(Column::PitcherHand, &stats.hand);
    record.set(Column::OutsRecorded, stats.outs_recorded);
    record.set(Column::InningsPitched, format!("{:.2}", stats.innings_pitched));
    record.set(Column::Singles, stats.singles);
    record.set(Column::Doubles, stats.doubles);
    record.set(Column::Triples, stats.triples);
    record.set(Column::HomeRuns, stats.home_runs);
    record.set(Column::Strikeouts, stats.strikeouts);
    record.set(Column::Walks, stats.walks);
    record.set(Column::TotalBattersFaced, stats.batters_faced);
    record.set(Column::BattingAverageAgainst, format!("{:.3}", stats.baa));
    record.set(Column::Whip, format!("{:.3}", stats.whip));
    record.set(Column::TotalPitches, stats.total_pitches);
    record.set(Column::Strikes, stats.strikes);
    record.set(
        Column::StrikePercentage,
        format!("{:.3}", stats.strike_percentage),
    );
    for pitch_type in PitchType::iter() {
        let base = Column::COUNT + 2 * pitch_type.ordinal();
        record.set(base, stats.type_counts[pitch_type.ordinal()]);
        record.set(base + 1, format!("{:.1}", stats.type_k_pct[pitch_type.ordinal()]));
    }
    record
}

/// Path of the report file for a game inside `dir`.
pub fn report_path(dir: impl AsRef<Path>, game_id: &str) -> PathBuf {
    dir.as_ref().join(format!("PitcherResultsGame{game_id}.csv"))
}

/// Writes the full report for one game: a header row followed by one row per record, in the
/// given order.
pub fn write(path: impl AsRef<Path>, records: &[PitcherStats]) -> Result<(), io::Error> {
    let mut csv = CsvWriter::create(path)?;
    csv.append(header())?;
    for stats in records {
        csv.append(record(stats))?;
    }
    csv.flush()
}
