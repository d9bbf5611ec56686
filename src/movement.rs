//! Per-pitcher movement dataset extraction: reshapes the raw event columns of a game log
//! into per-pitcher record lists for the movement CSVs consumed by scatter charting. Cells
//! pass through as read; numeric interpretation only happens when a scatter point is
//! requested.

use std::io;
use std::path::{Path, PathBuf};

use ordinalizer::Ordinal;
use rustc_hash::FxHashMap;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount, EnumIter};

use crate::csv::{CsvWriter, Record};
use crate::ingest::{
    cell, parse_id, GameLog, MissingColumn, COL_PITCHER_HAND, COL_PITCHER_ID, COL_PITCH_TYPE,
};

pub const COL_PITCH_ID: &str = "PitchId";
pub const COL_RELEASE_SPEED: &str = "ReleaseSpeed";
pub const COL_HORIZONTAL_BREAK: &str = "TrajectoryHorizontalBreak";
pub const COL_VERTICAL_BREAK: &str = "TrajectoryVerticalBreakInduced";
pub const COL_RELEASE_X: &str = "ReleasePositionX";
pub const COL_RELEASE_Z: &str = "ReleasePositionZ";

const FEET_TO_INCHES: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Ordinal, Display, EnumCount, EnumIter)]
pub enum Column {
    #[strum(serialize = "PitchID")]
    PitchId,
    PitcherHand,
    PitchType,
    ReleaseSpeed,
    TrajectoryHorizontalBreak,
    TrajectoryVerticalBreakInduced,
    ReleasePositionX,
    ReleasePositionZ,
}

impl From<Column> for usize {
    fn from(column: Column) -> Self {
        column.ordinal()
    }
}

/// One pitch of a pitcher's movement dataset. The hand is the pitcher's, taken from their
/// first row; everything else is the row's own cell.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementRecord {
    pub pitch_id: String,
    pub hand: String,
    pub pitch_type: String,
    pub release_speed: String,
    pub horizontal_break: String,
    pub vertical_break: String,
    pub release_x: String,
    pub release_z: String,
}

/// A movement scatter point, breaks scaled to inches. Unreadable cells chart at the origin
/// axis rather than dropping the pitch.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakPoint {
    pub horizontal: f64,
    pub vertical: f64,
}

impl MovementRecord {
    pub fn break_point(&self) -> BreakPoint {
        BreakPoint {
            horizontal: parse_f64_or_zero(&self.horizontal_break) * FEET_TO_INCHES,
            vertical: parse_f64_or_zero(&self.vertical_break) * FEET_TO_INCHES,
        }
    }
}

fn parse_f64_or_zero(value: &str) -> f64 {
    value
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .unwrap_or(0.0)
}

/// Reshapes a game log into per-pitcher movement record lists, keyed by pitcher and ordered
/// by first appearance; row order is preserved within each pitcher. Rows without a usable
/// pitcher identifier are dropped.
pub fn extract(log: &GameLog) -> Result<Vec<(u64, Vec<MovementRecord>)>, MissingColumn> {
    let pitcher_id = log.require(COL_PITCHER_ID)?;
    let pitch_id = log.require(COL_PITCH_ID)?;
    let pitcher_hand = log.require(COL_PITCHER_HAND)?;
    let pitch_type = log.require(COL_PITCH_TYPE)?;
    let release_speed = log.require(COL_RELEASE_SPEED)?;
    let horizontal_break = log.require(COL_HORIZONTAL_BREAK)?;
    let vertical_break = log.require(COL_VERTICAL_BREAK)?;
    let release_x = log.require(COL_RELEASE_X)?;
    let release_z = log.require(COL_RELEASE_Z)?;

    let mut ordinals = FxHashMap::default();
    let mut pitchers: Vec<(u64, String, Vec<MovementRecord>)> = vec![];
    for row in log.rows() {
        let Some(id) = cell(row, pitcher_id).and_then(parse_id) else {
            continue;
        };
        let ordinal = *ordinals.entry(id).or_insert_with(|| {
            let hand = cell(row, pitcher_hand).unwrap_or_default().to_string();
            pitchers.push((id, hand, vec![]));
            pitchers.len() - 1
        });
        let hand = pitchers[ordinal].1.clone();
        pitchers[ordinal].2.push(MovementRecord {
            pitch_id: cell(row, pitch_id).unwrap_or_default().to_string(),
            hand,
            pitch_type: cell(row, pitch_type).unwrap_or_default().to_string(),
            release_speed: cell(row, release_speed).unwrap_or_default().to_string(),
            horizontal_break: cell(row, horizontal_break).unwrap_or_default().to_string(),
            vertical_break: cell(row, vertical_break).unwrap_or_default().to_string(),
            release_x: cell(row, release_x).unwrap_or_default().to_string(),
            release_z: cell(row, release_z).unwrap_or_default().to_string(),
        });
    }
    Ok(pitchers
        .into_iter()
        .map(|(id, _, records)| (id, records))
        .collect())
}

/// Path of a pitcher's movement file for a game inside `dir`.
pub fn movement_path(dir: impl AsRef<Path>, game_id: &str, pitcher_id: u64) -> PathBuf {
    dir.as_ref()
        .join(format!("Pitcher{pitcher_id}MetricsGame{game_id}.csv"))
}

pub fn write(path: impl AsRef<Path>, records: &[MovementRecord]) -> Result<(), io::Error> {
    let mut csv = CsvWriter::create(path)?;
    csv.append(Record::with_values(Column::iter()))?;
    for movement in records {
        let mut record = Record::with_capacity(Column::COUNT);
        record.set(Column::PitchId, &movement.pitch_id);
        record.set(Column::PitcherHand, &movement.hand);
        record.set(Column::PitchType, &movement.pitch_type);
        record.set(Column::ReleaseSpeed, &movement.release_speed);
        record.set(Column::TrajectoryHorizontalBreak, &movement.horizontal_break);
        record.set(Column::TrajectoryVerticalBreakInduced, &movement.vertical_break);
        record.set(Column::ReleasePositionX, &movement.release_x);
        record.set(Column::ReleasePositionZ, &movement.release_z);
        csv.append(record)?;
    }
    csv.flush()
}
