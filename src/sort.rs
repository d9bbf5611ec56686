//! Reshaping of a master pitch log into per-game files: splitting rows by `GamePk` and
//! sorting each game's rows into at-bat/pitch order, the ordering the accumulator's dedup
//! and out-sequencing rules depend on.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::csv::CsvWriter;
use crate::ingest::{cell, parse_u32, GameLog, COL_AT_BAT_NUMBER, COL_PITCH_NUMBER};

pub const COL_GAME_PK: &str = "GamePk";

/// Path of the split-out file for one game inside `dir`.
pub fn game_path(dir: impl AsRef<Path>, game_id: &str) -> PathBuf {
    dir.as_ref().join(format!("game_{game_id}.csv"))
}

/// Extracts the game identifier a split-out file was written for, falling back to the bare
/// file stem for files named by other means.
pub fn game_id(path: impl AsRef<Path>) -> String {
    let stem = path
        .as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.strip_prefix("game_").map(ToString::to_string).unwrap_or(stem)
}

/// Splits a master pitch log into one file per `GamePk` under `out_dir`, preserving the
/// header in each and dropping rows with a blank game identifier. Returns the number of
/// files written.
pub fn split_by_game(source: impl AsRef<Path>, out_dir: impl AsRef<Path>) -> anyhow::Result<usize> {
    let log = GameLog::read(source)?;
    let game_pk = log.require(COL_GAME_PK)?;

    let mut ordinals = FxHashMap::default();
    let mut games: Vec<(String, Vec<&Vec<String>>)> = vec![];
    for row in log.rows() {
        let Some(id) = cell(row, game_pk) else {
            continue;
        };
        let ordinal = *ordinals.entry(id.to_string()).or_insert_with(|| {
            games.push((id.to_string(), vec![]));
            games.len() - 1
        });
        games[ordinal].1.push(row);
    }

    fs::create_dir_all(&out_dir)?;
    for (id, rows) in &games {
        let path = game_path(&out_dir, id);
        debug!("writing {} rows to {path:?}", rows.len());
        let mut csv = CsvWriter::create(path)?;
        csv.append(log.header())?;
        for &row in rows {
            csv.append(row)?;
        }
        csv.flush()?;
    }
    Ok(games.len())
}

/// Sorts a game's rows by at-bat number then pitch number. Rows with a blank at-bat number
/// are dropped; an unparseable pitch number sorts as zero within its at-bat.
pub fn order_rows(log: &GameLog) -> anyhow::Result<Vec<&Vec<String>>> {
    let at_bat = log.require(COL_AT_BAT_NUMBER)?;
    let pitch = log.require(COL_PITCH_NUMBER)?;
    let mut rows: Vec<_> = log
        .rows()
        .iter()
        .filter(|row| cell(row, at_bat).is_some())
        .collect();
    rows.sort_by_key(|row| {
        (
            cell(row, at_bat).and_then(parse_u32).unwrap_or(0),
            cell(row, pitch).and_then(parse_u32).unwrap_or(0),
        )
    });
    Ok(rows)
}

/// Rewrites a game file in place with its rows in at-bat/pitch order.
pub fn sort_game_file(path: impl AsRef<Path>) -> anyhow::Result<()> {
    let log = GameLog::read(&path)?;
    let rows = order_rows(&log)?;
    let mut csv = CsvWriter::create(&path)?;
    csv.append(log.header())?;
    for row in rows {
        csv.append(row)?;
    }
    csv.flush()?;
    Ok(())
}
