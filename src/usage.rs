//! Pitch-usage breakdowns for the pie-chart consumers, and the colour lookup resolving
//! pitch-type codes to chart colours.

use std::path::Path;

use ordinalizer::Ordinal;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use strum::{EnumCount, IntoEnumIterator};
use tracing::warn;

use crate::event::PitchType;
use crate::file::read_json;
use crate::ingest::{cell, parse_id, parse_u32, GameLog, MissingColumn, COL_PITCHER_ID};
use crate::stats::PitcherStats;

/// Colour assigned to pitch-type codes absent from the palette.
pub const DEFAULT_COLOUR: &str = "#999999";

/// Chart colours keyed by pitch-type code, loaded from a `PitchColors.json` lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PitchPalette(FxHashMap<String, String>);
impl PitchPalette {
    /// Loads the palette, degrading to an empty one (everything maps to
    /// [DEFAULT_COLOUR]) when the file is missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match read_json(&path) {
            Ok(palette) => palette,
            Err(error) => {
                warn!(
                    "pitch colour load failed for {:?}: {error}",
                    path.as_ref()
                );
                Self::default()
            }
        }
    }

    pub fn colour(&self, code: &str) -> &str {
        self.0
            .get(code)
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLOUR)
    }
}

/// One wedge of a pitcher's usage pie: a pitch type actually thrown and its share of the
/// pitcher's deduplicated pitch count.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageSlice {
    pub pitch_type: PitchType,
    pub count: u32,
    pub share: f64,
}

/// The pitch-mix proportions of a pitcher's outing. Types with a zero count are omitted;
/// a pitcher with no counted pitches yields no slices.
pub fn breakdown(stats: &PitcherStats) -> Vec<UsageSlice> {
    if stats.total_pitches == 0 {
        return vec![];
    }
    PitchType::iter()
        .filter_map(|pitch_type| {
            let count = stats.type_counts[pitch_type.ordinal()];
            if count == 0 {
                None
            } else {
                Some(UsageSlice {
                    pitch_type,
                    count,
                    share: count as f64 / stats.total_pitches as f64,
                })
            }
        })
        .collect()
}

/// Rebuilds usage breakdowns from report-shaped rows, the form the pie consumers read:
/// one row per pitcher with a `TotalPitches` column and a count column per pitch-type
/// code. Rows without a usable pitcher identifier or with no counted pitches are skipped.
pub fn from_report(log: &GameLog) -> Result<Vec<(u64, Vec<UsageSlice>)>, MissingColumn> {
    let pitcher_id = log.require(COL_PITCHER_ID)?;
    let total_pitches = log.require("TotalPitches")?;
    let mut type_columns = Vec::with_capacity(PitchType::COUNT);
    for pitch_type in PitchType::iter() {
        type_columns.push((pitch_type, log.require(&pitch_type.to_string())?));
    }

    let mut breakdowns = vec![];
    for row in log.rows() {
        let Some(id) = cell(row, pitcher_id).and_then(parse_id) else {
            continue;
        };
        let total = cell(row, total_pitches).and_then(parse_u32).unwrap_or(0);
        if total == 0 {
            continue;
        }
        let slices = type_columns
            .iter()
            .filter_map(|&(pitch_type, column)| {
                let count = cell(row, column).and_then(parse_u32).unwrap_or(0);
                if count == 0 {
                    None
                } else {
                    Some(UsageSlice {
                        pitch_type,
                        count,
                        share: count as f64 / total as f64,
                    })
                }
            })
            .collect();
        breakdowns.push((id, slices));
    }
    Ok(breakdowns)
}
