//! Reading of per-game pitch logs into [PitchEvent] sequences. Individual malformed fields
//! are recovered by treating them as absent; a row without a usable pitcher identifier is
//! skipped outright. Only a missing header column fails the whole game.

use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::csv::CsvReader;
use crate::event::{PitchCall, PitchEvent, PitchType};

pub const COL_PITCHER_ID: &str = "PitcherId";
pub const COL_IS_TOP: &str = "IsTop";
pub const COL_PITCHER_HAND: &str = "PitcherHand";
pub const COL_PITCH_NUMBER: &str = "PitchNumber";
pub const COL_PITCH_TYPE: &str = "PitchType";
pub const COL_PITCH_CALL: &str = "PitchCall";
pub const COL_AT_BAT_NUMBER: &str = "AtBatNumber";

#[derive(Debug, Error)]
#[error("column '{0}' not found in header")]
pub struct MissingColumn(pub String);

/// A raw game log: the header row plus every data row, with cells kept as read. Columns are
/// resolved by header name, so upstream reshuffling of the source layout is harmless.
#[derive(Debug, Clone)]
pub struct GameLog {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}
impl GameLog {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    pub fn read(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let mut reader = CsvReader::open(path)?;
        let header = match reader.read() {
            None => vec![],
            Some(header) => header?,
        };
        let mut rows = vec![];
        for row in reader {
            rows.push(row?);
        }
        Ok(Self { header, rows })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|column| column == name)
    }

    pub fn require(&self, name: &str) -> Result<usize, MissingColumn> {
        self.column(name).ok_or_else(|| MissingColumn(name.into()))
    }

    /// Extracts the pitch events in row order. Rows lacking a parseable `PitcherId` are
    /// dropped; every other field degrades to `None` when absent or malformed.
    pub fn pitch_events(&self) -> Result<Vec<PitchEvent>, MissingColumn> {
        let pitcher_id = self.require(COL_PITCHER_ID)?;
        let is_top = self.require(COL_IS_TOP)?;
        let pitcher_hand = self.require(COL_PITCHER_HAND)?;
        let pitch_number = self.require(COL_PITCH_NUMBER)?;
        let pitch_type = self.require(COL_PITCH_TYPE)?;
        let pitch_call = self.require(COL_PITCH_CALL)?;
        let at_bat_number = self.require(COL_AT_BAT_NUMBER)?;

        let mut events = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let Some(pitcher_id) = cell(row, pitcher_id).and_then(parse_id) else {
                debug!("dropping row without a pitcher identifier");
                continue;
            };
            events.push(PitchEvent {
                pitcher_id,
                is_top: cell(row, is_top).and_then(parse_u32) == Some(1),
                pitcher_hand: cell(row, pitcher_hand).map(ToString::to_string),
                pitch_number: cell(row, pitch_number).and_then(parse_u32),
                pitch_type: cell(row, pitch_type)
                    .and_then(|code| PitchType::from_str(code).ok()),
                pitch_call: cell(row, pitch_call).map(|code| {
                    PitchCall::from_str(code).unwrap_or_else(|_| PitchCall::Other(code.into()))
                }),
                at_bat_number: cell(row, at_bat_number).and_then(parse_u32),
            });
        }
        Ok(events)
    }
}

pub(crate) fn cell(row: &[String], index: usize) -> Option<&str> {
    row.get(index)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

/// Identifiers occasionally arrive float-formatted (`660271.0`); both forms are accepted.
pub(crate) fn parse_id(value: &str) -> Option<u64> {
    value.parse().ok().or_else(|| {
        value
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite() && *parsed >= 0.0)
            .map(|parsed| parsed as u64)
    })
}

pub(crate) fn parse_u32(value: &str) -> Option<u32> {
    value.parse().ok().or_else(|| {
        value
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite() && *parsed >= 0.0)
            .map(|parsed| parsed as u32)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(row: &[&str]) -> Vec<String> {
        row.iter().map(ToString::to_string).collect()
    }

    fn sample_log() -> GameLog {
        GameLog::new(
            strings(&[
                "GamePk",
                "PitcherId",
                "IsTop",
                "PitcherHand",
                "PitchNumber",
                "PitchType",
                "PitchCall",
                "AtBatNumber",
            ]),
            vec![
                strings(&["7", "660271", "1", "L", "1", "FF", "called_strike", "1"]),
                strings(&["7", "660271.0", "1", "L", "2", "SL", "ball", "1"]),
                strings(&["7", "", "1", "L", "3", "FF", "foul", "1"]),
                strings(&["7", "543037", "0", "R", "", "XX", "pickoff", "12"]),
            ],
        )
    }

    #[test]
    fn extracts_events_in_row_order() {
        let events = sample_log().pitch_events().unwrap();
        assert_eq!(3, events.len());
        assert_eq!(660271, events[0].pitcher_id);
        assert!(events[0].is_top);
        assert_eq!(Some(PitchType::FourSeam), events[0].pitch_type);
        assert_eq!(Some(PitchCall::CalledStrike), events[0].pitch_call);
        assert_eq!(Some(1), events[0].at_bat_number);

        // float-formatted identifier and an uncounted call
        assert_eq!(660271, events[1].pitcher_id);
        assert_eq!(Some(PitchCall::Other("ball".into())), events[1].pitch_call);

        // row without a pitcher id dropped; last row degrades field by field
        assert_eq!(543037, events[2].pitcher_id);
        assert!(!events[2].is_top);
        assert_eq!(None, events[2].pitch_number);
        assert_eq!(None, events[2].pitch_type);
        assert_eq!(Some(PitchCall::Other("pickoff".into())), events[2].pitch_call);
    }

    #[test]
    fn missing_column_is_an_error() {
        let log = GameLog::new(strings(&["PitcherId", "IsTop"]), vec![]);
        let err = log.pitch_events().unwrap_err();
        assert_eq!("column 'PitcherHand' not found in header", err.to_string());
    }

    #[test]
    fn empty_log_lacks_columns() {
        let log = GameLog::new(vec![], vec![]);
        assert!(log.pitch_events().is_err());
    }
}
