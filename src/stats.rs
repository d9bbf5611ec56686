//! The per-pitcher game-statistics accumulator: a single ordered scan over a game's pitch
//! events producing one finalized [PitcherStats] per pitcher.
//!
//! Pitch/strike/pitch-type counting is gated by the pitch-number dedup rule (an event whose
//! pitch number repeats the immediately preceding one for the same pitcher is an ancillary
//! row for the same physical pitch). Hit, out, walk and strikeout classification is applied
//! per row and is deliberately *not* deduplicated; the asymmetry is part of the contract.

use ordinalizer::Ordinal;
use rustc_hash::{FxHashMap, FxHashSet};
use strum::{EnumCount, IntoEnumIterator};

use crate::event::{HitKind, PitchCall, PitchEvent, PitchType};

/// Finalized statistics for one pitcher's outing in one game. Built lazily on first sight
/// of the pitcher's identifier, accumulated in place, then finalized exactly once; not
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PitcherStats {
    pub pitcher_id: u64,
    /// 1 when the pitcher's first event was thrown in the top of an inning, otherwise 2.
    pub team: u8,
    pub hand: String,
    pub outs_recorded: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub strikeouts: u32,
    pub walks: u32,
    pub batters_faced: u32,
    pub total_pitches: u32,
    pub strikes: u32,
    pub type_counts: [u32; PitchType::COUNT],
    pub type_strikes: [u32; PitchType::COUNT],
    pub innings_pitched: f64,
    pub baa: f64,
    pub whip: f64,
    pub strike_percentage: f64,
    pub type_k_pct: [f64; PitchType::COUNT],
}
impl PitcherStats {
    fn new(event: &PitchEvent) -> Self {
        Self {
            pitcher_id: event.pitcher_id,
            team: if event.is_top { 1 } else { 2 },
            hand: event
                .pitcher_hand
                .clone()
                .unwrap_or_else(|| String::from("Unknown")),
            outs_recorded: 0,
            singles: 0,
            doubles: 0,
            triples: 0,
            home_runs: 0,
            strikeouts: 0,
            walks: 0,
            batters_faced: 0,
            total_pitches: 0,
            strikes: 0,
            type_counts: [0; PitchType::COUNT],
            type_strikes: [0; PitchType::COUNT],
            innings_pitched: 0.0,
            baa: 0.0,
            whip: 0.0,
            strike_percentage: 0.0,
            type_k_pct: [0.0; PitchType::COUNT],
        }
    }

    pub fn total_hits(&self) -> u32 {
        self.singles + self.doubles + self.triples + self.home_runs
    }

    pub fn type_count(&self, pitch_type: PitchType) -> u32 {
        self.type_counts[pitch_type.ordinal()]
    }
}

/// In-flight accumulation state for one pitcher; dissolved into [PitcherStats] on
/// finalization.
struct Tally {
    stats: PitcherStats,
    last_pitch_number: Option<u32>,
    at_bats: FxHashSet<u32>,
}
impl Tally {
    fn new(event: &PitchEvent) -> Self {
        Self {
            stats: PitcherStats::new(event),
            last_pitch_number: None,
            at_bats: FxHashSet::default(),
        }
    }

    fn scan(&mut self, event: &PitchEvent) {
        let stats = &mut self.stats;
        if let Some(at_bat) = event.at_bat_number {
            self.at_bats.insert(at_bat);
        }

        // Dedup rule: ancillary rows repeat the previous pitch number and must not inflate
        // the pitch, strike and pitch-type tallies.
        if let Some(pitch_number) = event.pitch_number {
            if self.last_pitch_number != Some(pitch_number) {
                stats.total_pitches += 1;
                self.last_pitch_number = Some(pitch_number);
                if let Some(call) = &event.pitch_call {
                    if call.counts_as_strike() {
                        stats.strikes += 1;
                        if let Some(pitch_type) = event.pitch_type {
                            stats.type_strikes[pitch_type.ordinal()] += 1;
                        }
                    }
                }
                if let Some(pitch_type) = event.pitch_type {
                    stats.type_counts[pitch_type.ordinal()] += 1;
                }
            }
        }

        // Row-level outcome classification; never deduplicated.
        if let Some(call) = &event.pitch_call {
            match call.hit_kind() {
                Some(HitKind::Single) => stats.singles += 1,
                Some(HitKind::Double) => stats.doubles += 1,
                Some(HitKind::Triple) => stats.triples += 1,
                Some(HitKind::HomeRun) => stats.home_runs += 1,
                None => {}
            }
            stats.outs_recorded += call.outs_recorded();
            match call {
                PitchCall::Strikeout => stats.strikeouts += 1,
                PitchCall::Walk => stats.walks += 1,
                _ => {}
            }
        }
    }

    fn finalise(mut self) -> PitcherStats {
        let stats = &mut self.stats;
        stats.batters_faced = self.at_bats.len() as u32;
        stats.innings_pitched = round_dp(stats.outs_recorded as f64 / 3.0, 2);
        let hits = stats.total_hits() as f64;
        stats.baa = if stats.batters_faced > 0 {
            round_dp(hits / stats.batters_faced as f64, 3)
        } else {
            0.0
        };
        stats.whip = if stats.innings_pitched > 0.0 {
            round_dp((hits + stats.walks as f64) / stats.innings_pitched, 3)
        } else {
            0.0
        };
        stats.strike_percentage = if stats.total_pitches > 0 {
            round_dp(stats.strikes as f64 / stats.total_pitches as f64, 3)
        } else {
            0.0
        };
        for pitch_type in PitchType::iter() {
            let ordinal = pitch_type.ordinal();
            stats.type_k_pct[ordinal] = if stats.type_counts[ordinal] > 0 {
                round_dp(
                    100.0 * stats.type_strikes[ordinal] as f64 / stats.type_counts[ordinal] as f64,
                    1,
                )
            } else {
                0.0
            };
        }
        self.stats
    }
}

/// Folds a game's ordered event sequence into one finalized record per pitcher. Records are
/// emitted in the order in which distinct pitcher identifiers first appear. An empty input
/// yields an empty output.
pub fn aggregate(events: &[PitchEvent]) -> Vec<PitcherStats> {
    let mut ordinals = FxHashMap::default();
    let mut tallies: Vec<Tally> = Vec::new();
    for event in events {
        let ordinal = *ordinals.entry(event.pitcher_id).or_insert_with(|| {
            tallies.push(Tally::new(event));
            tallies.len() - 1
        });
        tallies[ordinal].scan(event);
    }
    tallies.into_iter().map(Tally::finalise).collect()
}

pub(crate) fn round_dp(value: f64, decimal_places: u32) -> f64 {
    let scale = 10_f64.powi(decimal_places as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests;
