//! A single-pass, per-pitcher game-statistics engine for pitch-level baseball event logs.
//! Walks one game's ordered pitch events and produces a finalized statistics record per
//! pitcher, plus the usage and movement datasets consumed by charting tools.

pub mod csv;
pub mod event;
pub mod file;
pub mod ingest;
pub mod movement;
pub mod print;
pub mod report;
pub mod sort;
pub mod stats;
pub mod usage;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
