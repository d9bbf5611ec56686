//! The pitch-level event model: closed enumerations for pitch types and pitch calls, the
//! [PitchEvent] record scanned by the accumulator, and the outcome-classification tables
//! (strike-counted calls, out weights, hit kinds).

use ordinalizer::Ordinal;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// The seven tracked pitch-type codes. Codes outside this set are treated as untyped and
/// contribute to no per-type bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ordinal, Display, EnumCount, EnumIter, EnumString)]
pub enum PitchType {
    #[strum(serialize = "FF")]
    FourSeam,
    #[strum(serialize = "SI")]
    Sinker,
    #[strum(serialize = "FC")]
    Cutter,
    #[strum(serialize = "CU")]
    Curveball,
    #[strum(serialize = "CH")]
    Changeup,
    #[strum(serialize = "SL")]
    Slider,
    #[strum(serialize = "KC")]
    KnuckleCurve,
}

impl From<PitchType> for usize {
    fn from(pitch_type: PitchType) -> Self {
        pitch_type.ordinal()
    }
}

/// Outcome call attached to a pitch event. Unrecognised codes parse into the explicit
/// [PitchCall::Other] variant, carrying the raw code, rather than silently vanishing.
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumString)]
pub enum PitchCall {
    #[strum(serialize = "called_strike")]
    CalledStrike,
    #[strum(serialize = "swinging_strike")]
    SwingingStrike,
    #[strum(serialize = "foul_tip")]
    FoulTip,
    #[strum(serialize = "foul")]
    Foul,
    #[strum(serialize = "field_out")]
    FieldOut,
    #[strum(serialize = "force_out")]
    ForceOut,
    #[strum(serialize = "strikeout")]
    Strikeout,
    #[strum(serialize = "walk")]
    Walk,
    #[strum(serialize = "single")]
    Single,
    #[strum(serialize = "double")]
    Double,
    #[strum(serialize = "triple")]
    Triple,
    #[strum(serialize = "home_run")]
    HomeRun,
    #[strum(serialize = "grounded_into_double_play")]
    GroundedIntoDoublePlay,
    #[strum(default)]
    Other(String),
}

/// Base-hit classification of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Single,
    Double,
    Triple,
    HomeRun,
}

impl PitchCall {
    /// Whether the call belongs to the strike-counted set. Note that `force_out` does not;
    /// balls in play that retire or advance runners otherwise do.
    pub fn counts_as_strike(&self) -> bool {
        matches!(
            self,
            PitchCall::CalledStrike
                | PitchCall::SwingingStrike
                | PitchCall::FoulTip
                | PitchCall::Foul
                | PitchCall::FieldOut
                | PitchCall::Single
                | PitchCall::Double
                | PitchCall::Triple
                | PitchCall::HomeRun
                | PitchCall::GroundedIntoDoublePlay
        )
    }

    /// Number of outs the call records: one for a strikeout or a routine out, two for a
    /// double play, zero for everything else.
    pub fn outs_recorded(&self) -> u32 {
        match self {
            PitchCall::Strikeout | PitchCall::FieldOut | PitchCall::ForceOut => 1,
            PitchCall::GroundedIntoDoublePlay => 2,
            _ => 0,
        }
    }

    pub fn hit_kind(&self) -> Option<HitKind> {
        match self {
            PitchCall::Single => Some(HitKind::Single),
            PitchCall::Double => Some(HitKind::Double),
            PitchCall::Triple => Some(HitKind::Triple),
            PitchCall::HomeRun => Some(HitKind::HomeRun),
            _ => None,
        }
    }
}

/// One row of a game's pitch log. Optional fields were absent or unparseable in the source
/// and contribute to no counter.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchEvent {
    pub pitcher_id: u64,
    pub is_top: bool,
    pub pitcher_hand: Option<String>,
    pub pitch_number: Option<u32>,
    pub pitch_type: Option<PitchType>,
    pub pitch_call: Option<PitchCall>,
    pub at_bat_number: Option<u32>,
}
