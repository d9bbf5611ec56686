use assert_float_eq::*;

use super::*;
use crate::event::PitchCall;

fn event(
    pitcher_id: u64,
    pitch_number: impl Into<Option<u32>>,
    pitch_type: impl Into<Option<PitchType>>,
    pitch_call: impl Into<Option<PitchCall>>,
    at_bat_number: impl Into<Option<u32>>,
) -> PitchEvent {
    PitchEvent {
        pitcher_id,
        is_top: true,
        pitcher_hand: Some("R".into()),
        pitch_number: pitch_number.into(),
        pitch_type: pitch_type.into(),
        pitch_call: pitch_call.into(),
        at_bat_number: at_bat_number.into(),
    }
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(aggregate(&[]).is_empty());
}

#[test]
fn one_record_per_distinct_pitcher_in_first_seen_order() {
    let events = [
        event(30, 1, None, None, 1),
        event(10, 1, None, None, 2),
        event(30, 2, None, None, 3),
        event(20, 1, None, None, 4),
    ];
    let records = aggregate(&events);
    let ids: Vec<_> = records.iter().map(|record| record.pitcher_id).collect();
    assert_eq!(vec![30, 10, 20], ids);
}

#[test]
fn identity_taken_from_first_event() {
    let mut second = event(1, 2, None, None, 1);
    second.is_top = false;
    second.pitcher_hand = Some("L".into());
    let events = [event(1, 1, None, None, 1), second];
    let records = aggregate(&events);
    assert_eq!(1, records[0].team);
    assert_eq!("R", records[0].hand);

    let mut bottom = event(2, 1, None, None, 1);
    bottom.is_top = false;
    bottom.pitcher_hand = None;
    let records = aggregate(&[bottom]);
    assert_eq!(2, records[0].team);
    assert_eq!("Unknown", records[0].hand);
}

#[test]
fn repeated_pitch_numbers_collapse_but_outcomes_count_per_row() {
    // ancillary second row for pitch 1: dedup suppresses the pitch/strike/type tallies,
    // while the row-level outcome classification still lands
    let events = [
        event(1, 1, PitchType::FourSeam, PitchCall::CalledStrike, 1),
        event(1, 1, PitchType::FourSeam, PitchCall::Foul, 1),
        event(1, 2, PitchType::Slider, PitchCall::Strikeout, 1),
    ];
    let records = aggregate(&events);
    assert_eq!(1, records.len());
    let record = &records[0];
    assert_eq!(2, record.total_pitches);
    // the deduplicated foul adds no strike, and a strikeout call is not strike-counted
    assert_eq!(1, record.strikes);
    assert_eq!(1, record.outs_recorded);
    assert_eq!(1, record.strikeouts);
    assert_eq!(1, record.batters_faced);
    assert_eq!(1, record.type_count(PitchType::FourSeam));
    assert_eq!(1, record.type_count(PitchType::Slider));
    assert_float_absolute_eq!(100.0, record.type_k_pct[PitchType::FourSeam.ordinal()]);
    assert_float_absolute_eq!(0.0, record.type_k_pct[PitchType::Slider.ordinal()]);
}

#[test]
fn outs_accumulate_independently_of_dedup() {
    // all three rows repeat pitch number 1; outs and strikeouts still count per row
    let events = [
        event(1, 1, None, PitchCall::FieldOut, 1),
        event(1, 1, None, PitchCall::ForceOut, 2),
        event(1, 1, None, PitchCall::Strikeout, 3),
    ];
    let record = &aggregate(&events)[0];
    assert_eq!(1, record.total_pitches);
    assert_eq!(3, record.outs_recorded);
    assert_eq!(1, record.strikeouts);
    assert_eq!(3, record.batters_faced);
}

#[test]
fn double_play_adds_two_outs_and_one_strike() {
    let events = [event(1, 1, PitchType::Sinker, PitchCall::GroundedIntoDoublePlay, 1)];
    let record = &aggregate(&events)[0];
    assert_eq!(2, record.outs_recorded);
    assert_eq!(1, record.strikes);
    assert_eq!(0, record.total_hits());
    assert_float_absolute_eq!(0.67, record.innings_pitched);
}

#[test]
fn pitch_number_reuse_after_interleaving_counts_again() {
    // dedup compares against the immediately preceding processed number only
    let events = [
        event(1, 1, None, None, 1),
        event(1, 2, None, None, 1),
        event(1, 1, None, None, 2),
    ];
    let record = &aggregate(&events)[0];
    assert_eq!(3, record.total_pitches);
}

#[test]
fn events_without_pitch_numbers_never_count_pitches() {
    let events = [
        event(1, None, PitchType::Changeup, PitchCall::CalledStrike, 1),
        event(1, None, PitchType::Changeup, PitchCall::Walk, 1),
    ];
    let record = &aggregate(&events)[0];
    assert_eq!(0, record.total_pitches);
    assert_eq!(0, record.strikes);
    assert_eq!(0, record.type_count(PitchType::Changeup));
    assert_eq!(1, record.walks);
}

#[test]
fn hit_tallies_and_baa() {
    let events = [
        event(1, 1, None, PitchCall::Single, 1),
        event(1, 2, None, PitchCall::Double, 2),
        event(1, 3, None, PitchCall::Triple, 3),
        event(1, 4, None, PitchCall::HomeRun, 4),
        event(1, 5, None, PitchCall::FieldOut, 5),
        event(1, 6, None, PitchCall::FieldOut, 6),
    ];
    let record = &aggregate(&events)[0];
    assert_eq!(1, record.singles);
    assert_eq!(1, record.doubles);
    assert_eq!(1, record.triples);
    assert_eq!(1, record.home_runs);
    assert_eq!(4, record.total_hits());
    assert_eq!(6, record.batters_faced);
    assert_float_absolute_eq!(0.667, record.baa);
}

#[test]
fn derived_stats_zero_on_zero_denominators() {
    let events = [event(1, None, None, None, None)];
    let record = &aggregate(&events)[0];
    assert_eq!(0, record.total_pitches);
    assert_eq!(0, record.batters_faced);
    assert_float_absolute_eq!(0.0, record.innings_pitched);
    assert_float_absolute_eq!(0.0, record.baa);
    assert_float_absolute_eq!(0.0, record.whip);
    assert_float_absolute_eq!(0.0, record.strike_percentage);
    for pct in record.type_k_pct {
        assert_float_absolute_eq!(0.0, pct);
    }
}

#[test]
fn whip_uses_rounded_innings() {
    let events = [
        event(1, 1, None, PitchCall::Single, 1),
        event(1, 2, None, PitchCall::Walk, 2),
        event(1, 3, None, PitchCall::FieldOut, 3),
        event(1, 4, None, PitchCall::FieldOut, 4),
    ];
    let record = &aggregate(&events)[0];
    assert_float_absolute_eq!(0.67, record.innings_pitched);
    // (1 hit + 1 walk) / 0.67
    assert_float_absolute_eq!(2.985, record.whip);
}

#[test]
fn strike_percentage() {
    let events = [
        event(1, 1, PitchType::FourSeam, PitchCall::CalledStrike, 1),
        event(1, 2, PitchType::FourSeam, PitchCall::Other("ball".into()), 1),
        event(1, 3, PitchType::Curveball, PitchCall::SwingingStrike, 1),
        event(1, 4, PitchType::Curveball, PitchCall::Other("ball".into()), 1),
    ];
    let record = &aggregate(&events)[0];
    assert_eq!(4, record.total_pitches);
    assert_eq!(2, record.strikes);
    assert_float_absolute_eq!(0.5, record.strike_percentage);
    assert_float_absolute_eq!(50.0, record.type_k_pct[PitchType::FourSeam.ordinal()]);
    assert_float_absolute_eq!(50.0, record.type_k_pct[PitchType::Curveball.ordinal()]);
}

#[test]
fn per_type_percentages_are_rounded_to_one_place() {
    let events = [
        event(1, 1, PitchType::Slider, PitchCall::CalledStrike, 1),
        event(1, 2, PitchType::Slider, PitchCall::Other("ball".into()), 1),
        event(1, 3, PitchType::Slider, PitchCall::Other("ball".into()), 1),
    ];
    let record = &aggregate(&events)[0];
    assert_float_absolute_eq!(33.3, record.type_k_pct[PitchType::Slider.ordinal()]);
}

#[test]
fn separate_pitchers_do_not_share_dedup_state() {
    let events = [
        event(1, 1, None, None, 1),
        event(2, 1, None, None, 2),
        event(1, 1, None, None, 3),
    ];
    let records = aggregate(&events);
    // pitcher 1's second row still repeats its own last-seen number
    assert_eq!(1, records[0].total_pitches);
    assert_eq!(1, records[1].total_pitches);
}

#[test]
fn round_dp_scales() {
    assert_float_absolute_eq!(0.67, round_dp(2.0 / 3.0, 2));
    assert_float_absolute_eq!(0.667, round_dp(2.0 / 3.0, 3));
    assert_float_absolute_eq!(33.3, round_dp(100.0 / 3.0, 1));
}
