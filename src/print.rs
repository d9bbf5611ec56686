use ordinalizer::Ordinal;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};
use strum::IntoEnumIterator;

use crate::event::PitchType;
use crate::stats::PitcherStats;

/// Renders finalized pitcher records as a console table: identity and line-score columns,
/// then a separated pitch-mix section with one count/K% pair per type.
pub fn tabulate(records: &[PitcherStats]) -> Table {
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![
                Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Centred)),
                Col::new(Styles::default().with(MinWidth(4)).with(HAlign::Centred)),
                Col::new(Styles::default().with(MinWidth(4)).with(HAlign::Centred)),
            ];
            for _ in 0..10 {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(6)).with(HAlign::Right),
                ));
            }
            cols.push(Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(2))
                    .with(HAlign::Centred),
            ));
            for _ in PitchType::iter() {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(9)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row({
            let mut header_cells: Vec<_> = [
                "Pitcher", "Team", "Hand", "IP", "H", "K", "BB", "BF", "BAA", "WHIP", "Pitches",
                "Strikes", "Strike%", "",
            ]
            .into_iter()
            .map(Into::into)
            .collect();
            for pitch_type in PitchType::iter() {
                header_cells.push(format!("{pitch_type} (K%)").into());
            }
            Row::new(
                Styles::default().with(Header(true)).with(Separator(true)),
                header_cells,
            )
        });

    for record in records {
        let mut row_cells: Vec<_> = vec![
            format!("{}", record.pitcher_id).into(),
            format!("{}", record.team).into(),
            record.hand.clone().into(),
            format!("{:.2}", record.innings_pitched).into(),
            format!("{}", record.total_hits()).into(),
            format!("{}", record.strikeouts).into(),
            format!("{}", record.walks).into(),
            format!("{}", record.batters_faced).into(),
            format!("{:.3}", record.baa).into(),
            format!("{:.3}", record.whip).into(),
            format!("{}", record.total_pitches).into(),
            format!("{}", record.strikes).into(),
            format!("{:.3}", record.strike_percentage).into(),
            "".into(),
        ];
        for pitch_type in PitchType::iter() {
            let ordinal = pitch_type.ordinal();
            row_cells.push(
                format!(
                    "{} ({:.1})",
                    record.type_counts[ordinal], record.type_k_pct[ordinal]
                )
                .into(),
            );
        }
        table.push_row(Row::new(Styles::default(), row_cells));
    }

    table
}
