use chrono::NaiveDate;
use itinera_protocol::{
    ActivityMode, CellContent, CellValue, DayCell, GridCell, GridModel, GridRow, Palette,
    TimeAlign, TripDay,
};

use crate::label::break_place_label;

/// Lay out one day of travel history as a grid description.
///
/// A single ordered pass over the day's rows (order encodes chronology
/// and is preserved), preceded by a row count so the day-anchor cell can
/// span every row of the day. The anchor is attached to the first row
/// only; its content is the date plus a weekday abbreviation derived
/// from the date string.
///
/// The input is never mutated and the output is a fresh tree. Colspans
/// are copied verbatim — span validation is the caller's contract.
pub fn build_day_grid(day: &TripDay, palette: &Palette) -> GridModel {
    let row_count = day.rows.len() as u32;

    let rows = day
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut cells = Vec::with_capacity(row.cells.len() + 1);
            if i == 0 {
                cells.push(anchor_cell(&day.date, row_count));
            }
            cells.extend(row.cells.iter().map(|c| build_cell(&row.class, c, palette)));
            GridRow {
                class: row.class.clone(),
                cells,
            }
        })
        .collect();

    GridModel { rows }
}

fn anchor_cell(date: &str, row_count: u32) -> GridCell {
    GridCell {
        classes: vec!["daycell".to_string()],
        colspan: 1,
        rowspan: row_count,
        content: CellContent::DayAnchor {
            date: date.to_string(),
            weekday: weekday_abbrev(date),
        },
    }
}

/// Weekday abbreviation ("Mon".."Sun") for an ISO date string. A date
/// that does not parse yields none; the anchor then renders date-only.
fn weekday_abbrev(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%a").to_string())
}

fn build_cell(class: &str, cell: &DayCell, palette: &Palette) -> GridCell {
    let mut classes = vec![class.to_string()];

    // A gap is a gap on any row class; check before class dispatch.
    let content = if cell.value == CellValue::Gap {
        classes.push("gap".to_string());
        CellContent::Empty
    } else {
        match (class, &cell.value) {
            ("time", CellValue::Timed { text, align }) => {
                match align {
                    TimeAlign::Start => classes.push("left".to_string()),
                    TimeAlign::Both => {
                        classes.push("left".to_string());
                        classes.push("both".to_string());
                    }
                    TimeAlign::End => classes.push("right".to_string()),
                    TimeAlign::None => {}
                }
                CellContent::Text(text.clone())
            }
            ("activity", CellValue::Leg { activity, duration, leg_id }) => {
                let token = activity.split_whitespace().next().unwrap_or("");
                let mode = ActivityMode::from_token(token);
                if !token.is_empty() {
                    classes.push(token.to_string());
                }
                CellContent::Activity {
                    glyph: palette.glyph_for(mode).to_string(),
                    text: activity.clone(),
                    duration: duration.clone(),
                    leg_id: *leg_id,
                }
            }
            ("place", CellValue::NoStop) => {
                classes.push("move".to_string());
                CellContent::Empty
            }
            ("place", CellValue::Text(label)) => CellContent::Text(break_place_label(label)),

            // Permissive fallback: unknown classes and mismatched
            // payloads render as literally as possible.
            (_, CellValue::Text(s)) => CellContent::Text(s.clone()),
            (_, CellValue::Timed { text, .. }) => CellContent::Text(text.clone()),
            (_, CellValue::Leg { activity, .. }) => CellContent::Text(activity.clone()),
            (_, CellValue::NoStop) => {
                classes.push("move".to_string());
                CellContent::Empty
            }
            (_, CellValue::Gap) => CellContent::Empty,
        }
    };

    GridCell {
        classes,
        colspan: cell.colspan,
        rowspan: 1,
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itinera_protocol::DayRow;

    fn cell(value: CellValue, colspan: u32) -> DayCell {
        DayCell { value, colspan }
    }

    fn sample_day() -> TripDay {
        TripDay {
            date: "2016-01-10".into(),
            rows: vec![
                DayRow {
                    class: "time".into(),
                    cells: vec![
                        cell(
                            CellValue::Timed { text: "08:15".into(), align: TimeAlign::Start },
                            1,
                        ),
                        cell(
                            CellValue::Timed { text: "08:40".into(), align: TimeAlign::Both },
                            2,
                        ),
                        cell(
                            CellValue::Timed { text: "09:05".into(), align: TimeAlign::End },
                            1,
                        ),
                    ],
                },
                DayRow {
                    class: "activity".into(),
                    cells: vec![
                        cell(
                            CellValue::Leg {
                                activity: "BUS 550".into(),
                                duration: "25min 8.4km".into(),
                                leg_id: Some(1234),
                            },
                            2,
                        ),
                        cell(CellValue::Gap, 2),
                    ],
                },
                DayRow {
                    class: "place".into(),
                    cells: vec![
                        cell(CellValue::Text("Kamppi / Central Railway Station".into()), 1),
                        cell(CellValue::NoStop, 2),
                        cell(CellValue::Gap, 1),
                    ],
                },
            ],
        }
    }

    #[test]
    fn anchor_spans_all_rows_on_first_row_only() {
        let grid = build_day_grid(&sample_day(), &Palette::default());
        assert_eq!(grid.rows.len(), 3);

        let anchors: Vec<(usize, &GridCell)> = grid
            .rows
            .iter()
            .enumerate()
            .flat_map(|(i, r)| r.cells.iter().map(move |c| (i, c)))
            .filter(|(_, c)| matches!(c.content, CellContent::DayAnchor { .. }))
            .collect();
        assert_eq!(anchors.len(), 1);
        let (row_index, anchor) = anchors[0];
        assert_eq!(row_index, 0);
        assert_eq!(anchor.rowspan, 3);
        assert!(anchor.has_class("daycell"));
        match &anchor.content {
            CellContent::DayAnchor { date, weekday } => {
                assert_eq!(date, "2016-01-10");
                assert_eq!(weekday.as_deref(), Some("Sun"));
            }
            other => panic!("unexpected anchor content: {other:?}"),
        }
    }

    #[test]
    fn colspans_pass_through() {
        let day = sample_day();
        let grid = build_day_grid(&day, &Palette::default());
        for (i, row) in day.rows.iter().enumerate() {
            let input_total: u32 = row.cells.iter().map(|c| c.colspan).sum();
            assert_eq!(grid.row_span_total(i), input_total, "row {i}");
        }
    }

    #[test]
    fn time_alignment_classes() {
        let grid = build_day_grid(&sample_day(), &Palette::default());
        let time_cells = &grid.rows[0].cells[1..]; // skip anchor
        assert!(time_cells[0].has_class("left") && !time_cells[0].has_class("both"));
        assert!(time_cells[1].has_class("left") && time_cells[1].has_class("both"));
        assert!(time_cells[2].has_class("right"));
    }

    #[test]
    fn activity_cell_mode_and_icon() {
        let grid = build_day_grid(&sample_day(), &Palette::default());
        let leg = &grid.rows[1].cells[0];
        assert!(leg.has_class("activity"));
        assert!(leg.has_class("BUS"));
        match &leg.content {
            CellContent::Activity { glyph, text, duration, leg_id } => {
                assert_eq!(glyph, "directions_bus");
                assert_eq!(text, "BUS 550");
                assert_eq!(duration, "25min 8.4km");
                assert_eq!(*leg_id, Some(1234));
            }
            other => panic!("unexpected activity content: {other:?}"),
        }
    }

    #[test]
    fn gap_and_move_cells_stay_distinct() {
        let grid = build_day_grid(&sample_day(), &Palette::default());
        let places = &grid.rows[2].cells;
        assert!(places[1].has_class("move"));
        assert_eq!(places[1].content, CellContent::Empty);
        assert!(places[2].has_class("gap"));
        assert_eq!(places[2].content, CellContent::Empty);
        // gap in the activity row too, before class dispatch
        assert!(grid.rows[1].cells[1].has_class("gap"));
    }

    #[test]
    fn place_label_gets_breaking_treatment() {
        let grid = build_day_grid(&sample_day(), &Palette::default());
        match &grid.rows[2].cells[0].content {
            CellContent::Text(text) => {
                assert_eq!(text, "Kamppi\u{00a0}/ Central Railway Station");
            }
            other => panic!("unexpected place content: {other:?}"),
        }
    }

    #[test]
    fn unknown_row_class_passes_through() {
        let day = TripDay {
            date: "not-a-date".into(),
            rows: vec![DayRow {
                class: "summary".into(),
                cells: vec![cell(CellValue::Text("14 km".into()), 4)],
            }],
        };
        let grid = build_day_grid(&day, &Palette::default());
        let row = &grid.rows[0];
        assert_eq!(row.class, "summary");
        let cell = &row.cells[1];
        assert!(cell.has_class("summary"));
        assert_eq!(cell.content, CellContent::Text("14 km".into()));
        // unparseable date: anchor renders date-only
        match &row.cells[0].content {
            CellContent::DayAnchor { weekday, .. } => assert_eq!(*weekday, None),
            other => panic!("unexpected anchor content: {other:?}"),
        }
    }

    #[test]
    fn deterministic() {
        let day = sample_day();
        let palette = Palette::default();
        assert_eq!(build_day_grid(&day, &palette), build_day_grid(&day, &palette));
    }
}
