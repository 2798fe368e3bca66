//! Parser for the trips endpoint payload: an array of days, each with
//! run-length encoded `[class, [[value, colspan], …]]` rows.

use itinera_protocol::{CellValue, DayCell, DayRow, TimeAlign, TripDay};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TripsParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a top-level array of days")]
    NotAnArray,
    #[error("day {0}: not an object with date and data")]
    DayShape(usize),
    #[error("day {0}: row {1} is not a [class, cells] pair")]
    RowShape(usize, usize),
    #[error("day {0}: unsupported cell value: {1}")]
    CellShape(usize, Value),
}

/// Parse a trips payload into days.
pub fn parse_trips(data: &[u8]) -> Result<Vec<TripDay>, TripsParseError> {
    let value: Value = serde_json::from_slice(data)?;
    let days = value.as_array().ok_or(TripsParseError::NotAnArray)?;

    days.iter()
        .enumerate()
        .map(|(i, day)| {
            let date = day
                .get("date")
                .and_then(Value::as_str)
                .ok_or(TripsParseError::DayShape(i))?;
            let data = day.get("data").ok_or(TripsParseError::DayShape(i))?;
            Ok(TripDay {
                date: date.to_string(),
                rows: parse_rows(i, data)?,
            })
        })
        .collect()
}

/// Parse one day's `[[class, cells], …]` row list. Shared with the
/// routes parser, whose trip records embed the same row shape.
pub(crate) fn parse_rows(day_idx: usize, value: &Value) -> Result<Vec<DayRow>, TripsParseError> {
    let rows = value.as_array().ok_or(TripsParseError::DayShape(day_idx))?;

    rows.iter()
        .enumerate()
        .map(|(r, row)| {
            let pair = row.as_array().filter(|a| a.len() == 2);
            let (class, cells) = match pair {
                Some(a) => (a[0].as_str(), a[1].as_array()),
                None => (None, None),
            };
            let (Some(class), Some(cells)) = (class, cells) else {
                return Err(TripsParseError::RowShape(day_idx, r));
            };

            let cells = cells
                .iter()
                .map(|cell| parse_cell(day_idx, cell))
                .collect::<Result<_, _>>()?;
            Ok(DayRow {
                class: class.to_string(),
                cells,
            })
        })
        .collect()
}

fn parse_cell(day_idx: usize, cell: &Value) -> Result<DayCell, TripsParseError> {
    let bad = || TripsParseError::CellShape(day_idx, cell.clone());

    let pair = cell.as_array().filter(|a| a.len() == 2).ok_or_else(bad)?;
    let colspan = pair[1].as_u64().and_then(|n| u32::try_from(n).ok()).ok_or_else(bad)?;
    let value = parse_cell_value(&pair[0]).ok_or_else(bad)?;

    Ok(DayCell { value, colspan })
}

/// Structural decode of a cell payload, independent of row class:
/// `null` is a gap, `false` a no-stop movement, a string a place label,
/// a two-string array a time entry, a three-element array a leg.
fn parse_cell_value(value: &Value) -> Option<CellValue> {
    match value {
        Value::Null => Some(CellValue::Gap),
        Value::Bool(false) => Some(CellValue::NoStop),
        Value::String(s) => Some(CellValue::Text(s.clone())),
        Value::Array(parts) => match parts.as_slice() {
            [Value::String(text), Value::String(tag)] => Some(CellValue::Timed {
                text: text.clone(),
                align: TimeAlign::from_tag(tag),
            }),
            [Value::String(activity), Value::String(duration), leg_id] => Some(CellValue::Leg {
                activity: activity.clone(),
                duration: duration.clone(),
                leg_id: leg_id.as_i64(),
            }),
            _ => None,
        },
        _ => None,
    }
}
