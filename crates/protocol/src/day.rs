use serde::{Deserialize, Serialize};

/// One day of classified travel history, as supplied by the external
/// data layer: an ordered list of row descriptors, each pairing a row
/// class (`"time"`, `"activity"`, `"place"`, …) with run-length encoded
/// cells. Row order encodes chronology and is never resorted.
///
/// ```text
///   trips payload ──▶ TripDay ──▶ layout::build_day_grid ──▶ GridModel ──▶ DOM renderer
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDay {
    /// ISO date (`"2016-01-10"`); the layout builder derives the weekday
    /// abbreviation from it.
    pub date: String,
    pub rows: Vec<DayRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRow {
    /// Row class from upstream. Known classes get dedicated cell
    /// treatment; unknown classes pass through untouched.
    pub class: String,
    pub cells: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    pub value: CellValue,
    /// Column span, copied verbatim into the grid. Upstream guarantees
    /// the spans of each row sum to the table's column count.
    pub colspan: u32,
}

/// Cell payload. `Gap` (wire `null`) and `NoStop` (wire `false`) are
/// distinct input states: a gap is missing data, a no-stop is a movement
/// interval, and their visual classes differ (`gap` vs `move`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Gap,
    NoStop,
    Text(String),
    Timed { text: String, align: TimeAlign },
    Leg {
        activity: String,
        duration: String,
        /// Opaque leg identifier, carried through so the consumer can
        /// wire up mode-correction actions. Never interpreted here.
        leg_id: Option<i64>,
    },
}

/// Alignment tag on a time cell: whether the time marks the start of an
/// interval, its end, or both ends at once (back-to-back legs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeAlign {
    Start,
    End,
    Both,
    None,
}

impl TimeAlign {
    /// Parse a wire tag; anything unrecognized means no alignment.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "start" => Self::Start,
            "end" => Self::End,
            "both" => Self::Both,
            _ => Self::None,
        }
    }
}
