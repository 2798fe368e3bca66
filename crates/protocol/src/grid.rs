use serde::{Deserialize, Serialize};

/// The layout builder's output: a fresh tree the external DOM renderer
/// walks to materialize table rows and cells. Cell classes and spans are
/// defined here; tag names and styling belong to the consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridModel {
    pub rows: Vec<GridRow>,
}

impl GridModel {
    /// Sum of colspans in the given row, excluding the day-anchor cell
    /// (which sits outside the day's own columns).
    pub fn row_span_total(&self, index: usize) -> u32 {
        self.rows.get(index).map_or(0, |row| {
            row.cells
                .iter()
                .filter(|c| !matches!(c.content, CellContent::DayAnchor { .. }))
                .map(|c| c.colspan)
                .sum()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    pub class: String,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    /// CSS-like class list; the first entry is the row class, further
    /// entries encode alignment, mode, or the gap/move markers.
    pub classes: Vec<String>,
    pub colspan: u32,
    pub rowspan: u32,
    pub content: CellContent,
}

impl GridCell {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellContent {
    /// Gap and move cells render with a marker class and no text.
    Empty,
    Text(String),
    /// The one cell anchoring a day: the date plus the derived weekday
    /// abbreviation (absent when the date string does not parse).
    DayAnchor {
        date: String,
        weekday: Option<String>,
    },
    /// An activity leg: icon glyph, the leg's text, and its duration
    /// line. `leg_id` is passed through for external mode correction.
    Activity {
        glyph: String,
        text: String,
        duration: String,
        leg_id: Option<i64>,
    },
}
