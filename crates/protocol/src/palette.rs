use serde::{Deserialize, Serialize};

use crate::mode::ActivityMode;
use crate::types::Color;

/// Visual treatment of one activity mode: the point/leg color and the
/// icon glyph name shown in the itinerary's activity cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeStyle {
    pub color: Color,
    pub glyph: String,
}

impl ModeStyle {
    fn new(color: Color, glyph: &str) -> Self {
        Self {
            color,
            glyph: glyph.to_string(),
        }
    }
}

/// The mode → {color, glyph} table consulted by both the thumbnail
/// renderer and the itinerary builder's icon lookup.
///
/// A palette is a plain value so icon sets and color schemes can be
/// swapped without touching the algorithms. Lookup is total: a mode
/// without an entry resolves to the fallback (black, `"!"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    entries: Vec<(ActivityMode, ModeStyle)>,
    fallback: ModeStyle,
}

impl Palette {
    pub fn new(entries: Vec<(ActivityMode, ModeStyle)>, fallback: ModeStyle) -> Self {
        Self { entries, fallback }
    }

    pub fn style_for(&self, mode: ActivityMode) -> &ModeStyle {
        self.entries
            .iter()
            .find(|(m, _)| *m == mode)
            .map_or(&self.fallback, |(_, s)| s)
    }

    pub fn color_for(&self, mode: ActivityMode) -> Color {
        self.style_for(mode).color
    }

    pub fn glyph_for(&self, mode: ActivityMode) -> &str {
        &self.style_for(mode).glyph
    }
}

impl Default for Palette {
    /// The production palette: HSL transit colors plus Material icon
    /// names. `STILL` renders a non-breaking space so the cell keeps its
    /// height without showing an icon.
    fn default() -> Self {
        use ActivityMode::*;
        Self {
            entries: vec![
                (OnBicycle, ModeStyle::new(Color::rgb(0x00, 0x8c, 0x58), "directions_bike")),
                (Walking, ModeStyle::new(Color::rgb(0x20, 0xac, 0x29), "directions_walk")),
                (OnFoot, ModeStyle::new(Color::rgb(0x20, 0xac, 0x29), "directions_walk")),
                (Running, ModeStyle::new(Color::rgb(0xad, 0xd5, 0x00), "directions_run")),
                (InVehicle, ModeStyle::new(Color::rgb(0xdd, 0x00, 0x20), "directions_car")),
                (Train, ModeStyle::new(Color::rgb(0xf7, 0xf7, 0x00), "train")),
                (Subway, ModeStyle::new(Color::rgb(0xf6, 0xbd, 0x00), "subway")),
                (Tram, ModeStyle::new(Color::rgb(0xf6, 0xbd, 0x00), "tram")),
                (Ferry, ModeStyle::new(Color::rgb(0xe6, 0x63, 0x13), "directions_boat")),
                (Bus, ModeStyle::new(Color::rgb(0xe6, 0x63, 0x13), "directions_bus")),
                (Tilting, ModeStyle::new(Color::rgb(0x00, 0x00, 0xff), "screen_rotation")),
                (Still, ModeStyle::new(Color::rgb(0xff, 0xff, 0xff), "\u{00a0}")),
                (Unknown, ModeStyle::new(Color::rgb(0x80, 0x80, 0x80), "?")),
            ],
            fallback: ModeStyle::new(Color::rgb(0, 0, 0), "!"),
        }
    }
}
