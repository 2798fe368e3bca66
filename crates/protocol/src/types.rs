use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 8-bit RGBA color. Alpha defaults to fully opaque; per-point draw
/// opacity travels separately on the instruction, not in the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb` form for CSS/SVG consumers. Alpha is not encoded.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_form() {
        assert_eq!(Color::rgb(0x00, 0x8c, 0x58).to_hex(), "#008c58");
        assert_eq!(Color::rgb(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn serde_roundtrip() {
        let p = Point::new(1.5, -2.0);
        let json = serde_json::to_string(&p).unwrap_or_default();
        let p2: Point = serde_json::from_str(&json).unwrap_or(Point::new(0.0, 0.0));
        assert_eq!(p, p2);
    }
}
