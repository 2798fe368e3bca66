use serde::{Deserialize, Serialize};

use crate::types::{Color, Point};

/// A single, stateless draw instruction for a route thumbnail.
///
/// The renderer emits one instruction per input point, in input order;
/// the external canvas painter consumes the list sequentially, so later
/// instructions paint over earlier ones where points cluster. No
/// clipping happens here — the canvas clips naturally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawInstruction {
    pub center: Point,
    /// Half the side of the square marker, in pixels.
    pub radius: f64,
    pub color: Color,
    /// Opacity in `[0, 1]`, from the sample's classifier confidence.
    pub alpha: f64,
}
