//! Map-projection fitting for route thumbnails: derive the transform
//! that places a set of lon/lat samples inside a fixed-size canvas.

use itinera_protocol::Point;

/// Deepest slippy-map tile level the zoom fit will return.
const MAX_TILE_ZOOM: u8 = 19;

/// Pixels per degree of longitude at the equator for a given tile zoom
/// (256-pixel tiles, 360 degrees around).
fn pixels_per_degree(zoom: u8) -> f64 {
    256.0 * f64::from(1u32 << zoom) / 360.0
}

/// The transform produced by a fit: derived once per point set, applied
/// per point, and discarded after rendering. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionFrame {
    /// Uniform pixels-per-degree scale.
    pub scale: f64,
    /// Meridian-convergence compensation: `cos` of the extent's mean
    /// latitude, applied to longitudes before scaling.
    pub lon_correction: f64,
    x_min: f64,
    y_min: f64,
    x_offset: f64,
    y_offset: f64,
}

impl ProjectionFrame {
    /// A unit transform centered on the canvas; what a fit of nothing
    /// (or of a fully degenerate extent) falls back to.
    fn neutral(width: f64, height: f64) -> Self {
        Self {
            scale: 1.0,
            lon_correction: 1.0,
            x_min: 0.0,
            y_min: 0.0,
            x_offset: width / 2.0,
            y_offset: height / 2.0,
        }
    }

    /// Project one geographic sample into canvas pixels. Latitude is
    /// inverted: canvas y grows downward, latitude grows upward.
    pub fn project(&self, lon: f64, lat: f64) -> Point {
        Point::new(
            self.scale * (lon * self.lon_correction - self.x_min) + self.x_offset,
            self.scale * (-lat - self.y_min) + self.y_offset,
        )
    }
}

/// Corrected bounding box of a point set: x over corrected longitudes,
/// y over negated latitudes.
struct Extent {
    lon_correction: f64,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Extent {
    fn of(points: &[(f64, f64)]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut lat_min = f64::INFINITY;
        let mut lat_max = f64::NEG_INFINITY;
        for &(_, lat) in points {
            lat_min = lat_min.min(lat);
            lat_max = lat_max.max(lat);
        }

        let lon_correction = ((lat_min + lat_max) / 2.0).to_radians().cos();
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        for &(lon, _) in points {
            let x = lon * lon_correction;
            x_min = x_min.min(x);
            x_max = x_max.max(x);
        }

        Some(Self {
            lon_correction,
            x_min,
            x_max,
            // y is down on canvas
            y_min: -lat_max,
            y_max: -lat_min,
        })
    }

    fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Frame placing this extent at the given scale, centered.
    fn framed(&self, scale: f64, width: f64, height: f64) -> ProjectionFrame {
        ProjectionFrame {
            scale,
            lon_correction: self.lon_correction,
            x_min: self.x_min,
            y_min: self.y_min,
            x_offset: (width - scale * self.width()) / 2.0,
            y_offset: (height - scale * self.height()) / 2.0,
        }
    }
}

/// Equirectangular fit for thumbnail sparklines: uniform scale chosen so
/// the corrected bounding box fits the canvas inside `margin` pixels on
/// every side, centered.
///
/// A degenerate axis (zero extent) drops out of the scale choice; a
/// fully degenerate point set (all samples identical) never divides by
/// zero and gets the neutral scale of 1, centered on the point.
pub fn fit_thumbnail(
    points: &[(f64, f64)],
    width: f64,
    height: f64,
    margin: f64,
) -> ProjectionFrame {
    let Some(extent) = Extent::of(points) else {
        return ProjectionFrame::neutral(width, height);
    };

    let sx = (extent.width() > 0.0).then(|| (width - 2.0 * margin) / extent.width());
    let sy = (extent.height() > 0.0).then(|| (height - 2.0 * margin) / extent.height());
    let scale = match (sx, sy) {
        (Some(sx), Some(sy)) => sx.min(sy),
        (Some(s), None) | (None, Some(s)) => s,
        (None, None) => 1.0,
    };

    extent.framed(scale, width, height)
}

/// Slippy-map fit for tile overlays: the deepest integer zoom whose
/// pixels-per-degree scale keeps the extent (latitude compressed by the
/// cosine of its center) within the canvas on both axes. The floor of
/// the smaller per-axis candidate, clamped to `0..=19`.
pub fn fit_tile_zoom(points: &[(f64, f64)], width: f64, height: f64) -> (u8, ProjectionFrame) {
    let Some(extent) = Extent::of(points) else {
        return (MAX_TILE_ZOOM, ProjectionFrame::neutral(width, height));
    };

    // Largest z with extent_deg * 256 * 2^z / 360 <= canvas, per axis.
    let zoom_candidate = |extent_deg: f64, canvas_px: f64| {
        (extent_deg > 0.0).then(|| (canvas_px * 360.0 / (256.0 * extent_deg)).log2())
    };
    let zx = zoom_candidate(extent.width(), width);
    let zy = zoom_candidate(extent.height(), height);

    let zoom = match (zx, zy) {
        (Some(zx), Some(zy)) => zx.min(zy),
        (Some(z), None) | (None, Some(z)) => z,
        (None, None) => f64::from(MAX_TILE_ZOOM),
    };
    let zoom = zoom.floor().clamp(0.0, f64::from(MAX_TILE_ZOOM)) as u8;

    (zoom, extent.framed(pixels_per_degree(zoom), width, height))
}
