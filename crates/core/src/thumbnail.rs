use itinera_protocol::{DrawInstruction, GeoPoint, Palette};

use crate::projection::{ProjectionFrame, fit_thumbnail};

/// Half-side of a thumbnail point marker, in pixels. Doubles as the
/// default fit margin so edge points stay fully on the canvas.
pub const POINT_RADIUS: f64 = 2.0;

/// Fit a projection frame to a route's samples, leaving room for the
/// point markers at the canvas edges.
pub fn fit_route(points: &[GeoPoint], width: f64, height: f64) -> ProjectionFrame {
    let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.lon, p.lat)).collect();
    fit_thumbnail(&coords, width, height, POINT_RADIUS)
}

/// Turn a route's samples into draw instructions: one per point, in
/// input order, positioned by the frame, colored by travel mode, with
/// opacity from the classifier confidence (clamped to `[0, 1]`).
///
/// Nothing is clipped or dropped here; where points cluster, painting
/// order decides what shows, which is the accepted trade-off.
pub fn render_route_thumbnail(
    points: &[GeoPoint],
    frame: &ProjectionFrame,
    palette: &Palette,
) -> Vec<DrawInstruction> {
    points
        .iter()
        .map(|p| DrawInstruction {
            center: frame.project(p.lon, p.lat),
            radius: POINT_RADIUS,
            color: palette.color_for(p.mode),
            alpha: p.confidence.clamp(0.0, 1.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itinera_protocol::{ActivityMode, Color};

    fn sample(mode: ActivityMode, lon: f64, lat: f64, confidence: f64) -> GeoPoint {
        GeoPoint { mode, lon, lat, confidence }
    }

    #[test]
    fn one_instruction_per_point_in_order() {
        let points = [
            sample(ActivityMode::Walking, 24.80, 60.20, 0.4),
            sample(ActivityMode::Bus, 24.88, 60.18, 0.9),
            sample(ActivityMode::Bus, 24.96, 60.17, 0.7),
        ];
        let frame = fit_route(&points, 200.0, 200.0);
        let instructions = render_route_thumbnail(&points, &frame, &Palette::default());

        assert_eq!(instructions.len(), points.len());
        for (inst, point) in instructions.iter().zip(&points) {
            assert_eq!(inst.center, frame.project(point.lon, point.lat));
            assert!((inst.alpha - point.confidence).abs() < f64::EPSILON);
            assert_eq!(inst.radius, POINT_RADIUS);
        }
        // westmost sample first, eastmost last
        assert!(instructions[0].center.x < instructions[2].center.x);
    }

    #[test]
    fn alpha_clamped_to_unit_interval() {
        let points = [
            sample(ActivityMode::Walking, 24.8, 60.2, -0.5),
            sample(ActivityMode::Walking, 24.9, 60.2, 1.7),
        ];
        let frame = fit_route(&points, 100.0, 100.0);
        let instructions = render_route_thumbnail(&points, &frame, &Palette::default());
        assert_eq!(instructions[0].alpha, 0.0);
        assert_eq!(instructions[1].alpha, 1.0);
    }

    #[test]
    fn colors_come_from_the_palette() {
        let points = [
            sample(ActivityMode::InVehicle, 24.8, 60.2, 1.0),
            sample(ActivityMode::Other, 24.9, 60.2, 1.0),
        ];
        let frame = fit_route(&points, 100.0, 100.0);
        let instructions = render_route_thumbnail(&points, &frame, &Palette::default());
        assert_eq!(instructions[0].color, Color::rgb(0xdd, 0x00, 0x20));
        assert_eq!(instructions[1].color, Color::rgb(0, 0, 0)); // fallback
    }
}
