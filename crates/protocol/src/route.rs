use serde::{Deserialize, Serialize};

use crate::day::TripDay;
use crate::mode::ActivityMode;

/// One classified GPS sample along a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub mode: ActivityMode,
    pub lon: f64,
    pub lat: f64,
    /// Classifier confidence in `[0, 1]`; drives draw opacity, never
    /// position.
    pub confidence: f64,
}

/// A repeated route between one origin-destination pair: the sample
/// trace to draw as a thumbnail, plus the days on which it was traveled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub points: Vec<GeoPoint>,
    pub days: Vec<TripDay>,
}

/// Routes clustered under an origin-destination header, as grouped by
/// the external data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGroup {
    pub origin: String,
    pub destination: String,
    pub routes: Vec<Route>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let group = RouteGroup {
            origin: "Kamppi".into(),
            destination: "Otaniemi".into(),
            routes: vec![Route {
                points: vec![GeoPoint {
                    mode: ActivityMode::Bus,
                    lon: 24.80,
                    lat: 60.18,
                    confidence: 0.75,
                }],
                days: vec![],
            }],
        };
        let json = serde_json::to_string(&group).unwrap_or_default();
        let group2: RouteGroup = serde_json::from_str(&json).unwrap_or(RouteGroup {
            origin: String::new(),
            destination: String::new(),
            routes: vec![],
        });
        assert_eq!(group, group2);
    }
}
