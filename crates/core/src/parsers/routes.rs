//! Parser for the routes endpoint payload: routes clustered by
//! origin-destination pair, with GPS sample traces and references into
//! a side table of trip days.

use std::collections::BTreeMap;

use itinera_protocol::{ActivityMode, GeoPoint, Route, RouteGroup, TripDay};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::trips::{self, TripsParseError};

#[derive(Debug, Error)]
pub enum RoutesParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a top-level object with a clustered array")]
    NotClustered,
    #[error("group {0}: not an [[origin, destination], routes] pair")]
    GroupShape(usize),
    #[error("group {0}: route {1}: missing probs array")]
    RouteShape(usize, usize),
    #[error("group {0}: route {1}: unsupported point: {2}")]
    PointShape(usize, usize, Value),
    #[error("route references unknown trip {0}")]
    UnknownTrip(i64),
    #[error("trip table key is not a numeric id: {0}")]
    BadTripId(String),
    #[error("trip {0}: bad day record")]
    TripShape(i64),
    #[error("trip day rows: {0}")]
    Rows(#[from] TripsParseError),
}

/// Parse a routes payload into origin-destination groups, resolving
/// each route's trip references against the payload's trip table.
pub fn parse_routes(data: &[u8]) -> Result<Vec<RouteGroup>, RoutesParseError> {
    let value: Value = serde_json::from_slice(data)?;
    let clustered = value
        .get("clustered")
        .and_then(Value::as_array)
        .ok_or(RoutesParseError::NotClustered)?;
    let trip_table = parse_trip_table(&value)?;

    clustered
        .iter()
        .enumerate()
        .map(|(g, group)| parse_group(g, group, &trip_table))
        .collect()
}

/// The `trips` side table: day records keyed by trip id.
fn parse_trip_table(payload: &Value) -> Result<BTreeMap<i64, TripDay>, RoutesParseError> {
    let Some(table) = payload.get("trips").and_then(Value::as_object) else {
        return Ok(BTreeMap::new());
    };

    table
        .iter()
        .map(|(key, trip)| {
            let id: i64 = key
                .parse()
                .map_err(|_| RoutesParseError::BadTripId(key.clone()))?;
            let date = trip
                .get("date")
                .and_then(Value::as_str)
                .ok_or(RoutesParseError::TripShape(id))?;
            let render = trip
                .get("render")
                .ok_or(RoutesParseError::TripShape(id))?;
            let day = TripDay {
                date: date.to_string(),
                rows: trips::parse_rows(0, render)?,
            };
            Ok((id, day))
        })
        .collect()
}

fn parse_group(
    g: usize,
    group: &Value,
    trip_table: &BTreeMap<i64, TripDay>,
) -> Result<RouteGroup, RoutesParseError> {
    let pair = group
        .as_array()
        .filter(|a| a.len() == 2)
        .ok_or(RoutesParseError::GroupShape(g))?;
    let header = pair[0]
        .as_array()
        .filter(|a| a.len() == 2)
        .ok_or(RoutesParseError::GroupShape(g))?;
    let (Some(origin), Some(destination)) = (header[0].as_str(), header[1].as_str()) else {
        return Err(RoutesParseError::GroupShape(g));
    };
    let routes = pair[1].as_array().ok_or(RoutesParseError::GroupShape(g))?;

    let routes = routes
        .iter()
        .enumerate()
        .map(|(r, route)| parse_route(g, r, route, trip_table))
        .collect::<Result<_, _>>()?;

    Ok(RouteGroup {
        origin: origin.to_string(),
        destination: destination.to_string(),
        routes,
    })
}

/// Raw route record as found on the wire: the sample trace plus
/// references into the payload's trip table.
#[derive(Debug, Deserialize)]
struct RawRoute {
    probs: Vec<Value>,
    #[serde(default)]
    trips: Vec<RawTripRef>,
}

#[derive(Debug, Deserialize)]
struct RawTripRef {
    id: i64,
}

fn parse_route(
    g: usize,
    r: usize,
    route: &Value,
    trip_table: &BTreeMap<i64, TripDay>,
) -> Result<Route, RoutesParseError> {
    let raw: RawRoute =
        serde_json::from_value(route.clone()).map_err(|_| RoutesParseError::RouteShape(g, r))?;

    let points = raw
        .probs
        .iter()
        .map(|p| parse_point(p).ok_or_else(|| RoutesParseError::PointShape(g, r, p.clone())))
        .collect::<Result<_, _>>()?;

    // trip references are optional; a dangling one is an error
    let days = raw
        .trips
        .iter()
        .map(|trip_ref| {
            trip_table
                .get(&trip_ref.id)
                .cloned()
                .ok_or(RoutesParseError::UnknownTrip(trip_ref.id))
        })
        .collect::<Result<_, _>>()?;

    Ok(Route { points, days })
}

/// One sample: `[[mode, lon, lat], confidence]`.
fn parse_point(value: &Value) -> Option<GeoPoint> {
    let pair = value.as_array().filter(|a| a.len() == 2)?;
    let confidence = pair[1].as_f64()?;
    let coords = pair[0].as_array().filter(|a| a.len() == 3)?;
    Some(GeoPoint {
        mode: ActivityMode::from_token(coords[0].as_str()?),
        lon: coords[1].as_f64()?,
        lat: coords[2].as_f64()?,
        confidence,
    })
}
