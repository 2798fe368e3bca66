pub mod routes;
pub mod trips;

use itinera_protocol::{RouteGroup, TripDay};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("trips: {0}")]
    Trips(#[from] trips::TripsParseError),
    #[error("routes: {0}")]
    Routes(#[from] routes::RoutesParseError),
    #[error("unable to detect payload kind")]
    UnknownPayload,
}

/// A parsed endpoint payload, whichever kind it turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Trips(Vec<TripDay>),
    Routes(Vec<RouteGroup>),
}

/// Auto-detect the payload kind and parse it.
///
/// The two endpoint shapes are easy to tell apart at the top level:
/// the trips payload is a JSON array of days, the routes payload an
/// object carrying a `clustered` key.
pub fn parse_auto(data: &[u8]) -> Result<Payload, ParseError> {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        if value.is_array() {
            return Ok(Payload::Trips(trips::parse_trips(data)?));
        }
        if let Some(obj) = value.as_object()
            && obj.contains_key("clustered")
        {
            return Ok(Payload::Routes(routes::parse_routes(data)?));
        }
    }
    Err(ParseError::UnknownPayload)
}
