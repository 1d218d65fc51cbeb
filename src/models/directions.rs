use serde::{Deserialize, Serialize};

use super::place::LatLng;

/// Travel mode sent with every route request. Only driving is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TravelMode {
    Driving,
}

/// One intermediate stop. Always a mandatory stopover, never a via point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionsWaypoint {
    pub location: LatLng,
    pub stopover: bool,
}

/// Request handed to the external directions service, serialized camelCase
/// to match its wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsRequest {
    pub origin: LatLng,
    pub destination: LatLng,
    pub waypoints: Vec<DirectionsWaypoint>,
    pub travel_mode: TravelMode,
}

/// Parsed summary of the service response. The raw payload carries much
/// more; only the per-leg distances matter here.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DirectionsResult {
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteLeg {
    pub distance: Distance,
}

/// Distance as the service reports it: meters plus a display string
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Distance {
    pub value: u64,
    #[serde(default)]
    pub text: Option<String>,
}

impl DirectionsResult {
    /// Total length of the first returned route, summing every leg.
    /// `None` when the response carried no routes at all.
    pub fn first_route_distance_meters(&self) -> Option<u64> {
        self.routes
            .first()
            .map(|route| route.legs.iter().map(|leg| leg.distance.value).sum())
    }
}
