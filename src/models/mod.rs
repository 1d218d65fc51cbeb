pub mod directions;
pub mod place;

pub use directions::{
    DirectionsRequest, DirectionsResult, DirectionsWaypoint, Distance, Route, RouteLeg, TravelMode,
};
pub use place::{LatLng, PlaceGeometry, PlaceSelection};
