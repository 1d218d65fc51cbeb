use serde::{Deserialize, Serialize};

/// Coordinate pair in the shape the maps API uses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Payload of a place-changed event, normalized by the JS glue.
///
/// The autocomplete widget fires for free-text entries too; those carry no
/// geometry and must not change any stored point.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PlaceSelection {
    #[serde(default)]
    pub geometry: Option<PlaceGeometry>,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaceGeometry {
    pub location: LatLng,
}

impl PlaceSelection {
    /// The resolved coordinate, if the widget produced one
    pub fn location(&self) -> Option<LatLng> {
        self.geometry.as_ref().map(|geometry| geometry.location)
    }
}
