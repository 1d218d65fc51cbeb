use crate::models::{
    DirectionsRequest, DirectionsResult, DirectionsWaypoint, LatLng, PlaceSelection, TravelMode,
};
use crate::services::DirectionsError;
use crate::utils::format_kms;

/// Which input slot a place selection targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceRole {
    Origin,
    Destination,
    Stop(usize),
}

/// Planner state - plain struct compatible with a single use_state handle.
///
/// Everything here is transient and discarded on reload. `directions` and
/// `distance` are only ever overwritten by a later successful calculation,
/// never cleared; a stale value stays visible after a failed attempt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlannerState {
    pub origin: Option<LatLng>,
    pub destination: Option<LatLng>,
    pub stops: Vec<Option<LatLng>>,
    pub directions: Option<DirectionsResult>,
    pub distance: Option<String>,
    pub loading: bool,
}

impl PlannerState {
    /// Stores the selected coordinate in the slot named by `role`.
    ///
    /// Returns false without touching anything when the selection carries no
    /// geometry, or when a stale callback names a stop slot that no longer
    /// exists.
    pub fn select_place(&mut self, role: PlaceRole, place: &PlaceSelection) -> bool {
        let Some(location) = place.location() else {
            return false;
        };

        match role {
            PlaceRole::Origin => self.origin = Some(location),
            PlaceRole::Destination => self.destination = Some(location),
            PlaceRole::Stop(index) => {
                let Some(slot) = self.stops.get_mut(index) else {
                    return false;
                };
                *slot = Some(location);
            }
        }
        true
    }

    /// Appends one empty stop slot. No upper bound.
    pub fn add_stop(&mut self) {
        self.stops.push(None);
    }

    /// Builds the route request and raises the loading flag, or returns
    /// `None` when either endpoint is missing (loading stays untouched).
    ///
    /// Only stops that currently hold a coordinate go into the request,
    /// in insertion order, each as a mandatory stopover.
    pub fn begin_calculation(&mut self) -> Option<DirectionsRequest> {
        let (Some(origin), Some(destination)) = (self.origin, self.destination) else {
            return None;
        };

        self.loading = true;
        Some(DirectionsRequest {
            origin,
            destination,
            waypoints: self
                .stops
                .iter()
                .flatten()
                .map(|&location| DirectionsWaypoint {
                    location,
                    stopover: true,
                })
                .collect(),
            travel_mode: TravelMode::Driving,
        })
    }

    /// Applies a finished calculation. On success the result and its
    /// formatted total distance are stored; on failure (including an OK
    /// payload with no routes) previous values stay visible. The loading
    /// flag drops in every branch, exactly once.
    pub fn complete_calculation(&mut self, outcome: Result<DirectionsResult, DirectionsError>) {
        match outcome {
            Ok(result) => match result.first_route_distance_meters() {
                Some(meters) => {
                    self.distance = Some(format_kms(meters));
                    self.directions = Some(result);
                }
                None => log::error!("❌ Directions result carried no routes"),
            },
            Err(e) => log::error!("❌ Error fetching directions: {}", e),
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Distance, PlaceGeometry, Route, RouteLeg};

    fn place(lat: f64, lng: f64) -> PlaceSelection {
        PlaceSelection {
            geometry: Some(PlaceGeometry {
                location: LatLng { lat, lng },
            }),
            formatted_address: None,
        }
    }

    fn empty_place() -> PlaceSelection {
        PlaceSelection {
            geometry: None,
            formatted_address: Some("typed text, never resolved".to_string()),
        }
    }

    fn result_with_legs(meters: &[u64]) -> DirectionsResult {
        DirectionsResult {
            routes: vec![Route {
                legs: meters
                    .iter()
                    .map(|&value| RouteLeg {
                        distance: Distance { value, text: None },
                    })
                    .collect(),
            }],
        }
    }

    #[test]
    fn test_add_stop_grows_list_with_empty_slots() {
        let mut state = PlannerState::default();
        for expected_len in 1..=5 {
            state.add_stop();
            assert_eq!(state.stops.len(), expected_len);
            assert_eq!(state.stops[expected_len - 1], None);
        }
    }

    #[test]
    fn test_select_place_fills_each_role() {
        let mut state = PlannerState::default();
        state.add_stop();

        assert!(state.select_place(PlaceRole::Origin, &place(1.0, 2.0)));
        assert!(state.select_place(PlaceRole::Destination, &place(3.0, 4.0)));
        assert!(state.select_place(PlaceRole::Stop(0), &place(5.0, 6.0)));

        assert_eq!(state.origin, Some(LatLng { lat: 1.0, lng: 2.0 }));
        assert_eq!(state.destination, Some(LatLng { lat: 3.0, lng: 4.0 }));
        assert_eq!(state.stops[0], Some(LatLng { lat: 5.0, lng: 6.0 }));
    }

    #[test]
    fn test_select_place_without_geometry_changes_nothing() {
        let mut state = PlannerState::default();
        state.add_stop();
        state.select_place(PlaceRole::Origin, &place(1.0, 2.0));

        assert!(!state.select_place(PlaceRole::Origin, &empty_place()));
        assert!(!state.select_place(PlaceRole::Destination, &empty_place()));
        assert!(!state.select_place(PlaceRole::Stop(0), &empty_place()));

        assert_eq!(state.origin, Some(LatLng { lat: 1.0, lng: 2.0 }));
        assert_eq!(state.destination, None);
        assert_eq!(state.stops[0], None);
    }

    #[test]
    fn test_select_place_on_missing_stop_slot_changes_nothing() {
        let mut state = PlannerState::default();
        assert!(!state.select_place(PlaceRole::Stop(3), &place(1.0, 2.0)));
        assert!(state.stops.is_empty());
    }

    #[test]
    fn test_begin_calculation_requires_both_endpoints() {
        let mut state = PlannerState {
            distance: Some("9.99 kms".to_string()),
            ..Default::default()
        };

        assert_eq!(state.begin_calculation(), None);
        assert!(!state.loading);

        state.select_place(PlaceRole::Origin, &place(1.0, 2.0));
        assert_eq!(state.begin_calculation(), None);
        assert!(!state.loading);
        assert_eq!(state.distance.as_deref(), Some("9.99 kms"));
    }

    #[test]
    fn test_begin_calculation_builds_driving_request() {
        let mut state = PlannerState::default();
        state.select_place(PlaceRole::Origin, &place(1.0, 2.0));
        state.select_place(PlaceRole::Destination, &place(3.0, 4.0));
        state.add_stop();
        state.add_stop();
        state.add_stop();
        state.select_place(PlaceRole::Stop(0), &place(5.0, 6.0));
        state.select_place(PlaceRole::Stop(2), &place(7.0, 8.0));

        let request = state.begin_calculation().expect("both endpoints set");
        assert!(state.loading);
        assert_eq!(request.travel_mode, TravelMode::Driving);
        assert_eq!(request.origin, LatLng { lat: 1.0, lng: 2.0 });
        assert_eq!(request.destination, LatLng { lat: 3.0, lng: 4.0 });
        // Unfilled slot 1 is skipped, order of the others preserved
        assert_eq!(request.waypoints.len(), 2);
        assert_eq!(request.waypoints[0].location, LatLng { lat: 5.0, lng: 6.0 });
        assert_eq!(request.waypoints[1].location, LatLng { lat: 7.0, lng: 8.0 });
        assert!(request.waypoints.iter().all(|w| w.stopover));
    }

    #[test]
    fn test_complete_calculation_success_formats_distance() {
        let mut state = PlannerState::default();
        state.select_place(PlaceRole::Origin, &place(1.0, 2.0));
        state.select_place(PlaceRole::Destination, &place(3.0, 4.0));
        state.begin_calculation().unwrap();

        state.complete_calculation(Ok(result_with_legs(&[1000, 2500])));

        assert_eq!(state.distance.as_deref(), Some("3.50 kms"));
        assert_eq!(state.directions, Some(result_with_legs(&[1000, 2500])));
        assert!(!state.loading);
    }

    #[test]
    fn test_complete_calculation_zero_length_leg() {
        let mut state = PlannerState::default();
        state.complete_calculation(Ok(result_with_legs(&[0])));
        assert_eq!(state.distance.as_deref(), Some("0.00 kms"));
        assert!(!state.loading);
    }

    #[test]
    fn test_complete_calculation_failure_keeps_previous_result() {
        let mut state = PlannerState::default();
        state.complete_calculation(Ok(result_with_legs(&[1000, 2500])));

        state.loading = true;
        state.complete_calculation(Err(DirectionsError::Service("ZERO_RESULTS".to_string())));

        assert_eq!(state.distance.as_deref(), Some("3.50 kms"));
        assert_eq!(state.directions, Some(result_with_legs(&[1000, 2500])));
        assert!(!state.loading);
    }

    #[test]
    fn test_complete_calculation_without_routes_behaves_like_failure() {
        let mut state = PlannerState::default();
        state.complete_calculation(Ok(result_with_legs(&[4000])));

        state.loading = true;
        state.complete_calculation(Ok(DirectionsResult { routes: vec![] }));

        assert_eq!(state.distance.as_deref(), Some("4.00 kms"));
        assert!(!state.loading);
    }

    #[test]
    fn test_overlapping_calculations_last_processed_wins() {
        let mut state = PlannerState::default();
        state.select_place(PlaceRole::Origin, &place(1.0, 2.0));
        state.select_place(PlaceRole::Destination, &place(3.0, 4.0));

        // Two requests in flight at once; no cancellation exists.
        state.begin_calculation().unwrap();
        state.begin_calculation().unwrap();

        // The second response is processed first, the first one last:
        // whatever lands last stays visible.
        state.complete_calculation(Ok(result_with_legs(&[2000])));
        state.complete_calculation(Ok(result_with_legs(&[1000, 2500])));

        assert_eq!(state.distance.as_deref(), Some("3.50 kms"));
        assert!(!state.loading);
    }
}
