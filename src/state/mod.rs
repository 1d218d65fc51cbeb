pub mod planner_state;

pub use planner_state::{PlaceRole, PlannerState};
