pub mod directions;

pub use directions::{DirectionsError, DirectionsService};
