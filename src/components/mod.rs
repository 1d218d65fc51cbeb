pub mod app;
pub mod map_canvas;
pub mod place_input;
pub mod route_planner;

pub use app::App;
pub use map_canvas::MapCanvas;
pub use place_input::PlaceInput;
pub use route_planner::RoutePlanner;
