pub mod use_maps_library;

pub use use_maps_library::use_maps_library;
