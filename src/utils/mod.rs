// Shared utils

pub mod format;
pub mod gmaps_ffi;

pub use format::*;
