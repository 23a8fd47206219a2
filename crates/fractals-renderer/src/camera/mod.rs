//! Free-fly camera: yaw/pitch orientation, WASD movement, scroll zoom and
//! perspective/orthographic projection.

mod controller;
mod mouse;

pub use controller::*;
pub use mouse::MouseTracker;
