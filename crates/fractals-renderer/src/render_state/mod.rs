//! Frame composition: what gets drawn, in which order, with which data.

mod frame;
mod helpers;
mod hud;
mod instances;
mod plan;
mod state;

pub use frame::FrameInputs;
pub use hud::*;
pub use instances::*;
pub use plan::*;
pub use state::*;

#[cfg(test)]
mod tests;
