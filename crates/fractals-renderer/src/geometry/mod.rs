//! Procedural mesh generation: vertex layout, mesh container and the
//! subdivided icosphere.

mod icosphere;
mod types;

pub use icosphere::*;
pub use types::*;

#[cfg(test)]
mod tests;
