//! The flower: a ring of petal instances built by repeatedly rotating one
//! shared model matrix, with a pulsing magenta tint.

mod animator;
mod mesh;

pub use animator::*;
pub use mesh::petal_mesh;
