//! Heads-up text overlay.
//!
//! A glyph atlas (one bitmap per printable ASCII character) is rasterized
//! once at startup with cosmic-text. Each frame the text is laid out into
//! 6-vertex quads in pixel space and drawn glyph by glyph.

mod atlas;
mod layout;
mod pipeline;
mod renderer;

pub use atlas::*;
pub use layout::*;
pub use renderer::*;

#[cfg(test)]
mod tests;
