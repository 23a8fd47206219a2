//! Image and cubemap loading.
//!
//! Decoding is CPU-only and returns plain RGBA buffers; failures are
//! reported as [`AssetError`] and recovered into a gray placeholder by the
//! `*_or_fallback` helpers so a missing file never stops the render loop.

mod image_data;
mod texture;

pub use image_data::*;
pub use texture::*;

use std::path::PathBuf;

/// Asset loading failures. Always recoverable.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("cubemap face {path} is {width}x{height}, expected {expected}x{expected}")]
    FaceSize {
        path: PathBuf,
        width: u32,
        height: u32,
        expected: u32,
    },

    #[error("font error: {0}")]
    Font(String),
}

#[cfg(test)]
mod tests;
