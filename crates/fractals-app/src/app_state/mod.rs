//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, input, camera, animation and renderer.

mod core;
mod dispatch;
mod event_handler;
mod init;
mod input;
mod render;
mod shutdown;

pub use core::FractalsApp;
