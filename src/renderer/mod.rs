//! Rendering module
//!
//! Rendering is a read-only pass over the game state that produces an ordered
//! list of draw commands. The host graphics layer consumes them through
//! `RenderSink`.

pub mod commands;
pub mod shapes;

pub use commands::{Color, DrawCommand, Font, LogSink, RenderSink, replay};
pub use shapes::render_frame;
