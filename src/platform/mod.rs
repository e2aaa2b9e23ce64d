//! Platform abstraction layer
//!
//! Glue between a host window and the simulation:
//! - Key mapping and focus-gated input delivery
//! - Fixed-rate frame driver that owns the game state

pub mod driver;
pub mod input;

pub use driver::{DriverControl, FrameDriver};
pub use input::{InputSource, Key};
