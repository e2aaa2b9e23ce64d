//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer physics, one fixed step per tick
//! - Row-major brick iteration
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_command;
pub use collision::{ReflectAxis, Rect, brick_reflect_axis, reflect};
pub use grid::BrickGrid;
pub use state::{Ball, GamePhase, GameState, Outcome};
pub use tick::Command;
