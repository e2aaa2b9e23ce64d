//! Brick Breaker - a single-screen arcade brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Draw-command output consumed by a host graphics layer
//! - `platform`: Input mapping and the fixed-rate frame driver
//! - `settings`: Window and driver configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use renderer::{DrawCommand, RenderSink, render_frame};
pub use settings::{Settings, WindowConfig};
pub use sim::{BrickGrid, Command, GamePhase, GameState, Outcome};

/// Game configuration constants
pub mod consts {
    /// Fixed tick interval the physics constants are tuned for (milliseconds)
    pub const TICK_INTERVAL_MS: u64 = 8;
    /// Maximum frames run per driver advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play area dimensions
    pub const PLAY_AREA_WIDTH: i32 = 692;
    pub const PLAY_AREA_HEIGHT: i32 = 592;

    /// Brick field - the grid is fitted into this area with truncating division
    pub const GRID_ROWS: usize = 3;
    pub const GRID_COLS: usize = 7;
    pub const GRID_AREA_WIDTH: i32 = 540;
    pub const GRID_AREA_HEIGHT: i32 = 150;
    pub const GRID_OFFSET_X: i32 = 80;
    pub const GRID_OFFSET_Y: i32 = 50;
    /// Points per destroyed brick
    pub const BRICK_SCORE: u32 = 5;

    /// Paddle defaults
    pub const PADDLE_START_X: i32 = 310;
    pub const PADDLE_Y: i32 = 550;
    pub const PADDLE_WIDTH: i32 = 100;
    pub const PADDLE_HEIGHT: i32 = 12;
    /// Height used for ball contact - shorter than the drawn paddle
    pub const PADDLE_HITBOX_HEIGHT: i32 = 8;
    pub const PADDLE_STEP: i32 = 50;
    pub const PADDLE_MIN_X: i32 = 10;
    pub const PADDLE_MAX_X: i32 = 600;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 20;
    pub const BALL_START_X: i32 = 120;
    pub const BALL_START_Y: i32 = 350;
    pub const BALL_START_DX: i32 = -1;
    pub const BALL_START_DY: i32 = -2;

    /// Wall reflection bounds for the ball's top-left corner
    pub const WALL_MIN_X: i32 = 0;
    pub const WALL_MAX_X: i32 = 670;
    pub const WALL_MIN_Y: i32 = 0;
    /// Ball below this line has passed the paddle
    pub const LOSS_Y: i32 = 570;
}
