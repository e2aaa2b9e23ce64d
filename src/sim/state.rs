//! Game state and core simulation types
//!
//! The whole game lives in one owned `GameState`; the brick grid is owned by
//! it exclusively and replaced wholesale on restart.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::grid::BrickGrid;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball and paddle are live
    #[default]
    Playing,
    /// Ball frozen, terminal message shown
    Stopped,
}

/// Result of the terminal check, also used to pick the on-screen message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Playing,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }
}

/// The ball: top-left of its bounding box plus per-tick velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: IVec2::new(BALL_START_X, BALL_START_Y),
            vel: IVec2::new(BALL_START_DX, BALL_START_DY),
        }
    }
}

impl Ball {
    /// Bounding box used for every collision test
    pub fn bounds(&self) -> Rect {
        Rect::at(self.pos, BALL_SIZE, BALL_SIZE)
    }

    pub fn stop(&mut self) {
        self.vel = IVec2::ZERO;
    }

    pub fn is_stopped(&self) -> bool {
        self.vel == IVec2::ZERO
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Paddle left edge
    pub paddle_x: i32,
    pub ball: Ball,
    pub score: u32,
    /// Bricks left standing
    pub bricks_remaining: u32,
    pub phase: GamePhase,
    pub grid: BrickGrid,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a fresh game with the default 3x7 grid
    pub fn new() -> Self {
        Self::with_grid(BrickGrid::default())
    }

    /// Create a fresh game around the given grid
    pub fn with_grid(grid: BrickGrid) -> Self {
        Self {
            paddle_x: PADDLE_START_X,
            ball: Ball::default(),
            score: 0,
            bricks_remaining: grid.alive_count() as u32,
            phase: GamePhase::Playing,
            grid,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Number of bricks the game started with
    pub fn initial_bricks(&self) -> u32 {
        self.grid.len() as u32
    }

    /// Drawn paddle rectangle
    pub fn paddle_rect(&self) -> Rect {
        Rect::new(self.paddle_x, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// Paddle rectangle used for ball contact (shorter than drawn)
    pub fn paddle_hitbox(&self) -> Rect {
        Rect::new(self.paddle_x, PADDLE_Y, PADDLE_WIDTH, PADDLE_HITBOX_HEIGHT)
    }

    /// Terminal condition as it stands right now, without changing state
    ///
    /// Won takes precedence when both conditions hold.
    pub fn outcome(&self) -> Outcome {
        if self.bricks_remaining == 0 {
            Outcome::Won
        } else if self.ball.pos.y > LOSS_Y {
            Outcome::Lost
        } else {
            Outcome::Playing
        }
    }

    /// Freeze the ball in place
    pub fn stop_ball(&mut self) {
        self.ball.stop();
    }

    /// Destroy a brick and credit it
    ///
    /// Returns false (and changes nothing) if the cell is out of range or
    /// already dead.
    pub fn destroy_brick(&mut self, row: usize, col: usize) -> bool {
        if !self.grid.destroy_cell(row, col) {
            return false;
        }
        self.bricks_remaining = self.bricks_remaining.saturating_sub(1);
        self.score += BRICK_SCORE;
        log::debug!("Brick ({}, {}) destroyed, score {}", row, col, self.score);
        true
    }
}
