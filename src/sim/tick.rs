//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. One frame is
//! `tick` followed by `check_terminal`; the terminal check runs whether or not
//! the game is playing so the end message persists once frozen.

use serde::{Deserialize, Serialize};

use super::collision::{ReflectAxis, brick_reflect_axis, reflect};
use super::grid::BrickGrid;
use super::state::{GamePhase, GameState, Outcome};
use crate::consts::*;

/// Discrete player command, applied between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Restart,
}

impl GameState {
    /// Advance the simulation by one tick
    ///
    /// No-op while stopped.
    pub fn tick(&mut self) {
        if !self.is_playing() {
            return;
        }

        // Paddle contact
        if self.ball.bounds().intersects(&self.paddle_hitbox()) {
            self.ball.vel = reflect(self.ball.vel, ReflectAxis::Vertical);
        }

        // Brick contact. Every live brick is tested against the same ball
        // box, so a ball spanning several bricks takes them all this tick and
        // reflects once per brick.
        let ball = self.ball.bounds();
        let hits: Vec<_> = self
            .grid
            .alive_cells()
            .filter(|(_, _, brick)| ball.intersects(brick))
            .collect();
        for (row, col, brick) in hits {
            self.destroy_brick(row, col);
            self.ball.vel = reflect(self.ball.vel, brick_reflect_axis(&ball, &brick));
        }

        self.ball.pos += self.ball.vel;

        // Walls. The bottom is open: falling past the paddle is the loss
        // condition, handled by check_terminal.
        if self.ball.pos.x < WALL_MIN_X || self.ball.pos.x > WALL_MAX_X {
            self.ball.vel = reflect(self.ball.vel, ReflectAxis::Horizontal);
        }
        if self.ball.pos.y < WALL_MIN_Y {
            self.ball.vel = reflect(self.ball.vel, ReflectAxis::Vertical);
        }
    }

    /// Evaluate the win/loss condition and freeze the game if it holds
    pub fn check_terminal(&mut self) -> Outcome {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            if self.is_playing() {
                match outcome {
                    Outcome::Won => log::info!("All bricks cleared, score {}", self.score),
                    _ => log::info!("Ball lost, score {}", self.score),
                }
            }
            self.phase = GamePhase::Stopped;
            self.stop_ball();
        }
        outcome
    }

    /// One full frame of physics: tick, then the terminal check
    pub fn step(&mut self) -> Outcome {
        self.tick();
        self.check_terminal()
    }

    /// Shift the paddle one step left
    ///
    /// A move that happens also resumes play, without resetting the ball or
    /// score. A move blocked by the left bound changes nothing.
    pub fn move_left(&mut self) {
        if self.paddle_x > PADDLE_MIN_X {
            self.paddle_x = (self.paddle_x - PADDLE_STEP).max(PADDLE_MIN_X);
            self.resume();
        }
    }

    /// Shift the paddle one step right; see `move_left`
    pub fn move_right(&mut self) {
        if self.paddle_x < PADDLE_MAX_X {
            self.paddle_x = (self.paddle_x + PADDLE_STEP).min(PADDLE_MAX_X);
            self.resume();
        }
    }

    fn resume(&mut self) {
        log::debug!("Paddle at {}", self.paddle_x);
        if !self.is_playing() {
            log::debug!("Resuming play from stopped state");
            self.phase = GamePhase::Playing;
        }
    }

    /// Start a new game with a fresh grid of the same dimensions
    ///
    /// Only acts while stopped; returns whether a restart happened.
    pub fn restart(&mut self) -> bool {
        if self.is_playing() {
            return false;
        }
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        *self = GameState::with_grid(BrickGrid::new(rows, cols));
        log::info!("Game restarted");
        true
    }

    /// Apply a player command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Restart => {
                self.restart();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::Rect;
    use glam::IVec2;
    use proptest::prelude::*;

    fn stopped_lost() -> GameState {
        let mut state = GameState::new();
        state.ball.pos.y = 575;
        state.check_terminal();
        state
    }

    #[test]
    fn test_first_tick_moves_ball() {
        let mut state = GameState::new();
        state.tick();
        assert_eq!(state.ball.pos, IVec2::new(119, 348));
        assert_eq!(state.ball.vel, IVec2::new(-1, -2));
    }

    #[test]
    fn test_ceiling_flips_dy_once() {
        // Keep the ball clear of the bricks on its way up
        let mut state = GameState::new();
        state.ball.pos = IVec2::new(30, 20);
        state.ball.vel = IVec2::new(0, -2);

        let mut flips = 0;
        let mut last_dy = state.ball.vel.y;
        for _ in 0..40 {
            state.tick();
            if state.ball.vel.y != last_dy {
                flips += 1;
                last_dy = state.ball.vel.y;
                assert!(state.ball.pos.y < 0);
            }
        }
        assert_eq!(flips, 1);
        assert_eq!(state.ball.vel.y, 2);
    }

    #[test]
    fn test_default_start_reaches_ceiling_with_single_flip() {
        let mut state = GameState::new();
        let mut crossings = 0;
        for _ in 0..2000 {
            let was_up = state.ball.vel.y < 0;
            state.tick();
            if state.ball.pos.y < 0 {
                assert!(was_up);
                assert!(state.ball.vel.y > 0, "dy must flip at the crossing");
                crossings += 1;
                break;
            }
        }
        assert_eq!(crossings, 1);
    }

    #[test]
    fn test_side_walls_flip_dx() {
        let mut state = GameState::new();
        state.ball.pos = IVec2::new(0, 300);
        state.ball.vel = IVec2::new(-1, 1);
        state.tick();
        assert_eq!(state.ball.pos.x, -1);
        assert_eq!(state.ball.vel.x, 1);

        state.ball.pos = IVec2::new(670, 300);
        state.tick();
        assert_eq!(state.ball.pos.x, 671);
        assert_eq!(state.ball.vel.x, -1);
    }

    #[test]
    fn test_no_bottom_wall() {
        let mut state = GameState::new();
        state.paddle_x = 10;
        state.ball.pos = IVec2::new(600, 560);
        state.ball.vel = IVec2::new(0, 2);
        state.tick();
        assert_eq!(state.ball.vel.y, 2);
        assert_eq!(state.ball.pos.y, 562);
    }

    #[test]
    fn test_paddle_flips_dy() {
        let mut state = GameState::new();
        state.ball.pos = IVec2::new(330, 535);
        state.ball.vel = IVec2::new(1, 2);
        state.tick();
        assert_eq!(state.ball.vel, IVec2::new(1, -2));
    }

    #[test]
    fn test_paddle_hitbox_is_eight_pixels() {
        let mut state = GameState::new();
        // Ball top at 558 overlaps the drawn paddle (550..562) but not the
        // hitbox (550..558)
        state.ball.pos = IVec2::new(330, 558);
        state.ball.vel = IVec2::new(0, 2);
        state.tick();
        assert_eq!(state.ball.vel.y, 2);

        state.ball.pos = IVec2::new(330, 557);
        state.ball.vel = IVec2::new(0, 2);
        state.tick();
        assert_eq!(state.ball.vel.y, -2);
    }

    #[test]
    fn test_side_hit_on_corner_brick() {
        let mut state = GameState::new();
        // Right edge (x + 19) on the brick's left edge, overlapping by one pixel
        state.ball.pos = IVec2::new(61, 60);
        state.ball.vel = IVec2::new(1, 1);
        assert_eq!(state.grid.bounds_of(0, 0), Rect::new(80, 50, 77, 50));

        state.tick();

        assert!(!state.grid.cell_alive_at(0, 0));
        assert_eq!(state.bricks_remaining, 20);
        assert_eq!(state.score, 5);
        assert_eq!(state.ball.vel, IVec2::new(-1, 1));
    }

    #[test]
    fn test_face_hit_flips_dy() {
        let mut state = GameState::new();
        // Under row 2, col 1 (x 157..234, y 150..200)
        state.ball.pos = IVec2::new(180, 195);
        state.ball.vel = IVec2::new(1, -2);
        state.tick();
        assert!(!state.grid.cell_alive_at(2, 1));
        assert_eq!(state.ball.vel, IVec2::new(1, 2));
        assert_eq!(state.bricks_remaining, 20);
    }

    #[test]
    fn test_multi_brick_hit_in_one_tick() {
        let mut state = GameState::new();
        // Straddling the seam between (2, 0) and (2, 1) at x = 157
        state.ball.pos = IVec2::new(150, 190);
        state.ball.vel = IVec2::new(1, -2);
        state.tick();
        assert!(!state.grid.cell_alive_at(2, 0));
        assert!(!state.grid.cell_alive_at(2, 1));
        assert_eq!(state.bricks_remaining, 19);
        assert_eq!(state.score, 10);
        // Two vertical reflections cancel out
        assert_eq!(state.ball.vel, IVec2::new(1, -2));
    }

    #[test]
    fn test_won_freezes_ball() {
        let mut state = GameState::new();
        for row in 0..3 {
            for col in 0..7 {
                state.destroy_brick(row, col);
            }
        }
        assert_eq!(state.bricks_remaining, 0);
        assert_eq!(state.check_terminal(), Outcome::Won);
        assert!(!state.is_playing());

        let pos = state.ball.pos;
        for _ in 0..10 {
            state.tick();
        }
        assert_eq!(state.ball.pos, pos);
        assert!(state.ball.is_stopped());
    }

    #[test]
    fn test_lost_below_line() {
        let state = stopped_lost();
        assert_eq!(state.outcome(), Outcome::Lost);
        assert_eq!(state.phase, GamePhase::Stopped);
        assert!(state.ball.is_stopped());
    }

    #[test]
    fn test_terminal_persists_after_freeze() {
        let mut state = stopped_lost();
        for _ in 0..5 {
            assert_eq!(state.step(), Outcome::Lost);
        }
    }

    #[test]
    fn test_step_detects_loss() {
        let mut state = GameState::new();
        state.paddle_x = 600;
        state.ball.pos = IVec2::new(100, 569);
        state.ball.vel = IVec2::new(0, 2);
        assert_eq!(state.step(), Outcome::Lost);
        assert!(!state.is_playing());
    }

    #[test]
    fn test_paddle_bounds() {
        let mut state = GameState::new();
        for _ in 0..20 {
            state.move_right();
        }
        assert_eq!(state.paddle_x, PADDLE_MAX_X);
        for _ in 0..20 {
            state.move_left();
        }
        assert_eq!(state.paddle_x, PADDLE_MIN_X);
    }

    #[test]
    fn test_move_resumes_without_reset() {
        let mut state = stopped_lost();
        state.move_left();
        assert!(state.is_playing());
        assert_eq!(state.paddle_x, 260);
        assert_eq!(state.ball.pos.y, 575);
        assert!(state.ball.is_stopped());
        // Condition still holds, so the next frame stops again
        assert_eq!(state.step(), Outcome::Lost);
        assert!(!state.is_playing());
    }

    #[test]
    fn test_blocked_move_does_not_resume() {
        let mut state = stopped_lost();
        state.paddle_x = PADDLE_MIN_X;
        state.move_left();
        assert!(!state.is_playing());
        assert_eq!(state.paddle_x, PADDLE_MIN_X);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = GameState::new();
        state.tick();
        let before = state.clone();
        assert!(!state.restart());
        assert_eq!(state, before);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new();
        state.destroy_brick(1, 1);
        state.paddle_x = 60;
        state.ball.pos.y = 580;
        state.check_terminal();

        state.apply(Command::Restart);

        assert_eq!(state, GameState::new());
        assert_eq!(state.bricks_remaining, 21);
        assert!(state.grid.cell_alive_at(1, 1));
    }

    fn command() -> impl Strategy<Value = Option<Command>> {
        prop_oneof![
            Just(None),
            Just(Some(Command::MoveLeft)),
            Just(Some(Command::MoveRight)),
            Just(Some(Command::Restart)),
        ]
    }

    proptest! {
        #[test]
        fn prop_invariants_hold(frames in prop::collection::vec(command(), 1..600)) {
            let mut state = GameState::new();
            let initial = state.initial_bricks();
            let mut last_remaining = state.bricks_remaining;

            for cmd in frames {
                let restarted = match cmd {
                    Some(Command::Restart) => state.restart(),
                    Some(c) => {
                        state.apply(c);
                        false
                    }
                    None => false,
                };
                state.step();

                prop_assert!(state.bricks_remaining <= initial);
                if !restarted {
                    prop_assert!(state.bricks_remaining <= last_remaining);
                }
                last_remaining = state.bricks_remaining;

                prop_assert_eq!(state.score, BRICK_SCORE * (initial - state.bricks_remaining));
                prop_assert!((PADDLE_MIN_X..=PADDLE_MAX_X).contains(&state.paddle_x));
                prop_assert_eq!(state.bricks_remaining as usize, state.grid.alive_count());
                if !state.is_playing() {
                    prop_assert!(state.ball.is_stopped());
                }
            }
        }

        #[test]
        fn prop_paddle_stays_in_bounds(moves in prop::collection::vec(any::<bool>(), 0..200)) {
            let mut state = GameState::new();
            for right in moves {
                if right { state.move_right() } else { state.move_left() }
                prop_assert!((PADDLE_MIN_X..=PADDLE_MAX_X).contains(&state.paddle_x));
            }
        }
    }
}
