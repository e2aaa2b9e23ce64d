//! Idle/demo mode - picks paddle moves so the game can run unattended

use super::state::GameState;
use super::tick::Command;
use crate::consts::*;

/// Choose the move that brings the paddle centre under the ball centre
///
/// Returns None while the ball is already within half a step of the paddle
/// centre, or while the game is stopped (a move would resume it).
pub fn autopilot_command(state: &GameState) -> Option<Command> {
    if !state.is_playing() {
        return None;
    }

    let paddle_center = state.paddle_x + PADDLE_WIDTH / 2;
    let ball_center = state.ball.pos.x + BALL_SIZE / 2;
    let offset = ball_center - paddle_center;

    if offset > PADDLE_STEP / 2 && state.paddle_x < PADDLE_MAX_X {
        Some(Command::MoveRight)
    } else if offset < -PADDLE_STEP / 2 && state.paddle_x > PADDLE_MIN_X {
        Some(Command::MoveLeft)
    } else {
        None
    }
}
