//! Scene drawing for the play area

use glam::IVec2;

use super::commands::{Color, DrawCommand, Font, RenderSink};
use crate::consts::*;
use crate::sim::{BrickGrid, GameState, Outcome, Rect};

const BRICK_COLOR: Color = Color(0xFF8787);
const BRICK_OUTLINE_WIDTH: u32 = 4;
const WIN_COLOR: Color = Color(0xFF6464);
const FONT_FAMILY: &str = "MV Boli";
const BORDER_THICKNESS: i32 = 3;

impl BrickGrid {
    /// Draw every live brick as a filled cell with a black outline
    pub fn render(&self, sink: &mut impl RenderSink) {
        for (_, _, bounds) in self.alive_cells() {
            sink.fill_rect(bounds, BRICK_COLOR);
            sink.stroke_rect(bounds, Color::BLACK, BRICK_OUTLINE_WIDTH);
        }
    }
}

impl GameState {
    /// Draw the whole frame, back to front
    pub fn render(&self, sink: &mut impl RenderSink) {
        background(sink);
        self.grid.render(sink);
        borders(sink);
        sink.fill_rect(self.paddle_rect(), Color::BLUE);
        sink.fill_ellipse(self.ball.bounds(), Color::RED);
        score(sink, self.score);
        message(sink, self.outcome(), self.score);
    }
}

/// Render the current state into a fresh command list
pub fn render_frame(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    state.render(&mut commands);
    commands
}

fn background(sink: &mut impl RenderSink) {
    sink.fill_rect(
        Rect::new(1, 1, PLAY_AREA_WIDTH, PLAY_AREA_HEIGHT),
        Color::YELLOW,
    );
}

/// Left, top and right walls; the bottom stays open
fn borders(sink: &mut impl RenderSink) {
    sink.fill_rect(Rect::new(0, 0, BORDER_THICKNESS, PLAY_AREA_HEIGHT), Color::BLACK);
    sink.fill_rect(Rect::new(0, 0, PLAY_AREA_WIDTH, BORDER_THICKNESS), Color::BLACK);
    sink.fill_rect(
        Rect::new(PLAY_AREA_WIDTH - 1, 0, BORDER_THICKNESS, PLAY_AREA_HEIGHT),
        Color::BLACK,
    );
}

fn score(sink: &mut impl RenderSink, score: u32) {
    sink.draw_text(
        IVec2::new(520, 30),
        &format!("Score: {}", score),
        &Font::bold(FONT_FAMILY, 25),
        Color::BLACK,
    );
}

fn message(sink: &mut impl RenderSink, outcome: Outcome, score: u32) {
    let (headline, hint, color) = match outcome {
        Outcome::Playing => return,
        Outcome::Won => (
            format!("You Won, Score: {}", score),
            "Press Enter to Restart.",
            WIN_COLOR,
        ),
        Outcome::Lost => (
            format!("Game Over, Score: {}", score),
            "Press Enter to Restart",
            Color::BLACK,
        ),
    };
    sink.draw_text(IVec2::new(190, 300), &headline, &Font::bold(FONT_FAMILY, 30), color);
    sink.draw_text(IVec2::new(230, 350), hint, &Font::bold(FONT_FAMILY, 20), color);
}
