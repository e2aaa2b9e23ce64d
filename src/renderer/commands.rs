//! Draw commands and the sink that receives them

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const RED: Color = Color(0xFF0000);
    pub const BLUE: Color = Color(0x0000FF);
    pub const YELLOW: Color = Color(0xFFFF00);

    pub fn rgb(&self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

/// Text font request; the host picks the closest face it has
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub bold: bool,
    pub size: u32,
}

impl Font {
    pub fn bold(family: &str, size: u32) -> Self {
        Self {
            family: family.to_string(),
            bold: true,
            size,
        }
    }
}

/// One drawing primitive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, width: u32 },
    FillEllipse { rect: Rect, color: Color },
    Text { pos: IVec2, text: String, font: Font, color: Color },
}

/// Receiver of draw commands, implemented by the host graphics layer
pub trait RenderSink {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: u32);
    /// Ellipse inscribed in `rect`
    fn fill_ellipse(&mut self, rect: Rect, color: Color);
    /// `pos` is the text baseline origin
    fn draw_text(&mut self, pos: IVec2, text: &str, font: &Font, color: Color);
}

impl RenderSink for Vec<DrawCommand> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: u32) {
        self.push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand::FillEllipse { rect, color });
    }

    fn draw_text(&mut self, pos: IVec2, text: &str, font: &Font, color: Color) {
        self.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            font: font.clone(),
            color,
        });
    }
}

/// Sink that traces every command (headless runs)
#[derive(Debug, Default)]
pub struct LogSink {
    pub commands: u64,
}

impl LogSink {
    fn record(&mut self, command: &DrawCommand) {
        self.commands += 1;
        log::trace!("{:?}", command);
    }
}

impl RenderSink for LogSink {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.record(&DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: u32) {
        self.record(&DrawCommand::StrokeRect { rect, color, width });
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.record(&DrawCommand::FillEllipse { rect, color });
    }

    fn draw_text(&mut self, pos: IVec2, text: &str, font: &Font, color: Color) {
        self.record(&DrawCommand::Text {
            pos,
            text: text.to_string(),
            font: font.clone(),
            color,
        });
    }
}

/// Replay recorded commands into another sink
pub fn replay(commands: &[DrawCommand], sink: &mut impl RenderSink) {
    for command in commands {
        match command {
            DrawCommand::FillRect { rect, color } => sink.fill_rect(*rect, *color),
            DrawCommand::StrokeRect { rect, color, width } => {
                sink.stroke_rect(*rect, *color, *width)
            }
            DrawCommand::FillEllipse { rect, color } => sink.fill_ellipse(*rect, *color),
            DrawCommand::Text {
                pos,
                text,
                font,
                color,
            } => sink.draw_text(*pos, text, font, *color),
        }
    }
}
