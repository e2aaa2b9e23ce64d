//! Keyboard mapping and input delivery
//!
//! The host event thread owns an `InputSource`; commands travel over a
//! channel and are applied by the frame driver between ticks.

use crossbeam_channel::Sender;

use crate::sim::Command;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Enter,
    Other,
}

impl Key {
    /// Map a host key name (DOM `KeyboardEvent.key` style)
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Enter" | "Return" => Key::Enter,
            _ => Key::Other,
        }
    }

    pub fn command(self) -> Option<Command> {
        match self {
            Key::ArrowLeft => Some(Command::MoveLeft),
            Key::ArrowRight => Some(Command::MoveRight),
            Key::Enter => Some(Command::Restart),
            Key::Other => None,
        }
    }
}

/// Forwards commands to the driver while the host window has focus
#[derive(Debug, Clone)]
pub struct InputSource {
    sender: Sender<Command>,
    focused: bool,
}

impl InputSource {
    pub fn new(sender: Sender<Command>) -> Self {
        Self {
            sender,
            focused: true,
        }
    }

    pub fn set_focus(&mut self, focused: bool) {
        if self.focused != focused {
            log::debug!("Window focus {}", if focused { "gained" } else { "lost" });
        }
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Handle a key press; returns true if a command was queued
    pub fn key_pressed(&self, key: Key) -> bool {
        match key.command() {
            Some(command) => self.send(command),
            None => false,
        }
    }

    /// Queue a command directly; dropped while unfocused or disconnected
    pub fn send(&self, command: Command) -> bool {
        if !self.focused {
            return false;
        }
        match self.sender.send(command) {
            Ok(()) => true,
            Err(_) => {
                log::warn!("Input channel closed, dropping {:?}", command);
                false
            }
        }
    }
}
