//! Fixed-rate frame driver
//!
//! Owns the game state. Each frame drains queued commands, then runs one
//! tick and the terminal check. Rendering borrows the state immutably, so it
//! can never overlap a mutation.

use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};

use crate::renderer::{DrawCommand, RenderSink, render_frame};
use crate::settings::Settings;
use crate::sim::{Command, GameState, Outcome};

/// Bound on commands applied per frame so a flooded queue can't stall ticks
const MAX_COMMANDS_PER_FRAME: usize = 32;

/// Driver loop control signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverControl {
    Continue,
    /// Input side hung up (window closed)
    Exit,
}

pub struct FrameDriver {
    state: GameState,
    commands: Receiver<Command>,
    interval: Duration,
    max_substeps: u32,
    accumulator: Duration,
    frames: u64,
    outcome: Outcome,
}

impl FrameDriver {
    pub fn new(settings: &Settings, commands: Receiver<Command>) -> Self {
        Self::with_state(GameState::new(), settings, commands)
    }

    pub fn with_state(state: GameState, settings: &Settings, commands: Receiver<Command>) -> Self {
        log::info!(
            "Driver ready: {} ms per frame, {} bricks",
            settings.tick_interval().as_millis(),
            state.bricks_remaining
        );
        let outcome = state.outcome();
        Self {
            state,
            commands,
            interval: settings.tick_interval(),
            max_substeps: settings.max_substeps.max(1),
            accumulator: Duration::ZERO,
            frames: 0,
            outcome,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Outcome of the most recent frame
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Apply pending commands, bounded per frame
    fn drain_commands(&mut self) -> DriverControl {
        let mut drained = 0;
        while drained < MAX_COMMANDS_PER_FRAME {
            match self.commands.try_recv() {
                Ok(command) => {
                    self.state.apply(command);
                    drained += 1;
                }
                Err(TryRecvError::Empty) => return DriverControl::Continue,
                Err(TryRecvError::Disconnected) => return DriverControl::Exit,
            }
        }
        log::warn!("Input backlog: applied {} commands this frame", drained);
        DriverControl::Continue
    }

    /// Run exactly one frame
    pub fn frame(&mut self) -> DriverControl {
        let control = self.drain_commands();
        self.outcome = self.state.step();
        self.frames += 1;
        control
    }

    /// Run as many frames as `elapsed` covers, up to the substep bound
    ///
    /// Time beyond the bound is discarded rather than carried over.
    pub fn advance(&mut self, elapsed: Duration) -> DriverControl {
        let cap = self.interval * self.max_substeps;
        self.accumulator = (self.accumulator + elapsed).min(cap);

        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            if self.frame() == DriverControl::Exit {
                return DriverControl::Exit;
            }
        }
        DriverControl::Continue
    }

    /// Draw the current state
    pub fn render(&self) -> Vec<DrawCommand> {
        render_frame(&self.state)
    }

    pub fn render_into(&self, sink: &mut impl RenderSink) {
        self.state.render(sink);
    }
}
