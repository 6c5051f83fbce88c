//! Frame-driven host loop
//!
//! Collects one-shot commands between frames, applies them at the top of
//! the next frame, then runs the simulation. Rendering is left to whoever
//! consumes the returned snapshots.

use crate::config::{ConfigError, GameConfig};
use crate::sim::{Faction, GameEvent, GameState, MatchPhase, Snapshot, advance_frame};

/// Commands queued for the next frame (cleared once applied)
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Start button
    pub start: bool,
    /// Pause/resume button
    pub toggle_pause: bool,
    /// Reset button
    pub reset: bool,
    /// New speed multiplier
    pub speed_multiplier: Option<u32>,
}

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    pub state: GameState,
    pub input: FrameInput,
    /// Events from the most recent frame
    pub events: Vec<GameEvent>,
    frames: u64,
    last_phase: MatchPhase,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let state = GameState::new(config, seed)?;
        let last_phase = state.phase;
        Ok(Self {
            state,
            input: FrameInput::default(),
            events: Vec::new(),
            frames: 0,
            last_phase,
        })
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn apply_input(&mut self) {
        let input = std::mem::take(&mut self.input);

        // Reset first so a reset+start in the same frame starts a fresh match
        if input.reset {
            self.state.reset();
        }
        if input.start {
            self.state.start();
        }
        if input.toggle_pause {
            self.state.toggle_pause();
        }
        if let Some(multiplier) = input.speed_multiplier {
            if let Err(e) = self.state.set_speed_multiplier(multiplier) {
                log::warn!("Ignoring speed change: {e}");
            }
        }
    }

    /// Run one frame and return what to draw
    pub fn frame(&mut self) -> Snapshot {
        self.apply_input();

        advance_frame(&mut self.state);
        self.frames += 1;
        self.events = self.state.drain_events();

        let current_phase = self.state.phase;
        if current_phase != self.last_phase {
            log::debug!(
                "Frame {}: {} -> {}",
                self.frames,
                self.last_phase.as_str(),
                current_phase.as_str()
            );
            self.last_phase = current_phase;
        }

        Snapshot::capture(&self.state)
    }

    /// Drive frames until the match ends or the budget runs out.
    /// Returns the winner, if any.
    pub fn run_until_ended(&mut self, max_frames: u64) -> Option<Faction> {
        for _ in 0..max_frames {
            self.frame();
            if self.state.phase == MatchPhase::Ended {
                return self.state.winner;
            }
        }
        None
    }
}
