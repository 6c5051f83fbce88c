//! Game state and core simulation types
//!
//! `GameState` exclusively owns the grid, both balls and the scores. The
//! lifecycle commands (start, pause, resume, reset) live here; motion and
//! collisions are advanced by `tick::step`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Axis;
use super::grid::{Faction, Grid};
use crate::config::{ConfigError, GameConfig, OnWin};
use crate::consts::*;

/// Match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    /// Fresh layout, waiting for start
    Idle,
    /// Active gameplay
    Running,
    /// Match is paused
    Paused,
    /// One faction owns the whole grid
    Ended,
}

impl MatchPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPhase::Idle => "Idle",
            MatchPhase::Running => "Running",
            MatchPhase::Paused => "Paused",
            MatchPhase::Ended => "Ended",
        }
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub faction: Faction,
}

impl Ball {
    pub fn new(faction: Faction, pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            faction,
        }
    }
}

/// Conversions per faction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub light: u64,
    pub dark: u64,
}

impl Scores {
    pub fn get(&self, faction: Faction) -> u64 {
        match faction {
            Faction::Light => self.light,
            Faction::Dark => self.dark,
        }
    }

    pub fn increment(&mut self, faction: Faction) {
        match faction {
            Faction::Light => self.light += 1,
            Faction::Dark => self.dark += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.light + self.dark
    }
}

/// Notable things that happened during simulation, for renderers and sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A ball took over a cell
    CellConverted {
        ball: usize,
        row: usize,
        col: usize,
        faction: Faction,
    },
    /// A ball bounced off an arena wall
    WallBounce { ball: usize, axis: Axis },
    /// One faction owns every cell
    MatchWon { winner: Faction },
    /// Match was started from idle
    MatchStarted,
    /// Match was reinitialized after a win
    MatchRestarted,
}

/// Queue an event, dropping the oldest once the queue is full
pub fn push_event(events: &mut Vec<GameEvent>, event: GameEvent) {
    if events.len() >= MAX_PENDING_EVENTS {
        events.remove(0);
    }
    events.push(event);
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Construction-time configuration
    pub config: GameConfig,
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    /// Cell ownership
    pub grid: Grid,
    /// Light ball first, dark ball second
    pub balls: Vec<Ball>,
    pub scores: Scores,
    pub phase: MatchPhase,
    /// Set when the match ends, cleared on reset/restart
    pub winner: Option<Faction>,
    /// Simulation ticks executed this match
    pub time_ticks: u64,
    /// Ticks left before an auto-restart
    pub restart_ticks: u32,
    /// Pending events, newest last. Holds at most `MAX_PENDING_EVENTS`;
    /// the oldest are dropped when a caller never drains.
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh match from a validated configuration
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut state = Self {
            grid: Grid::new(config.grid_rows, config.grid_cols),
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            balls: Vec::with_capacity(2),
            scores: Scores::default(),
            phase: MatchPhase::Idle,
            winner: None,
            time_ticks: 0,
            restart_ticks: 0,
            events: Vec::new(),
        };
        state.spawn_balls();
        state.phase = state.initial_phase();

        Ok(state)
    }

    fn initial_phase(&self) -> MatchPhase {
        if self.config.auto_start {
            MatchPhase::Running
        } else {
            MatchPhase::Idle
        }
    }

    fn random_speed(&mut self) -> f32 {
        self.rng
            .random_range(self.config.ball_min_speed..=self.config.ball_max_speed)
    }

    /// Place both balls at their start positions with fresh random speeds.
    /// Light heads down-right, dark heads up-left.
    pub fn spawn_balls(&mut self) {
        let (w, h) = (self.config.arena_width, self.config.arena_height);
        let radius = self.config.ball_radius;

        let light_vel = Vec2::new(self.random_speed(), self.random_speed());
        let dark_vel = -Vec2::new(self.random_speed(), self.random_speed());

        self.balls.clear();
        self.balls.push(Ball::new(
            Faction::Light,
            Vec2::new(w * LIGHT_START_X, h * START_Y),
            light_vel,
            radius,
        ));
        self.balls.push(Ball::new(
            Faction::Dark,
            Vec2::new(w * DARK_START_X, h * START_Y),
            dark_vel,
            radius,
        ));
    }

    /// Rebuild grid, balls and scores without touching the phase
    pub fn reinitialize(&mut self) {
        self.grid.initialize();
        self.spawn_balls();
        self.scores = Scores::default();
        self.winner = None;
        self.time_ticks = 0;
        self.restart_ticks = 0;
    }

    /// Idle -> Running. Ignored in any other phase.
    pub fn start(&mut self) {
        if self.phase == MatchPhase::Idle {
            self.phase = MatchPhase::Running;
            push_event(&mut self.events, GameEvent::MatchStarted);
            log::info!("Match started");
        } else {
            log::debug!("start ignored in phase {}", self.phase.as_str());
        }
    }

    /// Running -> Paused. Ignored in any other phase.
    pub fn pause(&mut self) {
        if self.phase == MatchPhase::Running {
            self.phase = MatchPhase::Paused;
            log::debug!("Match paused at tick {}", self.time_ticks);
        }
    }

    /// Paused -> Running. Ignored in any other phase.
    pub fn resume(&mut self) {
        if self.phase == MatchPhase::Paused {
            self.phase = MatchPhase::Running;
            log::debug!("Match resumed at tick {}", self.time_ticks);
        }
    }

    /// Single pause button: pause when running, resume when paused
    pub fn toggle_pause(&mut self) {
        match self.phase {
            MatchPhase::Running => self.pause(),
            MatchPhase::Paused => self.resume(),
            MatchPhase::Idle | MatchPhase::Ended => {}
        }
    }

    /// Reinitialize everything and return to idle (or running when
    /// `auto_start` is set). Valid from any phase.
    pub fn reset(&mut self) {
        self.reinitialize();
        self.phase = self.initial_phase();
        log::info!("Match reset ({})", self.phase.as_str());
    }

    /// Change how many simulation steps run per frame
    pub fn set_speed_multiplier(&mut self, multiplier: u32) -> Result<(), ConfigError> {
        if multiplier == 0 {
            log::warn!("Rejected speed multiplier 0");
            return Err(ConfigError::ZeroSpeedMultiplier);
        }
        self.config.speed_multiplier = multiplier;
        log::debug!("Speed multiplier set to {multiplier}");
        Ok(())
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether a finished match will restart on its own
    pub fn auto_restarts(&self) -> bool {
        matches!(self.config.on_win, OnWin::RestartAfterDelay { .. })
    }

    /// One-line status for a HUD
    pub fn status_text(&self) -> String {
        match (self.phase, self.winner) {
            (MatchPhase::Idle, _) => "Press Start to begin".to_string(),
            (MatchPhase::Running, _) => "Game in progress...".to_string(),
            (MatchPhase::Paused, _) => "Game paused".to_string(),
            (MatchPhase::Ended, Some(winner)) => {
                format!("{} wins! All bricks converted!", winner.as_str())
            }
            (MatchPhase::Ended, None) => "Game over".to_string(),
        }
    }
}
