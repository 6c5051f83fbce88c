//! Double Arkanoid - A two-ball territory arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, ball motion, collisions, match state)
//! - `config`: Construction-time game configuration
//! - `host`: Headless frame loop driving the simulation

pub mod config;
pub mod host;
pub mod sim;

pub use config::{ConfigError, GameConfig, OnWin};
pub use host::{FrameInput, Game};

/// Game configuration defaults
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Grid dimensions
    pub const GRID_ROWS: usize = 15;
    pub const GRID_COLS: usize = 20;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Per-axis launch speed band (units/tick)
    pub const BALL_MIN_SPEED: f32 = 3.0;
    pub const BALL_MAX_SPEED: f32 = 5.0;

    /// Relative start positions (fraction of arena width/height)
    pub const LIGHT_START_X: f32 = 0.25;
    pub const DARK_START_X: f32 = 0.75;
    pub const START_Y: f32 = 0.5;

    /// Velocity steps applied after a cell bounce to clear the converted cell
    pub const ESCAPE_STEPS: f32 = 2.0;

    /// Delay before an auto-restart (3 seconds at 60 ticks/s)
    pub const RESTART_DELAY_TICKS: u32 = 180;

    /// Undrained events kept on a `GameState`; older ones are dropped
    pub const MAX_PENDING_EVENTS: usize = 256;
}
