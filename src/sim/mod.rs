//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (light ball first, cells row-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Axis, Rect, WallHit, ball_rect_collision, bounce_axis, reflect_off_walls};
pub use grid::{Faction, FactionCounts, Grid};
pub use snapshot::{BallView, Snapshot};
pub use state::{Ball, GameEvent, GameState, MatchPhase, Scores};
pub use tick::{advance_frame, check_win, find_cell_collision, step};
