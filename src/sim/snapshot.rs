//! Read-only view of a match for renderers and HUDs

use serde::Serialize;

use super::grid::Faction;
use super::state::{GameState, MatchPhase, Scores};

/// A ball as a renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub faction: Faction,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major cell factions
    pub cells: Vec<Faction>,
    pub balls: Vec<BallView>,
    pub scores: Scores,
    pub phase: MatchPhase,
    pub winner: Option<Faction>,
    pub time_ticks: u64,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            rows: state.grid.rows(),
            cols: state.grid.cols(),
            cells: state.grid.cells().to_vec(),
            balls: state
                .balls
                .iter()
                .map(|b| BallView {
                    x: b.pos.x,
                    y: b.pos.y,
                    radius: b.radius,
                    faction: b.faction,
                })
                .collect(),
            scores: state.scores,
            phase: state.phase,
            winner: state.winner,
            time_ticks: state.time_ticks,
        }
    }

    /// Faction of a cell, `None` when out of range
    pub fn cell(&self, row: usize, col: usize) -> Option<Faction> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_capture_initial() {
        let state = GameState::new(GameConfig::default(), 42).unwrap();
        let snap = Snapshot::capture(&state);
        assert_eq!(snap.rows, 15);
        assert_eq!(snap.cols, 20);
        assert_eq!(snap.cells.len(), 300);
        assert_eq!(snap.cell(0, 0), Some(Faction::Light));
        assert_eq!(snap.cell(0, 19), Some(Faction::Dark));
        assert_eq!(snap.cell(15, 0), None);
        assert_eq!(snap.balls.len(), 2);
        assert_eq!(snap.balls[0].x, 200.0);
        assert_eq!(snap.phase, MatchPhase::Idle);
        assert_eq!(snap.winner, None);
    }

    #[test]
    fn test_json_shape() {
        let state = GameState::new(GameConfig::default(), 42).unwrap();
        let json = Snapshot::capture(&state).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "idle");
        assert_eq!(value["cells"][0], "light");
        assert_eq!(value["balls"][1]["faction"], "dark");
        assert_eq!(value["scores"]["light"], 0);
        assert!(value["winner"].is_null());
    }
}
