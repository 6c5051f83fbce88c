//! Game configuration
//!
//! Every tunable of a match lives here. Values are fixed once a
//! `GameState` is built; only the speed multiplier may change afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// What happens once one faction owns the whole grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnWin {
    /// Stop the match and wait for a reset
    #[default]
    Stop,
    /// Stay ended for `delay_ticks` ticks, then reinitialize and keep
    /// playing on the next tick (0 restarts on the first tick after the win)
    RestartAfterDelay { delay_ticks: u32 },
}

impl OnWin {
    /// Auto-restart policy with the default delay
    pub fn restart() -> Self {
        OnWin::RestartAfterDelay {
            delay_ticks: RESTART_DELAY_TICKS,
        }
    }
}

/// Errors raised when validating or loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("arena dimensions must be positive and finite (got {width}x{height})")]
    InvalidArena { width: f32, height: f32 },
    #[error("ball radius must be positive and finite (got {0})")]
    InvalidRadius(f32),
    #[error("ball radius {radius} does not fit in a {width}x{height} arena")]
    RadiusTooLarge { radius: f32, width: f32, height: f32 },
    #[error("ball speed band [{min}, {max}] must be positive and ordered")]
    InvalidSpeedBand { min: f32, max: f32 },
    #[error("speed multiplier must be at least 1")]
    ZeroSpeedMultiplier,
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid rows
    pub grid_rows: usize,
    /// Grid columns
    pub grid_cols: usize,
    /// Arena width (pixels)
    pub arena_width: f32,
    /// Arena height (pixels)
    pub arena_height: f32,
    /// Radius shared by both balls
    pub ball_radius: f32,
    /// Lower bound of the per-axis launch speed
    pub ball_min_speed: f32,
    /// Upper bound of the per-axis launch speed
    pub ball_max_speed: f32,
    /// Simulation steps per rendered frame
    pub speed_multiplier: u32,
    /// Start running immediately on creation and reset
    pub auto_start: bool,
    /// Win policy
    pub on_win: OnWin,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_rows: GRID_ROWS,
            grid_cols: GRID_COLS,
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            ball_radius: BALL_RADIUS,
            ball_min_speed: BALL_MIN_SPEED,
            ball_max_speed: BALL_MAX_SPEED,
            speed_multiplier: 1,
            auto_start: false,
            on_win: OnWin::Stop,
        }
    }
}

impl GameConfig {
    /// Continuous-play preset: auto-start and restart after every win
    pub fn continuous() -> Self {
        Self {
            auto_start: true,
            on_win: OnWin::restart(),
            ..Self::default()
        }
    }

    /// Width of a single grid cell
    pub fn cell_width(&self) -> f32 {
        self.arena_width / self.grid_cols as f32
    }

    /// Height of a single grid cell
    pub fn cell_height(&self) -> f32 {
        self.arena_height / self.grid_rows as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_rows == 0 || self.grid_cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.grid_rows,
                cols: self.grid_cols,
            });
        }
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.arena_width) || !positive(self.arena_height) {
            return Err(ConfigError::InvalidArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if !positive(self.ball_radius) {
            return Err(ConfigError::InvalidRadius(self.ball_radius));
        }
        if 2.0 * self.ball_radius >= self.arena_width.min(self.arena_height) {
            return Err(ConfigError::RadiusTooLarge {
                radius: self.ball_radius,
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if !positive(self.ball_min_speed)
            || !self.ball_max_speed.is_finite()
            || self.ball_min_speed > self.ball_max_speed
        {
            return Err(ConfigError::InvalidSpeedBand {
                min: self.ball_min_speed,
                max: self.ball_max_speed,
            });
        }
        if self.speed_multiplier == 0 {
            return Err(ConfigError::ZeroSpeedMultiplier);
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Like `load`, but a missing or unreadable file falls back to the
    /// defaults. Malformed or invalid contents are still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(&path) {
            Err(ConfigError::Io(e)) => {
                log::warn!(
                    "Could not read {} ({e}), using default config",
                    path.as_ref().display()
                );
                Ok(Self::default())
            }
            result => result,
        }
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.grid_rows, 15);
        assert_eq!(config.grid_cols, 20);
        assert_eq!(config.arena_width, 800.0);
        assert_eq!(config.arena_height, 600.0);
        assert_eq!(config.ball_radius, 8.0);
        assert_eq!(config.speed_multiplier, 1);
        assert!(!config.auto_start);
        assert_eq!(config.on_win, OnWin::Stop);
        assert!(config.validate().is_ok());
        assert_eq!(config.cell_width(), 40.0);
        assert_eq!(config.cell_height(), 40.0);
    }

    #[test]
    fn test_rejects_degenerate_values() {
        let bad = [
            GameConfig {
                grid_rows: 0,
                ..Default::default()
            },
            GameConfig {
                arena_width: -800.0,
                ..Default::default()
            },
            GameConfig {
                ball_radius: 0.0,
                ..Default::default()
            },
            GameConfig {
                ball_radius: 300.0,
                ..Default::default()
            },
            GameConfig {
                ball_min_speed: 6.0,
                ..Default::default()
            },
            GameConfig {
                speed_multiplier: 0,
                ..Default::default()
            },
        ];
        for config in &bad {
            assert!(config.validate().is_err(), "{config:?} should be rejected");
        }
    }

    #[test]
    fn test_from_json_partial() {
        let config = GameConfig::from_json(
            r#"{ "speed_multiplier": 3, "on_win": { "restart_after_delay": { "delay_ticks": 60 } } }"#,
        )
        .unwrap();
        assert_eq!(config.speed_multiplier, 3);
        assert_eq!(config.on_win, OnWin::RestartAfterDelay { delay_ticks: 60 });
        assert_eq!(config.grid_cols, 20);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "grid_cols": 0 }"#),
            Err(ConfigError::EmptyGrid { .. })
        ));
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_roundtrip_continuous() {
        let config = GameConfig::continuous();
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_load_or_default() {
        let dir = std::env::temp_dir();

        let missing = dir.join("double-arkanoid-missing-config.json");
        let _ = std::fs::remove_file(&missing);
        assert_eq!(
            GameConfig::load_or_default(&missing).unwrap(),
            GameConfig::default()
        );

        let invalid = dir.join(format!("double-arkanoid-invalid-{}.json", std::process::id()));
        std::fs::write(&invalid, r#"{ "grid_rows": 0 }"#).unwrap();
        let result = GameConfig::load_or_default(&invalid);
        std::fs::write(&invalid, "{ not json").unwrap();
        let malformed = GameConfig::load_or_default(&invalid);
        let _ = std::fs::remove_file(&invalid);

        assert!(matches!(result, Err(ConfigError::EmptyGrid { .. })));
        assert!(matches!(malformed, Err(ConfigError::Parse(_))));
    }
}
