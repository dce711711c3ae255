//! Board layout and tuning
//!
//! Everything the simulation treats as a tunable lives here. `Config::default()`
//! is the classic board; alternate layouts can be loaded from JSON, with
//! missing fields filled from the defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Configuration values the simulation cannot tolerate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Brick grid has zero rows or columns
    EmptyGrid,
    /// A speed tunable is zero or negative
    NonPositiveSpeed(&'static str),
    /// A size tunable has a zero or negative dimension
    NonPositiveSize(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyGrid => {
                write!(f, "brick grid needs at least one row and one column")
            }
            ConfigError::NonPositiveSpeed(name) => write!(f, "{name} speed must be positive"),
            ConfigError::NonPositiveSize(name) => {
                write!(f, "{name} dimensions must be positive")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Simulation tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Playfield dimensions (pixels)
    pub screen: Vec2,

    // === Brick field ===
    pub rows: u32,
    pub cols: u32,
    pub brick_size: Vec2,
    /// Gap between neighboring bricks
    pub brick_gap: f32,
    /// Top-left corner of the brick field
    pub field_offset: Vec2,

    // === Ball ===
    pub ball_size: Vec2,
    pub ball_speed: f32,
    /// Where the dormant ball rests at session start
    pub ball_start: Vec2,

    // === Paddle ===
    pub paddle_size: Vec2,
    pub paddle_speed: f32,
    pub paddle_start: Vec2,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            rows: GRID_ROWS,
            cols: GRID_COLS,
            brick_size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            brick_gap: BRICK_GAP,
            field_offset: Vec2::new(FIELD_OFFSET_X, FIELD_OFFSET_Y),
            ball_size: Vec2::new(BALL_SIZE, BALL_SIZE),
            ball_speed: BALL_SPEED,
            ball_start: Vec2::new(BALL_START_X, BALL_START_Y),
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_speed: PADDLE_SPEED,
            paddle_start: Vec2::new(PADDLE_START_X, PADDLE_START_Y),
        }
    }
}

impl Config {
    /// Reject tunables that would break the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.screen.x <= 0.0 || self.screen.y <= 0.0 {
            return Err(ConfigError::NonPositiveSize("screen"));
        }
        if self.brick_size.x <= 0.0 || self.brick_size.y <= 0.0 {
            return Err(ConfigError::NonPositiveSize("brick"));
        }
        if self.ball_size.x <= 0.0 || self.ball_size.y <= 0.0 {
            return Err(ConfigError::NonPositiveSize("ball"));
        }
        if self.paddle_size.x <= 0.0 || self.paddle_size.y <= 0.0 {
            return Err(ConfigError::NonPositiveSize("paddle"));
        }
        if self.ball_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed("ball"));
        }
        if self.paddle_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed("paddle"));
        }
        Ok(())
    }

    /// Total bricks in a fresh field (the win threshold)
    pub fn total_bricks(&self) -> u32 {
        self.rows * self.cols
    }

    /// Spacing between neighboring brick origins
    pub fn brick_pitch(&self) -> Vec2 {
        self.brick_size + self.brick_gap
    }
}
