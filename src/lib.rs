//! Smashout - a classic paddle-and-ball brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `config`: Data-driven board layout and tuning
//! - `audio`: Sound cue vocabulary and the output seam

pub mod audio;
pub mod config;
pub mod sim;

pub use audio::{AudioSink, NullAudio, RecordingAudio, SoundCue};
pub use config::{Config, ConfigError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 360.0;

    /// Brick field defaults
    pub const GRID_ROWS: u32 = 4;
    pub const GRID_COLS: u32 = 8;
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Gap between neighboring bricks
    pub const BRICK_GAP: f32 = 4.0;
    /// Top-left corner of the brick field
    pub const FIELD_OFFSET_X: f32 = 65.0;
    pub const FIELD_OFFSET_Y: f32 = 35.0;

    /// Ball defaults - speed bounds both velocity components
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 3.0;
    pub const BALL_START_X: f32 = 320.0;
    pub const BALL_START_Y: f32 = 280.0;
    /// Sprite frames in the ball spin cycle
    pub const BALL_FRAMES: u8 = 4;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 14.0;
    pub const PADDLE_SPEED: f32 = 6.0;
    pub const PADDLE_START_X: f32 = 280.0;
    pub const PADDLE_START_Y: f32 = 300.0;
}
