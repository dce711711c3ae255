//! Deterministic simulation module
//!
//! All gameplay logic lives here and must stay pure and deterministic:
//! - Discrete per-tick steps only
//! - Seeded RNG only
//! - Stable brick iteration order (row-major)
//! - No rendering or platform dependencies

pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{
    Ball, Brick, Direction, FrameAnimator, GameState, Outcome, Paddle, RngState, brick_grid,
};
pub use tick::{TickInput, tick};
