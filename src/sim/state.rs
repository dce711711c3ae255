//! Game state and core simulation types
//!
//! All state that must be persisted for replay/determinism lives here.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::audio::{AudioSink, SoundCue};
use crate::config::{Config, ConfigError};
use crate::consts::BALL_FRAMES;

/// Shared handle driving the ball's sprite cycle
///
/// An external fixed-period timer calls `advance`; the tick never touches it.
/// Advancing has no effect until the ball is fired.
#[derive(Debug, Clone, Default)]
pub struct FrameAnimator {
    counter: Arc<AtomicU8>,
    spinning: Arc<AtomicBool>,
}

impl FrameAnimator {
    /// Step to the next sprite frame if the ball is spinning
    pub fn advance(&self) {
        if self.spinning.load(Ordering::Relaxed) {
            // u8 wraps at a multiple of the frame count, so the cycle never skips
            self.counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Current frame index in `0..BALL_FRAMES`
    pub fn frame(&self) -> u8 {
        self.counter.load(Ordering::Relaxed) % BALL_FRAMES
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Speed scalar bounding both velocity components after any bounce
    pub speed: f32,
    /// Sprite cycle state (cosmetic, timer-driven)
    #[serde(skip)]
    animator: FrameAnimator,
}

impl Ball {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: config.ball_start,
            vel: Vec2::ZERO,
            size: config.ball_size,
            speed: config.ball_speed,
            animator: FrameAnimator::default(),
        }
    }

    /// Rectangle at the current position
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Rectangle one tick of motion ahead
    pub fn projected(&self) -> Rect {
        self.rect().translated(self.vel)
    }

    /// Look-ahead overlap test: collision resolves one tick before the
    /// rectangles would visually touch
    pub fn hits(&self, target: &Rect) -> bool {
        self.projected().overlaps(target)
    }

    /// Current sprite frame
    pub fn frame(&self) -> u8 {
        self.animator.frame()
    }

    /// Handle for the external animation timer
    pub fn animator(&self) -> FrameAnimator {
        self.animator.clone()
    }

    /// Dormant to moving: straight up, with a random integer sideways kick
    /// in `[-speed, speed]`. Also starts the sprite spin.
    pub fn fire(&mut self, rng: &mut Pcg32) {
        let kick = self.speed as i32;
        self.vel.y = -self.speed;
        self.vel.x = rng.random_range(-kick..=kick) as f32;
        self.animator.spinning.store(true, Ordering::Relaxed);
    }

    /// Commit one tick of motion
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Vertical reflection off a brick face; the brick goes dark
    pub fn bounce_off_brick(&mut self, brick: &mut Brick) {
        self.vel.y = -self.vel.y;
        brick.active = false;
    }

    /// Paddle response: dragged by a moving paddle, then redirected upward
    /// at an angle set by where the ball struck the face
    pub fn bounce_off_paddle(&mut self, paddle: &Paddle) {
        if paddle.dx != 0.0 {
            self.pos.x += paddle.dx;
        }
        // Downward contact only; an upward ball keeps its course
        if self.vel.y > 0.0 {
            self.vel.y = -self.speed;
            self.vel.x = self.speed * paddle.touch_offset(self.rect().center_x());
        }
    }

    /// Clamp-and-reflect against the screen edges, one edge per call in
    /// priority order left, right, top, bottom. Returns true if the ball
    /// left through the bottom; it is not clamped and keeps falling.
    pub fn resolve_screen_bounds(&mut self, screen: Vec2, cues: &mut dyn AudioSink) -> bool {
        let next = self.projected();
        if next.left() < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = self.speed;
            cues.play(SoundCue::Bump);
        } else if next.right() > screen.x {
            self.pos.x = screen.x - self.size.x;
            self.vel.x = -self.speed;
            cues.play(SoundCue::Bump);
        } else if next.top() < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = self.speed;
            cues.play(SoundCue::Bump);
        } else if next.bottom() > screen.y {
            cues.play(SoundCue::GameOver);
            return true;
        }
        false
    }
}

/// Paddle steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity, one of -speed, 0, +speed
    pub dx: f32,
    pub speed: f32,
    /// Dormant ball riding the paddle until fire
    held: Option<Ball>,
}

impl Paddle {
    /// Fresh paddle with the dormant ball riding it
    pub fn new(config: &Config) -> Self {
        Self {
            pos: config.paddle_start,
            size: config.paddle_size,
            dx: 0.0,
            speed: config.paddle_speed,
            held: Some(Ball::new(config)),
        }
    }

    /// Rectangle occupied by the paddle
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Begin moving in `dir`
    pub fn set_direction(&mut self, dir: Direction) {
        self.dx = match dir {
            Direction::Left => -self.speed,
            Direction::Right => self.speed,
        };
    }

    /// Halt horizontal motion
    pub fn stop(&mut self) {
        self.dx = 0.0;
    }

    /// Release and launch the dormant ball. Returns the ball now in flight,
    /// or `None` if it was already released; there is never a second ball.
    pub fn fire(&mut self, rng: &mut Pcg32) -> Option<Ball> {
        let mut ball = self.held.take()?;
        ball.fire(rng);
        Some(ball)
    }

    /// Dormant ball, if still riding the paddle
    pub fn held(&self) -> Option<&Ball> {
        self.held.as_ref()
    }

    /// Commit one tick of motion, dragging the dormant ball along
    pub fn advance(&mut self) {
        if self.dx != 0.0 {
            self.pos.x += self.dx;
            if let Some(ball) = self.held.as_mut() {
                ball.pos.x += self.dx;
            }
        }
    }

    /// Normalized contact position on the face: -1 at the left edge, 0 at
    /// the center, +1 at the right edge. Saturated, so contact beyond the
    /// face stays bounded.
    pub fn touch_offset(&self, x: f32) -> f32 {
        (2.0 * (x - self.pos.x) / self.size.x - 1.0).clamp(-1.0, 1.0)
    }

    /// Zero the velocity for this tick if the projected position would
    /// cross either screen edge. Position is never clamped; motion is
    /// quantized to whole steps of `speed`.
    pub fn resolve_screen_bounds(&mut self, screen_width: f32) {
        let x = self.pos.x + self.dx;
        if x < 0.0 || x + self.size.x > screen_width {
            self.dx = 0.0;
        }
    }
}

/// A destructible brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub active: bool,
}

/// Build the row-major brick field described by `config`
pub fn brick_grid(config: &Config) -> Vec<Brick> {
    let pitch = config.brick_pitch();
    let mut bricks = Vec::with_capacity(config.total_bricks() as usize);
    for row in 0..config.rows {
        for col in 0..config.cols {
            let pos =
                config.field_offset + Vec2::new(col as f32 * pitch.x, row as f32 * pitch.y);
            bricks.push(Brick {
                rect: Rect::new(pos, config.brick_size),
                active: true,
            });
        }
    }
    bricks
}

/// Terminal result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    /// Message for the session-end surface
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Won => "Congratulations! You win!",
            Outcome::Lost => "You lost! Try it again!",
        }
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// RNG state; the launch kick is its only consumer
    pub rng_state: RngState,
    /// Board this session was built from
    pub config: Config,
    /// The paddle (owns the dormant ball until fire)
    pub paddle: Paddle,
    /// Ball in flight; `None` while dormant on the paddle
    pub ball: Option<Ball>,
    /// Brick field, row-major
    pub bricks: Vec<Brick>,
    /// Destroyed brick count
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// False once the session has ended
    running: bool,
    /// Terminal result, recorded once by `end`
    outcome: Option<Outcome>,
}

impl GameState {
    /// Create a session from a validated `config`, ball dormant on the paddle
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "new session: seed {seed}, {} bricks to clear",
            config.total_bricks()
        );
        Ok(Self {
            seed,
            rng_state: RngState::new(seed),
            paddle: Paddle::new(&config),
            ball: None,
            bricks: brick_grid(&config),
            score: 0,
            time_ticks: 0,
            running: true,
            outcome: None,
            config,
        })
    }

    /// Launch the dormant ball. Later calls are no-ops.
    pub fn fire(&mut self) {
        let mut rng = self.rng_state.to_rng();
        if let Some(ball) = self.paddle.fire(&mut rng) {
            log::debug!("ball fired with sideways kick {}", ball.vel.x);
            self.ball = Some(ball);
        }
    }

    /// Bricks still standing
    pub fn active_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.active)
    }

    /// True until `end` is called
    pub fn running(&self) -> bool {
        self.running
    }

    /// Terminal result, if the session has ended
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Stop the session. One-way; the first recorded outcome sticks.
    pub fn end(&mut self, outcome: Outcome) {
        if self.running {
            self.running = false;
            self.outcome = Some(outcome);
            log::info!(
                "session over after {} ticks: {}",
                self.time_ticks,
                outcome.message()
            );
        }
    }
}
