//! Per-tick simulation step
//!
//! One call to [`tick`] advances the world one fixed step in a fixed phase
//! order. All randomness comes from the seeded state, so the same inputs
//! against the same seed replay identically.

use super::state::{Direction, GameState, Outcome};
use crate::audio::{AudioSink, SoundCue};

/// Player input sampled for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Steering; `None` halts the paddle
    pub direction: Option<Direction>,
    /// Launch the dormant ball this tick
    pub fire: bool,
}

/// Advance the simulation by one tick.
///
/// Phases run in a fixed order: input, brick collisions, paddle collision,
/// screen bounds, motion. Collisions test the ball's projected position, so
/// each contact resolves one tick before the rectangles would visually touch.
/// Motion still runs on the tick that ends the session.
pub fn tick(state: &mut GameState, input: &TickInput, cues: &mut dyn AudioSink) {
    if !state.running() {
        return;
    }
    state.time_ticks += 1;

    // Steering and launch
    match input.direction {
        Some(dir) => state.paddle.set_direction(dir),
        None => state.paddle.stop(),
    }
    if input.fire {
        state.fire();
    }

    // Collisions against the projected ball
    collide_bricks(state, cues);
    collide_paddle(state, cues);

    // Screen bounds
    state.paddle.resolve_screen_bounds(state.config.screen.x);
    let screen = state.config.screen;
    let lost = match state.ball.as_mut() {
        Some(ball) => ball.resolve_screen_bounds(screen, cues),
        None => false,
    };
    if lost {
        state.end(Outcome::Lost);
    }

    // Commit motion
    state.paddle.advance();
    if let Some(ball) = state.ball.as_mut() {
        ball.advance();
    }
}

/// Sweep the brick field in row-major order, testing each brick against
/// the ball's current projection. A flip from an earlier hit feeds into
/// later tests in the same sweep. Clearing the last brick wins the session
/// on the spot.
fn collide_bricks(state: &mut GameState, cues: &mut dyn AudioSink) {
    let Some(mut ball) = state.ball.take() else {
        return;
    };
    let total = state.config.total_bricks();
    for i in 0..state.bricks.len() {
        let brick = &mut state.bricks[i];
        if !brick.active || !ball.hits(&brick.rect) {
            continue;
        }
        ball.bounce_off_brick(brick);
        state.score += 1;
        if state.score >= total {
            cues.play(SoundCue::Victory);
            state.end(Outcome::Won);
        }
        cues.play(SoundCue::Bump);
    }
    state.ball = Some(ball);
}

/// Resolve ball-versus-paddle contact. The cue plays on any contact, even
/// when an upward ball grazes the face without rebounding.
fn collide_paddle(state: &mut GameState, cues: &mut dyn AudioSink) {
    let paddle_rect = state.paddle.rect();
    if let Some(ball) = state.ball.as_mut() {
        if ball.hits(&paddle_rect) {
            ball.bounce_off_paddle(&state.paddle);
            cues.play(SoundCue::Bump);
        }
    }
}
