//! Smashout entry point
//!
//! Runs a headless session driven by a small autopilot, which is handy for
//! soak-testing the simulation. Pass a seed to reproduce a run, and
//! optionally a JSON config file to change the board:
//!
//! `smashout [seed] [config.json]`

use std::env;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use smashout::sim::{Direction, GameState, TickInput, tick};
use smashout::{AudioSink, Config, SoundCue};

/// Tick cap so a stuck autopilot cannot loop forever
const MAX_TICKS: u64 = 500_000;

/// Cadence of the sprite animation timer, in ticks
const FRAME_PERIOD: u64 = 6;

/// Audio sink that writes cues to the log
#[derive(Debug)]
struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("cue: {cue:?}");
    }
}

/// Keep the paddle under the ball, with a slow wobble so long runs do not
/// settle into a fixed bounce loop
fn autopilot(state: &GameState) -> TickInput {
    if state.paddle.held().is_some() {
        return TickInput {
            direction: None,
            fire: true,
        };
    }
    let Some(ball) = state.ball.as_ref() else {
        return TickInput::default();
    };

    let time_factor = state.time_ticks as f32 * 0.01;
    let wobble = (time_factor.sin() * 0.3 + (time_factor * 0.7).sin() * 0.15)
        * (state.paddle.size.x / 2.0);
    let target = ball.rect().center_x() + wobble;

    let center = state.paddle.rect().center_x();
    let direction = if (target - center).abs() <= state.paddle.speed {
        None
    } else if target < center {
        Some(Direction::Left)
    } else {
        Some(Direction::Right)
    };
    TickInput {
        direction,
        fire: false,
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = match args.get(1) {
        Some(raw) => raw
            .parse::<u64>()
            .expect("seed must be an unsigned integer"),
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0),
    };
    let config: Config = match args.get(2) {
        Some(path) => {
            let raw = fs::read_to_string(path).expect("failed to read config file");
            serde_json::from_str(&raw).expect("failed to parse config file")
        }
        None => Config::default(),
    };

    let mut state = GameState::new(config, seed).expect("invalid config");
    let animator = state
        .paddle
        .held()
        .map(|ball| ball.animator())
        .expect("fresh session holds the dormant ball");

    let mut cues = LogAudio;
    while state.running() && state.time_ticks < MAX_TICKS {
        let input = autopilot(&state);
        tick(&mut state, &input, &mut cues);
        if state.time_ticks % FRAME_PERIOD == 0 {
            animator.advance();
        }
    }

    match state.outcome() {
        Some(outcome) => {
            log::info!(
                "finished in {} ticks with score {}",
                state.time_ticks,
                state.score
            );
            println!("{}", outcome.message());
        }
        None => println!(
            "tick cap reached after {} ticks (score {})",
            state.time_ticks, state.score
        ),
    }
}
