//! Flappy Pup headless driver
//!
//! Runs the simulation with the built-in attract-mode bot at the controls
//! until the run ends, then prints the final snapshot as JSON. Useful for
//! smoke-testing tuning changes:
//!
//! ```text
//! RUST_LOG=debug flappy-pup [seed] [tuning.json]
//! ```

use std::path::Path;
use std::process::ExitCode;

use rand::Rng;

use flappy_pup::Tuning;
use flappy_pup::sim::{GameState, Playfield, TickInput, tick};

/// Playfield for headless runs; interactive hosts pass their real canvas
/// size instead.
const PLAYFIELD: Playfield = Playfield {
    width: 800.0,
    height: 600.0,
};

/// Frame cap in case a tuning change makes the bot immortal
const MAX_TICKS: u64 = 60 * 60 * 10;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| rand::rng().random());
    let tuning = match args.next() {
        Some(path) => match Tuning::load(Path::new(&path)) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };

    log::info!("flappy-pup demo run, seed {seed}");

    let mut state = GameState::new(seed, tuning);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    // The first tick starts the run (the bot presses start); after that we
    // stand in for the host's frame callback until the report says stop.
    let mut last_snapshot = None;
    loop {
        let report = tick(&mut state, &input, PLAYFIELD);
        if let Some(snapshot) = report.snapshot {
            last_snapshot = Some(snapshot);
        }
        if !report.running || state.time_ticks >= MAX_TICKS {
            break;
        }
    }

    log::info!(
        "run over after {} ticks, final score {}",
        state.time_ticks,
        state.score
    );

    if let Some(snapshot) = last_snapshot {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                log::error!("snapshot serialization failed: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
