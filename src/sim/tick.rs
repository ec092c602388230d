//! Per-frame simulation step and the run state machine
//!
//! One `tick` per host frame. The step order is load-bearing: physics,
//! then the fatal ground check, then the ceiling clamp, then spawn, then
//! the obstacle sweep (collision, scoring, pruning), then the snapshot.
//! Scoring must see post-move obstacle positions, which this order
//! guarantees.

use super::collision;
use super::state::{GamePhase, GameState, Playfield, Snapshot};

/// Discrete input events for a single frame
///
/// The host's input layer decides how raw events map onto these (a single
/// tap usually means start, jump, or restart depending on phase). The core
/// ignores any event that is illegal in the current phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Begin a run from the title screen
    pub start: bool,
    /// Flap upward; only honored while playing
    pub jump: bool,
    /// Begin a new run after a game over
    pub restart: bool,
    /// Attract/demo mode: the tick synthesizes its own input
    pub idle_mode: bool,
}

/// What the host needs to know after a tick
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    /// Keep scheduling frames? Goes false on any exit from `Playing`; the
    /// host must stop its frame callback then, not leave one dangling.
    pub running: bool,
    /// Points scored this step, for the host's score sink
    pub points: u32,
    /// Render-ready state; `Some` exactly when a step body executed
    pub snapshot: Option<Snapshot>,
}

/// Advance the game by one frame
///
/// Handles phase transitions first, then runs the step body if the game is
/// (now) playing. The playfield is consumed fresh every call so resizes
/// apply immediately.
pub fn tick(state: &mut GameState, input: &TickInput, playfield: Playfield) -> TickReport {
    debug_assert!(
        playfield.width > 0.0 && playfield.height >= state.tuning.min_playfield_height(),
        "playfield too small for the configured tuning"
    );

    let mut input = *input;
    if input.idle_mode {
        synthesize_idle_input(state, playfield, &mut input);
    }

    match state.phase {
        GamePhase::Start if input.start => {
            state.reset_run(playfield);
            state.phase = GamePhase::Playing;
            log::info!("run started (seed {})", state.seed);
        }
        GamePhase::GameOver if input.restart => {
            state.reset_run(playfield);
            state.phase = GamePhase::Playing;
            log::info!("run restarted (seed {})", state.seed);
        }
        // Any other input in a non-playing phase is a no-op.
        _ => {}
    }

    if state.phase != GamePhase::Playing {
        return TickReport::default();
    }

    state.time_ticks += 1;

    // (1) Jump replaces velocity, then gravity integrates on top of it.
    if input.jump {
        state.actor.jump(state.tuning.jump_impulse);
    }
    state.actor.advance(state.tuning.gravity);

    // (2) Ground is fatal; abort the rest of the step.
    if collision::actor_hits_ground(&state.actor, playfield, state.tuning.ground_band_height) {
        return game_over(state, "ground");
    }

    // (3) Ceiling just clamps.
    if collision::actor_hits_ceiling(&state.actor) {
        state.actor.pos.y = state.actor.radius;
        state.actor.velocity = 0.0;
    }

    // (4) Spawn at cadence.
    if state
        .stream
        .spawn_due(playfield, state.tuning.spawn_interval)
    {
        state.stream.spawn(&mut state.rng, playfield, &state.tuning);
    }

    // (5) Advance obstacles, collide, score, prune.
    let outcome = state.stream.sweep(&state.actor, &state.tuning);
    if outcome.collided {
        return game_over(state, "obstacle");
    }
    if outcome.points > 0 {
        state.score += outcome.points;
        log::debug!("score {}", state.score);
    }

    // (6) Snapshot for the render sink.
    TickReport {
        running: true,
        points: outcome.points,
        snapshot: Some(Snapshot::capture(state)),
    }
}

fn game_over(state: &mut GameState, cause: &str) -> TickReport {
    state.phase = GamePhase::GameOver;
    log::info!(
        "game over ({cause}) at tick {}, score {}",
        state.time_ticks,
        state.score
    );
    TickReport::default()
}

/// Attract-mode input synthesis: start the run, then flap whenever the
/// actor is about to sink below the center of the next gap
fn synthesize_idle_input(state: &GameState, playfield: Playfield, input: &mut TickInput) {
    match state.phase {
        GamePhase::Start => input.start = true,
        GamePhase::Playing => {
            let target_y = state
                .stream
                .iter()
                .find(|obstacle| obstacle.right() >= state.actor.pos.x)
                .map(|obstacle| obstacle.top_height + obstacle.gap / 2.0)
                .unwrap_or(playfield.height / 2.0);

            // Project a few frames ahead so the flap lands early enough.
            let lookahead = 6.0;
            let projected = state.actor.pos.y + state.actor.velocity * lookahead;
            if projected > target_y && state.actor.velocity > 0.0 {
                input.jump = true;
            }
        }
        GamePhase::GameOver => {}
    }
}
