//! Game state and core simulation types
//!
//! [`GameState`] is the single owner of everything the simulation mutates:
//! actor, obstacle stream, score, phase, and the run's RNG. Hosts read it
//! through [`Snapshot`]s rather than holding references into it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::stream::ObstacleStream;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the title screen for a start input
    Start,
    /// Active gameplay
    Playing,
    /// Run ended by a fatal collision
    GameOver,
}

/// Simulation area dimensions
///
/// Supplied by the host on every tick rather than cached, so a window
/// resize takes effect on the very next step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Top edge of the fatal ground band
    #[inline]
    pub fn ground_y(&self, ground_band_height: f32) -> f32 {
        self.height - ground_band_height
    }
}

/// The player character
///
/// `x` is fixed for the whole run; gravity and jumps only move `y`.
/// Positive velocity is downward (screen coordinates). For collisions the
/// actor is a square box of side `2 * radius` (see [`super::collision`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical velocity, pixels per frame
    pub velocity: f32,
}

impl Actor {
    /// Spawn pose for a fresh run: fixed x, vertically centered, at rest
    pub fn spawn(playfield: Playfield, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                playfield.width * tuning.actor_x_frac,
                playfield.height / 2.0,
            ),
            radius: tuning.actor_radius,
            velocity: 0.0,
        }
    }

    /// Integrate one frame of gravity: velocity first, then position
    pub fn advance(&mut self, gravity: f32) {
        self.velocity += gravity;
        self.pos.y += self.velocity;
    }

    /// Flap: the impulse replaces the current velocity, it does not add
    pub fn jump(&mut self, impulse: f32) {
        self.velocity = impulse;
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// A gap obstacle: a top wall and a bottom wall with a randomized opening
///
/// The top wall spans `0..top_height`, the bottom wall spans
/// `top_height + gap` down to the playfield floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge; decreases every step
    pub x: f32,
    pub width: f32,
    /// Height of the top wall
    pub top_height: f32,
    /// Vertical clearance between the walls
    pub gap: f32,
    /// Set once when the actor clears the right edge; gates scoring
    pub passed: bool,
}

impl Obstacle {
    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge of the bottom wall
    #[inline]
    pub fn bottom_wall_top(&self) -> f32 {
        self.top_height + self.gap
    }
}

/// Complete game state, exclusively owned by whoever drives the tick
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed; a run replays identically for equal seed and inputs
    pub seed: u64,
    pub phase: GamePhase,
    /// Placeholder pose until the first start input resets the run
    pub actor: Actor,
    pub stream: ObstacleStream,
    pub score: u32,
    /// Simulation age in ticks, across runs
    pub time_ticks: u64,
    pub tuning: Tuning,
    pub(crate) rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: GamePhase::Start,
            actor: Actor {
                pos: Vec2::ZERO,
                radius: tuning.actor_radius,
                velocity: 0.0,
            },
            stream: ObstacleStream::new(),
            score: 0,
            time_ticks: 0,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reset to a fresh run: spawn pose, empty stream, zero score
    ///
    /// The RNG keeps its stream position, so consecutive runs in one
    /// session see different obstacle layouts.
    pub fn reset_run(&mut self, playfield: Playfield) {
        self.actor = Actor::spawn(playfield, &self.tuning);
        self.stream.clear();
        self.score = 0;
    }
}

/// Render-ready copy of one executed step
///
/// Everything the host needs to draw a frame; serializable so it can cross
/// whatever boundary the host puts between sim and screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub actor: Actor,
    pub obstacles: Vec<Obstacle>,
    pub ground_band_height: f32,
    pub score: u32,
}

impl Snapshot {
    pub(crate) fn capture(state: &GameState) -> Self {
        Self {
            actor: state.actor.clone(),
            obstacles: state.stream.as_slice().to_vec(),
            ground_band_height: state.tuning.ground_band_height,
            score: state.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_pose() {
        let tuning = Tuning::default();
        let actor = Actor::spawn(Playfield::new(1000.0, 600.0), &tuning);
        assert_eq!(actor.pos.x, 200.0);
        assert_eq!(actor.pos.y, 300.0);
        assert_eq!(actor.velocity, 0.0);
        assert_eq!(actor.radius, tuning.actor_radius);
    }

    #[test]
    fn test_advance_applies_gravity_then_moves() {
        // Spec scenario: y = radius, velocity 0, gravity 0.5, one step.
        let mut actor = Actor {
            pos: Vec2::new(50.0, 20.0),
            radius: 20.0,
            velocity: 0.0,
        };
        actor.advance(0.5);
        assert_eq!(actor.velocity, 0.5);
        assert_eq!(actor.pos.y, 20.5);
    }

    #[test]
    fn test_velocity_grows_by_gravity_each_step() {
        let mut actor = Actor {
            pos: Vec2::new(50.0, 300.0),
            radius: 20.0,
            velocity: 0.0,
        };
        for step in 1..=10 {
            actor.advance(0.5);
            assert_eq!(actor.velocity, 0.5 * step as f32);
        }
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let mut actor = Actor {
            pos: Vec2::new(50.0, 300.0),
            radius: 20.0,
            velocity: 7.5,
        };
        actor.jump(-10.0);
        assert_eq!(actor.velocity, -10.0);

        // Not additive, regardless of direction of the prior velocity
        actor.velocity = -25.0;
        actor.jump(-10.0);
        assert_eq!(actor.velocity, -10.0);
    }

    #[test]
    fn test_reset_run_restores_initial_values() {
        let playfield = Playfield::new(800.0, 600.0);
        let mut state = GameState::new(7, Tuning::default());
        state.score = 42;
        state.actor.pos.y = 17.0;
        state.phase = GamePhase::GameOver;

        state.reset_run(playfield);
        assert_eq!(state.score, 0);
        assert!(state.stream.is_empty());
        assert_eq!(state.actor.pos.y, 300.0);
        assert_eq!(state.actor.velocity, 0.0);
    }
}
