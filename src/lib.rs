//! Flappy Pup - a single-screen tap-to-flap arcade game
//!
//! Core modules:
//! - `sim`: the per-frame simulation (physics, obstacle stream, collisions, scoring)
//! - `tuning`: data-driven gameplay constants
//!
//! The crate draws nothing. Each executed step hands the host a
//! [`sim::Snapshot`] to render however it likes, and the host keeps
//! scheduling frames for as long as [`sim::TickReport::running`] stays true.

pub mod sim;
pub mod tuning;

pub use tuning::{ConfigError, Tuning};

/// Reference gameplay constants (per-frame units, pixels)
pub mod consts {
    /// Downward acceleration added to the actor's velocity each frame
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a jump; negative is up in screen coordinates
    pub const JUMP_IMPULSE: f32 = -10.0;
    /// Actor collision half-extent, also the rendered radius
    pub const ACTOR_RADIUS: f32 = 20.0;
    /// Actor x position as a fraction of playfield width (fixed per run)
    pub const ACTOR_X_FRAC: f32 = 0.2;

    /// Horizontal distance each obstacle travels per frame
    pub const OBSTACLE_SPEED: f32 = 3.0;
    /// Obstacle width
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    /// Horizontal distance between consecutive spawns
    pub const SPAWN_INTERVAL: f32 = 250.0;
    /// Gap height is sampled uniformly from [MIN_GAP, MAX_GAP) per obstacle
    pub const MIN_GAP: f32 = 120.0;
    pub const MAX_GAP: f32 = 200.0;
    /// Minimum height of either wall of an obstacle
    pub const MIN_WALL_HEIGHT: f32 = 50.0;

    /// Height of the fatal ground band at the bottom of the playfield
    pub const GROUND_BAND_HEIGHT: f32 = 20.0;
}
