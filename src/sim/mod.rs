//! Per-frame game simulation
//!
//! All gameplay logic lives here. The module is pure with respect to its
//! inputs:
//! - One tick per host frame, per-frame units (no dt)
//! - Seeded RNG only, owned by [`GameState`]
//! - No rendering or platform dependencies
//!
//! The same seed, input sequence, and playfield replay a run identically.

pub mod collision;
pub mod state;
pub mod stream;
pub mod tick;

pub use collision::{actor_hits_ceiling, actor_hits_ground, actor_hits_obstacle};
pub use state::{Actor, GamePhase, GameState, Obstacle, Playfield, Snapshot};
pub use stream::{ObstacleStream, SweepOutcome};
pub use tick::{TickInput, TickReport, tick};
