//! Obstacle stream: spawning, advancement, scoring, pruning
//!
//! Spawn cadence is distance-based rather than time-based: a new obstacle
//! appears once the newest one has traveled `spawn_interval` pixels in from
//! the right edge. That ties spawn density to obstacle speed and keeps it
//! independent of frame rate.

use rand::Rng;
use rand_pcg::Pcg32;

use super::collision;
use super::state::{Actor, Obstacle, Playfield};
use crate::tuning::Tuning;

/// Result of one advance/score/prune sweep
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepOutcome {
    /// Actor overlapped a wall; the run is over
    pub collided: bool,
    /// Obstacles newly cleared this step
    pub points: u32,
}

/// Ordered obstacle sequence
///
/// Insertion order = spawn order = left-to-right screen order. The stream
/// exclusively owns its obstacles; hosts see them only through snapshots.
#[derive(Debug, Clone, Default)]
pub struct ObstacleStream {
    obstacles: Vec<Obstacle>,
}

impl ObstacleStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Spawn policy: always when empty, otherwise once the newest obstacle
    /// is `spawn_interval` in from the right edge
    pub fn spawn_due(&self, playfield: Playfield, spawn_interval: f32) -> bool {
        match self.obstacles.last() {
            None => true,
            Some(last) => playfield.width - last.x >= spawn_interval,
        }
    }

    /// Append a new obstacle at the right edge with a randomized gap and
    /// top-wall height
    ///
    /// The draw ranges guarantee at least `min_wall_height` of top wall and
    /// at least `min_wall_height` of bottom wall above the ground band:
    /// `top_height + gap <= height - ground_band_height - min_wall_height`.
    pub fn spawn(&mut self, rng: &mut Pcg32, playfield: Playfield, tuning: &Tuning) {
        let gap = rng.random_range(tuning.min_gap..tuning.max_gap);
        let max_top =
            playfield.height - gap - tuning.min_wall_height - tuning.ground_band_height;
        debug_assert!(
            max_top > tuning.min_wall_height,
            "playfield too short for the spawn range, see Tuning::min_playfield_height"
        );
        let top_height = rng.random_range(tuning.min_wall_height..max_top);

        log::trace!("spawn: gap={gap:.1} top={top_height:.1}");
        self.obstacles.push(Obstacle {
            x: playfield.width,
            width: tuning.obstacle_width,
            top_height,
            gap,
            passed: false,
        });
    }

    /// Advance every obstacle one step, detect wall collisions, mark newly
    /// passed obstacles, prune off-screen ones
    ///
    /// Runs in reverse index order so in-place removal cannot skip an
    /// element. Aborts at the first collision; obstacles not yet reached
    /// keep their pre-sweep positions for the game-over frame.
    pub fn sweep(&mut self, actor: &Actor, tuning: &Tuning) -> SweepOutcome {
        let mut outcome = SweepOutcome::default();
        for i in (0..self.obstacles.len()).rev() {
            let obstacle = &mut self.obstacles[i];
            obstacle.x -= tuning.obstacle_speed;

            if collision::actor_hits_obstacle(actor, obstacle) {
                outcome.collided = true;
                return outcome;
            }

            // The passed flag makes this idempotent even though the check
            // runs every frame.
            if !obstacle.passed && obstacle.right() < actor.pos.x {
                obstacle.passed = true;
                outcome.points += 1;
            }

            if obstacle.right() < 0.0 {
                self.obstacles.remove(i);
            }
        }
        outcome
    }
}
