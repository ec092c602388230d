//! Data-driven gameplay tuning
//!
//! Everything the simulation consumes as a constant lives here, so a host
//! can rebalance the game from a JSON file without recompiling. Defaults
//! mirror [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Errors from loading or validating a tuning file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

/// Gameplay constants, in per-frame units and pixels
///
/// Callers must hand the sim a validated tuning; [`Tuning::load`] validates
/// for you, hand-built values should go through [`Tuning::validate`] first.
/// A tuning that fails validation is a programming error, not something the
/// sim recovers from at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Velocity a jump sets (negative = upward); replaces, never adds
    pub jump_impulse: f32,
    /// Actor collision half-extent
    pub actor_radius: f32,
    /// Actor x as a fraction of playfield width
    pub actor_x_frac: f32,
    /// Horizontal obstacle speed per frame
    pub obstacle_speed: f32,
    /// Obstacle width
    pub obstacle_width: f32,
    /// Horizontal spawn cadence (distance, not time)
    pub spawn_interval: f32,
    /// Gap height range, sampled uniformly: [min_gap, max_gap)
    pub min_gap: f32,
    pub max_gap: f32,
    /// Minimum height of either obstacle wall
    pub min_wall_height: f32,
    /// Height of the fatal ground band
    pub ground_band_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: consts::GRAVITY,
            jump_impulse: consts::JUMP_IMPULSE,
            actor_radius: consts::ACTOR_RADIUS,
            actor_x_frac: consts::ACTOR_X_FRAC,
            obstacle_speed: consts::OBSTACLE_SPEED,
            obstacle_width: consts::OBSTACLE_WIDTH,
            spawn_interval: consts::SPAWN_INTERVAL,
            min_gap: consts::MIN_GAP,
            max_gap: consts::MAX_GAP,
            min_wall_height: consts::MIN_WALL_HEIGHT,
            ground_band_height: consts::GROUND_BAND_HEIGHT,
        }
    }
}

impl Tuning {
    /// Load and validate a tuning file (JSON)
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let tuning: Tuning = serde_json::from_str(&json)?;
        tuning.validate()?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check the simulation's preconditions
    ///
    /// The sim assumes all of these hold; it never re-checks them per step.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gravity <= 0.0 {
            return Err(ConfigError::Invalid("gravity must be positive"));
        }
        if self.jump_impulse >= 0.0 {
            return Err(ConfigError::Invalid("jump_impulse must be negative (upward)"));
        }
        if self.actor_radius <= 0.0 {
            return Err(ConfigError::Invalid("actor_radius must be positive"));
        }
        if !(0.0..1.0).contains(&self.actor_x_frac) || self.actor_x_frac == 0.0 {
            return Err(ConfigError::Invalid("actor_x_frac must be in (0, 1)"));
        }
        if self.obstacle_speed <= 0.0 {
            return Err(ConfigError::Invalid("obstacle_speed must be positive"));
        }
        if self.obstacle_width <= 0.0 {
            return Err(ConfigError::Invalid("obstacle_width must be positive"));
        }
        if self.spawn_interval <= 0.0 {
            return Err(ConfigError::Invalid("spawn_interval must be positive"));
        }
        if self.min_gap <= 0.0 || self.min_gap >= self.max_gap {
            return Err(ConfigError::Invalid("gap range must satisfy 0 < min_gap < max_gap"));
        }
        if self.min_wall_height <= 0.0 {
            return Err(ConfigError::Invalid("min_wall_height must be positive"));
        }
        if self.ground_band_height <= 0.0 {
            return Err(ConfigError::Invalid("ground_band_height must be positive"));
        }
        Ok(())
    }

    /// Smallest playfield height that leaves the spawn formula a non-empty
    /// range for every possible gap
    pub fn min_playfield_height(&self) -> f32 {
        self.max_gap + 2.0 * self.min_wall_height + self.ground_band_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_gap_range() {
        let tuning = Tuning {
            min_gap: 200.0,
            max_gap: 120.0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_upward_gravity_and_downward_jump() {
        let tuning = Tuning {
            gravity: -0.5,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());

        let tuning = Tuning {
            jump_impulse: 10.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_actor_off_playfield() {
        for frac in [0.0, 1.0, 1.5, -0.2] {
            let tuning = Tuning {
                actor_x_frac: frac,
                ..Default::default()
            };
            assert!(tuning.validate().is_err(), "frac {frac} should be rejected");
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let tuning = Tuning {
            gravity: 0.7,
            spawn_interval: 300.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(tuning, back);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let back: Tuning = serde_json::from_str(r#"{"gravity": 0.8}"#).unwrap();
        assert_eq!(back.gravity, 0.8);
        assert_eq!(back.max_gap, Tuning::default().max_gap);
    }

    #[test]
    fn test_min_playfield_height_admits_every_gap() {
        let tuning = Tuning::default();
        let h = tuning.min_playfield_height();
        // Worst case: the widest gap still leaves min_wall_height for the
        // top wall draw.
        let max_top = h - tuning.max_gap - tuning.min_wall_height - tuning.ground_band_height;
        assert!(max_top >= tuning.min_wall_height);
    }
}
