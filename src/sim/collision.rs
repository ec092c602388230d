//! Collision predicates for the actor against obstacles, ground, and ceiling
//!
//! The actor collides as an axis-aligned square of side `2 * radius`
//! centered on its position, even though hosts draw it as a circle. The box
//! is the shape the game was balanced around; do not tighten it to a true
//! circle.

use super::state::{Actor, Obstacle, Playfield};

/// Square-box actor vs rectangle-pair obstacle
///
/// Horizontal overlap is tested first; only then do the walls matter. The
/// bottom wall starts at `top_height + gap` and runs to the playfield
/// floor, so anything below the gap is a hit.
pub fn actor_hits_obstacle(actor: &Actor, obstacle: &Obstacle) -> bool {
    let horizontal_overlap =
        actor.right() > obstacle.left() && actor.left() < obstacle.right();
    if !horizontal_overlap {
        return false;
    }

    actor.top() < obstacle.top_height || actor.bottom() > obstacle.bottom_wall_top()
}

/// Fatal ground-band check
///
/// Strict comparison: resting exactly on the band's top edge is still
/// alive, the actor has to penetrate it.
pub fn actor_hits_ground(actor: &Actor, playfield: Playfield, ground_band_height: f32) -> bool {
    actor.bottom() > playfield.ground_y(ground_band_height)
}

/// Non-fatal ceiling check; the step responds by clamping `y` to the
/// radius and zeroing velocity
pub fn actor_hits_ceiling(actor: &Actor) -> bool {
    actor.top() <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn actor_at(x: f32, y: f32) -> Actor {
        Actor {
            pos: Vec2::new(x, y),
            radius: 20.0,
            velocity: 0.0,
        }
    }

    fn obstacle_at(x: f32) -> Obstacle {
        Obstacle {
            x,
            width: 60.0,
            top_height: 150.0,
            gap: 150.0,
            passed: false,
        }
    }

    #[test]
    fn test_no_horizontal_overlap_never_collides() {
        // Obstacle at x=300..360; actor box at 80..120.
        let obstacle = obstacle_at(300.0);
        // Dead center of the top wall vertically, but far left of it.
        assert!(!actor_hits_obstacle(&actor_at(100.0, 75.0), &obstacle));
        // And far right of it.
        assert!(!actor_hits_obstacle(&actor_at(500.0, 75.0), &obstacle));
    }

    #[test]
    fn test_safe_passage_through_gap() {
        let obstacle = obstacle_at(90.0);
        // Gap spans 150..300; actor box 205..245 sits inside it.
        assert!(!actor_hits_obstacle(&actor_at(100.0, 225.0), &obstacle));
    }

    #[test]
    fn test_top_wall_hit() {
        let obstacle = obstacle_at(90.0);
        // Actor top at 120 < top wall bottom at 150.
        assert!(actor_hits_obstacle(&actor_at(100.0, 140.0), &obstacle));
    }

    #[test]
    fn test_bottom_wall_hit() {
        let obstacle = obstacle_at(90.0);
        // Actor bottom at 330 > bottom wall top at 300.
        assert!(actor_hits_obstacle(&actor_at(100.0, 310.0), &obstacle));
    }

    #[test]
    fn test_edge_grazing_is_safe() {
        let obstacle = obstacle_at(90.0);
        // Actor top exactly at the wall bottom, actor bottom exactly at
        // the bottom wall top: strict comparisons, no hit.
        assert!(!actor_hits_obstacle(&actor_at(100.0, 170.0), &obstacle));
        assert!(!actor_hits_obstacle(&actor_at(100.0, 280.0), &obstacle));
    }

    #[test]
    fn test_horizontal_edge_contact_is_safe() {
        // Actor right edge exactly touching the obstacle left edge.
        let obstacle = obstacle_at(120.0);
        assert!(!actor_hits_obstacle(&actor_at(100.0, 75.0), &obstacle));
    }

    #[test]
    fn test_ground_band_boundary() {
        // Spec scenario: height 600, band 20. Bottom at 580 is alive,
        // 581 is dead.
        let playfield = Playfield::new(800.0, 600.0);
        assert!(!actor_hits_ground(&actor_at(100.0, 560.0), playfield, 20.0));
        assert!(actor_hits_ground(&actor_at(100.0, 561.0), playfield, 20.0));
    }

    #[test]
    fn test_ceiling_contact() {
        assert!(!actor_hits_ceiling(&actor_at(100.0, 20.1)));
        assert!(actor_hits_ceiling(&actor_at(100.0, 20.0)));
        assert!(actor_hits_ceiling(&actor_at(100.0, 5.0)));
    }
}
