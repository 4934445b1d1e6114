//! Collision detection between the actor, the field bounds and obstacles
//!
//! Everything here is an axis-aligned box test with strict inequalities:
//! touching an edge exactly is not a hit.

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::Obstacle;

/// What the actor ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// Left the field through the top
    Ceiling,
    /// Left the field through the bottom
    Floor,
    /// Hit a solid segment of the obstacle with this id
    Obstacle { id: u32 },
}

/// Whether the actor's box overlaps a solid part of `obstacle`
pub fn hits_obstacle(actor: &Actor, obstacle: &Obstacle) -> bool {
    let (x, y) = (actor.pos.x, actor.pos.y);
    let (w, h) = (actor.size.x, actor.size.y);

    let overlaps_x = x < obstacle.x + obstacle.width && x + w > obstacle.x;
    overlaps_x && (y < obstacle.top || y + h > obstacle.bottom)
}

/// First collision found, checking field bounds before obstacles
pub fn detect(actor: &Actor, obstacles: &[Obstacle], field_height: f32) -> Option<Collision> {
    if actor.pos.y < 0.0 {
        return Some(Collision::Ceiling);
    }
    if actor.bottom() > field_height {
        return Some(Collision::Floor);
    }
    obstacles
        .iter()
        .find(|o| hits_obstacle(actor, o))
        .map(|o| Collision::Obstacle { id: o.id })
}

/// Collision predicate
pub fn collides(actor: &Actor, obstacles: &[Obstacle], field_height: f32) -> bool {
    detect(actor, obstacles, field_height).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::ObstacleField;
    use crate::tuning::Tuning;

    const FIELD_HEIGHT: f32 = 760.0;

    fn actor_at(y: f32) -> Actor {
        let mut actor = Actor::new(&Tuning::default());
        actor.pos.y = y;
        actor
    }

    fn gate(x: f32, top: f32) -> ObstacleField {
        let mut field = ObstacleField::new(80.0);
        field.insert(x, top, 260.0);
        field
    }

    #[test]
    fn test_field_bounds_are_exclusive() {
        assert!(!collides(&actor_at(0.0), &[], FIELD_HEIGHT));
        assert!(!collides(&actor_at(FIELD_HEIGHT - 100.0), &[], FIELD_HEIGHT));

        assert_eq!(detect(&actor_at(-0.0001), &[], FIELD_HEIGHT), Some(Collision::Ceiling));
        // 660.0001 + 100 > 760
        assert_eq!(
            detect(&actor_at(FIELD_HEIGHT - 100.0 + 0.0001), &[], FIELD_HEIGHT),
            Some(Collision::Floor)
        );
    }

    #[test]
    fn test_below_gap_collides() {
        // Gap 100..360, actor occupies 400..500
        let field = gate(100.0, 100.0);
        let actor = actor_at(400.0);
        assert_eq!(
            detect(&actor, field.obstacles(), FIELD_HEIGHT),
            Some(Collision::Obstacle { id: 1 })
        );
    }

    #[test]
    fn test_inside_gap_is_safe() {
        // Gap 100..360, actor occupies 150..250
        let field = gate(100.0, 100.0);
        assert!(!collides(&actor_at(150.0), field.obstacles(), FIELD_HEIGHT));

        // Flush with both gap edges
        let mut tight = ObstacleField::new(80.0);
        tight.insert(100.0, 200.0, 100.0);
        assert!(!collides(&actor_at(200.0), tight.obstacles(), FIELD_HEIGHT));
    }

    #[test]
    fn test_above_gap_collides() {
        let field = gate(100.0, 300.0);
        assert!(collides(&actor_at(250.0), field.obstacles(), FIELD_HEIGHT));
    }

    #[test]
    fn test_horizontal_touch_is_not_overlap() {
        // Actor spans 60..160; obstacle starting exactly at 160 only touches
        let field = gate(160.0, 500.0);
        assert!(!collides(&actor_at(100.0), field.obstacles(), FIELD_HEIGHT));

        // Obstacle ending exactly at 60
        let field = gate(-20.0, 500.0);
        assert!(!collides(&actor_at(100.0), field.obstacles(), FIELD_HEIGHT));

        // One unit of overlap
        let field = gate(159.0, 500.0);
        assert!(collides(&actor_at(100.0), field.obstacles(), FIELD_HEIGHT));
    }

    #[test]
    fn test_first_hit_reported() {
        let mut field = ObstacleField::new(80.0);
        field.insert(400.0, 100.0, 260.0);
        field.insert(100.0, 100.0, 260.0);
        field.insert(120.0, 100.0, 260.0);
        assert_eq!(
            detect(&actor_at(400.0), field.obstacles(), FIELD_HEIGHT),
            Some(Collision::Obstacle { id: 2 })
        );
    }
}
