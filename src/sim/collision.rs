//! Player vs obstacle hit detection
//!
//! Detection only: a hit ends the run, so there is no penetration or
//! response to compute. Decorations never collide.

use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::entity::{EntityKind, EntityRegistry};

/// The obstacle the player ran into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub entity_id: u32,
    pub kind: EntityKind,
    /// Obstacle box at the moment of impact
    pub bounds: Aabb,
}

/// First collidable entity (in spawn order) whose box overlaps `player_box`
///
/// Pure: the same boxes always give the same verdict.
pub fn detect_collision(player_box: &Aabb, registry: &EntityRegistry) -> Option<Hit> {
    registry
        .collidable()
        .map(|entity| (entity, entity.bounds()))
        .find(|(_, bounds)| player_box.overlaps(bounds))
        .map(|(entity, bounds)| Hit {
            entity_id: entity.id,
            kind: entity.kind,
            bounds,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::NewEntity;
    use glam::Vec2;

    fn player_box() -> Aabb {
        // 40 wide, 45 tall, feet at (60, 150)
        Aabb::from_bottom_center(Vec2::new(60.0, 150.0), Vec2::new(40.0, 45.0))
    }

    fn obstacle(kind: EntityKind, right_x: f32, top_y: f32, collidable: bool) -> NewEntity {
        NewEntity {
            kind,
            pos: Vec2::new(right_x, top_y),
            vel: Vec2::new(-200.0, 0.0),
            size: Vec2::new(48.0, 32.0),
            collidable,
        }
    }

    #[test]
    fn test_overlapping_cactus_hits() {
        let mut registry = EntityRegistry::new();
        let id = registry.insert(obstacle(EntityKind::GroundObstacleA, 90.0, 118.0, true), 1);
        let hit = detect_collision(&player_box(), &registry).expect("hit");
        assert_eq!(hit.entity_id, id);
        assert_eq!(hit.kind, EntityKind::GroundObstacleA);
    }

    #[test]
    fn test_edge_contact_is_not_a_hit() {
        let mut registry = EntityRegistry::new();
        // Player spans x 40..80; obstacle spans 80..128
        registry.insert(obstacle(EntityKind::GroundObstacleA, 128.0, 118.0, true), 1);
        assert!(detect_collision(&player_box(), &registry).is_none());

        // Flyer whose bottom edge touches the player's top (y = 105)
        let mut registry = EntityRegistry::new();
        registry.insert(obstacle(EntityKind::FlyingObstacle, 90.0, 73.0, true), 1);
        assert!(detect_collision(&player_box(), &registry).is_none());
    }

    #[test]
    fn test_decorations_pass_through() {
        let mut registry = EntityRegistry::new();
        registry.insert(obstacle(EntityKind::Decoration, 90.0, 118.0, false), 1);
        assert!(detect_collision(&player_box(), &registry).is_none());
    }

    #[test]
    fn test_first_hit_in_spawn_order() {
        let mut registry = EntityRegistry::new();
        let first = registry.insert(obstacle(EntityKind::GroundObstacleA, 90.0, 118.0, true), 1);
        registry.insert(obstacle(EntityKind::FlyingObstacle, 85.0, 100.0, true), 2);
        let a = detect_collision(&player_box(), &registry);
        let b = detect_collision(&player_box(), &registry);
        assert_eq!(a, b);
        assert_eq!(a.map(|h| h.entity_id), Some(first));
    }
}
