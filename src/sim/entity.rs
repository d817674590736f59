//! Obstacles, decorations and the registry that owns them

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;

/// Kinds of scrolling entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Cactus
    GroundObstacleA,
    /// Wide cactus cluster
    GroundObstacleB,
    /// Pterodactyl
    FlyingObstacle,
    /// Cloud (never collides)
    Decoration,
}

impl EntityKind {
    /// Every kind, in the order spawning is attempted each tick
    pub const SPAWN_ORDER: [EntityKind; 4] = [
        EntityKind::Decoration,
        EntityKind::GroundObstacleA,
        EntityKind::GroundObstacleB,
        EntityKind::FlyingObstacle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::GroundObstacleA => "cactus",
            EntityKind::GroundObstacleB => "cactus cluster",
            EntityKind::FlyingObstacle => "pterodactyl",
            EntityKind::Decoration => "cloud",
        }
    }
}

/// Everything needed to place a new entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewEntity {
    pub kind: EntityKind,
    /// Top-right corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub collidable: bool,
}

/// A live obstacle or decoration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    /// Top-right corner; x is the point tested for culling and spacing
    pub pos: Vec2,
    /// Horizontal only for every kind
    pub vel: Vec2,
    pub size: Vec2,
    pub collidable: bool,
    /// Tick the entity appeared on; it starts moving the tick after
    pub spawned_tick: u64,
}

impl Entity {
    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_right(self.pos, self.size)
    }

    /// x of the right edge
    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.pos.x
    }
}

/// Owns every live entity, sorted by id (= spawn order)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRegistry {
    entities: Vec<Entity>,
    next_id: u32,
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
        }
    }
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity spawned on `tick`, returning its id
    pub fn insert(&mut self, new: NewEntity, tick: u64) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.entities.push(Entity {
            id,
            kind: new.kind,
            pos: new.pos,
            vel: new.vel,
            size: new.size,
            collidable: new.collidable,
            spawned_tick: tick,
        });
        id
    }

    /// Move every entity by its velocity, then cull those whose right edge
    /// has reached the left boundary. Entities spawned this tick hold still.
    ///
    /// Returns the number of entities culled.
    pub fn advance(&mut self, tick: u64, dt: f32) -> usize {
        for entity in self.entities.iter_mut() {
            if entity.spawned_tick < tick {
                entity.pos += entity.vel * dt;
            }
        }

        let before = self.entities.len();
        self.entities.retain(|e| {
            let keep = e.right_edge() > 0.0;
            if !keep {
                log::trace!("Culled {} #{} at x={}", e.kind.name(), e.id, e.pos.x);
            }
            keep
        });
        before - self.entities.len()
    }

    pub fn get(&self, id: u32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Live entities in spawn order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_kind(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.kind == kind)
    }

    /// Live entities that can hit the player
    pub fn collidable(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.collidable)
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.iter_kind(kind).count()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
        self.next_id = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cactus(x: f32, speed: f32) -> NewEntity {
        NewEntity {
            kind: EntityKind::GroundObstacleA,
            pos: Vec2::new(x, 100.0),
            vel: Vec2::new(speed, 0.0),
            size: Vec2::new(48.0, 32.0),
            collidable: true,
        }
    }

    #[test]
    fn test_ids_follow_spawn_order() {
        let mut registry = EntityRegistry::new();
        let a = registry.insert(cactus(600.0, -200.0), 1);
        let b = registry.insert(cactus(600.0, -200.0), 2);
        assert!(b > a);
        let ids: Vec<u32> = registry.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_spawn_tick_holds_still() {
        let mut registry = EntityRegistry::new();
        let id = registry.insert(cactus(600.0, -200.0), 5);
        registry.advance(5, 1.0);
        assert_eq!(registry.get(id).map(|e| e.pos.x), Some(600.0));
        registry.advance(6, 1.0);
        assert_eq!(registry.get(id).map(|e| e.pos.x), Some(400.0));
    }

    #[test]
    fn test_culled_after_three_unit_ticks() {
        // 600 units at 200 units/tick: ceil(600 / 200) = 3 moving ticks
        let mut registry = EntityRegistry::new();
        let id = registry.insert(cactus(600.0, -200.0), 1);
        assert_eq!(registry.advance(2, 1.0), 0);
        assert_eq!(registry.advance(3, 1.0), 0);
        assert!(registry.contains(id));
        assert_eq!(registry.advance(4, 1.0), 1);
        assert!(!registry.contains(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_count_and_filters() {
        let mut registry = EntityRegistry::new();
        registry.insert(cactus(600.0, -200.0), 1);
        registry.insert(
            NewEntity {
                kind: EntityKind::Decoration,
                pos: Vec2::new(600.0, 20.0),
                vel: Vec2::new(-30.0, 0.0),
                size: Vec2::new(60.0, 30.0),
                collidable: false,
            },
            1,
        );
        assert_eq!(registry.count(EntityKind::GroundObstacleA), 1);
        assert_eq!(registry.count(EntityKind::Decoration), 1);
        assert_eq!(registry.count(EntityKind::FlyingObstacle), 0);
        assert_eq!(registry.collidable().count(), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_bounds_hang_left_of_anchor() {
        let mut registry = EntityRegistry::new();
        let id = registry.insert(cactus(600.0, -200.0), 1);
        let bounds = registry.get(id).map(|e| e.bounds()).expect("live entity");
        assert_eq!(bounds.max.x, 600.0);
        assert_eq!(bounds.min.x, 552.0);
        assert_eq!(bounds.min.y, 100.0);
    }
}
