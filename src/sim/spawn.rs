//! Procedural obstacle and decoration spawning
//!
//! Each tick every kind gets one spawn attempt behind three gates:
//! 1. Concurrency: fewer than `max_concurrent` of that kind alive
//! 2. Spacing (collidable kinds only): the last collidable obstacle has
//!    scrolled left of `spacing_threshold * width`
//! 3. Probability: one uniform draw below `spawn_chance`
//!
//! A failed gate just means no spawn this tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{EntityKind, EntityRegistry, NewEntity};
use super::rng::RandomSource;
use super::state::Viewport;
use crate::tuning::{Placement, SpawnPolicy, Tuning};

/// The most recent collidable obstacle, looked up by id, never owned
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LastObstacle {
    pub id: u32,
    /// Right edge at spawn time
    pub spawn_x: f32,
}

/// Spacing bookkeeping shared by every collidable kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnState {
    last_obstacle: Option<LastObstacle>,
}

impl SpawnState {
    pub fn last_obstacle(&self) -> Option<LastObstacle> {
        self.last_obstacle
    }

    /// Forget the last obstacle if it has been culled
    pub fn refresh(&mut self, registry: &EntityRegistry) {
        if let Some(last) = self.last_obstacle {
            if !registry.contains(last.id) {
                self.last_obstacle = None;
            }
        }
    }

    pub fn record(&mut self, id: u32, spawn_x: f32) {
        self.last_obstacle = Some(LastObstacle { id, spawn_x });
    }

    /// True when no live collidable obstacle sits right of `limit_x`
    pub fn spacing_clear(&self, registry: &EntityRegistry, limit_x: f32) -> bool {
        match self.last_obstacle {
            None => true,
            // A vanished obstacle counts as no obstacle
            Some(last) => registry
                .get(last.id)
                .is_none_or(|entity| entity.right_edge() < limit_x),
        }
    }

    pub fn clear(&mut self) {
        self.last_obstacle = None;
    }
}

/// World values the spawner reads for one tick
#[derive(Debug, Clone, Copy)]
pub struct SpawnContext<'a> {
    pub tuning: &'a Tuning,
    pub viewport: Viewport,
    /// Current scroll speed (negative)
    pub speed: f32,
}

/// Decide whether `kind` spawns this tick; returns the new entity if every gate passes
pub fn try_spawn<R: RandomSource>(
    kind: EntityKind,
    ctx: &SpawnContext<'_>,
    registry: &EntityRegistry,
    spawn_state: &SpawnState,
    rng: &mut R,
) -> Option<NewEntity> {
    let policy = ctx.tuning.policy(kind);

    if registry.count(kind) >= policy.max_concurrent {
        return None;
    }

    if policy.collidable {
        let limit_x = ctx.tuning.spacing_threshold * ctx.viewport.width;
        if !spawn_state.spacing_clear(registry, limit_x) {
            return None;
        }
    }

    if rng.next_unit() >= policy.spawn_chance {
        return None;
    }

    Some(place(kind, policy, ctx, rng))
}

/// Build the entity at the right edge of the world
fn place<R: RandomSource>(
    kind: EntityKind,
    policy: &SpawnPolicy,
    ctx: &SpawnContext<'_>,
    rng: &mut R,
) -> NewEntity {
    let Viewport { width, height } = ctx.viewport;
    let size = Vec2::new(
        policy.size.width_frac * width,
        policy.size.height_frac * height,
    );

    let top = match policy.placement {
        Placement::Ground => height - size.y,
        Placement::Band { min, max } => height * rng.range(min, max),
    };

    let (lo, hi) = policy.velocity_scale;
    let vel_x = ctx.speed * rng.range(lo, hi);

    NewEntity {
        kind,
        pos: Vec2::new(width, top),
        vel: Vec2::new(vel_x, 0.0),
        size,
        collidable: policy.collidable,
    }
}

/// Run one spawn attempt per kind and insert whatever spawns
///
/// Returns `(id, kind)` for each new entity, in spawn order.
pub fn spawn_tick<R: RandomSource>(
    tick: u64,
    ctx: &SpawnContext<'_>,
    registry: &mut EntityRegistry,
    spawn_state: &mut SpawnState,
    rng: &mut R,
) -> Vec<(u32, EntityKind)> {
    let mut spawned = Vec::new();

    for kind in EntityKind::SPAWN_ORDER {
        spawn_state.refresh(registry);

        if let Some(new) = try_spawn(kind, ctx, registry, spawn_state, rng) {
            let id = registry.insert(new, tick);
            if new.collidable {
                spawn_state.record(id, new.pos.x);
            }
            log::debug!(
                "Spawned {} #{} at ({:.1}, {:.1}) vel {:.1}",
                kind.name(),
                id,
                new.pos.x,
                new.pos.y,
                new.vel.x
            );
            spawned.push((id, kind));
        }
    }

    spawned
}
