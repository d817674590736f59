//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, injected by the caller
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod clock;
pub mod collision;
pub mod entity;
pub mod player;
pub mod rng;
pub mod score;
pub mod simulation;
pub mod spawn;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use clock::Clock;
pub use collision::{Hit, detect_collision};
pub use entity::{Entity, EntityKind, EntityRegistry, NewEntity};
pub use player::{Player, PlayerProfiles, Posture};
pub use rng::{ConstantSource, PcgSource, RandomSource};
pub use score::{DifficultyScaler, ScoreTracker, ScoreUpdate};
pub use simulation::Simulation;
pub use spawn::{LastObstacle, SpawnContext, SpawnState, spawn_tick, try_spawn};
pub use state::{
    EntityView, GameEvent, GamePhase, GameState, PlayerView, StateSnapshot, Viewport,
};
pub use tick::{TickInput, reset, tick};
