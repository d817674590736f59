//! Game state and core simulation types
//!
//! Everything a run needs lives in one [`GameState`]; components receive the
//! pieces they touch explicitly, nothing reads global state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::clock::Clock;
use super::collision::Hit;
use super::entity::{EntityKind, EntityRegistry};
use super::player::{Player, Posture};
use super::score::{DifficultyScaler, ScoreTracker};
use super::spawn::SpawnState;
use crate::consts::MIN_VIEWPORT_DIM;
use crate::tuning::Tuning;

/// Visible world size; spawn bands and boxes are fractions of it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Degenerate (zero, negative, NaN) dimensions clamp to a minimum positive size
    pub fn new(width: f32, height: f32) -> Self {
        let clamped = Self {
            width: width.max(MIN_VIEWPORT_DIM),
            height: height.max(MIN_VIEWPORT_DIM),
        };
        if clamped.width != width || clamped.height != height {
            log::warn!(
                "Degenerate viewport {}x{}, clamped to {}x{}",
                width,
                height,
                clamped.width,
                clamped.height
            );
        }
        clamped
    }
}

impl Default for Viewport {
    fn default() -> Self {
        use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
        Self::new(WORLD_WIDTH, WORLD_HEIGHT)
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player hit an obstacle; waiting for restart
    GameOver,
}

/// Notable things that happened during a tick, for the host's sprites and audio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32, kind: EntityKind },
    SpeedUp { speed: f32 },
    NewHighScore { score: u64 },
    GameOver { hit: Hit, score: u64 },
    Restarted { run: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub clock: Clock,
    pub phase: GamePhase,
    pub player: Player,
    pub entities: EntityRegistry,
    pub spawn: SpawnState,
    pub score: ScoreTracker,
    pub difficulty: DifficultyScaler,
    /// Ground texture scroll offset
    pub ground_offset: f32,
    /// Obstacle that ended the run
    pub last_hit: Option<Hit>,
    /// Runs started this session (1-based)
    pub run: u32,
}

impl GameState {
    pub fn new(tuning: Tuning, viewport: Viewport) -> Self {
        let viewport = Viewport::new(viewport.width, viewport.height);
        Self {
            player: Player::new(&tuning, viewport),
            score: ScoreTracker::new(tuning.initial_high_score),
            difficulty: DifficultyScaler::new(tuning.base_speed),
            clock: Clock::new(),
            phase: GamePhase::Playing,
            entities: EntityRegistry::new(),
            spawn: SpawnState::default(),
            ground_offset: 0.0,
            last_hit: None,
            run: 1,
            tuning,
            viewport,
        }
    }

    /// Back to the start of a run; the session high score survives
    pub fn reset(&mut self) {
        self.clock = Clock::new();
        self.phase = GamePhase::Playing;
        self.player = Player::new(&self.tuning, self.viewport);
        self.entities.clear();
        self.spawn.clear();
        self.score.reset_run();
        self.difficulty = DifficultyScaler::new(self.tuning.base_speed);
        self.ground_offset = 0.0;
        self.last_hit = None;
        self.run += 1;
    }

    /// Host viewport changed; live entities keep their geometry
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.player.resize(&self.tuning, self.viewport);
        log::info!(
            "Viewport resized to {}x{}",
            self.viewport.width,
            self.viewport.height
        );
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Read-only view for the host
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            tick: self.clock.ticks(),
            run: self.run,
            phase: self.phase,
            player: PlayerView {
                pos: self.player.pos(),
                posture: self.player.posture(),
                bounds: self.player.bounds(),
            },
            entities: self
                .entities
                .iter()
                .map(|e| EntityView {
                    id: e.id,
                    kind: e.kind,
                    pos: e.pos,
                    bounds: e.bounds(),
                })
                .collect(),
            score: self.score.score(),
            high_score: self.score.high_score(),
            speed: self.difficulty.speed(),
            ground_offset: self.ground_offset,
            game_over: self.is_game_over(),
        }
    }
}

/// Player as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Bottom-center
    pub pos: Vec2,
    pub posture: Posture,
    pub bounds: Aabb,
}

/// Obstacle or decoration as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    pub kind: EntityKind,
    /// Top-right corner
    pub pos: Vec2,
    pub bounds: Aabb,
}

/// Everything the host needs to draw a frame and the HUD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub tick: u64,
    pub run: u32,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub entities: Vec<EntityView>,
    pub score: u64,
    pub high_score: u64,
    pub speed: f32,
    pub ground_offset: f32,
    pub game_over: bool,
}
