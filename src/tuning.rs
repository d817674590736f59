//! Data-driven game balance
//!
//! Every magnitude the simulation uses lives here so runs can be re-tuned
//! from JSON without touching the sim. Sizes and bands are fractions of the
//! viewport; speeds are world units per second.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::EntityKind;

/// Errors from loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Width/height as fractions of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxProfile {
    pub width_frac: f32,
    pub height_frac: f32,
}

impl BoxProfile {
    pub const fn new(width_frac: f32, height_frac: f32) -> Self {
        Self {
            width_frac,
            height_frac,
        }
    }
}

/// Where a freshly spawned entity sits vertically
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Placement {
    /// Bottom edge rests on the ground
    Ground,
    /// Top edge drawn uniformly in `[min, max]` (fractions of world height)
    Band { min: f32, max: f32 },
}

/// Spawn rules for one entity kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPolicy {
    /// Maximum live entities of this kind
    pub max_concurrent: usize,
    /// Per-tick spawn probability once the other gates pass
    pub spawn_chance: f32,
    /// Bounding box size
    pub size: BoxProfile,
    pub placement: Placement,
    /// Horizontal velocity is `speed * scale`, scale drawn in `[min, max]`
    pub velocity_scale: (f32, f32),
    /// Collidable kinds hit the player and obey the spacing gate
    pub collidable: bool,
}

impl SpawnPolicy {
    fn validate(&self, field: &'static str) -> Result<(), TuningError> {
        let invalid = |reason: String| TuningError::Invalid { field, reason };

        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(invalid(format!(
                "spawn chance {} outside [0, 1]",
                self.spawn_chance
            )));
        }
        if self.size.width_frac <= 0.0 || self.size.height_frac <= 0.0 {
            return Err(invalid("size must be positive".to_string()));
        }
        if let Placement::Band { min, max } = self.placement {
            if min > max || min < 0.0 || max > 1.0 {
                return Err(invalid(format!("band [{min}, {max}] is not within [0, 1]")));
            }
        }
        let (lo, hi) = self.velocity_scale;
        if lo > hi || lo < 0.0 {
            return Err(invalid(format!("velocity scale ({lo}, {hi}) is not ordered")));
        }
        Ok(())
    }
}

/// Complete balance sheet for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seconds of simulated time per tick
    pub tick_seconds: f32,
    /// Scroll speed at run start (negative = leftward)
    pub base_speed: f32,
    /// Magnitude added to the scroll speed every difficulty step
    pub speed_step: f32,
    pub difficulty_cadence_ticks: u64,
    pub score_cadence_ticks: u64,
    pub initial_high_score: u64,

    pub gravity: f32,
    pub jump_impulse: f32,
    /// Player center x as a fraction of world width
    pub player_x_frac: f32,
    pub standing: BoxProfile,
    pub ducking: BoxProfile,

    /// Fraction of world width the last collidable obstacle must clear
    pub spacing_threshold: f32,
    pub ground_obstacle_a: SpawnPolicy,
    pub ground_obstacle_b: SpawnPolicy,
    pub flying_obstacle: SpawnPolicy,
    pub decoration: SpawnPolicy,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_seconds: SIM_DT,
            base_speed: BASE_SPEED,
            speed_step: SPEED_STEP,
            difficulty_cadence_ticks: DIFFICULTY_CADENCE_TICKS,
            score_cadence_ticks: SCORE_CADENCE_TICKS,
            initial_high_score: INITIAL_HIGH_SCORE,

            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            player_x_frac: 0.1,
            standing: BoxProfile::new(0.0667, 0.3),
            ducking: BoxProfile::new(0.095, 0.2),

            spacing_threshold: SPACING_THRESHOLD,
            ground_obstacle_a: SpawnPolicy {
                max_concurrent: 2,
                spawn_chance: 0.015,
                size: BoxProfile::new(0.08, 0.24 * 0.88),
                placement: Placement::Ground,
                velocity_scale: (1.0, 1.0),
                collidable: true,
            },
            ground_obstacle_b: SpawnPolicy {
                max_concurrent: 2,
                spawn_chance: 0.01,
                size: BoxProfile::new(0.12, 0.18),
                placement: Placement::Ground,
                velocity_scale: (1.0, 1.0),
                collidable: true,
            },
            flying_obstacle: SpawnPolicy {
                max_concurrent: 1,
                spawn_chance: 0.008,
                size: BoxProfile::new(0.06, 0.24 * 0.88),
                placement: Placement::Band { min: 0.2, max: 0.6 },
                velocity_scale: (1.0, 1.0),
                collidable: true,
            },
            decoration: SpawnPolicy {
                max_concurrent: 5,
                spawn_chance: 0.01,
                size: BoxProfile::new(0.1, 0.2),
                placement: Placement::Band { min: 0.1, max: 0.4 },
                velocity_scale: (0.1, 0.2),
                collidable: false,
            },
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document; absent fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Spawn rules for a kind
    pub fn policy(&self, kind: EntityKind) -> &SpawnPolicy {
        match kind {
            EntityKind::GroundObstacleA => &self.ground_obstacle_a,
            EntityKind::GroundObstacleB => &self.ground_obstacle_b,
            EntityKind::FlyingObstacle => &self.flying_obstacle,
            EntityKind::Decoration => &self.decoration,
        }
    }

    pub fn policy_mut(&mut self, kind: EntityKind) -> &mut SpawnPolicy {
        match kind {
            EntityKind::GroundObstacleA => &mut self.ground_obstacle_a,
            EntityKind::GroundObstacleB => &mut self.ground_obstacle_b,
            EntityKind::FlyingObstacle => &mut self.flying_obstacle,
            EntityKind::Decoration => &mut self.decoration,
        }
    }

    /// Reject values that would break sim invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> TuningError {
            TuningError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if !(self.tick_seconds > 0.0) {
            return Err(invalid("tick_seconds", "must be positive"));
        }
        if !(self.base_speed < 0.0) {
            return Err(invalid("base_speed", "must be negative (leftward scroll)"));
        }
        if self.speed_step < 0.0 {
            return Err(invalid("speed_step", "must not slow the world down"));
        }
        if self.difficulty_cadence_ticks == 0 {
            return Err(invalid("difficulty_cadence_ticks", "must be at least 1"));
        }
        if self.score_cadence_ticks == 0 {
            return Err(invalid("score_cadence_ticks", "must be at least 1"));
        }
        if self.gravity < 0.0 {
            return Err(invalid("gravity", "must point downward"));
        }
        if !(self.jump_impulse < 0.0) {
            return Err(invalid("jump_impulse", "must be negative (upward)"));
        }
        if !(0.0..=1.0).contains(&self.player_x_frac) {
            return Err(invalid("player_x_frac", "must be within [0, 1]"));
        }
        if self.standing.width_frac <= 0.0 || self.standing.height_frac <= 0.0 {
            return Err(invalid("standing", "size must be positive"));
        }
        if self.ducking.width_frac <= 0.0 || self.ducking.height_frac <= 0.0 {
            return Err(invalid("ducking", "size must be positive"));
        }
        if !(0.0..=1.0).contains(&self.spacing_threshold) {
            return Err(invalid("spacing_threshold", "must be within [0, 1]"));
        }

        self.ground_obstacle_a.validate("ground_obstacle_a")?;
        self.ground_obstacle_b.validate("ground_obstacle_b")?;
        self.flying_obstacle.validate("flying_obstacle")?;
        self.decoration.validate("decoration")?;
        Ok(())
    }
}
