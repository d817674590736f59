//! Dino Run - an endless-runner simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, player physics, collisions, scoring)
//! - `tuning`: Data-driven game balance
//! - `runs`: Finished runs of the session (in memory only)
//!
//! Rendering, input polling and audio are left to the host; the host feeds a
//! sampled [`sim::TickInput`] each tick and reads back a [`sim::StateSnapshot`].

pub mod runs;
pub mod sim;
pub mod tuning;

pub use runs::{RunLog, RunRecord};
pub use sim::Simulation;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Reference viewport width (world units)
    pub const WORLD_WIDTH: f32 = 600.0;
    /// Reference viewport height (world units)
    pub const WORLD_HEIGHT: f32 = 150.0;
    /// Smallest viewport dimension accepted; anything below is clamped
    pub const MIN_VIEWPORT_DIM: f32 = 1.0;

    /// Fixed simulation timestep (60 Hz, one host frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Starting scroll speed (negative = leftward, units/s)
    pub const BASE_SPEED: f32 = -200.0;
    /// Vertical velocity set on jump (negative = upward, units/s)
    pub const JUMP_IMPULSE: f32 = -450.0;
    /// Downward acceleration (units/s²)
    pub const GRAVITY: f32 = 1000.0;

    /// Ticks between score increments
    pub const SCORE_CADENCE_TICKS: u64 = 6;
    /// Ticks between speed increases
    pub const DIFFICULTY_CADENCE_TICKS: u64 = 600;
    /// Speed magnitude added on every difficulty step
    pub const SPEED_STEP: f32 = 50.0;
    /// High score shown before any run beats it
    pub const INITIAL_HIGH_SCORE: u64 = 500;

    /// Collidable obstacles may spawn once the previous one is left of this fraction of the width
    pub const SPACING_THRESHOLD: f32 = 0.7;
    /// Ground texture offset per tick is `-speed / GROUND_SCROLL_DIVISOR`
    pub const GROUND_SCROLL_DIVISOR: f32 = 100.0;
}
