//! Monotonic tick counter
//!
//! All periodic behavior (scoring, difficulty) keys off this count rather
//! than wall time, so a run replays identically at any frame rate.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    ticks: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick and return the new count (first tick is 1)
    pub fn advance(&mut self) -> u64 {
        self.ticks += 1;
        self.ticks
    }

    /// Ticks elapsed since the run started
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// True on ticks that land on a multiple of `cadence`
    #[inline]
    pub fn on_cadence(&self, cadence: u64) -> bool {
        cadence > 0 && self.ticks > 0 && self.ticks % cadence == 0
    }
}
