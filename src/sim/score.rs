//! Score accrual and difficulty ramp, both driven by the tick clock

use serde::{Deserialize, Serialize};

use super::clock::Clock;

/// What a score update changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub scored: bool,
    /// Set only on the tick the run first beats the previous high score
    pub new_high_score: bool,
}

/// Run score plus the session high score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: u64,
    high_score: u64,
    /// High score as it stood when this run started
    run_start_high: u64,
}

impl ScoreTracker {
    pub fn new(initial_high_score: u64) -> Self {
        Self {
            score: 0,
            high_score: initial_high_score,
            run_start_high: initial_high_score,
        }
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// One point every `cadence` ticks; the high score follows the score up
    pub fn update(&mut self, clock: &Clock, cadence: u64) -> ScoreUpdate {
        if !clock.on_cadence(cadence) {
            return ScoreUpdate::default();
        }

        self.score += 1;
        if self.score >= self.high_score {
            self.high_score = self.score;
        }
        ScoreUpdate {
            scored: true,
            new_high_score: self.run_start_high.checked_add(1) == Some(self.score),
        }
    }

    /// New run: score back to zero, high score kept for the session
    pub fn reset_run(&mut self) {
        self.score = 0;
        self.run_start_high = self.high_score;
    }
}

/// Scroll speed that only ever gets faster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyScaler {
    speed: f32,
}

impl DifficultyScaler {
    pub fn new(base_speed: f32) -> Self {
        Self { speed: base_speed }
    }

    /// Current speed (negative = leftward)
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Every `cadence` ticks push the speed `step` further left; returns the new speed when it changes
    pub fn update(&mut self, clock: &Clock, cadence: u64, step: f32) -> Option<f32> {
        if !clock.on_cadence(cadence) || step <= 0.0 {
            return None;
        }
        self.speed -= step;
        Some(self.speed)
    }
}
