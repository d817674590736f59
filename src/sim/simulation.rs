//! Host-facing driver: owns the state, the random source and the run log

use super::rng::{PcgSource, RandomSource};
use super::state::{GameEvent, GameState, StateSnapshot, Viewport};
use super::tick::{TickInput, reset, tick};
use crate::runs::{RunLog, RunRecord};
use crate::tuning::Tuning;

/// One endless-runner session
///
/// The host calls [`Simulation::tick`] once per frame with the sampled
/// input and draws from the returned snapshot.
#[derive(Debug, Clone)]
pub struct Simulation<R: RandomSource = PcgSource> {
    state: GameState,
    rng: R,
    events: Vec<GameEvent>,
    runs: RunLog,
}

impl Simulation<PcgSource> {
    /// Seeded session with the given tuning
    pub fn new(seed: u64, tuning: Tuning, viewport: Viewport) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self::with_source(PcgSource::new(seed), tuning, viewport)
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<R: RandomSource> Simulation<R> {
    pub fn with_source(rng: R, tuning: Tuning, viewport: Viewport) -> Self {
        Self {
            state: GameState::new(tuning, viewport),
            rng,
            events: Vec::new(),
            runs: RunLog::new(),
        }
    }

    /// Advance one tick and return the new view
    pub fn tick(&mut self, input: &TickInput) -> StateSnapshot {
        self.events = tick(&mut self.state, input, &mut self.rng);

        for event in &self.events {
            if let GameEvent::GameOver { score, .. } = event {
                let record = RunRecord {
                    run: self.state.run,
                    score: *score,
                    ticks: self.state.clock.ticks(),
                };
                log::debug!(
                    "Run {} ended after {} ticks with score {}",
                    record.run,
                    record.ticks,
                    record.score
                );
                self.runs.record(record);
            }
        }

        self.state.snapshot()
    }

    /// Start a new run immediately, whatever the phase
    pub fn reset(&mut self) {
        reset(&mut self.state);
        self.events = vec![GameEvent::Restarted {
            run: self.state.run,
        }];
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }

    /// Events raised by the most recent tick or reset
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn snapshot(&self) -> StateSnapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn score(&self) -> u64 {
        self.state.score.score()
    }

    pub fn high_score(&self) -> u64 {
        self.state.score.high_score()
    }

    /// Runs finished so far this session
    pub fn runs(&self) -> &RunLog {
        &self.runs
    }
}
