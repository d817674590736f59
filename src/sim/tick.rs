//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Component
//! order within a tick is fixed: clock, spawner, entity motion, player,
//! collision, then score and difficulty.

use serde::{Deserialize, Serialize};

use super::collision::detect_collision;
use super::rng::RandomSource;
use super::spawn::{SpawnContext, spawn_tick};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::GROUND_SCROLL_DIVISOR;

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Up / primary action held
    pub jump: bool,
    /// Down held
    pub duck: bool,
    /// Start a new run (only honored after game over)
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
///
/// Returns the events raised this tick, in the order they happened.
pub fn tick<R: RandomSource>(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Game over absorbs everything except a restart
    if state.phase == GamePhase::GameOver {
        if input.restart {
            reset(state);
            events.push(GameEvent::Restarted { run: state.run });
        }
        return events;
    }

    let now = state.clock.advance();
    let dt = state.tuning.tick_seconds;
    let speed = state.difficulty.speed();

    let ctx = SpawnContext {
        tuning: &state.tuning,
        viewport: state.viewport,
        speed,
    };
    for (id, kind) in spawn_tick(now, &ctx, &mut state.entities, &mut state.spawn, rng) {
        events.push(GameEvent::Spawned { id, kind });
    }

    state.entities.advance(now, dt);
    state.spawn.refresh(&state.entities);
    state.ground_offset -= speed / GROUND_SCROLL_DIVISOR;

    state.player.update(input.jump, input.duck, &state.tuning, dt);

    if let Some(hit) = detect_collision(&state.player.bounds(), &state.entities) {
        state.player.kill();
        state.phase = GamePhase::GameOver;
        state.last_hit = Some(hit);
        let score = state.score.score();
        log::info!(
            "Game over at tick {}: hit {} #{} (score {}, high {})",
            now,
            hit.kind.name(),
            hit.entity_id,
            score,
            state.score.high_score()
        );
        events.push(GameEvent::GameOver { hit, score });
        return events;
    }

    let update = state
        .score
        .update(&state.clock, state.tuning.score_cadence_ticks);
    if update.new_high_score {
        events.push(GameEvent::NewHighScore {
            score: state.score.score(),
        });
    }

    if let Some(speed) = state.difficulty.update(
        &state.clock,
        state.tuning.difficulty_cadence_ticks,
        state.tuning.speed_step,
    ) {
        log::debug!("Speed up at tick {}: {}", now, speed);
        events.push(GameEvent::SpeedUp { speed });
    }

    events
}

/// Reinitialise the run (restart after game over); the session high score survives
pub fn reset(state: &mut GameState) {
    state.reset();
    log::info!(
        "Run {} started (high score {})",
        state.run,
        state.score.high_score()
    );
}
