//! Dino Run headless entry point
//!
//! Runs a session with a simple autopilot and logs what happens:
//!
//! ```text
//! dino-run [seed] [ticks] [tuning.json]
//! RUST_LOG=debug dino-run 42 20000
//! ```

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dino_run::sim::{GameEvent, Simulation, Viewport};
    use dino_run::Tuning;

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42u64);
    let max_ticks = args.next().and_then(|s| s.parse().ok()).unwrap_or(10_000u64);
    let tuning = match args.next() {
        Some(path) => Tuning::load(&path).unwrap_or_else(|e| {
            log::warn!("{e}; falling back to default tuning");
            Tuning::default()
        }),
        None => Tuning::default(),
    };

    log::info!("Dino Run (headless) starting...");
    let mut sim = Simulation::new(seed, tuning, Viewport::default());

    for _ in 0..max_ticks {
        let input = autopilot::decide(sim.state());
        sim.tick(&input);

        for event in sim.events() {
            match event {
                GameEvent::NewHighScore { score } => log::info!("New high score: {score}"),
                GameEvent::GameOver { score, .. } => log::info!("Run over with score {score}"),
                _ => {}
            }
        }
    }

    for record in sim.runs().records() {
        println!(
            "run {:<3} score {:>5} ({} ticks)",
            record.run, record.score, record.ticks
        );
    }
    if let Some(best) = sim.runs().best() {
        println!("Best finished run: #{} with {}", best.run, best.score);
    }
    println!("Session high score: {}", sim.high_score());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm host drives `Simulation` directly
}

/// Reads the obstacle field the way a player would: jump over low things, duck under fliers
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use dino_run::sim::{GameState, Posture, TickInput};

    /// How far ahead (seconds of travel) the autopilot reacts
    const LOOKAHEAD_SECS: f32 = 0.35;

    pub fn decide(state: &GameState) -> TickInput {
        if state.is_game_over() {
            return TickInput {
                restart: true,
                ..Default::default()
            };
        }

        let player = state.player.bounds();
        let reach = player.max.x + state.difficulty.speed().abs() * LOOKAHEAD_SECS;
        let ground = state.player.ground_y();
        let standing_top = ground - state.player.profile_for(Posture::Running).y;
        let ducking_top = ground - state.player.profile_for(Posture::Ducking).y;

        let threat = state
            .entities
            .collidable()
            .map(|e| e.bounds())
            .filter(|b| b.max.x > player.min.x && b.min.x < reach)
            .min_by(|a, b| a.min.x.total_cmp(&b.min.x));

        match threat {
            // Clears a ducking runner but not a standing one
            Some(b) if b.max.y <= ducking_top && b.max.y > standing_top => TickInput {
                duck: true,
                ..Default::default()
            },
            Some(b) if b.max.y > standing_top => TickInput {
                jump: true,
                ..Default::default()
            },
            _ => TickInput::default(),
        }
    }
}
