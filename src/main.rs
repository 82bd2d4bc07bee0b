//! Eagle Strike entry point
//!
//! Native builds run a headless demo: the autopilot plays one run against a
//! recording surface and the outcome is logged. Browser hosts embed the library
//! and drive `GameSession` from their own frame callback.

#[cfg(not(target_arch = "wasm32"))]
use eagle_strike::{
    GameSession, QualityPreset, Settings, renderer::RecordingSurface, sim::EngineError,
};

/// Longest simulated demo run
#[cfg(not(target_arch = "wasm32"))]
const DEMO_LIMIT_MS: f64 = 5.0 * 60.0 * 1000.0;

#[cfg(not(target_arch = "wasm32"))]
const FRAME_MS: f64 = 1000.0 / 60.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Eagle Strike (headless) starting...");

    if let Err(e) = run_demo() {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo() -> Result<(), EngineError> {
    use eagle_strike::sim::{FrameEvent, autopilot};

    let mut settings = match std::env::var("EAGLE_STRIKE_SETTINGS") {
        Ok(path) => Settings::load_or_default(path),
        Err(_) => Settings::default(),
    };
    if let Ok(name) = std::env::var("EAGLE_STRIKE_QUALITY") {
        match name.parse::<QualityPreset>() {
            Ok(quality) => settings.quality = quality,
            Err(e) => log::warn!("Ignoring EAGLE_STRIKE_QUALITY: {}", e),
        }
    }
    let seed = std::env::var("EAGLE_STRIKE_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    log::info!("Quality {}, seed {}", settings.quality, seed);

    let mut session = GameSession::new(RecordingSurface::new(), settings, seed);
    session.start_game()?;

    let mut kills = 0u32;
    let mut breaches = 0u32;
    let mut t = 0.0;
    while session.is_running() && t <= DEMO_LIMIT_MS {
        let input = match session.engine() {
            Some(engine) => autopilot(engine.world()),
            None => break,
        };
        for event in session.frame(t, &input) {
            match event {
                FrameEvent::EnemyDestroyed { .. } => kills += 1,
                FrameEvent::Breach { .. } | FrameEvent::PlayerHit { .. } => breaches += 1,
                _ => {}
            }
        }
        t += FRAME_MS;
    }
    session.quit();

    let frames = session.engine().map_or(0, |e| e.surface().frames());
    if let Some(stats) = session.stats() {
        log::info!(
            "Demo finished after {:.1}s ({} frames): score {}, best {}, lives {}, {} kills, {} lives lost",
            t / 1000.0,
            frames,
            stats.score,
            stats.high_score,
            stats.lives,
            kills,
            breaches
        );
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive the library directly
}
