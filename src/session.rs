//! Host-side orchestration across runs
//!
//! A run is one engine from first spawn to game over. Starting again hands the
//! surface and collaborators to a fresh engine; the best score carries over.

use crate::audio::AudioManager;
use crate::input::ControlState;
use crate::phase::{Phase, PhaseMachine};
use crate::renderer::{AssetCache, Surface};
use crate::settings::Settings;
use crate::sim::{Engine, EngineBuilder, EngineError, EngineParts, FrameClock, FrameEvent};
use crate::stats::{GameStats, StatsSnapshot};

enum Slot<S> {
    /// Title or game-over screen
    Parked(EngineParts<S>),
    Active(Engine<S>),
}

pub struct GameSession<S> {
    slot: Option<Slot<S>>,
    clock: FrameClock,
    seed: u64,
    runs: u64,
}

impl<S: Surface> GameSession<S> {
    /// Session on the title screen with the stock collaborators
    pub fn new(surface: S, settings: Settings, seed: u64) -> Self {
        let parts = EngineParts {
            surface,
            stats: Box::new(GameStats::default()),
            phase: Box::new(PhaseMachine::new()),
            audio: Box::new(AudioManager::from_settings(&settings)),
            assets: AssetCache::new(),
            settings,
        };
        Self::from_parts(parts, seed)
    }

    pub fn from_parts(parts: EngineParts<S>, seed: u64) -> Self {
        Self {
            slot: Some(Slot::Parked(parts)),
            clock: FrameClock::new(),
            seed,
            runs: 0,
        }
    }

    /// Begin a run from the title or game-over screen. No-op while a run is
    /// in progress.
    pub fn start_game(&mut self) -> Result<(), EngineError> {
        let mut parts = match self.slot.take() {
            Some(Slot::Active(engine)) if engine.is_running() => {
                self.slot = Some(Slot::Active(engine));
                return Ok(());
            }
            Some(Slot::Active(engine)) => engine.into_parts(),
            Some(Slot::Parked(parts)) => parts,
            None => return Err(EngineError::SurfaceUnavailable),
        };

        match parts.phase.phase() {
            Phase::Ready => parts.phase.start(),
            Phase::Ended => {
                parts.phase.restart();
                parts.phase.start();
            }
            Phase::Playing => {}
        }
        parts.stats.reset_score();

        // Every run gets its own stream, reproducible from the session seed
        let seed = self.seed.wrapping_add(self.runs);
        let mut engine = match EngineBuilder::from_parts(parts).seed(seed).try_build() {
            Ok(engine) => engine,
            Err((e, builder)) => {
                log::warn!("Could not start a run: {}", e);
                self.slot = builder.into_parts().map(Slot::Parked);
                return Err(e);
            }
        };
        if let Err(e) = engine.start() {
            self.slot = Some(Slot::Parked(engine.into_parts()));
            return Err(e);
        }
        self.runs += 1;
        self.clock.reset();
        log::info!("Run {} started", self.runs);
        self.slot = Some(Slot::Active(engine));
        Ok(())
    }

    /// Drive one host frame. `host_time_ms` is the host's monotonic frame
    /// timestamp; the delta is derived and clamped here.
    pub fn frame(&mut self, host_time_ms: f64, input: &ControlState) -> Vec<FrameEvent> {
        let Some(Slot::Active(engine)) = self.slot.as_mut() else {
            return Vec::new();
        };
        let dt_ms = self.clock.tick(host_time_ms);
        engine.advance_frame(dt_ms, input)
    }

    /// Abandon the current run (host teardown)
    pub fn quit(&mut self) {
        if let Some(Slot::Active(engine)) = self.slot.as_mut() {
            engine.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(&self.slot, Some(Slot::Active(engine)) if engine.is_running())
    }

    pub fn engine(&self) -> Option<&Engine<S>> {
        match &self.slot {
            Some(Slot::Active(engine)) => Some(engine),
            _ => None,
        }
    }

    /// Assets are reported through here before the first run as well
    pub fn assets_mut(&mut self) -> Option<&mut AssetCache> {
        match self.slot.as_mut()? {
            Slot::Active(engine) => Some(engine.assets_mut()),
            Slot::Parked(parts) => Some(&mut parts.assets),
        }
    }

    pub fn phase(&self) -> Option<Phase> {
        match self.slot.as_ref()? {
            Slot::Active(engine) => Some(engine.phase().phase()),
            Slot::Parked(parts) => Some(parts.phase.phase()),
        }
    }

    pub fn stats(&self) -> Option<StatsSnapshot> {
        match self.slot.as_ref()? {
            Slot::Active(engine) => Some(engine.stats().snapshot()),
            Slot::Parked(parts) => Some(parts.stats.snapshot()),
        }
    }

    /// Completed or in-progress runs so far
    pub fn runs(&self) -> u64 {
        self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::UnreadySurface;
    use crate::renderer::{ImageHandle, LoadState, RecordingSurface, Sprite};
    use crate::stats::STARTING_LIVES;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn session() -> GameSession<RecordingSurface> {
        GameSession::new(RecordingSurface::new(), Settings::default(), 7)
    }

    /// Idle input until the enemies wear down all lives
    fn play_to_game_over(session: &mut GameSession<RecordingSurface>) -> f64 {
        let mut t = 0.0;
        for _ in 0..200_000 {
            t += FRAME_MS;
            session.frame(t, &ControlState::default());
            if !session.is_running() {
                break;
            }
        }
        t
    }

    #[test]
    fn test_title_screen_runs_no_frames() {
        let mut s = session();
        assert_eq!(s.phase(), Some(Phase::Ready));
        assert!(s.frame(16.0, &ControlState::default()).is_empty());
        assert!(s.engine().is_none());
    }

    #[test]
    fn test_start_enters_playing() {
        let mut s = session();
        s.start_game().unwrap();
        assert_eq!(s.phase(), Some(Phase::Playing));
        assert!(s.is_running());

        // First host frame only primes the clock
        s.frame(1000.0, &ControlState::default());
        assert_eq!(s.engine().map(|e| e.now_ms()), Some(0.0));
        s.frame(1016.0, &ControlState::default());
        assert_eq!(s.engine().map(|e| e.now_ms()), Some(16.0));

        // Starting again mid-run changes nothing
        s.start_game().unwrap();
        assert_eq!(s.runs(), 1);
    }

    #[test]
    fn test_game_over_then_restart() {
        let mut s = session();
        s.start_game().unwrap();
        play_to_game_over(&mut s);

        assert!(!s.is_running());
        assert_eq!(s.phase(), Some(Phase::Ended));
        assert_eq!(s.stats().map(|st| st.lives), Some(0));

        s.start_game().unwrap();
        assert_eq!(s.runs(), 2);
        assert_eq!(s.phase(), Some(Phase::Playing));
        let stats = s.stats().unwrap();
        assert_eq!(stats.lives, STARTING_LIVES);
        assert_eq!(stats.score, 0);
        // Fresh world: only the player
        assert!(s.engine().unwrap().world().enemies.is_empty());
    }

    #[test]
    fn test_failed_start_can_be_retried() {
        let surface = UnreadySurface {
            failures: 1,
            ..Default::default()
        };
        let mut s = GameSession::new(surface, Settings::default(), 7);
        assert!(matches!(s.start_game(), Err(EngineError::Surface(_))));
        assert!(!s.is_running());
        assert_eq!(s.runs(), 0);

        s.start_game().unwrap();
        assert!(s.is_running());
        assert_eq!(s.phase(), Some(Phase::Playing));
        assert_eq!(s.runs(), 1);
    }

    #[test]
    fn test_quit_stops_the_run() {
        let mut s = session();
        s.start_game().unwrap();
        s.frame(0.0, &ControlState::default());
        s.quit();
        assert!(!s.is_running());
        assert!(s.frame(16.0, &ControlState::default()).is_empty());
        assert_eq!(s.phase(), Some(Phase::Playing));
    }

    #[test]
    fn test_assets_survive_restart() {
        let mut s = session();
        if let Some(assets) = s.assets_mut() {
            assets.mark_loaded(Sprite::Player, ImageHandle(3));
        }
        s.start_game().unwrap();
        play_to_game_over(&mut s);
        s.start_game().unwrap();
        let state = s.engine().unwrap().assets().state(Sprite::Player);
        assert_eq!(state, LoadState::Loaded(ImageHandle(3)));
    }
}
