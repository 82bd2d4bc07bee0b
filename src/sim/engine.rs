//! The frame engine
//!
//! Owns every entity collection plus the injected collaborators, and advances
//! the whole game by one frame per [`Engine::advance_frame`] call:
//!
//! 1. input (move, fire, mute toggle)
//! 2. spawn cadence
//! 3. entity updates, including enemies breaching the player's row
//! 4. collisions: shots vs enemies, then enemies vs player
//! 5. game-over check against fresh lives
//! 6. render back to front: particles, shots, enemies, player

use glam::Vec2;
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;
use thiserror::Error;

use super::bullet::{Bullet, Owner};
use super::collision::{resolve_bullet_hits, resolve_player_contacts};
use super::enemy::Enemy;
use super::entity::{Entity, EntityId, EntityIds, FrameContext};
use super::particle::{IMPACT_PALETTE, KILL_PALETTE, Particle};
use super::player::Player;
use super::spawn::SpawnController;
use crate::audio::{AudioManager, AudioTrigger};
use crate::consts::*;
use crate::input::ControlState;
use crate::phase::{Phase, PhaseController, PhaseMachine};
use crate::renderer::{
    AssetCache, Color, OverlayStats, Surface, SurfaceError, draw_background, draw_overlay,
};
use crate::settings::Settings;
use crate::stats::{GameStats, StatsStore};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no rendering surface was provided")]
    SurfaceUnavailable,
    #[error("rendering surface failed to initialize: {0}")]
    Surface(#[from] SurfaceError),
    #[error("engine can only be built while playing (phase is {0:?})")]
    PhaseNotPlaying(Phase),
    #[error("a stopped engine cannot be restarted; build a new one")]
    AlreadyStopped,
}

/// Loop lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Built, `start` not called yet
    Idle,
    Running,
    /// Halted by `stop` or by game over; terminal
    Stopped,
}

/// Notable things that happened during a frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    EnemySpawned { id: EntityId, x: f32 },
    EnemyDestroyed { id: EntityId, points: u64 },
    /// An enemy reached the player's row
    Breach { id: EntityId },
    /// An enemy rammed the player
    PlayerHit { id: EntityId },
    GameOver { score: u64 },
}

/// Entity collections
#[derive(Debug, Clone)]
pub struct World {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub particles: Vec<Particle>,
}

impl World {
    fn new(ids: &mut EntityIds) -> Self {
        Self {
            player: Player::new(ids.next_id(), PLAYER_START_X, PLAYER_START_Y),
            enemies: Vec::new(),
            bullets: Vec::new(),
            particles: Vec::new(),
        }
    }
}

/// Surface and collaborators, detachable so a fresh engine can reuse them
pub struct EngineParts<S> {
    pub surface: S,
    pub stats: Box<dyn StatsStore>,
    pub phase: Box<dyn PhaseController>,
    pub audio: Box<dyn AudioTrigger>,
    pub assets: AssetCache,
    pub settings: Settings,
}

pub struct EngineBuilder<S> {
    surface: Option<S>,
    stats: Option<Box<dyn StatsStore>>,
    phase: Option<Box<dyn PhaseController>>,
    audio: Option<Box<dyn AudioTrigger>>,
    assets: AssetCache,
    settings: Settings,
    rng: Option<Box<dyn RngCore>>,
    seed: u64,
}

impl<S: Surface> Default for EngineBuilder<S> {
    fn default() -> Self {
        Self {
            surface: None,
            stats: None,
            phase: None,
            audio: None,
            assets: AssetCache::new(),
            settings: Settings::default(),
            rng: None,
            seed: 0,
        }
    }
}

impl<S: Surface> EngineBuilder<S> {
    pub fn from_parts(parts: EngineParts<S>) -> Self {
        Self {
            surface: Some(parts.surface),
            stats: Some(parts.stats),
            phase: Some(parts.phase),
            audio: Some(parts.audio),
            assets: parts.assets,
            settings: parts.settings,
            ..Self::default()
        }
    }

    pub fn surface(mut self, surface: S) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn stats(mut self, stats: impl StatsStore + 'static) -> Self {
        self.stats = Some(Box::new(stats));
        self
    }

    pub fn phase(mut self, phase: impl PhaseController + 'static) -> Self {
        self.phase = Some(Box::new(phase));
        self
    }

    pub fn audio(mut self, audio: impl AudioTrigger + 'static) -> Self {
        self.audio = Some(Box::new(audio));
        self
    }

    pub fn assets(mut self, assets: AssetCache) -> Self {
        self.assets = assets;
        self
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Seed for the default `Pcg32` random source
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the random source entirely
    pub fn rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn build(self) -> Result<Engine<S>, EngineError> {
        self.try_build().map_err(|(e, _)| e)
    }

    /// Like [`EngineBuilder::build`], but a failure hands the builder back so
    /// the surface and collaborators are not lost
    pub fn try_build(mut self) -> Result<Engine<S>, (EngineError, Self)> {
        let Some(mut surface) = self.surface.take() else {
            return Err((EngineError::SurfaceUnavailable, self));
        };
        if let Err(e) = surface.configure(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT) {
            self.surface = Some(surface);
            return Err((e.into(), self));
        }
        if let Some(phase) = self.phase.as_ref().map(|p| p.phase()) {
            if phase != Phase::Playing {
                self.surface = Some(surface);
                return Err((EngineError::PhaseNotPlaying(phase), self));
            }
        }

        let phase = self.phase.unwrap_or_else(|| {
            let mut phase = PhaseMachine::new();
            phase.start();
            Box::new(phase)
        });
        let settings = self.settings;
        let audio = self
            .audio
            .unwrap_or_else(|| Box::new(AudioManager::from_settings(&settings)));
        let stats = self
            .stats
            .unwrap_or_else(|| Box::new(GameStats::default()));
        let rng = self
            .rng
            .unwrap_or_else(|| Box::new(Pcg32::seed_from_u64(self.seed)));

        let mut ids = EntityIds::default();
        let world = World::new(&mut ids);
        log::info!("Engine initialized");

        Ok(Engine {
            state: EngineState::Idle,
            world,
            spawner: SpawnController::new(),
            ids,
            now_ms: 0.0,
            last_dt_ms: 0.0,
            mute_held: false,
            rng,
            surface,
            stats,
            phase,
            audio,
            assets: self.assets,
            settings,
        })
    }

    /// Surface and collaborators, when all of them were supplied
    pub fn into_parts(self) -> Option<EngineParts<S>> {
        Some(EngineParts {
            surface: self.surface?,
            stats: self.stats?,
            phase: self.phase?,
            audio: self.audio?,
            assets: self.assets,
            settings: self.settings,
        })
    }
}

pub struct Engine<S> {
    state: EngineState,
    world: World,
    spawner: SpawnController,
    ids: EntityIds,
    /// Accumulated simulation time (ms)
    now_ms: f64,
    last_dt_ms: f32,
    /// Mute control state on the previous frame, for edge detection
    mute_held: bool,
    rng: Box<dyn RngCore>,
    surface: S,
    stats: Box<dyn StatsStore>,
    phase: Box<dyn PhaseController>,
    audio: Box<dyn AudioTrigger>,
    assets: AssetCache,
    settings: Settings,
}

impl<S: Surface> Engine<S> {
    pub fn builder() -> EngineBuilder<S> {
        EngineBuilder::default()
    }

    pub fn start(&mut self) -> Result<(), EngineError> {
        match self.state {
            EngineState::Idle => {
                self.state = EngineState::Running;
                log::info!("Game loop started");
                Ok(())
            }
            EngineState::Running => Ok(()),
            EngineState::Stopped => Err(EngineError::AlreadyStopped),
        }
    }

    pub fn stop(&mut self) {
        if self.state == EngineState::Running {
            self.state = EngineState::Stopped;
            log::info!("Game loop stopped");
        }
    }

    /// Whether the host should schedule another frame
    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn stats(&self) -> &dyn StatsStore {
        self.stats.as_ref()
    }

    pub fn phase(&self) -> &dyn PhaseController {
        self.phase.as_ref()
    }

    pub fn audio(&self) -> &dyn AudioTrigger {
        self.audio.as_ref()
    }

    pub fn assets(&self) -> &AssetCache {
        &self.assets
    }

    /// The host's loader reports sprite loads here
    pub fn assets_mut(&mut self) -> &mut AssetCache {
        &mut self.assets
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn spawn_interval_ms(&self) -> f64 {
        self.spawner.interval_ms()
    }

    pub fn into_parts(self) -> EngineParts<S> {
        EngineParts {
            surface: self.surface,
            stats: self.stats,
            phase: self.phase,
            audio: self.audio,
            assets: self.assets,
            settings: self.settings,
        }
    }

    /// Run one frame. Does nothing unless the engine is running.
    pub fn advance_frame(&mut self, dt_ms: f32, input: &ControlState) -> Vec<FrameEvent> {
        if !self.is_running() {
            return Vec::new();
        }
        debug_assert!(dt_ms >= 0.0, "negative frame delta");

        self.now_ms += dt_ms as f64;
        self.last_dt_ms = dt_ms;
        let ctx = FrameContext::new(dt_ms, self.now_ms);
        let snapshot = self.stats.snapshot();
        let mut events = Vec::new();

        self.apply_input(&ctx, input);
        self.spawn_enemies(&ctx, snapshot.score, &mut events);
        self.advance_entities(&ctx, &mut events);
        self.resolve_collisions(&mut events);

        // Lives are re-read so a life lost this frame ends the game this frame
        if self.stats.lives() == 0 {
            log::info!("Game over! Lives exhausted. Score: {}", self.stats.score());
            if self.stats.is_new_high_score() {
                log::info!("New high score!");
            }
            events.push(FrameEvent::GameOver {
                score: self.stats.score(),
            });
            self.phase.end();
            self.stop();
        }

        self.render();
        events
    }

    fn apply_input(&mut self, ctx: &FrameContext, input: &ControlState) {
        let width = ctx.playfield.x;
        let player = &mut self.world.player;
        if input.left {
            player.move_left(ctx.dt_ms, width);
        }
        if input.right {
            player.move_right(ctx.dt_ms, width);
        }

        if input.fire && player.can_fire(ctx.now_ms) {
            let origin = player.shoot_origin();
            let bullet = Bullet::new(
                self.ids.next_id(),
                origin.x - BULLET_WIDTH / 2.0,
                origin.y,
                Owner::Player,
            );
            log::trace!("Player shoots {}", bullet.id());
            self.world.bullets.push(bullet);
            player.fire(ctx.now_ms);
        }

        if input.mute_toggle && !self.mute_held {
            self.audio.toggle_mute();
        }
        self.mute_held = input.mute_toggle;
    }

    fn spawn_enemies(&mut self, ctx: &FrameContext, score: u64, events: &mut Vec<FrameEvent>) {
        if !self.spawner.poll(ctx.now_ms, score) {
            return;
        }
        let x = self
            .rng
            .random_range(0.0..=ctx.playfield.x - ENEMY_SIZE);
        let enemy = Enemy::spawn(self.ids.next_id(), x, ctx.now_ms, &mut *self.rng);
        log::debug!("Enemy {} spawned at x: {:.1}", enemy.id(), x);
        events.push(FrameEvent::EnemySpawned { id: enemy.id(), x });
        self.world.enemies.push(enemy);
    }

    fn advance_entities(&mut self, ctx: &FrameContext, events: &mut Vec<FrameEvent>) {
        self.world.player.update(ctx);
        let player_row = self.world.player.rect().top();

        let mut breaches = Vec::new();
        for enemy in &mut self.world.enemies {
            enemy.update(ctx);
            if enemy.rect().bottom() >= player_row {
                enemy.destroy();
                breaches.push((enemy.id(), enemy.center()));
            }
        }
        for (id, center) in breaches {
            self.stats.lose_life();
            self.audio.play_hit();
            self.explode(center, BREACH_EXPLOSION_PARTICLES, &IMPACT_PALETTE);
            log::debug!(
                "Enemy {} reached the player! Lives remaining: {}",
                id,
                self.stats.lives()
            );
            events.push(FrameEvent::Breach { id });
        }
        self.world.enemies.retain(|e| e.is_active());

        for bullet in &mut self.world.bullets {
            bullet.update(ctx);
        }
        self.world.bullets.retain(|b| b.is_active());

        for particle in &mut self.world.particles {
            particle.update(ctx);
        }
        self.world.particles.retain(|p| p.is_active());
    }

    fn resolve_collisions(&mut self, events: &mut Vec<FrameEvent>) {
        let hits = resolve_bullet_hits(&mut self.world.bullets, &mut self.world.enemies);
        for hit in hits {
            if hit.points > 0 {
                self.stats.add_score(hit.points);
            }
            self.explode(hit.center, KILL_EXPLOSION_PARTICLES, &KILL_PALETTE);
            self.audio.play_hit();
            log::debug!(
                "Enemy {} destroyed by {} ({:?})! Score: {}",
                hit.enemy,
                hit.bullet,
                hit.outcome,
                self.stats.score()
            );
            events.push(FrameEvent::EnemyDestroyed {
                id: hit.enemy,
                points: hit.points,
            });
        }

        let contacts = resolve_player_contacts(&self.world.player, &mut self.world.enemies);
        let player_center = self.world.player.center();
        for id in contacts {
            self.stats.lose_life();
            self.explode(player_center, PLAYER_HIT_EXPLOSION_PARTICLES, &IMPACT_PALETTE);
            self.audio.play_hit();
            log::debug!(
                "Player rammed by {}! Lives remaining: {}",
                id,
                self.stats.lives()
            );
            events.push(FrameEvent::PlayerHit { id });
        }

        self.world.bullets.retain(|b| b.is_active());
        self.world.enemies.retain(|e| e.is_active());
    }

    fn explode(&mut self, center: Vec2, count: usize, palette: &[Color]) {
        let burst = Particle::explosion(center, count, palette, &mut self.ids, &mut *self.rng);
        self.world.particles.extend(burst);
    }

    fn render(&mut self) {
        let surface: &mut dyn Surface = &mut self.surface;
        let assets = &self.assets;
        let playfield = Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);

        surface.clear();
        draw_background(surface, assets, playfield, self.settings.quality.star_count());

        for particle in &self.world.particles {
            particle.render(surface, assets);
        }
        for bullet in &self.world.bullets {
            bullet.render(surface, assets);
        }
        for enemy in &self.world.enemies {
            enemy.render(surface, assets);
        }
        self.world.player.render(surface, assets);

        if self.settings.show_debug_overlay {
            let fps = if self.last_dt_ms > 0.0 {
                (1000.0 / self.last_dt_ms).round() as u32
            } else {
                0
            };
            let stats = OverlayStats {
                enemies: self.world.enemies.len(),
                bullets: self.world.bullets.len(),
                particles: self.world.particles.len(),
                fps,
            };
            draw_overlay(surface, &stats, playfield.y);
        }
    }
}
