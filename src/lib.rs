//! Eagle Strike - a 2D arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Entities, spawn cadence, collision resolution and the frame engine
//! - `renderer`: Drawing surface contract, asset cache and background fallback
//! - `stats`, `phase`, `audio`, `input`: Collaborators injected into the engine
//! - `session`: Host orchestration (start, game over, restart)
//! - `settings`: Player preferences loaded from JSON

pub mod audio;
pub mod input;
pub mod phase;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod stats;

pub use session::GameSession;
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Logical playfield resolution
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 48.0;
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_START_Y: f32 = 500.0;
    /// Horizontal speed (units per second)
    pub const PLAYER_SPEED: f32 = 300.0;
    /// Minimum time between shots (ms)
    pub const FIRE_COOLDOWN_MS: f64 = 250.0;

    /// Adversary defaults
    pub const ENEMY_SIZE: f32 = 32.0;
    pub const ENEMY_MIN_SPEED: f32 = 50.0;
    pub const ENEMY_MAX_SPEED: f32 = 150.0;
    /// Patrol direction flips at least this often (ms)
    pub const ENEMY_FLIP_INTERVAL_MS: f64 = 2000.0;
    pub const ENEMY_HEALTH: i32 = 1;
    pub const ENEMY_POINTS: u64 = 100;

    /// Projectile defaults
    pub const BULLET_WIDTH: f32 = 8.0;
    pub const BULLET_HEIGHT: f32 = 16.0;
    pub const PLAYER_BULLET_SPEED: f32 = 500.0;
    pub const ENEMY_BULLET_SPEED: f32 = 200.0;

    /// Particle physics
    pub const PARTICLE_SIZE: f32 = 2.0;
    pub const PARTICLE_LIFETIME_MS: f32 = 1000.0;
    /// Initial velocity per axis is uniform in [-MAX, MAX)
    pub const PARTICLE_MAX_SPEED: f32 = 100.0;
    /// Downward acceleration (units/s²)
    pub const PARTICLE_GRAVITY: f32 = 100.0;
    /// Per-frame velocity damping
    pub const PARTICLE_DAMPING: f32 = 0.98;

    /// Explosion sizes
    pub const KILL_EXPLOSION_PARTICLES: usize = 12;
    pub const BREACH_EXPLOSION_PARTICLES: usize = 15;
    pub const PLAYER_HIT_EXPLOSION_PARTICLES: usize = 20;

    /// Spawn cadence
    pub const BASE_SPAWN_INTERVAL_MS: f64 = 2000.0;
    pub const MIN_SPAWN_INTERVAL_MS: f64 = 500.0;
    /// Interval reduction per full 100 points of score
    pub const SPAWN_INTERVAL_STEP_MS: f64 = 50.0;

    /// Host frame deltas are clamped to this to avoid huge jumps after a stall
    pub const MAX_FRAME_DT_MS: f32 = 100.0;
}
