//! Gameplay simulation
//!
//! Entities, collision passes and the frame engine. Rendering goes through
//! [`crate::renderer::Surface`]; randomness through an injected seeded RNG, so
//! a run is reproducible from its seed and input sequence.

pub mod autopilot;
pub mod bullet;
pub mod clock;
pub mod collision;
pub mod enemy;
pub mod engine;
pub mod entity;
pub mod particle;
pub mod player;
pub mod spawn;

pub use autopilot::autopilot;
pub use bullet::{Bullet, Owner};
pub use clock::FrameClock;
pub use collision::{BULLET_DAMAGE, BulletHit, resolve_bullet_hits, resolve_player_contacts};
pub use enemy::{DamageOutcome, Enemy, Heading};
pub use engine::{
    Engine, EngineBuilder, EngineError, EngineParts, EngineState, FrameEvent, World,
};
pub use entity::{Body, Entity, EntityId, EntityIds, FrameContext, Rect};
pub use particle::{IMPACT_PALETTE, KILL_PALETTE, Particle};
pub use player::Player;
pub use spawn::{SpawnController, spawn_interval_ms};
