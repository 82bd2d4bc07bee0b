//! Explosion particles (visual only, never collide)

use glam::Vec2;
use rand::Rng;

use super::entity::{Body, Entity, EntityIds, FrameContext};
use crate::consts::*;
use crate::renderer::{AssetSource, Color, Surface};

/// Palette for an enemy destroyed by a shot
pub const KILL_PALETTE: [Color; 4] = [Color::RED, Color::ORANGE_RED, Color::GOLD, Color::WHITE];
/// Palette for breaches and contact with the player
pub const IMPACT_PALETTE: [Color; 3] = [Color::RED, Color::ORANGE_RED, Color::GOLD];

#[derive(Debug, Clone)]
pub struct Particle {
    pub body: Body,
    pub vel: Vec2,
    /// Remaining lifetime (ms)
    pub life_ms: f32,
    pub max_life_ms: f32,
    pub color: Color,
}

impl Particle {
    /// `count` particles bursting from `center`, each with its own random velocity and color
    pub fn explosion<R: Rng + ?Sized>(
        center: Vec2,
        count: usize,
        palette: &[Color],
        ids: &mut EntityIds,
        rng: &mut R,
    ) -> Vec<Particle> {
        (0..count)
            .map(|_| {
                let color = if palette.is_empty() {
                    Color::WHITE
                } else {
                    palette[rng.random_range(0..palette.len())]
                };
                let vel = Vec2::new(
                    rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
                    rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
                );
                Particle {
                    body: Body::new(ids.next_id(), center.x, center.y, PARTICLE_SIZE, PARTICLE_SIZE),
                    vel,
                    life_ms: PARTICLE_LIFETIME_MS,
                    max_life_ms: PARTICLE_LIFETIME_MS,
                    color,
                }
            })
            .collect()
    }

    /// Fades linearly from 1 at birth to 0 at expiry
    pub fn alpha(&self) -> f32 {
        (self.life_ms / self.max_life_ms).max(0.0)
    }
}

impl Entity for Particle {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, ctx: &FrameContext) {
        let dt = ctx.dt_secs();
        self.body.rect.pos += self.vel * dt;
        self.life_ms -= ctx.dt_ms;

        // Gravity then drag
        self.vel.y += PARTICLE_GRAVITY * dt;
        self.vel *= PARTICLE_DAMPING;

        if self.life_ms <= 0.0 {
            self.destroy();
        }
    }

    fn render(&self, surface: &mut dyn Surface, _assets: &dyn AssetSource) {
        surface.set_alpha(self.alpha());
        surface.fill_rect(self.body.rect, self.color);
        surface.set_alpha(1.0);
    }
}
