//! The player's ship

use glam::Vec2;

use super::entity::{Body, Entity, EntityId, FrameContext, Rect};
use crate::consts::*;
use crate::renderer::{AssetSource, Color, Sprite, Surface};

/// Horizontally bounded, fire-rate limited player entity
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    /// Horizontal speed (units per second)
    pub speed: f32,
    /// Simulation time of the last shot; `None` until the first shot
    pub last_shot_ms: Option<f64>,
    pub fire_cooldown_ms: f64,
}

impl Player {
    pub fn new(id: EntityId, x: f32, y: f32) -> Self {
        let mut player = Self {
            body: Body::new(id, x, y, PLAYER_SIZE, PLAYER_SIZE),
            speed: PLAYER_SPEED,
            last_shot_ms: None,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,
        };
        player.clamp_x(PLAYFIELD_WIDTH);
        player
    }

    pub fn move_left(&mut self, dt_ms: f32, playfield_width: f32) {
        self.body.rect.pos.x -= self.speed * dt_ms / 1000.0;
        self.clamp_x(playfield_width);
    }

    pub fn move_right(&mut self, dt_ms: f32, playfield_width: f32) {
        self.body.rect.pos.x += self.speed * dt_ms / 1000.0;
        self.clamp_x(playfield_width);
    }

    /// Ready when the cooldown has elapsed since the last shot
    pub fn can_fire(&self, now_ms: f64) -> bool {
        match self.last_shot_ms {
            None => true,
            Some(last) => now_ms - last >= self.fire_cooldown_ms,
        }
    }

    pub fn fire(&mut self, now_ms: f64) {
        self.last_shot_ms = Some(now_ms);
    }

    /// Muzzle point: horizontal center of the top edge
    pub fn shoot_origin(&self) -> Vec2 {
        let r = self.body.rect;
        Vec2::new(r.pos.x + r.size.x / 2.0, r.pos.y)
    }

    fn clamp_x(&mut self, playfield_width: f32) {
        let max_x = (playfield_width - self.body.rect.size.x).max(0.0);
        self.body.rect.pos.x = self.body.rect.pos.x.clamp(0.0, max_x);
    }

    fn render_fallback(&self, surface: &mut dyn Surface) {
        let r = self.body.rect;
        let (x, y, w) = (r.pos.x, r.pos.y, r.size.x);
        surface.fill_rect(r, Color::SADDLE_BROWN);

        // Striped banner across the body
        surface.fill_rect(Rect::new(x + 8.0, y + 20.0, w - 16.0, 8.0), Color::RED);
        surface.fill_rect(Rect::new(x + 8.0, y + 22.0, w - 16.0, 4.0), Color::WHITE);
        surface.fill_rect(Rect::new(x + 8.0, y + 20.0, 12.0, 8.0), Color::BLUE);

        // Eye
        surface.fill_circle(Vec2::new(x + w / 2.0 - 4.0, y + 12.0), 2.0, Color::BLACK);

        // Beak
        surface.fill_path(
            &[
                Vec2::new(x + w / 2.0, y + 8.0),
                Vec2::new(x + w / 2.0 + 6.0, y + 12.0),
                Vec2::new(x + w / 2.0, y + 16.0),
            ],
            Color::GOLD,
        );
    }
}

impl Entity for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Movement is input driven; update only enforces the horizontal bounds
    fn update(&mut self, ctx: &FrameContext) {
        self.clamp_x(ctx.playfield.x);
        debug_assert!(self.body.rect.pos.x >= 0.0, "player left the playfield");
    }

    fn render(&self, surface: &mut dyn Surface, assets: &dyn AssetSource) {
        match assets.image(Sprite::Player) {
            Some(image) => surface.draw_image(image, self.body.rect),
            None => self.render_fallback(surface),
        }
        surface.stroke_rect(self.body.rect.inset(-1.0), Color::WHITE, 1.0);
    }
}
