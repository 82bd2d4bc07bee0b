//! Projectiles

use glam::Vec2;

use super::entity::{Body, Entity, EntityId, FrameContext};
use crate::consts::*;
use crate::renderer::{AssetSource, Color, GradientStop, Sprite, Surface};

/// Who fired the projectile; fixes its speed and travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Player,
    Enemy,
}

impl Owner {
    /// Travel speed (units per second)
    pub fn speed(self) -> f32 {
        match self {
            Owner::Player => PLAYER_BULLET_SPEED,
            Owner::Enemy => ENEMY_BULLET_SPEED,
        }
    }

    /// Unit travel direction (y grows downward)
    pub fn direction(self) -> Vec2 {
        match self {
            Owner::Player => Vec2::NEG_Y,
            Owner::Enemy => Vec2::Y,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Bullet {
    pub body: Body,
    pub owner: Owner,
}

impl Bullet {
    pub fn new(id: EntityId, x: f32, y: f32, owner: Owner) -> Self {
        Self {
            body: Body::new(id, x, y, BULLET_WIDTH, BULLET_HEIGHT),
            owner,
        }
    }

    pub fn is_player_owned(&self) -> bool {
        self.owner == Owner::Player
    }

    pub fn velocity(&self) -> Vec2 {
        self.owner.direction() * self.owner.speed()
    }

    fn render_fallback(&self, surface: &mut dyn Surface) {
        let r = self.body.rect;
        match self.owner {
            Owner::Player => {
                surface.fill_gradient(
                    r,
                    &[
                        GradientStop::new(0.0, Color::ROYAL_BLUE),
                        GradientStop::new(0.5, Color::WHITE),
                        GradientStop::new(1.0, Color::CRIMSON),
                    ],
                );
                surface.stroke_rect(r, Color::WHITE, 1.0);
            }
            Owner::Enemy => {
                surface.fill_rect(r, Color::DARK_RED);
                surface.stroke_rect(r, Color::RED, 1.0);
            }
        }
    }
}

impl Entity for Bullet {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, ctx: &FrameContext) {
        self.body.rect.pos += self.velocity() * ctx.dt_secs();

        let gone = match self.owner {
            Owner::Player => self.body.rect.bottom() < 0.0,
            Owner::Enemy => self.body.rect.top() > ctx.playfield.y,
        };
        if gone {
            self.destroy();
        }
    }

    fn render(&self, surface: &mut dyn Surface, assets: &dyn AssetSource) {
        // Only the player's shots have a sprite
        let sprite = match self.owner {
            Owner::Player => assets.image(Sprite::Bullet),
            Owner::Enemy => None,
        };
        match sprite {
            Some(image) => surface.draw_image(image, self.body.rect),
            None => self.render_fallback(surface),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_bullets_are_faster() {
        assert!(Owner::Player.speed() > Owner::Enemy.speed());
        assert_eq!(Owner::Player.speed(), 500.0);
        assert_eq!(Owner::Enemy.speed(), 200.0);
    }

    #[test]
    fn test_travel_directions() {
        let mut up = Bullet::new(EntityId(1), 100.0, 300.0, Owner::Player);
        let mut down = Bullet::new(EntityId(2), 100.0, 300.0, Owner::Enemy);
        let ctx = FrameContext::new(100.0, 100.0);
        up.update(&ctx);
        down.update(&ctx);
        assert!((up.body.rect.pos.y - 250.0).abs() < 1e-3);
        assert!((down.body.rect.pos.y - 320.0).abs() < 1e-3);
    }

    #[test]
    fn test_player_bullet_leaves_top() {
        let mut b = Bullet::new(EntityId(1), 100.0, -10.0, Owner::Player);
        b.update(&FrameContext::new(1.0, 1.0));
        assert!(b.is_active(), "still partially visible");
        b.update(&FrameContext::new(16.0, 17.0));
        assert!(!b.is_active());
    }

    #[test]
    fn test_enemy_bullet_leaves_bottom() {
        let mut b = Bullet::new(EntityId(1), 100.0, PLAYFIELD_HEIGHT - 1.0, Owner::Enemy);
        b.update(&FrameContext::new(16.0, 16.0));
        assert!(!b.is_active());
    }
}
