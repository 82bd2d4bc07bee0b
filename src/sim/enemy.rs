//! Descending adversaries
//!
//! Enemies drift down at half their speed while patrolling sideways at full
//! speed. The patrol direction flips on a timer or on touching a wall.

use glam::Vec2;
use rand::Rng;

use super::entity::{Body, Entity, EntityId, FrameContext, Rect};
use crate::consts::*;
use crate::renderer::{AssetSource, Color, Sprite, Surface};

/// Horizontal patrol direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    pub fn sign(self) -> f32 {
        match self {
            Heading::Left => -1.0,
            Heading::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

/// Result of applying damage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    Destroyed,
    Survived,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub body: Body,
    /// Patrol speed (units per second); descent runs at half of it
    pub speed: f32,
    pub heading: Heading,
    pub last_flip_ms: f64,
    pub health: i32,
}

impl Enemy {
    pub fn new(id: EntityId, x: f32, y: f32, speed: f32, heading: Heading, now_ms: f64) -> Self {
        Self {
            body: Body::new(id, x, y, ENEMY_SIZE, ENEMY_SIZE),
            speed,
            heading,
            last_flip_ms: now_ms,
            health: ENEMY_HEALTH,
        }
    }

    /// New enemy just above the top edge with a random speed and heading
    pub fn spawn<R: Rng + ?Sized>(id: EntityId, x: f32, now_ms: f64, rng: &mut R) -> Self {
        let speed = rng.random_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED);
        let heading = if rng.random_bool(0.5) {
            Heading::Right
        } else {
            Heading::Left
        };
        Self::new(id, x, -ENEMY_SIZE, speed, heading, now_ms)
    }

    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        self.health -= amount;
        if self.health <= 0 {
            self.destroy();
            DamageOutcome::Destroyed
        } else {
            DamageOutcome::Survived
        }
    }

    pub fn point_value(&self) -> u64 {
        ENEMY_POINTS
    }

    fn render_fallback(&self, surface: &mut dyn Surface) {
        let r = self.body.rect;
        let (x, y, w, h) = (r.pos.x, r.pos.y, r.size.x, r.size.y);
        surface.fill_rect(r, Color::DARK_RED);
        surface.fill_rect(r.inset(4.0), Color::from_hex(0x2F1B14));

        // Eyes with white pupils
        let eyes = [Vec2::new(x + 8.0, y + 10.0), Vec2::new(x + w - 8.0, y + 10.0)];
        for eye in eyes {
            surface.fill_circle(eye, 3.0, Color::RED);
        }
        for eye in eyes {
            surface.fill_circle(eye, 1.0, Color::WHITE);
        }

        // Weapon ports
        surface.fill_rect(Rect::new(x + 4.0, y + h - 6.0, 4.0, 4.0), Color::ORANGE_RED);
        surface.fill_rect(Rect::new(x + w - 8.0, y + h - 6.0, 4.0, 4.0), Color::ORANGE_RED);
    }
}

impl Entity for Enemy {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, ctx: &FrameContext) {
        let dt = ctx.dt_secs();
        self.body.rect.pos.y += self.speed * 0.5 * dt;

        if ctx.now_ms - self.last_flip_ms > ENEMY_FLIP_INTERVAL_MS {
            self.heading = self.heading.flipped();
            self.last_flip_ms = ctx.now_ms;
        }

        self.body.rect.pos.x += self.heading.sign() * self.speed * dt;

        // Bounce off the side walls
        let max_x = ctx.playfield.x - self.body.rect.size.x;
        let x = self.body.rect.pos.x;
        if x <= 0.0 || x >= max_x {
            self.heading = self.heading.flipped();
            self.body.rect.pos.x = x.clamp(0.0, max_x);
        }
        debug_assert!((0.0..=max_x).contains(&self.body.rect.pos.x));

        if self.body.rect.pos.y > ctx.playfield.y {
            self.destroy();
        }
    }

    fn render(&self, surface: &mut dyn Surface, assets: &dyn AssetSource) {
        match assets.image(Sprite::Enemy) {
            Some(image) => surface.draw_image(image, self.body.rect),
            None => self.render_fallback(surface),
        }
        surface.stroke_rect(self.body.rect.inset(-1.0), Color::RED, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn enemy(x: f32, heading: Heading) -> Enemy {
        Enemy::new(EntityId(1), x, 100.0, 100.0, heading, 0.0)
    }

    #[test]
    fn test_descends_at_half_speed() {
        let mut e = enemy(300.0, Heading::Right);
        e.update(&FrameContext::new(1000.0, 1000.0));
        assert!((e.body.rect.pos.y - 150.0).abs() < 1e-3);
        assert!((e.body.rect.pos.x - 400.0).abs() < 1e-3);
    }

    #[test]
    fn test_timer_flip() {
        let mut e = enemy(300.0, Heading::Right);
        e.update(&FrameContext::new(16.0, 2000.0));
        assert_eq!(e.heading, Heading::Right, "flip requires strictly more than the interval");
        e.update(&FrameContext::new(16.0, 2016.0));
        assert_eq!(e.heading, Heading::Left);
        assert_eq!(e.last_flip_ms, 2016.0);
    }

    #[test]
    fn test_wall_flip_clamps_same_frame() {
        let mut e = enemy(2.0, Heading::Left);
        e.update(&FrameContext::new(100.0, 100.0));
        assert_eq!(e.body.rect.pos.x, 0.0);
        assert_eq!(e.heading, Heading::Right);

        let max_x = PLAYFIELD_WIDTH - ENEMY_SIZE;
        let mut e = enemy(max_x - 1.0, Heading::Right);
        e.update(&FrameContext::new(100.0, 100.0));
        assert_eq!(e.body.rect.pos.x, max_x);
        assert_eq!(e.heading, Heading::Left);
    }

    #[test]
    fn test_deactivates_below_playfield() {
        let mut e = enemy(300.0, Heading::Right);
        e.body.rect.pos.y = PLAYFIELD_HEIGHT - 1.0;
        e.update(&FrameContext::new(100.0, 100.0));
        assert!(!e.is_active());
    }

    #[test]
    fn test_take_damage() {
        let mut e = enemy(300.0, Heading::Right);
        e.health = 2;
        assert_eq!(e.take_damage(1), DamageOutcome::Survived);
        assert!(e.is_active());
        assert_eq!(e.take_damage(1), DamageOutcome::Destroyed);
        assert!(!e.is_active());
        assert_eq!(e.point_value(), 100);
    }

    #[test]
    fn test_spawn_draws_speed_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for i in 0..200 {
            let e = Enemy::spawn(EntityId(i), 10.0, 0.0, &mut rng);
            assert!((ENEMY_MIN_SPEED..ENEMY_MAX_SPEED).contains(&e.speed));
            assert_eq!(e.body.rect.pos.y, -ENEMY_SIZE);
            assert_eq!(e.health, 1);
        }
    }

    proptest! {
        #[test]
        fn prop_stays_within_walls(
            x in 0.0f32..768.0,
            speed in 50.0f32..150.0,
            right in any::<bool>(),
            steps in prop::collection::vec(1.0f32..200.0, 1..60),
        ) {
            let heading = if right { Heading::Right } else { Heading::Left };
            let mut e = Enemy::new(EntityId(1), x, 0.0, speed, heading, 0.0);
            let mut now = 0.0f64;
            for dt in steps {
                now += dt as f64;
                e.update(&FrameContext::new(dt, now));
                let pos = e.body.rect.pos.x;
                prop_assert!((0.0..=PLAYFIELD_WIDTH - ENEMY_SIZE).contains(&pos));
                // Touching a wall turns the enemy back inward on the same frame
                if pos == 0.0 {
                    prop_assert_eq!(e.heading, Heading::Right);
                }
                if pos == PLAYFIELD_WIDTH - ENEMY_SIZE {
                    prop_assert_eq!(e.heading, Heading::Left);
                }
            }
        }
    }
}
