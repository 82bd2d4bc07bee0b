//! Collision passes
//!
//! Resolution always runs shots-vs-enemies first, then enemies-vs-player, so an
//! enemy shot down this frame can never also ram the player.

use glam::Vec2;

use super::bullet::Bullet;
use super::enemy::{DamageOutcome, Enemy};
use super::entity::{Entity, EntityId};
use super::player::Player;

/// Damage dealt by one projectile
pub const BULLET_DAMAGE: i32 = 1;

/// A player shot that connected with an enemy
#[derive(Debug, Clone, PartialEq)]
pub struct BulletHit {
    pub bullet: EntityId,
    pub enemy: EntityId,
    /// Enemy center at the moment of impact
    pub center: Vec2,
    pub outcome: DamageOutcome,
    /// Points earned; zero unless the enemy was destroyed
    pub points: u64,
}

/// Each player-owned shot hits at most one enemy: the first overlapping one in
/// creation order. Shot and enemy are both consumed, even when the damage alone
/// would not have been fatal; points only come with a fatal hit.
pub fn resolve_bullet_hits(bullets: &mut [Bullet], enemies: &mut [Enemy]) -> Vec<BulletHit> {
    let mut hits = Vec::new();
    for bullet in bullets.iter_mut() {
        if !bullet.is_active() || !bullet.is_player_owned() {
            continue;
        }
        let Some(enemy) = enemies
            .iter_mut()
            .find(|e| e.is_active() && bullet.collides_with(&**e))
        else {
            continue;
        };

        bullet.destroy();
        let outcome = enemy.take_damage(BULLET_DAMAGE);
        enemy.destroy();
        let points = match outcome {
            DamageOutcome::Destroyed => enemy.point_value(),
            DamageOutcome::Survived => 0,
        };
        hits.push(BulletHit {
            bullet: bullet.id(),
            enemy: enemy.id(),
            center: enemy.center(),
            outcome,
            points,
        });
    }
    hits
}

/// Enemies overlapping the player are consumed; the player never is.
/// Returns the ids of the enemies that made contact.
pub fn resolve_player_contacts(player: &Player, enemies: &mut [Enemy]) -> Vec<EntityId> {
    let mut contacts = Vec::new();
    for enemy in enemies.iter_mut() {
        if enemy.is_active() && enemy.collides_with(player) {
            enemy.destroy();
            contacts.push(enemy.id());
        }
    }
    contacts
}
