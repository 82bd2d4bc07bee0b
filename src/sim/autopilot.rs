//! Demo mode: picks controls from the current world, no human required
//!
//! Used by the headless binary and handy for soak tests.

use super::engine::World;
use super::entity::Entity;
use crate::input::ControlState;

/// Horizontal distance at which the player stops steering
const DEAD_ZONE: f32 = 4.0;

/// Fire when the target is within this many units of the muzzle
const FIRE_WINDOW: f32 = 16.0;

/// Controls for the next frame: chase the enemy closest to the player's row
/// and shoot once lined up under it.
pub fn autopilot(world: &World) -> ControlState {
    let mut input = ControlState::default();

    // Most dangerous = lowest on screen
    let Some(target) = world
        .enemies
        .iter()
        .filter(|e| e.is_active())
        .max_by(|a, b| {
            a.rect()
                .bottom()
                .partial_cmp(&b.rect().bottom())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    else {
        return input;
    };

    let offset = target.center().x - world.player.shoot_origin().x;
    if offset < -DEAD_ZONE {
        input.left = true;
    } else if offset > DEAD_ZONE {
        input.right = true;
    }
    input.fire = offset.abs() <= FIRE_WINDOW;
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::enemy::{Enemy, Heading};
    use crate::sim::entity::EntityId;
    use crate::sim::player::Player;

    fn world(enemies: Vec<Enemy>) -> World {
        World {
            player: Player::new(EntityId(1), PLAYER_START_X, PLAYER_START_Y),
            enemies,
            bullets: Vec::new(),
            particles: Vec::new(),
        }
    }

    fn enemy(id: u32, x: f32, y: f32) -> Enemy {
        Enemy::new(EntityId(id), x, y, 100.0, Heading::Left, 0.0)
    }

    #[test]
    fn test_no_enemies_no_input() {
        assert_eq!(autopilot(&world(Vec::new())), ControlState::default());
    }

    #[test]
    fn test_chases_lowest_enemy() {
        let input = autopilot(&world(vec![enemy(2, 700.0, 50.0), enemy(3, 50.0, 300.0)]));
        assert!(input.left);
        assert!(!input.right);
        assert!(!input.fire);
    }

    #[test]
    fn test_fires_when_lined_up() {
        // Enemy center x = 424 = player muzzle x
        let input = autopilot(&world(vec![enemy(2, 408.0, 200.0)]));
        assert!(input.fire);
        assert!(!input.left && !input.right);
    }
}
