//! Time-gated entity spawning
//!
//! Each entity type has its own cooldown gate. The gates are independent:
//! both may fire on the same tick, and neither ever starves the other. Each
//! check is a single timestamp comparison.

use glam::Vec2;
use rand::Rng;

use super::state::{palette_color, Coin, Enemy, World};
use crate::consts::*;

/// Run both spawn gates for this tick
pub fn run_spawn_gates(world: &mut World, now_ms: u64) {
    if now_ms.saturating_sub(world.last_coin_spawn_ms) > COIN_SPAWN_COOLDOWN_MS {
        let y = spawn_y(&mut world.rng, world.screen_height);
        world.coins.push(Coin::new(Vec2::new(world.screen_width, y)));
        world.last_coin_spawn_ms = now_ms;
        log::debug!("coin spawned at y={y:.0}");
    }

    if now_ms.saturating_sub(world.last_enemy_spawn_ms) > ENEMY_SPAWN_COOLDOWN_MS {
        let y = spawn_y(&mut world.rng, world.screen_height);
        let radius = world.rng.random_range(ENEMY_RADIUS_MIN..ENEMY_RADIUS_MAX);
        let speed = world.rng.random_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX);
        let color = palette_color(&mut world.rng);
        world.enemies.push(Enemy::new(
            Vec2::new(world.screen_width, y),
            radius,
            speed,
            color,
            now_ms,
        ));
        world.last_enemy_spawn_ms = now_ms;
        log::debug!("enemy spawned at y={y:.0} r={radius:.0} v={speed:.1}");
    }
}

/// Pick a spawn height inside the vertical margins.
///
/// Screens too short for the full 100-unit margins get a clamped band around
/// mid-height instead of a panic or an inverted range.
fn spawn_y<R: Rng>(rng: &mut R, screen_height: f32) -> f32 {
    let lo = SPAWN_MARGIN.min(screen_height / 2.0);
    let hi = (screen_height - SPAWN_MARGIN).max(lo + 1.0);
    rng.random_range(lo..hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_coin_gate_cadence() {
        let mut world = World::new(1, 1000.0, 800.0);
        // 16 ms ticks for 10 seconds: coins at ~2s, ~4s, ~6s, ~8s
        for now in (0..=10_000u64).step_by(16) {
            run_spawn_gates(&mut world, now);
        }
        assert_eq!(world.coins.len(), 4);
        assert_eq!(world.enemies.len(), 3);
    }

    #[test]
    fn test_gates_fire_independently() {
        let mut world = World::new(2, 1000.0, 800.0);
        // 6000 ms is past both cooldowns: both gates open on the same call
        run_spawn_gates(&mut world, 6001);
        assert_eq!(world.coins.len(), 1);
        assert_eq!(world.enemies.len(), 1);
    }

    #[test]
    fn test_no_double_spawn_within_cooldown() {
        let mut world = World::new(3, 1000.0, 800.0);
        run_spawn_gates(&mut world, 2001);
        run_spawn_gates(&mut world, 2002);
        run_spawn_gates(&mut world, 4000);
        assert_eq!(world.coins.len(), 1);
    }

    #[test]
    fn test_spawn_positions_and_parameters() {
        let mut world = World::new(4, 1000.0, 800.0);
        for now in (0..=60_000u64).step_by(16) {
            run_spawn_gates(&mut world, now);
            // Drain so the vectors stay small but parameters get sampled
            for coin in world.coins.drain(..) {
                assert_eq!(coin.pos.x, 1000.0);
                assert!(coin.pos.y >= 100.0 && coin.pos.y < 700.0);
                assert_eq!(coin.radius, COIN_RADIUS);
            }
            for enemy in world.enemies.drain(..) {
                assert_eq!(enemy.pos.x, 1000.0);
                assert!(enemy.pos.y >= 100.0 && enemy.pos.y < 700.0);
                assert!(enemy.radius >= ENEMY_RADIUS_MIN && enemy.radius < ENEMY_RADIUS_MAX);
                assert!(enemy.speed >= ENEMY_SPEED_MIN && enemy.speed < ENEMY_SPEED_MAX);
            }
        }
    }

    #[test]
    fn test_spawn_band_clamps_on_tiny_screen() {
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..100 {
            let y = spawn_y(&mut rng, 120.0);
            assert!(y >= 0.0 && y <= 120.0);
        }
    }
}
