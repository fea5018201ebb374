//! Collision detection and resolution
//!
//! Runs once per tick after movement. Categories resolve in a fixed order, and
//! each one marks entities as spent and compacts afterwards, so a removed
//! entity is never seen again in the same pass.

use super::entity::PickupKind;
use super::rng::RandomSource;
use super::state::{GameEvent, GameState, LifeLossCause};

/// Damage a single player projectile deals
const PLAYER_PROJECTILE_DAMAGE: u32 = 1;

/// Resolve every collision category in order, returning points scored
pub fn resolve_collisions<R: RandomSource>(
    state: &mut GameState<R>,
    events: &mut Vec<GameEvent>,
) -> u64 {
    let points = player_projectiles_vs_hostiles(state, events);
    if state.is_over() {
        return points;
    }
    hostile_projectiles_vs_player(state, events);
    if state.is_over() {
        return points;
    }
    pickups_vs_player(state, events);
    hostiles_vs_bottom(state, events);
    points
}

/// Each player projectile damages the first live hostile it overlaps
pub fn player_projectiles_vs_hostiles<R: RandomSource>(
    state: &mut GameState<R>,
    events: &mut Vec<GameEvent>,
) -> u64 {
    let mut spent = vec![false; state.player_projectiles.len()];
    let mut dead = vec![false; state.hostiles.len()];
    let mut drops = Vec::new();
    let mut points: u64 = 0;
    let kill_points = state.tuning.kill_points(state.stats.level);

    for (pi, projectile) in state.player_projectiles.iter().enumerate() {
        let bounds = projectile.bounds();
        let target = state
            .hostiles
            .iter()
            .enumerate()
            .find(|(hi, hostile)| !dead[*hi] && hostile.bounds().intersects(&bounds))
            .map(|(hi, _)| hi);
        let Some(hi) = target else {
            continue;
        };

        spent[pi] = true;
        let hostile = &mut state.hostiles[hi];
        if hostile.apply_damage(PLAYER_PROJECTILE_DAMAGE) {
            dead[hi] = true;
            points = points.saturating_add(kill_points);
            let center = hostile.bounds().center();
            events.push(GameEvent::EnemyDestroyed {
                id: hostile.id,
                points: kill_points,
                x: center.x,
                y: center.y,
            });
            drops.push(center);
        } else {
            events.push(GameEvent::HostileHit {
                id: hostile.id,
                health: hostile.health,
            });
        }
    }

    let mut spent = spent.into_iter();
    state
        .player_projectiles
        .retain(|_| !spent.next().unwrap_or(false));
    let mut dead = dead.into_iter();
    state.hostiles.retain(|_| !dead.next().unwrap_or(false));

    state.stats.score = state.stats.score.saturating_add(points);

    for center in drops {
        if state.rng.chance(state.tuning.pickup_drop_chance) {
            let kind = if state.rng.chance(0.5) {
                PickupKind::Life
            } else {
                PickupKind::DoubleGun
            };
            log::debug!("Dropped {:?} pickup", kind);
            state.spawn_pickup(kind, center);
        }
    }

    points
}

/// Hostile projectiles wear down player health; empty health costs a life
pub fn hostile_projectiles_vs_player<R: RandomSource>(
    state: &mut GameState<R>,
    events: &mut Vec<GameEvent>,
) {
    let player_bounds = state.player.bounds();
    let damage = state.tuning.hostile_projectile_damage;
    let hits: Vec<bool> = state
        .hostile_projectiles
        .iter()
        .map(|p| p.bounds().intersects(&player_bounds))
        .collect();

    for _ in hits.iter().filter(|&&hit| hit) {
        if state.is_over() {
            break;
        }
        state.player.health = state.player.health.saturating_sub(damage);
        events.push(GameEvent::PlayerDamaged {
            damage,
            health: state.player.health,
        });
        if state.player.health == 0 {
            state.player.health = state.player.max_health;
            state.lose_life(LifeLossCause::Shot, events);
        }
    }

    let mut hits = hits.into_iter();
    state
        .hostile_projectiles
        .retain(|_| !hits.next().unwrap_or(false));
}

/// Collect every pickup the player overlaps
pub fn pickups_vs_player<R: RandomSource>(state: &mut GameState<R>, events: &mut Vec<GameEvent>) {
    let player_bounds = state.player.bounds();
    let (collected, remaining): (Vec<_>, Vec<_>) = std::mem::take(&mut state.pickups)
        .into_iter()
        .partition(|p| p.bounds().intersects(&player_bounds));
    state.pickups = remaining;

    for pickup in collected {
        match pickup.kind.power_up() {
            None => state.stats.lives = state.stats.lives.saturating_add(1),
            Some(power_up) => {
                state
                    .power_ups
                    .grant(power_up, power_up.duration_ms(&state.tuning));
                power_up.apply(&mut state.player, state.power_ups.is_active(power_up));
            }
        }
        events.push(GameEvent::PowerUpCollected { kind: pickup.kind });
    }
}

/// Hostiles that slip past the bottom edge each cost a life
pub fn hostiles_vs_bottom<R: RandomSource>(state: &mut GameState<R>, events: &mut Vec<GameEvent>) {
    let height = state.tuning.playfield_height;
    let breached = state
        .hostiles
        .iter()
        .filter(|h| h.is_past_bottom(height))
        .count();
    if breached == 0 {
        return;
    }
    state.hostiles.retain(|h| !h.is_past_bottom(height));
    for _ in 0..breached {
        if state.is_over() {
            break;
        }
        state.lose_life(LifeLossCause::Breach, events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Hostile, ProjectileOwner, ProjectileSpawn};
    use crate::sim::powerup::PowerUpKind;
    use crate::sim::rng::ScriptedRng;
    use crate::sim::state::GamePhase;
    use crate::sim::tuning::Tuning;
    use glam::Vec2;

    /// Running state whose rng never drops pickups
    fn running_state() -> GameState<ScriptedRng> {
        let mut state = GameState::with_tuning(Tuning::default(), ScriptedRng::constant(0.9));
        state.start();
        state
    }

    fn place_hostile(state: &mut GameState<ScriptedRng>, x: f32, y: f32) -> u32 {
        state.spawn_hostile();
        let hostile = state.hostiles.last_mut().expect("just spawned");
        hostile.pos = Vec2::new(x, y);
        hostile.id
    }

    fn fire_at(state: &mut GameState<ScriptedRng>, x: f32, y: f32, owner: ProjectileOwner) {
        state.add_projectile(ProjectileSpawn {
            pos: Vec2::new(x, y),
            vel_y: 0.0,
            owner,
        });
    }

    #[test]
    fn test_projectile_hits_first_hostile_only() {
        let mut state = running_state();
        let first = place_hostile(&mut state, 100.0, 100.0);
        let second = place_hostile(&mut state, 100.0, 100.0);
        fire_at(&mut state, 110.0, 110.0, ProjectileOwner::Player);

        let mut events = Vec::new();
        player_projectiles_vs_hostiles(&mut state, &mut events);

        assert!(state.player_projectiles.is_empty());
        assert_eq!(state.hostiles[0].id, first);
        assert_eq!(state.hostiles[0].health, 2);
        assert_eq!(state.hostiles[1].id, second);
        assert_eq!(state.hostiles[1].health, 3);
        assert_eq!(events, vec![GameEvent::HostileHit { id: first, health: 2 }]);
    }

    #[test]
    fn test_dead_hostile_not_hit_twice_in_pass() {
        let mut state = running_state();
        let id = place_hostile(&mut state, 100.0, 100.0);
        state.hostiles[0].health = 1;
        fire_at(&mut state, 110.0, 110.0, ProjectileOwner::Player);
        fire_at(&mut state, 112.0, 110.0, ProjectileOwner::Player);

        let mut events = Vec::new();
        let points = player_projectiles_vs_hostiles(&mut state, &mut events);

        assert_eq!(points, 10);
        assert_eq!(state.stats.score, 10);
        assert!(state.hostiles.is_empty());
        // The second projectile found nothing alive and keeps flying
        assert_eq!(state.player_projectiles.len(), 1);
        let destroyed = events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyDestroyed { id: d, .. } if *d == id))
            .count();
        assert_eq!(destroyed, 1);
    }

    #[test]
    fn test_kill_scores_by_level_and_drops_pickup() {
        // 0.1 < 0.2 drop chance, 0.1 < 0.5 picks Life
        let mut state = GameState::with_tuning(Tuning::default(), ScriptedRng::constant(0.1));
        state.start();
        state.stats.level = 3;
        state.hostiles.push(Hostile {
            id: 99,
            pos: Vec2::new(200.0, 200.0),
            size: 40.0,
            speed: 1.0,
            health: 1,
            max_health: 5,
            shoot_timer_ms: 0.0,
            shoot_cooldown_ms: 2000.0,
        });
        state.add_projectile(ProjectileSpawn {
            pos: Vec2::new(210.0, 220.0),
            vel_y: -9.0,
            owner: ProjectileOwner::Player,
        });

        let mut events = Vec::new();
        let points = player_projectiles_vs_hostiles(&mut state, &mut events);
        assert_eq!(points, 30);
        assert_eq!(state.pickups.len(), 1);
        assert_eq!(state.pickups[0].kind, PickupKind::Life);
        assert_eq!(state.pickups[0].bounds().center(), Vec2::new(220.0, 220.0));
    }

    #[test]
    fn test_hostile_fire_costs_life_when_health_runs_out() {
        let mut state = running_state();
        state.player.health = 20;
        let p = state.player.pos;
        fire_at(&mut state, p.x + 10.0, p.y + 10.0, ProjectileOwner::Hostile);

        let mut events = Vec::new();
        hostile_projectiles_vs_player(&mut state, &mut events);

        assert!(state.hostile_projectiles.is_empty());
        assert_eq!(state.stats.lives, 2);
        assert_eq!(state.player.health, state.player.max_health);
        assert_eq!(
            events,
            vec![
                GameEvent::PlayerDamaged {
                    damage: 20,
                    health: 0
                },
                GameEvent::LifeLost {
                    lives: 2,
                    cause: LifeLossCause::Shot
                },
            ]
        );
    }

    #[test]
    fn test_missed_hostile_fire_is_kept() {
        let mut state = running_state();
        fire_at(&mut state, 0.0, 0.0, ProjectileOwner::Hostile);
        let mut events = Vec::new();
        hostile_projectiles_vs_player(&mut state, &mut events);
        assert_eq!(state.hostile_projectiles.len(), 1);
        assert!(events.is_empty());
        assert_eq!(state.player.health, 100);
    }

    #[test]
    fn test_pickups_apply_effects() {
        let mut state = running_state();
        let center = state.player.bounds().center();
        state.spawn_pickup(PickupKind::Life, center);
        state.spawn_pickup(PickupKind::DoubleGun, center);
        state.spawn_pickup(PickupKind::Life, Vec2::new(10.0, 10.0));

        let mut events = Vec::new();
        pickups_vs_player(&mut state, &mut events);

        assert_eq!(state.stats.lives, 4);
        assert!(state.player.double_gun);
        assert_eq!(state.power_ups.remaining(PowerUpKind::DoubleGun), 10_000.0);
        assert_eq!(state.pickups.len(), 1);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_zero_length_double_gun_is_not_armed() {
        let tuning = Tuning {
            double_gun_duration_ms: 0.0,
            ..Tuning::default()
        };
        let mut state = GameState::with_tuning(tuning, ScriptedRng::constant(0.9));
        state.start();
        let center = state.player.bounds().center();
        state.spawn_pickup(PickupKind::DoubleGun, center);

        let mut events = Vec::new();
        pickups_vs_player(&mut state, &mut events);
        assert!(!state.power_ups.is_active(PowerUpKind::DoubleGun));
        assert!(!state.player.double_gun);
    }

    #[test]
    fn test_extreme_tuning_saturates() {
        let tuning = Tuning {
            points_per_level: u64::MAX,
            ..Tuning::default()
        };
        let mut state = GameState::with_tuning(tuning, ScriptedRng::constant(0.9));
        state.start();
        state.stats.level = 2;
        state.stats.score = 5;
        state.stats.lives = u32::MAX;
        place_hostile(&mut state, 200.0, 200.0);
        state.hostiles[0].health = 1;
        fire_at(&mut state, 210.0, 210.0, ProjectileOwner::Player);
        let center = state.player.bounds().center();
        state.spawn_pickup(PickupKind::Life, center);

        let mut events = Vec::new();
        let points = resolve_collisions(&mut state, &mut events);
        assert_eq!(points, u64::MAX);
        assert_eq!(state.stats.score, u64::MAX);
        assert_eq!(state.stats.lives, u32::MAX);
    }

    #[test]
    fn test_each_breach_costs_a_life() {
        let mut state = running_state();
        let below = state.tuning.playfield_height + 1.0;
        place_hostile(&mut state, 10.0, below);
        place_hostile(&mut state, 200.0, below);
        place_hostile(&mut state, 300.0, 100.0);

        let mut events = Vec::new();
        hostiles_vs_bottom(&mut state, &mut events);
        assert_eq!(state.stats.lives, 1);
        assert_eq!(state.hostiles.len(), 1);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_breach_on_last_life_ends_run() {
        let mut state = running_state();
        state.stats.lives = 1;
        let below = state.tuning.playfield_height + 1.0;
        place_hostile(&mut state, 10.0, below);
        place_hostile(&mut state, 200.0, below);

        let mut events = Vec::new();
        resolve_collisions(&mut state, &mut events);
        assert_eq!(state.phase, GamePhase::Ended);
        assert_eq!(state.stats.lives, 0);
        let game_overs = events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }
}
