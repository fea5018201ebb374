//! Variable-delta simulation tick
//!
//! Core game loop that advances the simulation by one host frame. The order
//! of the steps below is fixed; identical deltas, inputs and random draws
//! always produce identical results.

use serde::{Deserialize, Serialize};

use super::collision::resolve_collisions;
use super::entity::ProjectileOwner;
use super::input::TickInput;
use super::rng::RandomSource;
use super::state::{GameEvent, GameState};

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Points scored this tick
    pub score_delta: u64,
    pub events: Vec<GameEvent>,
}

impl TickReport {
    pub fn is_empty(&self) -> bool {
        self.score_delta == 0 && self.events.is_empty()
    }
}

/// Make a host delta safe to simulate: non-finite or negative becomes 0,
/// anything above `max_ms` is capped
pub fn normalize_delta(delta_ms: f32, max_ms: f32) -> f32 {
    if !delta_ms.is_finite() || delta_ms < 0.0 {
        0.0
    } else {
        delta_ms.min(max_ms)
    }
}

/// Advance the game state by one frame of `delta_ms` milliseconds
///
/// Does nothing unless the state is running, and nothing for a zero delta.
pub fn tick<R: RandomSource>(
    state: &mut GameState<R>,
    input: &TickInput,
    delta_ms: f32,
) -> TickReport {
    let mut report = TickReport::default();
    if !state.is_running() {
        return report;
    }
    let dt = normalize_delta(delta_ms, state.tuning.max_delta_ms);
    if dt == 0.0 {
        return report;
    }
    let events = &mut report.events;

    state.time_ticks += 1;

    // 1. Input
    state.player.move_by(input.direction, dt, &state.tuning);
    if input.fire {
        let shots = state.player.fire();
        if !shots.is_empty() {
            events.push(GameEvent::ShotFired {
                owner: ProjectileOwner::Player,
            });
        }
        for shot in shots {
            state.add_projectile(shot);
        }
    }

    // 2. Advance entities
    state.player.update(dt);
    for p in &mut state.player_projectiles {
        p.update(dt, &state.tuning);
    }
    for p in &mut state.hostile_projectiles {
        p.update(dt, &state.tuning);
    }
    for h in &mut state.hostiles {
        h.update(dt, &state.tuning);
    }
    for p in &mut state.pickups {
        p.update(dt, &state.tuning);
    }

    // 3. Drop what left the playfield (hostiles are handled by collisions)
    let height = state.tuning.playfield_height;
    state.player_projectiles.retain(|p| !p.is_off_screen(height));
    state.hostile_projectiles.retain(|p| !p.is_off_screen(height));
    state.pickups.retain(|p| !p.is_off_screen(height));

    // 4. Collisions
    report.score_delta = resolve_collisions(state, events);
    if state.is_over() {
        return report;
    }

    // 5. Hostile fire
    let mut shots = Vec::new();
    for h in &mut state.hostiles {
        if let Some(shot) = h.maybe_fire(dt, &state.tuning, &mut state.rng) {
            shots.push(shot);
        }
    }
    for shot in shots {
        events.push(GameEvent::ShotFired { owner: shot.owner });
        state.add_projectile(shot);
    }

    // 6. Power-up timers
    for kind in state.power_ups.advance(dt) {
        kind.apply(&mut state.player, false);
        events.push(GameEvent::PowerUpExpired { kind });
    }

    // 7. Spawning and progression
    let outcome = state.spawner.advance(dt, &state.tuning);
    if outcome.spawn {
        state.spawn_hostile();
    }
    if outcome.level_up {
        state.stats.level = state.stats.level.saturating_add(1);
        log::info!(
            "Level {} reached (spawn every {:.0}ms)",
            state.stats.level,
            state.spawner.spawn_threshold_ms
        );
        events.push(GameEvent::LevelUp {
            level: state.stats.level,
        });
    }

    report
}
