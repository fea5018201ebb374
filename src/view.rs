//! Read-only frame snapshot for renderers and HUDs
//!
//! Built after each tick; holds everything a presentation layer needs to
//! draw the playfield and the score/lives/level/power-up readouts.

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState, PickupKind, PowerUpKind, RandomSource, Rect};

/// What an entity is, for picking a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    PlayerProjectile,
    HostileProjectile,
    Hostile,
    Pickup(PickupKind),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    pub kind: EntityKind,
    pub rect: Rect,
    /// Remaining health fraction (hostiles only, 1.0 otherwise)
    pub health_ratio: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUpView {
    pub kind: PowerUpKind,
    pub remaining_ms: f32,
    /// Tooltip-style label, e.g. "Double Gun (expires in 4.2s)"
    pub label: String,
}

/// Snapshot of one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameView {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub player_health_ratio: f32,
    pub player: Rect,
    pub double_gun: bool,
    /// Draw order: projectiles, hostiles, pickups
    pub entities: Vec<EntityView>,
    pub power_ups: Vec<PowerUpView>,
}

impl FrameView {
    pub fn capture<R: RandomSource>(state: &GameState<R>) -> Self {
        let mut entities = Vec::with_capacity(
            state.player_projectiles.len()
                + state.hostile_projectiles.len()
                + state.hostiles.len()
                + state.pickups.len(),
        );
        entities.extend(state.player_projectiles.iter().map(|p| EntityView {
            id: p.id,
            kind: EntityKind::PlayerProjectile,
            rect: p.bounds(),
            health_ratio: 1.0,
        }));
        entities.extend(state.hostile_projectiles.iter().map(|p| EntityView {
            id: p.id,
            kind: EntityKind::HostileProjectile,
            rect: p.bounds(),
            health_ratio: 1.0,
        }));
        entities.extend(state.hostiles.iter().map(|h| EntityView {
            id: h.id,
            kind: EntityKind::Hostile,
            rect: h.bounds(),
            health_ratio: if h.max_health == 0 {
                0.0
            } else {
                h.health as f32 / h.max_health as f32
            },
        }));
        entities.extend(state.pickups.iter().map(|p| EntityView {
            id: p.id,
            kind: EntityKind::Pickup(p.kind),
            rect: p.bounds(),
            health_ratio: 1.0,
        }));

        let power_ups = state
            .power_ups
            .iter()
            .map(|(kind, remaining_ms)| PowerUpView {
                kind,
                remaining_ms,
                label: format!(
                    "{} (expires in {:.1}s)",
                    kind.label(),
                    remaining_ms / 1000.0
                ),
            })
            .collect();

        Self {
            phase: state.phase,
            score: state.stats.score,
            lives: state.stats.lives,
            level: state.stats.level,
            player_health_ratio: state.player.health_ratio(),
            player: state.player.bounds(),
            double_gun: state.player.double_gun,
            entities,
            power_ups,
        }
    }
}

impl<R: RandomSource> GameState<R> {
    /// Snapshot for the presentation layer
    pub fn view(&self) -> FrameView {
        FrameView::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_view_reports_stats_and_entities() {
        let mut state = GameState::new(5);
        state.start();
        state.spawn_hostile();
        state.hostiles[0].health -= 1;
        state.spawn_pickup(PickupKind::DoubleGun, Vec2::new(100.0, 100.0));
        state.player.health = 50;

        let view = state.view();
        assert_eq!(view.phase, GamePhase::Running);
        assert_eq!(view.lives, 3);
        assert_eq!(view.level, 1);
        assert_eq!(view.player_health_ratio, 0.5);
        assert_eq!(view.entities.len(), 2);
        assert_eq!(view.entities[0].kind, EntityKind::Hostile);
        assert!((view.entities[0].health_ratio - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(
            view.entities[1].kind,
            EntityKind::Pickup(PickupKind::DoubleGun)
        );
        assert!(view.power_ups.is_empty());
    }

    #[test]
    fn test_power_up_label() {
        let mut state = GameState::new(5);
        state.start();
        state.power_ups.grant(PowerUpKind::DoubleGun, 4200.0);
        let view = state.view();
        assert_eq!(view.power_ups.len(), 1);
        assert_eq!(view.power_ups[0].label, "Double Gun (expires in 4.2s)");
    }

    #[test]
    fn test_view_serializes() {
        let mut state = GameState::new(5);
        state.start();
        let json = serde_json::to_string(&state.view()).expect("view serializes");
        assert!(json.contains("\"phase\":\"Running\""));
    }
}
