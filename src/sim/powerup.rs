//! Timed power-ups
//!
//! One counter per kind. Collecting a kind that is already active refreshes
//! the counter to the full grant; it never stacks.

use serde::{Deserialize, Serialize};

use super::entity::{PickupKind, Player};
use super::tuning::Tuning;

/// Power-ups that carry a duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    DoubleGun,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 1] = [PowerUpKind::DoubleGun];

    /// Full grant length when collected
    pub fn duration_ms(self, tuning: &Tuning) -> f32 {
        match self {
            PowerUpKind::DoubleGun => tuning.double_gun_duration_ms,
        }
    }

    /// Switch the capability this power-up controls
    pub fn apply(self, player: &mut Player, active: bool) {
        match self {
            PowerUpKind::DoubleGun => player.double_gun = active,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PowerUpKind::DoubleGun => "Double Gun",
        }
    }
}

impl PickupKind {
    /// The timed power-up this pickup grants, if any
    pub fn power_up(self) -> Option<PowerUpKind> {
        match self {
            PickupKind::Life => None,
            PickupKind::DoubleGun => Some(PowerUpKind::DoubleGun),
        }
    }
}

/// Remaining duration per power-up kind (0 = inactive)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivePowerUps {
    double_gun_ms: f32,
}

impl ActivePowerUps {
    fn slot(&mut self, kind: PowerUpKind) -> &mut f32 {
        match kind {
            PowerUpKind::DoubleGun => &mut self.double_gun_ms,
        }
    }

    pub fn remaining(&self, kind: PowerUpKind) -> f32 {
        match kind {
            PowerUpKind::DoubleGun => self.double_gun_ms,
        }
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.remaining(kind) > 0.0
    }

    /// Set or refresh a kind to `duration_ms`
    pub fn grant(&mut self, kind: PowerUpKind, duration_ms: f32) {
        *self.slot(kind) = duration_ms.max(0.0);
    }

    /// Active kinds with their remaining time, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (PowerUpKind, f32)> + '_ {
        PowerUpKind::ALL
            .into_iter()
            .map(|kind| (kind, self.remaining(kind)))
            .filter(|&(_, ms)| ms > 0.0)
    }

    /// Count down active timers; returns the kinds that expired this call
    pub fn advance(&mut self, delta_ms: f32) -> Vec<PowerUpKind> {
        let mut expired = Vec::new();
        for kind in PowerUpKind::ALL {
            let slot = self.slot(kind);
            if *slot > 0.0 {
                *slot -= delta_ms;
                if *slot <= 0.0 {
                    *slot = 0.0;
                    expired.push(kind);
                }
            }
        }
        expired
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_and_expire() {
        let mut active = ActivePowerUps::default();
        assert!(!active.is_active(PowerUpKind::DoubleGun));

        active.grant(PowerUpKind::DoubleGun, 100.0);
        assert!(active.advance(60.0).is_empty());
        assert_eq!(active.remaining(PowerUpKind::DoubleGun), 40.0);

        let expired = active.advance(40.0);
        assert_eq!(expired, vec![PowerUpKind::DoubleGun]);
        assert_eq!(active.remaining(PowerUpKind::DoubleGun), 0.0);
        // Inactive timers do not expire twice
        assert!(active.advance(40.0).is_empty());
    }

    #[test]
    fn test_refresh_does_not_stack() {
        let t = Tuning::default();
        let mut active = ActivePowerUps::default();
        let full = PowerUpKind::DoubleGun.duration_ms(&t);
        active.grant(PowerUpKind::DoubleGun, full);
        active.advance(4000.0);
        active.grant(PowerUpKind::DoubleGun, full);
        assert_eq!(active.remaining(PowerUpKind::DoubleGun), 10_000.0);
    }

    #[test]
    fn test_apply_toggles_capability() {
        let t = Tuning::default();
        let mut player = Player::new(&t);
        PowerUpKind::DoubleGun.apply(&mut player, true);
        assert!(player.double_gun);
        PowerUpKind::DoubleGun.apply(&mut player, false);
        assert!(!player.double_gun);
    }

    #[test]
    fn test_pickup_mapping() {
        assert_eq!(PickupKind::Life.power_up(), None);
        assert_eq!(
            PickupKind::DoubleGun.power_up(),
            Some(PowerUpKind::DoubleGun)
        );
    }

    #[test]
    fn test_iter_lists_only_active() {
        let mut active = ActivePowerUps::default();
        assert_eq!(active.iter().count(), 0);
        active.grant(PowerUpKind::DoubleGun, 500.0);
        let listed: Vec<_> = active.iter().collect();
        assert_eq!(listed, vec![(PowerUpKind::DoubleGun, 500.0)]);
    }
}
