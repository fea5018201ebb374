//! Entity value types and their per-type update rules
//!
//! Updates here only advance an entity's own state. Adding or removing
//! entities from collections is the tick's job.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::{Rect, clamp};
use super::rng::RandomSource;
use super::tuning::Tuning;
use crate::consts::{PROJECTILE_HEIGHT, PROJECTILE_WIDTH};

/// Who fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileOwner {
    Player,
    Hostile,
}

/// A projectile that has been fired but not yet given an entity ID
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileSpawn {
    /// Top-left corner
    pub pos: Vec2,
    pub vel_y: f32,
    pub owner: ProjectileOwner,
}

/// A projectile in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per reference frame; negative travels up
    pub vel_y: f32,
    pub owner: ProjectileOwner,
}

impl Projectile {
    pub fn from_spawn(id: u32, spawn: ProjectileSpawn) -> Self {
        Self {
            id,
            pos: spawn.pos,
            size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            vel_y: spawn.vel_y,
            owner: spawn.owner,
        }
    }

    pub fn update(&mut self, delta_ms: f32, tuning: &Tuning) {
        self.pos.y += self.vel_y * tuning.frames(delta_ms);
    }

    /// Fully outside `[-h, height + h]` vertically
    pub fn is_off_screen(&self, playfield_height: f32) -> bool {
        self.pos.y < -self.size.y || self.pos.y > playfield_height + self.size.y
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// The player's craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per reference frame
    pub speed: f32,
    pub health: u32,
    pub max_health: u32,
    /// Fires two projectiles per shot while set
    pub double_gun: bool,
    /// Time until the next shot is allowed (ms)
    pub fire_cooldown_ms: f32,
    pub fire_rate_ms: f32,
    projectile_vel: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.player_start(),
            size: tuning.player_size(),
            speed: tuning.player_speed,
            health: tuning.player_max_health,
            max_health: tuning.player_max_health,
            double_gun: false,
            fire_cooldown_ms: 0.0,
            fire_rate_ms: tuning.fire_rate_ms,
            projectile_vel: tuning.player_projectile_vel,
        }
    }

    /// Return to the round-start position and condition
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    /// Move horizontally; `direction` is -1 (left) to 1 (right)
    pub fn move_by(&mut self, direction: f32, delta_ms: f32, tuning: &Tuning) {
        let direction = if direction.is_finite() {
            direction.clamp(-1.0, 1.0)
        } else {
            0.0
        };
        self.pos.x += self.speed * direction * tuning.frames(delta_ms);
        self.pos.x = clamp(
            self.pos.x,
            0.0,
            (tuning.playfield_width - self.size.x).max(0.0),
        );
    }

    pub fn can_fire(&self) -> bool {
        self.fire_cooldown_ms <= 0.0
    }

    /// Fire if the gun is ready; empty when still cooling down
    pub fn fire(&mut self) -> Vec<ProjectileSpawn> {
        if !self.can_fire() {
            return Vec::new();
        }
        self.fire_cooldown_ms = self.fire_rate_ms;

        let shot = |x: f32| ProjectileSpawn {
            pos: Vec2::new(x, self.pos.y),
            vel_y: self.projectile_vel,
            owner: ProjectileOwner::Player,
        };
        if self.double_gun {
            vec![
                shot(self.pos.x + 8.0),
                shot(self.pos.x + self.size.x - 8.0 - PROJECTILE_WIDTH),
            ]
        } else {
            vec![shot(self.pos.x + self.size.x / 2.0 - PROJECTILE_WIDTH / 2.0)]
        }
    }

    /// Tick the fire cooldown toward zero
    pub fn update(&mut self, delta_ms: f32) {
        if self.fire_cooldown_ms > 0.0 {
            self.fire_cooldown_ms = (self.fire_cooldown_ms - delta_ms).max(0.0);
        }
    }

    pub fn health_ratio(&self) -> f32 {
        if self.max_health == 0 {
            0.0
        } else {
            self.health as f32 / self.max_health as f32
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// A descending enemy craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    pub id: u32,
    pub pos: Vec2,
    /// Square side length
    pub size: f32,
    /// Pixels per reference frame, downward
    pub speed: f32,
    pub health: u32,
    pub max_health: u32,
    pub shoot_timer_ms: f32,
    pub shoot_cooldown_ms: f32,
}

impl Hostile {
    /// Create a hostile for `level` just above the top edge
    pub fn spawn(id: u32, level: u32, tuning: &Tuning, rng: &mut impl RandomSource) -> Self {
        let size = tuning.hostile_size(level);
        let x = rng.range(0.0, (tuning.playfield_width - size).max(0.0));
        let health = tuning.hostile_health(level);
        Self {
            id,
            pos: Vec2::new(x, -size),
            size,
            speed: tuning.hostile_speed(level),
            health,
            max_health: health,
            shoot_timer_ms: 0.0,
            shoot_cooldown_ms: Self::draw_cooldown(tuning, rng),
        }
    }

    fn draw_cooldown(tuning: &Tuning, rng: &mut impl RandomSource) -> f32 {
        rng.range(tuning.hostile_min_cooldown_ms, tuning.hostile_max_cooldown_ms)
    }

    pub fn update(&mut self, delta_ms: f32, tuning: &Tuning) {
        self.pos.y += self.speed * tuning.frames(delta_ms);
    }

    /// Subtract health; returns true if this killed the hostile
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        self.health = self.health.saturating_sub(amount);
        self.health == 0
    }

    /// Advance the shoot timer, firing once when it reaches the cooldown
    pub fn maybe_fire(
        &mut self,
        delta_ms: f32,
        tuning: &Tuning,
        rng: &mut impl RandomSource,
    ) -> Option<ProjectileSpawn> {
        self.shoot_timer_ms += delta_ms;
        if self.shoot_timer_ms < self.shoot_cooldown_ms {
            return None;
        }
        self.shoot_timer_ms = 0.0;
        self.shoot_cooldown_ms = Self::draw_cooldown(tuning, rng);
        Some(ProjectileSpawn {
            pos: Vec2::new(
                self.pos.x + self.size / 2.0 - PROJECTILE_WIDTH / 2.0,
                self.pos.y + self.size,
            ),
            vel_y: tuning.hostile_projectile_vel,
            owner: ProjectileOwner::Hostile,
        })
    }

    /// Top edge has passed the bottom of the playfield
    pub fn is_past_bottom(&self, playfield_height: f32) -> bool {
        self.pos.y > playfield_height
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::splat(self.size))
    }
}

/// Collectible kinds dropped by destroyed hostiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    /// One extra life, applied instantly
    Life,
    /// Timed double gun
    DoubleGun,
}

/// A falling collectible
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub kind: PickupKind,
    pub pos: Vec2,
    pub size: f32,
    pub vel_y: f32,
}

impl Pickup {
    /// Create a pickup centred on `center`
    pub fn new(id: u32, kind: PickupKind, center: Vec2, tuning: &Tuning) -> Self {
        let size = tuning.pickup_size;
        Self {
            id,
            kind,
            pos: center - Vec2::splat(size / 2.0),
            size,
            vel_y: tuning.pickup_vel,
        }
    }

    pub fn update(&mut self, delta_ms: f32, tuning: &Tuning) {
        self.pos.y += self.vel_y * tuning.frames(delta_ms);
    }

    pub fn is_off_screen(&self, playfield_height: f32) -> bool {
        self.pos.y > playfield_height
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::splat(self.size))
    }
}
