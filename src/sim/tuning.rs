//! Data-driven game balance
//!
//! [`Tuning`] mirrors every constant in [`crate::consts`]. Settings files may
//! override any subset; missing keys keep the compile-time default.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay numbers consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield / timing ===
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub reference_frame_ms: f32,
    pub max_delta_ms: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,
    pub player_max_health: u32,
    pub player_bottom_offset: f32,
    pub fire_rate_ms: f32,
    pub starting_lives: u32,

    // === Projectiles ===
    pub player_projectile_vel: f32,
    pub hostile_projectile_vel: f32,
    pub hostile_projectile_damage: u32,

    // === Hostiles ===
    pub hostile_base_size: f32,
    pub hostile_size_per_level: f32,
    pub hostile_base_speed: f32,
    pub hostile_speed_per_level: f32,
    pub hostile_base_health: u32,
    pub hostile_min_cooldown_ms: f32,
    pub hostile_max_cooldown_ms: f32,
    pub points_per_level: u64,

    // === Pickups ===
    pub pickup_size: f32,
    pub pickup_vel: f32,
    pub pickup_drop_chance: f32,
    pub double_gun_duration_ms: f32,

    // === Spawn / progression ===
    pub initial_spawn_threshold_ms: f32,
    pub spawn_step_ms: f32,
    pub spawn_floor_ms: f32,
    pub level_interval_ms: f32,
    pub level_up_spawn_step_ms: f32,
    pub level_up_spawn_floor_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            reference_frame_ms: REFERENCE_FRAME_MS,
            max_delta_ms: MAX_DELTA_MS,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_max_health: PLAYER_MAX_HEALTH,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,
            fire_rate_ms: PLAYER_FIRE_RATE_MS,
            starting_lives: STARTING_LIVES,

            player_projectile_vel: PLAYER_PROJECTILE_VEL,
            hostile_projectile_vel: HOSTILE_PROJECTILE_VEL,
            hostile_projectile_damage: HOSTILE_PROJECTILE_DAMAGE,

            hostile_base_size: HOSTILE_BASE_SIZE,
            hostile_size_per_level: HOSTILE_SIZE_PER_LEVEL,
            hostile_base_speed: HOSTILE_BASE_SPEED,
            hostile_speed_per_level: HOSTILE_SPEED_PER_LEVEL,
            hostile_base_health: HOSTILE_BASE_HEALTH,
            hostile_min_cooldown_ms: HOSTILE_MIN_COOLDOWN_MS,
            hostile_max_cooldown_ms: HOSTILE_MAX_COOLDOWN_MS,
            points_per_level: POINTS_PER_LEVEL,

            pickup_size: PICKUP_SIZE,
            pickup_vel: PICKUP_VEL,
            pickup_drop_chance: PICKUP_DROP_CHANCE,
            double_gun_duration_ms: DOUBLE_GUN_DURATION_MS,

            initial_spawn_threshold_ms: INITIAL_SPAWN_THRESHOLD_MS,
            spawn_step_ms: SPAWN_STEP_MS,
            spawn_floor_ms: SPAWN_FLOOR_MS,
            level_interval_ms: LEVEL_INTERVAL_MS,
            level_up_spawn_step_ms: LEVEL_UP_SPAWN_STEP_MS,
            level_up_spawn_floor_ms: LEVEL_UP_SPAWN_FLOOR_MS,
        }
    }
}

impl Tuning {
    /// Scale factor turning per-reference-frame speeds into a displacement
    #[inline]
    pub fn frames(&self, delta_ms: f32) -> f32 {
        if self.reference_frame_ms > 0.0 {
            delta_ms / self.reference_frame_ms
        } else {
            0.0
        }
    }

    pub fn player_size(&self) -> Vec2 {
        Vec2::new(self.player_width, self.player_height)
    }

    /// Player spawn position: horizontally centred near the bottom
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(
            self.playfield_width / 2.0 - self.player_width / 2.0,
            self.playfield_height - self.player_bottom_offset,
        )
    }

    pub fn hostile_size(&self, level: u32) -> f32 {
        self.hostile_base_size + level as f32 * self.hostile_size_per_level
    }

    pub fn hostile_speed(&self, level: u32) -> f32 {
        self.hostile_base_speed + level as f32 * self.hostile_speed_per_level
    }

    pub fn hostile_health(&self, level: u32) -> u32 {
        self.hostile_base_health.saturating_add(level)
    }

    /// Score for destroying a hostile at `level`
    pub fn kill_points(&self, level: u32) -> u64 {
        self.points_per_level.saturating_mul(level as u64)
    }
}
