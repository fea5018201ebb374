//! Neon Raid - A vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, game state)
//! - `view`: Read-only frame snapshot for renderers
//! - `audio`: Event-to-tone mapping for sound output
//! - `settings`: Tuning and preferences loaded from JSON

pub mod audio;
pub mod error;
pub mod settings;
pub mod sim;
pub mod view;

pub use error::SettingsError;
pub use settings::{AudioSettings, Settings};

/// Game configuration constants
///
/// These are the defaults for [`sim::Tuning`]; gameplay code reads the tuning,
/// never these directly.
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 480.0;
    pub const PLAYFIELD_HEIGHT: f32 = 640.0;

    /// Speeds are expressed in pixels per reference frame (~60 Hz)
    pub const REFERENCE_FRAME_MS: f32 = 16.0;
    /// Largest delta a single tick may consume
    pub const MAX_DELTA_MS: f32 = 40.0;

    /// Player craft
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 70.0;
    pub const PLAYER_SPEED: f32 = 6.0;
    pub const PLAYER_MAX_HEALTH: u32 = 100;
    /// Distance from the playfield bottom to the craft's top edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 80.0;
    pub const PLAYER_FIRE_RATE_MS: f32 = 300.0;
    pub const STARTING_LIVES: u32 = 3;

    /// Projectiles
    pub const PROJECTILE_WIDTH: f32 = 6.0;
    pub const PROJECTILE_HEIGHT: f32 = 14.0;
    pub const PLAYER_PROJECTILE_VEL: f32 = -9.0;
    pub const HOSTILE_PROJECTILE_VEL: f32 = 5.0;
    pub const HOSTILE_PROJECTILE_DAMAGE: u32 = 20;

    /// Hostiles scale linearly with level
    pub const HOSTILE_BASE_SIZE: f32 = 40.0;
    pub const HOSTILE_SIZE_PER_LEVEL: f32 = 4.0;
    pub const HOSTILE_BASE_SPEED: f32 = 1.0;
    pub const HOSTILE_SPEED_PER_LEVEL: f32 = 0.15;
    pub const HOSTILE_BASE_HEALTH: u32 = 2;
    pub const HOSTILE_MIN_COOLDOWN_MS: f32 = 1000.0;
    pub const HOSTILE_MAX_COOLDOWN_MS: f32 = 4000.0;
    pub const POINTS_PER_LEVEL: u64 = 10;

    /// Pickups
    pub const PICKUP_SIZE: f32 = 30.0;
    pub const PICKUP_VEL: f32 = 2.0;
    pub const PICKUP_DROP_CHANCE: f32 = 0.2;
    pub const DOUBLE_GUN_DURATION_MS: f32 = 10_000.0;

    /// Spawn cadence
    pub const INITIAL_SPAWN_THRESHOLD_MS: f32 = 2000.0;
    pub const SPAWN_STEP_MS: f32 = 5.0;
    pub const SPAWN_FLOOR_MS: f32 = 1200.0;

    /// Level progression
    pub const LEVEL_INTERVAL_MS: f32 = 30_000.0;
    pub const LEVEL_UP_SPAWN_STEP_MS: f32 = 300.0;
    pub const LEVEL_UP_SPAWN_FLOOR_MS: f32 = 700.0;
}
