//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Deltas are normalised and capped before use
//! - Injected RNG only
//! - Stable iteration order (spawn/fire order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod entity;
pub mod input;
pub mod powerup;
pub mod rect;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod tuning;

pub use collision::resolve_collisions;
pub use entity::{
    Hostile, Pickup, PickupKind, Player, Projectile, ProjectileOwner, ProjectileSpawn,
};
pub use input::{Command, KeyState, TickInput};
pub use powerup::{ActivePowerUps, PowerUpKind};
pub use rect::{Rect, clamp, intersects};
pub use rng::{RandomSource, ScriptedRng, SimRng};
pub use spawn::{SpawnDirector, SpawnOutcome};
pub use state::{GameEvent, GamePhase, GameState, LifeLossCause, RoundStats};
pub use tick::{TickReport, normalize_delta, tick};
pub use tuning::Tuning;
