//! Game state and core simulation types
//!
//! Everything the tick mutates lives in [`GameState`]; nothing else touches
//! the entity collections.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{
    Hostile, Pickup, PickupKind, Player, Projectile, ProjectileOwner, ProjectileSpawn,
};
use super::input::Command;
use super::powerup::{ActivePowerUps, PowerUpKind};
use super::rng::{RandomSource, SimRng};
use super::spawn::SpawnDirector;
use super::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start command
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Frozen until toggled back
    Paused,
    /// Out of lives; only a restart leaves this phase
    Ended,
}

/// Why a life was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeLossCause {
    /// Health ran out from hostile fire
    Shot,
    /// A hostile slipped past the bottom edge
    Breach,
}

/// Discrete things that happened during a tick, for audio/UI reaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired { owner: ProjectileOwner },
    /// A hostile took damage but survived
    HostileHit { id: u32, health: u32 },
    /// `x`, `y` is the hostile's centre at death
    EnemyDestroyed { id: u32, points: u64, x: f32, y: f32 },
    PlayerDamaged { damage: u32, health: u32 },
    LifeLost { lives: u32, cause: LifeLossCause },
    PowerUpCollected { kind: PickupKind },
    PowerUpExpired { kind: PowerUpKind },
    LevelUp { level: u32 },
    GameOver { final_score: u64 },
}

/// Score, lives and level for the current round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
}

impl RoundStats {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            score: 0,
            lives: tuning.starting_lives,
            level: 1,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimRng> {
    pub tuning: Tuning,
    pub rng: R,
    pub phase: GamePhase,
    pub stats: RoundStats,
    pub player: Player,
    /// Player-owned projectiles, in firing order
    pub player_projectiles: Vec<Projectile>,
    /// Hostile-owned projectiles, in firing order
    pub hostile_projectiles: Vec<Projectile>,
    /// Live hostiles, in spawn order
    pub hostiles: Vec<Hostile>,
    pub pickups: Vec<Pickup>,
    pub spawner: SpawnDirector,
    pub power_ups: ActivePowerUps,
    /// Ticks simulated this round
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState<SimRng> {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), SimRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    pub fn with_tuning(tuning: Tuning, rng: R) -> Self {
        Self {
            stats: RoundStats::new(&tuning),
            player: Player::new(&tuning),
            spawner: SpawnDirector::new(&tuning),
            tuning,
            rng,
            phase: GamePhase::NotStarted,
            player_projectiles: Vec::new(),
            hostile_projectiles: Vec::new(),
            hostiles: Vec::new(),
            pickups: Vec::new(),
            power_ups: ActivePowerUps::default(),
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset the round and begin running; restarts unconditionally
    pub fn start(&mut self) {
        self.reset_round();
        self.phase = GamePhase::Running;
        log::info!("Round started (lives={})", self.stats.lives);
    }

    /// Running <-> Paused; no effect in other phases
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => {
                log::info!("Paused");
                GamePhase::Paused
            }
            GamePhase::Paused => {
                log::info!("Resumed");
                GamePhase::Running
            }
            other => other,
        };
    }

    /// Dispatch a key-down command. Start only applies from the title or
    /// game-over screen, pause only while a round is live. Returns whether
    /// the command took effect.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match (command, self.phase) {
            (Command::Start, GamePhase::NotStarted | GamePhase::Ended) => {
                self.start();
                true
            }
            (Command::TogglePause, GamePhase::Running | GamePhase::Paused) => {
                self.toggle_pause();
                true
            }
            _ => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    fn reset_round(&mut self) {
        self.stats = RoundStats::new(&self.tuning);
        self.player.reset(&self.tuning);
        self.player_projectiles.clear();
        self.hostile_projectiles.clear();
        self.hostiles.clear();
        self.pickups.clear();
        self.spawner.reset(&self.tuning);
        self.power_ups.clear();
        self.time_ticks = 0;
        self.next_id = 1;
    }

    /// Give an ID to a fired projectile and file it by owner
    pub fn add_projectile(&mut self, spawn: ProjectileSpawn) {
        let id = self.next_entity_id();
        let projectile = Projectile::from_spawn(id, spawn);
        match spawn.owner {
            ProjectileOwner::Player => self.player_projectiles.push(projectile),
            ProjectileOwner::Hostile => self.hostile_projectiles.push(projectile),
        }
    }

    /// Spawn a hostile scaled to the current level
    pub fn spawn_hostile(&mut self) {
        let id = self.next_entity_id();
        let hostile = Hostile::spawn(id, self.stats.level, &self.tuning, &mut self.rng);
        log::trace!("Spawned hostile {} at x={:.1}", id, hostile.pos.x);
        self.hostiles.push(hostile);
    }

    pub fn spawn_pickup(&mut self, kind: PickupKind, center: Vec2) {
        let id = self.next_entity_id();
        self.pickups.push(Pickup::new(id, kind, center, &self.tuning));
    }

    /// Lose one life; ends the run when none remain
    pub fn lose_life(&mut self, cause: LifeLossCause, events: &mut Vec<GameEvent>) {
        self.stats.lives = self.stats.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost {
            lives: self.stats.lives,
            cause,
        });
        if self.stats.lives == 0 && self.phase == GamePhase::Running {
            self.phase = GamePhase::Ended;
            log::info!(
                "Game over: score={} level={}",
                self.stats.score,
                self.stats.level
            );
            events.push(GameEvent::GameOver {
                final_score: self.stats.score,
            });
        }
    }
}
