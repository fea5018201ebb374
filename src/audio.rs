//! Audio reaction to game events
//!
//! Procedural beeps, no sound files. The simulation only emits events; this
//! module maps them to tones and hands them to whatever [`ToneSink`] the host
//! provides (an oscillator, a terminal bell, a test recorder). Mute state
//! lives here and never reaches the core.

use crate::settings::AudioSettings;
use crate::sim::{GameEvent, LifeLossCause, PickupKind, PowerUpKind, ProjectileOwner};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fires
    PlayerShot,
    /// Hostile fires
    HostileShot,
    /// Hostile damaged but alive
    HostileHit,
    /// Hostile destroyed
    HostileDestroyed,
    /// Player takes a hit
    PlayerDamaged,
    /// Health ran out
    LifeLostShot,
    /// Hostile reached the bottom
    LifeLostBreach,
    /// Extra life collected
    LifePickup,
    /// Double gun collected
    DoubleGunPickup,
    /// New level
    LevelUp,
    /// Run over
    GameOver,
}

/// A square-wave beep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_s: f32,
}

impl SoundEffect {
    pub fn tone(self) -> Tone {
        let (frequency_hz, duration_s) = match self {
            SoundEffect::PlayerShot => (900.0, 0.05),
            SoundEffect::HostileShot => (350.0, 0.1),
            SoundEffect::HostileHit => (500.0, 0.06),
            SoundEffect::HostileDestroyed => (600.0, 0.12),
            SoundEffect::PlayerDamaged => (200.0, 0.15),
            SoundEffect::LifeLostShot => (150.0, 0.4),
            SoundEffect::LifeLostBreach => (150.0, 0.2),
            SoundEffect::LifePickup => (800.0, 0.25),
            SoundEffect::DoubleGunPickup => (1200.0, 0.3),
            SoundEffect::LevelUp => (1200.0, 0.5),
            SoundEffect::GameOver => (150.0, 0.6),
        };
        Tone {
            frequency_hz,
            duration_s,
        }
    }

    /// Sound for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        let effect = match event {
            GameEvent::ShotFired {
                owner: ProjectileOwner::Player,
            } => SoundEffect::PlayerShot,
            GameEvent::ShotFired {
                owner: ProjectileOwner::Hostile,
            } => SoundEffect::HostileShot,
            GameEvent::HostileHit { .. } => SoundEffect::HostileHit,
            GameEvent::EnemyDestroyed { .. } => SoundEffect::HostileDestroyed,
            GameEvent::PlayerDamaged { .. } => SoundEffect::PlayerDamaged,
            GameEvent::LifeLost {
                cause: LifeLossCause::Shot,
                ..
            } => SoundEffect::LifeLostShot,
            GameEvent::LifeLost {
                cause: LifeLossCause::Breach,
                ..
            } => SoundEffect::LifeLostBreach,
            GameEvent::PowerUpCollected {
                kind: PickupKind::Life,
            } => SoundEffect::LifePickup,
            GameEvent::PowerUpCollected {
                kind: PickupKind::DoubleGun,
            } => SoundEffect::DoubleGunPickup,
            GameEvent::PowerUpExpired {
                kind: PowerUpKind::DoubleGun,
            } => return None,
            GameEvent::LevelUp { .. } => SoundEffect::LevelUp,
            GameEvent::GameOver { .. } => SoundEffect::GameOver,
        };
        Some(effect)
    }
}

/// Host-side tone output; fire-and-forget
pub trait ToneSink {
    fn play(&mut self, tone: Tone, gain: f32);
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(&AudioSettings::default())
    }
}

impl AudioManager {
    /// Base gain of every beep before master volume
    const BEEP_GAIN: f32 = 0.2;

    pub fn new(settings: &AudioSettings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    /// Play the sound for each event in order; returns how many played
    pub fn react(&self, events: &[GameEvent], sink: &mut impl ToneSink) -> usize {
        if self.muted || self.master_volume <= 0.0 {
            return 0;
        }
        let gain = Self::BEEP_GAIN * self.master_volume;
        let mut played = 0;
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            sink.play(effect.tone(), gain);
            played += 1;
        }
        played
    }
}
