//! Per-tick input sampling
//!
//! The host owns key-event registration and hands the simulation a readable
//! pressed/not-pressed map. Bindings are fixed.

use std::collections::{HashMap, HashSet};

/// Keys that move the craft left
pub const LEFT_KEYS: [&str; 3] = ["ArrowLeft", "a", "A"];
/// Keys that move the craft right
pub const RIGHT_KEYS: [&str; 3] = ["ArrowRight", "d", "D"];
/// Keys that fire
pub const FIRE_KEYS: [&str; 2] = [" ", "ArrowUp"];
/// Key that starts a round from the title or game-over screen
pub const START_KEY: &str = "Enter";
/// Key that pauses and resumes
pub const PAUSE_KEY: &str = "Escape";

/// Read-only view of which logical keys are held
pub trait KeyState {
    fn is_pressed(&self, key: &str) -> bool;

    fn any_pressed(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.is_pressed(k))
    }
}

impl KeyState for HashMap<String, bool> {
    fn is_pressed(&self, key: &str) -> bool {
        self.get(key).copied().unwrap_or(false)
    }
}

impl KeyState for HashMap<&str, bool> {
    fn is_pressed(&self, key: &str) -> bool {
        self.get(key).copied().unwrap_or(false)
    }
}

impl KeyState for HashSet<String> {
    fn is_pressed(&self, key: &str) -> bool {
        self.contains(key)
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// -1 = left, 0 = still, 1 = right
    pub direction: f32,
    /// Fire intent (held)
    pub fire: bool,
}

impl TickInput {
    /// Sample the fixed bindings from a key map
    pub fn from_keys(keys: &impl KeyState) -> Self {
        let mut direction = 0.0;
        if keys.any_pressed(&LEFT_KEYS) {
            direction -= 1.0;
        }
        if keys.any_pressed(&RIGHT_KEYS) {
            direction += 1.0;
        }
        Self {
            direction,
            fire: keys.any_pressed(&FIRE_KEYS),
        }
    }
}

/// One-shot commands, triggered on key-down rather than sampled each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    TogglePause,
}

impl Command {
    /// Command bound to a freshly pressed key, if any. Auto-repeat presses
    /// should be filtered out by the host.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            START_KEY => Some(Command::Start),
            PAUSE_KEY => Some(Command::TogglePause),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_bindings() {
        let mut keys: HashMap<&str, bool> = HashMap::new();
        keys.insert("a", true);
        keys.insert(" ", true);
        let input = TickInput::from_keys(&keys);
        assert_eq!(input.direction, -1.0);
        assert!(input.fire);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let keys: HashSet<String> = ["ArrowLeft", "D"].iter().map(|s| s.to_string()).collect();
        let input = TickInput::from_keys(&keys);
        assert_eq!(input.direction, 0.0);
        assert!(!input.fire);
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(Command::from_key("Enter"), Some(Command::Start));
        assert_eq!(Command::from_key("Escape"), Some(Command::TogglePause));
        assert_eq!(Command::from_key("a"), None);
        // Movement is sampled, not dispatched
        assert_eq!(Command::from_key("ArrowLeft"), None);
    }

    #[test]
    fn test_released_keys_ignored() {
        let mut keys: HashMap<String, bool> = HashMap::new();
        keys.insert("ArrowRight".to_string(), false);
        keys.insert("ArrowUp".to_string(), true);
        let input = TickInput::from_keys(&keys);
        assert_eq!(input, TickInput {
            direction: 0.0,
            fire: true
        });
    }
}
