//! Spawn cadence and level progression
//!
//! Two independent clocks: the spawn timer shortens its own threshold a little
//! on every spawn, and the round clock drops it by a larger step at each
//! level boundary.

use serde::{Deserialize, Serialize};

use super::tuning::Tuning;

/// What the director decided this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnOutcome {
    pub spawn: bool,
    pub level_up: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnDirector {
    pub spawn_timer_ms: f32,
    pub spawn_threshold_ms: f32,
    /// Time spent in the current level
    pub round_time_ms: f32,
}

impl SpawnDirector {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            spawn_timer_ms: 0.0,
            spawn_threshold_ms: tuning.initial_spawn_threshold_ms,
            round_time_ms: 0.0,
        }
    }

    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    pub fn advance(&mut self, delta_ms: f32, tuning: &Tuning) -> SpawnOutcome {
        let mut outcome = SpawnOutcome::default();

        self.spawn_timer_ms += delta_ms;
        if self.spawn_timer_ms >= self.spawn_threshold_ms {
            outcome.spawn = true;
            self.spawn_timer_ms = 0.0;
            // Level-up drops can leave the threshold under the intra-level floor
            if self.spawn_threshold_ms > tuning.spawn_floor_ms {
                self.spawn_threshold_ms =
                    (self.spawn_threshold_ms - tuning.spawn_step_ms).max(tuning.spawn_floor_ms);
            }
        }

        self.round_time_ms += delta_ms;
        if self.round_time_ms >= tuning.level_interval_ms {
            outcome.level_up = true;
            self.round_time_ms = 0.0;
            self.spawn_threshold_ms = (self.spawn_threshold_ms - tuning.level_up_spawn_step_ms)
                .max(tuning.level_up_spawn_floor_ms);
        }

        outcome
    }
}
