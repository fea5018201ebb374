//! Neon Raid headless runner
//!
//! Plays a seeded round with a simple autopilot and reports the outcome.
//! Useful for balance checks and for reproducing a run from its seed.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use neon_raid::Settings;
use neon_raid::audio::{AudioManager, Tone, ToneSink};
use neon_raid::sim::{Command, GameEvent, GamePhase, GameState, SimRng, TickInput, tick};

#[derive(Debug, Parser)]
#[command(name = "neon-raid", about = "Run a headless Neon Raid round")]
struct Args {
    /// RNG seed for the run
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Simulated seconds before stopping
    #[arg(long, default_value_t = 120.0)]
    seconds: f32,
    /// Host frame length in milliseconds
    #[arg(long, default_value_t = 16.0)]
    frame_ms: f32,
    /// Settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    seed: u64,
    elapsed_ms: f64,
    ended: bool,
    score: u64,
    level: u32,
    lives: u32,
    kills: u32,
    lives_lost: u32,
    pickups: u32,
    beeps: usize,
}

/// Counts tones instead of playing them
#[derive(Default)]
struct SilentSink {
    count: usize,
}

impl ToneSink for SilentSink {
    fn play(&mut self, tone: Tone, _gain: f32) {
        log::trace!("beep {}Hz {}s", tone.frequency_hz, tone.duration_s);
        self.count += 1;
    }
}

/// Hold the keys a human would: chase the lowest hostile, always fire
fn autopilot(state: &GameState<SimRng>) -> HashMap<&'static str, bool> {
    let mut keys = HashMap::new();
    keys.insert(" ", true);
    let player_center = state.player.bounds().center().x;
    let target = state
        .hostiles
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|h| h.bounds().center().x);
    if let Some(x) = target {
        if x < player_center - 4.0 {
            keys.insert("ArrowLeft", true);
        } else if x > player_center + 4.0 {
            keys.insert("ArrowRight", true);
        }
    }
    keys
}

/// Simulated time after `ticks` frames, from the count so tiny frames still add up
fn elapsed_ms(ticks: u64, frame_ms: f32) -> f64 {
    ticks as f64 * f64::from(frame_ms)
}

fn within_budget(ticks: u64, frame_ms: f32, budget_ms: f64) -> bool {
    elapsed_ms(ticks, frame_ms) < budget_ms
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if !(args.frame_ms > 0.0) {
        anyhow::bail!("--frame-ms must be > 0 (got {})", args.frame_ms);
    }

    let settings = match &args.settings {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let mut state = GameState::with_tuning(settings.tuning.clone(), SimRng::new(args.seed));
    let audio = AudioManager::new(&settings.audio);
    let mut sink = SilentSink::default();
    let mut summary = Summary {
        seed: args.seed,
        ..Default::default()
    };

    log::info!("Neon Raid starting with seed: {}", args.seed);
    state.apply_command(Command::Start);

    let budget_ms = f64::from(args.seconds.max(0.0)) * 1000.0;
    let mut ticks: u64 = 0;
    while within_budget(ticks, args.frame_ms, budget_ms) && state.phase == GamePhase::Running {
        let input = TickInput::from_keys(&autopilot(&state));
        let report = tick(&mut state, &input, args.frame_ms);
        ticks += 1;
        summary.elapsed_ms = elapsed_ms(ticks, args.frame_ms);

        for event in &report.events {
            match event {
                GameEvent::EnemyDestroyed { .. } => summary.kills += 1,
                GameEvent::LifeLost { .. } => summary.lives_lost += 1,
                GameEvent::PowerUpCollected { kind } => {
                    summary.pickups += 1;
                    log::debug!("Collected {:?}", kind);
                }
                GameEvent::LevelUp { level } => log::info!("Level {}", level),
                _ => {}
            }
        }
        audio.react(&report.events, &mut sink);
    }

    let view = state.view();
    summary.ended = view.phase == GamePhase::Ended;
    summary.score = view.score;
    summary.level = view.level;
    summary.lives = view.lives;
    summary.beeps = sink.count;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("serializing summary")?
        );
    } else {
        println!(
            "seed {}: {} after {:.1}s, score {} at level {} ({} kills, {} lives left)",
            summary.seed,
            if summary.ended { "game over" } else { "survived" },
            summary.elapsed_ms / 1000.0,
            summary.score,
            summary.level,
            summary.kills,
            summary.lives,
        );
    }
    Ok(())
}
