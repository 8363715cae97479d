//! Skyfall Dodge headless entry point
//!
//! Runs a demo session with the autopilot steering and prints a JSON summary.
//! Usage: `skyfall-dodge [settings.json]`

use std::collections::BTreeMap;

use serde::Serialize;

use skyfall_dodge::sim::{GamePhase, GameState, TickInput, tick};
use skyfall_dodge::{AudioManager, Settings, SoundEffect};

/// Frame time of the demo loop (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Longest demo run in simulated seconds
const MAX_DEMO_SECONDS: u32 = 120;

#[derive(Debug, Serialize)]
struct SessionSummary {
    seed: u64,
    phase: GamePhase,
    score: u32,
    ticks: u64,
    seconds: f32,
    speed_tier: u32,
    costume: &'static str,
    sounds: BTreeMap<String, u32>,
}

fn main() {
    env_logger::init();
    log::info!("Skyfall Dodge (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };

    let mut state = GameState::from_settings(&settings);
    let mut audio = AudioManager::from_settings(&settings);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut sounds: BTreeMap<String, u32> = BTreeMap::new();
    let max_ticks = MAX_DEMO_SECONDS * 60;
    for _ in 0..max_ticks {
        tick(&mut state, &input, FRAME_DT, &mut audio);
        for queued in audio.drain() {
            *sounds.entry(sound_name(queued.effect).to_string()).or_default() += 1;
        }
        if state.phase.is_terminal() {
            break;
        }
    }

    let summary = SessionSummary {
        seed: state.seed(),
        phase: state.phase,
        score: state.score,
        ticks: state.time_ticks,
        seconds: state.time_ticks as f32 * FRAME_DT,
        speed_tier: state.speed_tier(),
        costume: state.avatar.costume_name(),
        sounds,
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize summary: {}", e),
    }
}

fn sound_name(effect: SoundEffect) -> &'static str {
    match effect {
        SoundEffect::Score => "score",
        SoundEffect::Crash => "crash",
        SoundEffect::Select => "select",
    }
}
