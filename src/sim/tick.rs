//! Simulation tick
//!
//! Advances avatar, background and obstacles, then checks victory and
//! collision in that order. Terminal phases freeze the simulation.

use glam::Vec2;

use super::collision::{Rect, first_hit};
use super::difficulty::speed_tier;
use super::rng::RandomSource;
use super::state::{GamePhase, GameState};
use crate::audio::{SoundEffect, SoundSink};
use crate::consts::*;

/// How far above the avatar the autopilot looks for threats (pixels)
const AUTOPILOT_LOOKAHEAD: f32 = 220.0;
/// Horizontal clearance the autopilot keeps from threats (pixels)
const AUTOPILOT_MARGIN: f32 = 6.0;
/// Candidate spacing when the autopilot searches for a free lane
const AUTOPILOT_STEP: f32 = 4.0;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer position in screen pixels
    pub pointer: Option<Vec2>,
    /// Start over after a crash
    pub restart: bool,
    /// Idle/demo mode - autopilot steers the avatar
    pub idle_mode: bool,
}

/// Advance the session by `dt` seconds
///
/// `dt` is clamped to `[0, state.max_tick_dt]` so a stall can't move an
/// obstacle across the hitbox in one step.
pub fn tick<R, S>(state: &mut GameState<R>, input: &TickInput, dt: f32, sounds: &mut S)
where
    R: RandomSource,
    S: SoundSink + ?Sized,
{
    if input.restart && state.phase == GamePhase::Crashed {
        state.reset(INITIAL_OBSTACLES);
    }

    // Crashed and Victorious are frozen
    if state.phase != GamePhase::Normal {
        return;
    }

    let dt = dt.max(0.0).min(state.max_tick_dt.max(0.0));
    state.time_ticks += 1;

    let pointer = if input.idle_mode {
        autopilot_target(state).or(input.pointer)
    } else {
        input.pointer
    };
    if let Some(pointer) = pointer {
        state.avatar.follow_pointer(pointer);
    }

    state.avatar.update(dt);
    state.background.update(dt);

    state.field.set_speed_tier(speed_tier(state.score));
    state.field.update(dt, &mut state.score, sounds);

    if state.score >= state.victory_score {
        state.phase = GamePhase::Victorious;
        log::info!("Victory at score {} after {} ticks", state.score, state.time_ticks);
        return;
    }

    if let Some(index) = first_hit(&state.avatar.hitbox(), state.field.rects()) {
        state.phase = GamePhase::Crashed;
        sounds.play(SoundEffect::Crash);
        log::info!(
            "Crashed into obstacle {} at score {} after {} ticks",
            index,
            state.score,
            state.time_ticks
        );
    }
}

/// Pointer position that moves the avatar out of the way of the obstacles
/// about to reach it, or `None` if its lane is already clear.
fn autopilot_target<R: RandomSource>(state: &GameState<R>) -> Option<Vec2> {
    let avatar = state.avatar.rect();
    let window_top = avatar.y - AUTOPILOT_LOOKAHEAD;
    let window_bottom = avatar.y + avatar.h;

    let threats: Vec<&Rect> = state
        .field
        .rects()
        .filter(|r| r.y + r.h > window_top && r.y < window_bottom)
        .collect();

    let blocked = |x: f32| {
        threats.iter().any(|r| {
            x + avatar.w + AUTOPILOT_MARGIN > r.x && x - AUTOPILOT_MARGIN < r.x + r.w
        })
    };

    if !blocked(avatar.x) {
        return None;
    }

    let max_x = SCREEN_WIDTH - avatar.w;
    let steps = (max_x / AUTOPILOT_STEP).floor() as u32;
    let best_x = (0..=steps)
        .map(|i| i as f32 * AUTOPILOT_STEP)
        .filter(|&x| !blocked(x))
        .min_by(|a, b| {
            (a - avatar.x)
                .abs()
                .partial_cmp(&(b - avatar.x).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;

    Some(Vec2::new(best_x + avatar.w / 2.0, avatar.center().y))
}
