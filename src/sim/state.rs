//! Game state and core simulation types

use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::background::ScrollingSurface;
use super::collision::Rect;
use super::field::ObstacleField;
use super::rng::{PcgSource, RandomSource};
use crate::audio::{SoundEffect, SoundSink};
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Normal,
    /// Avatar hit an obstacle; frozen until restart
    Crashed,
    /// Victory score reached; the shell takes over from here
    Victorious,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Normal)
    }
}

/// A falling obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    /// Fall speed (pixels/s)
    pub speed: f32,
    /// Crossed the bottom edge and scored
    pub passed: bool,
    /// Texture variant index
    pub variant: usize,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, speed: f32, variant: usize) -> Self {
        Self {
            rect: Rect::new(x, y, OBSTACLE_SIZE, OBSTACLE_SIZE),
            speed,
            passed: false,
            variant,
        }
    }

    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.rect.y += self.speed * dt;
    }

    /// Flip `passed` once the obstacle is below `bottom`.
    /// Returns true only on the tick the flag flips.
    pub fn mark_passed(&mut self, bottom: f32) -> bool {
        if !self.passed && self.rect.y > bottom {
            self.passed = true;
            return true;
        }
        false
    }

    /// Passed and a full obstacle height beyond the bottom edge
    #[inline]
    pub fn is_retired(&self) -> bool {
        self.passed && self.rect.y > SCREEN_HEIGHT + OBSTACLE_SIZE
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R = PcgSource> {
    pub phase: GamePhase,
    /// Obstacles passed since the last reset
    pub score: u32,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
    pub avatar: Avatar,
    pub background: ScrollingSurface,
    pub field: ObstacleField<R>,
    /// Score that ends the run in victory
    pub victory_score: u32,
    /// Largest delta-time one tick integrates
    pub max_tick_dt: f32,
}

impl GameState<PcgSource> {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(PcgSource::seeded(seed), &Settings::default())
    }

    /// Create a session from settings, seeding from entropy unless a seed is set
    pub fn from_settings(settings: &Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => PcgSource::seeded(seed),
            None => PcgSource::from_entropy(),
        };
        Self::with_rng(rng, settings)
    }

    pub fn seed(&self) -> u64 {
        self.field.rng().seed()
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a session around an injected random source
    ///
    /// Assumes all obstacle texture variants are available; call
    /// [`GameState::set_obstacle_variants`] once the textures are loaded.
    pub fn with_rng(rng: R, settings: &Settings) -> Self {
        let mut avatar = Avatar::new();
        avatar.set_costume(settings.costume);
        let mut background = ScrollingSurface::new(SCREEN_HEIGHT);
        background.set_scroll_speed(settings.scroll_speed);

        let mut state = Self {
            phase: GamePhase::Normal,
            score: 0,
            time_ticks: 0,
            avatar,
            background,
            field: ObstacleField::new(rng, OBSTACLE_VARIANTS),
            victory_score: settings.victory_score,
            max_tick_dt: settings.tick_clamp(),
        };
        state.reset(INITIAL_OBSTACLES);
        log::info!(
            "New session: victory at {}, tick clamp {:.4}s",
            state.victory_score,
            state.max_tick_dt
        );
        state
    }

    /// Back to a fresh Normal session with `initial` obstacles
    pub fn reset(&mut self, initial: usize) {
        self.phase = GamePhase::Normal;
        self.score = 0;
        self.time_ticks = 0;
        self.background.reset();
        self.field.reset(initial);
        log::info!("Session reset ({} obstacles)", self.field.len());
    }

    /// Report how many obstacle textures were loaded (zero disables spawning)
    pub fn set_obstacle_variants(&mut self, variants: usize) {
        self.field.set_variant_count(variants);
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.field.obstacles()
    }

    /// Speed tier the field is currently sampling up to
    pub fn speed_tier(&self) -> u32 {
        self.field.speed_tier()
    }

    pub fn next_costume<S: SoundSink + ?Sized>(&mut self, sounds: &mut S) -> usize {
        let costume = self.avatar.next_costume();
        sounds.play(SoundEffect::Select);
        costume
    }

    pub fn prev_costume<S: SoundSink + ?Sized>(&mut self, sounds: &mut S) -> usize {
        let costume = self.avatar.prev_costume();
        sounds.play(SoundEffect::Select);
        costume
    }
}

/// Obstacle textures shipped with the game
pub const OBSTACLE_VARIANTS: usize = 7;
