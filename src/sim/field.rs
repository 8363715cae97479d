//! Obstacle field
//!
//! Owns the live obstacles. Each update moves them, awards a point the first
//! time an obstacle crosses the bottom edge, retires obstacles one obstacle
//! height past that line, and asks the spawner for more when there is room.

use super::collision::Rect;
use super::rng::{PcgSource, RandomSource};
use super::spawner::spawn_obstacles;
use super::state::Obstacle;
use crate::audio::{SoundEffect, SoundSink};
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct ObstacleField<R = PcgSource> {
    /// Live obstacles in spawn order
    obstacles: Vec<Obstacle>,
    rng: R,
    /// Upper bound for sampled speed tiers, pushed in every tick
    speed_tier: u32,
    /// Obstacle textures the presentation layer managed to load
    variants: usize,
}

impl<R: RandomSource> ObstacleField<R> {
    pub fn new(rng: R, variants: usize) -> Self {
        Self {
            obstacles: Vec::with_capacity(MAX_OBSTACLES),
            rng,
            speed_tier: MIN_SPEED_TIER,
            variants,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Collision rectangles of the live obstacles
    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.obstacles.iter().map(|o| &o.rect)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn speed_tier(&self) -> u32 {
        self.speed_tier
    }

    /// Set the tier new obstacles are sampled up to (at least 1)
    pub fn set_speed_tier(&mut self, tier: u32) {
        self.speed_tier = tier.max(1);
    }

    pub fn variant_count(&self) -> usize {
        self.variants
    }

    /// Number of obstacle textures available; zero disables spawning
    pub fn set_variant_count(&mut self, variants: usize) {
        self.variants = variants;
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Request `count` new obstacles; returns how many were created
    pub fn spawn(&mut self, count: usize) -> usize {
        let batch = spawn_obstacles(
            count,
            self.obstacles.len(),
            MAX_OBSTACLES,
            self.speed_tier,
            self.variants,
            &mut self.rng,
        );
        let created = batch.len();
        self.obstacles.extend(batch);
        created
    }

    /// Advance every obstacle by `dt` seconds.
    ///
    /// Adds one to `score` and plays [`SoundEffect::Score`] for every obstacle
    /// that crossed the bottom edge this tick. Returns the number of such passes.
    pub fn update<S>(&mut self, dt: f32, score: &mut u32, sounds: &mut S) -> u32
    where
        S: SoundSink + ?Sized,
    {
        let mut passes = 0;
        for obstacle in &mut self.obstacles {
            obstacle.advance(dt);
            if obstacle.mark_passed(SCREEN_HEIGHT) {
                passes += 1;
                *score += 1;
                sounds.play(SoundEffect::Score);
            }
        }
        if passes > 0 {
            log::debug!("{} obstacle(s) passed, score {}", passes, score);
        }

        self.obstacles.retain(|o| !o.is_retired());

        if self.wants_spawn() {
            self.spawn(1);
        }

        passes
    }

    /// Spawn-trigger policy: the field is sparse, or the newest obstacle
    /// has cleared the spawn line and there is headroom.
    fn wants_spawn(&self) -> bool {
        let len = self.obstacles.len();
        if len < MAX_OBSTACLES / 2 {
            return true;
        }
        let newest_clear = self
            .obstacles
            .last()
            .is_some_and(|o| o.rect.y > -OBSTACLE_SIZE);
        newest_clear && len < MAX_OBSTACLES
    }

    /// Drop every obstacle and spawn a fresh batch of `initial` at tier `MIN_SPEED_TIER`
    pub fn reset(&mut self, initial: usize) {
        self.obstacles.clear();
        self.speed_tier = MIN_SPEED_TIER;
        self.spawn(initial);
    }

    #[cfg(test)]
    pub(crate) fn obstacles_mut(&mut self) -> &mut Vec<Obstacle> {
        &mut self.obstacles
    }
}
