//! Obstacle spawning
//!
//! Creates batches of obstacles above the top edge. Each obstacle in a batch
//! starts one stagger step higher than the previous so a batch never overlaps.

use super::rng::RandomSource;
use super::state::Obstacle;
use crate::consts::*;

/// Create up to `count` obstacles without exceeding `max` live obstacles.
///
/// - `live`: obstacles currently in the field
/// - `speed_tier`: upper bound for the sampled tier (the lower bound is always
///   [`MIN_SPEED_TIER`])
/// - `variants`: number of loaded obstacle textures; zero makes the whole call a no-op
///
/// Rolls per obstacle, in order: speed tier, x, variant.
pub fn spawn_obstacles<R>(
    count: usize,
    live: usize,
    max: usize,
    speed_tier: u32,
    variants: usize,
    rng: &mut R,
) -> Vec<Obstacle>
where
    R: RandomSource + ?Sized,
{
    if variants == 0 {
        return Vec::new();
    }

    let to_create = count.min(max.saturating_sub(live));
    if to_create == 0 {
        return Vec::new();
    }

    let max_x = (SCREEN_WIDTH - OBSTACLE_SIZE) as i32;
    let min_tier = MIN_SPEED_TIER as i32;
    let max_tier = speed_tier.max(MIN_SPEED_TIER) as i32;
    let max_variant = (variants - 1) as i32;

    let batch: Vec<Obstacle> = (0..to_create)
        .map(|i| {
            let tier = rng.range_inclusive(min_tier, max_tier);
            let x = rng.range_inclusive(0, max_x);
            let variant = rng.range_inclusive(0, max_variant) as usize;
            let y = -OBSTACLE_SIZE - i as f32 * SPAWN_STAGGER;
            Obstacle::new(x as f32, y, tier as f32 * SPEED_UNIT, variant)
        })
        .collect();

    log::debug!(
        "Spawned {} obstacle(s) (requested {}, live {}, tier {})",
        batch.len(),
        count,
        live,
        speed_tier
    );
    batch
}
