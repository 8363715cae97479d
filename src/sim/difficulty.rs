//! Difficulty curve
//!
//! The speed tier climbs one step every [`POINTS_PER_TIER`] points, starting
//! at [`MIN_SPEED_TIER`] and saturating at [`MAX_SPEED`].

use crate::consts::*;

/// Speed tier for a score
#[inline]
pub fn speed_tier(score: u32) -> u32 {
    (MIN_SPEED_TIER + score / POINTS_PER_TIER).min(MAX_SPEED)
}
