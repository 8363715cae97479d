//! Axis-aligned rectangles and collision testing
//!
//! Every collider in the game is an axis-aligned rectangle: obstacles are
//! squares and the avatar collides through a shrunk hitbox centred inside its
//! sprite, which keeps near misses forgiving.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min() + self.size() / 2.0
    }

    /// True if the rectangle has no area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Strict overlap test. Rectangles that only share an edge do not intersect,
    /// and an empty rectangle never intersects anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }

    /// Move the rectangle so it lies inside `bounds` (size is kept)
    pub fn clamp_within(&mut self, bounds: &Rect) {
        let max_x = (bounds.x + bounds.w - self.w).max(bounds.x);
        let max_y = (bounds.y + bounds.h - self.h).max(bounds.y);
        self.x = self.x.clamp(bounds.x, max_x);
        self.y = self.y.clamp(bounds.y, max_y);
    }
}

/// Hitbox of `size` centred inside `sprite`
pub fn centered_hitbox(sprite: &Rect, size: Vec2) -> Rect {
    Rect::new(
        sprite.x + (sprite.w - size.x) / 2.0,
        sprite.y + (sprite.h - size.y) / 2.0,
        size.x,
        size.y,
    )
}

/// Index of the first collider in `others` overlapping `hitbox`
///
/// Stops at the first hit; the remaining colliders are not examined.
pub fn first_hit<'a, I>(hitbox: &Rect, others: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Rect>,
{
    others.into_iter().position(|r| hitbox.intersects(r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hitbox_centered_in_sprite() {
        let sprite = Rect::new(100.0, 100.0, 50.0, 50.0);
        let hitbox = centered_hitbox(&sprite, Vec2::splat(30.0));
        assert_eq!(hitbox, Rect::new(110.0, 110.0, 30.0, 30.0));
        assert_eq!(hitbox.center(), sprite.center());
    }

    #[test]
    fn test_overlapping_obstacle_hits() {
        let hitbox = Rect::new(110.0, 110.0, 30.0, 30.0);
        let obstacle = Rect::new(105.0, 105.0, 40.0, 40.0);
        assert!(hitbox.intersects(&obstacle));
    }

    #[test]
    fn test_touching_edges_do_not_hit() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_empty_rect_never_hits() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let empty = Rect::new(5.0, 5.0, 0.0, 4.0);
        assert!(!a.intersects(&empty));
        assert!(!empty.intersects(&a));
    }

    #[test]
    fn test_sprite_overlap_but_hitbox_miss() {
        // Corner graze that touches the sprite but not the shrunk hitbox
        let sprite = Rect::new(100.0, 100.0, 50.0, 50.0);
        let hitbox = centered_hitbox(&sprite, Vec2::splat(30.0));
        let obstacle = Rect::new(65.0, 65.0, 40.0, 40.0);
        assert!(sprite.intersects(&obstacle));
        assert!(!hitbox.intersects(&obstacle));
    }

    #[test]
    fn test_clamp_within_bounds() {
        let bounds = Rect::new(0.0, 0.0, 448.0, 750.0);
        let mut r = Rect::new(-20.0, 740.0, 50.0, 50.0);
        r.clamp_within(&bounds);
        assert_eq!(r, Rect::new(0.0, 700.0, 50.0, 50.0));

        let mut r = Rect::new(430.0, -5.0, 50.0, 50.0);
        r.clamp_within(&bounds);
        assert_eq!(r, Rect::new(398.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn test_first_hit_stops_early() {
        let hitbox = Rect::new(0.0, 0.0, 10.0, 10.0);
        let others = [
            Rect::new(50.0, 50.0, 5.0, 5.0),
            Rect::new(5.0, 5.0, 5.0, 5.0),
            Rect::new(1.0, 1.0, 5.0, 5.0),
        ];
        assert_eq!(first_hit(&hitbox, &others), Some(1));
        assert_eq!(first_hit(&hitbox, &others[..1]), None);
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (-100.0f32..600.0, -100.0f32..800.0, 0.0f32..80.0, 0.0f32..80.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_intersection_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn prop_clamped_rect_stays_on_screen(r in arb_rect()) {
            let bounds = Rect::new(0.0, 0.0, 448.0, 750.0);
            let mut r = r;
            r.clamp_within(&bounds);
            prop_assert!(r.x >= 0.0 && r.x + r.w <= 448.0 + 1e-3);
            prop_assert!(r.y >= 0.0 && r.y + r.h <= 750.0 + 1e-3);
        }
    }
}
