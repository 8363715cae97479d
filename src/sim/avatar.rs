//! Player avatar
//!
//! Position follows the pointer and is clamped to the play area. The sprite
//! cycles through its sheet frames on a fixed clock; the costume only changes
//! through explicit prev/next navigation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, centered_hitbox};
use crate::consts::*;

/// Display names, indexed by costume
pub const COSTUME_NAMES: [&str; COSTUME_COUNT] = ["Elf", "Wizard", "Knight"];

/// Play area bounds
pub const SCREEN_BOUNDS: Rect = Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    rect: Rect,
    costume: usize,
    frame: usize,
    /// Time accumulated toward the next frame (seconds)
    frame_timer: f32,
    /// Seconds per frame; non-positive freezes the animation
    animation_speed: f32,
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}

impl Avatar {
    /// Avatar at its start position near the bottom centre
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                SCREEN_WIDTH / 2.0 - AVATAR_SIZE / 2.0,
                SCREEN_HEIGHT - 100.0,
                AVATAR_SIZE,
                AVATAR_SIZE,
            ),
            costume: 0,
            frame: 0,
            frame_timer: 0.0,
            animation_speed: ANIMATION_SPEED,
        }
    }

    /// Full sprite rectangle
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Collision hitbox centred in the sprite
    pub fn hitbox(&self) -> Rect {
        centered_hitbox(&self.rect, Vec2::splat(HITBOX_SIZE))
    }

    /// Move the top-left corner, clamped to the screen
    ///
    /// Non-finite coordinates are ignored.
    pub fn set_position(&mut self, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.rect.x = x;
        self.rect.y = y;
        self.rect.clamp_within(&SCREEN_BOUNDS);
    }

    /// Centre the sprite on the pointer, clamped to the screen
    pub fn follow_pointer(&mut self, pointer: Vec2) {
        let top_left = pointer - self.rect.size() / 2.0;
        self.set_position(top_left.x, top_left.y);
    }

    pub fn set_size(&mut self, w: f32, h: f32) {
        self.rect.w = w.max(0.0);
        self.rect.h = h.max(0.0);
        self.rect.clamp_within(&SCREEN_BOUNDS);
    }

    pub fn set_animation_speed(&mut self, seconds_per_frame: f32) {
        self.animation_speed = seconds_per_frame;
    }

    /// Advance the animation clock
    ///
    /// At most one frame step per call; leftover time carries into the next call.
    pub fn update(&mut self, dt: f32) {
        if self.animation_speed <= 0.0 {
            return;
        }
        self.frame_timer += dt.max(0.0);
        if self.frame_timer >= self.animation_speed {
            self.frame_timer = (self.frame_timer - self.animation_speed).max(0.0);
            self.frame = (self.frame + 1) % FRAME_COUNT;
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn frame_timer(&self) -> f32 {
        self.frame_timer
    }

    /// Source rectangle of the current frame in a horizontal sprite sheet
    pub fn frame_source_rect(&self) -> Rect {
        Rect::new(
            self.frame as f32 * AVATAR_SIZE,
            0.0,
            AVATAR_SIZE,
            AVATAR_SIZE,
        )
    }

    pub fn costume(&self) -> usize {
        self.costume
    }

    pub fn costume_name(&self) -> &'static str {
        COSTUME_NAMES[self.costume % COSTUME_COUNT]
    }

    /// Select a costume (wrapped into range)
    pub fn set_costume(&mut self, costume: usize) {
        self.costume = costume % COSTUME_COUNT;
    }

    pub fn next_costume(&mut self) -> usize {
        self.costume = (self.costume + 1) % COSTUME_COUNT;
        self.costume
    }

    pub fn prev_costume(&mut self) -> usize {
        self.costume = (self.costume + COSTUME_COUNT - 1) % COSTUME_COUNT;
        self.costume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position() {
        let a = Avatar::new();
        assert_eq!(a.rect(), Rect::new(199.0, 650.0, 50.0, 50.0));
        assert_eq!(a.costume(), 0);
        assert_eq!(a.frame(), 0);
    }

    #[test]
    fn test_hitbox_centered() {
        let mut a = Avatar::new();
        a.set_position(100.0, 100.0);
        assert_eq!(a.hitbox(), Rect::new(110.0, 110.0, 30.0, 30.0));
    }

    #[test]
    fn test_pointer_follow_clamps() {
        let mut a = Avatar::new();
        a.follow_pointer(Vec2::new(200.0, 300.0));
        assert_eq!(a.rect().min(), Vec2::new(175.0, 275.0));

        a.follow_pointer(Vec2::new(-50.0, 10_000.0));
        assert_eq!(a.rect().min(), Vec2::new(0.0, SCREEN_HEIGHT - AVATAR_SIZE));

        a.follow_pointer(Vec2::new(10_000.0, -50.0));
        assert_eq!(a.rect().min(), Vec2::new(SCREEN_WIDTH - AVATAR_SIZE, 0.0));
    }

    #[test]
    fn test_animation_carries_remainder() {
        let mut a = Avatar::new();
        a.set_animation_speed(0.25);
        a.update(0.125);
        assert_eq!(a.frame(), 0);
        a.update(0.1875);
        assert_eq!(a.frame(), 1);
        assert_eq!(a.frame_timer(), 0.0625);
    }

    #[test]
    fn test_animation_wraps() {
        let mut a = Avatar::new();
        a.set_animation_speed(0.25);
        for _ in 0..FRAME_COUNT {
            a.update(0.25);
        }
        assert_eq!(a.frame(), 0);
        a.update(0.25);
        assert_eq!(a.frame(), 1);
        assert_eq!(a.frame_source_rect(), Rect::new(50.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn test_one_frame_step_per_update() {
        let mut a = Avatar::new();
        a.set_animation_speed(0.25);
        a.update(1.0);
        assert_eq!(a.frame(), 1);
        assert_eq!(a.frame_timer(), 0.75);
        a.update(0.0);
        assert_eq!(a.frame(), 2);
    }

    #[test]
    fn test_frozen_animation() {
        let mut a = Avatar::new();
        a.set_animation_speed(0.0);
        a.update(5.0);
        assert_eq!(a.frame(), 0);
        assert_eq!(a.frame_timer(), 0.0);
    }

    #[test]
    fn test_non_finite_pointer_ignored() {
        let mut a = Avatar::new();
        a.follow_pointer(Vec2::new(200.0, 300.0));
        a.follow_pointer(Vec2::new(f32::NAN, 300.0));
        a.follow_pointer(Vec2::new(100.0, f32::INFINITY));
        assert_eq!(a.rect().min(), Vec2::new(175.0, 275.0));
        let screen = Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);
        assert!(a.hitbox().intersects(&screen));
    }

    #[test]
    fn test_deserialized_costume_name_wraps() {
        let mut json = serde_json::to_value(Avatar::new()).unwrap();
        json["costume"] = serde_json::json!(5);
        let a: Avatar = serde_json::from_value(json).unwrap();
        assert_eq!(a.costume_name(), "Knight");
    }

    #[test]
    fn test_costume_wraps_both_ways() {
        let mut a = Avatar::new();
        assert_eq!(a.prev_costume(), COSTUME_COUNT - 1);
        assert_eq!(a.costume_name(), "Knight");
        assert_eq!(a.next_costume(), 0);
        assert_eq!(a.next_costume(), 1);
        assert_eq!(a.costume_name(), "Wizard");
        a.set_costume(5);
        assert_eq!(a.costume(), 2);
    }
}
