//! Scrolling background
//!
//! Purely cosmetic. The offset wraps modulo the texture height and the
//! renderer draws two tiles, one at the offset and one a texture-height above.

use serde::{Deserialize, Serialize};

use crate::consts::SCROLL_SPEED;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollingSurface {
    scroll_y: f32,
    /// Pixels per second
    scroll_speed: f32,
    texture_height: f32,
}

impl ScrollingSurface {
    pub fn new(texture_height: f32) -> Self {
        Self {
            scroll_y: 0.0,
            scroll_speed: SCROLL_SPEED,
            texture_height: texture_height.max(0.0),
        }
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn texture_height(&self) -> f32 {
        self.texture_height
    }

    pub fn set_scroll_speed(&mut self, speed: f32) {
        self.scroll_speed = speed;
    }

    /// Swap in a texture of a new height; scrolling restarts from the top
    pub fn set_texture_height(&mut self, height: f32) {
        self.texture_height = height.max(0.0);
        self.scroll_y = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        // Nothing to scroll without a texture
        if self.texture_height <= 0.0 {
            self.scroll_y = 0.0;
            return;
        }
        self.scroll_y = (self.scroll_y + self.scroll_speed * dt).rem_euclid(self.texture_height);
        // rem_euclid can round up to the modulus itself
        if self.scroll_y >= self.texture_height {
            self.scroll_y = 0.0;
        }
    }

    /// Vertical draw offsets of the two tiles
    pub fn tiles(&self) -> [f32; 2] {
        [self.scroll_y, self.scroll_y - self.texture_height]
    }

    pub fn reset(&mut self) {
        self.scroll_y = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_wraps() {
        let mut bg = ScrollingSurface::new(100.0);
        bg.update(1.0);
        assert_eq!(bg.scroll_y(), 50.0);
        bg.update(1.5);
        assert_eq!(bg.scroll_y(), 25.0);
        assert_eq!(bg.tiles(), [25.0, -75.0]);
    }

    #[test]
    fn test_zero_height_does_not_scroll() {
        let mut bg = ScrollingSurface::new(0.0);
        bg.update(3.0);
        assert_eq!(bg.scroll_y(), 0.0);
    }

    #[test]
    fn test_new_texture_resets_scroll() {
        let mut bg = ScrollingSurface::new(750.0);
        bg.update(2.0);
        assert!(bg.scroll_y() > 0.0);
        bg.set_texture_height(1500.0);
        assert_eq!(bg.scroll_y(), 0.0);
        assert_eq!(bg.texture_height(), 1500.0);
    }

    #[test]
    fn test_tiny_reverse_step_stays_below_height() {
        let mut bg = ScrollingSurface::new(100.0);
        bg.set_scroll_speed(-1e-7);
        bg.update(1.0);
        assert!(bg.scroll_y() >= 0.0 && bg.scroll_y() < 100.0);
        assert_eq!(bg.tiles()[1], bg.scroll_y() - 100.0);
    }

    #[test]
    fn test_reverse_scroll_stays_in_range() {
        let mut bg = ScrollingSurface::new(100.0);
        bg.set_scroll_speed(-30.0);
        bg.update(1.0);
        assert_eq!(bg.scroll_y(), 70.0);
    }
}
