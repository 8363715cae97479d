//! Skyfall Dodge - a falling-obstacle arcade game core
//!
//! Core modules:
//! - `sim`: Simulation (obstacles, difficulty, avatar, collisions, session state)
//! - `audio`: Sound effect triggers consumed by the presentation layer
//! - `settings`: Runtime configuration
//!
//! Rendering, windowing, fonts and asset loading belong to the presentation
//! layer. The core only hands out rectangles, variant indices and sound triggers.

pub mod audio;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, SoundEffect, SoundSink};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 448.0;
    pub const SCREEN_HEIGHT: f32 = 750.0;

    /// Maximum number of live obstacles
    pub const MAX_OBSTACLES: usize = 8;
    /// Obstacle edge length (obstacles are square)
    pub const OBSTACLE_SIZE: f32 = 40.0;
    /// Vertical gap between obstacles created in the same spawn batch
    pub const SPAWN_STAGGER: f32 = 150.0;
    /// Obstacles present right after a reset
    pub const INITIAL_OBSTACLES: usize = 3;

    /// Lowest speed tier an obstacle can be sampled at
    pub const MIN_SPEED_TIER: u32 = 2;
    /// Highest speed tier the difficulty curve reaches
    pub const MAX_SPEED: u32 = 25;
    /// Pixels per second per speed tier
    pub const SPEED_UNIT: f32 = 60.0;
    /// Score points per difficulty step
    pub const POINTS_PER_TIER: u32 = 10;

    /// Avatar sprite size
    pub const AVATAR_SIZE: f32 = 50.0;
    /// Collision hitbox, centred inside the avatar sprite
    pub const HITBOX_SIZE: f32 = 30.0;
    /// Seconds per animation frame
    pub const ANIMATION_SPEED: f32 = 0.1;
    /// Frames in each costume's sprite sheet
    pub const FRAME_COUNT: usize = 3;
    /// Number of selectable costumes
    pub const COSTUME_COUNT: usize = 3;

    /// Background scroll speed (pixels/s)
    pub const SCROLL_SPEED: f32 = 50.0;

    /// Score that ends the run in victory unless overridden by settings
    pub const DEFAULT_VICTORY_SCORE: u32 = 500;
    /// Largest delta-time a single tick integrates (seconds)
    pub const DEFAULT_MAX_TICK_DT: f32 = 1.0 / 30.0;
}
