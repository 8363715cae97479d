//! Simulation module
//!
//! All gameplay logic lives here:
//! - Delta-time driven, clamped at the tick boundary
//! - Injected RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod avatar;
pub mod background;
pub mod collision;
pub mod difficulty;
pub mod field;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod tick;

pub use avatar::{Avatar, COSTUME_NAMES};
pub use background::ScrollingSurface;
pub use collision::{Rect, centered_hitbox, first_hit};
pub use difficulty::speed_tier;
pub use field::ObstacleField;
pub use rng::{PcgSource, RandomSource};
pub use spawner::spawn_obstacles;
pub use state::{GamePhase, GameState, OBSTACLE_VARIANTS, Obstacle};
pub use tick::{TickInput, tick};
