//! Sound effect triggers
//!
//! The core never touches an audio device. It fires effects into a
//! [`SoundSink`]; the presentation layer decides how (and whether) to play them.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// An obstacle crossed the bottom edge
    Score,
    /// The avatar hit an obstacle
    Crash,
    /// Costume changed in the selector
    Select,
}

/// Fire-and-forget sound trigger
pub trait SoundSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every trigger
impl SoundSink for () {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Records triggers in order
impl SoundSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect) {
        self.push(effect);
    }
}

/// A queued trigger with the volume it should play at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueuedSound {
    pub effect: SoundEffect,
    pub volume: f32,
}

/// Audio manager for the game
///
/// Applies the volume/mute policy and queues triggers until the
/// presentation layer drains them once per frame.
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    queue: Vec<QueuedSound>,
    played: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            queue: Vec::new(),
            played: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Take every trigger queued since the last drain
    pub fn drain(&mut self) -> Vec<QueuedSound> {
        std::mem::take(&mut self.queue)
    }

    /// Number of triggers accepted (audible) so far
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl SoundSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let volume = self.effective_volume();
        if volume <= 0.0 {
            return;
        }
        log::trace!("sfx {:?} at {:.2}", effect, volume);
        self.queue.push(QueuedSound { effect, volume });
        self.played += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_and_drain() {
        let mut audio = AudioManager::new();
        audio.play(SoundEffect::Score);
        audio.play(SoundEffect::Crash);

        let drained = audio.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].effect, SoundEffect::Score);
        assert!((drained[0].volume - 0.8).abs() < 1e-6);
        assert!(audio.drain().is_empty());
        assert_eq!(audio.played(), 2);
    }

    #[test]
    fn test_muted_drops_triggers() {
        let mut audio = AudioManager::new();
        audio.set_muted(true);
        audio.play(SoundEffect::Score);
        assert!(audio.drain().is_empty());
        assert_eq!(audio.played(), 0);
    }

    #[test]
    fn test_volume_clamped() {
        let mut audio = AudioManager::new();
        audio.set_master_volume(2.0);
        audio.set_sfx_volume(-1.0);
        assert_eq!(audio.effective_volume(), 0.0);
        audio.set_sfx_volume(0.5);
        assert!((audio.effective_volume() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            master_volume: 0.5,
            sfx_volume: 0.5,
            ..Settings::default()
        };
        let audio = AudioManager::from_settings(&settings);
        assert!((audio.effective_volume() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_vec_sink_records_order() {
        let mut sink: Vec<SoundEffect> = Vec::new();
        sink.play(SoundEffect::Select);
        sink.play(SoundEffect::Score);
        assert_eq!(sink, vec![SoundEffect::Select, SoundEffect::Score]);
    }
}
