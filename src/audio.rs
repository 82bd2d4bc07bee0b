//! Sound triggers
//!
//! The engine only says *that* something should be heard. `AudioManager`
//! applies mute and volume and queues the effect for the host's audio backend.

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Any collision: enemy shot down, enemy breach, enemy rams the player
    Hit,
}

pub trait AudioTrigger {
    fn play_hit(&mut self);
    fn is_muted(&self) -> bool;
    fn toggle_mute(&mut self);
}

/// An effect waiting for the backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueuedSound {
    pub effect: SoundEffect,
    /// Gain in 0.0..=1.0
    pub volume: f32,
}

/// Mute-aware effect queue drained by the host each frame
#[derive(Debug, Clone)]
pub struct AudioManager {
    volume: f32,
    muted: bool,
    pending: Vec<QueuedSound>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AudioManager {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            volume: settings.volume.clamp(0.0, 1.0),
            muted: settings.muted,
            pending: Vec::new(),
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Queue `effect` unless muted or silent
    pub fn play(&mut self, effect: SoundEffect) {
        if self.muted || self.volume <= 0.0 {
            return;
        }
        self.pending.push(QueuedSound {
            effect,
            volume: self.volume,
        });
    }

    /// Hand queued effects to the backend
    pub fn drain(&mut self) -> Vec<QueuedSound> {
        std::mem::take(&mut self.pending)
    }
}

impl AudioTrigger for AudioManager {
    fn play_hit(&mut self) {
        self.play(SoundEffect::Hit);
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        log::info!("Audio {}", if self.muted { "muted" } else { "unmuted" });
    }
}
