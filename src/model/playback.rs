//! Playback-related state

use std::time::Duration;

use super::types::RepeatMode;

/// Transport and mode state of the player
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    pub current_index: Option<usize>,
    pub is_playing: bool,
    pub shuffle: bool,
    pub repeat: RepeatMode,
    pub volume: f32,
    pub elapsed: Duration,
    pub total: Duration,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_index: None,
            is_playing: false,
            shuffle: false,
            repeat: RepeatMode::Off,
            volume: 1.0,
            elapsed: Duration::ZERO,
            total: Duration::ZERO,
        }
    }
}

impl PlaybackState {
    pub fn progress_ratio(&self) -> f64 {
        if self.total.is_zero() {
            0.0
        } else {
            (self.elapsed.as_secs_f64() / self.total.as_secs_f64()).clamp(0.0, 1.0)
        }
    }

    pub fn volume_percent(&self) -> u8 {
        (self.volume * 100.0).round() as u8
    }
}
