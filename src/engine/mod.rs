//! Sound engine seam
//!
//! The controller only talks to [`SoundEngine`]. Completion and runtime
//! failures come back as [`EngineEvent`] messages on the event loop instead
//! of callbacks, tagged with the playback id handed out by `load`.

mod decoder;
mod desktop;
mod output;

use std::path::Path;
use std::time::Duration;

use crate::model::Track;

pub use desktop::DesktopEngine;

/// File extensions the desktop engine is built to decode
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "aac", "aif", "aiff", "caf", "flac", "m4a", "mp3", "mp4", "oga", "ogg", "opus", "wav",
];

#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("cannot open file: {0}")]
    Open(#[from] std::io::Error),
    #[error("unrecognised format: {0}")]
    Probe(String),
    #[error("no supported audio track found")]
    NoTrack,
    #[error("unsupported codec")]
    UnsupportedCodec,
    #[error("decode error: {0}")]
    Decode(String),
    #[error("no output device available")]
    NoDevice,
    #[error("output device cannot play {channels} channel(s) at {sample_rate} Hz")]
    NoConfig { sample_rate: u32, channels: u16 },
    #[error("output stream error: {0}")]
    Stream(String),
}

/// A track the engine has opened
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadedTrack {
    pub id: u64,
    pub duration: Duration,
}

/// Messages from the engine to the event loop
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    Finished { id: u64 },
    Failed { id: u64, message: String },
}

pub trait SoundEngine {
    /// Whether the engine is able to open this file at all
    fn can_play(&self, path: &Path) -> bool;

    /// Opens `track`, replacing whatever was loaded before. Does not start output.
    fn load(&mut self, track: &Track) -> Result<LoadedTrack, EngineError>;

    /// Starts the loaded track from its current position.
    /// Returns `false` when it had already been started.
    fn play(&mut self) -> bool;

    fn pause(&mut self);

    fn resume(&mut self);

    /// Halts output and drops the loaded track. No event is sent for it afterwards.
    fn stop(&mut self);

    fn elapsed(&self) -> Duration;

    fn set_elapsed(&mut self, position: Duration);

    fn set_volume(&mut self, volume: f32);
}

pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_ignores_case() {
        assert!(has_supported_extension(Path::new("/m/a.MP3")));
        assert!(has_supported_extension(Path::new("song.flac")));
        assert!(!has_supported_extension(Path::new("cover.jpg")));
        assert!(!has_supported_extension(Path::new("README")));
    }
}
