//! Events delivered to the controller's event loop

/// Transport keys coming from the OS media session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKey {
    Previous,
    PlayPause,
    Next,
    Play,
    Pause,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    /// Progress poll from the running timer
    Tick,
    MediaKey(MediaKey),
}
