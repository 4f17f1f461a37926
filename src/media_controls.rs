//! OS media controls bridge (MPRIS/SMTC/Now Playing).
//!
//! Media keys arrive as [`AppEvent::MediaKey`] on the event loop. Track
//! starts and transport changes are published back through [`Notifier`].

use std::time::Duration;

use souvlaki::{MediaControlEvent, MediaControls, MediaMetadata, MediaPlayback, MediaPosition, PlatformConfig};
use tokio::sync::mpsc::UnboundedSender;

use crate::event::{AppEvent, MediaKey};

const MEDIA_CONTROLS_DISPLAY_NAME: &str = "Cadence";
const MEDIA_CONTROLS_DBUS_NAME: &str = "cadence";

/// Receives the now-playing side effects of the controller
pub trait Notifier {
    fn now_playing(&mut self, title: &str, duration: Duration);

    fn playback_changed(&mut self, is_playing: bool, elapsed: Duration);

    fn stopped(&mut self);
}

/// Handles OS media control events and publishes playback state.
pub struct MediaControlsManager {
    controls: Option<MediaControls>,
}

impl MediaControlsManager {
    pub fn new(events: UnboundedSender<AppEvent>) -> Self {
        Self {
            controls: Self::create_controls(events),
        }
    }

    /// A manager that publishes nothing
    pub fn disabled() -> Self {
        Self { controls: None }
    }

    #[cfg(not(target_os = "windows"))]
    fn create_controls(events: UnboundedSender<AppEvent>) -> Option<MediaControls> {
        let mut controls = match MediaControls::new(PlatformConfig {
            display_name: MEDIA_CONTROLS_DISPLAY_NAME,
            dbus_name: MEDIA_CONTROLS_DBUS_NAME,
            hwnd: None,
        }) {
            Ok(controls) => controls,
            Err(err) => {
                tracing::warn!(error = ?err, "Failed to create media controls backend");
                return None;
            }
        };

        if let Err(err) = controls.attach(move |event| {
            if let Some(key) = map_control_event(event) {
                let _ = events.send(AppEvent::MediaKey(key));
            }
        }) {
            tracing::warn!(error = ?err, "Failed to attach media controls handler");
            return None;
        }

        tracing::info!("Media controls attached");
        Some(controls)
    }

    #[cfg(target_os = "windows")]
    fn create_controls(_events: UnboundedSender<AppEvent>) -> Option<MediaControls> {
        // Souvlaki needs a window handle on Windows and a terminal has none.
        tracing::warn!("Media controls are unavailable on Windows terminals");
        None
    }

    fn publish_playback(&mut self, playback: MediaPlayback) {
        if let Some(controls) = self.controls.as_mut() {
            if let Err(err) = controls.set_playback(playback) {
                tracing::debug!(error = ?err, "Failed to publish playback state");
            }
        }
    }
}

impl Notifier for MediaControlsManager {
    fn now_playing(&mut self, title: &str, duration: Duration) {
        if let Some(controls) = self.controls.as_mut() {
            let metadata = MediaMetadata {
                title: Some(title),
                artist: None,
                album: None,
                cover_url: None,
                duration: (!duration.is_zero()).then_some(duration),
            };
            if let Err(err) = controls.set_metadata(metadata) {
                tracing::debug!(error = ?err, "Failed to publish track metadata");
            }
        }
        self.publish_playback(MediaPlayback::Playing {
            progress: Some(MediaPosition(Duration::ZERO)),
        });
    }

    fn playback_changed(&mut self, is_playing: bool, elapsed: Duration) {
        let progress = Some(MediaPosition(elapsed));
        let playback = if is_playing {
            MediaPlayback::Playing { progress }
        } else {
            MediaPlayback::Paused { progress }
        };
        self.publish_playback(playback);
    }

    fn stopped(&mut self) {
        self.publish_playback(MediaPlayback::Stopped);
    }
}

fn map_control_event(event: MediaControlEvent) -> Option<MediaKey> {
    match event {
        MediaControlEvent::Toggle => Some(MediaKey::PlayPause),
        MediaControlEvent::Play => Some(MediaKey::Play),
        MediaControlEvent::Pause => Some(MediaKey::Pause),
        MediaControlEvent::Next => Some(MediaKey::Next),
        MediaControlEvent::Previous => Some(MediaKey::Previous),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_events_map_to_media_keys() {
        assert_eq!(map_control_event(MediaControlEvent::Toggle), Some(MediaKey::PlayPause));
        assert_eq!(map_control_event(MediaControlEvent::Next), Some(MediaKey::Next));
        assert_eq!(map_control_event(MediaControlEvent::Previous), Some(MediaKey::Previous));
        assert_eq!(map_control_event(MediaControlEvent::Raise), None);
    }
}
