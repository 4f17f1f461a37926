//! Timer ticks, media keys and engine messages

use crate::engine::{EngineEvent, SoundEngine};
use crate::event::{AppEvent, MediaKey};

use super::AppController;

impl<E: SoundEngine> AppController<E> {
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.on_tick(),
            AppEvent::MediaKey(key) => self.handle_media_key(key),
        }
    }

    pub fn handle_media_key(&mut self, key: MediaKey) {
        tracing::debug!(?key, "Media key");
        match key {
            MediaKey::Previous => self.prev(),
            MediaKey::PlayPause => self.toggle_play_pause(),
            MediaKey::Next => self.next(),
            MediaKey::Play => {
                if !self.model.playback.is_playing {
                    self.toggle_play_pause();
                }
            }
            MediaKey::Pause => {
                if self.model.playback.is_playing {
                    self.toggle_play_pause();
                }
            }
        }
    }

    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Finished { id } => self.on_track_finished(id),
            EngineEvent::Failed { id, message } => {
                if self.loaded.is_some_and(|loaded| loaded.id == id) {
                    tracing::error!(id, %message, "Playback failed");
                    self.stop();
                    self.model.set_error(format!("Playback failed: {}", message));
                }
            }
        }
    }

    /// Housekeeping run once per loop iteration.
    pub fn housekeeping(&mut self) {
        self.model.auto_clear_messages();
    }
}
