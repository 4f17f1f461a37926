//! Playback control methods

use std::time::Duration;

use crate::engine::{LoadedTrack, SoundEngine};
use crate::error::PlayerError;
use crate::model::{RepeatMode, Step, sequencer};

use super::AppController;

impl<E: SoundEngine> AppController<E> {
    fn require_loaded(&self) -> Result<LoadedTrack, PlayerError> {
        self.loaded.ok_or(PlayerError::NoActiveTrack)
    }

    /// Loads the selected track and starts it.
    pub fn play_current(&mut self) {
        let Some(index) = self.model.current_index() else {
            tracing::debug!("play_current without a selection");
            return;
        };
        let Some(track) = self.model.playlist.get(index).cloned() else {
            let err = PlayerError::InvalidIndex {
                index,
                len: self.model.playlist.len(),
            };
            tracing::debug!(error = %err, "play_current ignored");
            return;
        };

        match self.engine.load(&track) {
            Ok(loaded) => {
                tracing::info!(
                    index,
                    id = loaded.id,
                    location = %track.location(),
                    duration_ms = loaded.duration.as_millis() as u64,
                    "Track loaded"
                );
                self.loaded = Some(loaded);
                self.model.playback.total = loaded.duration;
                self.model.playback.elapsed = Duration::ZERO;
                self.model.playback.is_playing = false;
                self.toggle_play_pause();

                let title = track.title(self.model.ui.show_full_path);
                self.notifier.now_playing(&title, loaded.duration);
                self.model.show_toast(format!("Now playing: {}", title));
            }
            Err(source) => {
                let err = PlayerError::EngineLoad {
                    location: track.location().to_string(),
                    source,
                };
                tracing::warn!(index, error = %err, "Track failed to load");
                // The engine has already dropped whatever it had loaded
                self.loaded = None;
                self.timer.cancel();
                self.model.playback.is_playing = false;
                self.model.playback.elapsed = Duration::ZERO;
                self.model.set_error(err.to_string());
            }
        }
    }

    /// Halts whatever is loaded. Completion events for it are ignored afterwards.
    pub fn stop(&mut self) {
        let Some(loaded) = self.loaded.take() else {
            return;
        };

        self.timer.cancel();
        self.engine.stop();
        self.model.playback.is_playing = false;
        self.model.playback.elapsed = Duration::ZERO;
        self.notifier.stopped();
        tracing::debug!(id = loaded.id, "Playback stopped");
    }

    pub fn next(&mut self) {
        self.stop();
        if self.model.playlist.is_empty() {
            let err = PlayerError::EmptyPlaylist;
            tracing::debug!(error = %err, "next ignored");
            return;
        }

        let current = self.model.current_index();
        let step = if self.model.playback.shuffle {
            sequencer::next_shuffled(&mut self.model.playlist, current, &mut self.rng)
        } else {
            sequencer::next_sequential(
                self.model.playlist.len(),
                current,
                self.model.playback.repeat,
            )
        };

        tracing::debug!(?current, ?step, shuffle = self.model.playback.shuffle, "Advancing");
        self.apply_step(step);
    }

    pub fn prev(&mut self) {
        self.stop();
        if self.model.playlist.is_empty() {
            let err = PlayerError::EmptyPlaylist;
            tracing::debug!(error = %err, "prev ignored");
            return;
        }
        if self.model.playback.shuffle {
            return;
        }

        let step = sequencer::previous(self.model.playlist.len(), self.model.current_index());
        tracing::debug!(?step, "Stepping back");
        self.apply_step(step);
    }

    fn apply_step(&mut self, step: Step) {
        match step {
            Step::Play(index) => {
                self.model.set_current(Some(index));
                self.play_current();
            }
            Step::Park(index) => {
                self.model.set_current(Some(index));
                tracing::info!(index, "Reached the end of the playlist, idle");
            }
            Step::Exhausted => {
                self.model.set_current(None);
                tracing::info!("Playlist exhausted");
            }
        }
    }

    pub fn select_track(&mut self, index: usize) {
        let len = self.model.playlist.len();
        if index >= len {
            let err = PlayerError::InvalidIndex { index, len };
            tracing::debug!(error = %err, "select_track ignored");
            return;
        }

        self.stop();
        self.model.set_current(Some(index));
        self.play_current();
    }

    pub fn toggle_play_pause(&mut self) {
        if let Err(err) = self.require_loaded() {
            tracing::debug!(error = %err, "toggle_play_pause ignored");
            return;
        }

        if self.model.playback.is_playing {
            self.engine.pause();
            self.timer.cancel();
            self.model.playback.is_playing = false;
            self.model.playback.elapsed = self.clamped_elapsed();
        } else {
            if !self.engine.play() {
                self.engine.resume();
            }
            self.timer.start();
            self.model.playback.is_playing = true;
        }
        self.engine.set_volume(self.model.playback.volume);

        let is_playing = self.model.playback.is_playing;
        tracing::info!(action = if is_playing { "resumed" } else { "paused" }, "Playback toggled");
        self.notifier
            .playback_changed(is_playing, self.model.playback.elapsed);
    }

    /// Moves to `position` and always leaves the track playing.
    pub fn seek(&mut self, position: Duration) {
        if let Err(err) = self.require_loaded() {
            tracing::debug!(error = %err, "seek ignored");
            return;
        }

        let target = self.clamp_to_total(position);
        self.engine.pause();
        self.timer.cancel();
        self.engine.set_elapsed(target);
        self.timer.start();
        self.engine.resume();

        self.model.playback.elapsed = target;
        self.model.playback.is_playing = true;
        tracing::debug!(position_ms = target.as_millis() as u64, "Seeked");
        self.notifier.playback_changed(true, target);
    }

    /// Seeks to a fraction of the track, like dragging the progress slider.
    pub fn seek_fraction(&mut self, fraction: f64) {
        let total = self.model.playback.total;
        if total.is_zero() {
            tracing::debug!("seek_fraction ignored, track length unknown");
            return;
        }
        self.seek(total.mul_f64(fraction.clamp(0.0, 1.0)));
    }

    /// Jumps by a signed number of seconds without touching the transport state.
    pub fn skip_by(&mut self, seconds: i64) {
        if self.loaded.is_none() {
            return;
        }

        let elapsed = self.clamped_elapsed();
        let delta = Duration::from_secs(seconds.unsigned_abs());
        let target = if seconds < 0 {
            elapsed.saturating_sub(delta)
        } else {
            self.clamp_to_total(elapsed + delta)
        };

        self.engine.set_elapsed(target);
        self.model.playback.elapsed = target;
        tracing::debug!(seconds, position_ms = target.as_millis() as u64, "Skipped");
    }

    pub fn skip_forward(&mut self, long: bool) {
        self.skip_by(if long { self.long_skip_secs } else { self.short_skip_secs });
    }

    pub fn skip_backward(&mut self, long: bool) {
        self.skip_by(-(if long { self.long_skip_secs } else { self.short_skip_secs }));
    }

    pub fn set_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        self.model.playback.volume = volume;
        if self.loaded.is_some() {
            self.engine.set_volume(volume);
        }
        tracing::debug!(volume, "Volume set");
    }

    pub fn volume_up(&mut self) {
        self.set_volume(self.model.playback.volume + self.volume_step);
    }

    pub fn volume_down(&mut self) {
        self.set_volume(self.model.playback.volume - self.volume_step);
    }

    pub fn toggle_shuffle(&mut self) {
        self.model.playback.shuffle = !self.model.playback.shuffle;
        tracing::info!(shuffle = self.model.playback.shuffle, "Shuffle toggled");
    }

    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.model.playback.repeat = repeat;
        tracing::info!(repeat = repeat.label(), "Repeat mode set");
    }

    pub fn cycle_repeat(&mut self) {
        self.set_repeat(self.model.playback.repeat.cycle());
    }

    /// The engine reports the end of playback `id`. Stale ids are dropped.
    pub fn on_track_finished(&mut self, id: u64) {
        match self.loaded {
            Some(loaded) if loaded.id == id => {
                tracing::info!(id, "Track finished");
                self.next();
            }
            _ => tracing::debug!(id, "Ignoring completion for a track that is no longer loaded"),
        }
    }

    /// Reads the engine position and mirrors it into the model.
    pub fn on_tick(&mut self) {
        if self.loaded.is_some() {
            self.model.playback.elapsed = self.clamped_elapsed();
        }
    }

    fn clamped_elapsed(&self) -> Duration {
        self.clamp_to_total(self.engine.elapsed())
    }

    /// A zero total means the length is unknown, so there is no upper bound.
    fn clamp_to_total(&self, position: Duration) -> Duration {
        let total = self.model.playback.total;
        if total.is_zero() {
            position
        } else {
            position.min(total)
        }
    }
}
