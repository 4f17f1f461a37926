//! Adding, loading, saving and clearing tracks

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::engine::SoundEngine;
use crate::error::PlayerError;
use crate::model::{Track, read_playlist_file, write_playlist_file};

use super::AppController;

impl<E: SoundEngine> AppController<E> {
    /// Appends tracks; the first track becomes the selection if there was none.
    pub fn load_tracks(&mut self, tracks: Vec<Track>) {
        let added = tracks.len();
        self.model.playlist.extend(tracks);

        if self.model.current_index().is_none() && !self.model.playlist.is_empty() {
            self.model.set_current(Some(0));
        }

        tracing::info!(added, total = self.model.playlist.len(), "Tracks loaded");
    }

    /// Adds a file, or every playable file directly inside a folder.
    pub fn add_path(&mut self, path: &Path) {
        match self.collect_playable(path) {
            Ok(tracks) if tracks.is_empty() => {
                tracing::warn!(path = %path.display(), "Nothing playable found");
                self.model
                    .set_error(format!("Nothing playable at {}", path.display()));
            }
            Ok(tracks) => self.load_tracks(tracks),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to add tracks");
                self.model.set_error(err.to_string());
            }
        }
    }

    fn collect_playable(&self, path: &Path) -> Result<Vec<Track>, PlayerError> {
        if !path.is_dir() {
            if self.engine.can_play(path) {
                return Ok(vec![Track::from_path(absolute(path))]);
            }
            tracing::warn!(path = %path.display(), "Skipping file the engine cannot play");
            return Ok(Vec::new());
        }

        let io_err = |source| PlayerError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut files: Vec<PathBuf> = fs::read_dir(path)
            .map_err(io_err)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| !p.is_dir())
            .collect();
        files.sort();

        Ok(files
            .into_iter()
            .filter(|file| self.engine.can_play(file))
            .map(|file| Track::from_path(absolute(&file)))
            .collect())
    }

    pub fn load_playlist(&mut self, path: &Path) {
        match read_playlist_file(path) {
            Ok(tracks) => {
                tracing::info!(path = %path.display(), entries = tracks.len(), "Playlist file read");
                self.load_tracks(tracks);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read playlist");
                self.model.set_error(err.to_string());
            }
        }
    }

    pub fn save_playlist(&mut self, path: &Path) {
        match write_playlist_file(path, self.model.playlist.tracks()) {
            Ok(()) => {
                tracing::info!(
                    path = %path.display(),
                    entries = self.model.playlist.len(),
                    "Playlist saved"
                );
                self.model
                    .show_toast(format!("Saved playlist to {}", path.display()));
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to save playlist");
                self.model.set_error(err.to_string());
            }
        }
    }

    /// Stops playback and forgets every track.
    pub fn clear(&mut self) {
        self.timer.cancel();
        self.stop();
        self.model.playlist.clear();
        self.model.set_current(None);
        self.model.playback.elapsed = Duration::ZERO;
        self.model.playback.total = Duration::ZERO;
        tracing::info!("Playlist cleared");
    }

    /// Bound to a key for parity with the file menu; it has no effect.
    pub fn unload_track(&mut self) {
        tracing::trace!("unload_track is a no-op");
    }

    pub fn toggle_full_path(&mut self) {
        self.model.ui.show_full_path = !self.model.ui.show_full_path;
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
