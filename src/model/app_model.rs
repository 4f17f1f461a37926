//! Main application model with state management

use std::time::{Duration, Instant};

use super::playback::PlaybackState;
use super::playlist::Playlist;
use super::types::{Prompt, PromptKind, Toast, UiState};

const ERROR_TTL: Duration = Duration::from_secs(5);
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Main application model containing all state
#[derive(Clone, Debug, Default)]
pub struct AppModel {
    pub playlist: Playlist,
    pub playback: PlaybackState,
    pub ui: UiState,
}

impl AppModel {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn current_index(&self) -> Option<usize> {
        self.playback.current_index
    }

    /// Changes the selection; the list cursor follows it.
    pub fn set_current(&mut self, index: Option<usize>) {
        self.playback.current_index = index;
        if let Some(index) = index {
            self.ui.cursor = index;
        }
        self.clamp_cursor();
    }

    pub fn clamp_cursor(&mut self) {
        self.ui.cursor = self.ui.cursor.min(self.playlist.len().saturating_sub(1));
    }

    pub fn move_cursor_up(&mut self) {
        self.ui.cursor = self.ui.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.ui.cursor + 1 < self.playlist.len() {
            self.ui.cursor += 1;
        }
    }

    pub fn now_playing_title(&self) -> Option<String> {
        let index = self.playback.current_index?;
        self.playlist
            .get(index)
            .map(|track| track.title(self.ui.show_full_path))
    }

    // ========================================================================
    // Messages
    // ========================================================================

    pub fn set_error(&mut self, message: String) {
        self.ui.error_message = Some(message);
        self.ui.error_timestamp = Some(Instant::now());
    }

    pub fn clear_error(&mut self) {
        self.ui.error_message = None;
        self.ui.error_timestamp = None;
    }

    pub fn has_error(&self) -> bool {
        self.ui.error_message.is_some()
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.toast = Some(Toast {
            message,
            shown_at: Instant::now(),
        });
    }

    pub fn auto_clear_messages(&mut self) {
        if self
            .ui
            .error_timestamp
            .is_some_and(|shown| shown.elapsed() > ERROR_TTL)
        {
            self.clear_error();
        }
        if self
            .ui
            .toast
            .as_ref()
            .is_some_and(|toast| toast.shown_at.elapsed() > TOAST_TTL)
        {
            self.ui.toast = None;
        }
    }

    // ========================================================================
    // Overlays
    // ========================================================================

    pub fn open_prompt(&mut self, kind: PromptKind) {
        self.ui.prompt = Some(Prompt {
            kind,
            input: String::new(),
        });
    }

    pub fn close_prompt(&mut self) -> Option<Prompt> {
        self.ui.prompt.take()
    }

    pub fn is_prompt_open(&self) -> bool {
        self.ui.prompt.is_some()
    }

    pub fn show_help_popup(&mut self) {
        self.ui.show_help_popup = true;
    }

    pub fn hide_help_popup(&mut self) {
        self.ui.show_help_popup = false;
    }

    pub fn should_quit(&self) -> bool {
        self.ui.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.ui.should_quit = quit;
    }
}
