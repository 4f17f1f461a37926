//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting)
//! - `playlist`: The track list
//! - `progress`: Progress gauge, time label and mode flags
//! - `overlays`: Modal overlays (error, prompt, help, toast)

mod utils;
mod playlist;
mod progress;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::AppModel;

pub use utils::format_duration;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, model: &AppModel) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Playlist
                Constraint::Length(3), // Progress bar with playback info
            ])
            .split(frame.area());

        playlist::render_playlist(frame, chunks[0], model);
        progress::render_progress_bar(frame, chunks[1], model);

        if let Some(toast) = &model.ui.toast {
            overlays::render_toast(frame, &toast.message);
        }

        if let Some(prompt) = &model.ui.prompt {
            overlays::render_prompt(frame, prompt);
        }

        if model.ui.show_help_popup {
            overlays::render_help_popup(frame);
        }

        if model.ui.error_message.is_some() {
            overlays::render_error_notification(frame, &model.ui);
        }
    }
}
