//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (tracks, repeat mode, UI state)
//! - `playback`: Transport and mode state
//! - `playlist`: The ordered track list and its file format
//! - `sequencer`: Pure functions choosing the next/previous track
//! - `app_model`: Main application model with state management methods

mod types;
mod playback;
mod playlist;
pub mod sequencer;
mod app_model;

// Re-export all public types for convenient access
pub use types::{Prompt, PromptKind, RepeatMode, Toast, Track, UiState};

pub use playback::PlaybackState;

pub use playlist::{Playlist, read_playlist_file, write_playlist_file};

pub use sequencer::Step;

pub use app_model::AppModel;
