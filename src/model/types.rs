//! Core type definitions for the application

use std::path::PathBuf;
use std::time::Instant;

const FILE_URL_PREFIX: &str = "file://";

/// Reference to a playable resource, kept exactly as it was added
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    location: String,
}

impl Track {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(path.into().to_string_lossy().into_owned())
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Filesystem path behind the locator. `file://` URLs are unescaped.
    pub fn path(&self) -> PathBuf {
        match self.location.strip_prefix(FILE_URL_PREFIX) {
            Some(rest) => PathBuf::from(decode_component(rest)),
            None => PathBuf::from(&self.location),
        }
    }

    pub fn file_name(&self) -> String {
        self.path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.location.clone())
    }

    pub fn title(&self, full_path: bool) -> String {
        if full_path {
            self.location.clone()
        } else {
            self.file_name()
        }
    }
}

fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Repeat mode state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RepeatMode {
    #[default]
    Off,
    One,
    All,
}

impl RepeatMode {
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RepeatMode::Off => "Off",
            RepeatMode::One => "One",
            RepeatMode::All => "All",
        }
    }
}

/// What the path prompt will do with the entered path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    AddFiles,
    OpenPlaylist,
    SavePlaylist,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::AddFiles => " Add file or folder ",
            PromptKind::OpenPlaylist => " Open playlist ",
            PromptKind::SavePlaylist => " Save playlist as ",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub show_full_path: bool,
    pub cursor: usize,
    pub prompt: Option<Prompt>,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    pub toast: Option<Toast>,
    pub show_help_popup: bool,
    pub should_quit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_urls_resolve_to_unescaped_paths() {
        let track = Track::new("file:///Users/me/Music/My%20Song.mp3");
        assert_eq!(track.path(), PathBuf::from("/Users/me/Music/My Song.mp3"));
        assert_eq!(track.title(false), "My Song.mp3");
        assert_eq!(track.title(true), "file:///Users/me/Music/My%20Song.mp3");
    }

    #[test]
    fn plain_paths_are_kept_verbatim() {
        let track = Track::from_path("/music/a b.flac");
        assert_eq!(track.location(), "/music/a b.flac");
        assert_eq!(track.path(), PathBuf::from("/music/a b.flac"));
        assert_eq!(track.file_name(), "a b.flac");
    }

    #[test]
    fn repeat_cycles_through_all_modes() {
        assert_eq!(RepeatMode::Off.cycle(), RepeatMode::All);
        assert_eq!(RepeatMode::All.cycle(), RepeatMode::One);
        assert_eq!(RepeatMode::One.cycle(), RepeatMode::Off);
    }
}
