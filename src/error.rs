//! Error types surfaced by the controller

use std::path::PathBuf;

use crate::engine::EngineError;

#[derive(thiserror::Error, Debug)]
pub enum PlayerError {
    #[error("track index {index} is out of range for a playlist of {len}")]
    InvalidIndex { index: usize, len: usize },

    #[error("no track is loaded")]
    NoActiveTrack,

    #[error("could not play {location}: {source}")]
    EngineLoad {
        location: String,
        #[source]
        source: EngineError,
    },

    #[error("playlist is empty")]
    EmptyPlaylist,

    #[error("playlist file {}: {source}", path.display())]
    PlaylistFile {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
