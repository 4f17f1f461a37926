//! Ordered track list and its property-list file format

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PlayerError;
use super::types::Track;

#[derive(Clone, Debug, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn extend(&mut self, tracks: impl IntoIterator<Item = Track>) {
        self.tracks.extend(tracks);
    }

    pub fn remove(&mut self, index: usize) -> Option<Track> {
        if index < self.tracks.len() {
            Some(self.tracks.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    pub fn titles(&self, full_path: bool) -> Vec<String> {
        self.tracks.iter().map(|t| t.title(full_path)).collect()
    }

    pub fn locators(&self) -> Vec<String> {
        self.tracks.iter().map(|t| t.location().to_string()).collect()
    }
}

/// Read a playlist file: a property-list array of locator strings.
pub fn read_playlist_file(path: &Path) -> Result<Vec<Track>, PlayerError> {
    let locators: Vec<String> =
        plist::from_file(path).map_err(|source| PlayerError::PlaylistFile {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(locators.into_iter().map(Track::new).collect())
}

/// Write the locators as an XML property list, replacing `path`.
pub fn write_playlist_file(path: &Path, tracks: &[Track]) -> Result<(), PlayerError> {
    let locators: Vec<&str> = tracks.iter().map(|t| t.location()).collect();
    let staging = staging_path(path);

    plist::to_file_xml(&staging, &locators).map_err(|source| PlayerError::PlaylistFile {
        path: path.to_path_buf(),
        source,
    })?;

    fs::rename(&staging, path).map_err(|source| {
        let _ = fs::remove_file(&staging);
        PlayerError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(names: &[&str]) -> Playlist {
        let mut playlist = Playlist::new();
        playlist.extend(names.iter().map(|n| Track::new(format!("/music/{}.mp3", n))));
        playlist
    }

    #[test]
    fn remove_out_of_range_leaves_list_untouched() {
        let mut list = playlist(&["a", "b"]);
        assert!(list.remove(5).is_none());
        assert_eq!(list.len(), 2);
        assert_eq!(list.remove(0), Some(Track::new("/music/a.mp3")));
        assert_eq!(list.locators(), vec!["/music/b.mp3".to_string()]);
    }

    #[test]
    fn titles_follow_display_mode() {
        let list = playlist(&["a"]);
        assert_eq!(list.titles(false), vec!["a.mp3".to_string()]);
        assert_eq!(list.titles(true), vec!["/music/a.mp3".to_string()]);
    }

    #[test]
    fn duplicates_are_kept_in_insertion_order() {
        let list = playlist(&["a", "b", "a"]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(2), list.get(0));
    }

    #[test]
    fn staging_file_sits_next_to_target() {
        let staging = staging_path(Path::new("/tmp/mix.plist"));
        assert_eq!(staging, PathBuf::from("/tmp/mix.plist.tmp"));
    }
}
