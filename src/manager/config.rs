//! Session configuration

use std::path::PathBuf;

/// Default playlist file, rewritten after every mutating command
pub const DEFAULT_PLAYLIST_FILE: &str = "PlayList.txt";

/// Default priority view file, appended to on every priority addition
pub const DEFAULT_PRIORITY_FILE: &str = "songs.txt";

/// Configuration for a playlist session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Ordered playlist file
    pub playlist_path: PathBuf,

    /// Priority view file
    pub priority_path: PathBuf,
}

impl ManagerConfig {
    /// Create a configuration using the default file names in `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            playlist_path: dir.join(DEFAULT_PLAYLIST_FILE),
            priority_path: dir.join(DEFAULT_PRIORITY_FILE),
        }
    }

    /// Set the playlist file
    pub fn with_playlist_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.playlist_path = path.into();
        self
    }

    /// Set the priority view file
    pub fn with_priority_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.priority_path = path.into();
        self
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            playlist_path: PathBuf::from(DEFAULT_PLAYLIST_FILE),
            priority_path: PathBuf::from(DEFAULT_PRIORITY_FILE),
        }
    }
}
