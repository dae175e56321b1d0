//! Application context tying the collections, history and storage together

use super::config::ManagerConfig;
use crate::history::{Action, Replayed, UndoLog};
use crate::model::{Playlist, PriorityView, Song};
use crate::storage::{RecordStore, StorageError};

/// One run of the playlist manager
///
/// Owns the ordered playlist, the priority view and the undo history.
/// Mutations only change memory; callers persist the playlist with
/// [`Session::save`] after each mutating command.
pub struct Session<S: RecordStore> {
    config: ManagerConfig,
    store: S,
    playlist: Playlist,
    priority: PriorityView,
    history: UndoLog,
}

impl<S: RecordStore> Session<S> {
    /// Create an empty session without touching storage
    pub fn new(config: ManagerConfig, store: S) -> Self {
        Self {
            config,
            store,
            playlist: Playlist::new(),
            priority: PriorityView::new(),
            history: UndoLog::new(),
        }
    }

    /// Create a session and load both files
    ///
    /// A file that cannot be read leaves its collection empty.
    pub fn open(config: ManagerConfig, store: S) -> Self {
        let mut session = Self::new(config, store);
        session.load();
        session
    }

    /// Reload the playlist and the priority view from storage
    ///
    /// Undo history refers to the replaced playlist, so it is dropped.
    pub fn load(&mut self) {
        self.history.clear();

        let songs = self
            .store
            .load_records(&self.config.playlist_path)
            .unwrap_or_else(|e| {
                log::warn!("Could not load playlist: {}", e);
                Vec::new()
            });
        self.playlist = Playlist::from_songs(songs);

        let songs = self
            .store
            .load_records(&self.config.priority_path)
            .unwrap_or_else(|e| {
                log::warn!("Could not load priority queue: {}", e);
                Vec::new()
            });
        self.priority = PriorityView::new();
        self.priority.extend(songs);

        log::info!(
            "Session loaded: {} playlist songs, {} priority songs",
            self.playlist.len(),
            self.priority.len()
        );
    }

    /// Rewrite the playlist file from the current playlist
    pub fn save(&self) -> Result<(), StorageError> {
        self.store
            .save_records(&self.config.playlist_path, self.playlist.songs())
    }

    /// Append a song to the playlist and log it for undo
    pub fn add_song(&mut self, song: Song) {
        self.playlist.add(song.clone());
        self.history.record(Action::add(song));
    }

    /// Remove the first song matching `title` and log it for undo
    ///
    /// Nothing is logged when no song matches.
    pub fn remove_song(&mut self, title: &str) -> Option<Song> {
        let removed = self.playlist.remove_by_title(title)?;
        self.history.record(Action::remove(removed.clone()));
        Some(removed)
    }

    /// Sort the playlist by rating, highest first (not undoable)
    pub fn sort_by_rating(&mut self) {
        self.playlist.sort_by_rating_desc();
    }

    pub fn undo(&mut self) -> Option<Replayed> {
        self.history.undo(&mut self.playlist)
    }

    pub fn redo(&mut self) -> Option<Replayed> {
        self.history.redo(&mut self.playlist)
    }

    /// Add a song to the priority view and append it to the priority file
    ///
    /// The song stays in the view even if the append fails.
    pub fn add_to_priority(&mut self, song: Song) -> Result<(), StorageError> {
        self.priority.add(song.clone());
        self.store.append_record(&self.config.priority_path, &song)
    }

    pub fn search(&self, query: &str) -> Vec<&Song> {
        self.playlist.search(query)
    }

    pub fn with_min_rating(&self, threshold: i32) -> Vec<&Song> {
        self.playlist.with_min_rating(threshold)
    }

    /// Priority view, highest rating first
    pub fn top_songs(&self) -> Vec<Song> {
        self.priority.top_songs_desc()
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn priority(&self) -> &PriorityView {
        &self.priority
    }

    pub fn history(&self) -> &UndoLog {
        &self.history
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
