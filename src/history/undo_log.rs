use super::{Action, ActionKind};
use crate::model::Playlist;

/// Outcome of one undo or redo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replayed {
    /// The action moved to the other stack
    pub action: Action,

    /// False when the replay found nothing to remove in the playlist
    pub applied: bool,
}

/// Linear undo/redo history of playlist mutations
///
/// Recording a new action discards any redo history. Replays go through
/// the playlist's own title-keyed operations, so with duplicate titles an
/// undone add removes the first matching song, and an undone remove
/// re-appends at the end rather than at the original position.
#[derive(Debug, Default)]
pub struct UndoLog {
    undo_stack: Vec<Action>,
    redo_stack: Vec<Action>,
}

impl UndoLog {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a mutation that was just applied to the playlist
    pub fn record(&mut self, action: Action) {
        log::debug!("Recording {}", action);
        self.undo_stack.push(action);
        self.redo_stack.clear();
    }

    /// Reverse the most recent action
    ///
    /// Returns `None` if there was nothing to undo. The action moves to the
    /// redo stack even when its song was no longer in the playlist.
    pub fn undo(&mut self, playlist: &mut Playlist) -> Option<Replayed> {
        let action = self.undo_stack.pop()?;
        log::debug!("Undoing {}", action);

        let applied = match action.kind {
            ActionKind::Add => {
                let found = playlist.remove_by_title(&action.song.title).is_some();
                if !found {
                    log::warn!("Undo: '{}' no longer in playlist", action.song.title);
                }
                found
            }
            ActionKind::Remove => {
                playlist.add(action.song.clone());
                true
            }
        };

        self.redo_stack.push(action.clone());
        Some(Replayed { action, applied })
    }

    /// Reapply the most recently undone action
    ///
    /// Returns `None` if there was nothing to redo.
    pub fn redo(&mut self, playlist: &mut Playlist) -> Option<Replayed> {
        let action = self.redo_stack.pop()?;
        log::debug!("Redoing {}", action);

        let applied = match action.kind {
            ActionKind::Add => {
                playlist.add(action.song.clone());
                true
            }
            ActionKind::Remove => {
                let found = playlist.remove_by_title(&action.song.title).is_some();
                if !found {
                    log::warn!("Redo: '{}' no longer in playlist", action.song.title);
                }
                found
            }
        };

        self.undo_stack.push(action.clone());
        Some(Replayed { action, applied })
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Forget all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Song;

    fn add(playlist: &mut Playlist, log: &mut UndoLog, song: Song) {
        playlist.add(song.clone());
        log.record(Action::add(song));
    }

    fn titles(playlist: &Playlist) -> Vec<&str> {
        playlist.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_empty_log() {
        let mut playlist = Playlist::new();
        let mut log = UndoLog::new();

        assert!(log.undo(&mut playlist).is_none());
        assert!(log.redo(&mut playlist).is_none());
        assert!(!log.can_undo());
        assert!(!log.can_redo());
    }

    #[test]
    fn test_undo_add_then_redo() {
        let mut playlist = Playlist::new();
        let mut log = UndoLog::new();
        add(&mut playlist, &mut log, Song::new("A", "x", 3));
        add(&mut playlist, &mut log, Song::new("S", "y", 4));

        let undone = log.undo(&mut playlist).unwrap();
        assert_eq!(undone.action.kind, ActionKind::Add);
        assert!(undone.applied);
        assert!(playlist.find_by_title("s").is_none());

        log.redo(&mut playlist).unwrap();
        assert_eq!(titles(&playlist), vec!["A", "S"]);
    }

    #[test]
    fn test_undo_remove_reappends_at_end() {
        let mut playlist = Playlist::from_songs(vec![
            Song::new("First", "", 1),
            Song::new("Middle", "", 2),
            Song::new("Last", "", 3),
        ]);
        let mut log = UndoLog::new();

        let removed = playlist.remove_by_title("middle").unwrap();
        log.record(Action::remove(removed));
        assert_eq!(titles(&playlist), vec!["First", "Last"]);

        log.undo(&mut playlist).unwrap();
        assert_eq!(titles(&playlist), vec!["First", "Last", "Middle"]);

        log.redo(&mut playlist).unwrap();
        assert_eq!(titles(&playlist), vec!["First", "Last"]);
    }

    #[test]
    fn test_record_clears_redo() {
        let mut playlist = Playlist::new();
        let mut log = UndoLog::new();
        add(&mut playlist, &mut log, Song::new("A", "", 3));

        log.undo(&mut playlist).unwrap();
        assert!(log.can_redo());

        add(&mut playlist, &mut log, Song::new("B", "", 2));
        assert!(!log.can_redo());
        assert!(log.redo(&mut playlist).is_none());
        assert_eq!(titles(&playlist), vec!["B"]);
    }

    #[test]
    fn test_lifo_order() {
        let mut playlist = Playlist::new();
        let mut log = UndoLog::new();
        add(&mut playlist, &mut log, Song::new("1", "", 1));
        add(&mut playlist, &mut log, Song::new("2", "", 2));
        add(&mut playlist, &mut log, Song::new("3", "", 3));

        assert_eq!(log.undo(&mut playlist).unwrap().action.song.title, "3");
        assert_eq!(log.undo(&mut playlist).unwrap().action.song.title, "2");
        assert_eq!(log.undo_len(), 1);
        assert_eq!(log.redo_len(), 2);

        assert_eq!(log.redo(&mut playlist).unwrap().action.song.title, "2");
        assert_eq!(titles(&playlist), vec!["1", "2"]);
    }

    #[test]
    fn test_undo_add_with_duplicate_titles_hits_first_match() {
        let mut playlist = Playlist::new();
        let mut log = UndoLog::new();
        add(&mut playlist, &mut log, Song::new("Dup", "older", 2));
        add(&mut playlist, &mut log, Song::new("Dup", "newer", 5));

        log.undo(&mut playlist).unwrap();
        assert_eq!(playlist.len(), 1);
        assert_eq!(playlist.songs()[0].artist, "newer");
    }

    #[test]
    fn test_cycles_indefinitely() {
        let mut playlist = Playlist::new();
        let mut log = UndoLog::new();
        add(&mut playlist, &mut log, Song::new("A", "", 3));

        for _ in 0..3 {
            log.undo(&mut playlist).unwrap();
            assert!(playlist.is_empty());
            log.redo(&mut playlist).unwrap();
            assert_eq!(playlist.len(), 1);
        }
    }

    #[test]
    fn test_undo_of_missing_song_is_reported() {
        let mut playlist = Playlist::new();
        let mut log = UndoLog::new();
        add(&mut playlist, &mut log, Song::new("Gone", "x", 3));
        playlist.remove_by_title("gone");

        let undone = log.undo(&mut playlist).unwrap();
        assert!(!undone.applied);
        assert_eq!(undone.action.song.title, "Gone");
        assert_eq!(log.redo_len(), 1);

        // Redo re-adds regardless
        assert!(log.redo(&mut playlist).unwrap().applied);
        assert_eq!(titles(&playlist), vec!["Gone"]);
    }
}
