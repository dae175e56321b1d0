use super::Song;

/// Insertion-ordered song collection
///
/// Duplicate titles are allowed; title-keyed operations only ever touch
/// the first match in sequence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    songs: Vec<Song>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self { songs: Vec::new() }
    }

    /// Create a playlist holding `songs` in the given order
    pub fn from_songs(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    /// Append a song to the end of the playlist
    pub fn add(&mut self, song: Song) {
        log::debug!("Adding '{}' by {} to playlist", song.title, song.artist);
        self.songs.push(song);
    }

    /// Remove the first song whose title matches, ignoring case
    ///
    /// Returns the removed song, or `None` if nothing matched.
    pub fn remove_by_title(&mut self, title: &str) -> Option<Song> {
        let pos = self.songs.iter().position(|s| s.matches_title(title))?;
        let removed = self.songs.remove(pos);
        log::debug!("Removed '{}' from playlist", removed.title);
        Some(removed)
    }

    /// First song whose title matches, ignoring case
    pub fn find_by_title(&self, title: &str) -> Option<&Song> {
        self.songs.iter().find(|s| s.matches_title(title))
    }

    /// All songs whose title contains `query`, ignoring case
    pub fn search(&self, query: &str) -> Vec<&Song> {
        self.songs.iter().filter(|s| s.title_contains(query)).collect()
    }

    /// Sort in place by rating, highest first
    ///
    /// `sort_by` is stable, so equal ratings keep their relative order.
    pub fn sort_by_rating_desc(&mut self) {
        self.songs.sort_by(|a, b| b.rating.cmp(&a.rating));
    }

    /// Songs rated at least `threshold`, in current order
    pub fn with_min_rating(&self, threshold: i32) -> Vec<&Song> {
        self.songs.iter().filter(|s| s.rating >= threshold).collect()
    }

    /// All songs in current order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    /// Number of songs in this playlist
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(playlist: &Playlist) -> Vec<&str> {
        playlist.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_playlist_creation() {
        let playlist = Playlist::new();
        assert!(playlist.is_empty());
        assert_eq!(playlist.len(), 0);
    }

    #[test]
    fn test_add_appends() {
        let mut playlist = Playlist::new();
        playlist.add(Song::new("One", "A", 3));
        playlist.add(Song::new("Two", "B", 4));
        assert_eq!(titles(&playlist), vec!["One", "Two"]);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut playlist = Playlist::new();
        playlist.add(Song::new("X", "First", 1));
        playlist.add(Song::new("X", "Second", 2));

        let removed = playlist.remove_by_title("x").unwrap();
        assert_eq!(removed.artist, "First");
        assert_eq!(playlist.len(), 1);
        assert_eq!(playlist.songs()[0].artist, "Second");
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut playlist = Playlist::from_songs(vec![Song::new("Keep", "A", 3)]);
        assert!(playlist.remove_by_title("Gone").is_none());
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn test_find_by_title() {
        let playlist = Playlist::from_songs(vec![
            Song::new("Hello", "Adele", 4),
            Song::new("HELLO", "Lionel Richie", 3),
        ]);
        assert_eq!(playlist.find_by_title("hello").unwrap().artist, "Adele");
        assert!(playlist.find_by_title("hell").is_none());
    }

    #[test]
    fn test_find_empty_title_is_not_a_sentinel() {
        let playlist = Playlist::from_songs(vec![Song::new("", "Nobody", 2)]);
        assert_eq!(playlist.find_by_title("").unwrap().artist, "Nobody");
        assert!(Playlist::new().find_by_title("").is_none());
    }

    #[test]
    fn test_search_substring() {
        let playlist = Playlist::from_songs(vec![
            Song::new("Love Story", "Taylor Swift", 4),
            Song::new("Crazy in Love", "Beyonce", 5),
            Song::new("Yellow", "Coldplay", 3),
        ]);
        let found: Vec<_> = playlist.search("LOVE").into_iter().map(|s| s.title.as_str()).collect();
        assert_eq!(found, vec!["Love Story", "Crazy in Love"]);
        assert!(playlist.search("blue").is_empty());
    }

    #[test]
    fn test_sort_is_stable() {
        let mut playlist = Playlist::from_songs(vec![
            Song::new("a", "", 3),
            Song::new("b", "", 5),
            Song::new("c", "", 3),
            Song::new("d", "", 5),
        ]);
        playlist.sort_by_rating_desc();
        assert_eq!(titles(&playlist), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_with_min_rating_preserves_order() {
        let playlist = Playlist::from_songs(vec![
            Song::new("a", "", 2),
            Song::new("b", "", 5),
            Song::new("c", "", 3),
        ]);
        let picked: Vec<_> = playlist.with_min_rating(3).into_iter().map(|s| s.title.as_str()).collect();
        assert_eq!(picked, vec!["b", "c"]);
    }
}
