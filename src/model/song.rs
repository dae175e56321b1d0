use thiserror::Error;

/// Lowest rating accepted by [`Song::rated`]
pub const MIN_RATING: i32 = 1;

/// Highest rating accepted by [`Song::rated`]
pub const MAX_RATING: i32 = 5;

/// Errors raised while constructing a validated song
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SongError {
    #[error("rating {0} is out of range (1-5)")]
    InvalidRating(i32),
}

/// A single song in the playlist
///
/// Songs carry no identity of their own: lookups compare titles
/// case-insensitively, so two songs with the same title are
/// indistinguishable to removal and undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Star rating, nominally 1 to 5 (not enforced by [`Song::new`])
    pub rating: i32,
}

impl Song {
    /// Create a song without validating the rating
    pub fn new(title: impl Into<String>, artist: impl Into<String>, rating: i32) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            rating,
        }
    }

    /// Create a song, rejecting ratings outside 1-5
    pub fn rated(
        title: impl Into<String>,
        artist: impl Into<String>,
        rating: i32,
    ) -> Result<Self, SongError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(SongError::InvalidRating(rating));
        }
        Ok(Self::new(title, artist, rating))
    }

    /// Case-insensitive exact title comparison
    pub fn matches_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Case-insensitive substring test against the title
    pub fn title_contains(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rated_accepts_range() {
        for rating in MIN_RATING..=MAX_RATING {
            assert!(Song::rated("T", "A", rating).is_ok());
        }
    }

    #[test]
    fn test_rated_rejects_out_of_range() {
        assert_eq!(Song::rated("T", "A", 0), Err(SongError::InvalidRating(0)));
        assert_eq!(Song::rated("T", "A", 6), Err(SongError::InvalidRating(6)));
    }

    #[test]
    fn test_new_keeps_any_rating() {
        let song = Song::new("T", "A", 42);
        assert_eq!(song.rating, 42);
    }

    #[test]
    fn test_title_matching_ignores_case() {
        let song = Song::new("Bohemian Rhapsody", "Queen", 5);
        assert!(song.matches_title("bohemian RHAPSODY"));
        assert!(!song.matches_title("bohemian"));
        assert!(song.title_contains("RHAP"));
        assert!(!song.title_contains("queen"));
    }
}
