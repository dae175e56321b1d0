//! In-memory song collections
//!
//! The ordered playlist and the priority view are populated independently
//! and never kept in sync with each other.

mod playlist;
mod priority;
mod song;

pub use playlist::Playlist;
pub use priority::PriorityView;
pub use song::{Song, SongError, MAX_RATING, MIN_RATING};
