//! Playlist Manager - console playlist with undo/redo
//!
//! Keeps an insertion-ordered playlist and a separate rating-ordered
//! priority view, both persisted as flat `title,artist,rating` files.
//! Adds and removes on the playlist can be undone and redone for the
//! lifetime of a run.

pub mod cli;
pub mod history;
pub mod manager;
pub mod model;
pub mod storage;

pub use manager::{ManagerConfig, Session};
