//! Undo/redo history for the ordered playlist
//!
//! Only adds and removes are logged. The priority view and sorting are
//! never part of the history, and the history is not persisted.

mod action;
mod undo_log;

pub use action::{Action, ActionKind};
pub use undo_log::{Replayed, UndoLog};
