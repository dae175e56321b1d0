use crate::model::Song;
use std::fmt;

/// Kind of playlist mutation that was logged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Add,
    Remove,
}

impl ActionKind {
    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::Add => "add",
            ActionKind::Remove => "remove",
        }
    }
}

/// A logged mutation, with a copy of the song it applied to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub song: Song,
}

impl Action {
    pub fn add(song: Song) -> Self {
        Self {
            kind: ActionKind::Add,
            song,
        }
    }

    pub fn remove(song: Song) -> Self {
        Self {
            kind: ActionKind::Remove,
            song,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind.name(), self.song.title)
    }
}
