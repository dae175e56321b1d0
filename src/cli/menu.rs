//! Numbered main menu

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid menu choice {0:?}")]
pub struct InvalidChoice(pub String);

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddSong,
    RemoveSong,
    Display,
    Search,
    Sort,
    Generate,
    Undo,
    Redo,
    AddToPriority,
    DisplayTop,
    Exit,
}

impl MenuChoice {
    /// Entries in the order they are listed
    pub const ALL: [MenuChoice; 11] = [
        MenuChoice::AddSong,
        MenuChoice::RemoveSong,
        MenuChoice::Display,
        MenuChoice::Search,
        MenuChoice::Sort,
        MenuChoice::Generate,
        MenuChoice::Undo,
        MenuChoice::Redo,
        MenuChoice::AddToPriority,
        MenuChoice::DisplayTop,
        MenuChoice::Exit,
    ];

    /// Number typed to select this entry
    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::AddSong => 1,
            MenuChoice::RemoveSong => 2,
            MenuChoice::Display => 3,
            MenuChoice::Search => 4,
            MenuChoice::Sort => 5,
            MenuChoice::Generate => 6,
            MenuChoice::Undo => 7,
            MenuChoice::Redo => 8,
            MenuChoice::AddToPriority => 9,
            MenuChoice::DisplayTop => 10,
            MenuChoice::Exit => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddSong => "Add song",
            MenuChoice::RemoveSong => "Remove song",
            MenuChoice::Display => "Display playlist",
            MenuChoice::Search => "Search song",
            MenuChoice::Sort => "Sort playlist by rating",
            MenuChoice::Generate => "Generate playlist by rating",
            MenuChoice::Undo => "Undo last action",
            MenuChoice::Redo => "Redo last undone action",
            MenuChoice::AddToPriority => "Add song to priority queue",
            MenuChoice::DisplayTop => "Display top songs in priority queue",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.number() == number)
    }
}

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(MenuChoice::from_number)
            .ok_or_else(|| InvalidChoice(s.to_string()))
    }
}
