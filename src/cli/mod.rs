//! Interactive text menu
//!
//! Reads commands through an [`InputProvider`] and writes to any
//! [`Write`], so a whole session can be scripted in tests.

pub mod display;
pub mod input;
pub mod menu;

pub use input::{read_lossy_line, InputProvider, ScriptedInput, StdinInput};
pub use menu::{InvalidChoice, MenuChoice};

use crate::history::{ActionKind, Replayed};
use crate::manager::Session;
use crate::model::Song;
use crate::storage::RecordStore;
use anyhow::Result;
use display::{rule, write_stamp, write_table};
use std::io::Write;

/// Drives a [`Session`] from line-based user input
pub struct Console<I: InputProvider, W: Write> {
    input: I,
    out: W,
}

impl<I: InputProvider, W: Write> Console<I, W> {
    pub fn new(input: I, out: W) -> Self {
        Self { input, out }
    }

    /// Hand back the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run<S: RecordStore>(&mut self, session: &mut Session<S>) -> Result<()> {
        self.write_banner()?;

        loop {
            self.write_menu()?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                log::debug!("Input closed, leaving menu");
                break;
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    log::debug!("{}", e);
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                    continue;
                }
            };

            if choice == MenuChoice::Exit {
                writeln!(self.out, "Exiting program.")?;
                write_stamp(&mut self.out)?;
                break;
            }

            if self.dispatch(choice, session)? {
                self.save(session)?;
            }
            write_stamp(&mut self.out)?;
        }

        self.out.flush()?;
        Ok(())
    }

    /// Run one command. Returns whether the playlist changed.
    fn dispatch<S: RecordStore>(
        &mut self,
        choice: MenuChoice,
        session: &mut Session<S>,
    ) -> Result<bool> {
        log::debug!("Menu choice: {}", choice.label());

        match choice {
            MenuChoice::AddSong => self.add_song(session),
            MenuChoice::RemoveSong => self.remove_song(session),
            MenuChoice::Display => {
                self.write_playlist(session)?;
                Ok(false)
            }
            MenuChoice::Search => {
                let Some(query) = self.prompt("Enter song title to search: ")? else {
                    return Ok(false);
                };
                self.write_search(session, &query)?;
                Ok(false)
            }
            MenuChoice::Sort => {
                session.sort_by_rating();
                writeln!(self.out, "Playlist sorted by rating (high to low).")?;
                self.write_playlist(session)?;
                Ok(true)
            }
            MenuChoice::Generate => {
                let Some(line) = self.prompt("Enter rating from (1-5): ")? else {
                    return Ok(false);
                };
                let Ok(threshold) = line.trim().parse::<i32>() else {
                    writeln!(self.out, "Invalid rating: {}", line.trim())?;
                    return Ok(false);
                };
                let heading = format!("Songs with rating >= {threshold}:");
                write_table(&mut self.out, &heading, session.with_min_rating(threshold))?;
                Ok(false)
            }
            MenuChoice::Undo => {
                let undone = session.undo();
                match &undone {
                    Some(Replayed { action, applied }) => match (action.kind, *applied) {
                        (ActionKind::Add, true) => writeln!(
                            self.out,
                            "Undid add: '{}' removed from the playlist.",
                            action.song.title
                        )?,
                        (ActionKind::Add, false) => writeln!(
                            self.out,
                            "Undid add: '{}' was no longer in the playlist.",
                            action.song.title
                        )?,
                        (ActionKind::Remove, _) => {
                            writeln!(self.out, "Restored song: {}", action.song.title)?
                        }
                    },
                    None => writeln!(self.out, "No actions to undo.")?,
                }
                self.write_playlist(session)?;
                Ok(undone.is_some_and(|r| r.applied))
            }
            MenuChoice::Redo => {
                let redone = session.redo();
                match &redone {
                    Some(Replayed { action, applied: true }) => {
                        writeln!(self.out, "Redid {}.", action)?;
                    }
                    Some(Replayed { action, applied: false }) => writeln!(
                        self.out,
                        "Redid {}: '{}' was no longer in the playlist.",
                        action.kind.name(),
                        action.song.title
                    )?,
                    None => writeln!(self.out, "No actions to redo.")?,
                }
                self.write_playlist(session)?;
                Ok(redone.is_some_and(|r| r.applied))
            }
            MenuChoice::AddToPriority => {
                let Some(song) = self.read_song()? else {
                    return Ok(false);
                };
                if let Some(song) = song {
                    self.add_to_priority(session, song)?;
                }
                Ok(false)
            }
            MenuChoice::DisplayTop => {
                let top = session.top_songs();
                if top.is_empty() {
                    writeln!(self.out, "No songs in the priority queue.")?;
                } else {
                    write_table(
                        &mut self.out,
                        "********** Top rated songs in priority queue **********",
                        &top,
                    )?;
                }
                Ok(false)
            }
            MenuChoice::Exit => Ok(false),
        }
    }

    fn add_song<S: RecordStore>(&mut self, session: &mut Session<S>) -> Result<bool> {
        let Some(song) = self.read_song()? else {
            return Ok(false);
        };
        let Some(song) = song else {
            return Ok(false);
        };

        let Some(answer) =
            self.prompt("Do you want to add the song to the priority queue? (Yes/No): ")?
        else {
            return Ok(false);
        };
        match answer.trim().to_lowercase().as_str() {
            "yes" => self.add_to_priority(session, song.clone())?,
            "no" => writeln!(
                self.out,
                "Song '{}' not added to the priority queue.",
                song.title
            )?,
            _ => writeln!(self.out, "Invalid input. Please enter 'Yes' or 'No'.")?,
        }

        writeln!(
            self.out,
            "Song '{}' by {} added to the playlist.",
            song.title, song.artist
        )?;
        session.add_song(song);
        Ok(true)
    }

    fn remove_song<S: RecordStore>(&mut self, session: &mut Session<S>) -> Result<bool> {
        let Some(title) = self.prompt("Enter song title to remove: ")? else {
            return Ok(false);
        };

        match session.remove_song(&title) {
            Some(song) => {
                writeln!(self.out, "Song '{}' removed from the playlist.", song.title)?;
                Ok(true)
            }
            None => {
                writeln!(self.out, "Song '{title}' not found in the playlist.")?;
                writeln!(self.out, "Songs related to '{title}' in the playlist:")?;
                self.write_search(session, &title)?;
                Ok(false)
            }
        }
    }

    fn add_to_priority<S: RecordStore>(&mut self, session: &mut Session<S>, song: Song) -> Result<()> {
        let (title, artist) = (song.title.clone(), song.artist.clone());
        match session.add_to_priority(song) {
            Ok(()) => {
                writeln!(self.out, "Song '{title}' by {artist} added to the priority queue.")?;
                writeln!(
                    self.out,
                    "Song saved to {}.",
                    session.config().priority_path.display()
                )?;
            }
            Err(e) => {
                log::error!("Could not save priority song: {:#}", anyhow::Error::from(e));
                writeln!(
                    self.out,
                    "Song '{title}' added to the priority queue, but could not be saved."
                )?;
            }
        }
        Ok(())
    }

    /// Prompt for title, artist and rating
    ///
    /// Outer `None` means input ended; inner `None` means the rating was
    /// rejected and already reported.
    fn read_song(&mut self) -> Result<Option<Option<Song>>> {
        let Some(title) = self.prompt("Enter song title: ")? else {
            return Ok(None);
        };
        let Some(artist) = self.prompt("Enter artist: ")? else {
            return Ok(None);
        };
        let Some(rating) = self.prompt("Enter rating (1 to 5): ")? else {
            return Ok(None);
        };

        let song = match rating.trim().parse::<i32>() {
            Ok(rating) => Song::rated(title, artist, rating).map_err(anyhow::Error::from),
            Err(_) => Err(anyhow::anyhow!("rating {:?} is not a number", rating.trim())),
        };

        match song {
            Ok(song) => Ok(Some(Some(song))),
            Err(e) => {
                writeln!(self.out, "Invalid rating: {e}. Song not added.")?;
                Ok(Some(None))
            }
        }
    }

    fn save<S: RecordStore>(&mut self, session: &Session<S>) -> Result<()> {
        let path = session.config().playlist_path.display();
        match session.save() {
            Ok(()) => writeln!(self.out, "Playlist saved to {path}")?,
            Err(e) => {
                log::error!("Could not save playlist: {:#}", anyhow::Error::from(e));
                writeln!(self.out, "Error saving playlist to {path}.")?;
            }
        }
        Ok(())
    }

    fn write_playlist<S: RecordStore>(&mut self, session: &Session<S>) -> Result<()> {
        let playlist = session.playlist();
        if playlist.is_empty() {
            writeln!(self.out, "The playlist is empty.")?;
        } else {
            write_table(&mut self.out, "********** PLAYLIST **********", playlist.songs())?;
        }
        Ok(())
    }

    fn write_search<S: RecordStore>(&mut self, session: &Session<S>, query: &str) -> Result<()> {
        let found = session.search(query);
        if found.is_empty() {
            writeln!(self.out, "No song found with the title containing: {query}")?;
        }
        for song in found {
            writeln!(self.out, "Song found: {} by {}", song.title, song.artist)?;
        }
        Ok(())
    }

    fn write_banner(&mut self) -> Result<()> {
        writeln!(self.out, "{}", rule('*', 55))?;
        writeln!(self.out, "      -MUSIC PLAYLIST MANAGER-")?;
        writeln!(self.out, "{}", rule('*', 55))?;
        Ok(())
    }

    fn write_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", rule('*', 60))?;
        writeln!(self.out, "{:>20}Current Time : {}", "", display::current_time())?;
        writeln!(self.out)?;
        writeln!(self.out, "Music Playlist Manager")?;
        for choice in MenuChoice::ALL {
            if choice != MenuChoice::Exit {
                writeln!(self.out, " {:>2}. {}", choice.number(), choice.label())?;
            }
        }
        writeln!(self.out)?;
        writeln!(self.out, "Enter '0' to exit")?;
        writeln!(self.out, "{}", rule('*', 60))?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(self.input.read_line()?)
    }
}
