//! Table and banner formatting

use crate::model::Song;
use std::io::{self, Write};

const TITLE_WIDTH: usize = 35;
const ARTIST_WIDTH: usize = 20;
const TABLE_WIDTH: usize = 65;

/// Local time as `YYYY-MM-DD HH:MM:SS`
pub fn current_time() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// A line of `ch` repeated `width` times
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// One table row for a song
pub fn song_row(song: &Song) -> String {
    format!(
        "{:<TITLE_WIDTH$}{:<ARTIST_WIDTH$}   [ {}/5 ]",
        song.title, song.artist, song.rating
    )
}

/// Write a heading, column headers and one row per song
pub fn write_table<'a, W, I>(out: &mut W, heading: &str, songs: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Song>,
{
    writeln!(out, "{heading}")?;
    writeln!(
        out,
        "{:<TITLE_WIDTH$}{:<ARTIST_WIDTH$}   RATING",
        "TITLE", "ARTIST"
    )?;
    writeln!(out, "{}", rule('-', TABLE_WIDTH))?;
    for song in songs {
        writeln!(out, "{}", song_row(song))?;
    }
    Ok(())
}

/// Time stamp line printed after each command
pub fn write_stamp<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}{}{}", rule('*', 20), current_time(), rule('*', 21))
}
