//! One-line text records: `title,artist,rating`
//!
//! Fields are not escaped. A comma inside a title or artist corrupts the
//! record; this is a known limitation of the format.

use crate::model::Song;
use thiserror::Error;

/// Field separator
const SEPARATOR: char = ',';

/// Errors raised while decoding a record
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected `title,artist,rating`, got {line:?}")]
    MissingField { line: String },

    #[error("rating {value:?} is not an integer")]
    InvalidRating { value: String },

    #[error("record is not valid UTF-8: {line:?}")]
    InvalidUtf8 { line: String },
}

/// Serialize a song to one record (without the trailing newline)
pub fn encode(song: &Song) -> String {
    format!(
        "{}{SEPARATOR}{}{SEPARATOR}{}",
        song.title, song.artist, song.rating
    )
}

/// Parse one record
///
/// Splits on the first two commas; everything after the second comma is
/// the rating.
pub fn decode(line: &str) -> Result<Song, DecodeError> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    let mut fields = line.splitn(3, SEPARATOR);
    let (Some(title), Some(artist), Some(rating)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(DecodeError::MissingField {
            line: line.to_string(),
        });
    };

    let rating = rating
        .trim()
        .parse::<i32>()
        .map_err(|_| DecodeError::InvalidRating {
            value: rating.to_string(),
        })?;

    Ok(Song::new(title, artist, rating))
}

/// Parse one record from raw bytes
///
/// Lines that are not valid UTF-8 are rejected rather than mangled.
pub fn decode_bytes(line: &[u8]) -> Result<Song, DecodeError> {
    let line = std::str::from_utf8(line).map_err(|_| DecodeError::InvalidUtf8 {
        line: String::from_utf8_lossy(line).into_owned(),
    })?;
    decode(line)
}
