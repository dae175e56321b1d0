//! Loading and saving song records

use super::codec::{decode_bytes, encode};
use crate::model::Song;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by a record store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where song records are loaded from and saved to
pub trait RecordStore {
    /// Load every decodable record from `source`
    ///
    /// A missing source yields an empty list. Malformed lines are skipped.
    fn load_records(&self, source: &Path) -> Result<Vec<Song>, StorageError>;

    /// Replace the contents of `destination` with `songs`
    fn save_records(&self, destination: &Path, songs: &[Song]) -> Result<(), StorageError>;

    /// Append a single record to `destination`
    fn append_record(&self, destination: &Path, song: &Song) -> Result<(), StorageError>;
}

/// Decode the lines of a record file, skipping blanks and bad records
///
/// Works on raw bytes so one undecodable line cannot hide the others.
pub fn parse_records(content: &[u8], source: &Path) -> Vec<Song> {
    let mut songs = Vec::new();

    for (idx, line) in content.split(|&b| b == b'\n').enumerate() {
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        match decode_bytes(line) {
            Ok(song) => songs.push(song),
            Err(e) => log::warn!("Skipping {:?} line {}: {}", source, idx + 1, e),
        }
    }

    songs
}

/// Render songs as record lines, one per song
pub fn render_records(songs: &[Song]) -> String {
    songs.iter().map(|s| encode(s) + "\n").collect()
}

/// Record store backed by text files
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

impl RecordStore for FileStore {
    fn load_records(&self, source: &Path) -> Result<Vec<Song>, StorageError> {
        let content = match fs::read(source) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No file at {:?}, starting empty", source);
                return Ok(Vec::new());
            }
            Err(source_err) => {
                return Err(StorageError::Read {
                    path: source.to_path_buf(),
                    source: source_err,
                })
            }
        };

        let songs = parse_records(&content, source);
        log::info!("Loaded {} songs from {:?}", songs.len(), source);
        Ok(songs)
    }

    fn save_records(&self, destination: &Path, songs: &[Song]) -> Result<(), StorageError> {
        fs::write(destination, render_records(songs)).map_err(|source| StorageError::Write {
            path: destination.to_path_buf(),
            source,
        })?;
        log::info!("Saved {} songs to {:?}", songs.len(), destination);
        Ok(())
    }

    fn append_record(&self, destination: &Path, song: &Song) -> Result<(), StorageError> {
        let write_err = |source: io::Error| StorageError::Write {
            path: destination.to_path_buf(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(destination)
            .map_err(write_err)?;
        writeln!(file, "{}", encode(song)).map_err(write_err)?;

        log::info!("Appended '{}' to {:?}", song.title, destination);
        Ok(())
    }
}

/// Record store kept in memory, keyed by path
///
/// Files hold raw text so records go through the same codec as [`FileStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<HashMap<PathBuf, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file with raw text
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.borrow_mut().insert(path.into(), content.into());
    }

    /// Raw text currently stored at `path`
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }
}

impl RecordStore for MemoryStore {
    fn load_records(&self, source: &Path) -> Result<Vec<Song>, StorageError> {
        Ok(self
            .contents(source)
            .map(|content| parse_records(content.as_bytes(), source))
            .unwrap_or_default())
    }

    fn save_records(&self, destination: &Path, songs: &[Song]) -> Result<(), StorageError> {
        self.insert(destination, render_records(songs));
        Ok(())
    }

    fn append_record(&self, destination: &Path, song: &Song) -> Result<(), StorageError> {
        let mut files = self.files.borrow_mut();
        let content = files.entry(destination.to_path_buf()).or_default();
        content.push_str(&encode(song));
        content.push('\n');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_skips_blank_and_bad_lines() {
        let content = "A,x,3\n\nbroken line\nB,y,oops\nC,z,5\n";
        let songs = parse_records(content.as_bytes(), Path::new("test.txt"));
        let titles: Vec<_> = songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let songs = FileStore::new()
            .load_records(&temp_dir.path().join("nope.txt"))
            .unwrap();
        assert!(songs.is_empty());
    }

    #[test]
    fn test_unreadable_source_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        // A directory cannot be read as a file
        let result = FileStore::new().load_records(temp_dir.path());
        assert!(matches!(result, Err(StorageError::Read { .. })));
    }

    #[test]
    fn test_save_overwrites_and_load_round_trips() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("PlayList.txt");
        let store = FileStore::new();

        store
            .save_records(&path, &[Song::new("Old", "x", 1)])
            .unwrap();
        let songs = vec![Song::new("Song A", "Artist A", 4), Song::new("Song B", "Artist B", 2)];
        store.save_records(&path, &songs).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Song A,Artist A,4\nSong B,Artist B,2\n"
        );
        assert_eq!(store.load_records(&path).unwrap(), songs);
    }

    #[test]
    fn test_non_utf8_line_skips_only_that_line() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("PlayList.txt");
        fs::write(&path, b"Keep Me,Artist,5\nCaf\xe9,Latin1,3\nAlso Keep,Other,4\n").unwrap();

        let songs = FileStore::new().load_records(&path).unwrap();
        assert_eq!(
            songs,
            vec![Song::new("Keep Me", "Artist", 5), Song::new("Also Keep", "Other", 4)]
        );
    }

    #[test]
    fn test_append_creates_and_extends() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("songs.txt");
        let store = FileStore::new();

        store.append_record(&path, &Song::new("One", "a", 5)).unwrap();
        store.append_record(&path, &Song::new("Two", "b", 3)).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "One,a,5\nTwo,b,3\n");
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join("PlayList.txt");
        let result = FileStore::new().save_records(&path, &[]);
        assert!(matches!(result, Err(StorageError::Write { .. })));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        let path = Path::new("songs.txt");

        assert!(store.load_records(path).unwrap().is_empty());

        store.append_record(path, &Song::new("A", "x", 2)).unwrap();
        store.append_record(path, &Song::new("B", "y", 4)).unwrap();
        assert_eq!(store.contents(path).unwrap(), "A,x,2\nB,y,4\n");
        assert_eq!(store.load_records(path).unwrap().len(), 2);

        store.save_records(path, &[]).unwrap();
        assert!(store.load_records(path).unwrap().is_empty());
    }
}
