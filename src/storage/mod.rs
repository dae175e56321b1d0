//! Flat-file persistence for songs
//!
//! Each file holds one `title,artist,rating` record per line, with no
//! header and no escaping.

pub mod codec;
mod store;

pub use codec::{decode, decode_bytes, encode, DecodeError};
pub use store::{parse_records, render_records, FileStore, MemoryStore, RecordStore, StorageError};
