use super::Song;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap entry: higher rating wins, then earlier insertion
#[derive(Debug, Clone)]
struct Ranked {
    song: Song,
    seq: Reverse<u64>,
}

impl Ranked {
    fn key(&self) -> (i32, Reverse<u64>) {
        (self.song.rating, self.seq)
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Rating-ordered view of songs, independent of the playlist
///
/// Songs are only ever added. Equal ratings come out in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PriorityView {
    heap: BinaryHeap<Ranked>,
    next_seq: u64,
}

impl PriorityView {
    /// Create a new empty view
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a song into the view
    pub fn add(&mut self, song: Song) {
        let seq = Reverse(self.next_seq);
        self.next_seq += 1;
        self.heap.push(Ranked { song, seq });
    }

    /// All songs, highest rating first
    ///
    /// Drains a copy of the heap, so the view itself is left intact.
    pub fn top_songs_desc(&self) -> Vec<Song> {
        let mut heap = self.heap.clone();
        let mut songs = Vec::with_capacity(heap.len());
        while let Some(ranked) = heap.pop() {
            songs.push(ranked.song);
        }
        songs
    }

    /// Number of songs in the view
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if the view is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Extend<Song> for PriorityView {
    fn extend<I: IntoIterator<Item = Song>>(&mut self, iter: I) {
        for song in iter {
            self.add(song);
        }
    }
}
