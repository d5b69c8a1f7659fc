//! Dense prefix table.
//!
//! A plain vector where slot `i` holds the term at index `i`. The table is
//! always a contiguous prefix `[0, len)`: it is seeded with the two base
//! cases and only ever extended at the end, one index at a time.
//!
//! # Characteristics
//!
//! - **O(1) lookup**: Single bounds check and array access
//! - **No hashing**: Keys are the slot positions themselves
//! - **Grow-only**: No removal, no clear

use log::debug;

/// A dense, append-only table of sequence terms.
#[derive(Debug)]
pub struct DenseCache {
    entries: Vec<i64>,
    hits: usize,
    misses: usize,
}

impl Default for DenseCache {
    fn default() -> Self {
        Self::with_capacity(2)
    }
}

impl DenseCache {
    /// Creates a table seeded with the base cases, reserving room for
    /// `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut entries = Vec::with_capacity(capacity.max(2));
        entries.push(0);
        entries.push(1);

        Self {
            entries,
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the number of stored entries, which is also the first index
    /// not yet computed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the base cases are present from construction.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of slots allocated.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns the number of cache hits.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Returns the number of cache misses.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Looks up an index in the table.
    #[inline]
    pub fn get(&mut self, index: usize) -> Option<&i64> {
        match self.entries.get(index) {
            Some(v) => {
                self.hits += 1;
                Some(v)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Looks up an index without updating the statistics.
    #[inline]
    pub fn peek(&self, index: usize) -> Option<&i64> {
        self.entries.get(index)
    }

    /// Returns true if the index is present.
    pub fn contains(&self, index: usize) -> bool {
        index < self.entries.len()
    }

    /// Returns the last two stored terms, `(f(len - 2), f(len - 1))`.
    #[inline]
    pub fn last_pair(&self) -> (i64, i64) {
        let len = self.entries.len();
        (self.entries[len - 2], self.entries[len - 1])
    }

    /// Tries to make room for `total` entries up front.
    ///
    /// A request the allocator cannot satisfy is ignored: `push` still grows
    /// the table one entry at a time.
    pub fn reserve_total(&mut self, total: usize) {
        let additional = total.saturating_sub(self.entries.len());
        if let Err(e) = self.entries.try_reserve(additional) {
            debug!("dense: cannot pre-size to {} entries: {}", total, e);
        }
    }

    /// Appends the term for index `len()`.
    #[inline]
    pub fn push(&mut self, value: i64) {
        self.entries.push(value);
    }

    /// Returns all entries as `(index, value)` pairs in index order.
    pub fn entries(&self) -> Vec<(usize, i64)> {
        self.entries.iter().copied().enumerate().collect()
    }
}
