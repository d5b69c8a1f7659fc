//! Validated sequence indices.
//!
//! The public API accepts indices as signed integers, so that a negative
//! request can be reported as an error instead of being unrepresentable.
//! [`Index`] is the checked form used by every strategy internally.

use std::fmt;

use crate::error::EvalError;

/// A non-negative sequence index.
///
/// Stored as `usize` rather than `u64`: the dense table and the cache keys
/// are indexed by it directly.
///
/// # Invariants
///
/// - The index is `>= 0`
/// - The index is addressable as a `usize` (dense storage is indexed by it)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Index(usize);

impl Index {
    /// Creates a new index.
    pub const fn new(index: usize) -> Self {
        Index(index)
    }

    /// Returns the raw index.
    pub const fn get(self) -> usize {
        self.0
    }

    /// Checks if this is one of the two base cases, `0` or `1`.
    pub const fn is_base(self) -> bool {
        self.0 < 2
    }
}

impl TryFrom<i64> for Index {
    type Error = EvalError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        usize::try_from(n).map(Index).map_err(|_| EvalError::InvalidIndex(n))
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
