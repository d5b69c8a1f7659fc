//! Caches for memoized evaluation.
//!
//! | Implementation | Keys | Lookup | Growth | Used by |
//! |----------------|------|--------|--------|---------|
//! | [`HashMapCache`] | Any hashable | Hash probe | Any order | [`MemoizedEvaluator`][crate::memoized::MemoizedEvaluator] |
//! | [`DenseCache`] | Contiguous `0..len` | Array access | Append only | [`IterativeEvaluator`][crate::iterative::IterativeEvaluator] |
//!
//! Both caches are grow-only: there is no `clear`, and an entry never
//! changes once written. Both count hits and misses on lookup, which is
//! how tests observe that a warm evaluator does no repeated work.
//!
//! # Example
//!
//! ```
//! use fibmemo::cache::{Cache, DenseCache};
//!
//! let mut cache = Cache::with_capacity(16);
//! cache.insert(10, 55);
//! assert_eq!(cache.get(&10), Some(&55));
//! assert_eq!(cache.hits(), 1);
//!
//! let mut table = DenseCache::default();
//! table.push(1);
//! assert_eq!(table.get(2), Some(&1));
//! ```

mod dense;
mod hashmap;

pub use dense::DenseCache;
pub use hashmap::HashMapCache;

/// Default cache for the top-down strategy: index to term.
pub type Cache = HashMapCache<usize, i64>;
