//! Top-down evaluation over a persistent cache.
//!
//! The cache is a field of [`MemoizedEvaluator`], created once in the
//! constructor. Every recursive step and every later top-level call borrows
//! that same instance, so each index is computed at most once per
//! evaluator. Evaluation never constructs a cache of its own.
//!
//! For each requested index `n`:
//!
//! - **Hit**: return the cached term, no recursion.
//! - **Miss, base case**: store `n` itself and return it.
//! - **Miss, `n >= 2`**: evaluate `n - 1` then `n - 2`, store the sum.
//!
//! Evaluating `n - 1` first fills in `n - 2`, so the second branch is
//! always a hit and a cold evaluation of `n >= 1` costs `2n - 1` calls.

use log::{debug, trace};

use crate::cache::Cache;
use crate::error::EvalError;
use crate::evaluator::{EvalStats, Evaluate};
use crate::stack::ensure_sufficient_stack;
use crate::types::Index;

#[derive(Debug)]
pub struct MemoizedEvaluator {
    cache: Cache,
    calls: usize,
    last_calls: usize,
}

impl Default for MemoizedEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoizedEvaluator {
    /// Creates an evaluator whose cache is pre-seeded with the base cases.
    pub fn new() -> Self {
        Self::with_capacity(64, true)
    }

    /// Creates an evaluator reserving `capacity` cache entries.
    ///
    /// With `seed_base_cases == false` the base cases are inserted the first
    /// time they are demanded.
    pub fn with_capacity(capacity: usize, seed_base_cases: bool) -> Self {
        let mut cache = Cache::with_capacity(capacity);
        if seed_base_cases {
            cache.insert(0, 0);
            cache.insert(1, 1);
        }
        Self {
            cache,
            calls: 0,
            last_calls: 0,
        }
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    fn eval_index(&mut self, index: Index) -> i64 {
        self.calls += 1;
        let n = index.get();

        if let Some(&res) = self.cache.get(&n) {
            trace!("memoized: hit({}) -> {}", index, res);
            return res;
        }
        trace!("memoized: miss({})", index);

        let res = if index.is_base() {
            n as i64
        } else {
            ensure_sufficient_stack(|| {
                let a = self.eval_index(Index::new(n - 1));
                let b = self.eval_index(Index::new(n - 2));
                a.wrapping_add(b)
            })
        };

        self.cache.insert(n, res);
        res
    }
}

impl Evaluate for MemoizedEvaluator {
    fn evaluate(&mut self, n: i64) -> Result<i64, EvalError> {
        let index = Index::try_from(n).inspect_err(|e| debug!("memoized: {}", e))?;
        debug!("memoized: evaluate(n = {})", index);

        let before = self.calls;
        let res = self.eval_index(index);
        self.last_calls = self.calls - before;

        debug!(
            "memoized: evaluate(n = {}) -> {} in {} calls, cache size = {}",
            index,
            res,
            self.last_calls,
            self.cache.len()
        );
        Ok(res)
    }

    fn stats(&self) -> EvalStats {
        EvalStats {
            calls: self.calls,
            last_calls: self.last_calls,
            last_recursive_calls: self.last_calls.saturating_sub(1),
            hits: self.cache.hits(),
            misses: self.cache.misses(),
            cached: self.cache.len(),
        }
    }
}
