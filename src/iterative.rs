//! Bottom-up evaluation over a persistent dense table.
//!
//! The table starts as `[0, 1]` and is extended in strictly increasing index
//! order, each new term being the sum of the two before it. It is kept for
//! the lifetime of the evaluator: requests below the frontier are a single
//! lookup, and requests above it continue from where the last call stopped.

use log::{debug, trace};

use crate::cache::DenseCache;
use crate::error::EvalError;
use crate::evaluator::{EvalStats, Evaluate};
use crate::types::Index;

#[derive(Debug, Default)]
pub struct IterativeEvaluator {
    cache: DenseCache,
    calls: usize,
    last_calls: usize,
}

impl IterativeEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator reserving `capacity` table entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DenseCache::with_capacity(capacity),
            calls: 0,
            last_calls: 0,
        }
    }

    pub fn cache(&self) -> &DenseCache {
        &self.cache
    }

    /// Extends the table up to and including index `n`.
    fn extend_to(&mut self, n: usize) -> i64 {
        self.cache.reserve_total(n.saturating_add(1));
        let (mut prev, mut last) = self.cache.last_pair();
        for k in self.cache.len()..=n {
            let next = prev.wrapping_add(last);
            trace!("iterative: f({}) = {}", k, next);
            self.cache.push(next);
            self.calls += 1;
            prev = last;
            last = next;
        }
        last
    }
}

impl Evaluate for IterativeEvaluator {
    fn evaluate(&mut self, n: i64) -> Result<i64, EvalError> {
        let index = Index::try_from(n).inspect_err(|e| debug!("iterative: {}", e))?;
        debug!("iterative: evaluate(n = {})", index);

        let before = self.calls;
        let res = match self.cache.get(index.get()) {
            Some(&res) => res,
            None => self.extend_to(index.get()),
        };
        self.last_calls = self.calls - before;

        debug!(
            "iterative: evaluate(n = {}) -> {}, computed {} new terms",
            index, res, self.last_calls
        );
        Ok(res)
    }

    fn stats(&self) -> EvalStats {
        EvalStats {
            calls: self.calls,
            last_calls: self.last_calls,
            last_recursive_calls: 0,
            hits: self.cache.hits(),
            misses: self.cache.misses(),
            cached: self.cache.len(),
        }
    }
}
