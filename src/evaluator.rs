//! The evaluator contract and the strategy-selecting facade.
//!
//! Every strategy implements [`Evaluate`]. Callers that pick the strategy at
//! runtime use [`Evaluator`], which owns exactly one strategy instance (and
//! through it, at most one cache) for its whole lifetime.

use log::debug;

use crate::config::EvaluatorConfig;
use crate::error::EvalError;
use crate::iterative::IterativeEvaluator;
use crate::memoized::MemoizedEvaluator;
use crate::naive::NaiveEvaluator;
use crate::strategy::Strategy;

/// Counters describing the work an evaluator has done.
///
/// A "call" is one internal evaluation step: a recursive invocation for
/// the naive and memoized strategies, a newly computed term for the
/// iterative one.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct EvalStats {
    /// Total steps over the evaluator's lifetime.
    pub calls: usize,
    /// Steps performed by the most recent successful `evaluate`.
    pub last_calls: usize,
    /// Recursive invocations below the root in the most recent `evaluate`.
    pub last_recursive_calls: usize,
    /// Cache lookups that found an entry.
    pub hits: usize,
    /// Cache lookups that found nothing.
    pub misses: usize,
    /// Number of cached entries.
    pub cached: usize,
}

/// Common contract of all evaluation strategies.
pub trait Evaluate {
    /// Computes the term at index `n`.
    ///
    /// Fails with [`EvalError::InvalidIndex`] for `n < 0`, leaving the
    /// evaluator untouched. Values wrap around on `i64` overflow.
    fn evaluate(&mut self, n: i64) -> Result<i64, EvalError>;

    /// Returns the work counters.
    fn stats(&self) -> EvalStats;

    /// Evaluates several indices in order on the same evaluator.
    ///
    /// Stops at the first invalid index; terms computed before it stay cached.
    fn evaluate_many<I>(&mut self, ns: I) -> Result<Vec<i64>, EvalError>
    where
        Self: Sized,
        I: IntoIterator<Item = i64>,
    {
        ns.into_iter().map(|n| self.evaluate(n)).collect()
    }
}

/// Evaluator with a strategy chosen at construction.
#[derive(Debug)]
pub enum Evaluator {
    Naive(NaiveEvaluator),
    Memoized(MemoizedEvaluator),
    Iterative(IterativeEvaluator),
}

impl Evaluator {
    pub fn new(strategy: Strategy) -> Self {
        Self::with_config(EvaluatorConfig::new(strategy))
    }

    pub fn with_config(config: EvaluatorConfig) -> Self {
        debug!("Evaluator::with_config({:?})", config);
        match config.strategy {
            Strategy::Naive => Evaluator::Naive(NaiveEvaluator::new()),
            Strategy::Memoized => Evaluator::Memoized(MemoizedEvaluator::with_capacity(
                config.capacity,
                config.seed_base_cases,
            )),
            Strategy::Iterative => {
                Evaluator::Iterative(IterativeEvaluator::with_capacity(config.capacity))
            }
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Evaluator::Naive(_) => Strategy::Naive,
            Evaluator::Memoized(_) => Strategy::Memoized,
            Evaluator::Iterative(_) => Strategy::Iterative,
        }
    }

    /// Returns the cached term at index `n`, if any, without evaluating.
    pub fn cached(&self, n: usize) -> Option<i64> {
        match self {
            Evaluator::Naive(_) => None,
            Evaluator::Memoized(e) => e.cache().peek(&n).copied(),
            Evaluator::Iterative(e) => e.cache().peek(n).copied(),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::with_config(EvaluatorConfig::default())
    }
}

impl Evaluate for Evaluator {
    fn evaluate(&mut self, n: i64) -> Result<i64, EvalError> {
        match self {
            Evaluator::Naive(e) => e.evaluate(n),
            Evaluator::Memoized(e) => e.evaluate(n),
            Evaluator::Iterative(e) => e.evaluate(n),
        }
    }

    fn stats(&self) -> EvalStats {
        match self {
            Evaluator::Naive(e) => e.stats(),
            Evaluator::Memoized(e) => e.stats(),
            Evaluator::Iterative(e) => e.stats(),
        }
    }
}
