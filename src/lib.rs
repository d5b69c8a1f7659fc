//! # fibmemo: memoized Fibonacci evaluation
//!
//! **`fibmemo`** computes terms of the Fibonacci sequence
//! (`f(0) = 0`, `f(1) = 1`, `f(n) = f(n-1) + f(n-2)`) through evaluator
//! objects that own their cache.
//!
//! ## Key Features
//!
//! - **Evaluator-Owned Cache**: The cache is created when an evaluator is constructed and dropped with it. Recursive sub-calls and repeated top-level calls all share that one instance.
//! - **Three Strategies**: [`Naive`][crate::naive::NaiveEvaluator] (exponential baseline), [`Memoized`][crate::memoized::MemoizedEvaluator] (top-down) and [`Iterative`][crate::iterative::IterativeEvaluator] (bottom-up), all behind the [`Evaluate`][crate::evaluator::Evaluate] trait.
//! - **Instrumented**: Every evaluator reports call counts and cache hits/misses via [`EvalStats`][crate::evaluator::EvalStats].
//! - **Defined Overflow**: Terms are `i64` and wrap around on overflow. `f(92)` is the last exact term.
//!
//! ## Basic Usage
//!
//! ```rust
//! use fibmemo::evaluator::{Evaluate, Evaluator};
//! use fibmemo::strategy::Strategy;
//!
//! // 1. Build an evaluator once
//! let mut fib = Evaluator::new(Strategy::Memoized);
//!
//! // 2. Evaluate
//! assert_eq!(fib.evaluate(10), Ok(55));
//!
//! // 3. Later requests are served from the same cache
//! assert_eq!(fib.evaluate(5), Ok(5));
//! assert_eq!(fib.stats().last_recursive_calls, 0);
//!
//! // 4. Negative indices are rejected
//! assert!(fib.evaluate(-1).is_err());
//! ```
//!
//! Timing and printing are left to the caller; see `demos/fib.rs`.

pub mod cache;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod iterative;
pub mod memoized;
pub mod naive;
pub mod strategy;
pub mod types;

mod stack;

pub use config::EvaluatorConfig;
pub use error::EvalError;
pub use evaluator::{EvalStats, Evaluate, Evaluator};
pub use strategy::Strategy;

/// Computes `f(n)` in constant space, without keeping any cache.
///
/// ```
/// assert_eq!(fibmemo::fibonacci(42), 267914296);
/// ```
pub fn fibonacci(n: u64) -> i64 {
    let (mut prev, mut last) = (0i64, 1i64);
    if n == 0 {
        return prev;
    }
    for _ in 1..n {
        (prev, last) = (last, prev.wrapping_add(last));
    }
    last
}
