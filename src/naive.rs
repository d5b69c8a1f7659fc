//! Uncached evaluation straight from the recurrence.
//!
//! Every call branches into two smaller calls with no reuse, so the number
//! of calls for index `n` is `2 * f(n + 1) - 1`. This is the baseline the
//! cached strategies are checked and measured against.

use log::{debug, trace};

use crate::error::EvalError;
use crate::evaluator::{EvalStats, Evaluate};
use crate::stack::ensure_sufficient_stack;
use crate::types::Index;

#[derive(Debug, Default)]
pub struct NaiveEvaluator {
    calls: usize,
    last_calls: usize,
}

impl NaiveEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    fn eval_index(&mut self, index: Index) -> i64 {
        self.calls += 1;
        trace!("naive: eval({})", index);
        let n = index.get();
        if index.is_base() {
            return n as i64;
        }
        // The first descent goes `n` frames deep before any branching.
        ensure_sufficient_stack(|| {
            let a = self.eval_index(Index::new(n - 1));
            let b = self.eval_index(Index::new(n - 2));
            a.wrapping_add(b)
        })
    }
}

impl Evaluate for NaiveEvaluator {
    fn evaluate(&mut self, n: i64) -> Result<i64, EvalError> {
        let index = Index::try_from(n).inspect_err(|e| debug!("naive: {}", e))?;
        debug!("naive: evaluate(n = {})", index);

        let before = self.calls;
        let res = self.eval_index(index);
        self.last_calls = self.calls - before;

        debug!("naive: evaluate(n = {}) -> {} in {} calls", index, res, self.last_calls);
        Ok(res)
    }

    fn stats(&self) -> EvalStats {
        EvalStats {
            calls: self.calls,
            last_calls: self.last_calls,
            last_recursive_calls: self.last_calls.saturating_sub(1),
            ..EvalStats::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_naive_base_cases() {
        let mut e = NaiveEvaluator::new();
        assert_eq!(e.evaluate(0), Ok(0));
        assert_eq!(e.evaluate(1), Ok(1));
    }

    #[test]
    fn test_naive_small_values() {
        let mut e = NaiveEvaluator::new();
        let values: Vec<i64> = (0..=10).map(|n| e.evaluate(n).unwrap()).collect();
        assert_eq!(values, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
    }

    #[test]
    fn test_naive_call_count_is_exponential() {
        let mut e = NaiveEvaluator::new();
        e.evaluate(10).unwrap();
        // 2 * f(11) - 1
        assert_eq!(e.stats().last_calls, 177);

        // No reuse: the same request costs the same again.
        e.evaluate(10).unwrap();
        assert_eq!(e.stats().last_calls, 177);
        assert_eq!(e.stats().calls, 354);
    }

    #[test]
    fn test_naive_runs_on_small_stack() {
        // The thread starts inside the red zone, so recursion runs on a grown stack.
        let res = std::thread::Builder::new()
            .stack_size(32 * 1024)
            .spawn(|| NaiveEvaluator::new().evaluate(24))
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(res, Ok(46368));
    }

    #[test]
    fn test_naive_negative_index() {
        let mut e = NaiveEvaluator::new();
        assert_eq!(e.evaluate(-1), Err(EvalError::InvalidIndex(-1)));
        assert_eq!(e.stats(), EvalStats::default());
    }
}
