use crate::strategy::Strategy;

/// Configuration for building an [`Evaluator`][crate::evaluator::Evaluator].
///
/// # Example
///
/// ```
/// use fibmemo::config::EvaluatorConfig;
/// use fibmemo::evaluator::{Evaluate, Evaluator};
/// use fibmemo::strategy::Strategy;
///
/// let config = EvaluatorConfig::new(Strategy::Memoized)
///     .with_seed_base_cases(false)
///     .with_capacity(128);
/// let mut evaluator = Evaluator::with_config(config);
/// assert_eq!(evaluator.evaluate(20), Ok(6765));
/// ```
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Evaluation strategy (default: memoized)
    pub strategy: Strategy,
    /// Whether the memoized cache gets `0 -> 0` and `1 -> 1` at construction,
    /// instead of on first demand (default: true)
    pub seed_base_cases: bool,
    /// Number of entries to reserve up front (default: 64)
    pub capacity: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Memoized,
            seed_base_cases: true,
            capacity: 64,
        }
    }
}

impl EvaluatorConfig {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_seed_base_cases(mut self, seed: bool) -> Self {
        self.seed_base_cases = seed;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
