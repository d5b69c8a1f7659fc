use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Evaluation strategy.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// Plain recursion, no storage. Exponential time.
    Naive,
    /// Top-down recursion over a persistent cache.
    Memoized,
    /// Bottom-up loop over a persistent dense table.
    Iterative,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::Memoized, Strategy::Iterative];

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Memoized => "memoized",
            Strategy::Iterative => "iterative",
        }
    }

    /// Whether evaluators of this strategy own a cache.
    pub const fn is_cached(self) -> bool {
        !matches!(self, Strategy::Naive)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized strategy name.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("unknown strategy '{0}' (expected naive, memoized or iterative)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(Strategy::Naive),
            "memoized" | "memo" => Ok(Strategy::Memoized),
            "iterative" | "iter" => Ok(Strategy::Iterative),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}
