use thiserror::Error;

/// Error returned by [`Evaluate::evaluate`][crate::evaluator::Evaluate::evaluate].
///
/// Overflow is not an error: term values wrap around in the `i64` domain.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum EvalError {
    /// The requested index is negative (or not addressable on this platform).
    #[error("invalid index {0}: must be non-negative")]
    InvalidIndex(i64),
}
