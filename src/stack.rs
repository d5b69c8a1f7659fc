//! Stack growth for deep recursion.
//!
//! A cold evaluation of index `n` recurses `n` frames deep before the first
//! base case is reached, in both the naive and the memoized strategy.
//!
//! On `wasm32`, where `stacker` cannot switch stacks, the closure is called
//! directly and deep recursion is bounded by the runtime's stack.

/// Ensure sufficient stack space is available before executing `f`.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Below this much remaining stack, switch to a fresh segment (64KB).
    const RED_ZONE: usize = 64 * 1024;

    /// Size of each fresh segment (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
