//! Recursion safety for the parser and the tree-walking executor.
//!
//! Two tools live here:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand so deeply
//!   nested expressions and blocks do not crash the host process.
//! - [`DepthCounter`] counts nested script-level calls so runaway recursion
//!   in a script becomes a reportable error instead of unbounded memory use.
//!
//! On wasm32 the stack helper is a passthrough.

use std::cell::Cell;

/// Grow the stack when less than this remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (2MB).
const SEGMENT: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is under the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Tracks how many script calls are currently active.
///
/// The counter is shared by reference; each [`DepthCounter::enter`] hands out
/// a guard that decrements on drop, so early returns via `?` keep the count
/// balanced.
#[derive(Debug)]
pub struct DepthCounter {
    current: Cell<usize>,
    limit: usize,
}

/// Returned by [`DepthCounter::enter`] when the limit would be exceeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthExceeded {
    pub limit: usize,
}

impl DepthCounter {
    pub fn new(limit: usize) -> Self {
        DepthCounter {
            current: Cell::new(0),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn current(&self) -> usize {
        self.current.get()
    }

    /// Enter one level deeper.
    pub fn enter(&self) -> Result<DepthGuard<'_>, DepthExceeded> {
        let next = self.current.get() + 1;
        if next > self.limit {
            return Err(DepthExceeded { limit: self.limit });
        }
        self.current.set(next);
        Ok(DepthGuard { counter: self })
    }
}

/// Scope guard for one level of [`DepthCounter`].
#[must_use = "dropping the guard immediately leaves the level"]
#[derive(Debug)]
pub struct DepthGuard<'a> {
    counter: &'a DepthCounter,
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        let depth = self.counter.current.get();
        self.counter.current.set(depth.saturating_sub(1));
    }
}
