//! Three-way parse outcome.
//!
//! | Progress | Result | Variant | Meaning |
//! |----------|--------|---------|---------|
//! | Consumed | Ok | `ConsumedOk` | Production matched |
//! | Empty | Err | `EmptyErr` | Production does not apply here, try the next |
//! | Consumed | Err | `ConsumedErr` | Committed and malformed, no backtracking |
//!
//! Every Tern production consumes at least one token when it succeeds, so
//! there is no "empty ok" state.

use crate::ParseError;

#[derive(Debug)]
pub enum ParseOutcome<T> {
    ConsumedOk {
        value: T,
    },
    EmptyErr {
        /// What would have been accepted here, for error messages.
        expected: &'static str,
        position: usize,
    },
    ConsumedErr {
        error: ParseError,
    },
}

impl<T> ParseOutcome<T> {
    #[inline]
    pub fn consumed_ok(value: T) -> Self {
        Self::ConsumedOk { value }
    }

    #[inline]
    pub fn empty_err(expected: &'static str, position: usize) -> Self {
        Self::EmptyErr { expected, position }
    }

    #[inline]
    pub fn consumed_err(error: ParseError) -> Self {
        Self::ConsumedErr { error }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::ConsumedOk { .. })
    }

    #[inline]
    pub fn failed_without_progress(&self) -> bool {
        matches!(self, Self::EmptyErr { .. })
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ParseOutcome<U> {
        match self {
            Self::ConsumedOk { value } => ParseOutcome::ConsumedOk { value: f(value) },
            Self::EmptyErr { expected, position } => ParseOutcome::EmptyErr { expected, position },
            Self::ConsumedErr { error } => ParseOutcome::ConsumedErr { error },
        }
    }

    /// Try `f` only if this alternative did not apply.
    #[must_use]
    pub fn or_else<F: FnOnce() -> ParseOutcome<T>>(self, f: F) -> ParseOutcome<T> {
        match self {
            Self::EmptyErr { .. } => f(),
            other => other,
        }
    }

    /// Convert to a `Result`, building the error for a non-applying
    /// alternative with `on_empty`.
    pub fn into_result<F>(self, on_empty: F) -> Result<T, ParseError>
    where
        F: FnOnce(&'static str, usize) -> ParseError,
    {
        match self {
            Self::ConsumedOk { value } => Ok(value),
            Self::EmptyErr { expected, position } => Err(on_empty(expected, position)),
            Self::ConsumedErr { error } => Err(error),
        }
    }
}

/// Unwrap a production that must match here.
///
/// A non-applying alternative becomes a hard error naming `$context`.
macro_rules! require {
    ($self:expr, $parser:expr, $context:expr) => {
        match $parser {
            $crate::ParseOutcome::ConsumedOk { value } => value,
            $crate::ParseOutcome::ConsumedErr { error } => {
                return $crate::ParseOutcome::ConsumedErr { error };
            }
            $crate::ParseOutcome::EmptyErr { expected, .. } => {
                return $crate::ParseOutcome::ConsumedErr {
                    error: $self.unexpected(expected).with_context($context),
                };
            }
        }
    };
}

/// Unwrap a sub-production, passing both failure kinds through unchanged.
macro_rules! chain {
    ($parser:expr) => {
        match $parser {
            $crate::ParseOutcome::ConsumedOk { value } => value,
            $crate::ParseOutcome::ConsumedErr { error } => {
                return $crate::ParseOutcome::ConsumedErr { error };
            }
            $crate::ParseOutcome::EmptyErr { expected, position } => {
                return $crate::ParseOutcome::EmptyErr { expected, position };
            }
        }
    };
}

/// Unwrap a `Result` from a committed step such as an expected token.
macro_rules! committed {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(error) => return $crate::ParseOutcome::ConsumedErr { error },
        }
    };
}

pub(crate) use {chain, committed, require};
