//! Evaluation errors.
//!
//! `EvalErrorKind` is the structured category; factory functions below are
//! the public way to build errors and keep `kind` and `message` in sync.
//! Break, next, and return are not errors: they travel as
//! [`Flow`](crate::exec::Flow) values.

use crate::value::Value;
use std::fmt;
use tern_ir::Span;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Lookup
    NameNotFound {
        name: String,
    },
    UndefinedMember {
        member: String,
        type_name: String,
    },
    IndexOutOfRange {
        index: i64,
        len: usize,
    },
    KeyNotFound {
        key: String,
    },

    // Calls
    InvalidArgument {
        message: String,
    },
    NotCallable {
        type_name: String,
    },
    StackOverflow {
        depth: usize,
    },

    // Operators
    TypeMismatch {
        expected: String,
        got: String,
    },
    DivisionByZero,
    IntegerOverflow {
        operation: String,
    },

    // Statements
    UnsupportedAssignmentTarget {
        reason: String,
    },
    UnsupportedNode {
        node: &'static str,
    },
    ControlFlowEscape {
        signal: &'static str,
    },

    /// Raised by host commands and anything not yet categorized.
    Custom {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameNotFound { name } => write!(f, "undefined name: {name}"),
            Self::UndefinedMember { member, type_name } => {
                write!(f, "no member '{member}' on {type_name}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::KeyNotFound { key } => write!(f, "key not found: {key}"),

            Self::InvalidArgument { message } => write!(f, "invalid argument: {message}"),
            Self::NotCallable { type_name } => write!(f, "{type_name} is not callable"),
            Self::StackOverflow { depth } => {
                write!(f, "maximum call depth exceeded (limit: {depth})")
            }

            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),

            Self::UnsupportedAssignmentTarget { reason } => {
                write!(f, "unsupported assignment target: {reason}")
            }
            Self::UnsupportedNode { node } => {
                write!(f, "{node} cannot be used as an expression")
            }
            Self::ControlFlowEscape { signal } => {
                write!(f, "`{signal}` used outside of a loop")
            }

            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Equals `kind.to_string()` for factory-built errors.
    pub message: String,
    pub span: Option<Span>,
}

impl EvalError {
    /// Uncategorized error, typically raised by a host command.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        EvalError {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
            span: None,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more precise one is already present.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Lookup

#[cold]
pub fn name_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NameNotFound {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_member(member: &str, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedMember {
        member: member.to_string(),
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn index_out_of_range(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfRange { index, len })
}

#[cold]
pub fn key_not_found(key: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::KeyNotFound {
        key: key.to_string(),
    })
}

// Calls

#[cold]
pub fn invalid_argument(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidArgument {
        message: message.into(),
    })
}

/// A command or function received the wrong number of arguments.
#[cold]
pub fn wrong_arg_count(name: &str, expected: &str, got: usize) -> EvalError {
    let word = if expected == "1" || expected.ends_with(" 1") {
        "argument"
    } else {
        "arguments"
    };
    invalid_argument(format!("{name} expects {expected} {word}, got {got}"))
}

#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn stack_overflow(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}

// Operators

#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Binary operator applied to operand kinds it does not support.
#[cold]
pub fn operand_mismatch(op: &str, left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: format!("compatible operands for `{op}`"),
        got: format!("{left} and {right}"),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

// Statements

#[cold]
pub fn unsupported_assignment_target(reason: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedAssignmentTarget {
        reason: reason.into(),
    })
}

#[cold]
pub fn unsupported_node(node: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedNode { node })
}

#[cold]
pub fn control_flow_escape(signal: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ControlFlowEscape { signal })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_message_matches_kind() {
        let err = index_out_of_range(5, 3);
        assert_eq!(err.message, err.kind.to_string());
        assert_eq!(err.to_string(), "index 5 out of range for length 3");
    }

    #[test]
    fn arg_count_pluralizes() {
        assert_eq!(
            wrong_arg_count("len", "1", 2).to_string(),
            "invalid argument: len expects 1 argument, got 2"
        );
        assert_eq!(
            wrong_arg_count("join", "1 or 2", 0).to_string(),
            "invalid argument: join expects 1 or 2 arguments, got 0"
        );
    }

    #[test]
    fn or_span_keeps_existing_span() {
        let err = division_by_zero()
            .with_span(Span::new(4, 5))
            .or_span(Span::new(0, 9));
        assert_eq!(err.span, Some(Span::new(4, 5)));
        assert_eq!(name_not_found("x").or_span(Span::new(1, 2)).span, Some(Span::new(1, 2)));
    }

    #[test]
    fn host_errors_are_custom() {
        let err = EvalError::new("device offline");
        assert_eq!(
            err.kind,
            EvalErrorKind::Custom {
                message: "device offline".into()
            }
        );
    }
}
