//! Parse error type.

use tern_ir::{Span, Token};

/// A grammar violation at a token position.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, found {found}{}", context_suffix(.context))]
pub struct ParseError {
    /// Index of the offending token in the token stream.
    pub position: usize,
    pub span: Span,
    pub expected: String,
    pub found: String,
    /// The production being parsed, e.g. "if condition".
    pub context: Option<&'static str>,
}

impl ParseError {
    #[cold]
    pub fn expected(expected: impl Into<String>, found: &Token, position: usize) -> Self {
        ParseError {
            position,
            span: found.span,
            expected: expected.into(),
            found: found.kind.to_string(),
            context: None,
        }
    }

    /// Attach the production name, keeping any more specific context.
    #[must_use]
    pub fn with_context(mut self, context: &'static str) -> Self {
        if self.context.is_none() {
            self.context = Some(context);
        }
        self
    }
}

fn context_suffix(context: &Option<&'static str>) -> String {
    context.map_or_else(String::new, |c| format!(" while parsing {c}"))
}
