//! Parser for Tern.
//!
//! Recursive descent over a shared [`TokenList`] with a single cursor index.
//! Each production returns a [`ParseOutcome`], which separates "this
//! alternative does not apply" (nothing consumed, try the next one) from
//! "this alternative was chosen and is malformed" (hard error).
//!
//! Every binary level is right-associative, so `10 - 3 - 2` parses as
//! `10 - (3 - 2)`. Precedence from lowest to highest:
//!
//! | level | operators |
//! |-------|-----------|
//! | or | `or`, `\|\|` |
//! | comparison | `==` `!=` `<` `<=` `>` `>=` |
//! | additive | `+` `-` |
//! | multiplicative | `*` `/` |
//!
//! There is no error recovery: the first hard failure aborts the parse.

mod cursor;
mod error;
mod grammar;
mod outcome;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

pub use error::ParseError;
pub use outcome::ParseOutcome;

use grammar::Parser;
use tern_ir::{Block, TokenList};

/// Parse a token stream into a program.
///
/// An empty stream (or one holding only `Eof`) is an empty program.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList) -> Result<Block, ParseError> {
    let program = Parser::new(tokens).parse_program()?;
    tracing::debug!(statements = program.len(), "parsed");
    Ok(program)
}
