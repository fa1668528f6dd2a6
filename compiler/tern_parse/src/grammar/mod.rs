//! Grammar productions.
//!
//! - `stmt`: statements, blocks, assignment
//! - `expr`: binary operator levels
//! - `primary`: literals, references, function literals

mod expr;
mod primary;
mod stmt;

use crate::cursor::Cursor;
use crate::ParseError;
use tern_ir::{Block, TokenKind, TokenList};

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// `program := (statement ';'*)*`
    pub fn parse_program(&mut self) -> Result<Block, ParseError> {
        let mut program = Vec::new();
        loop {
            self.skip_separators();
            if self.cursor.is_at_end() {
                return Ok(program);
            }
            let statement = self
                .statement()
                .into_result(|expected, _| self.unexpected(expected).with_context("statement"))?;
            program.push(statement);
        }
    }

    fn skip_separators(&mut self) {
        while self.cursor.eat(&TokenKind::Semicolon) {}
    }

    #[cold]
    fn unexpected(&self, expected: &str) -> ParseError {
        self.cursor.unexpected(expected)
    }
}
