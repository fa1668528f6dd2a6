//! Statements and blocks.

use super::Parser;
use crate::outcome::{chain, committed, require};
use crate::ParseOutcome;
use tern_ir::{Block, Node, NodeKind, TokenKind};

impl Parser<'_> {
    pub(super) fn statement(&mut self) -> ParseOutcome<Node> {
        match self.cursor.current_kind() {
            TokenKind::For | TokenKind::Foreach => self.for_stmt(),
            TokenKind::While => self.while_stmt(),
            TokenKind::Loop => self.loop_stmt(),
            TokenKind::If => self.if_stmt(),
            TokenKind::Break => {
                let span = self.cursor.advance().span;
                ParseOutcome::consumed_ok(Node::new(NodeKind::Break, span))
            }
            TokenKind::Next => {
                let span = self.cursor.advance().span;
                ParseOutcome::consumed_ok(Node::new(NodeKind::Next, span))
            }
            TokenKind::Return => self.return_stmt(),
            _ => self.assignment_or_expression(),
        }
    }

    /// `reference '=' expression | expression`
    ///
    /// A leading identifier is read as a reference exactly once. An `=` after
    /// it makes the statement an assignment; otherwise the reference becomes
    /// the leftmost operand of the expression.
    fn assignment_or_expression(&mut self) -> ParseOutcome<Node> {
        if !self.cursor.check_ident() {
            return self.expression();
        }
        let target = chain!(self.reference());
        if !self.cursor.eat(&TokenKind::Eq) {
            let span = target.span;
            return self.expression_from(Some(Node::new(NodeKind::Reference(target), span)));
        }
        let value = require!(self, self.expression(), "assigned value");
        let span = target.span.merge(value.span);
        ParseOutcome::consumed_ok(Node::new(
            NodeKind::Assign {
                target,
                value: Box::new(value),
            },
            span,
        ))
    }

    /// `('for' | 'foreach') identifier 'in' expression block`
    fn for_stmt(&mut self) -> ParseOutcome<Node> {
        let start = self.cursor.advance().span;
        let (var, _) = committed!(self
            .cursor
            .expect_ident()
            .map_err(|e| e.with_context("loop variable")));
        committed!(self
            .cursor
            .expect(&TokenKind::In)
            .map_err(|e| e.with_context("for loop")));
        let collection = require!(self, self.expression(), "loop collection");
        let body = committed!(self.block("for body"));
        ParseOutcome::consumed_ok(Node::new(
            NodeKind::ForEach {
                var,
                collection: Box::new(collection),
                body,
            },
            start.merge(self.cursor.previous_span()),
        ))
    }

    /// `'while' expression block`
    fn while_stmt(&mut self) -> ParseOutcome<Node> {
        let start = self.cursor.advance().span;
        let condition = require!(self, self.expression(), "while condition");
        let body = committed!(self.block("while body"));
        ParseOutcome::consumed_ok(Node::new(
            NodeKind::While {
                condition: Box::new(condition),
                body,
            },
            start.merge(self.cursor.previous_span()),
        ))
    }

    /// `'loop' block`
    fn loop_stmt(&mut self) -> ParseOutcome<Node> {
        let start = self.cursor.advance().span;
        let body = committed!(self.block("loop body"));
        ParseOutcome::consumed_ok(Node::new(
            NodeKind::Loop { body },
            start.merge(self.cursor.previous_span()),
        ))
    }

    /// `'if' expression block (('elsif' | 'else' 'if') expression block)* ('else' block)?`
    fn if_stmt(&mut self) -> ParseOutcome<Node> {
        let start = self.cursor.advance().span;
        let mut branches = Vec::new();
        let condition = require!(self, self.expression(), "if condition");
        let body = committed!(self.block("if body"));
        branches.push((condition, body));

        let mut else_block = None;
        loop {
            if self.cursor.eat(&TokenKind::Elsif) {
                let condition = require!(self, self.expression(), "elsif condition");
                let body = committed!(self.block("elsif body"));
                branches.push((condition, body));
            } else if self.cursor.eat(&TokenKind::Else) {
                if self.cursor.eat(&TokenKind::If) {
                    let condition = require!(self, self.expression(), "else-if condition");
                    let body = committed!(self.block("else-if body"));
                    branches.push((condition, body));
                } else {
                    else_block = Some(committed!(self.block("else body")));
                    break;
                }
            } else {
                break;
            }
        }

        ParseOutcome::consumed_ok(Node::new(
            NodeKind::If {
                branches,
                else_block,
            },
            start.merge(self.cursor.previous_span()),
        ))
    }

    /// `'return' expression?`
    ///
    /// A bare `return` before `}`, `;`, or end of input returns null.
    fn return_stmt(&mut self) -> ParseOutcome<Node> {
        let start = self.cursor.advance().span;
        let value = match self.cursor.current_kind() {
            TokenKind::RBrace | TokenKind::Semicolon | TokenKind::Eof => Node::new(NodeKind::Null, start),
            _ => require!(self, self.expression(), "return value"),
        };
        let span = start.merge(value.span);
        ParseOutcome::consumed_ok(Node::new(NodeKind::Return(Box::new(value)), span))
    }

    /// `'{' (statement ';'*)* '}'`
    pub(super) fn block(&mut self, context: &'static str) -> Result<Block, crate::ParseError> {
        self.cursor
            .expect(&TokenKind::LBrace)
            .map_err(|e| e.with_context(context))?;
        let mut body = Vec::new();
        loop {
            self.skip_separators();
            if self.cursor.eat(&TokenKind::RBrace) {
                return Ok(body);
            }
            if self.cursor.is_at_end() {
                return Err(self.unexpected("`}`").with_context(context));
            }
            let statement = self
                .statement()
                .into_result(|expected, _| self.unexpected(expected).with_context(context))?;
            body.push(statement);
        }
    }
}
