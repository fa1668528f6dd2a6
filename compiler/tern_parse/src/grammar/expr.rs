//! Binary operator levels.
//!
//! Each level parses one operand, then on seeing its operator recurses into
//! itself for the right-hand side, which makes every level right-associative.
//!
//! The `lead` argument threads an operand that was already parsed (a
//! statement's leading reference) down to `term`, where it stands in for the
//! first factor.

use super::Parser;
use crate::outcome::{chain, require};
use crate::ParseOutcome;
use tern_ir::{ArithOp, CompareOp, Node, NodeKind, TokenKind};
use tern_stack::ensure_sufficient_stack;

impl Parser<'_> {
    /// `expression := comparison (('or' | '||') expression)?`
    pub(super) fn expression(&mut self) -> ParseOutcome<Node> {
        self.expression_from(None)
    }

    pub(super) fn expression_from(&mut self, lead: Option<Node>) -> ParseOutcome<Node> {
        ensure_sufficient_stack(|| {
            let left = chain!(self.comparison(lead));
            if !matches!(self.cursor.current_kind(), TokenKind::Or | TokenKind::PipePipe) {
                return ParseOutcome::consumed_ok(left);
            }
            self.cursor.advance();
            let right = require!(self, self.expression(), "right operand of `or`");
            let span = left.span.merge(right.span);
            ParseOutcome::consumed_ok(Node::new(
                NodeKind::Or {
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            ))
        })
    }

    /// `comparison := additive (compare_op comparison)?`
    fn comparison(&mut self, lead: Option<Node>) -> ParseOutcome<Node> {
        let left = chain!(self.additive(lead));
        let Some(op) = compare_op(self.cursor.current_kind()) else {
            return ParseOutcome::consumed_ok(left);
        };
        self.cursor.advance();
        let right = require!(self, self.comparison(None), "right operand of comparison");
        let span = left.span.merge(right.span);
        ParseOutcome::consumed_ok(Node::new(
            NodeKind::Compare {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        ))
    }

    /// `additive := term (('+' | '-') additive)?`
    fn additive(&mut self, lead: Option<Node>) -> ParseOutcome<Node> {
        ensure_sufficient_stack(|| {
            let left = chain!(self.term(lead));
            let op = match self.cursor.current_kind() {
                TokenKind::Plus => ArithOp::Add,
                TokenKind::Minus => ArithOp::Subtract,
                _ => return ParseOutcome::consumed_ok(left),
            };
            self.cursor.advance();
            let right = require!(self, self.additive(None), "right operand of arithmetic");
            ParseOutcome::consumed_ok(arith(op, left, right))
        })
    }

    /// `term := factor (('*' | '/') term)?`
    fn term(&mut self, lead: Option<Node>) -> ParseOutcome<Node> {
        ensure_sufficient_stack(|| {
            let left = match lead {
                Some(node) => node,
                None => chain!(self.factor()),
            };
            let op = match self.cursor.current_kind() {
                TokenKind::Star => ArithOp::Multiply,
                TokenKind::Slash => ArithOp::Divide,
                _ => return ParseOutcome::consumed_ok(left),
            };
            self.cursor.advance();
            let right = require!(self, self.term(None), "right operand of arithmetic");
            ParseOutcome::consumed_ok(arith(op, left, right))
        })
    }
}

fn arith(op: ArithOp, left: Node, right: Node) -> Node {
    let span = left.span.merge(right.span);
    Node::new(
        NodeKind::Arith {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}

fn compare_op(kind: &TokenKind) -> Option<CompareOp> {
    Some(match kind {
        TokenKind::EqEq => CompareOp::Eq,
        TokenKind::NotEq => CompareOp::Ne,
        TokenKind::Lt => CompareOp::Lt,
        TokenKind::LtEq => CompareOp::Le,
        TokenKind::Gt => CompareOp::Gt,
        TokenKind::GtEq => CompareOp::Ge,
        _ => return None,
    })
}
