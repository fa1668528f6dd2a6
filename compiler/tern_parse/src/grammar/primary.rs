//! Factors: literals, grouping, function literals, and references.

use super::Parser;
use crate::outcome::{committed, require};
use crate::ParseOutcome;
use std::rc::Rc;
use tern_ir::{Chain, FunctionDef, Node, NodeKind, Reference, TokenKind};

const INT_RANGE: &str = "integer within the 64-bit range";

impl Parser<'_> {
    pub(super) fn factor(&mut self) -> ParseOutcome<Node> {
        let token = self.cursor.current();
        let literal = |kind| ParseOutcome::consumed_ok(Node::new(kind, token.span));
        match &token.kind {
            TokenKind::LParen => self.grouping(),
            TokenKind::Int(magnitude) => {
                let Ok(n) = i64::try_from(*magnitude) else {
                    return ParseOutcome::consumed_err(self.unexpected(INT_RANGE));
                };
                self.cursor.advance();
                literal(NodeKind::Int(n))
            }
            // A minus directly before a number is a negative literal. Negating
            // the magnitude here is what lets `-9223372036854775808` parse.
            TokenKind::Minus => {
                let TokenKind::Int(magnitude) = self.cursor.peek_kind_at(1) else {
                    return ParseOutcome::empty_err("expression", self.cursor.position());
                };
                self.cursor.advance();
                let Some(n) = 0_i64.checked_sub_unsigned(*magnitude) else {
                    return ParseOutcome::consumed_err(self.unexpected(INT_RANGE));
                };
                let end = self.cursor.advance().span;
                ParseOutcome::consumed_ok(Node::new(NodeKind::Int(n), token.span.merge(end)))
            }
            TokenKind::Str(s) => {
                self.cursor.advance();
                literal(NodeKind::Str(s.clone()))
            }
            TokenKind::Symbol(s) => {
                self.cursor.advance();
                literal(NodeKind::Symbol(s.clone()))
            }
            TokenKind::True => {
                self.cursor.advance();
                literal(NodeKind::Bool(true))
            }
            TokenKind::False => {
                self.cursor.advance();
                literal(NodeKind::Bool(false))
            }
            TokenKind::Null => {
                self.cursor.advance();
                literal(NodeKind::Null)
            }
            TokenKind::LBracket => self.array_literal(),
            TokenKind::LBrace => self.hash_literal(),
            TokenKind::Fn => self.function_literal(),
            TokenKind::Ident(_) => self.reference().map(|r| {
                let span = r.span;
                Node::new(NodeKind::Reference(r), span)
            }),
            _ => ParseOutcome::empty_err("expression", self.cursor.position()),
        }
    }

    /// `'(' expression ')'`
    fn grouping(&mut self) -> ParseOutcome<Node> {
        let start = self.cursor.advance().span;
        let inner = require!(self, self.expression(), "parenthesized expression");
        let end = committed!(self
            .cursor
            .expect(&TokenKind::RParen)
            .map_err(|e| e.with_context("parenthesized expression")));
        ParseOutcome::consumed_ok(Node::new(
            NodeKind::Grouping(Box::new(inner)),
            start.merge(end),
        ))
    }

    /// `'[' (expression ','?)* ']'`
    fn array_literal(&mut self) -> ParseOutcome<Node> {
        let start = self.cursor.advance().span;
        let mut items = Vec::new();
        while !self.cursor.check(&TokenKind::RBracket) {
            items.push(require!(self, self.expression(), "array literal"));
            self.cursor.eat(&TokenKind::Comma);
        }
        let end = self.cursor.advance().span;
        ParseOutcome::consumed_ok(Node::new(NodeKind::Array(items), start.merge(end)))
    }

    /// `'{' (symbol expression ','?)* '}'`
    fn hash_literal(&mut self) -> ParseOutcome<Node> {
        let start = self.cursor.advance().span;
        let mut entries = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) {
            let TokenKind::Symbol(key) = self.cursor.current_kind() else {
                return ParseOutcome::consumed_err(
                    self.unexpected("symbol key or `}`").with_context("hash literal"),
                );
            };
            self.cursor.advance();
            let value = require!(self, self.expression(), "hash literal");
            entries.push((key.clone(), value));
            self.cursor.eat(&TokenKind::Comma);
        }
        let end = self.cursor.advance().span;
        ParseOutcome::consumed_ok(Node::new(NodeKind::Hash(entries), start.merge(end)))
    }

    /// `'fn' '(' (identifier ','?)* ')' block`
    fn function_literal(&mut self) -> ParseOutcome<Node> {
        let start = self.cursor.advance().span;
        committed!(self
            .cursor
            .expect(&TokenKind::LParen)
            .map_err(|e| e.with_context("function parameters")));
        let mut params = Vec::new();
        while !self.cursor.eat(&TokenKind::RParen) {
            let (name, _) = committed!(self
                .cursor
                .expect_ident()
                .map_err(|e| e.with_context("function parameters")));
            params.push(name);
            self.cursor.eat(&TokenKind::Comma);
        }
        let body = committed!(self.block("function body"));
        let span = start.merge(self.cursor.previous_span());
        let def = FunctionDef { params, body, span };
        ParseOutcome::consumed_ok(Node::new(NodeKind::Function(Rc::new(def)), span))
    }

    /// `identifier chain*`
    pub(super) fn reference(&mut self) -> ParseOutcome<Reference> {
        let TokenKind::Ident(name) = self.cursor.current_kind() else {
            return ParseOutcome::empty_err("identifier", self.cursor.position());
        };
        let start = self.cursor.advance().span;
        let mut chains = Vec::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::LBracket => {
                    self.cursor.advance();
                    let index = require!(self, self.expression(), "index");
                    committed!(self
                        .cursor
                        .expect(&TokenKind::RBracket)
                        .map_err(|e| e.with_context("index")));
                    chains.push(Chain::Index(index));
                }
                TokenKind::LParen => {
                    self.cursor.advance();
                    let mut args = Vec::new();
                    while !self.cursor.eat(&TokenKind::RParen) {
                        args.push(require!(self, self.expression(), "call arguments"));
                        self.cursor.eat(&TokenKind::Comma);
                    }
                    chains.push(Chain::Call(args));
                }
                TokenKind::Dot => {
                    self.cursor.advance();
                    let (member, _) = committed!(self
                        .cursor
                        .expect_ident()
                        .map_err(|e| e.with_context("member access")));
                    chains.push(Chain::Member(member));
                }
                _ => break,
            }
        }
        ParseOutcome::consumed_ok(Reference {
            name: name.clone(),
            chains,
            span: start.merge(self.cursor.previous_span()),
        })
    }
}
