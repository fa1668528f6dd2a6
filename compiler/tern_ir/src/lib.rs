//! Shared data types for the Tern pipeline.
//!
//! - [`Span`]: byte range into the script text
//! - [`Token`], [`TokenKind`], [`TokenList`]: lexer output, parser input
//! - [`Node`], [`NodeKind`], [`Reference`], [`Chain`]: the syntax tree
//!
//! The tree is immutable once built. Function bodies are reference-counted so
//! closures can share them without cloning.

mod ast;
mod span;
mod token;

pub use ast::{ArithOp, Block, Chain, CompareOp, FunctionDef, Node, NodeKind, Reference};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
