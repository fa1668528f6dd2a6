//! Syntax tree.
//!
//! Every construct is a [`Node`]: a [`NodeKind`] plus the span it came from.
//! Statements and expressions share the same type; the executor decides which
//! kinds are legal in expression position.

use crate::Span;
use std::fmt;
use std::rc::Rc;

/// Ordered statements evaluated against one frame.
pub type Block = Vec<Node>;

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    #[inline]
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    // Statements
    Assign {
        target: Reference,
        value: Box<Node>,
    },
    ForEach {
        var: String,
        collection: Box<Node>,
        body: Block,
    },
    While {
        condition: Box<Node>,
        body: Block,
    },
    Loop {
        body: Block,
    },
    If {
        branches: Vec<(Node, Block)>,
        else_block: Option<Block>,
    },
    Break,
    Next,
    Return(Box<Node>),

    // Operators
    Arith {
        op: ArithOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Compare {
        op: CompareOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Or {
        left: Box<Node>,
        right: Box<Node>,
    },

    // Literals
    Int(i64),
    Str(String),
    Bool(bool),
    Null,
    Symbol(String),
    Array(Vec<Node>),
    /// Entries in source order; keys are symbol names.
    Hash(Vec<(String, Node)>),
    Function(Rc<FunctionDef>),

    Reference(Reference),
    Grouping(Box<Node>),
}

impl NodeKind {
    /// True for kinds that only make sense as statements.
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeKind::Assign { .. }
                | NodeKind::ForEach { .. }
                | NodeKind::While { .. }
                | NodeKind::Loop { .. }
                | NodeKind::If { .. }
                | NodeKind::Break
                | NodeKind::Next
                | NodeKind::Return(_)
        )
    }

    /// Short label for diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Assign { .. } => "assignment",
            NodeKind::ForEach { .. } => "for loop",
            NodeKind::While { .. } => "while loop",
            NodeKind::Loop { .. } => "loop",
            NodeKind::If { .. } => "if",
            NodeKind::Break => "break",
            NodeKind::Next => "next",
            NodeKind::Return(_) => "return",
            NodeKind::Arith { .. } => "arithmetic",
            NodeKind::Compare { .. } => "comparison",
            NodeKind::Or { .. } => "or",
            NodeKind::Int(_) => "integer literal",
            NodeKind::Str(_) => "string literal",
            NodeKind::Bool(_) => "boolean literal",
            NodeKind::Null => "null",
            NodeKind::Symbol(_) => "symbol",
            NodeKind::Array(_) => "array literal",
            NodeKind::Hash(_) => "hash literal",
            NodeKind::Function(_) => "function literal",
            NodeKind::Reference(_) => "reference",
            NodeKind::Grouping(_) => "grouping",
        }
    }
}

/// A name followed by zero or more index, call, or member suffixes.
#[derive(Clone, Debug, PartialEq)]
pub struct Reference {
    pub name: String,
    pub chains: Vec<Chain>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Chain {
    /// `[expr]`
    Index(Node),
    /// `(args...)`
    Call(Vec<Node>),
    /// `.name`
    Member(String),
}

impl Chain {
    pub fn label(&self) -> &'static str {
        match self {
            Chain::Index(_) => "index",
            Chain::Call(_) => "call",
            Chain::Member(_) => "member access",
        }
    }
}

/// Parameters and body of a `fn(...) { ... }` literal.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDef {
    pub params: Vec<String>,
    pub body: Block,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Subtract => "-",
            ArithOp::Multiply => "*",
            ArithOp::Divide => "/",
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_kinds() {
        assert!(NodeKind::Break.is_statement());
        assert!(NodeKind::Return(Box::new(Node::new(NodeKind::Null, Span::DUMMY))).is_statement());
        assert!(!NodeKind::Int(1).is_statement());
        assert!(!NodeKind::Symbol("a".into()).is_statement());
    }

    #[test]
    fn operator_symbols() {
        assert_eq!(ArithOp::Divide.to_string(), "/");
        assert_eq!(CompareOp::Ge.to_string(), ">=");
    }
}
