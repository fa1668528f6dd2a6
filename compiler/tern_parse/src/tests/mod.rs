//! Parser tests over lexed source.

mod errors;

use crate::{parse, ParseError};
use tern_ir::{Block, Node, NodeKind};

pub(crate) fn parse_source(source: &str) -> Result<Block, ParseError> {
    let tokens = tern_lexer::lex(source).unwrap();
    parse(&tokens)
}

/// Parse a single-statement program and return its node kind.
pub(crate) fn parse_one(source: &str) -> NodeKind {
    let mut program = parse_source(source).unwrap();
    assert_eq!(program.len(), 1, "expected one statement in {source:?}");
    program.remove(0).kind
}

/// Render a node as a compact s-expression so shape assertions stay short.
pub(crate) fn sexp(node: &Node) -> String {
    use tern_ir::Chain;
    match &node.kind {
        NodeKind::Int(n) => n.to_string(),
        NodeKind::Str(s) => format!("{s:?}"),
        NodeKind::Symbol(s) => format!(":{s}"),
        NodeKind::Bool(b) => b.to_string(),
        NodeKind::Null => "null".into(),
        NodeKind::Arith { op, left, right } => format!("({op} {} {})", sexp(left), sexp(right)),
        NodeKind::Compare { op, left, right } => format!("({op} {} {})", sexp(left), sexp(right)),
        NodeKind::Or { left, right } => format!("(or {} {})", sexp(left), sexp(right)),
        NodeKind::Grouping(inner) => format!("(group {})", sexp(inner)),
        NodeKind::Array(items) => {
            let items: Vec<_> = items.iter().map(sexp).collect();
            format!("[{}]", items.join(" "))
        }
        NodeKind::Hash(entries) => {
            let entries: Vec<_> = entries
                .iter()
                .map(|(k, v)| format!("{k}={}", sexp(v)))
                .collect();
            format!("{{{}}}", entries.join(" "))
        }
        NodeKind::Reference(r) => {
            let mut out = r.name.clone();
            for chain in &r.chains {
                match chain {
                    Chain::Index(i) => out.push_str(&format!("[{}]", sexp(i))),
                    Chain::Call(args) => {
                        let args: Vec<_> = args.iter().map(sexp).collect();
                        out.push_str(&format!("({})", args.join(" ")));
                    }
                    Chain::Member(m) => out.push_str(&format!(".{m}")),
                }
            }
            out
        }
        NodeKind::Function(def) => format!("(fn {} #{})", def.params.join(","), def.body.len()),
        other => format!("<{}>", other.label()),
    }
}
