//! `parse` and `lex`: inspect what the front end makes of a script.

use super::{read_file, render_error};
use std::fmt::Write;
use tern_eval::RunError;

/// One line per token: kind and byte span.
pub fn dump_tokens(source: &str) -> Result<String, RunError> {
    let tokens = tern_lexer::lex(source)?;
    let mut out = String::new();
    for tok in tokens.iter() {
        let _ = writeln!(out, "{:?} @ {}", tok.kind, tok.span);
    }
    Ok(out)
}

/// Pretty-printed syntax tree, one top-level statement at a time.
pub fn dump_ast(source: &str) -> Result<String, RunError> {
    let tokens = tern_lexer::lex(source)?;
    let program = tern_parse::parse(&tokens)?;
    let mut out = String::new();
    for node in &program {
        let _ = writeln!(out, "{node:#?}");
    }
    Ok(out)
}

pub fn lex_file(path: &str) {
    let source = read_file(path);
    match dump_tokens(&source) {
        Ok(listing) => print!("{listing}"),
        Err(err) => {
            eprintln!("{}", render_error(path, &source, &err));
            std::process::exit(1);
        }
    }
}

pub fn parse_file(path: &str) {
    let source = read_file(path);
    match dump_ast(&source) {
        Ok(tree) => print!("{tree}"),
        Err(err) => {
            eprintln!("{}", render_error(path, &source, &err));
            std::process::exit(1);
        }
    }
}
