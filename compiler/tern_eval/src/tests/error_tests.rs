use super::capturing;
use crate::{EvalErrorKind, RunError};
use pretty_assertions::assert_eq;
use tern_ir::Span;

fn run_error(source: &str) -> RunError {
    let (interp, _) = capturing();
    match interp.run(source, None) {
        Err(err) => err,
        Ok(value) => panic!("expected {source:?} to fail, got {value}"),
    }
}

#[test]
fn lex_errors_are_reported_before_running() {
    let (interp, out) = capturing();
    let err = interp.run("print('hi') x = \"open", None).unwrap_err();
    assert!(matches!(err, RunError::Lex(_)));
    assert!(out.output().is_empty());
}

#[test]
fn parse_errors_are_reported_before_running() {
    let (interp, out) = capturing();
    let err = interp.run("print('hi') x = (1", None).unwrap_err();
    let RunError::Parse(parse) = &err else {
        panic!("expected a parse error, got {err}");
    };
    assert_eq!(parse.expected, "`)`");
    assert!(out.output().is_empty());
}

#[test]
fn runtime_error_points_at_the_failing_reference() {
    let source = "x = 1 + nope";
    let err = run_error(source);
    assert_eq!(err.span(), Some(Span::new(8, 12)));
    assert_eq!(err.to_string(), "runtime error: undefined name: nope");
}

#[test]
fn runtime_error_inside_function_keeps_inner_span() {
    let source = "f = fn() {\n  1 / 0\n}\nf()";
    let err = run_error(source);
    let span = err.span().unwrap();
    assert_eq!(span.line_col(source), (2, 3));
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let (interp, out) = capturing();
    let err = interp.run("print('before') boom() print('after')", None).unwrap_err();
    let RunError::Eval(err) = err else {
        panic!("expected a runtime error");
    };
    assert_eq!(err.kind, EvalErrorKind::NameNotFound { name: "boom".into() });
    assert_eq!(out.lines(), vec!["before"]);
}

#[test]
fn statements_are_not_expressions() {
    // `if` can only appear in statement position, so a nested use is a parse error.
    assert!(matches!(run_error("x = if true { 1 }"), RunError::Parse(_)));
}
