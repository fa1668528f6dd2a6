//! End-to-end tests: scripts run through lexer, parser, and executor.

mod assign_tests;
mod closure_tests;
mod control_tests;
mod error_tests;

use crate::{buffer_handler, EvalErrorKind, Interpreter, RunError, SharedPrintHandler, Value};

/// Interpreter that captures output, with a fixed seed.
fn capturing() -> (Interpreter, SharedPrintHandler) {
    let out = buffer_handler();
    let interp = Interpreter::builder()
        .print_handler(out.clone())
        .seed(7)
        .build();
    (interp, out)
}

/// Value of `source`.
fn run(source: &str) -> Value {
    let (interp, _) = capturing();
    interp.run(source, None).unwrap()
}

/// Lines printed by `source`.
fn output(source: &str) -> Vec<String> {
    let (interp, out) = capturing();
    interp.run(source, None).unwrap();
    out.lines()
}

/// Kind of the runtime error `source` fails with.
fn run_err(source: &str) -> EvalErrorKind {
    let (interp, _) = capturing();
    match interp.run(source, None) {
        Err(RunError::Eval(e)) => e.kind,
        Err(other) => panic!("expected a runtime error for {source:?}, got {other}"),
        Ok(value) => panic!("expected {source:?} to fail, got {value}"),
    }
}

fn ints(values: &[i64]) -> Value {
    Value::array(values.iter().copied().map(Value::Int).collect())
}

fn strs(values: &[&str]) -> Value {
    Value::array(values.iter().copied().map(Value::from).collect())
}
