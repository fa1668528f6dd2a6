use super::{ints, run, run_err};
use crate::{buffer_handler, EvalErrorKind, Interpreter, RunError, Value};
use pretty_assertions::assert_eq;

#[test]
fn last_statement_is_the_result() {
    assert_eq!(run("add = fn(a, b) { a + b } add(2, 3)"), Value::Int(5));
    assert_eq!(run("f = fn() { } f()"), Value::Null);
}

#[test]
fn captures_are_a_snapshot() {
    assert_eq!(run("x = 1 f = fn() { x } x = 2 f()"), Value::Int(1));
}

#[test]
fn names_bound_after_definition_are_invisible() {
    assert_eq!(
        run_err("f = fn() { later } later = 1 f()"),
        EvalErrorKind::NameNotFound {
            name: "later".into()
        }
    );
}

#[test]
fn caller_locals_are_invisible() {
    let source = "show = fn() { secret } call = fn() { secret = 5 show() } call()";
    assert_eq!(
        run_err(source),
        EvalErrorKind::NameNotFound {
            name: "secret".into()
        }
    );
}

#[test]
fn assignments_inside_function_stay_local() {
    assert_eq!(run("x = 1 f = fn() { x = 99 x } y = f(); [x, y]"), ints(&[1, 99]));
}

#[test]
fn parameters_shadow_captures() {
    assert_eq!(run("n = 1 f = fn(n) { n * 10 } f(4)"), Value::Int(40));
}

#[test]
fn captured_containers_are_shared() {
    let source = "items = [] add = fn(v) { push(items, v) } add(1) add(2) items";
    assert_eq!(run(source), ints(&[1, 2]));
}

#[test]
fn recursion_by_passing_the_function() {
    let source = "
        fact = fn(self, n) {
            if n <= 1 { return 1 }
            n * self(self, n - 1)
        }
        fact(fact, 10)
    ";
    assert_eq!(run(source), Value::Int(3_628_800));
}

#[test]
fn direct_self_reference_is_not_captured() {
    assert_eq!(
        run_err("f = fn(n) { f(n) } f(1)"),
        EvalErrorKind::NameNotFound { name: "f".into() }
    );
}

#[test]
fn closures_returned_from_calls() {
    let source = "adder = fn(n) { fn(x) { x + n } } add5 = adder(5); [add5(10), adder(1)(1)]";
    assert_eq!(run(source), ints(&[15, 2]));
}

#[test]
fn argument_count_must_match() {
    assert!(matches!(
        run_err("f = fn(a) { a } f(1, 2)"),
        EvalErrorKind::InvalidArgument { .. }
    ));
    assert!(matches!(
        run_err("f = fn(a, b) { a } f(1)"),
        EvalErrorKind::InvalidArgument { .. }
    ));
}

#[test]
fn calling_a_non_function() {
    assert_eq!(
        run_err("x = 5 x()"),
        EvalErrorKind::NotCallable {
            type_name: "int".into()
        }
    );
}

#[test]
fn runaway_recursion_hits_depth_limit() {
    let interp = Interpreter::builder()
        .print_handler(buffer_handler())
        .max_call_depth(50)
        .build();
    let err = interp
        .run("f = fn(g, n) { g(g, n + 1) } f(f, 0)", None)
        .unwrap_err();
    let RunError::Eval(err) = err else {
        panic!("expected runtime error, got {err}");
    };
    assert_eq!(err.kind, EvalErrorKind::StackOverflow { depth: 50 });
}

#[test]
fn depth_resets_between_calls() {
    let interp = Interpreter::builder()
        .print_handler(buffer_handler())
        .max_call_depth(3)
        .build();
    let source = "
        down = fn(self, n) { if n == 0 { return 0 } self(self, n - 1) }
        down(down, 2)
        down(down, 2)
    ";
    assert_eq!(interp.run(source, None).unwrap(), Value::Int(0));
}

#[test]
fn function_literal_renders_with_params() {
    assert_eq!(run("fn(a, b) { a }").to_string(), "<fn(a, b)>");
}
