use super::{ints, output, run, run_err, strs};
use crate::exec::{to_loop_action, Flow, LoopAction};
use crate::{EvalErrorKind, Value};
use pretty_assertions::assert_eq;

mod to_loop_action_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normal_and_next_continue() {
        assert!(matches!(to_loop_action(Flow::Normal(Value::Int(1))), LoopAction::Continue));
        assert!(matches!(to_loop_action(Flow::Next), LoopAction::Continue));
    }

    #[test]
    fn break_stops_the_loop() {
        assert!(matches!(to_loop_action(Flow::Break), LoopAction::Break));
    }

    #[test]
    fn return_propagates_with_value() {
        let action = to_loop_action(Flow::Return(Value::Int(42)));
        if let LoopAction::Propagate(Flow::Return(v)) = action {
            assert_eq!(v, Value::Int(42));
        } else {
            panic!("expected LoopAction::Propagate, got {action:?}");
        }
    }
}

#[test]
fn while_runs_until_condition_fails() {
    let source = "
        i = 0
        total = 0
        while i < 5 {
            i = i + 1
            total = total + i
        }
        total
    ";
    assert_eq!(run(source), Value::Int(15));
}

#[test]
fn while_with_falsy_condition_never_runs() {
    assert_eq!(run("x = 1 while null { x = 2 } x"), Value::Int(1));
}

#[test]
fn loop_runs_until_break() {
    assert_eq!(run("i = 0 loop { i = i + 1 if i == 3 { break } } i"), Value::Int(3));
}

#[test]
fn next_skips_rest_of_body() {
    let source = "out = [] for x in [1, 2, 3, 4] { if x == 2 { next } push(out, x) } out";
    assert_eq!(run(source), ints(&[1, 3, 4]));
}

#[test]
fn break_leaves_only_innermost_loop() {
    let source = "
        pairs = []
        for a in [1, 2] {
            for b in [10, 20, 30] {
                if b == 20 { break }
                push(pairs, a * b)
            }
        }
        pairs
    ";
    assert_eq!(run(source), ints(&[10, 20]));
}

#[test]
fn loop_variable_survives_loop() {
    assert_eq!(run("for x in [1, 2, 3] { } x"), Value::Int(3));
    assert_eq!(run("foreach item in ['a'] { seen = item } seen"), Value::from("a"));
}

#[test]
fn hash_iteration_yields_keys_in_insertion_order() {
    let source = "keys = [] for k in {b: 1, a: 2} { push(keys, k) } keys";
    assert_eq!(run(source), strs(&["b", "a"]));
}

#[test]
fn collection_is_evaluated_once() {
    let source = "items = [1, 2] for x in items { push(items, x) } items";
    assert_eq!(run(source), ints(&[1, 2, 1, 2]));
}

#[test]
fn iterating_non_collection_is_type_mismatch() {
    assert!(matches!(
        run_err("for x in 5 { }"),
        EvalErrorKind::TypeMismatch { .. }
    ));
}

#[test]
fn if_chain_picks_first_truthy_branch() {
    let source = "
        classify = fn(n) {
            if n < 0 { 'negative' } elsif n == 0 { 'zero' } else if n < 10 { 'small' } else { 'large' }
        }
        [classify(-1), classify(0), classify(5), classify(50)]
    ";
    assert_eq!(run(source), strs(&["negative", "zero", "small", "large"]));
}

#[test]
fn if_without_match_and_no_else_is_null() {
    assert_eq!(run("if false { 1 }"), Value::Null);
}

#[test]
fn zero_and_empty_string_are_truthy() {
    assert_eq!(output("if 0 { print('zero') } if '' { print('empty') }"), vec!["zero", "empty"]);
}

#[test]
fn return_exits_function_from_inside_loop() {
    let source = "
        find = fn(xs, wanted) {
            for x in xs { if x == wanted { return x * 100 } }
            null
        }
        [find([1, 2, 3], 2), find([1], 9)]
    ";
    assert_eq!(run(source), Value::array(vec![Value::Int(200), Value::Null]));
}

#[test]
fn top_level_return_stops_program() {
    assert_eq!(output("print('a') return 5 print('b')"), vec!["a"]);
    assert_eq!(run("return 5 print('b')"), Value::Int(5));
}

#[test]
fn break_outside_loop_escapes() {
    assert_eq!(run_err("break"), EvalErrorKind::ControlFlowEscape { signal: "break" });
    assert_eq!(
        run_err("if true { next }"),
        EvalErrorKind::ControlFlowEscape { signal: "next" }
    );
}

#[test]
fn break_cannot_cross_call_boundary() {
    let source = "stop = fn() { break } for x in [1, 2] { stop() }";
    assert_eq!(run_err(source), EvalErrorKind::ControlFlowEscape { signal: "break" });
}
