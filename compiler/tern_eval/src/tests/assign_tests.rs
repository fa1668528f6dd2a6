use super::{ints, run, run_err};
use crate::{EvalErrorKind, HashMap, Value};
use pretty_assertions::assert_eq;

#[test]
fn assignment_yields_the_value() {
    assert_eq!(run("x = 5"), Value::Int(5));
    assert_eq!(run("x = 5 x = x * 2 x"), Value::Int(10));
}

#[test]
fn index_assignment_updates_in_place() {
    assert_eq!(run("a = [1, 2, 3] a[0] = 10 a"), ints(&[10, 2, 3]));
    assert_eq!(run("a = [1, 2, 3] a[-1] = 0 a"), ints(&[1, 2, 0]));
}

#[test]
fn aliases_observe_mutation() {
    assert_eq!(run("a = [1] b = a b[0] = 5 a[0]"), Value::Int(5));
    assert_eq!(run("h = {} g = h g[:k] = 1 h"), run("{k: 1}"));
}

#[test]
fn nested_index_assignment() {
    let source = "grid = [[0, 0], [0, 0]] grid[1][0] = 7 grid";
    assert_eq!(
        run(source),
        Value::array(vec![ints(&[0, 0]), ints(&[7, 0])])
    );
}

#[test]
fn hash_assignment_inserts_and_replaces() {
    let mut expected = HashMap::new();
    expected.insert("name".to_string(), Value::from("b"));
    expected.insert("size".to_string(), Value::Int(2));
    assert_eq!(
        run("h = {name: 'a'} h['size'] = 2 h[:name] = 'b' h"),
        Value::hash(expected)
    );
}

#[test]
fn hash_keeps_first_insertion_position() {
    assert_eq!(run("h = {a: 1, b: 2} h[:a] = 3 h").to_string(), "{a: 3, b: 2}");
}

#[test]
fn index_assignment_into_function_result_container() {
    let source = "rows = [{n: 1}] rows[0]['n'] = 2 rows[0][:n]";
    assert_eq!(run(source), Value::Int(2));
}

#[test]
fn array_slot_must_exist() {
    assert_eq!(
        run_err("a = [] a[0] = 1"),
        EvalErrorKind::IndexOutOfRange { index: 0, len: 0 }
    );
    assert_eq!(
        run_err("a = [1] a[-2] = 1"),
        EvalErrorKind::IndexOutOfRange { index: -2, len: 1 }
    );
}

#[test]
fn member_and_call_targets_are_unsupported() {
    assert!(matches!(
        run_err("h = {} h.size = 1"),
        EvalErrorKind::UnsupportedAssignmentTarget { .. }
    ));
    assert!(matches!(
        run_err("make = fn() { [0] } make()[0] = 1"),
        EvalErrorKind::UnsupportedAssignmentTarget { .. }
    ));
}

#[test]
fn indexing_into_unbound_name() {
    assert_eq!(
        run_err("missing[0] = 1"),
        EvalErrorKind::NameNotFound {
            name: "missing".into()
        }
    );
}

#[test]
fn wrong_key_kind() {
    assert!(matches!(run_err("a = [1] a['x'] = 2"), EvalErrorKind::TypeMismatch { .. }));
    assert!(matches!(run_err("h = {} h[0] = 2"), EvalErrorKind::TypeMismatch { .. }));
}

#[test]
fn reading_indexes() {
    assert_eq!(run("a = [10, 20, 30] a[-1]"), Value::Int(30));
    assert_eq!(run("s = 'héllo' s[1]"), Value::from("é"));
    assert_eq!(
        run_err("h = {a: 1} h[:b]"),
        EvalErrorKind::KeyNotFound { key: "b".into() }
    );
    assert_eq!(
        run_err("a = [1, 2] a[2]"),
        EvalErrorKind::IndexOutOfRange { index: 2, len: 2 }
    );
}
