use super::*;
use chrono::TimeZone;
use pretty_assertions::assert_eq;

fn hash(entries: &[(&str, Value)]) -> Value {
    Value::hash(
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect(),
    )
}

#[test]
fn truthiness() {
    assert!(!Value::Null.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Int(0).is_truthy());
    assert!(Value::from("").is_truthy());
    assert!(Value::array(vec![]).is_truthy());
}

#[test]
fn literal_form_quotes_and_escapes_strings() {
    assert_eq!(Value::from("a\"b\\c\n").to_string(), r#""a\"b\\c\n""#);
    assert_eq!(Value::from("plain").display_value(), "plain");
}

#[test]
fn containers_render_nested_literals() {
    let value = Value::array(vec![
        Value::Int(1),
        Value::from("x"),
        hash(&[("a", Value::Null), ("b", Value::Bool(true))]),
    ]);
    assert_eq!(value.to_string(), r#"[1, "x", {a: null, b: true}]"#);
    assert_eq!(value.display_value(), value.to_string());
}

#[test]
fn self_containing_array_renders_finitely() {
    let value = Value::array(vec![Value::Int(1)]);
    if let Value::Array(items) = &value {
        items.borrow_mut().push(value.clone());
    }
    assert_eq!(value.to_string(), "[1, [...]]");
}

#[test]
fn instant_renders_as_rfc3339() {
    let instant = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).single().unwrap();
    assert_eq!(Value::from(instant).to_string(), "2024-03-09T14:05:00Z");
}

#[test]
fn equality_is_structural_for_containers() {
    assert_eq!(
        Value::array(vec![Value::Int(1), Value::from("a")]),
        Value::array(vec![Value::Int(1), Value::from("a")])
    );
    assert_ne!(Value::array(vec![Value::Int(1)]), Value::array(vec![]));
    assert_eq!(
        hash(&[("a", Value::Int(1)), ("b", Value::Int(2))]),
        hash(&[("b", Value::Int(2)), ("a", Value::Int(1))])
    );
}

fn self_containing(head: Value) -> Value {
    let value = Value::array(vec![head]);
    if let Value::Array(items) = &value {
        items.borrow_mut().push(value.clone());
    }
    value
}

#[test]
fn equality_terminates_on_self_containing_containers() {
    assert_eq!(self_containing(Value::Int(1)), self_containing(Value::Int(1)));
    assert_ne!(self_containing(Value::Int(1)), self_containing(Value::Int(2)));

    let left = hash(&[("n", Value::Int(1))]);
    let right = hash(&[("n", Value::Int(1))]);
    for value in [&left, &right] {
        if let Value::Hash(entries) = value {
            entries.borrow_mut().insert("me".into(), value.clone());
        }
    }
    assert_eq!(left, right);
}

#[test]
fn different_kinds_are_never_equal() {
    assert_ne!(Value::Int(1), Value::from("1"));
    assert_ne!(Value::Null, Value::Bool(false));
}

#[test]
fn type_names() {
    assert_eq!(Value::Int(1).type_name(), "int");
    assert_eq!(Value::from("s").type_name(), "str");
    assert_eq!(hash(&[]).type_name(), "hash");
    assert_eq!(Value::from(None::<i64>).type_name(), "null");
}
