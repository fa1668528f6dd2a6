use super::parse_source;
use pretty_assertions::assert_eq;

#[test]
fn unclosed_paren_reports_position() {
    let err = parse_source("x = (1 + 2").unwrap_err();
    assert_eq!(err.expected, "`)`");
    assert_eq!(err.found, "end of input");
    assert_eq!(err.position, 6);
    assert_eq!(err.context, Some("parenthesized expression"));
}

#[test]
fn missing_right_operand() {
    let err = parse_source("a = 1 +").unwrap_err();
    assert_eq!(err.expected, "expression");
    assert_eq!(err.context, Some("right operand of arithmetic"));
}

#[test]
fn missing_assigned_value() {
    let err = parse_source("a = ]").unwrap_err();
    assert_eq!(err.expected, "expression");
    assert_eq!(err.found, "`]`");
    assert_eq!(err.context, Some("assigned value"));
}

#[test]
fn unclosed_block() {
    let err = parse_source("if x { print(x)").unwrap_err();
    assert_eq!(err.expected, "`}`");
    assert_eq!(err.context, Some("if body"));
}

#[test]
fn for_requires_in() {
    let err = parse_source("for x items { }").unwrap_err();
    assert_eq!(err.expected, "`in`");
    assert_eq!(err.found, "identifier `items`");
}

#[test]
fn hash_keys_must_be_symbols() {
    let err = parse_source("{'a' 1}").unwrap_err();
    assert_eq!(err.expected, "symbol key or `}`");
    assert_eq!(err.context, Some("hash literal"));
}

#[test]
fn stray_token_at_statement_start() {
    let err = parse_source("x = 1 )").unwrap_err();
    assert_eq!(err.expected, "expression");
    assert_eq!(err.found, "`)`");
    assert_eq!(err.context, Some("statement"));
}

#[test]
fn minus_without_number_is_not_an_expression() {
    let err = parse_source("x = -y").unwrap_err();
    assert_eq!(err.found, "`-`");
}

#[test]
fn display_includes_context() {
    let err = parse_source("while ) { }").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected expression, found `)` while parsing while condition"
    );
}

#[test]
fn brace_after_while_is_read_as_hash_condition() {
    let err = parse_source("while { }").unwrap_err();
    assert_eq!(err.expected, "`{`");
    assert_eq!(err.context, Some("while body"));
}

#[test]
fn integer_literal_outside_i64() {
    for source in ["x = 9223372036854775808", "x = -9223372036854775809"] {
        let err = parse_source(source).unwrap_err();
        assert_eq!(err.expected, "integer within the 64-bit range");
        assert!(err.found.starts_with("number"), "{source}: {}", err.found);
    }
}
