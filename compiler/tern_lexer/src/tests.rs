use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().iter().map(|t| t.kind.clone()).collect()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Ident(name.to_owned())
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("  \n\t # only a comment\n"), vec![TokenKind::Eof]);
}

#[test]
fn assignment_and_arithmetic() {
    assert_eq!(
        kinds("total = a + 12 * b"),
        vec![
            ident("total"),
            TokenKind::Eq,
            ident("a"),
            TokenKind::Plus,
            TokenKind::Int(12),
            TokenKind::Star,
            ident("b"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_win_over_identifiers_only_on_exact_match() {
    assert_eq!(
        kinds("for foreach format orbit or"),
        vec![
            TokenKind::For,
            TokenKind::Foreach,
            ident("format"),
            ident("orbit"),
            TokenKind::Or,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comparison_operators_take_longest_match() {
    assert_eq!(
        kinds("a <= b >= c == d != e < f > g || h"),
        vec![
            ident("a"),
            TokenKind::LtEq,
            ident("b"),
            TokenKind::GtEq,
            ident("c"),
            TokenKind::EqEq,
            ident("d"),
            TokenKind::NotEq,
            ident("e"),
            TokenKind::Lt,
            ident("f"),
            TokenKind::Gt,
            ident("g"),
            TokenKind::PipePipe,
            ident("h"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn symbols_in_both_spellings() {
    assert_eq!(
        kinds("{name: 1, :age 2}"),
        vec![
            TokenKind::LBrace,
            TokenKind::Symbol("name".into()),
            TokenKind::Int(1),
            TokenKind::Comma,
            TokenKind::Symbol("age".into()),
            TokenKind::Int(2),
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn string_escapes_are_decoded() {
    assert_eq!(
        kinds(r#""a\"b\n" 'it\'s'"#),
        vec![
            TokenKind::Str("a\"b\n".into()),
            TokenKind::Str("it's".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn underscores_in_numbers() {
    assert_eq!(kinds("1_000_000"), vec![TokenKind::Int(1_000_000), TokenKind::Eof]);
}

#[test]
fn comments_are_skipped() {
    assert_eq!(
        kinds("x = 1 # trailing\n// whole line\ny"),
        vec![ident("x"), TokenKind::Eq, TokenKind::Int(1), ident("y"), TokenKind::Eof]
    );
}

#[test]
fn spans_point_at_source() {
    let tokens = lex("ab = 'x'").unwrap();
    assert_eq!(tokens[0].span, Span::new(0, 2));
    assert_eq!(tokens[1].span, Span::new(3, 4));
    assert_eq!(tokens[2].span, Span::new(5, 8));
    assert_eq!(tokens[3].span, Span::point(8));
}

#[test]
fn unexpected_character_is_an_error() {
    let err = lex("a = 1 @ 2").unwrap_err();
    assert_eq!(
        err,
        LexError::UnexpectedChar {
            found: '@',
            span: Span::new(6, 7)
        }
    );
}

#[test]
fn unterminated_string_is_an_error() {
    let err = lex("x = \"abc").unwrap_err();
    assert!(matches!(err, LexError::UnterminatedString { .. }), "{err:?}");
    assert_eq!(err.span().start, 4);
}

#[test]
fn unknown_escape_is_an_error() {
    let err = lex(r#""\q""#).unwrap_err();
    assert!(matches!(err, LexError::InvalidEscape { escape: 'q', .. }));
}

#[test]
fn oversized_integer_is_an_error() {
    let err = lex("99999999999999999999").unwrap_err();
    assert!(matches!(err, LexError::IntegerTooLarge { .. }));
}

proptest! {
    #[test]
    fn any_magnitude_lexes_back(n in any::<u64>()) {
        prop_assert_eq!(kinds(&n.to_string()), vec![TokenKind::Int(n), TokenKind::Eof]);
    }

    #[test]
    fn identifiers_keep_their_text(name in "[a-z_][a-z0-9_]{0,12}") {
        let keywords = [
            "for", "foreach", "in", "if", "elsif", "else", "while", "loop", "break",
            "next", "return", "fn", "true", "false", "null", "or",
        ];
        prop_assume!(!keywords.contains(&name.as_str()));
        prop_assert_eq!(kinds(&name), vec![TokenKind::Ident(name.clone()), TokenKind::Eof]);
    }
}
