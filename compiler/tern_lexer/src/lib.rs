//! Lexer for Tern using logos.
//!
//! Whitespace and line comments (`#` or `//`) are skipped. The produced
//! [`TokenList`] always ends with an `Eof` token. The first malformed token
//! aborts lexing with a [`LexError`].

use logos::Logos;
use tern_ir::{Span, Token, TokenKind, TokenList};

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

/// Raw token from logos, before payload decoding.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"#[^\n]*")]
#[logos(skip r"//[^\n]*")]
enum RawToken {
    // Keywords
    #[token("for")]
    For,
    #[token("foreach")]
    Foreach,
    #[token("in")]
    In,
    #[token("if")]
    If,
    #[token("elsif")]
    Elsif,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("loop")]
    Loop,
    #[token("break")]
    Break,
    #[token("next")]
    Next,
    #[token("return")]
    Return,
    #[token("fn")]
    Fn,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,
    #[token("or")]
    Or,

    // Literals
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r"[0-9][0-9_]*")]
    Int,
    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    Str,
    /// `:name`
    #[regex(r":[A-Za-z_][A-Za-z0-9_]*")]
    PrefixSymbol,
    /// `name:`
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*:")]
    SuffixSymbol,

    // Operators
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("||")]
    PipePipe,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
}

/// Lexing failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character {found:?}")]
    UnexpectedChar { found: char, span: Span },
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },
    #[error("integer literal `{text}` does not fit in 64 bits")]
    IntegerTooLarge { text: String, span: Span },
    #[error("unknown escape sequence `\\{escape}`")]
    InvalidEscape { escape: char, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::IntegerTooLarge { span, .. }
            | LexError::InvalidEscape { span, .. } => *span,
        }
    }
}

/// Tokenize `source`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        let Ok(raw) = token_result else {
            return Err(classify_error(source, span));
        };
        let kind = convert_token(raw, slice, span)?;
        result.push(Token::new(kind, span));
    }

    let end = Span::from_range(source.len()..source.len());
    result.push(Token::new(TokenKind::Eof, end));
    tracing::debug!(tokens = result.len(), "lexed");
    Ok(result)
}

fn convert_token(raw: RawToken, slice: &str, span: Span) -> Result<TokenKind, LexError> {
    let kind = match raw {
        RawToken::For => TokenKind::For,
        RawToken::Foreach => TokenKind::Foreach,
        RawToken::In => TokenKind::In,
        RawToken::If => TokenKind::If,
        RawToken::Elsif => TokenKind::Elsif,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,
        RawToken::Loop => TokenKind::Loop,
        RawToken::Break => TokenKind::Break,
        RawToken::Next => TokenKind::Next,
        RawToken::Return => TokenKind::Return,
        RawToken::Fn => TokenKind::Fn,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Null => TokenKind::Null,
        RawToken::Or => TokenKind::Or,

        RawToken::Ident => TokenKind::Ident(slice.to_owned()),
        RawToken::Int => TokenKind::Int(parse_int(slice, span)?),
        RawToken::Str => TokenKind::Str(unescape(&slice[1..slice.len() - 1], span)?),
        RawToken::PrefixSymbol => TokenKind::Symbol(slice[1..].to_owned()),
        RawToken::SuffixSymbol => TokenKind::Symbol(slice[..slice.len() - 1].to_owned()),

        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::PipePipe => TokenKind::PipePipe,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
    };
    Ok(kind)
}

fn parse_int(slice: &str, span: Span) -> Result<u64, LexError> {
    let digits: String = slice.chars().filter(|&c| c != '_').collect();
    digits.parse().map_err(|_| LexError::IntegerTooLarge {
        text: slice.to_owned(),
        span,
    })
}

/// Resolve backslash escapes in a string body (quotes already stripped).
fn unescape(body: &str, span: Span) -> Result<String, LexError> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escape = chars.next().unwrap_or('\\');
        out.push(match escape {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '0' => '\0',
            '\\' | '"' | '\'' => escape,
            _ => return Err(LexError::InvalidEscape { escape, span }),
        });
    }
    Ok(out)
}

/// Turn a logos error span into a specific [`LexError`].
fn classify_error(source: &str, span: Span) -> LexError {
    let found = source
        .get(span.start as usize..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or('\0');
    if found == '"' || found == '\'' {
        let end = Span::from_range(source.len()..source.len());
        LexError::UnterminatedString {
            span: span.merge(end),
        }
    } else {
        LexError::UnexpectedChar { found, span }
    }
}
