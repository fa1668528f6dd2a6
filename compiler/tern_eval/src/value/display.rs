//! Literal rendering.
//!
//! `Display` writes a value in the form a script would write it: strings are
//! quoted and escaped, containers use bracket syntax. For ints, strings,
//! booleans, null, and containers of those (with identifier keys) the output
//! parses back to an equal value. A container that contains itself renders
//! the inner occurrence as `[...]` or `{...}`.

use super::Value;
use chrono::SecondsFormat;
use std::fmt::{self, Write};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut seen = Vec::new();
        write_literal(self, f, &mut seen)
    }
}

fn write_literal(value: &Value, f: &mut fmt::Formatter<'_>, seen: &mut Vec<*const ()>) -> fmt::Result {
    match value {
        Value::Int(n) => write!(f, "{n}"),
        Value::Str(s) => write_quoted(s, f),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Null => f.write_str("null"),
        Value::Array(items) => {
            if seen.contains(&items.addr()) {
                return f.write_str("[...]");
            }
            seen.push(items.addr());
            f.write_char('[')?;
            for (i, item) in items.borrow().iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_literal(item, f, seen)?;
            }
            seen.pop();
            f.write_char(']')
        }
        Value::Hash(entries) => {
            if seen.contains(&entries.addr()) {
                return f.write_str("{...}");
            }
            seen.push(entries.addr());
            f.write_char('{')?;
            for (i, (key, item)) in entries.borrow().iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{key}: ")?;
                write_literal(item, f, seen)?;
            }
            seen.pop();
            f.write_char('}')
        }
        Value::Closure(closure) => write!(f, "<fn({})>", closure.params().join(", ")),
        Value::Instant(instant) => {
            f.write_str(&instant.to_rfc3339_opts(SecondsFormat::Secs, true))
        }
        Value::Object(object) => f.write_str(&object.describe()),
    }
}

fn write_quoted(s: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            '\0' => f.write_str("\\0")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
