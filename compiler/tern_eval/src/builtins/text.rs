use super::{arg_type, require_args, require_str_arg, Builtin};
use crate::errors::{integer_overflow, invalid_argument, wrong_arg_count, EvalError, EvalResult};
use crate::exec::Executor;
use crate::interpreter::PATTERN_CACHE_LIMIT;
use crate::value::Value;
use regex::{Regex, RegexBuilder};

/// `print(args...)`: one line per argument, or a blank line when called
/// with none.
pub(super) fn print(ctx: &Executor<'_>, args: &[Value]) -> EvalResult {
    if args.is_empty() {
        ctx.interp.print_handler.println("");
    }
    for arg in args {
        ctx.interp.print_handler.println(&arg.display_value());
    }
    Ok(Value::Null)
}

/// `join(array, separator = "")`.
pub(super) fn join(args: &[Value]) -> EvalResult {
    if !(1..=2).contains(&args.len()) {
        return Err(wrong_arg_count("join", "1 or 2", args.len()));
    }
    let Value::Array(items) = &args[0] else {
        return Err(arg_type(Builtin::Join, "array", &args[0]));
    };
    let separator = if args.len() == 2 {
        require_str_arg(Builtin::Join, args, 1)?
    } else {
        ""
    };
    let joined = items
        .borrow()
        .iter()
        .map(Value::display_value)
        .collect::<Vec<_>>()
        .join(separator);
    Ok(Value::from(joined))
}

/// `len(x)`: characters of a string, elements of an array, entries of a hash.
pub(super) fn len(args: &[Value]) -> EvalResult {
    require_args(Builtin::Len, 1, args)?;
    match &args[0] {
        Value::Str(s) => Ok(Value::count(s.chars().count())),
        Value::Array(items) => Ok(Value::count(items.borrow().len())),
        Value::Hash(entries) => Ok(Value::count(entries.borrow().len())),
        other => Err(arg_type(Builtin::Len, "str, array, or hash", other)),
    }
}

/// `int(x)`: leading integer of a string; integers pass through.
pub(super) fn int(args: &[Value]) -> EvalResult {
    require_args(Builtin::Int, 1, args)?;
    match &args[0] {
        Value::Int(n) => Ok(Value::Int(*n)),
        Value::Str(s) => leading_int(s)
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("int conversion")),
        Value::Instant(at) => Ok(Value::Int(at.timestamp())),
        other => Err(arg_type(Builtin::Int, "str, int or instant", other)),
    }
}

/// Parse the integer prefix of `text`, ignoring leading whitespace.
///
/// Accepts an optional sign and digits with single underscores between them.
/// Text without a numeric prefix is 0. Returns `None` only on overflow.
pub(crate) fn leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut chars = digits.chars().peekable();
    let mut after_digit = false;
    while let Some(c) = chars.next() {
        if let Some(d) = c.to_digit(10) {
            let d = i64::from(d);
            // Accumulate toward the sign so i64::MIN parses.
            value = value.checked_mul(10)?;
            value = if negative {
                value.checked_sub(d)?
            } else {
                value.checked_add(d)?
            };
            after_digit = true;
        } else if c == '_' && after_digit && chars.peek().is_some_and(char::is_ascii_digit) {
            after_digit = false;
        } else {
            break;
        }
    }
    Some(value)
}

/// `match(text, pattern)`: first match as `[whole, group1, ...]`, or null.
///
/// `pattern` is either a bare regular expression or `/body/flags` with flags
/// drawn from `i` (case-insensitive), `m` (multi-line, `.` matches newline),
/// and `x` (ignore whitespace). Groups that did not participate are null.
pub(super) fn match_pattern(ctx: &Executor<'_>, args: &[Value]) -> EvalResult {
    require_args(Builtin::Match, 2, args)?;
    let text = require_str_arg(Builtin::Match, args, 0)?;
    let pattern = require_str_arg(Builtin::Match, args, 1)?;

    let mut cache = ctx.interp.patterns.borrow_mut();
    if !cache.contains_key(pattern) {
        let compiled = compile_pattern(pattern)?;
        tracing::trace!(pattern, "compiled pattern");
        if cache.len() >= PATTERN_CACHE_LIMIT {
            tracing::debug!(entries = cache.len(), "pattern cache full, clearing");
            cache.clear();
        }
        cache.insert(pattern.to_string(), compiled);
    }
    let regex = &cache[pattern];

    Ok(match regex.captures(text) {
        Some(captures) => Value::array(
            captures
                .iter()
                .map(|group| group.map(|m| m.as_str()).into())
                .collect(),
        ),
        None => Value::Null,
    })
}

fn compile_pattern(pattern: &str) -> Result<Regex, EvalError> {
    let (body, flags) = split_delimited(pattern).unwrap_or((pattern, ""));
    let mut builder = RegexBuilder::new(body);
    for flag in flags.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true).dot_matches_new_line(true),
            'x' => builder.ignore_whitespace(true),
            other => return Err(invalid_argument(format!("unknown pattern flag '{other}'"))),
        };
    }
    builder
        .build()
        .map_err(|e| invalid_argument(format!("invalid pattern: {e}")))
}

/// Split `/body/flags` into its parts.
fn split_delimited(pattern: &str) -> Option<(&str, &str)> {
    let rest = pattern.strip_prefix('/')?;
    let end = rest.rfind('/')?;
    Some((&rest[..end], &rest[end + 1..]))
}
