//! Member access (`value.name`).
//!
//! Members are read-only accessors computed from the value; none of them
//! mutate the receiver. Host objects resolve their own members.

use crate::builtins::leading_int;
use crate::errors::{integer_overflow, undefined_member, EvalError, EvalResult};
use crate::value::Value;
use chrono::{Datelike, Timelike};

pub fn member(value: &Value, name: &str) -> EvalResult {
    let result = match value {
        Value::Str(s) => str_member(s, name)?,
        Value::Array(items) => {
            let items = items.borrow();
            match name {
                "length" => Some(Value::count(items.len())),
                "first" => Some(items.first().cloned().into()),
                "last" => Some(items.last().cloned().into()),
                "reverse" => Some(Value::array(items.iter().rev().cloned().collect())),
                _ => None,
            }
        }
        Value::Hash(entries) => {
            let entries = entries.borrow();
            match name {
                "length" => Some(Value::count(entries.len())),
                "keys" => Some(Value::array(
                    entries.keys().map(|k| Value::from(k.as_str())).collect(),
                )),
                "values" => Some(Value::array(entries.values().cloned().collect())),
                _ => None,
            }
        }
        Value::Int(n) => match name {
            "abs" => Some(Value::Int(
                n.checked_abs().ok_or_else(|| integer_overflow("abs"))?,
            )),
            _ => None,
        },
        Value::Instant(instant) => match name {
            "year" => Some(Value::Int(i64::from(instant.year()))),
            "month" => Some(Value::Int(i64::from(instant.month()))),
            "day" => Some(Value::Int(i64::from(instant.day()))),
            "hour" => Some(Value::Int(i64::from(instant.hour()))),
            "minute" => Some(Value::Int(i64::from(instant.minute()))),
            "second" => Some(Value::Int(i64::from(instant.second()))),
            "to_i" => Some(Value::Int(instant.timestamp())),
            _ => None,
        },
        Value::Object(object) => object.member(name),
        Value::Bool(_) | Value::Null | Value::Closure(_) => None,
    };

    match result {
        Some(found) => Ok(found),
        // `to_s` is shared by every kind a member lookup did not claim.
        None if name == "to_s" => Ok(Value::from(value.display_value())),
        None => Err(undefined_member(name, value.type_name())),
    }
}

fn str_member(s: &str, name: &str) -> Result<Option<Value>, EvalError> {
    let value = match name {
        "length" => Value::count(s.chars().count()),
        "upcase" => Value::from(s.to_uppercase()),
        "downcase" => Value::from(s.to_lowercase()),
        "strip" => Value::from(s.trim()),
        "reverse" => Value::from(s.chars().rev().collect::<String>()),
        "chars" => Value::array(s.chars().map(|c| Value::from(c.to_string())).collect()),
        "to_i" => Value::Int(leading_int(s).ok_or_else(|| integer_overflow("to_i"))?),
        _ => return Ok(None),
    };
    Ok(Some(value))
}
