//! Runtime values.
//!
//! Arrays and hashes are mutable and shared: copying a `Value` copies the
//! handle, so two names can observe the same container. Everything else is
//! immutable.

mod display;
mod shared;

pub use shared::Shared;

use crate::environment::Closure;
use crate::external::HostObject;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

/// Insertion-ordered string-keyed mapping backing hash values.
pub type HashMap = IndexMap<String, Value>;

#[derive(Clone)]
pub enum Value {
    Int(i64),
    Str(Rc<str>),
    Bool(bool),
    Null,
    Array(Shared<Vec<Value>>),
    Hash(Shared<HashMap>),
    Closure(Closure),
    /// Point in time returned by `now()`.
    Instant(DateTime<Utc>),
    /// Opaque handle supplied by the host.
    Object(Rc<dyn HostObject>),
}

impl Value {
    #[inline]
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Shared::new(items))
    }

    #[inline]
    pub fn hash(entries: HashMap) -> Self {
        Value::Hash(Shared::new(entries))
    }

    pub fn object(object: impl HostObject + 'static) -> Self {
        Value::Object(Rc::new(object))
    }

    /// Length or count as an integer value.
    pub(crate) fn count(n: usize) -> Self {
        Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }

    /// Only `false` and `null` are falsy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Null)
    }

    pub fn type_name(&self) -> &str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "str",
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Array(_) => "array",
            Value::Hash(_) => "hash",
            Value::Closure(_) => "function",
            Value::Instant(_) => "instant",
            Value::Object(object) => object.type_name(),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Text used by `print` and `join`.
    ///
    /// Strings appear without quotes; every other kind uses its literal form.
    pub fn display_value(&self) -> String {
        match self {
            Value::Str(s) => s.to_string(),
            other => other.to_string(),
        }
    }
}

/// Structural equality.
///
/// Containers compare element-wise (hashes ignore insertion order), closures
/// and host objects by identity. A pair of containers already being compared
/// further up is taken as equal, so self-containing values terminate.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        let mut visiting = Vec::new();
        structural_eq(self, other, &mut visiting)
    }
}

type AddrPair = (*const (), *const ());

fn structural_eq(left: &Value, right: &Value, visiting: &mut Vec<AddrPair>) -> bool {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Null, Value::Null) => true,
        (Value::Array(a), Value::Array(b)) => {
            let pair = (a.addr(), b.addr());
            if a.ptr_eq(b) || visiting.contains(&pair) {
                return true;
            }
            let (a, b) = (a.borrow(), b.borrow());
            if a.len() != b.len() {
                return false;
            }
            visiting.push(pair);
            let equal = a.iter().zip(b.iter()).all(|(x, y)| structural_eq(x, y, visiting));
            visiting.pop();
            equal
        }
        (Value::Hash(a), Value::Hash(b)) => {
            let pair = (a.addr(), b.addr());
            if a.ptr_eq(b) || visiting.contains(&pair) {
                return true;
            }
            let (a, b) = (a.borrow(), b.borrow());
            if a.len() != b.len() {
                return false;
            }
            visiting.push(pair);
            let equal = a
                .iter()
                .all(|(k, v)| b.get(k).is_some_and(|w| structural_eq(v, w, visiting)));
            visiting.pop();
            equal
        }
        (Value::Closure(a), Value::Closure(b)) => a.ptr_eq(b),
        (Value::Instant(a), Value::Instant(b)) => a == b,
        (Value::Object(a), Value::Object(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
        _ => false,
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Rc::from(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(instant: DateTime<Utc>) -> Self {
        Value::Instant(instant)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
