//! Builtin commands.
//!
//! Builtins take precedence over external commands and variables of the same
//! name. They are grouped by concern:
//!
//! - [`text`]: `print`, `join`, `len`, `int`, `match`
//! - [`collections`]: `map`, `filter`, `push`
//! - [`digest`]: `hash`, `md5`, `sha512`
//! - [`system`]: `uuid`, `now`, `random`, `input`

mod collections;
mod digest;
mod system;
mod text;

pub use digest::DigestAlgorithm;
pub(crate) use text::leading_int;

use crate::environment::Frame;
use crate::errors::{type_mismatch, wrong_arg_count, EvalError, EvalResult};
use crate::exec::Executor;
use crate::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Print,
    Join,
    Len,
    Hash,
    Md5,
    Sha512,
    Uuid,
    Now,
    Random,
    Input,
    Int,
    Map,
    Filter,
    Push,
    Match,
}

impl Builtin {
    pub const ALL: [Builtin; 15] = [
        Builtin::Print,
        Builtin::Join,
        Builtin::Len,
        Builtin::Hash,
        Builtin::Md5,
        Builtin::Sha512,
        Builtin::Uuid,
        Builtin::Now,
        Builtin::Random,
        Builtin::Input,
        Builtin::Int,
        Builtin::Map,
        Builtin::Filter,
        Builtin::Push,
        Builtin::Match,
    ];

    pub fn from_name(name: &str) -> Option<Builtin> {
        Some(match name {
            "print" => Builtin::Print,
            "join" => Builtin::Join,
            "len" => Builtin::Len,
            "hash" => Builtin::Hash,
            "md5" => Builtin::Md5,
            "sha512" => Builtin::Sha512,
            "uuid" => Builtin::Uuid,
            "now" => Builtin::Now,
            "random" => Builtin::Random,
            "input" => Builtin::Input,
            "int" => Builtin::Int,
            "map" => Builtin::Map,
            "filter" => Builtin::Filter,
            "push" => Builtin::Push,
            "match" => Builtin::Match,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Print => "print",
            Builtin::Join => "join",
            Builtin::Len => "len",
            Builtin::Hash => "hash",
            Builtin::Md5 => "md5",
            Builtin::Sha512 => "sha512",
            Builtin::Uuid => "uuid",
            Builtin::Now => "now",
            Builtin::Random => "random",
            Builtin::Input => "input",
            Builtin::Int => "int",
            Builtin::Map => "map",
            Builtin::Filter => "filter",
            Builtin::Push => "push",
            Builtin::Match => "match",
        }
    }
}

/// Run `builtin` with already-evaluated arguments.
///
/// `frame` is the caller's frame; `map` and `filter` use it to look up a
/// function passed by name.
pub(crate) fn call(ctx: &Executor<'_>, builtin: Builtin, args: Vec<Value>, frame: &Frame) -> EvalResult {
    match builtin {
        Builtin::Print => text::print(ctx, &args),
        Builtin::Join => text::join(&args),
        Builtin::Len => text::len(&args),
        Builtin::Int => text::int(&args),
        Builtin::Match => text::match_pattern(ctx, &args),
        Builtin::Map => collections::map(ctx, args, frame),
        Builtin::Filter => collections::filter(ctx, args, frame),
        Builtin::Push => collections::push(args),
        Builtin::Hash => digest::hash(builtin, ctx.interp.digest, &args),
        Builtin::Md5 => digest::hash(builtin, DigestAlgorithm::Md5, &args),
        Builtin::Sha512 => digest::hash(builtin, DigestAlgorithm::Sha512, &args),
        Builtin::Uuid => system::uuid(ctx, &args),
        Builtin::Now => system::now(ctx, &args),
        Builtin::Random => system::random(ctx, &args),
        Builtin::Input => system::input(ctx, &args),
    }
}

/// Validate an exact argument count.
#[inline]
fn require_args(builtin: Builtin, expected: usize, args: &[Value]) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(wrong_arg_count(builtin.name(), &expected.to_string(), args.len()))
    }
}

#[inline]
fn require_str_arg<'a>(builtin: Builtin, args: &'a [Value], index: usize) -> Result<&'a str, EvalError> {
    match args.get(index) {
        Some(Value::Str(s)) => Ok(s),
        Some(other) => Err(arg_type(builtin, "str", other)),
        None => Err(wrong_arg_count(builtin.name(), &(index + 1).to_string(), args.len())),
    }
}

#[inline]
fn require_int_arg(builtin: Builtin, args: &[Value], index: usize) -> Result<i64, EvalError> {
    match args.get(index) {
        Some(Value::Int(n)) => Ok(*n),
        Some(other) => Err(arg_type(builtin, "int", other)),
        None => Err(wrong_arg_count(builtin.name(), &(index + 1).to_string(), args.len())),
    }
}

#[cold]
fn arg_type(builtin: Builtin, expected: &str, got: &Value) -> EvalError {
    type_mismatch(&format!("{expected} argument to {}", builtin.name()), got.type_name())
}
