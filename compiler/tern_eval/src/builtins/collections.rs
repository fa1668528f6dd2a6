use super::{arg_type, require_args, Builtin};
use crate::environment::{Closure, Frame};
use crate::errors::{name_not_found, not_callable, EvalError, EvalResult};
use crate::exec::Executor;
use crate::value::Value;

/// `map(array, f)`: new array of `f(item)` for each item.
pub(super) fn map(ctx: &Executor<'_>, args: Vec<Value>, frame: &Frame) -> EvalResult {
    let (items, function) = unpack(Builtin::Map, &args, frame)?;
    let mapped = items
        .into_iter()
        .map(|item| ctx.call_closure(&function, vec![item]))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::array(mapped))
}

/// `filter(array, f)`: new array of the items for which `f(item)` is truthy.
pub(super) fn filter(ctx: &Executor<'_>, args: Vec<Value>, frame: &Frame) -> EvalResult {
    let (items, function) = unpack(Builtin::Filter, &args, frame)?;
    let mut kept = Vec::new();
    for item in items {
        if ctx.call_closure(&function, vec![item.clone()])?.is_truthy() {
            kept.push(item);
        }
    }
    Ok(Value::array(kept))
}

/// `push(array, item)`: append in place. Every alias of the array sees it.
pub(super) fn push(mut args: Vec<Value>) -> EvalResult {
    require_args(Builtin::Push, 2, &args)?;
    let item = args.pop().unwrap_or(Value::Null);
    match &args[0] {
        Value::Array(items) => {
            items.borrow_mut().push(item);
            Ok(Value::Null)
        }
        other => Err(arg_type(Builtin::Push, "array", other)),
    }
}

/// Validate `(array, function)` and take a copy of the items.
///
/// The copy keeps the callback free to mutate the original array.
fn unpack(builtin: Builtin, args: &[Value], frame: &Frame) -> Result<(Vec<Value>, Closure), EvalError> {
    require_args(builtin, 2, args)?;
    let items = match &args[0] {
        Value::Array(items) => items.borrow().clone(),
        other => return Err(arg_type(builtin, "array", other)),
    };
    Ok((items, resolve_function(&args[1], frame)?))
}

/// A function value, or the name of a function bound in the caller's frame.
fn resolve_function(value: &Value, frame: &Frame) -> Result<Closure, EvalError> {
    match value {
        Value::Closure(closure) => Ok(closure.clone()),
        Value::Str(name) => match frame.get(name) {
            Some(Value::Closure(closure)) => Ok(closure.clone()),
            Some(other) => Err(not_callable(other.type_name())),
            None => Err(name_not_found(name)),
        },
        other => Err(not_callable(other.type_name())),
    }
}
