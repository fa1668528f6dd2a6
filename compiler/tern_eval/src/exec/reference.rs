//! Reference resolution and calls.
//!
//! A bare name resolves as a builtin first, then an external command, then a
//! variable in the current frame. Chains then apply left to right, each one
//! to the value the previous step produced.

use super::{Executor, Flow};
use crate::builtins::{self, Builtin};
use crate::environment::{Closure, Frame};
use crate::errors::{
    control_flow_escape, index_out_of_range, invalid_argument, key_not_found, name_not_found,
    not_callable, stack_overflow, type_mismatch, wrong_arg_count, EvalError, EvalResult,
};
use crate::members;
use crate::value::Value;
use tern_ir::{Chain, Reference};

impl Executor<'_> {
    pub(crate) fn eval_reference(&self, reference: &Reference, frame: &Frame) -> EvalResult {
        let name = reference.name.as_str();
        let mut chains = reference.chains.iter();

        let mut current = if let Some(builtin) = Builtin::from_name(name) {
            let args = self.command_args(name, chains.next(), frame)?;
            builtins::call(self, builtin, args, frame)?
        } else if let Some(command) = self.interp.externals.get(name) {
            let args = self.command_args(name, chains.next(), frame)?;
            tracing::debug!(command = name, args = args.len(), "external call");
            command.call(&args)?
        } else {
            frame.get(name).cloned().ok_or_else(|| name_not_found(name))?
        };

        for chain in chains {
            current = self.apply_chain(current, chain, frame)?;
        }
        Ok(current)
    }

    /// Builtins and external commands are only usable when called directly.
    fn command_args(
        &self,
        name: &str,
        first: Option<&Chain>,
        frame: &Frame,
    ) -> Result<Vec<Value>, EvalError> {
        match first {
            Some(Chain::Call(args)) => self.eval_args(args, frame),
            _ => Err(invalid_argument(format!("{name} must be called"))),
        }
    }

    fn apply_chain(&self, value: Value, chain: &Chain, frame: &Frame) -> EvalResult {
        match chain {
            Chain::Index(index) => {
                let key = self.eval(index, frame)?;
                index_value(&value, &key).map_err(|e| e.or_span(index.span))
            }
            Chain::Call(args) => {
                let Value::Closure(closure) = &value else {
                    return Err(not_callable(value.type_name()));
                };
                let args = self.eval_args(args, frame)?;
                self.call_closure(closure, args)
            }
            Chain::Member(name) => members::member(&value, name),
        }
    }

    /// Invoke a script function.
    ///
    /// The body runs in a fresh frame built from the closure's snapshot plus
    /// the bound arguments. `break` or `next` reaching the call boundary is an
    /// error; `return` or falling off the end yields the result.
    pub(crate) fn call_closure(&self, closure: &Closure, args: Vec<Value>) -> EvalResult {
        let params = closure.params();
        if args.len() != params.len() {
            return Err(wrong_arg_count(
                "function",
                &params.len().to_string(),
                args.len(),
            ));
        }
        let _guard = self
            .depth
            .enter()
            .map_err(|exceeded| stack_overflow(exceeded.limit))?;
        tracing::trace!(depth = self.depth.current(), params = params.len(), "call");

        let mut frame = closure.call_frame(args);
        match self.exec_block(&closure.def().body, &mut frame)? {
            Flow::Normal(value) | Flow::Return(value) => Ok(value),
            Flow::Break => Err(control_flow_escape("break").with_span(closure.def().span)),
            Flow::Next => Err(control_flow_escape("next").with_span(closure.def().span)),
        }
    }
}

/// Read `container[key]`.
///
/// Arrays and strings take integer indices (negative counts from the end);
/// hashes take string keys.
pub(crate) fn index_value(container: &Value, key: &Value) -> EvalResult {
    match (container, key) {
        (Value::Array(items), Value::Int(index)) => {
            let items = items.borrow();
            let slot = resolve_index(*index, items.len())?;
            Ok(items[slot].clone())
        }
        (Value::Hash(entries), Value::Str(key)) => entries
            .borrow()
            .get(&**key)
            .cloned()
            .ok_or_else(|| key_not_found(key)),
        (Value::Str(s), Value::Int(index)) => {
            let len = s.chars().count();
            let slot = resolve_index(*index, len)?;
            let c = s.chars().nth(slot).ok_or_else(|| index_out_of_range(*index, len))?;
            Ok(Value::from(c.to_string()))
        }
        (Value::Array(_) | Value::Str(_), other) => Err(type_mismatch("int index", other.type_name())),
        (Value::Hash(_), other) => Err(type_mismatch("str key", other.type_name())),
        (other, _) => Err(type_mismatch("array, hash, or str", other.type_name())),
    }
}

/// Map a possibly negative index onto `0..len`.
pub(crate) fn resolve_index(index: i64, len: usize) -> Result<usize, EvalError> {
    let resolved = if index < 0 {
        i64::try_from(len).ok().and_then(|len| len.checked_add(index))
    } else {
        Some(index)
    };
    resolved
        .and_then(|i| usize::try_from(i).ok())
        .filter(|&i| i < len)
        .ok_or_else(|| index_out_of_range(index, len))
}
