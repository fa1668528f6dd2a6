use super::{require_args, require_int_arg, Builtin};
use crate::errors::{invalid_argument, EvalResult};
use crate::exec::Executor;
use crate::value::Value;
use rand::Rng;

/// `uuid()`: random version-4 UUID, drawn from the run's random source so a
/// seeded run is reproducible.
pub(super) fn uuid(ctx: &Executor<'_>, args: &[Value]) -> EvalResult {
    require_args(Builtin::Uuid, 0, args)?;
    let bytes: [u8; 16] = ctx.rng.borrow_mut().gen();
    let id = uuid::Builder::from_random_bytes(bytes).into_uuid();
    Ok(Value::from(id.hyphenated().to_string()))
}

pub(super) fn now(ctx: &Executor<'_>, args: &[Value]) -> EvalResult {
    require_args(Builtin::Now, 0, args)?;
    Ok(Value::Instant(ctx.interp.clock.now()))
}

/// `random(low, high)`: uniform integer in `low..=high`.
pub(super) fn random(ctx: &Executor<'_>, args: &[Value]) -> EvalResult {
    require_args(Builtin::Random, 2, args)?;
    let low = require_int_arg(Builtin::Random, args, 0)?;
    let high = require_int_arg(Builtin::Random, args, 1)?;
    if low > high {
        return Err(invalid_argument(format!(
            "random range is empty: {low} is greater than {high}"
        )));
    }
    Ok(Value::Int(ctx.rng.borrow_mut().gen_range(low..=high)))
}

/// `input()`: the value the host passed to this run, or null.
pub(super) fn input(ctx: &Executor<'_>, args: &[Value]) -> EvalResult {
    require_args(Builtin::Input, 0, args)?;
    Ok(ctx.input.clone())
}
