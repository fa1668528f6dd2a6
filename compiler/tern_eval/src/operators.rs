//! Binary operator evaluation.
//!
//! Direct enum dispatch on operand kinds. Integer arithmetic is checked and
//! division floors toward negative infinity.

use crate::errors::{division_by_zero, integer_overflow, operand_mismatch, EvalError, EvalResult};
use crate::value::Value;
use std::cmp::Ordering;
use tern_ir::{ArithOp, CompareOp};

/// Evaluate `left op right` for `+ - * /`.
///
/// Beyond integers, `+` concatenates two strings or two arrays into a new
/// value; the operands are left untouched.
pub fn evaluate_arith(op: ArithOp, left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => int_arith(op, *a, *b),
        (Value::Str(a), Value::Str(b)) if op == ArithOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::from(joined))
        }
        (Value::Array(a), Value::Array(b)) if op == ArithOp::Add => {
            let mut items = a.borrow().clone();
            items.extend(b.borrow().iter().cloned());
            Ok(Value::array(items))
        }
        _ => Err(operand_mismatch(
            op.as_symbol(),
            left.type_name(),
            right.type_name(),
        )),
    }
}

fn int_arith(op: ArithOp, a: i64, b: i64) -> EvalResult {
    let result = match op {
        ArithOp::Add => a.checked_add(b),
        ArithOp::Subtract => a.checked_sub(b),
        ArithOp::Multiply => a.checked_mul(b),
        ArithOp::Divide => return floor_div(a, b).map(Value::Int),
    };
    result
        .map(Value::Int)
        .ok_or_else(|| integer_overflow(op_name(op)))
}

/// Integer division rounding toward negative infinity.
fn floor_div(a: i64, b: i64) -> Result<i64, EvalError> {
    if b == 0 {
        return Err(division_by_zero());
    }
    let quotient = a.checked_div(b).ok_or_else(|| integer_overflow("division"))?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

fn op_name(op: ArithOp) -> &'static str {
    match op {
        ArithOp::Add => "addition",
        ArithOp::Subtract => "subtraction",
        ArithOp::Multiply => "multiplication",
        ArithOp::Divide => "division",
    }
}

/// Evaluate a comparison.
///
/// `==` and `!=` accept any pair of values. Ordering operators require two
/// integers or two strings (compared by code point).
pub fn evaluate_compare(op: CompareOp, left: &Value, right: &Value) -> EvalResult {
    let holds = match op {
        CompareOp::Eq => left == right,
        CompareOp::Ne => left != right,
        CompareOp::Lt => order(op, left, right)?.is_lt(),
        CompareOp::Le => order(op, left, right)?.is_le(),
        CompareOp::Gt => order(op, left, right)?.is_gt(),
        CompareOp::Ge => order(op, left, right)?.is_ge(),
    };
    Ok(Value::Bool(holds))
}

fn order(op: CompareOp, left: &Value, right: &Value) -> Result<Ordering, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
        (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
        _ => Err(operand_mismatch(
            op.as_symbol(),
            left.type_name(),
            right.type_name(),
        )),
    }
}
