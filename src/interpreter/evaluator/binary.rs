//! Evaluation of binary operations.
//!
//! Integer arithmetic is checked and reports overflow instead of wrapping;
//! integer division truncates toward zero. When one operand is an integer and
//! the other a real, the integer is promoted and the operation runs in real
//! arithmetic. `+` additionally concatenates two strings, but never mixes a
//! string with a number.

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Token, value::Value},
};

/// Applies a binary operator to two already evaluated operands.
///
/// # Parameters
/// - `operator`: The operator token, which carries the source position used
///   in error reporting.
/// - `left`, `right`: The operand values.
///
/// # Errors
/// Returns `RuntimeError::UnsupportedOperator` for operators outside
/// `+ - * / > <`, and the arithmetic errors documented on the helpers.
pub fn eval_binary(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
    let line = operator.start.line;

    match operator.value.as_str() {
        "+" => eval_add(left, right, line),
        op @ ("-" | "*" | "/") => eval_arithmetic(op, left, right, line),
        op @ (">" | "<") => eval_comparison(op, left, right, line),
        other => Err(RuntimeError::UnsupportedOperator {
            operator: other.to_string(),
            line,
        }),
    }
}

/// Adds two numbers or concatenates two strings.
fn eval_add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => a
            .checked_add(*b)
            .map(Value::Integer)
            .ok_or(RuntimeError::Overflow { line }),
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
        (a, b) if a.is_numeric() && b.is_numeric() => {
            Ok(Value::Real(a.as_real(line)? + b.as_real(line)?))
        }
        (a, b) => Err(RuntimeError::TypeError {
            details: format!("cannot add {} and {}", a.type_name(), b.type_name()),
            line,
        }),
    }
}

/// Subtracts, multiplies or divides two numbers.
///
/// # Errors
/// Returns `RuntimeError::TypeError` for non-numeric operands,
/// `RuntimeError::Overflow` when integer arithmetic overflows and
/// `RuntimeError::DivisionByZero` on division by zero.
fn eval_arithmetic(op: &str, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    if !left.is_numeric() || !right.is_numeric() {
        return Err(RuntimeError::TypeError {
            details: format!(
                "operator '{op}' requires numbers, got {} and {}",
                left.type_name(),
                right.type_name()
            ),
            line,
        });
    }

    if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
        let result = match op {
            "-" => a.checked_sub(*b).ok_or(RuntimeError::Overflow { line })?,
            "*" => a.checked_mul(*b).ok_or(RuntimeError::Overflow { line })?,
            _ => {
                if *b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                a.checked_div(*b).ok_or(RuntimeError::Overflow { line })?
            }
        };
        return Ok(Value::Integer(result));
    }

    let a = left.as_real(line)?;
    let b = right.as_real(line)?;
    let result = match op {
        "-" => a - b,
        "*" => a * b,
        _ => {
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            a / b
        }
    };
    Ok(Value::Real(result))
}

/// Compares two numbers, producing a boolean.
///
/// Integer pairs compare exactly; only mixed pairs promote to real.
fn eval_comparison(op: &str, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    if !left.is_numeric() || !right.is_numeric() {
        return Err(RuntimeError::TypeError {
            details: format!(
                "operator '{op}' requires numbers, got {} and {}",
                left.type_name(),
                right.type_name()
            ),
            line,
        });
    }

    if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
        return Ok(Value::Bool(if op == ">" { a > b } else { a < b }));
    }

    let a = left.as_real(line)?;
    let b = right.as_real(line)?;
    Ok(Value::Bool(if op == ">" { a > b } else { a < b }))
}
