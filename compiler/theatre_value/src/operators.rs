//! Binary operator implementations.
//!
//! Direct enum dispatch over the closed value set. Integer arithmetic is
//! checked; float arithmetic follows IEEE 754.

use std::fmt;

use crate::errors::{OpResult, OperationError};
use crate::value::Value;

/// Arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    const fn operation_name(self) -> &'static str {
        match self {
            BinaryOp::Add => "addition",
            BinaryOp::Sub => "subtraction",
            BinaryOp::Mul => "multiplication",
            BinaryOp::Div => "division",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Numeric view of an operand after coercion.
#[derive(Clone, Copy)]
enum Number {
    Int(i32),
    Float(f32),
}

impl Number {
    /// `mono` coerces to `0`; text and booleans are not numeric.
    fn coerce(value: &Value) -> Option<Number> {
        match value {
            Value::Empty => Some(Number::Int(0)),
            Value::Int(n) => Some(Number::Int(*n)),
            Value::Float(n) => Some(Number::Float(*n)),
            Value::Bool(_) | Value::Str(_) => None,
        }
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "int to float promotion is the documented coercion"
    )]
    fn to_f32(self) -> f32 {
        match self {
            Number::Int(n) => n as f32,
            Number::Float(n) => n,
        }
    }
}

/// Evaluate `left op right`.
///
/// Text only supports `+`: two strings concatenate, and `mono` on either
/// side of a string yields that string. Everything else goes through
/// numeric coercion, promoting to float when either side is a float.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> OpResult {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) if op == BinaryOp::Add => Ok(Value::Str(format!("{a}{b}"))),
        (Value::Empty, Value::Str(s)) | (Value::Str(s), Value::Empty) if op == BinaryOp::Add => {
            Ok(Value::Str(s.clone()))
        }
        _ => {
            let (Some(a), Some(b)) = (Number::coerce(left), Number::coerce(right)) else {
                return Err(OperationError::InvalidOperands {
                    op,
                    left: left.type_name(),
                    right: right.type_name(),
                });
            };
            match (a, b) {
                (Number::Int(a), Number::Int(b)) => eval_int_binary(a, b, op),
                _ => Ok(eval_float_binary(a.to_f32(), b.to_f32(), op)),
            }
        }
    }
}

fn eval_int_binary(a: i32, b: i32, op: BinaryOp) -> OpResult {
    let result = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div => {
            if b == 0 {
                return Err(OperationError::DivisionByZero);
            }
            a.checked_div(b)
        }
    };
    result.map(Value::Int).ok_or(OperationError::IntegerOverflow {
        operation: op.operation_name(),
    })
}

fn eval_float_binary(a: f32, b: f32, op: BinaryOp) -> Value {
    Value::Float(match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn eval(left: impl Into<Value>, right: impl Into<Value>, op: BinaryOp) -> OpResult {
        evaluate_binary(&left.into(), &right.into(), op)
    }

    #[test]
    fn int_arithmetic() {
        assert_eq!(eval(5, 7, BinaryOp::Add).unwrap(), Value::Int(12));
        assert_eq!(eval(2, 7, BinaryOp::Sub).unwrap(), Value::Int(-5));
        assert_eq!(eval(10, 5, BinaryOp::Mul).unwrap(), Value::Int(50));
    }

    #[test]
    fn int_division_truncates() {
        assert_eq!(eval(5, 10, BinaryOp::Div).unwrap(), Value::Int(0));
        assert_eq!(eval(10, 5, BinaryOp::Div).unwrap(), Value::Int(2));
        assert_eq!(eval(-7, 2, BinaryOp::Div).unwrap(), Value::Int(-3));
    }

    #[test]
    fn float_division_does_not_truncate() {
        assert_eq!(eval(5.0f32, 10.0f32, BinaryOp::Div).unwrap(), Value::Float(0.5));
    }

    #[test]
    fn one_float_operand_promotes() {
        assert_eq!(eval(1, 0.5f32, BinaryOp::Add).unwrap(), Value::Float(1.5));
        assert_eq!(eval(0.5f32, 2, BinaryOp::Mul).unwrap(), Value::Float(1.0));
        assert_eq!(eval(5, 10.0f32, BinaryOp::Div).unwrap(), Value::Float(0.5));
    }

    #[test]
    fn mono_coerces_to_zero() {
        assert_eq!(eval(Value::Empty, 3, BinaryOp::Add).unwrap(), Value::Int(3));
        assert_eq!(eval(3, Value::Empty, BinaryOp::Sub).unwrap(), Value::Int(3));
        assert_eq!(
            eval(Value::Empty, Value::Empty, BinaryOp::Add).unwrap(),
            Value::Int(0)
        );
        assert_eq!(
            eval(Value::Empty, 1.5f32, BinaryOp::Add).unwrap(),
            Value::Float(1.5)
        );
    }

    #[test]
    fn string_concatenation() {
        assert_eq!(
            eval("Sum ", "is", BinaryOp::Add).unwrap(),
            Value::string("Sum is")
        );
    }

    #[test]
    fn mono_plus_string_yields_string() {
        assert_eq!(
            eval(Value::Empty, "text", BinaryOp::Add).unwrap(),
            Value::string("text")
        );
        assert_eq!(
            eval("text", Value::Empty, BinaryOp::Add).unwrap(),
            Value::string("text")
        );
    }

    #[test]
    fn string_rejected_outside_addition() {
        for op in [BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
            let err = eval("a", "b", op).unwrap_err();
            assert!(err.is_type_mismatch(), "{op}: {err}");
            assert!(eval("a", 1, op).unwrap_err().is_type_mismatch());
            assert!(eval(1, "a", op).unwrap_err().is_type_mismatch());
        }
    }

    #[test]
    fn string_plus_number_rejected() {
        let err = eval("a", 1, BinaryOp::Add).unwrap_err();
        assert_eq!(
            err,
            OperationError::InvalidOperands {
                op: BinaryOp::Add,
                left: "string",
                right: "int",
            }
        );
    }

    #[test]
    fn booleans_are_not_numeric() {
        assert!(eval(true, 1, BinaryOp::Add).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn int_division_by_zero() {
        assert_eq!(
            eval(1, 0, BinaryOp::Div).unwrap_err(),
            OperationError::DivisionByZero
        );
    }

    #[test]
    fn float_division_by_zero_is_infinite() {
        let Value::Float(n) = eval(1.0f32, 0, BinaryOp::Div).unwrap() else {
            panic!("expected float");
        };
        assert!(n.is_infinite());
    }

    #[test]
    fn int_overflow_is_reported() {
        assert_eq!(
            eval(i32::MAX, 1, BinaryOp::Add).unwrap_err(),
            OperationError::IntegerOverflow {
                operation: "addition"
            }
        );
        assert!(eval(i32::MIN, -1, BinaryOp::Div).is_err());
    }

    mod proptest_int {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn int_add_matches_checked_add(a in any::<i32>(), b in any::<i32>()) {
                let result = eval(a, b, BinaryOp::Add);
                match a.checked_add(b) {
                    Some(sum) => prop_assert_eq!(result, Ok(Value::Int(sum))),
                    None => prop_assert!(result.is_err()),
                }
            }

            #[test]
            fn int_ops_never_produce_floats(a in any::<i32>(), b in any::<i32>()) {
                for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
                    if let Ok(v) = eval(a, b, op) {
                        prop_assert!(matches!(v, Value::Int(_)));
                    }
                }
            }
        }
    }
}
