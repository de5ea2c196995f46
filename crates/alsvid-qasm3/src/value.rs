//! Compile-time value model and its arithmetic.
//!
//! Every value the constant-folding evaluator can produce lives here, along
//! with the numeric promotion rules. Arithmetic is a set of explicit pure
//! functions rather than operator impls so that the whole promotion table
//! sits in one place and every cross-kind combination is spelled out.

use serde::{Deserialize, Serialize};

use crate::ast::BinOp;
use crate::error::{ParseError, ParseResult};

/// A compile-time value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Signed integer.
    Int(i64),
    /// IEEE-754 double.
    Float(f64),
    /// Index into the circuit's qubit space.
    Qubit(u32),
    /// Index into the classical-bit space.
    Bit(u32),
    /// Ordered, fixed-length sequence of values. Registers bind to these;
    /// elements may themselves be arrays.
    Array(Vec<Value>),
}

impl Value {
    /// The kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Qubit(_) => "qubit",
            Value::Bit(_) => "bit",
            Value::Array(_) => "array",
        }
    }

    /// Unary negation. Preserves the numeric kind.
    pub fn neg(&self) -> ParseResult<Value> {
        match self {
            Value::Int(v) => Ok(Value::Int(-v)),
            Value::Float(v) => Ok(Value::Float(-v)),
            other => Err(type_mismatch("numeric value", other)),
        }
    }

    /// Convert to a 64-bit float. Defined for the numeric kinds only.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> ParseResult<f64> {
        match self {
            Value::Int(v) => Ok(*v as f64),
            Value::Float(v) => Ok(*v),
            other => Err(type_mismatch("numeric value", other)),
        }
    }

    /// Extract an integer. Floats do not coerce.
    pub fn as_int(&self) -> ParseResult<i64> {
        match self {
            Value::Int(v) => Ok(*v),
            other => Err(type_mismatch("int", other)),
        }
    }

    /// Apply a binary operator per the promotion table.
    pub fn apply(op: BinOp, lhs: &Value, rhs: &Value) -> ParseResult<Value> {
        match op {
            BinOp::Add => add(lhs, rhs),
            BinOp::Sub => sub(lhs, rhs),
            BinOp::Mul => mul(lhs, rhs),
            BinOp::Div => div(lhs, rhs),
            BinOp::Mod => rem(lhs, rhs),
        }
    }
}

fn type_mismatch(expected: &'static str, found: &Value) -> ParseError {
    ParseError::TypeMismatch {
        expected,
        found: found.kind(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn add(lhs: &Value, rhs: &Value) -> ParseResult<Value> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a + b)),
        (Value::Int(a), Value::Float(b)) => Ok(Value::Float(*a as f64 + b)),
        (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a + *b as f64)),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
        (Value::Int(_) | Value::Float(_), other) | (other, _) => {
            Err(type_mismatch("numeric value", other))
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn sub(lhs: &Value, rhs: &Value) -> ParseResult<Value> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a - b)),
        (Value::Int(a), Value::Float(b)) => Ok(Value::Float(*a as f64 - b)),
        (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a - *b as f64)),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a - b)),
        (Value::Int(_) | Value::Float(_), other) | (other, _) => {
            Err(type_mismatch("numeric value", other))
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn mul(lhs: &Value, rhs: &Value) -> ParseResult<Value> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a * b)),
        (Value::Int(a), Value::Float(b)) => Ok(Value::Float(*a as f64 * b)),
        (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a * *b as f64)),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a * b)),
        (Value::Int(_) | Value::Float(_), other) | (other, _) => {
            Err(type_mismatch("numeric value", other))
        }
    }
}

/// True division. `Int / Int` stays `Int` only when the remainder is zero.
#[allow(clippy::cast_precision_loss)]
fn div(lhs: &Value, rhs: &Value) -> ParseResult<Value> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => {
            if *b == 0 {
                return Err(ParseError::ArithmeticError("division by zero"));
            }
            if a % b == 0 {
                Ok(Value::Int(a / b))
            } else {
                Ok(Value::Float(*a as f64 / *b as f64))
            }
        }
        (Value::Int(a), Value::Float(b)) => checked_fdiv(*a as f64, *b),
        (Value::Float(a), Value::Int(b)) => checked_fdiv(*a, *b as f64),
        (Value::Float(a), Value::Float(b)) => checked_fdiv(*a, *b),
        (Value::Int(_) | Value::Float(_), other) | (other, _) => {
            Err(type_mismatch("numeric value", other))
        }
    }
}

fn checked_fdiv(a: f64, b: f64) -> ParseResult<Value> {
    if b == 0.0 {
        return Err(ParseError::ArithmeticError("division by zero"));
    }
    Ok(Value::Float(a / b))
}

/// Floored modulo, defined for same-kind numeric pairs only. The result
/// takes the divisor's sign: `(-7) % 4` is `1`, `7 % (-4)` is `-1`.
fn rem(lhs: &Value, rhs: &Value) -> ParseResult<Value> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => {
            if *b == 0 {
                return Err(ParseError::ArithmeticError("modulo by zero"));
            }
            Ok(Value::Int((a % b + b) % b))
        }
        (Value::Float(a), Value::Float(b)) => {
            if *b == 0.0 {
                return Err(ParseError::ArithmeticError("modulo by zero"));
            }
            Ok(Value::Float((a % b + b) % b))
        }
        (Value::Int(_), found @ Value::Float(_)) | (Value::Float(_), found @ Value::Int(_)) => {
            Err(type_mismatch("same-kind numeric pair", found))
        }
        (Value::Int(_) | Value::Float(_), other) | (other, _) => {
            Err(type_mismatch("numeric value", other))
        }
    }
}
