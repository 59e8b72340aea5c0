//! Operand-kind dispatch for comparison and logical operators.
//!
//! Comparison is defined only for numbers and numeric arrays, logic only
//! for booleans, numbers (by truthiness), masks and numeric arrays (by
//! truthiness). Plain lists are rejected by both.

use super::operand::Operand;
use crate::config::EvaluationConfig;
use crate::data::{self, BooleanMask};
use crate::error::{MaskError, Result};
use crate::types::{Comparison, Logical, Value};

pub fn compare(lhs: &Operand, op: Comparison, rhs: &Operand) -> Result<Operand> {
    match (lhs, rhs) {
        (Operand::Array(left), Operand::Array(right)) => {
            Ok(Operand::Mask(left.compare_with(op, right)?))
        }
        (Operand::Array(seq), scalar) => match scalar.as_number() {
            Some(threshold) => Ok(Operand::Mask(seq.compare(op, threshold)?)),
            None => Err(unsupported(op.symbol(), lhs, rhs)),
        },
        (scalar, Operand::Array(seq)) => match scalar.as_number() {
            // `3 < a` runs as `a > 3`
            Some(threshold) => Ok(Operand::Mask(seq.compare(op.mirrored(), threshold)?)),
            None => Err(unsupported(op.symbol(), lhs, rhs)),
        },
        _ => match (lhs.as_number(), rhs.as_number()) {
            (Some(left), Some(right)) => Ok(Operand::Bool(compare_scalars(op, left, right))),
            _ => Err(unsupported(op.symbol(), lhs, rhs)),
        },
    }
}

fn compare_scalars(op: Comparison, left: Value, right: Value) -> bool {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => op.test(l, r),
        (l, r) => op.test(as_f64(l), as_f64(r)),
    }
}

fn as_f64(value: Value) -> f64 {
    match value {
        Value::Integer(i) => i as f64,
        Value::Float(f) => f,
        Value::Bool(b) => f64::from(u8::from(b)),
    }
}

enum Truth {
    Scalar(bool),
    Mask(BooleanMask),
}

fn truth_of(operand: &Operand) -> Result<Option<Truth>> {
    Ok(match operand {
        Operand::Bool(b) => Some(Truth::Scalar(*b)),
        Operand::Int(i) => Some(Truth::Scalar(*i != 0)),
        Operand::Float(f) => Some(Truth::Scalar(*f != 0.0)),
        Operand::Mask(mask) => Some(Truth::Mask(mask.clone())),
        Operand::Array(seq) => Some(Truth::Mask(seq.truthiness()?)),
        Operand::List(_) => None,
    })
}

pub fn logical(
    op: Logical,
    lhs: &Operand,
    rhs: &Operand,
    config: &EvaluationConfig,
) -> Result<Operand> {
    match (truth_of(lhs)?, truth_of(rhs)?) {
        (Some(Truth::Scalar(left)), Some(Truth::Scalar(right))) => {
            Ok(Operand::Bool(op.apply(left, right)))
        }
        (Some(Truth::Mask(left)), Some(Truth::Mask(right))) => {
            let mask = if config.use_parallel(left.len()) {
                data::combine_chunked(op, &left, &right, config.chunk_size)?
            } else {
                data::combine(op, &left, &right)?
            };
            Ok(Operand::Mask(mask))
        }
        _ => Err(unsupported(op.symbol(), lhs, rhs)),
    }
}

pub fn logical_not(operand: &Operand) -> Result<Operand> {
    match truth_of(operand)? {
        Some(Truth::Scalar(b)) => Ok(Operand::Bool(!b)),
        Some(Truth::Mask(mask)) => Ok(Operand::Mask(data::logical_not(&mask))),
        None => Err(MaskError::TypeMismatch {
            expected: "bool, number, array or mask".to_string(),
            actual: operand.type_name().to_string(),
        }),
    }
}

fn unsupported(symbol: &str, lhs: &Operand, rhs: &Operand) -> MaskError {
    MaskError::unsupported(symbol, lhs.type_name(), rhs.type_name())
}
