use super::mask::{check_shape, BooleanMask};
use crate::error::{MaskError, Result};
use crate::types::{Comparison, Value};
use polars::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! compare_series {
    ( $series:expr, $op:expr, $rhs:expr ) => {{
        match $op {
            Comparison::Greater => $series.gt($rhs),
            Comparison::GreaterEqual => $series.gt_eq($rhs),
            Comparison::Less => $series.lt($rhs),
            Comparison::LessEqual => $series.lt_eq($rhs),
            Comparison::Equal => $series.equal($rhs),
            Comparison::NotEqual => $series.not_equal($rhs),
        }
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumericKind {
    Signed,
    Unsigned,
    Float,
}

/// Immutable, fixed-length sequence of integers or floats with elementwise
/// comparison semantics. Never holds nulls.
#[derive(Debug, Clone)]
pub struct NumericSequence {
    series: Series,
}

impl NumericSequence {
    pub fn from_ints(values: Vec<i64>) -> Self {
        Self {
            series: Series::new("values".into(), values),
        }
    }

    pub fn from_uints(values: Vec<u64>) -> Self {
        Self {
            series: Series::new("values".into(), values),
        }
    }

    pub fn from_floats(values: Vec<f64>) -> Self {
        Self {
            series: Series::new("values".into(), values),
        }
    }

    /// Wraps an existing series. Only primitive numeric dtypes without
    /// nulls are accepted.
    pub fn from_series(series: Series) -> Result<Self> {
        let numeric = matches!(
            series.dtype(),
            DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
                | DataType::Float32
                | DataType::Float64
        );
        if !numeric {
            return Err(MaskError::TypeMismatch {
                expected: "numeric series".to_string(),
                actual: series.dtype().to_string(),
            });
        }
        if series.null_count() > 0 {
            return Err(MaskError::TypeMismatch {
                expected: "series without nulls".to_string(),
                actual: format!("{} null values", series.null_count()),
            });
        }
        Ok(Self { series })
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn is_float(&self) -> bool {
        self.kind() == NumericKind::Float
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    fn kind(&self) -> NumericKind {
        match self.series.dtype() {
            DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64 => {
                NumericKind::Unsigned
            }
            DataType::Float32 | DataType::Float64 => NumericKind::Float,
            _ => NumericKind::Signed,
        }
    }

    /// The series in the widest dtype of its own kind. Lossless.
    fn widened(&self) -> Result<Series> {
        let dtype = match self.kind() {
            NumericKind::Signed => DataType::Int64,
            NumericKind::Unsigned => DataType::UInt64,
            NumericKind::Float => DataType::Float64,
        };
        Ok(self.series.strict_cast(&dtype)?)
    }

    /// Integer values as `i128`, which holds both `i64` and `u64` exactly.
    fn wide_ints(&self) -> Result<Vec<i128>> {
        let series = self.widened()?;
        if self.kind() == NumericKind::Unsigned {
            Ok(series.u64()?.into_no_null_iter().map(i128::from).collect())
        } else {
            Ok(series.i64()?.into_no_null_iter().map(i128::from).collect())
        }
    }

    /// Compares every element against a numeric scalar.
    pub fn compare(&self, op: Comparison, rhs: Value) -> Result<BooleanMask> {
        let values = match (self.kind(), rhs) {
            (_, Value::Bool(_)) => {
                return Err(MaskError::unsupported(
                    op.symbol(),
                    "array",
                    rhs.data_type().type_name(),
                ))
            }
            (NumericKind::Signed, Value::Integer(i)) => {
                let series = self.widened()?;
                compare_series!(series, op, i)?
            }
            (NumericKind::Unsigned, Value::Integer(i)) if i >= 0 => {
                let series = self.widened()?;
                compare_series!(series, op, i as u64)?
            }
            (NumericKind::Unsigned, Value::Integer(_)) => {
                // every unsigned value lies above a negative threshold
                let above = matches!(
                    op,
                    Comparison::Greater | Comparison::GreaterEqual | Comparison::NotEqual
                );
                BooleanChunked::full("mask".into(), above, self.len())
            }
            (NumericKind::Float, Value::Integer(i)) => {
                let series = self.widened()?;
                compare_series!(series, op, i as f64)?
            }
            (_, Value::Float(f)) => {
                let series = self.series.cast(&DataType::Float64)?;
                compare_series!(series, op, f)?
            }
        };
        Ok(BooleanMask::from_chunked(values))
    }

    /// Compares position `i` of `self` against position `i` of `rhs`.
    ///
    /// Integers are compared exactly. Floats are involved only when one side
    /// is a float sequence.
    pub fn compare_with(&self, op: Comparison, rhs: &NumericSequence) -> Result<BooleanMask> {
        check_shape(self.len(), rhs.len())?;
        let values = match (self.kind(), rhs.kind()) {
            (left, right) if left == right => {
                let (left, right) = (self.widened()?, rhs.widened()?);
                compare_series!(left, op, &right)?
            }
            (NumericKind::Signed, NumericKind::Unsigned)
            | (NumericKind::Unsigned, NumericKind::Signed) => {
                let (left, right) = (self.wide_ints()?, rhs.wide_ints()?);
                BooleanChunked::from_iter_values(
                    "mask".into(),
                    left.iter().zip(&right).map(|(l, r)| op.test(l, r)),
                )
            }
            _ => {
                let left = self.series.cast(&DataType::Float64)?;
                let right = rhs.series.cast(&DataType::Float64)?;
                compare_series!(left, op, &right)?
            }
        };
        Ok(BooleanMask::from_chunked(values))
    }

    pub fn greater_than<V: Into<Value>>(&self, threshold: V) -> Result<BooleanMask> {
        self.compare(Comparison::Greater, threshold.into())
    }

    pub fn less_than<V: Into<Value>>(&self, threshold: V) -> Result<BooleanMask> {
        self.compare(Comparison::Less, threshold.into())
    }

    /// Nonzero elements are `true`.
    pub fn truthiness(&self) -> Result<BooleanMask> {
        let values = self.series.not_equal(0i32)?;
        Ok(BooleanMask::from_chunked(values))
    }

    /// Keeps the positions where `mask` is true.
    pub fn select(&self, mask: &BooleanMask) -> Result<NumericSequence> {
        check_shape(self.len(), mask.len())?;
        let series = self.series.filter(mask.as_chunked())?;
        Ok(Self { series })
    }

    /// Values as `i64`. Unsigned values above `i64::MAX` are an error,
    /// floats are truncated.
    pub fn to_ints(&self) -> Result<Vec<i64>> {
        let casted = self.series.strict_cast(&DataType::Int64)?;
        Ok(casted.i64()?.into_no_null_iter().collect())
    }

    /// Values as `f64`. Integers beyond 2^53 lose precision.
    pub fn to_floats(&self) -> Result<Vec<f64>> {
        let casted = self.series.cast(&DataType::Float64)?;
        Ok(casted.f64()?.into_no_null_iter().collect())
    }

    fn to_repr(&self) -> Result<SequenceRepr> {
        Ok(match self.kind() {
            NumericKind::Signed => SequenceRepr::Ints(self.to_ints()?),
            NumericKind::Unsigned => {
                let series = self.widened()?;
                SequenceRepr::UInts(series.u64()?.into_no_null_iter().collect())
            }
            NumericKind::Float => SequenceRepr::Floats(self.to_floats()?),
        })
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SequenceRepr {
    Ints(Vec<i64>),
    UInts(Vec<u64>),
    Floats(Vec<f64>),
}

impl From<SequenceRepr> for NumericSequence {
    fn from(repr: SequenceRepr) -> Self {
        match repr {
            SequenceRepr::Ints(values) => NumericSequence::from_ints(values),
            SequenceRepr::UInts(values) => NumericSequence::from_uints(values),
            SequenceRepr::Floats(values) => NumericSequence::from_floats(values),
        }
    }
}

impl Serialize for NumericSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_repr()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NumericSequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        SequenceRepr::deserialize(deserializer).map(NumericSequence::from)
    }
}

impl PartialEq for NumericSequence {
    fn eq(&self, other: &Self) -> bool {
        self.series.equals(&other.series)
    }
}

impl From<Vec<i64>> for NumericSequence {
    fn from(values: Vec<i64>) -> Self {
        NumericSequence::from_ints(values)
    }
}

impl From<Vec<f64>> for NumericSequence {
    fn from(values: Vec<f64>) -> Self {
        NumericSequence::from_floats(values)
    }
}

impl fmt::Display for NumericSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = match self.to_repr() {
            Ok(SequenceRepr::Ints(values)) => values.iter().map(|v| format!("{}", v)).collect(),
            Ok(SequenceRepr::UInts(values)) => values.iter().map(|v| format!("{}", v)).collect(),
            Ok(SequenceRepr::Floats(values)) => values.iter().map(|v| format!("{:?}", v)).collect(),
            Err(_) => Vec::new(),
        };
        write!(f, "array([{}])", items.join(", "))
    }
}
