use serde::{Deserialize, Serialize};
use std::fmt;

/// Operand kind used in operator signatures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer,       // Scalar i64
    Float,         // Scalar f64
    Bool,          // Scalar bool
    List,          // Plain list, never elementwise
    NumericSeries, // Polars Series<i64 | f64>
    BoolSeries,    // Polars Series<bool>
}

impl DataType {
    /// Short name used in operand error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataType::Integer => "int",
            DataType::Float => "float",
            DataType::Bool => "bool",
            DataType::List => "list",
            DataType::NumericSeries => "array",
            DataType::BoolSeries => "mask",
        }
    }
}

/// Plain scalar, as held by list operands and used as comparison thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Float(f64),
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Integer(_) => DataType::Integer,
            Value::Float(_) => DataType::Float,
            Value::Bool(_) => DataType::Bool,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

/// Elementwise comparison predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Equal,
    NotEqual,
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Greater => ">",
            Comparison::GreaterEqual => ">=",
            Comparison::Less => "<",
            Comparison::LessEqual => "<=",
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
        }
    }

    /// The predicate with its operands swapped, so `3 < a` can run as `a > 3`.
    pub fn mirrored(&self) -> Comparison {
        match self {
            Comparison::Greater => Comparison::Less,
            Comparison::GreaterEqual => Comparison::LessEqual,
            Comparison::Less => Comparison::Greater,
            Comparison::LessEqual => Comparison::GreaterEqual,
            Comparison::Equal => Comparison::Equal,
            Comparison::NotEqual => Comparison::NotEqual,
        }
    }

    pub fn test<T: PartialOrd>(&self, left: T, right: T) -> bool {
        match self {
            Comparison::Greater => left > right,
            Comparison::GreaterEqual => left >= right,
            Comparison::Less => left < right,
            Comparison::LessEqual => left <= right,
            Comparison::Equal => left == right,
            Comparison::NotEqual => left != right,
        }
    }
}

/// Elementwise logical connective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Logical {
    And,
    Or,
    Xor,
}

impl Logical {
    pub fn symbol(&self) -> &'static str {
        match self {
            Logical::And => "and",
            Logical::Or => "or",
            Logical::Xor => "xor",
        }
    }

    pub fn apply(&self, left: bool, right: bool) -> bool {
        match self {
            Logical::And => left && right,
            Logical::Or => left || right,
            Logical::Xor => left ^ right,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
