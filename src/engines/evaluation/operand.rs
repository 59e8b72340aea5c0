use crate::data::{BooleanMask, NumericSequence};
use crate::error::{MaskError, Result};
use crate::types::{DataType, Value};
use std::fmt;

/// A value handed to an operator.
///
/// `List` is a plain ordered list. It never takes part in elementwise
/// operations; convert it with [`Operand::into_array`] first.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Value>),
    Array(NumericSequence),
    Mask(BooleanMask),
}

impl Operand {
    pub fn list<V: Into<Value>, I: IntoIterator<Item = V>>(values: I) -> Operand {
        Operand::List(values.into_iter().map(Into::into).collect())
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Operand::Int(_) => DataType::Integer,
            Operand::Float(_) => DataType::Float,
            Operand::Bool(_) => DataType::Bool,
            Operand::List(_) => DataType::List,
            Operand::Array(_) => DataType::NumericSeries,
            Operand::Mask(_) => DataType::BoolSeries,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.data_type().type_name()
    }

    /// Numeric scalar payload, if any. Booleans are not numbers here.
    pub fn as_number(&self) -> Option<Value> {
        match self {
            Operand::Int(i) => Some(Value::Integer(*i)),
            Operand::Float(f) => Some(Value::Float(*f)),
            _ => None,
        }
    }

    pub fn as_mask(&self) -> Option<&BooleanMask> {
        match self {
            Operand::Mask(mask) => Some(mask),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Operand::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Turns a plain list into a numeric array. Integer lists stay integer,
    /// any float promotes the whole array to float. Other operands are
    /// returned unchanged.
    pub fn into_array(self) -> Result<Operand> {
        let values = match self {
            Operand::List(values) => values,
            other => return Ok(other),
        };

        if let Some(ints) = values.iter().map(integer_of).collect::<Option<Vec<i64>>>() {
            return Ok(Operand::Array(NumericSequence::from_ints(ints)));
        }

        match values.iter().map(float_of).collect::<Option<Vec<f64>>>() {
            Some(floats) => Ok(Operand::Array(NumericSequence::from_floats(floats))),
            None => Err(MaskError::TypeMismatch {
                expected: "list of numbers".to_string(),
                actual: "list containing bool".to_string(),
            }),
        }
    }
}

fn integer_of(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(*i),
        _ => None,
    }
}

fn float_of(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        Value::Bool(_) => None,
    }
}

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Operand::Int(v)
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Float(v)
    }
}

impl From<bool> for Operand {
    fn from(v: bool) -> Self {
        Operand::Bool(v)
    }
}

impl From<NumericSequence> for Operand {
    fn from(seq: NumericSequence) -> Self {
        Operand::Array(seq)
    }
}

impl From<BooleanMask> for Operand {
    fn from(mask: BooleanMask) -> Self {
        Operand::Mask(mask)
    }
}

fn format_bool(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => format!("{:?}", f),
        Value::Bool(b) => format_bool(*b).to_string(),
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(i) => write!(f, "{}", i),
            Operand::Float(v) => write!(f, "{:?}", v),
            Operand::Bool(b) => f.write_str(format_bool(*b)),
            Operand::List(values) => {
                let items = values.iter().map(format_value).collect::<Vec<String>>();
                write!(f, "[{}]", items.join(", "))
            }
            Operand::Array(seq) => write!(f, "{}", seq),
            Operand::Mask(mask) => write!(f, "{}", mask),
        }
    }
}
