use crate::config::EvaluationConfig;
use crate::engines::evaluation::{dispatch, Operand};
use crate::error::Result;
use crate::functions::traits::Operator;
use crate::types::{Comparison, DataType, Logical};

// --- Comparison ---
pub struct Compare {
    pub comparison: Comparison,
}

impl Operator for Compare {
    fn ui_name(&self) -> &'static str {
        match self.comparison {
            Comparison::Greater => "Greater Than",
            Comparison::GreaterEqual => "Greater Or Equal",
            Comparison::Less => "Less Than",
            Comparison::LessEqual => "Less Or Equal",
            Comparison::Equal => "Equal",
            Comparison::NotEqual => "Not Equal",
        }
    }
    fn alias(&self) -> &'static str {
        match self.comparison {
            Comparison::Greater => "Gt",
            Comparison::GreaterEqual => "Ge",
            Comparison::Less => "Lt",
            Comparison::LessEqual => "Le",
            Comparison::Equal => "Eq",
            Comparison::NotEqual => "Ne",
        }
    }
    fn symbol(&self) -> &'static str { self.comparison.symbol() }
    fn arity(&self) -> usize { 2 } // series, series | scalar
    fn input_types(&self) -> Vec<DataType> {
        vec![DataType::NumericSeries, DataType::NumericSeries]
    }
    fn output_type(&self) -> DataType { DataType::BoolSeries }
    fn execute(&self, args: &[Operand], _config: &EvaluationConfig) -> Result<Operand> {
        dispatch::compare(&args[0], self.comparison, &args[1])
    }
}

// --- Logical operators ---
pub struct And;
impl Operator for And {
    fn ui_name(&self) -> &'static str { "Logical AND" }
    fn alias(&self) -> &'static str { "And" }
    fn symbol(&self) -> &'static str { Logical::And.symbol() }
    fn arity(&self) -> usize { 2 } // bool_series, bool_series
    fn input_types(&self) -> Vec<DataType> {
        vec![DataType::BoolSeries, DataType::BoolSeries]
    }
    fn output_type(&self) -> DataType { DataType::BoolSeries }
    fn execute(&self, args: &[Operand], config: &EvaluationConfig) -> Result<Operand> {
        dispatch::logical(Logical::And, &args[0], &args[1], config)
    }
}

pub struct Or;
impl Operator for Or {
    fn ui_name(&self) -> &'static str { "Logical OR" }
    fn alias(&self) -> &'static str { "Or" }
    fn symbol(&self) -> &'static str { Logical::Or.symbol() }
    fn arity(&self) -> usize { 2 } // bool_series, bool_series
    fn input_types(&self) -> Vec<DataType> {
        vec![DataType::BoolSeries, DataType::BoolSeries]
    }
    fn output_type(&self) -> DataType { DataType::BoolSeries }
    fn execute(&self, args: &[Operand], config: &EvaluationConfig) -> Result<Operand> {
        dispatch::logical(Logical::Or, &args[0], &args[1], config)
    }
}

pub struct Xor;
impl Operator for Xor {
    fn ui_name(&self) -> &'static str { "Logical XOR" }
    fn alias(&self) -> &'static str { "Xor" }
    fn symbol(&self) -> &'static str { Logical::Xor.symbol() }
    fn arity(&self) -> usize { 2 }
    fn input_types(&self) -> Vec<DataType> {
        vec![DataType::BoolSeries, DataType::BoolSeries]
    }
    fn output_type(&self) -> DataType { DataType::BoolSeries }
    fn execute(&self, args: &[Operand], config: &EvaluationConfig) -> Result<Operand> {
        dispatch::logical(Logical::Xor, &args[0], &args[1], config)
    }
}

pub struct Not;
impl Operator for Not {
    fn ui_name(&self) -> &'static str { "Logical NOT" }
    fn alias(&self) -> &'static str { "Not" }
    fn symbol(&self) -> &'static str { "not" }
    fn arity(&self) -> usize { 1 }
    fn input_types(&self) -> Vec<DataType> {
        vec![DataType::BoolSeries]
    }
    fn output_type(&self) -> DataType { DataType::BoolSeries }
    fn execute(&self, args: &[Operand], _config: &EvaluationConfig) -> Result<Operand> {
        dispatch::logical_not(&args[0])
    }
}
