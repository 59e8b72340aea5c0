//! Elementwise comparison and boolean-mask logic over numeric sequences.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod functions;
pub mod types;

pub use data::{logical_and, BooleanMask, NumericSequence};
pub use engines::evaluation::{Evaluator, Operand};
pub use error::{MaskError, Result};
