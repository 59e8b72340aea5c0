use crate::config::EvaluationConfig;
use crate::engines::evaluation::Operand;
use crate::error::Result;
use crate::types::DataType;

/// Elementwise operator trait
pub trait Operator: Send + Sync {
    /// Display name
    fn ui_name(&self) -> &'static str;

    /// Registry key
    fn alias(&self) -> &'static str;

    /// Operator symbol used in error messages
    fn symbol(&self) -> &'static str;

    fn arity(&self) -> usize;

    /// Preferred operand kinds. Scalars are also accepted where the
    /// operator has a scalar meaning.
    fn input_types(&self) -> Vec<DataType>;
    fn output_type(&self) -> DataType;

    fn execute(&self, args: &[Operand], config: &EvaluationConfig) -> Result<Operand>;
}
