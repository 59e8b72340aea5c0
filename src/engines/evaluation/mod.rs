pub mod dispatch;
pub mod evaluator;
pub mod operand;

pub use evaluator::Evaluator;
pub use operand::Operand;
