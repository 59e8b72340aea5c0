pub mod primitives;
pub mod registry;
pub mod traits;

pub use registry::OperatorRegistry;
pub use traits::Operator;
