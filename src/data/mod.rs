pub mod mask;
pub mod sequence;

pub use mask::{
    combine, combine_chunked, logical_and, logical_not, logical_or, logical_xor, BooleanMask,
};
pub use sequence::NumericSequence;
