use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaskError {
    #[error("Shape mismatch: operands have lengths {left} and {right}")]
    ShapeMismatch { left: usize, right: usize },

    #[error("'{op}' not supported between instances of '{left}' and '{right}'")]
    UnsupportedOperand {
        op: String,
        left: String,
        right: String,
    },

    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Invalid call: {0}")]
    InvalidCall(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl MaskError {
    pub fn unsupported(op: &str, left: &str, right: &str) -> Self {
        MaskError::UnsupportedOperand {
            op: op.to_string(),
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MaskError>;
