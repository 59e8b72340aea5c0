use super::traits::ConfigSection;
use crate::error::MaskError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Run binary logical operators on the rayon pool for long operands.
    pub parallel: bool,
    /// Operand length from which the parallel path kicks in.
    pub parallel_threshold: usize,
    /// Positions handled per parallel task.
    pub chunk_size: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 65_536,
            chunk_size: 8_192,
        }
    }
}

impl EvaluationConfig {
    pub fn use_parallel(&self, len: usize) -> bool {
        self.parallel && len >= self.parallel_threshold
    }
}

impl ConfigSection for EvaluationConfig {
    fn section_name() -> &'static str {
        "evaluation"
    }

    fn validate(&self) -> Result<(), MaskError> {
        if self.chunk_size == 0 {
            return Err(MaskError::Configuration(
                "Chunk size must be at least 1".to_string(),
            ));
        }
        if self.parallel_threshold == 0 {
            return Err(MaskError::Configuration(
                "Parallel threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
