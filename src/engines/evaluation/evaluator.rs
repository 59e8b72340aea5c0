use super::{dispatch, operand::Operand};
use crate::{
    config::EvaluationConfig,
    error::{MaskError, Result},
    functions::registry::OperatorRegistry,
    types::{Comparison, Logical},
};
use std::sync::Arc;

pub struct Evaluator {
    registry: Arc<OperatorRegistry>,
    config: EvaluationConfig,
}

impl Evaluator {
    pub fn new(config: EvaluationConfig) -> Self {
        Self::with_registry(Arc::new(OperatorRegistry::new()), config)
    }

    pub fn with_registry(registry: Arc<OperatorRegistry>, config: EvaluationConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// Runs the operator registered under `alias` on `args`.
    pub fn call(&self, alias: &str, args: &[Operand]) -> Result<Operand> {
        let operator = self
            .registry
            .get(alias)
            .ok_or_else(|| MaskError::InvalidCall(format!("Operator {} not found", alias)))?;

        if args.len() != operator.arity() {
            return Err(MaskError::InvalidCall(format!(
                "{} takes {} operands, got {}",
                operator.alias(),
                operator.arity(),
                args.len()
            )));
        }

        log::debug!(
            "{}({})",
            operator.alias(),
            args.iter()
                .map(|a| a.type_name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.observe(operator.execute(args, &self.config))
    }

    pub fn compare(&self, lhs: &Operand, op: Comparison, rhs: &Operand) -> Result<Operand> {
        log::debug!("{} {} {}", lhs.type_name(), op.symbol(), rhs.type_name());
        self.observe(dispatch::compare(lhs, op, rhs))
    }

    pub fn logical(&self, op: Logical, lhs: &Operand, rhs: &Operand) -> Result<Operand> {
        log::debug!("{} {} {}", lhs.type_name(), op.symbol(), rhs.type_name());
        self.observe(dispatch::logical(op, lhs, rhs, &self.config))
    }

    pub fn logical_and(&self, lhs: &Operand, rhs: &Operand) -> Result<Operand> {
        self.logical(Logical::And, lhs, rhs)
    }

    pub fn logical_not(&self, operand: &Operand) -> Result<Operand> {
        self.observe(dispatch::logical_not(operand))
    }

    fn observe(&self, result: Result<Operand>) -> Result<Operand> {
        if let Err(e) = &result {
            log::warn!("Evaluation rejected: {}", e);
        }
        result
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvaluationConfig::default())
    }
}
