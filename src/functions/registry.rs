use super::{
    primitives::{And, Compare, Not, Or, Xor},
    traits::Operator,
};
use crate::types::{Comparison, DataType};
use std::{collections::HashMap, sync::Arc};

pub struct OperatorRegistry {
    operators: HashMap<String, Arc<dyn Operator>>,
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OperatorRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            operators: HashMap::new(),
        };
        registry.register_comparisons();
        registry.register_logical();
        registry
    }

    pub fn get(&self, alias: &str) -> Option<Arc<dyn Operator>> {
        self.operators.get(alias).cloned()
    }

    pub fn register(&mut self, operator: Arc<dyn Operator>) {
        self.operators.insert(operator.alias().to_string(), operator);
    }

    pub fn get_by_output_type(&self, data_type: DataType) -> Vec<Arc<dyn Operator>> {
        self.operators
            .values()
            .filter(|op| op.output_type() == data_type)
            .cloned()
            .collect()
    }

    /// Registered aliases, sorted.
    pub fn aliases(&self) -> Vec<&str> {
        let mut aliases: Vec<&str> = self.operators.keys().map(String::as_str).collect();
        aliases.sort_unstable();
        aliases
    }

    fn register_comparisons(&mut self) {
        let comparisons = [
            Comparison::Greater,
            Comparison::GreaterEqual,
            Comparison::Less,
            Comparison::LessEqual,
            Comparison::Equal,
            Comparison::NotEqual,
        ];
        for comparison in comparisons {
            self.register(Arc::new(Compare { comparison }));
        }
    }

    fn register_logical(&mut self) {
        let operators: Vec<Arc<dyn Operator>> = vec![
            Arc::new(And),
            Arc::new(Or),
            Arc::new(Xor),
            Arc::new(Not),
        ];
        for operator in operators {
            self.register(operator);
        }
    }
}
