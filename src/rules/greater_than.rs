use super::Rule;
use crate::{Order, RuleError};

/// True when `order.value` is strictly greater than the threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreaterThanRule {
    name: String,
    value: i64,
}

impl GreaterThanRule {
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self {
            name: "greater_than".to_owned(),
            value,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn set_value(&mut self, value: i64) {
        self.value = value;
    }
}

impl Rule for GreaterThanRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, order: &Order) -> Result<bool, RuleError> {
        Ok(order.value > self.value)
    }
}
