use super::Rule;
use crate::{Order, OrderState, RuleError};

/// True when the order is in the [`OrderState::Closed`] state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderClosedRule {
    name: String,
}

impl OrderClosedRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "order_closed".to_owned(),
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for OrderClosedRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for OrderClosedRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, order: &Order) -> Result<bool, RuleError> {
        Ok(order.state == OrderState::Closed)
    }
}
