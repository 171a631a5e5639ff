use tracing::{debug, trace};

use super::children::Children;
use super::{OperatorRule, Rule, SharedRule};
use crate::{Order, RuleError};

/// True when at least one child is true. Vacuously false with zero children.
///
/// Stops at the first true child.
#[derive(Debug, Clone)]
pub struct OrRule {
    name: String,
    children: Children,
}

impl OrRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "or".to_owned(),
            children: Children::default(),
        }
    }

    #[must_use]
    pub fn with_rules(rules: impl IntoIterator<Item = SharedRule>) -> Self {
        Self {
            children: Children::from_rules(rules),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for OrRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for OrRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, order: &Order) -> Result<bool, RuleError> {
        for child in self.children.configured(&self.name)? {
            let result = child.evaluate(order)?;
            trace!(rule = %self.name, child = %child.name(), result, "child evaluated");
            if result {
                debug!(rule = %self.name, child = %child.name(), "short-circuit on true child");
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl OperatorRule for OrRule {
    fn add_rules(&mut self, rules: Vec<SharedRule>) {
        self.children.replace(rules);
    }

    fn rules(&self) -> Option<&[SharedRule]> {
        self.children.get()
    }
}
