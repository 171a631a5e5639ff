use tracing::{debug, trace};

use super::children::Children;
use super::{OperatorRule, Rule, SharedRule};
use crate::{Order, RuleError};

/// True when every child is true. Vacuously true with zero children.
///
/// Stops at the first false child; later children are never evaluated.
#[derive(Debug, Clone)]
pub struct AndRule {
    name: String,
    children: Children,
}

impl AndRule {
    /// An AND rule with no children configured yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "and".to_owned(),
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

impl Default for AndRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for AndRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, order: &Order) -> Result<bool, RuleError> {
        for child in self.children.configured(&self.name)? {
            let result = child.evaluate(order)?;
            trace!(rule = %self.name, child = %child.name(), result, "child evaluated");
            if !result {
                debug!(rule = %self.name, child = %child.name(), "short-circuit on false child");
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl OperatorRule for AndRule {
    fn add_rules(&mut self, rules: Vec<SharedRule>) {
        self.children.replace(rules);
    }

    fn rules(&self) -> Option<&[SharedRule]> {
        self.children.get()
    }
}
