use tracing::trace;

use super::children::Children;
use super::{OperatorRule, Rule, SharedRule};
use crate::{Order, RuleError};

/// True when at least `minimum_rules_count` children are true.
///
/// Every child is evaluated, since the exact count is needed. A minimum of
/// zero is satisfied by any child list, including an empty one.
#[derive(Debug, Clone)]
pub struct CriticalMassRule {
    name: String,
    minimum_rules_count: usize,
    children: Children,
}

impl CriticalMassRule {
    #[must_use]
    pub fn new(minimum_rules_count: usize) -> Self {
        Self {
            name: "critical_mass".to_owned(),
            minimum_rules_count,
            children: Children::default(),
        }
    }

    #[must_use]
    pub fn with_rules(
        minimum_rules_count: usize,
        rules: impl IntoIterator<Item = SharedRule>,
    ) -> Self {
        Self {
            children: Children::from_rules(rules),
            ..Self::new(minimum_rules_count)
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn minimum_rules_count(&self) -> usize {
        self.minimum_rules_count
    }
}

impl Rule for CriticalMassRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, order: &Order) -> Result<bool, RuleError> {
        let mut passed = 0_usize;
        for child in self.children.configured(&self.name)? {
            let result = child.evaluate(order)?;
            trace!(rule = %self.name, child = %child.name(), result, "child evaluated");
            if result {
                passed += 1;
            }
        }
        trace!(
            rule = %self.name,
            passed,
            minimum = self.minimum_rules_count,
            "critical mass counted"
        );
        Ok(passed >= self.minimum_rules_count)
    }
}

impl OperatorRule for CriticalMassRule {
    fn add_rules(&mut self, rules: Vec<SharedRule>) {
        self.children.replace(rules);
    }

    fn rules(&self) -> Option<&[SharedRule]> {
        self.children.get()
    }
}
