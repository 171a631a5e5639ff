use super::SharedRule;
use crate::RuleError;

/// Child list of an operator rule. `None` until configured.
#[derive(Debug, Clone, Default)]
pub(crate) struct Children(Option<Vec<SharedRule>>);

impl Children {
    pub(crate) fn from_rules(rules: impl IntoIterator<Item = SharedRule>) -> Self {
        Children(Some(rules.into_iter().collect()))
    }

    pub(crate) fn replace(&mut self, rules: Vec<SharedRule>) {
        self.0 = Some(rules);
    }

    pub(crate) fn get(&self) -> Option<&[SharedRule]> {
        self.0.as_deref()
    }

    /// The children of the operator named `rule`, failing if none were set.
    pub(crate) fn configured(&self, rule: &str) -> Result<&[SharedRule], RuleError> {
        self.get().ok_or_else(|| RuleError::NoChildren {
            rule: rule.to_owned(),
        })
    }
}
