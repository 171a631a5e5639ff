//! Rule capabilities and the built-in rules.
//!
//! Leaf rules inspect [`Order`] fields directly. Operator rules hold an
//! ordered list of shared children and combine their results. Because
//! evaluation never mutates anything, one child may sit under several
//! parents.

use std::fmt;
use std::sync::Arc;

use crate::{Order, RuleError};

mod and;
mod card_number_valid;
mod children;
mod critical_mass;
mod greater_than;
mod or;
mod order_closed;

pub use and::AndRule;
pub use card_number_valid::CardNumberValidRule;
pub use critical_mass::CriticalMassRule;
pub use greater_than::GreaterThanRule;
pub use or::OrRule;
pub use order_closed::OrderClosedRule;

/// A rule that can appear under any number of parents.
pub type SharedRule = Arc<dyn Rule>;

/// A named boolean predicate over an [`Order`].
///
/// `evaluate` must be a pure function of the order and the rule's own
/// configuration.
pub trait Rule: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// # Errors
    ///
    /// Returns [`RuleError`] when the rule, or a child it reaches, is not
    /// configured for evaluation.
    fn evaluate(&self, order: &Order) -> Result<bool, RuleError>;

    /// Wrap this rule for use as a child of operator rules.
    fn into_shared(self) -> SharedRule
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

/// A rule combining the results of child rules.
pub trait OperatorRule: Rule {
    /// Replace the child rules. Order only affects short-circuiting.
    fn add_rules(&mut self, rules: Vec<SharedRule>);

    /// The configured children, or `None` if `add_rules` was never called.
    fn rules(&self) -> Option<&[SharedRule]>;
}
