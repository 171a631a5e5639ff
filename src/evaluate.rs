use std::time::Instant;

use tracing::{debug, instrument};

use crate::{EvaluationReport, Order, Rule, RuleError};

/// Evaluate `rule` against an order that may be absent.
///
/// # Errors
///
/// Returns [`RuleError::MissingOrder`] when `order` is `None`, or any error
/// raised by the rule tree.
#[instrument(skip_all, fields(rule = %rule.name()))]
pub fn evaluate(rule: &dyn Rule, order: Option<&Order>) -> Result<bool, RuleError> {
    let order = order.ok_or(RuleError::MissingOrder)?;
    let result = rule.evaluate(order)?;
    debug!(order = %order.id, result, "rule evaluated");
    Ok(result)
}

/// Like [`evaluate()`], but also reports how long the evaluation took.
///
/// # Errors
///
/// Same as [`evaluate()`].
#[instrument(skip_all, fields(rule = %rule.name()))]
pub fn evaluate_detailed(
    rule: &dyn Rule,
    order: Option<&Order>,
) -> Result<EvaluationReport, RuleError> {
    let order = order.ok_or(RuleError::MissingOrder)?;
    let start = Instant::now();
    let result = rule.evaluate(order)?;
    let duration = start.elapsed();
    debug!(order = %order.id, result, ?duration, "rule evaluated");
    Ok(EvaluationReport::new(rule.name(), result, duration))
}
