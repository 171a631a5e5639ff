use std::fmt;
use std::time::Duration;

/// Outcome of [`evaluate_detailed()`](crate::evaluate_detailed).
///
/// Carries the name of the root rule, its boolean result and the wall-clock
/// duration of the evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct EvaluationReport {
    rule: String,
    result: bool,
    duration: Duration,
}

impl EvaluationReport {
    pub(crate) fn new(rule: impl Into<String>, result: bool, duration: Duration) -> Self {
        Self {
            rule: rule.into(),
            result,
            duration,
        }
    }

    /// Name of the rule the evaluation started from.
    #[must_use]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    #[must_use]
    pub fn result(&self) -> bool {
        self.result
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} ({:?})", self.rule, self.result, self.duration)
    }
}
