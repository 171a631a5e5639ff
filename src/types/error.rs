use thiserror::Error;

/// Errors raised while evaluating a rule tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("operator rule '{rule}' has no child rules configured")]
    NoChildren { rule: String },

    #[error("no order supplied for evaluation")]
    MissingOrder,
}

/// Errors raised when parsing a [`Money`](super::Money) amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("empty monetary amount")]
    Empty,

    #[error("invalid monetary amount '{input}'")]
    Invalid { input: String },

    #[error("monetary amount '{input}' has more than two decimal places")]
    TooPrecise { input: String },

    #[error("monetary amount '{input}' is out of range")]
    Overflow { input: String },
}
