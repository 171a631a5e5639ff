mod evaluate;
mod rules;
mod types;

pub use evaluate::{evaluate, evaluate_detailed};
pub use rules::{
    AndRule, CardNumberValidRule, CriticalMassRule, GreaterThanRule, OperatorRule, OrRule,
    OrderClosedRule, Rule, SharedRule,
};
pub use types::{
    EvaluationReport, Money, MoneyError, Order, OrderBuilder, OrderItem, OrderState,
    PaymentMethod, RuleError,
};
