mod error;
mod evaluation_report;
mod money;
mod order;

pub use error::{MoneyError, RuleError};
pub use evaluation_report::EvaluationReport;
pub use money::Money;
pub use order::{Order, OrderBuilder, OrderItem, OrderState, PaymentMethod};
