use std::fmt;

use chrono::{DateTime, Utc};

use super::Money;

/// Lifecycle state of an [`Order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OrderState {
    Open,
    InProgress,
    Closed,
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderState::Open => write!(f, "open"),
            OrderState::InProgress => write!(f, "in_progress"),
            OrderState::Closed => write!(f, "closed"),
        }
    }
}

/// How an [`Order`] is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::CreditCard => write!(f, "credit_card"),
            PaymentMethod::DebitCard => write!(f, "debit_card"),
        }
    }
}

/// One line item of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderItem {
    pub number: i64,
    pub description: String,
    pub quantity: i64,
}

impl OrderItem {
    pub fn new(number: i64, description: impl Into<String>, quantity: i64) -> Self {
        Self {
            number,
            description: description.into(),
            quantity,
        }
    }
}

/// The record every rule is evaluated against.
///
/// Fields are public and freely mutable; nothing is validated on
/// construction. Rules only ever read an order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub id: String,
    pub value: i64,
    pub state: OrderState,
    pub total: Money,
    pub payment_method: PaymentMethod,
    pub is_special_interest: bool,
    pub capture_date: DateTime<Utc>,
    pub delivery_date: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    pub card_number: Option<String>,
}

impl Order {
    /// Create an order from its required fields. Dates default to the Unix
    /// epoch, `items` is empty, there is no card number and the order is not
    /// of special interest.
    pub fn new(
        id: impl Into<String>,
        value: i64,
        state: OrderState,
        total: Money,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: id.into(),
            value,
            state,
            total,
            payment_method,
            is_special_interest: false,
            capture_date: DateTime::<Utc>::default(),
            delivery_date: DateTime::<Utc>::default(),
            items: Vec::new(),
            card_number: None,
        }
    }

    /// Start an [`OrderBuilder`] from the required fields.
    pub fn builder(
        id: impl Into<String>,
        value: i64,
        state: OrderState,
        total: Money,
        payment_method: PaymentMethod,
    ) -> OrderBuilder {
        OrderBuilder {
            order: Order::new(id, value, state, total, payment_method),
        }
    }
}

/// Builder for an [`Order`] with optional fields.
///
/// # Example
///
/// ```
/// use order_rules::{Money, Order, OrderItem, OrderState, PaymentMethod};
///
/// let order = Order::builder("A-100", 50, OrderState::Open, Money::from_minor(4999), PaymentMethod::CreditCard)
///     .card_number("1234567890123456")
///     .item(OrderItem::new(1, "widget", 2))
///     .build();
/// assert_eq!(order.items.len(), 1);
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn card_number(mut self, card_number: impl Into<String>) -> Self {
        self.order.card_number = Some(card_number.into());
        self
    }

    pub fn special_interest(mut self, is_special_interest: bool) -> Self {
        self.order.is_special_interest = is_special_interest;
        self
    }

    pub fn capture_date(mut self, date: DateTime<Utc>) -> Self {
        self.order.capture_date = date;
        self
    }

    pub fn delivery_date(mut self, date: DateTime<Utc>) -> Self {
        self.order.delivery_date = date;
        self
    }

    /// Append one line item.
    pub fn item(mut self, item: OrderItem) -> Self {
        self.order.items.push(item);
        self
    }

    /// Replace all line items.
    pub fn items(mut self, items: impl IntoIterator<Item = OrderItem>) -> Self {
        self.order.items = items.into_iter().collect();
        self
    }

    pub fn build(self) -> Order {
        self.order
    }
}
