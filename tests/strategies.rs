use order_rules::{
    AndRule, CardNumberValidRule, CriticalMassRule, GreaterThanRule, Money, Order,
    OrderClosedRule, OrderState, OrRule, PaymentMethod, Rule, SharedRule,
};
use proptest::prelude::*;

const STATES: &[OrderState] = &[OrderState::Open, OrderState::InProgress, OrderState::Closed];
const PAYMENT_METHODS: &[PaymentMethod] = &[
    PaymentMethod::Cash,
    PaymentMethod::CreditCard,
    PaymentMethod::DebitCard,
];

/// Card numbers biased towards the interesting shapes.
fn arb_card_number() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "[0-9]{16}".prop_map(Some),
        "[0-9]{0,20}".prop_map(Some),
        "[0-9a-z ]{16}".prop_map(Some),
        " {0,16}".prop_map(Some),
    ]
}

/// Generate an order with values spread around the thresholds used by
/// [`arb_rule`].
pub fn arb_order() -> impl Strategy<Value = Order> {
    (
        -100_i64..=100,
        prop::sample::select(STATES),
        prop::sample::select(PAYMENT_METHODS),
        -10_000_i64..=10_000,
        arb_card_number(),
    )
        .prop_map(|(value, state, payment_method, total, card_number)| {
            let mut order = Order::new(
                "P-1",
                value,
                state,
                Money::from_minor(total),
                payment_method,
            );
            order.card_number = card_number;
            order
        })
}

/// Plain description of a rule tree, used both to build the real tree and
/// as a reference model for what it should return.
#[derive(Debug, Clone)]
pub enum GenRule {
    GreaterThan(i64),
    Closed,
    CardValid,
    And(Vec<GenRule>),
    Or(Vec<GenRule>),
    CriticalMass(usize, Vec<GenRule>),
}

impl GenRule {
    pub fn build(&self) -> SharedRule {
        match self {
            GenRule::GreaterThan(v) => GreaterThanRule::new(*v).into_shared(),
            GenRule::Closed => OrderClosedRule::new().into_shared(),
            GenRule::CardValid => CardNumberValidRule::new().into_shared(),
            GenRule::And(children) => AndRule::with_rules(children.iter().map(GenRule::build))
                .into_shared(),
            GenRule::Or(children) => OrRule::with_rules(children.iter().map(GenRule::build))
                .into_shared(),
            GenRule::CriticalMass(minimum, children) => {
                CriticalMassRule::with_rules(*minimum, children.iter().map(GenRule::build))
                    .into_shared()
            }
        }
    }

    pub fn expected(&self, order: &Order) -> bool {
        match self {
            GenRule::GreaterThan(v) => order.value > *v,
            GenRule::Closed => order.state == OrderState::Closed,
            GenRule::CardValid => order.card_number.as_deref().is_some_and(|n| {
                n.len() == 16 && n.chars().all(|c| c.is_ascii_digit())
            }),
            GenRule::And(children) => children.iter().all(|c| c.expected(order)),
            GenRule::Or(children) => children.iter().any(|c| c.expected(order)),
            GenRule::CriticalMass(minimum, children) => {
                children.iter().filter(|c| c.expected(order)).count() >= *minimum
            }
        }
    }
}

pub fn arb_leaf() -> impl Strategy<Value = GenRule> {
    prop_oneof![
        (-100_i64..=100).prop_map(GenRule::GreaterThan),
        Just(GenRule::Closed),
        Just(GenRule::CardValid),
    ]
}

/// Generate a rule tree up to four levels deep, including empty operators.
pub fn arb_rule() -> impl Strategy<Value = GenRule> {
    arb_leaf().prop_recursive(4, 32, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(GenRule::And),
            prop::collection::vec(inner.clone(), 0..5).prop_map(GenRule::Or),
            (0_usize..6, prop::collection::vec(inner, 0..5))
                .prop_map(|(minimum, children)| GenRule::CriticalMass(minimum, children)),
        ]
    })
}

/// A flat list of leaf descriptions to use as operator children.
pub fn arb_children() -> impl Strategy<Value = Vec<GenRule>> {
    prop::collection::vec(arb_leaf(), 0..8)
}

pub fn build_all(children: &[GenRule]) -> Vec<SharedRule> {
    children.iter().map(GenRule::build).collect()
}

#[allow(dead_code)]
pub fn evaluate(rule: &dyn Rule, order: &Order) -> bool {
    rule.evaluate(order).expect("configured tree must evaluate")
}
