use super::Rule;
use crate::{Order, RuleError};

const CARD_NUMBER_LEN: usize = 16;

/// True when the order carries a 16-digit card number.
///
/// This is a shape check only: ASCII digits, exact length, nothing else.
/// No checksum is verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardNumberValidRule {
    name: String,
}

impl CardNumberValidRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "card_number_valid".to_owned(),
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for CardNumberValidRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for CardNumberValidRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, order: &Order) -> Result<bool, RuleError> {
        Ok(order.card_number.as_deref().is_some_and(is_card_number))
    }
}

// Blank and whitespace-only input fails the digit check.
fn is_card_number(candidate: &str) -> bool {
    candidate.len() == CARD_NUMBER_LEN && candidate.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::order;
    use crate::OrderState;

    fn check(card_number: Option<&str>) -> bool {
        let mut ord = order(0, OrderState::Open);
        ord.card_number = card_number.map(str::to_owned);
        CardNumberValidRule::new().evaluate(&ord).unwrap()
    }

    #[test]
    fn absent_is_invalid() {
        assert!(!check(None));
    }

    #[test]
    fn blank_is_invalid() {
        assert!(!check(Some("")));
        assert!(!check(Some("                ")));
        assert!(!check(Some("\t")));
    }

    #[test]
    fn wrong_length_is_invalid() {
        assert!(!check(Some("1234")));
        assert!(!check(Some("123456789012345")));
        assert!(!check(Some("12345678901234567")));
    }

    #[test]
    fn non_digits_are_invalid() {
        assert!(!check(Some("abcd1234efgh5678")));
        assert!(!check(Some("1234-5678-9012-3")));
        assert!(!check(Some("1234 5678 9012 3")));
        assert!(!check(Some(" 123456789012345")));
    }

    #[test]
    fn non_ascii_digits_are_invalid() {
        // Arabic-Indic digits: 16 chars but not ASCII
        assert!(!check(Some("١٢٣٤٥٦٧٨٩٠١٢٣٤٥٦")));
    }

    #[test]
    fn sixteen_digits_are_valid() {
        assert!(check(Some("1234567890123456")));
        assert!(check(Some("0000000000000000")));
    }

    #[test]
    fn checksum_is_not_verified() {
        // fails Luhn, still accepted
        assert!(check(Some("1111111111111112")));
    }
}
