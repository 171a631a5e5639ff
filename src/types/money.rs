use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use super::MoneyError;

const MINOR_PER_UNIT: i64 = 100;

/// A fixed-point monetary amount with two decimal places.
///
/// Stored as a signed count of minor units (cents), so `Money::from_minor(1250)`
/// is `12.50`. Parsing accepts at most two fraction digits and never rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    #[must_use]
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// `None` if the sum leaves the `i64` minor-unit range.
    #[must_use]
    pub const fn checked_add(self, rhs: Money) -> Option<Money> {
        match self.0.checked_add(rhs.0) {
            Some(minor) => Some(Money(minor)),
            None => None,
        }
    }

    /// `None` if the difference leaves the `i64` minor-unit range.
    #[must_use]
    pub const fn checked_sub(self, rhs: Money) -> Option<Money> {
        match self.0.checked_sub(rhs.0) {
            Some(minor) => Some(Money(minor)),
            None => None,
        }
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(MoneyError::Empty);
        }
        let invalid = || MoneyError::Invalid {
            input: input.to_owned(),
        };
        let overflow = || MoneyError::Overflow {
            input: input.to_owned(),
        };

        let (negative, unsigned) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }
        if unsigned.contains('.') && fraction.is_empty() {
            return Err(invalid());
        }
        if fraction.len() > 2 {
            return Err(MoneyError::TooPrecise {
                input: input.to_owned(),
            });
        }

        let whole: i64 = whole.parse().map_err(|_| overflow())?;
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        // Accumulate negatives below zero so i64::MIN is reachable.
        let (whole, cents) = if negative {
            (-whole, -cents)
        } else {
            (whole, cents)
        };
        let minor = whole
            .checked_mul(MINOR_PER_UNIT)
            .and_then(|m| m.checked_add(cents))
            .ok_or_else(overflow)?;
        Ok(Money(minor))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_unit = MINOR_PER_UNIT.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / per_unit, abs % per_unit)
    }
}

/// Overflow behaves like `i64` addition: a panic in debug builds. Use
/// [`Money::checked_add`] for untrusted amounts.
impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

/// Overflow behaves like `i64` subtraction. See [`Money::checked_sub`].
impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}
