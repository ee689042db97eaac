//! [`Money`]-related definitions.

use std::{fmt, iter, ops, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};

/// Non-negative amount of money in the dashboard currency, not exceeding
/// [`Money::MAX`].
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount of [`Money`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest amount of [`Money`] a single record may carry: one
    /// quadrillion.
    pub const MAX: Self =
        Self(Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0));

    /// Creates a new [`Money`] if the provided `amount` is neither negative
    /// nor exceeds [`Money::MAX`].
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        (Decimal::ZERO..=Self::MAX.0)
            .contains(&amount)
            .then_some(Self(amount))
    }

    /// Returns the decimal amount of this [`Money`].
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Divides this [`Money`] equally between `count` parts.
    ///
    /// Dividing between zero parts gives [`Money::ZERO`].
    #[must_use]
    pub fn average(self, count: usize) -> Self {
        self.0
            .checked_div(Decimal::from(count))
            .map_or(Self::ZERO, Self)
    }

    /// Rounds this [`Money`] to whole cents, half a cent away from zero.
    #[must_use]
    pub fn round(self) -> Self {
        let strategy = RoundingStrategy::MidpointAwayFromZero;
        Self(self.0.round_dp_with_strategy(2, strategy))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.0.trunc().normalize())
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s).map_err(|_| "invalid amount")?;
        Self::new(amount).ok_or("amount out of range")
    }
}

/// Saturates at [`Decimal::MAX`] instead of overflowing.
impl ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, ops::Add::add)
    }
}

impl<'a> iter::Sum<&'a Self> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Money;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("123.45").unwrap().amount(),
            "123.45".parse::<Decimal>().unwrap(),
        );
        assert_eq!(money("0"), Money::ZERO);

        assert!(Money::from_str("123.00").is_ok());
        assert!(Money::from_str("123").is_ok());

        assert!(Money::from_str("-0.01").is_err());
        assert!(Money::from_str("12,5").is_err());
        assert!(Money::from_str("").is_err());
    }

    #[test]
    fn rejects_negative() {
        assert!(Money::new(Decimal::NEGATIVE_ONE).is_none());
        assert!(Money::new(Decimal::ZERO).is_some());
    }

    #[test]
    fn rejects_above_max() {
        assert_eq!(Money::new(Money::MAX.amount()), Some(Money::MAX));
        assert_eq!(Money::MAX, money("1000000000000000"));
        assert!(Money::new(Decimal::MAX).is_none());
        assert!(Money::from_str("1000000000000000.01").is_err());
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let huge = Money(Decimal::MAX);

        assert_eq!(huge + huge, huge);

        let mut sum = huge;
        sum += Money::MAX;
        assert_eq!(sum, huge);

        assert_eq!([huge, huge, huge].iter().sum::<Money>(), huge);
        assert_eq!(Money::MAX + Money::MAX, money("2000000000000000"));
    }

    #[test]
    fn rounds_half_cent_away_from_zero() {
        assert_eq!(money("0.125").round(), money("0.13"));
        assert_eq!(money("10.005").round(), money("10.01"));
        assert_eq!(money("0.135").round(), money("0.14"));
        assert_eq!(money("0.124").round(), money("0.12"));
        assert_eq!(money("7").round(), money("7"));
    }

    #[test]
    fn to_string() {
        assert_eq!(money("123.45").to_string(), "123.45");
        assert_eq!(money("123.4").to_string(), "123.40");
        assert_eq!(money("123.00").to_string(), "123");
        assert_eq!(money("123").to_string(), "123");
        assert_eq!(money("100").to_string(), "100");
    }

    #[test]
    fn sums() {
        let total: Money =
            [money("100"), money("200.50"), money("0.25")].iter().sum();

        assert_eq!(total, money("300.75"));
        assert_eq!(Vec::<Money>::new().into_iter().sum::<Money>(), Money::ZERO);
    }

    #[test]
    fn averages() {
        assert_eq!(money("300").average(2), money("150"));
        assert_eq!(money("100").average(3).round(), money("33.33"));
        assert_eq!(money("300").average(0), Money::ZERO);
        assert_eq!(Money::ZERO.average(0), Money::ZERO);
    }
}
