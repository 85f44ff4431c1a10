//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{
    prelude::ToPrimitive as _, Decimal, RoundingStrategy,
};

use crate::{define_kind, Percent};

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new zero [`Money`] amount in the provided [`Currency`].
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Indicates whether this [`Money`] amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Sums this [`Money`] with the `other` one.
    ///
    /// [`None`] is returned if the [`Currency`]ies don't match.
    #[must_use]
    pub fn try_add(self, other: Self) -> Option<Self> {
        (self.currency == other.currency).then(|| Self {
            amount: self.amount + other.amount,
            currency: self.currency,
        })
    }

    /// Multiplies this [`Money`] amount by the provided factor.
    #[must_use]
    pub fn times(self, factor: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(factor),
            currency: self.currency,
        }
    }

    /// Increases this [`Money`] amount by the provided [`Percent`].
    #[must_use]
    pub fn plus_percent(self, percent: Percent) -> Self {
        Self {
            amount: self.amount * (Decimal::ONE + percent.fraction()),
            currency: self.currency,
        }
    }

    /// Decreases this [`Money`] amount by the provided [`Percent`].
    #[must_use]
    pub fn minus_percent(self, percent: Percent) -> Self {
        Self {
            amount: self.amount * (Decimal::ONE - percent.fraction()),
            currency: self.currency,
        }
    }

    /// Rounds this [`Money`] amount to 2 decimal places, with midpoints
    /// rounded away from zero.
    #[must_use]
    pub fn round(self) -> Self {
        Self {
            amount: self.amount.round_dp_with_strategy(
                2,
                RoundingStrategy::MidpointAwayFromZero,
            ),
            currency: self.currency,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        if amount.is_integer() {
            write!(f, "{}{currency}", amount.to_i128().expect("integer"))
        } else {
            write!(f, "{amount}{currency}")
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 {
            return Err("too short");
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "US Dollar."]
        Usd = 1,

        #[doc = "Euro."]
        Eur = 2,

        #[doc = "Moroccan Dirham."]
        Mad = 3,
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use crate::Percent;

    use super::{Currency, Money};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn usd(s: &str) -> Money {
        Money {
            amount: decimal(s),
            currency: Currency::Usd,
        }
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("123.45USD").unwrap(),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Usd,
            },
        );

        assert_eq!(
            Money::from_str("123.45EUR").unwrap(),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Eur,
            },
        );

        assert_eq!(
            Money::from_str("123.45MAD").unwrap(),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Mad,
            },
        );

        assert!(Money::from_str("123.45").is_err());
        assert!(Money::from_str("123.45Us").is_err());
        assert!(Money::from_str("123.45Usdollar").is_err());

        assert!(Money::from_str("123.00USD").is_ok());
        assert!(Money::from_str("123.0USD").is_ok());
        assert!(Money::from_str("123USD").is_ok());
    }

    #[test]
    fn to_string() {
        assert_eq!(usd("123.45").to_string(), "123.45USD");
        assert_eq!(
            Money {
                amount: decimal("123.45"),
                currency: Currency::Mad,
            }
            .to_string(),
            "123.45MAD",
        );

        assert_eq!(usd("123.00").to_string(), "123USD");
        assert_eq!(usd("123.0").to_string(), "123USD");
        assert_eq!(usd("123").to_string(), "123USD");
    }

    #[test]
    fn try_add() {
        assert_eq!(usd("1.50").try_add(usd("2.25")), Some(usd("3.75")));
        assert_eq!(
            usd("1.50").try_add(Money {
                amount: decimal("2.25"),
                currency: Currency::Eur,
            }),
            None,
        );
    }

    #[test]
    fn times() {
        assert_eq!(usd("80").times(2), usd("160"));
        assert_eq!(usd("0.5").times(3), usd("1.5"));
        assert_eq!(usd("80").times(0), usd("0"));
    }

    #[test]
    fn percent_adjustments() {
        let p10 = Percent::new(decimal("10")).unwrap();

        assert_eq!(usd("100").plus_percent(p10), usd("110.0"));
        assert_eq!(usd("100").minus_percent(p10), usd("90.0"));
        assert_eq!(
            usd("100").plus_percent(Percent::new(Decimal::ZERO).unwrap()),
            usd("100"),
        );
    }

    #[test]
    fn round() {
        assert_eq!(usd("1.005").round(), usd("1.01"));
        assert_eq!(usd("1.004").round(), usd("1.00"));
        assert_eq!(usd("-1.005").round(), usd("-1.01"));
    }

    #[test]
    fn is_negative() {
        assert!(usd("-0.01").is_negative());
        assert!(!usd("0").is_negative());
        assert!(!usd("0.01").is_negative());
    }
}
