use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies the ledger can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Usd,
    Rub,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Rub => "RUB",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary volume tagged with its currency.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific rules
/// and provide type safety for financial calculations. Arithmetic is only defined
/// between amounts of the same currency; mixed-currency operations yield `None`
/// rather than a value, so callers can tell a currency mismatch apart from an
/// insufficient balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub volume: Decimal,
    pub currency: Currency,
}

impl Amount {
    pub fn new(volume: Decimal, currency: Currency) -> Self {
        Self { volume, currency }
    }

    pub fn eur(volume: Decimal) -> Self {
        Self::new(volume, Currency::Eur)
    }

    /// Adds two amounts. `None` when the currencies differ.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        (self.currency == rhs.currency).then(|| Amount {
            volume: self.volume + rhs.volume,
            currency: self.currency,
        })
    }

    /// Subtracts `rhs` from `self`. `None` when the currencies differ.
    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        (self.currency == rhs.currency).then(|| Amount {
            volume: self.volume - rhs.volume,
            currency: self.currency,
        })
    }

    pub fn is_negative(&self) -> bool {
        self.volume < Decimal::ZERO
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.volume, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Amount::eur(dec!(10.0));
        let b = Amount::eur(dec!(5.5));
        assert_eq!(a.checked_add(b), Some(Amount::eur(dec!(15.5))));
    }

    #[test]
    fn test_checked_sub_same_currency() {
        let a = Amount::eur(dec!(10.0));
        let b = Amount::eur(dec!(5.5));
        assert_eq!(a.checked_sub(b), Some(Amount::eur(dec!(4.5))));
    }

    #[test]
    fn test_mixed_currency_has_no_result() {
        let eur = Amount::eur(dec!(10.0));
        let usd = Amount::new(dec!(10.0), Currency::Usd);
        assert_eq!(eur.checked_add(usd), None);
        assert_eq!(eur.checked_sub(usd), None);
    }

    #[test]
    fn test_subtraction_below_zero_is_a_value_not_a_mismatch() {
        let a = Amount::eur(dec!(1.0));
        let b = Amount::eur(dec!(2.0));
        let result = a.checked_sub(b).unwrap();
        assert!(result.is_negative());
        assert_eq!(result.volume, dec!(-1.0));
    }

    #[test]
    fn test_zero_is_not_negative() {
        let a = Amount::eur(dec!(5.0));
        let result = a.checked_sub(Amount::eur(dec!(5.0))).unwrap();
        assert!(!result.is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::eur(dec!(9990.00)).to_string(), "9990.00 EUR");
        assert_eq!(
            Amount::new(dec!(1), Currency::Usd).to_string(),
            "1 USD"
        );
    }
}
