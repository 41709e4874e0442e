//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Amounts are kept as [`Decimal`] so cart totals never pick up binary
/// floating point drift (`0.1 + 0.2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from an amount in the smallest currency unit.
    ///
    /// ```
    /// use xyra_core::{CurrencyCode, Price};
    ///
    /// let price = Price::from_cents(10999, CurrencyCode::USD);
    /// assert_eq!(price.to_string(), "$109.99");
    /// ```
    #[must_use]
    pub fn from_cents(cents: i64, currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::new(cents, 2), currency_code)
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// This price multiplied by a quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    JPY,
    CNY,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::EUR => "€",
            Self::JPY | Self::CNY => "¥",
        }
    }

    /// Three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::JPY => "JPY",
            Self::CNY => "CNY",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(1699, CurrencyCode::USD);
        assert_eq!(price.amount, Decimal::new(1699, 2));
    }

    #[test]
    fn test_display_pads_to_two_places() {
        let price = Price::new(Decimal::new(35, 0), CurrencyCode::USD);
        assert_eq!(price.to_string(), "$35.00");
    }

    #[test]
    fn test_times_is_exact() {
        let price = Price::from_cents(1299, CurrencyCode::USD);
        assert_eq!(price.times(3).amount, Decimal::new(3897, 2));
        assert_eq!(price.times(0).amount, Decimal::ZERO);
    }

    #[test]
    fn test_zero_is_not_negative() {
        assert!(!Price::zero(CurrencyCode::USD).is_negative());
        assert!(Price::from_cents(-1, CurrencyCode::USD).is_negative());
    }

    #[test]
    fn test_amount_serializes_as_string() {
        let price = Price::from_cents(10999, CurrencyCode::USD);
        let json = serde_json::to_value(price).unwrap();
        assert_eq!(json["amount"], "109.99");
        assert_eq!(json["currency_code"], "USD");
    }
}
