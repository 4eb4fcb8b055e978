//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation to avoid floating-point
//! precision issues in cart arithmetic. Catalog prices arrive in the
//! source currency and are converted to the display currency exactly once,
//! when a cart line is created; after that every line in a cart shares the
//! cart's currency, so arithmetic never has to mix currencies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Catalog source currency.
    #[default]
    USD,
    /// Display currency (Indonesian rupiah).
    IDR,
}

impl Currency {
    /// Get the currency code (e.g., "IDR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::IDR => "IDR",
        }
    }

    /// Get the currency symbol (e.g., "Rp").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::IDR => "Rp",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::USD => 2,
            Currency::IDR => 0,
        }
    }

    /// Thousands separator used by the currency's locale.
    pub fn thousands_separator(&self) -> char {
        match self {
            Currency::USD => ',',
            Currency::IDR => '.',
        }
    }

    /// Decimal separator used by the currency's locale.
    pub fn decimal_separator(&self) -> char {
        match self {
            Currency::USD => '.',
            Currency::IDR => ',',
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "IDR" => Some(Currency::IDR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (cents for USD,
/// whole rupiah for IDR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use toko_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(10.99, Currency::USD);
    /// assert_eq!(price.amount, 1099);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        Self::new((amount * multiplier as f64).round() as i64, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount as f64 / divisor as f64
    }

    /// Convert to another currency at a fixed integer rate, rounding to the
    /// target's smallest unit.
    ///
    /// ```
    /// use toko_commerce::money::{Currency, Money};
    /// let usd = Money::from_decimal(10.0, Currency::USD);
    /// let idr = usd.convert(15_000, Currency::IDR);
    /// assert_eq!(idr.amount, 150_000);
    /// ```
    pub fn convert(&self, rate: i64, target: Currency) -> Money {
        let scale = 10_i64.pow(target.decimal_places()) as f64;
        Money::new((self.to_decimal() * rate as f64 * scale).round() as i64, target)
    }

    /// Add another value of the same currency, saturating at the numeric
    /// limits.
    pub fn saturating_add(&self, other: &Money) -> Money {
        debug_assert_eq!(self.currency, other.currency);
        Money::new(self.amount.saturating_add(other.amount), self.currency)
    }

    /// Multiply by a scalar, saturating at the numeric limits.
    pub fn saturating_mul(&self, factor: i64) -> Money {
        Money::new(self.amount.saturating_mul(factor), self.currency)
    }

    /// Format as a display string (e.g., "Rp 150.000", "$1,099.99").
    pub fn display(&self) -> String {
        let symbol = self.currency.symbol();
        // Alphabetic symbols read as a word and take a separating space.
        if symbol.ends_with(|c: char| c.is_ascii_alphabetic()) {
            format!("{} {}", symbol, self.display_amount())
        } else {
            format!("{}{}", symbol, self.display_amount())
        }
    }

    /// Format the amount without symbol, thousands-grouped per the
    /// currency's locale.
    pub fn display_amount(&self) -> String {
        let divisor = 10_u64.pow(self.currency.decimal_places());
        let abs = self.amount.unsigned_abs();
        let mut out = String::new();
        if self.amount < 0 {
            out.push('-');
        }
        out.push_str(&group_thousands(
            abs / divisor,
            self.currency.thousands_separator(),
        ));
        if divisor > 1 {
            out.push(self.currency.decimal_separator());
            out.push_str(&format!(
                "{:0width$}",
                abs % divisor,
                width = self.currency.decimal_places() as usize
            ));
        }
        out
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Insert a separator every three digits, right to left.
fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(10.99, Currency::USD);
        assert_eq!(m.amount, 1099);

        let m = Money::from_decimal(150_000.0, Currency::IDR);
        assert_eq!(m.amount, 150_000); // IDR has no decimals
    }

    #[test]
    fn test_convert_rounds_to_whole_rupiah() {
        let usd = Money::from_decimal(10.0, Currency::USD);
        assert_eq!(usd.convert(15_000, Currency::IDR).amount, 150_000);

        let usd = Money::from_decimal(10.99, Currency::USD);
        assert_eq!(usd.convert(15_000, Currency::IDR).amount, 164_850);

        // Fractional results round to the nearest unit.
        let usd = Money::new(1, Currency::USD); // $0.01
        assert_eq!(usd.convert(155, Currency::IDR).amount, 2);
    }

    #[test]
    fn test_display_idr_grouping() {
        assert_eq!(Money::new(300_000, Currency::IDR).display(), "Rp 300.000");
        assert_eq!(
            Money::new(1_000_000, Currency::IDR).display(),
            "Rp 1.000.000"
        );
        assert_eq!(Money::new(999, Currency::IDR).display(), "Rp 999");
        assert_eq!(Money::zero(Currency::IDR).display(), "Rp 0");
    }

    #[test]
    fn test_display_usd() {
        assert_eq!(Money::new(109_999, Currency::USD).display(), "$1,099.99");
        assert_eq!(Money::new(5, Currency::USD).display(), "$0.05");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Money::new(-5_000, Currency::IDR).display(), "Rp -5.000");
    }

    #[test]
    fn test_saturating_arithmetic() {
        let a = Money::new(1_000, Currency::IDR);
        let b = Money::new(500, Currency::IDR);
        assert_eq!(a.saturating_add(&b).amount, 1_500);
        assert_eq!(a.saturating_mul(3).amount, 3_000);
        assert_eq!(
            Money::new(i64::MAX, Currency::IDR).saturating_mul(2).amount,
            i64::MAX
        );
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("IDR"), Some(Currency::IDR));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("EUR"), None);
    }
}
