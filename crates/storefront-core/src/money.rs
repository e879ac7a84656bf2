//! Money and the static currency table.
//!
//! Catalog prices are held in the reference currency (USD) as integer cents.
//! Conversion to the shopper's display currency happens only when a price is
//! rendered; converted amounts are never stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Supported display currencies.
///
/// Rates are static multipliers from the reference currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EGP,
    EUR,
    GBP,
    SAR,
    AED,
}

impl Currency {
    /// Every currency in the rate table, in menu order.
    pub const ALL: [Currency; 6] = [
        Currency::USD,
        Currency::EGP,
        Currency::EUR,
        Currency::GBP,
        Currency::SAR,
        Currency::AED,
    ];

    /// The currency catalog prices are stored in.
    pub const REFERENCE: Currency = Currency::USD;

    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EGP => "EGP",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::SAR => "SAR",
            Currency::AED => "AED",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EGP => "E\u{00a3}",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::SAR => "\u{0631}.\u{0633}",
            Currency::AED => "\u{062f}.\u{0625}",
        }
    }

    /// Multiplier from the reference currency.
    pub fn rate(&self) -> f64 {
        match self {
            Currency::USD => 1.0,
            Currency::EGP => 30.9,
            Currency::EUR => 0.92,
            Currency::GBP => 0.79,
            Currency::SAR => 3.75,
            Currency::AED => 3.67,
        }
    }

    /// Human-readable currency name.
    pub fn name(&self) -> &'static str {
        match self {
            Currency::USD => "US Dollar",
            Currency::EGP => "Egyptian Pound",
            Currency::EUR => "Euro",
            Currency::GBP => "British Pound",
            Currency::SAR => "Saudi Riyal",
            Currency::AED => "UAE Dirham",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EGP" => Some(Currency::EGP),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "SAR" => Some(Currency::SAR),
            "AED" => Some(Currency::AED),
            _ => None,
        }
    }

    /// Parse a currency code, falling back to the reference currency.
    pub fn from_code_or_reference(code: &str) -> Self {
        Self::from_code(code).unwrap_or(Self::REFERENCE)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in cents to keep cart totals exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use storefront_core::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Convert into another currency through the static rate table.
    pub fn convert(&self, to: Currency) -> Money {
        if self.currency == to {
            return *self;
        }
        let reference = self.amount_cents as f64 / self.currency.rate();
        Money::new((reference * to.rate()).round() as i64, to)
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Convert into `currency` and format it for display.
    pub fn display_in(&self, currency: Currency) -> String {
        self.convert(currency).display()
    }

    /// Multiply by a scalar.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents * factor, self.currency)
    }

    /// Sum an iterator of Money values in one currency.
    ///
    /// Values in other currencies are converted first.
    pub fn sum(iter: impl IntoIterator<Item = Money>, currency: Currency) -> Money {
        iter.into_iter()
            .fold(Money::zero(currency), |acc, m| acc + m.convert(currency))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        let other = other.convert(self.currency);
        Money::new(self.amount_cents + other.amount_cents, self.currency)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Format a reference-currency amount in the currency named by `code`.
///
/// Unknown codes fall back to the reference currency.
pub fn format_price(amount: f64, code: &str) -> String {
    Money::from_decimal(amount, Currency::REFERENCE).display_in(Currency::from_code_or_reference(code))
}
