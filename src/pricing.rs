//! Prices

use std::{fmt, iter::Sum, ops::Add, str::FromStr};

use rust_decimal::{Decimal, prelude::FromPrimitive};
use rusty_money::iso::{self, Currency};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Currency the catalog API quotes its prices in.
pub const DEFAULT_CURRENCY: &Currency = iso::BDT;

/// A catalog price.
///
/// The API sends bare numbers (`500`, `12.5`) or numeric strings, without a
/// currency, so the amount is kept as an exact decimal and the currency is
/// applied only when formatting.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero price.
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Create a price from a decimal amount.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The decimal amount.
    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Parse a price from a JSON number or a numeric string.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => parse_amount(&number.to_string()),
            Value::String(text) => parse_amount(text.trim()),
            _ => None,
        }
    }
}

fn parse_amount(text: &str) -> Option<Price> {
    if text.is_empty() {
        return None;
    }

    Decimal::from_str(text)
        .or_else(|_error| Decimal::from_scientific(text))
        .ok()
        .or_else(|| out_of_range(text))
        .map(Price)
}

/// Numbers too wide for `Decimal` saturate instead of reading as absent.
fn out_of_range(text: &str) -> Option<Decimal> {
    let value = text.parse::<f64>().ok().filter(|value| value.is_finite())?;
    let amount = Decimal::from_f64(value).unwrap_or(if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    });

    warn!(price = text, %amount, "price outside the decimal range");

    Some(amount)
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl Add for Price {
    type Output = Price;

    /// Saturates at the decimal bounds.
    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Format a price for display, e.g. `৳500` or `12.5 JPY`.
pub fn format_price(price: Price, currency: &Currency) -> String {
    let amount = price.amount().normalize();
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let magnitude = amount.abs();
    let symbol = match currency.iso_alpha_code {
        "BDT" => "৳",
        "GBP" => "£",
        "USD" => "$",
        "EUR" => "€",
        _ => "",
    };

    if symbol.is_empty() {
        format!("{sign}{magnitude} {}", currency.iso_alpha_code)
    } else {
        format!("{sign}{symbol}{magnitude}")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_from_json_integer() {
        assert_eq!(Price::from_json(&json!(500)), Some(Price::from(500)));
    }

    #[test]
    fn test_from_json_float() -> TestResult {
        let price = Price::from_json(&json!(12.5)).ok_or("expected a price")?;

        assert_eq!(price.amount(), Decimal::from_str("12.5")?);

        Ok(())
    }

    #[test]
    fn test_from_json_numeric_string() {
        assert_eq!(Price::from_json(&json!(" 350 ")), Some(Price::from(350)));
    }

    #[test]
    fn test_from_json_rejects_non_numeric() {
        assert_eq!(Price::from_json(&json!("cheap")), None);
        assert_eq!(Price::from_json(&json!("")), None);
        assert_eq!(Price::from_json(&json!(true)), None);
        assert_eq!(Price::from_json(&Value::Null), None);
    }

    #[test]
    fn test_sum() {
        let prices = [Price::from(100), Price::from(250), Price::from(5)];

        assert_eq!(prices.iter().sum::<Price>(), Price::from(355));
    }

    #[test]
    fn test_sum_saturates_at_max() {
        let prices = [Price::new(Decimal::MAX), Price::new(Decimal::MAX)];

        assert_eq!(prices.iter().sum::<Price>(), Price::new(Decimal::MAX));
        assert_eq!(
            Price::new(Decimal::MIN) + Price::from(-1),
            Price::new(Decimal::MIN)
        );
    }

    #[test]
    fn test_from_json_saturates_huge_numbers() {
        assert_eq!(Price::from_json(&json!(1e30)), Some(Price::new(Decimal::MAX)));
        assert_eq!(Price::from_json(&json!("-1e40")), Some(Price::new(Decimal::MIN)));
        assert_eq!(Price::from_json(&json!("NaN")), None);
    }

    #[test]
    fn test_sum_empty_is_zero() {
        let prices: [Price; 0] = [];

        assert_eq!(prices.iter().sum::<Price>(), Price::ZERO);
    }

    #[test]
    fn test_display_drops_trailing_zeros() -> TestResult {
        let price = Price::new(Decimal::from_str("12.50")?);

        assert_eq!(price.to_string(), "12.5");

        Ok(())
    }

    #[test]
    fn test_format_price_bdt() {
        assert_eq!(format_price(Price::from(500), iso::BDT), "৳500");
    }

    #[test]
    fn test_format_price_gbp_fractional() -> TestResult {
        let price = Price::new(Decimal::from_str("12.5")?);

        assert_eq!(format_price(price, iso::GBP), "£12.5");

        Ok(())
    }

    #[test]
    fn test_format_price_negative() {
        assert_eq!(format_price(Price::from(-20), iso::USD), "-$20");
    }

    #[test]
    fn test_format_price_unknown_symbol() {
        assert_eq!(format_price(Price::from(1200), iso::JPY), "1200 JPY");
    }
}
