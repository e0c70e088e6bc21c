//! Product Fixtures

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{fixtures::FixtureError, products::ProductUnit};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product key -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Unit the product is sold in
    pub unit: ProductUnit,

    /// Product unit price (e.g., "0.99 GBP")
    pub price: String,
}

/// Parse a price string (e.g., "2.99 GBP") into a monetary amount
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(Money<'static, Currency>, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((Money::from_decimal(amount, currency), currency))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_reads_amount_and_currency() {
        let Ok((price, currency)) = parse_price("2.99 GBP") else {
            panic!("expected a parsed price");
        };

        assert_eq!(price, Money::from_minor(299, GBP));
        assert_eq!(currency, GBP);
    }

    #[test]
    fn parse_price_rejects_missing_currency() {
        let result = parse_price("2.99");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_bad_amount() {
        let result = parse_price("cheap GBP");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 XYZ");

        assert!(matches!(
            result,
            Err(FixtureError::UnknownCurrency(code)) if code == "XYZ"
        ));
    }
}
