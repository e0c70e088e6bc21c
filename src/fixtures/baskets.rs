//! Basket Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::fixtures::FixtureError;

/// Wrapper for basket lines in YAML
#[derive(Debug, Deserialize)]
pub struct BasketFixture {
    /// Ordered basket lines
    pub lines: Vec<BasketLineFixture>,
}

/// Basket Line Fixture
#[derive(Debug, Deserialize)]
pub struct BasketLineFixture {
    /// Product key (as defined in the products fixture)
    pub product: String,

    /// Quantity added (e.g., "3" or "2.5")
    pub quantity: String,
}

/// Parse a quantity string (e.g., "2.5") into a `Decimal`
///
/// Quantities are kept as strings in the fixture files so that fractional
/// weights parse exactly.
///
/// # Errors
///
/// Returns an error if the string cannot be parsed as a decimal.
pub fn parse_quantity(s: &str) -> Result<Decimal, FixtureError> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidQuantity(s.to_string()))
}
