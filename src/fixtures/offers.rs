//! Offer Fixtures

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{fixtures::FixtureError, offers::SpecialOfferType};

/// Wrapper for offers in YAML
#[derive(Debug, Deserialize)]
pub struct OffersFixture {
    /// Map of offer key -> offer fixture
    pub offers: FxHashMap<String, OfferFixture>,
}

/// Offer Fixture
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OfferFixture {
    /// Three for the price of two
    ThreeForTwo {
        /// Product key
        product: String,
    },

    /// Percentage off the product's total price
    TenPercentDiscount {
        /// Product key
        product: String,

        /// Percent points (e.g., "10")
        argument: String,
    },

    /// Two for a fixed bundle price
    TwoForAmount {
        /// Product key
        product: String,

        /// Bundle price (e.g., "1.50")
        argument: String,
    },

    /// Five for a fixed bundle price
    FiveForAmount {
        /// Product key
        product: String,

        /// Bundle price (e.g., "4.50")
        argument: String,
    },
}

impl OfferFixture {
    /// The product key the offer targets.
    #[must_use]
    pub fn product_key(&self) -> &str {
        match self {
            OfferFixture::ThreeForTwo { product }
            | OfferFixture::TenPercentDiscount { product, .. }
            | OfferFixture::TwoForAmount { product, .. }
            | OfferFixture::FiveForAmount { product, .. } => product,
        }
    }

    /// The offer type this fixture stands for.
    #[must_use]
    pub fn offer_type(&self) -> SpecialOfferType {
        match self {
            OfferFixture::ThreeForTwo { .. } => SpecialOfferType::ThreeForTwo,
            OfferFixture::TenPercentDiscount { .. } => SpecialOfferType::TenPercentDiscount,
            OfferFixture::TwoForAmount { .. } => SpecialOfferType::TwoForAmount,
            OfferFixture::FiveForAmount { .. } => SpecialOfferType::FiveForAmount,
        }
    }

    /// The offer argument; zero where the type takes none.
    ///
    /// # Errors
    ///
    /// Returns an error if the argument cannot be parsed as a decimal.
    pub fn argument(&self) -> Result<Decimal, FixtureError> {
        match self {
            OfferFixture::ThreeForTwo { .. } => Ok(Decimal::ZERO),
            OfferFixture::TenPercentDiscount { argument, .. }
            | OfferFixture::TwoForAmount { argument, .. }
            | OfferFixture::FiveForAmount { argument, .. } => argument
                .trim()
                .parse::<Decimal>()
                .map_err(|_err| FixtureError::InvalidArgument(argument.clone())),
        }
    }
}
