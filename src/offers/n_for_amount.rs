//! N-for-amount Offers
//!
//! A fixed price for a bundle of N units, regardless of the per-unit price;
//! leftover units are charged at the unit price.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::{
    discounts::Discount,
    offers::{Offer, OfferStrategy},
    products::Product,
};

/// Strategy for fixed-price bundles of `bundle_size` units.
///
/// Instantiated at 2 and 5 for the built-in `TwoForAmount` and
/// `FiveForAmount` offer types; the bundle price is the offer argument.
#[derive(Debug, Clone, Copy)]
pub struct NForAmount {
    bundle_size: i64,
}

impl NForAmount {
    /// Create a strategy for bundles of the given size.
    #[must_use]
    pub fn new(bundle_size: i64) -> Self {
        NForAmount { bundle_size }
    }

    /// Number of units a bundle holds.
    #[must_use]
    pub fn bundle_size(&self) -> i64 {
        self.bundle_size
    }
}

impl OfferStrategy for NForAmount {
    fn apply<'a>(
        &self,
        offer: &Offer,
        product: &Product,
        quantity: Decimal,
        unit_price: Money<'a, Currency>,
    ) -> Option<Discount<'a>> {
        // Bundle sizing works on whole units; fractional quantities are
        // truncated toward zero first.
        let whole_units = quantity.trunc().to_i64()?;

        if whole_units < self.bundle_size {
            return None;
        }

        let bundles = whole_units / self.bundle_size;
        let leftover = whole_units % self.bundle_size;

        let price = *unit_price.amount();
        let total_without_offer = price * Decimal::from(whole_units);
        let total_with_offer =
            offer.argument() * Decimal::from(bundles) + price * Decimal::from(leftover);

        let amount = Money::from_decimal(
            -(total_without_offer - total_with_offer),
            unit_price.currency(),
        );

        // The bundle price is always rendered with two decimals, e.g.
        // "2 for 1.50".
        let description = format!("{} for {:.2}", self.bundle_size, offer.argument());

        Some(Discount::new(product.clone(), description, amount))
    }
}
