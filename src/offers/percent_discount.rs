//! Percentage Offers
//!
//! A percentage off a product's total price. Unlike the bundle offers this
//! applies to the exact (possibly fractional) quantity, with no minimum.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::{
    discounts::Discount,
    offers::{Offer, OfferStrategy},
    products::Product,
};

/// Strategy for percent-off offers.
///
/// The rate in percent points is the offer argument, so the one strategy
/// covers the whole "K% off" family.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentDiscount;

impl OfferStrategy for PercentDiscount {
    fn apply<'a>(
        &self,
        offer: &Offer,
        product: &Product,
        quantity: Decimal,
        unit_price: Money<'a, Currency>,
    ) -> Option<Discount<'a>> {
        let rate = Percentage::from(offer.argument() / Decimal::ONE_HUNDRED);
        let gross = *unit_price.amount() * quantity;

        let amount = Money::from_decimal(-(rate * gross), unit_price.currency());
        let description = format!("{}% off", offer.argument());

        Some(Discount::new(product.clone(), description, amount))
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;

    use crate::{offers::SpecialOfferType, products::ProductUnit};

    use super::*;

    fn apples() -> Product {
        Product::new("apples", ProductUnit::Kilo)
    }

    fn percent_off(points: Decimal) -> Offer {
        Offer::new(SpecialOfferType::TenPercentDiscount, apples(), points)
    }

    #[test]
    fn fractional_quantities_are_not_truncated() {
        // 2.5 kg at 1.99 with 10% off: the half-penny discount is kept
        // exactly.
        let discount = PercentDiscount
            .apply(
                &percent_off(Decimal::from(10)),
                &apples(),
                Decimal::new(25, 1),
                Money::from_minor(199, GBP),
            )
            .unwrap_or_else(|| panic!("expected a discount"));

        assert_eq!(discount.description(), "10% off");
        assert_eq!(
            discount.amount(),
            Money::from_decimal(Decimal::new(-4975, 4), GBP)
        );
    }

    #[test]
    fn applies_with_no_minimum_quantity() {
        let discount = PercentDiscount
            .apply(
                &percent_off(Decimal::from(10)),
                &apples(),
                Decimal::ONE,
                Money::from_minor(199, GBP),
            )
            .unwrap_or_else(|| panic!("expected a discount"));

        assert_eq!(
            discount.amount(),
            Money::from_decimal(Decimal::new(-199, 3), GBP)
        );
    }

    #[test]
    fn rate_comes_from_the_offer_argument() {
        let discount = PercentDiscount
            .apply(
                &percent_off(Decimal::from(20)),
                &apples(),
                Decimal::from(2),
                Money::from_minor(100, GBP),
            )
            .unwrap_or_else(|| panic!("expected a discount"));

        assert_eq!(discount.description(), "20% off");
        assert_eq!(discount.amount(), Money::from_minor(-40, GBP));
    }
}
