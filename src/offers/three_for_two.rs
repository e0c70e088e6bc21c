//! Three-for-two Offers
//!
//! Buy three, pay for two. Units beyond a full group of three are charged at
//! the unit price.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};

use crate::{
    discounts::Discount,
    offers::{Offer, OfferStrategy},
    products::Product,
};

/// Strategy for [`SpecialOfferType::ThreeForTwo`](crate::offers::SpecialOfferType::ThreeForTwo).
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreeForTwo;

impl OfferStrategy for ThreeForTwo {
    fn apply<'a>(
        &self,
        _offer: &Offer,
        product: &Product,
        quantity: Decimal,
        unit_price: Money<'a, Currency>,
    ) -> Option<Discount<'a>> {
        // Group sizing works on whole units; fractional quantities are
        // truncated toward zero first.
        let whole_units = quantity.trunc().to_i64()?;

        if whole_units <= 2 {
            return None;
        }

        let groups_of_three = whole_units / 3;
        let remainder = whole_units % 3;

        let price = *unit_price.amount();
        let full_price = Decimal::from(whole_units) * price;
        let offer_price =
            Decimal::from(groups_of_three * 2) * price + Decimal::from(remainder) * price;

        let amount = Money::from_decimal(-(full_price - offer_price), unit_price.currency());

        Some(Discount::new(product.clone(), "3 for 2", amount))
    }
}
