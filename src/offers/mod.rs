//! Special Offers

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::{discounts::Discount, products::Product};

pub mod n_for_amount;
pub mod percent_discount;
pub mod three_for_two;

use n_for_amount::NForAmount;
use percent_discount::PercentDiscount;
use three_for_two::ThreeForTwo;

/// The kinds of special offer a product can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialOfferType {
    /// Three items for the price of two.
    ThreeForTwo,

    /// A percentage off the product's total price.
    TenPercentDiscount,

    /// Two items for a fixed bundle price.
    TwoForAmount,

    /// Five items for a fixed bundle price.
    FiveForAmount,

    /// Reserved for multi-product bundles; has no strategy and yields no
    /// discount.
    Bundle,
}

/// A special offer bound to a single product.
///
/// The meaning of `argument` depends on the offer type: percent points for
/// percentage offers, the bundle price for N-for-amount offers, unused for
/// three-for-two.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    offer_type: SpecialOfferType,
    product: Product,
    argument: Decimal,
}

impl Offer {
    /// Create a new offer.
    #[must_use]
    pub fn new(offer_type: SpecialOfferType, product: Product, argument: Decimal) -> Self {
        Offer {
            offer_type,
            product,
            argument,
        }
    }

    /// The kind of offer.
    #[must_use]
    pub fn offer_type(&self) -> SpecialOfferType {
        self.offer_type
    }

    /// The product the offer is bound to.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The offer's numeric argument.
    #[must_use]
    pub fn argument(&self) -> Decimal {
        self.argument
    }
}

/// The discount computation for one offer type.
///
/// Strategies are pure: they see the offer, the product, the product's
/// aggregate quantity across the whole basket and its unit price, and decide
/// whether a discount applies. They never see the rest of the basket or the
/// receipt.
pub trait OfferStrategy {
    /// Compute the discount for this offer, if the quantity qualifies.
    fn apply<'a>(
        &self,
        offer: &Offer,
        product: &Product,
        quantity: Decimal,
        unit_price: Money<'a, Currency>,
    ) -> Option<Discount<'a>>;
}

/// The strategy for each offer type.
///
/// New offer kinds slot in here without touching the existing strategies;
/// types without a strategy produce nothing at checkout.
#[derive(Debug)]
pub struct StrategySet {
    three_for_two: ThreeForTwo,
    percent_discount: PercentDiscount,
    two_for_amount: NForAmount,
    five_for_amount: NForAmount,
}

impl StrategySet {
    /// The standard strategies for the built-in offer types.
    #[must_use]
    pub fn standard() -> Self {
        StrategySet {
            three_for_two: ThreeForTwo,
            percent_discount: PercentDiscount,
            two_for_amount: NForAmount::new(2),
            five_for_amount: NForAmount::new(5),
        }
    }

    /// Look up the strategy for an offer type.
    #[must_use]
    pub fn for_type(&self, offer_type: SpecialOfferType) -> Option<&dyn OfferStrategy> {
        match offer_type {
            SpecialOfferType::ThreeForTwo => Some(&self.three_for_two),
            SpecialOfferType::TenPercentDiscount => Some(&self.percent_discount),
            SpecialOfferType::TwoForAmount => Some(&self.two_for_amount),
            SpecialOfferType::FiveForAmount => Some(&self.five_for_amount),
            SpecialOfferType::Bundle => None,
        }
    }
}

impl Default for StrategySet {
    fn default() -> Self {
        Self::standard()
    }
}
