//! Discounts

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::products::Product;

/// A single applied offer: the product it targets, display text describing
/// the offer, and a non-positive amount.
///
/// The description is a compatibility surface for downstream display and
/// tests: `"3 for 2"`, `"{n} for {price}"` with the price fixed to two
/// decimals, `"{percent}% off"` with the percent rendered naturally.
#[derive(Debug, Clone, PartialEq)]
pub struct Discount<'a> {
    product: Product,
    description: String,
    amount: Money<'a, Currency>,
}

impl<'a> Discount<'a> {
    /// Create a new discount.
    ///
    /// `amount` is a reduction and must not be positive.
    #[must_use]
    pub fn new(
        product: Product,
        description: impl Into<String>,
        amount: Money<'a, Currency>,
    ) -> Self {
        debug_assert!(
            *amount.amount() <= Decimal::ZERO,
            "discount amounts are reductions"
        );

        Discount {
            product,
            description: description.into(),
            amount,
        }
    }

    /// The product the discount applies to.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Display text for the offer, e.g. `"3 for 2"` or `"10% off"`.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The (non-positive) amount taken off the receipt total.
    #[must_use]
    pub fn amount(&self) -> Money<'a, Currency> {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;

    use crate::products::ProductUnit;

    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let product = Product::new("toothbrush", ProductUnit::Each);
        let discount = Discount::new(product.clone(), "3 for 2", Money::from_minor(-99, GBP));

        assert_eq!(discount.product(), &product);
        assert_eq!(discount.description(), "3 for 2");
        assert_eq!(discount.amount(), Money::from_minor(-99, GBP));
    }

    #[test]
    fn discounts_compare_by_value() {
        let product = Product::new("toothbrush", ProductUnit::Each);

        let a = Discount::new(product.clone(), "3 for 2", Money::from_minor(-99, GBP));
        let b = Discount::new(product, "3 for 2", Money::from_minor(-99, GBP));

        assert_eq!(a, b);
    }
}
