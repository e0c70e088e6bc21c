//! Checkout

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{
    basket::Basket,
    catalog::Catalog,
    offers::{Offer, SpecialOfferType, StrategySet},
    products::Product,
    receipt::{Receipt, ReceiptItem},
};

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A basket product has no price in the catalog. This is a setup error;
    /// no partial receipt is produced.
    #[error("no price listed for {0}")]
    MissingPrice(Product),

    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Checks baskets out against a catalog and a set of registered offers.
///
/// Holds at most one offer per product; registering another replaces it.
#[derive(Debug)]
pub struct Teller<'a, C> {
    catalog: &'a C,
    offers: FxHashMap<Product, Offer>,
    strategies: StrategySet,
}

impl<'a, C: Catalog> Teller<'a, C> {
    /// Create a teller with no registered offers.
    #[must_use]
    pub fn new(catalog: &'a C) -> Self {
        Teller {
            catalog,
            offers: FxHashMap::default(),
            strategies: StrategySet::standard(),
        }
    }

    /// Register an offer for a product, replacing any existing one.
    ///
    /// The argument is not range-checked; its meaning depends on the offer
    /// type.
    pub fn add_special_offer(
        &mut self,
        offer_type: SpecialOfferType,
        product: Product,
        argument: Decimal,
    ) {
        let offer = Offer::new(offer_type, product.clone(), argument);

        self.offers.insert(product, offer);
    }

    /// The offer currently registered for a product, if any.
    #[must_use]
    pub fn offer_for(&self, product: &Product) -> Option<&Offer> {
        self.offers.get(product)
    }

    /// Price a basket: one receipt line per raw addition, then at most one
    /// discount per product with a registered offer, computed from the
    /// product's aggregate quantity.
    ///
    /// Reads the basket and catalog only; the sole effect is the returned
    /// receipt.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] if a basket product is missing from the
    /// catalog, or if monetary amounts cannot be combined.
    pub fn checkout(&self, basket: &Basket) -> Result<Receipt<'static>, CheckoutError> {
        let mut receipt = Receipt::new(self.catalog.currency());

        for line in basket.items() {
            let unit_price = self.unit_price(line.product())?;

            receipt.add_item(ReceiptItem::new(
                line.product().clone(),
                line.quantity(),
                unit_price,
            ));
        }

        for (product, quantity) in basket.quantities() {
            let Some(offer) = self.offers.get(product) else {
                continue;
            };

            let Some(strategy) = self.strategies.for_type(offer.offer_type()) else {
                continue;
            };

            let unit_price = self.unit_price(product)?;

            if let Some(discount) = strategy.apply(offer, product, quantity, unit_price) {
                receipt.add_discount(discount);
            }
        }

        Ok(receipt)
    }

    fn unit_price(&self, product: &Product) -> Result<Money<'static, Currency>, CheckoutError> {
        self.catalog
            .unit_price(product)
            .ok_or_else(|| CheckoutError::MissingPrice(product.clone()))
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use crate::{catalog::MemoryCatalog, discounts::Discount, products::ProductUnit};

    use super::*;

    fn toothbrush() -> Product {
        Product::new("toothbrush", ProductUnit::Each)
    }

    fn apples() -> Product {
        Product::new("apples", ProductUnit::Kilo)
    }

    fn catalog() -> Result<MemoryCatalog, crate::catalog::CatalogError> {
        let mut catalog = MemoryCatalog::new(GBP);

        catalog.add_product(toothbrush(), Money::from_minor(99, GBP))?;
        catalog.add_product(apples(), Money::from_minor(199, GBP))?;

        Ok(catalog)
    }

    #[test]
    fn product_without_offer_gets_no_discount() -> TestResult {
        let catalog = catalog()?;
        let teller = Teller::new(&catalog);

        let mut basket = Basket::new();
        basket.add_item_quantity(toothbrush(), Decimal::from(3));

        let receipt = teller.checkout(&basket)?;

        assert!(receipt.discounts().is_empty());

        Ok(())
    }

    #[test]
    fn offer_for_absent_product_is_inert() -> TestResult {
        let catalog = catalog()?;
        let mut teller = Teller::new(&catalog);

        teller.add_special_offer(SpecialOfferType::ThreeForTwo, apples(), Decimal::ZERO);

        let mut basket = Basket::new();
        basket.add_item_quantity(toothbrush(), Decimal::from(3));

        let receipt = teller.checkout(&basket)?;

        assert!(receipt.discounts().is_empty());

        Ok(())
    }

    #[test]
    fn bundle_offers_produce_no_discount() -> TestResult {
        let catalog = catalog()?;
        let mut teller = Teller::new(&catalog);

        teller.add_special_offer(SpecialOfferType::Bundle, toothbrush(), Decimal::ZERO);

        let mut basket = Basket::new();
        basket.add_item_quantity(toothbrush(), Decimal::from(3));

        let receipt = teller.checkout(&basket)?;

        assert!(receipt.discounts().is_empty());

        Ok(())
    }

    #[test]
    fn reregistering_an_offer_replaces_it() -> TestResult {
        let catalog = catalog()?;
        let mut teller = Teller::new(&catalog);

        teller.add_special_offer(SpecialOfferType::ThreeForTwo, toothbrush(), Decimal::ZERO);
        teller.add_special_offer(
            SpecialOfferType::TenPercentDiscount,
            toothbrush(),
            Decimal::from(10),
        );

        let registered = teller
            .offer_for(&toothbrush())
            .unwrap_or_else(|| panic!("expected a registered offer"));

        assert_eq!(
            registered.offer_type(),
            SpecialOfferType::TenPercentDiscount
        );

        let mut basket = Basket::new();
        basket.add_item_quantity(toothbrush(), Decimal::from(3));

        let receipt = teller.checkout(&basket)?;
        let descriptions: Vec<&str> = receipt
            .discounts()
            .iter()
            .map(Discount::description)
            .collect();

        assert_eq!(descriptions, vec!["10% off"]);

        Ok(())
    }

    #[test]
    fn discount_uses_the_aggregate_across_separate_lines() -> TestResult {
        let catalog = catalog()?;
        let mut teller = Teller::new(&catalog);

        teller.add_special_offer(SpecialOfferType::ThreeForTwo, toothbrush(), Decimal::ZERO);

        let mut basket = Basket::new();
        basket.add_item(toothbrush());
        basket.add_item_quantity(toothbrush(), Decimal::TWO);

        let receipt = teller.checkout(&basket)?;

        // Two display lines, one discount computed from the combined
        // quantity of three.
        assert_eq!(receipt.items().len(), 2);

        let [discount] = receipt.discounts() else {
            panic!("expected exactly one discount");
        };

        assert_eq!(discount.amount(), Money::from_minor(-99, GBP));

        Ok(())
    }

    #[test]
    fn missing_catalog_price_fails_checkout() {
        let catalog = MemoryCatalog::new(GBP);
        let teller = Teller::new(&catalog);

        let mut basket = Basket::new();
        basket.add_item(toothbrush());

        let result = teller.checkout(&basket);

        match result {
            Err(CheckoutError::MissingPrice(product)) => assert_eq!(product, toothbrush()),
            other => panic!("expected MissingPrice error, got {other:?}"),
        }
    }
}
