//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::products::Product;

/// Errors related to catalog construction.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A price's currency differs from the catalog currency (product name, price currency, catalog currency).
    #[error("Price for {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),
}

/// Unit-price lookup used at checkout.
///
/// Implementations answer `None` for unlisted products; checkout treats that
/// as a fatal setup error, not a recoverable condition.
pub trait Catalog {
    /// Unit price for a product, if it is listed.
    fn unit_price(&self, product: &Product) -> Option<Money<'static, Currency>>;

    /// Currency shared by all listed prices.
    fn currency(&self) -> &'static Currency;
}

/// In-memory catalog keyed by product.
#[derive(Debug)]
pub struct MemoryCatalog {
    prices: FxHashMap<Product, Money<'static, Currency>>,
    currency: &'static Currency,
}

impl MemoryCatalog {
    /// Create an empty catalog for the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        MemoryCatalog {
            prices: FxHashMap::default(),
            currency,
        }
    }

    /// List a product at the given unit price, replacing any previous price.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the price currency differs from the
    /// catalog currency.
    pub fn add_product(
        &mut self,
        product: Product,
        unit_price: Money<'static, Currency>,
    ) -> Result<(), CatalogError> {
        let price_currency = unit_price.currency();

        if price_currency != self.currency {
            return Err(CatalogError::CurrencyMismatch(
                product.name().to_string(),
                price_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        self.prices.insert(product, unit_price);

        Ok(())
    }

    /// Number of listed products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Check if the catalog has no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl Catalog for MemoryCatalog {
    fn unit_price(&self, product: &Product) -> Option<Money<'static, Currency>> {
        self.prices.get(product).copied()
    }

    fn currency(&self) -> &'static Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use crate::products::ProductUnit;

    use super::*;

    fn toothbrush() -> Product {
        Product::new("toothbrush", ProductUnit::Each)
    }

    #[test]
    fn lookup_matches_separately_constructed_product() -> TestResult {
        let mut catalog = MemoryCatalog::new(GBP);

        catalog.add_product(toothbrush(), Money::from_minor(99, GBP))?;

        assert_eq!(
            catalog.unit_price(&Product::new("toothbrush", ProductUnit::Each)),
            Some(Money::from_minor(99, GBP))
        );

        Ok(())
    }

    #[test]
    fn unlisted_product_has_no_price() {
        let catalog = MemoryCatalog::new(GBP);

        assert_eq!(catalog.unit_price(&toothbrush()), None);
    }

    #[test]
    fn add_product_rejects_currency_mismatch() {
        let mut catalog = MemoryCatalog::new(GBP);

        let result = catalog.add_product(toothbrush(), Money::from_minor(99, USD));

        match result {
            Err(CatalogError::CurrencyMismatch(name, price_currency, catalog_currency)) => {
                assert_eq!(name, "toothbrush");
                assert_eq!(price_currency, USD.iso_alpha_code);
                assert_eq!(catalog_currency, GBP.iso_alpha_code);
            }
            other => panic!("expected CurrencyMismatch error, got {other:?}"),
        }
    }

    #[test]
    fn relisting_replaces_the_price() -> TestResult {
        let mut catalog = MemoryCatalog::new(GBP);

        catalog.add_product(toothbrush(), Money::from_minor(99, GBP))?;
        catalog.add_product(toothbrush(), Money::from_minor(89, GBP))?;

        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.unit_price(&toothbrush()),
            Some(Money::from_minor(89, GBP))
        );

        Ok(())
    }
}
