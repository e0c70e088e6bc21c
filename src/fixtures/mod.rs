//! Fixtures

use std::{fs, path::PathBuf};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    basket::Basket,
    catalog::{Catalog, CatalogError, MemoryCatalog},
    checkout::Teller,
    fixtures::{baskets::BasketFixture, offers::OffersFixture, products::ProductsFixture},
    offers::SpecialOfferType,
    products::Product,
};

pub mod baskets;
pub mod offers;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid quantity format
    #[error("Invalid quantity format: {0}")]
    InvalidQuantity(String),

    /// Invalid offer argument format
    #[error("Invalid offer argument: {0}")]
    InvalidArgument(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products loaded yet; currency unknown")]
    NoCurrency,

    /// Not enough basket lines in fixture
    #[error("Not enough basket lines in fixture, available: {available}, requested: {requested}")]
    NotEnoughLines {
        /// Number of lines defined in the fixture
        available: usize,
        /// Number of lines requested
        requested: usize,
    },

    /// Catalog construction error
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// A named set of catalog products, basket lines and offers loaded from YAML.
///
/// A set `name` spans three files under the base path:
/// `products/<name>.yml`, `baskets/<name>.yml` and `offers/<name>.yml`.
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// String key -> (product, unit price) mappings for lookups
    products: FxHashMap<String, (Product, Money<'static, Currency>)>,

    /// Basket lines, in fixture order
    lines: Vec<(Product, Decimal)>,

    /// Offers to register at checkout
    offers: Vec<(SpecialOfferType, Product, Decimal)>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl Fixture {
    /// Create a new empty fixture with the default base path.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with a custom base path.
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: FxHashMap::default(),
            lines: Vec::new(),
            offers: Vec::new(),
            currency: None,
        }
    }

    /// Load catalog products from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if there are
    /// currency mismatches.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        for (key, product_fixture) in fixture.products {
            let (price, currency) = products::parse_price(&product_fixture.price)?;

            if let Some(existing) = self.currency {
                if existing != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        existing.iso_alpha_code.to_string(),
                        currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                self.currency = Some(currency);
            }

            let product = Product::new(product_fixture.name, product_fixture.unit);

            self.products.insert(key, (product, price));
        }

        Ok(self)
    }

    /// Load basket lines from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if referenced
    /// products don't exist.
    pub fn load_basket(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("baskets").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: BasketFixture = serde_norway::from_str(&contents)?;

        for line in fixture.lines {
            let product = self.entry(&line.product)?.0.clone();
            let quantity = baskets::parse_quantity(&line.quantity)?;

            self.lines.push((product, quantity));
        }

        Ok(self)
    }

    /// Load offers from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if referenced
    /// products don't exist.
    pub fn load_offers(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("offers").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: OffersFixture = serde_norway::from_str(&contents)?;

        for (_key, offer_fixture) in fixture.offers {
            let product = self.entry(offer_fixture.product_key())?.0.clone();
            let argument = offer_fixture.argument()?;

            self.offers
                .push((offer_fixture.offer_type(), product, argument));
        }

        Ok(self)
    }

    /// Load a complete fixture set (products, basket and offers with the
    /// same name).
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_products(name)?
            .load_basket(name)?
            .load_offers(name)?;

        Ok(fixture)
    }

    /// Get a product by its string key.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, key: &str) -> Result<&Product, FixtureError> {
        self.entry(key).map(|(product, _price)| product)
    }

    /// Get the currency.
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    /// Build a catalog listing every loaded product.
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn catalog(&self) -> Result<MemoryCatalog, FixtureError> {
        let mut catalog = MemoryCatalog::new(self.currency()?);

        for (product, price) in self.products.values() {
            catalog.add_product(product.clone(), *price)?;
        }

        Ok(catalog)
    }

    /// Build a basket from the loaded lines, optionally limited to the
    /// first `n`.
    ///
    /// # Errors
    ///
    /// Returns an error if more lines are requested than the fixture defines.
    pub fn basket(&self, n: Option<usize>) -> Result<Basket, FixtureError> {
        if let Some(n) = n
            && n > self.lines.len()
        {
            return Err(FixtureError::NotEnoughLines {
                available: self.lines.len(),
                requested: n,
            });
        }

        let mut basket = Basket::new();

        for (product, quantity) in self.lines.iter().take(n.unwrap_or(self.lines.len())) {
            basket.add_item_quantity(product.clone(), *quantity);
        }

        Ok(basket)
    }

    /// Register every loaded offer on a teller.
    pub fn register_offers<C: Catalog>(&self, teller: &mut Teller<'_, C>) {
        for (offer_type, product, argument) in &self.offers {
            teller.add_special_offer(*offer_type, product.clone(), *argument);
        }
    }

    /// Number of loaded offers.
    #[must_use]
    pub fn offer_count(&self) -> usize {
        self.offers.len()
    }

    fn entry(&self, key: &str) -> Result<&(Product, Money<'static, Currency>), FixtureError> {
        self.products
            .get(key)
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
