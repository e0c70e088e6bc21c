//! Baskets

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::products::Product;

/// One raw addition to a basket: a product and the quantity added.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketLine {
    product: Product,
    quantity: Decimal,
}

impl BasketLine {
    /// Create a new basket line.
    #[must_use]
    pub fn new(product: Product, quantity: Decimal) -> Self {
        BasketLine { product, quantity }
    }

    /// The product added.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The quantity recorded for this addition.
    #[must_use]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }
}

/// Basket
///
/// Records every addition as its own line, in insertion order, and keeps a
/// per-product aggregate of quantities. The aggregate drives offer
/// eligibility; lines are never merged for display.
#[derive(Debug, Default)]
pub struct Basket {
    lines: Vec<BasketLine>,
    quantities: FxHashMap<Product, Decimal>,
}

impl Basket {
    /// Create an empty basket.
    #[must_use]
    pub fn new() -> Self {
        Basket::default()
    }

    /// Add a single unit of a product.
    pub fn add_item(&mut self, product: Product) {
        self.add_item_quantity(product, Decimal::ONE);
    }

    /// Add a quantity of a product.
    ///
    /// Quantities are expected to be finite and non-negative; receipts built
    /// from negative quantities are unspecified.
    pub fn add_item_quantity(&mut self, product: Product, quantity: Decimal) {
        self.lines.push(BasketLine::new(product.clone(), quantity));

        *self.quantities.entry(product).or_insert(Decimal::ZERO) += quantity;
    }

    /// The raw additions, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[BasketLine] {
        &self.lines
    }

    /// Iterate over (product, aggregate quantity) pairs.
    ///
    /// Order is stable within a run but otherwise unspecified.
    pub fn quantities(&self) -> impl Iterator<Item = (&Product, Decimal)> {
        self.quantities
            .iter()
            .map(|(product, quantity)| (product, *quantity))
    }

    /// Total quantity of a product across all additions.
    #[must_use]
    pub fn quantity_of(&self, product: &Product) -> Decimal {
        self.quantities
            .get(product)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Number of raw additions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the basket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
