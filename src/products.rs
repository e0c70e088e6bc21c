//! Products

use std::fmt;

use serde::Deserialize;

/// Unit a product is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductUnit {
    /// Sold per piece.
    Each,

    /// Sold by weight, in kilograms. Quantities may be fractional.
    Kilo,
}

/// Product
///
/// Identity is the (name, unit) pair: two separately constructed products
/// with the same name and unit are equal, hash alike, and hit the same
/// catalog, offer and aggregate-quantity entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
    name: String,
    unit: ProductUnit,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(name: impl Into<String>, unit: ProductUnit) -> Self {
        Product {
            name: name.into(),
            unit,
        }
    }

    /// Product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit the product is sold in.
    #[must_use]
    pub fn unit(&self) -> ProductUnit {
        self.unit
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
