//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketLine},
    catalog::{Catalog, CatalogError, MemoryCatalog},
    checkout::{CheckoutError, Teller},
    discounts::Discount,
    fixtures::{Fixture, FixtureError},
    offers::{Offer, OfferStrategy, SpecialOfferType, StrategySet},
    products::{Product, ProductUnit},
    receipt::{Receipt, ReceiptError, ReceiptItem},
};
