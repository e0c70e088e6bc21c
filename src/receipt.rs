//! Receipts

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{discounts::Discount, pricing, products::Product};

/// Errors that can occur when totalling or writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// One priced line on a receipt: a single raw basket addition at
/// checkout-time catalog prices.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptItem<'a> {
    product: Product,
    quantity: Decimal,
    unit_price: Money<'a, Currency>,
    total_price: Money<'a, Currency>,
}

impl<'a> ReceiptItem<'a> {
    /// Price a quantity of a product at the given unit price.
    #[must_use]
    pub fn new(product: Product, quantity: Decimal, unit_price: Money<'a, Currency>) -> Self {
        let total_price = pricing::line_total(unit_price, quantity);

        ReceiptItem {
            product,
            quantity,
            unit_price,
            total_price,
        }
    }

    /// The product on this line.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The quantity on this line.
    #[must_use]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// The catalog unit price at checkout time.
    #[must_use]
    pub fn unit_price(&self) -> Money<'a, Currency> {
        self.unit_price
    }

    /// The line total: quantity x unit price.
    #[must_use]
    pub fn total_price(&self) -> Money<'a, Currency> {
        self.total_price
    }
}

/// Final receipt for a checked-out basket.
///
/// Line items keep basket insertion order and are never merged across
/// repeated additions of the same product; discounts carry at most one entry
/// per product.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    items: Vec<ReceiptItem<'a>>,
    discounts: SmallVec<[Discount<'a>; 8]>,
    currency: &'static Currency,
}

impl<'a> Receipt<'a> {
    /// Create an empty receipt in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Receipt {
            items: Vec::new(),
            discounts: SmallVec::new(),
            currency,
        }
    }

    /// Append a priced line item.
    pub fn add_item(&mut self, item: ReceiptItem<'a>) {
        self.items.push(item);
    }

    /// Append an applied discount.
    pub fn add_discount(&mut self, discount: Discount<'a>) {
        self.discounts.push(discount);
    }

    /// The priced line items, in basket insertion order.
    #[must_use]
    pub fn items(&self) -> &[ReceiptItem<'a>] {
        &self.items
    }

    /// The applied discounts.
    #[must_use]
    pub fn discounts(&self) -> &[Discount<'a>] {
        &self.discounts
    }

    /// Currency used for all monetary values.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Total cost before discounts.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the line totals cannot be summed.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, MoneyError> {
        pricing::total(
            self.items.iter().map(ReceiptItem::total_price),
            self.currency,
        )
    }

    /// Total amount payable: line totals plus (negative) discount amounts.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the amounts cannot be summed.
    pub fn total(&self) -> Result<Money<'a, Currency>, MoneyError> {
        let subtotal = self.subtotal()?;

        self.discounts
            .iter()
            .try_fold(subtotal, |acc, discount| acc.add(discount.amount()))
    }

    /// Amount saved by the applied offers.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.subtotal()?.sub(self.total()?)
    }

    /// Write the receipt as a table, followed by savings and total lines.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if a total cannot be computed or the
    /// writer fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Qty", "Unit", "Price"]);

        for item in &self.items {
            builder.push_record([
                item.product().name().to_string(),
                format!("{}", item.quantity()),
                format!("{}", item.unit_price()),
                format!("{}", item.total_price()),
            ]);
        }

        for discount in &self.discounts {
            builder.push_record([
                format!("{} ({})", discount.description(), discount.product().name()),
                String::new(),
                String::new(),
                format!("{}", discount.amount()),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::sharp());
        table.modify(Rows::first(), Alignment::center());
        table.modify(Columns::new(1..4), Alignment::right());

        writeln!(out, "{table}").map_err(|_err| ReceiptError::IO)?;

        self.write_summary(&mut out)
    }

    fn write_summary(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let savings = self.savings()?;

        if *savings.amount() != Decimal::ZERO {
            writeln!(out, " Savings: {savings}").map_err(|_err| ReceiptError::IO)?;
        }

        writeln!(out, " Total: {}", self.total()?).map_err(|_err| ReceiptError::IO)
    }
}
