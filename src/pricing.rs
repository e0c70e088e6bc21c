//! Pricing

use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso::Currency};

/// Calculates the price of a quantity of product at a unit price.
///
/// Quantities may be fractional (weight-based products), so the result can
/// carry sub-minor precision; nothing is rounded here.
#[must_use]
pub fn line_total<'a>(unit_price: Money<'a, Currency>, quantity: Decimal) -> Money<'a, Currency> {
    Money::from_decimal(*unit_price.amount() * quantity, unit_price.currency())
}

/// Calculates the sum of a sequence of monetary amounts.
///
/// An empty sequence sums to zero in the given currency.
///
/// # Errors
///
/// Returns a [`MoneyError`] if amounts in different currencies are mixed.
pub fn total<'a>(
    amounts: impl IntoIterator<Item = Money<'a, Currency>>,
    currency: &'static Currency,
) -> Result<Money<'a, Currency>, MoneyError> {
    amounts
        .into_iter()
        .try_fold(Money::from_minor(0, currency), |acc, amount| {
            acc.add(amount)
        })
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn line_total_multiplies_unit_price_by_quantity() {
        let total = line_total(Money::from_minor(99, GBP), Decimal::from(3));

        assert_eq!(total, Money::from_minor(297, GBP));
    }

    #[test]
    fn line_total_keeps_sub_minor_precision() {
        // 2.5 kg at 1.99 is 4.975, half a penny beyond minor units.
        let total = line_total(Money::from_minor(199, GBP), Decimal::new(25, 1));

        assert_eq!(total, Money::from_decimal(Decimal::new(4975, 3), GBP));
    }

    #[test]
    fn total_sums_amounts() -> TestResult {
        let amounts = [Money::from_minor(100, GBP), Money::from_minor(250, GBP)];

        assert_eq!(total(amounts, GBP)?, Money::from_minor(350, GBP));

        Ok(())
    }

    #[test]
    fn total_of_no_amounts_is_zero() -> TestResult {
        let amounts: [Money<'static, Currency>; 0] = [];

        assert_eq!(total(amounts, GBP)?, Money::from_minor(0, GBP));

        Ok(())
    }

    #[test]
    fn total_rejects_mixed_currencies() {
        let amounts = [Money::from_minor(100, GBP), Money::from_minor(100, USD)];

        assert!(total(amounts, GBP).is_err());
    }
}
