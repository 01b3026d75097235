//! Pure decimal tax arithmetic.
//!
//! Everything here works at full [`Decimal`] precision; rounding to two
//! fractional digits happens only in [`format_amount`], at presentation time,
//! so accumulating many lines cannot compound rounding error.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::currency::Currency;
use crate::entities::line_item::LineItem;
use crate::entities::shipping::ShippingCharge;

/// Derived amounts for one line item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LineAmounts {
    /// quantity × unit price, before tax.
    pub total_excl: Decimal,
    pub tax: Decimal,
    pub total_incl: Decimal,
    /// Display value: unit price × (1 + rate/100).
    pub unit_price_incl: Decimal,
}

/// Derived amounts for the shipping pseudo-line, net of its discount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ShippingAmounts {
    /// Discount taken off the base amount, pre-tax.
    pub discount: Decimal,
    /// max(0, base − discount).
    pub discounted_base: Decimal,
    /// Tax on the discounted base.
    pub tax: Decimal,
    pub total_incl: Decimal,
}

pub(crate) fn rate_fraction(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}

/// Compute the derived amounts for a line item.
///
/// Assumes already-sanitized inputs (quantity ≥ 1, price and rate ≥ 0);
/// nonsensical inputs produce nonsensical output rather than an error.
#[must_use]
pub fn compute_line(item: &LineItem) -> LineAmounts {
    let rate = rate_fraction(item.tax_rate);
    let total_excl = Decimal::from(item.quantity) * item.unit_price;
    let tax = total_excl * rate;
    LineAmounts {
        total_excl,
        tax,
        total_incl: total_excl + tax,
        unit_price_incl: item.unit_price * (Decimal::ONE + rate),
    }
}

/// Compute the net amounts for a shipping charge.
///
/// The discount is a percentage of the base, applied pre-tax; tax is computed
/// on the discounted base. The discounted base is floored at zero.
#[must_use]
pub fn compute_shipping(charge: &ShippingCharge) -> ShippingAmounts {
    let discount = charge.amount * rate_fraction(charge.discount_percent);
    let discounted_base = (charge.amount - discount).max(Decimal::ZERO);
    let tax = discounted_base * rate_fraction(charge.tax_rate);
    ShippingAmounts {
        discount,
        discounted_base,
        tax,
        total_incl: discounted_base + tax,
    }
}

/// Format an amount for display: rounded to two decimals (midpoint away from
/// zero) with the currency symbol, e.g. `"140.98 €"`.
#[must_use]
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2} {}", currency.symbol())
}

/// Format a tax rate for display, e.g. `"20 %"`.
#[must_use]
pub fn format_rate(rate: Decimal) -> String {
    format!("{} %", rate.normalize())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use super::*;

    fn item(quantity: u32, unit_price: Decimal, tax_rate: Decimal) -> LineItem {
        LineItem {
            line_item_id: Uuid::new_v4(),
            description: "test".to_string(),
            reference: None,
            quantity,
            unit_price,
            tax_rate,
        }
    }

    #[test]
    fn line_amounts_keep_full_precision() {
        let amounts = compute_line(&item(2, dec!(45.99), dec!(20.0)));
        assert_eq!(amounts.total_excl, dec!(91.98));
        assert_eq!(amounts.tax, dec!(18.3960));
        assert_eq!(amounts.total_incl, dec!(110.3760));
        assert_eq!(amounts.unit_price_incl, dec!(55.1880));
    }

    #[test]
    fn zero_rate_line_has_no_tax() {
        let amounts = compute_line(&item(3, dec!(10.00), Decimal::ZERO));
        assert_eq!(amounts.tax, Decimal::ZERO);
        assert_eq!(amounts.total_incl, dec!(30.00));
        assert_eq!(amounts.unit_price_incl, dec!(10.00));
    }

    #[test]
    fn shipping_discount_applies_before_tax() {
        let charge = ShippingCharge::new(dec!(100), dec!(20)).with_discount_percent(dec!(10));
        let amounts = compute_shipping(&charge);
        assert_eq!(amounts.discount, dec!(10));
        assert_eq!(amounts.discounted_base, dec!(90));
        assert_eq!(amounts.tax, dec!(18));
        assert_eq!(amounts.total_incl, dec!(108));
    }

    #[test]
    fn shipping_discount_over_base_floors_at_zero() {
        let charge = ShippingCharge::new(dec!(5), dec!(20)).with_discount_percent(dec!(200));
        let amounts = compute_shipping(&charge);
        assert_eq!(amounts.discounted_base, Decimal::ZERO);
        assert_eq!(amounts.total_incl, Decimal::ZERO);
    }

    #[test]
    fn formatting_rounds_at_two_decimals() {
        assert_eq!(format_amount(dec!(140.976), Currency::Eur), "140.98 €");
        assert_eq!(format_amount(dec!(30.6), Currency::Gbp), "30.60 £");
        assert_eq!(format_amount(dec!(-10.005), Currency::Usd), "-10.01 $");
    }

    #[test]
    fn rate_formatting_drops_trailing_zeros() {
        assert_eq!(format_rate(dec!(20.0)), "20 %");
        assert_eq!(format_rate(dec!(5.5)), "5.5 %");
    }
}
