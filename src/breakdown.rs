//! Invoice aggregation: ordered display rows, the per-rate tax breakdown, and
//! the grand total.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::entities::line_item::LineItem;
use crate::entities::shipping::ShippingCharge;
use crate::money::{compute_line, compute_shipping, rate_fraction};

/// What a display row represents. The presentation layer picks the localized
/// label for the shipping rows; item rows carry their own description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RowKind {
    Item {
        description: String,
        reference: Option<String>,
    },
    Shipping,
    /// Signed negative row subtracting the shipping discount.
    ShippingDiscount,
}

/// One numeric display row. All amounts are unrounded; formatting happens in
/// the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Row {
    pub kind: RowKind,
    pub quantity: u32,
    pub unit_price_excl: Decimal,
    pub tax_rate: Decimal,
    pub unit_price_incl: Decimal,
    pub total_incl: Decimal,
}

/// Amounts accumulated under one tax rate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TaxBucket {
    /// Tax-exclusive amount taxed at this rate.
    pub taxable: Decimal,
    pub tax: Decimal,
}

/// Mapping from exact tax rate to its accumulated bucket.
///
/// Rates are keyed by numeric value, not by their textual form: 20.0 and
/// 20.00 land in the same bucket, 20.0 and 20.01 do not. Iteration order is
/// ascending rate, which is also the presentation order.
pub type TaxBreakdown = BTreeMap<Decimal, TaxBucket>;

/// The aggregated document body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InvoiceBreakdown {
    /// Rows in display order: items in insertion order, then shipping, then
    /// the discount row when one applies.
    pub rows: Vec<Row>,
    pub tax_breakdown: TaxBreakdown,
    /// Sum of every tax-inclusive line total plus net shipping.
    pub grand_total: Decimal,
}

impl InvoiceBreakdown {
    /// Sum over all buckets of taxable + tax. Always equals `grand_total`.
    #[must_use]
    pub fn bucket_total(&self) -> Decimal {
        self.tax_breakdown
            .values()
            .map(|bucket| bucket.taxable + bucket.tax)
            .sum()
    }
}

fn fold(breakdown: &mut TaxBreakdown, rate: Decimal, taxable: Decimal, tax: Decimal) {
    let bucket = breakdown.entry(rate).or_default();
    bucket.taxable += taxable;
    bucket.tax += tax;
}

/// Aggregate line items and an optional shipping charge into display rows, a
/// tax-rate breakdown, and a grand total.
///
/// Items keep their caller-supplied order. A shipping charge with a zero base
/// contributes nothing, not even a zero-value row. When the shipping discount
/// is non-zero the full-price shipping row is followed by a signed negative
/// discount row, and only the net amounts are folded into the breakdown.
///
/// Inputs are assumed sanitized; out-of-range values propagate into the
/// output rather than failing.
#[must_use]
pub fn build_breakdown(items: &[LineItem], shipping: Option<&ShippingCharge>) -> InvoiceBreakdown {
    let mut rows = Vec::with_capacity(items.len() + 2);
    let mut tax_breakdown = TaxBreakdown::new();
    let mut grand_total = Decimal::ZERO;

    for item in items {
        let amounts = compute_line(item);
        rows.push(Row {
            kind: RowKind::Item {
                description: item.description.clone(),
                reference: item.reference.clone(),
            },
            quantity: item.quantity,
            unit_price_excl: item.unit_price,
            tax_rate: item.tax_rate,
            unit_price_incl: amounts.unit_price_incl,
            total_incl: amounts.total_incl,
        });
        fold(&mut tax_breakdown, item.tax_rate, amounts.total_excl, amounts.tax);
        grand_total += amounts.total_incl;
    }

    if let Some(charge) = shipping.filter(|charge| charge.is_visible()) {
        let amounts = compute_shipping(charge);
        let rate = rate_fraction(charge.tax_rate);

        if charge.has_discount() {
            // Full-price row followed by the signed discount row; the
            // breakdown only ever sees the net amounts.
            rows.push(Row {
                kind: RowKind::Shipping,
                quantity: 1,
                unit_price_excl: charge.amount,
                tax_rate: charge.tax_rate,
                unit_price_incl: charge.amount + charge.amount * rate,
                total_incl: charge.amount + charge.amount * rate,
            });
            // Capped at the base so the two rows always net to the
            // discounted tax-inclusive total, even for discounts over 100 %.
            let row_discount = amounts.discount.min(charge.amount);
            let discount_incl = -(row_discount + row_discount * rate);
            rows.push(Row {
                kind: RowKind::ShippingDiscount,
                quantity: 1,
                unit_price_excl: -row_discount,
                tax_rate: charge.tax_rate,
                unit_price_incl: discount_incl,
                total_incl: discount_incl,
            });
        } else {
            rows.push(Row {
                kind: RowKind::Shipping,
                quantity: 1,
                unit_price_excl: amounts.discounted_base,
                tax_rate: charge.tax_rate,
                unit_price_incl: amounts.total_incl,
                total_incl: amounts.total_incl,
            });
        }

        fold(
            &mut tax_breakdown,
            charge.tax_rate,
            amounts.discounted_base,
            amounts.tax,
        );
        grand_total += amounts.total_incl;
    }

    debug!(
        rows = rows.len(),
        buckets = tax_breakdown.len(),
        %grand_total,
        "aggregated invoice body"
    );

    InvoiceBreakdown {
        rows,
        tax_breakdown,
        grand_total,
    }
}
