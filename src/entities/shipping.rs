use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shipping charge attached to an invoice, at most one per document.
///
/// The discount is a percentage of the base amount, applied pre-tax: tax is
/// computed on the discounted base. A base amount of zero means the shipping
/// pseudo-line (and any discount line) is omitted from the document entirely.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShippingCharge {
    /// Base shipping amount, excluding tax, before discount.
    pub amount: Decimal,
    /// Tax rate as a percentage.
    pub tax_rate: Decimal,
    /// Discount as a percentage of `amount`, in the range 0–100.
    pub discount_percent: Decimal,
}

impl ShippingCharge {
    /// A shipping charge with no discount.
    #[must_use]
    pub fn new(amount: Decimal, tax_rate: Decimal) -> Self {
        Self {
            amount,
            tax_rate,
            discount_percent: Decimal::ZERO,
        }
    }

    #[must_use]
    pub fn with_discount_percent(mut self, percent: Decimal) -> Self {
        self.discount_percent = percent;
        self
    }

    /// Whether the charge renders at all (a zero base produces no rows).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.amount.is_zero()
    }

    /// Whether a separate signed discount row is emitted.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.is_visible() && !self.discount_percent.is_zero()
    }
}
