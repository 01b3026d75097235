use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One product or service entry on the invoice.
///
/// `unit_price` is always the tax-exclusive price: the tax-inclusive unit
/// price is a derived display value and is recomputed from `unit_price` and
/// `tax_rate`, never accepted as an independent input.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LineItem {
    pub line_item_id: Uuid,
    pub description: String,
    /// External catalogue reference (SKU/ASIN), rendered under the description.
    pub reference: Option<String>,
    pub quantity: u32,
    /// Unit price excluding tax.
    pub unit_price: Decimal,
    /// Tax rate as a percentage, e.g. `20.0` for 20 %.
    pub tax_rate: Decimal,
}

impl LineItem {
    #[must_use]
    pub fn into_builder(self) -> Builder {
        Builder {
            line_item_id: Some(self.line_item_id),
            description: Some(self.description),
            reference: self.reference,
            quantity: Some(self.quantity),
            unit_price: Some(self.unit_price),
            tax_rate: Some(self.tax_rate),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Builder {
    pub line_item_id: Option<Uuid>,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub quantity: Option<u32>,
    pub unit_price: Option<Decimal>,
    pub tax_rate: Option<Decimal>,
}

impl Builder {
    #[must_use]
    pub fn new() -> Self {
        Builder {
            ..Self::default()
        }
    }

    /// Materialize the line item, generating an id when none was supplied and
    /// defaulting quantity to 1 and money fields to zero.
    ///
    /// Range constraints (quantity ≥ 1, price and rate ≥ 0) belong to the form
    /// layer; out-of-range values are propagated, not rejected.
    #[must_use]
    pub fn build(self) -> LineItem {
        LineItem {
            line_item_id: self.line_item_id.unwrap_or_else(Uuid::new_v4),
            description: self.description.unwrap_or_default(),
            reference: self.reference,
            quantity: self.quantity.unwrap_or(1),
            unit_price: self.unit_price.unwrap_or_default(),
            tax_rate: self.tax_rate.unwrap_or_default(),
        }
    }
}
