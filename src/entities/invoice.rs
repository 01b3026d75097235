use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::locale::DEFAULT_LANGUAGE;
use crate::entities::line_item::LineItem;
use crate::entities::party::Party;
use crate::entities::shipping::ShippingCharge;

/// The complete document model handed to the presentation layer.
///
/// Built fresh per render call from current session state and immutable from
/// then on; identifiers and dates are opaque strings and are not validated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InvoiceDocument {
    pub order_number: String,
    pub order_date: String,
    pub invoice_number: String,
    pub invoice_date: String,
    pub customer: Party,
    pub seller: Party,
    /// Optional separate commercial-entity block shown next to the seller.
    pub commercial: Option<Party>,
    pub currency: Currency,
    /// Target language code, e.g. `"FR"`. Resolution falls back to the
    /// default language when absent from the translation table.
    pub language: String,
    /// Display order is insertion order and is significant.
    pub line_items: Vec<LineItem>,
    pub shipping: Option<ShippingCharge>,
}

impl InvoiceDocument {
    /// Name for the downloadable artifact: `{invoice_number}_{language}.pdf`.
    #[must_use]
    pub fn download_filename(&self) -> String {
        format!("{}_{}.pdf", self.invoice_number, self.language)
    }
}

/// Builder for the document header; items and shipping are usually filled in
/// by the session when the document is assembled.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    pub order_number: Option<String>,
    pub order_date: Option<String>,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<String>,
    pub customer: Option<Party>,
    pub seller: Option<Party>,
    pub commercial: Option<Party>,
    pub currency: Option<Currency>,
    pub language: Option<String>,
    pub line_items: Option<Vec<LineItem>>,
    pub shipping: Option<ShippingCharge>,
}

impl Builder {
    #[must_use]
    pub fn new() -> Self {
        Builder {
            ..Self::default()
        }
    }

    #[must_use]
    pub fn build(self) -> InvoiceDocument {
        InvoiceDocument {
            order_number: self.order_number.unwrap_or_default(),
            order_date: self.order_date.unwrap_or_default(),
            invoice_number: self.invoice_number.unwrap_or_default(),
            invoice_date: self.invoice_date.unwrap_or_default(),
            customer: self.customer.unwrap_or_default(),
            seller: self.seller.unwrap_or_default(),
            commercial: self.commercial,
            currency: self.currency.unwrap_or(Currency::Eur),
            language: self.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            line_items: self.line_items.unwrap_or_default(),
            shipping: self.shipping,
        }
    }
}
