//! Session-scoped state: the line items accumulated by the form layer, the
//! pending shipping charge, and the append-only invoice log.
//!
//! One [`Session`] corresponds to one interactive user session. State is an
//! explicit context object passed into each operation; there is no ambient
//! global storage, no persistence, and no cross-session sharing.

use rust_decimal::Decimal;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::breakdown::build_breakdown;
use crate::entities::invoice;
use crate::entities::line_item::LineItem;
use crate::entities::shipping::ShippingCharge;
use crate::error::Result;
use crate::locale::Translations;
use crate::money::compute_line;
use crate::render::{present, DocumentRenderer};

fn serialize_timestamp<S>(
    value: &OffsetDateTime,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let formatted = value
        .format(&Rfc3339)
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&formatted)
}

/// Per-product summary kept in a log entry.
#[derive(Clone, Debug, Serialize)]
pub struct ProductSummary {
    pub description: String,
    pub quantity: u32,
    pub total_incl: Decimal,
}

/// Summary record appended to the session log after a successful render.
#[derive(Clone, Debug, Serialize)]
pub struct LogEntry {
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: OffsetDateTime,
    pub order_number: String,
    pub invoice_number: String,
    pub customer_name: String,
    pub seller_name: String,
    pub products: Vec<ProductSummary>,
    /// Number of distinct products (line items) on the invoice, not the sum
    /// of their quantities.
    pub product_count: usize,
    pub grand_total: Decimal,
    pub pdf_bytes: usize,
}

/// A successfully rendered invoice, offered to the user as a download.
#[derive(Clone, Debug)]
pub struct GeneratedInvoice {
    filename: String,
    bytes: Vec<u8>,
}

impl GeneratedInvoice {
    /// `{invoice_number}_{language}.pdf`
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// The interactive session context.
#[derive(Debug, Default)]
pub struct Session {
    items: Vec<LineItem>,
    shipping: Option<ShippingCharge>,
    log: Vec<LogEntry>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line item; insertion order is the display order.
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Set or replace the shipping charge (at most one per invoice).
    pub fn set_shipping(&mut self, shipping: ShippingCharge) {
        self.shipping = Some(shipping);
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Clear the in-progress form state. The log is the session audit trail
    /// and survives; it is only discarded with the session itself.
    pub fn reset(&mut self) {
        self.items.clear();
        self.shipping = None;
    }

    /// Build the document from current state, render it, and append a log
    /// entry. One synchronous attempt: on any failure nothing is logged.
    #[instrument(skip_all, fields(items = self.items.len()))]
    pub fn generate(
        &mut self,
        header: invoice::Builder,
        translations: &Translations,
        renderer: &dyn DocumentRenderer,
    ) -> Result<GeneratedInvoice> {
        let doc = invoice::Builder {
            line_items: Some(self.items.clone()),
            shipping: self.shipping.clone(),
            ..header
        }
        .build();

        let rendered = present(&doc, translations)?;
        let bytes = renderer.render(&rendered)?;

        let body = build_breakdown(&doc.line_items, doc.shipping.as_ref());
        let products = doc
            .line_items
            .iter()
            .map(|item| ProductSummary {
                description: item.description.clone(),
                quantity: item.quantity,
                total_incl: compute_line(item).total_incl,
            })
            .collect::<Vec<_>>();

        info!(
            invoice_number = %doc.invoice_number,
            products = products.len(),
            bytes = bytes.len(),
            "invoice generated"
        );

        self.log.push(LogEntry {
            timestamp: OffsetDateTime::now_utc(),
            order_number: doc.order_number.clone(),
            invoice_number: doc.invoice_number.clone(),
            customer_name: doc.customer.name.clone(),
            seller_name: doc.seller.name.clone(),
            product_count: products.len(),
            products,
            grand_total: body.grand_total,
            pdf_bytes: bytes.len(),
        });

        Ok(GeneratedInvoice {
            filename: rendered.filename.clone(),
            bytes,
        })
    }

    /// Export the session log as an indented UTF-8 JSON array.
    pub fn export_log(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.log)?)
    }
}
