//! Presentation layer: turns the numeric document model into formatted,
//! localized display strings, and defines the renderer boundary.
//!
//! All translation and currency faults surface here, before any renderer is
//! involved; a [`RenderedInvoice`] contains only ready-to-draw strings.

mod pdf;

pub use pdf::PdfRenderer;

use serde::Serialize;

use crate::breakdown::{build_breakdown, RowKind};
use crate::entities::invoice::InvoiceDocument;
use crate::entities::party::Party;
use crate::error::Result;
use crate::locale::Translations;
use crate::money::{format_amount, format_rate};

/// A heading plus free-text lines, e.g. a billing or seller address block.
#[derive(Clone, Debug, Serialize)]
pub struct AddressBlock {
    pub heading: String,
    pub lines: Vec<String>,
}

/// The fully formatted document handed to a [`DocumentRenderer`].
#[derive(Clone, Debug, Serialize)]
pub struct RenderedInvoice {
    pub title: String,
    pub shipped_from: String,
    /// Label/value pairs for the order and invoice identifiers.
    pub info: Vec<(String, String)>,
    pub billing: AddressBlock,
    pub shipping: AddressBlock,
    pub commercial: Option<AddressBlock>,
    pub seller: AddressBlock,
    pub item_headers: [String; 6],
    pub item_rows: Vec<[String; 6]>,
    pub totals_headers: [String; 3],
    /// One row per tax bucket, ascending rate: rate, taxable, tax.
    pub totals_rows: Vec<[String; 3]>,
    pub total_label: String,
    pub invoice_total_label: String,
    pub grand_total: String,
    pub customer_service: String,
    pub legal: String,
    /// Download name for the artifact: `{invoice_number}_{language}.pdf`.
    pub filename: String,
}

fn address_block(heading: &str, party: &Party, vat_label: &str) -> AddressBlock {
    let mut lines = vec![party.name.clone()];
    lines.extend(party.address_lines.iter().cloned());
    if let Some(vat) = &party.vat_number {
        lines.push(format!("{vat_label} {vat}"));
    }
    AddressBlock {
        heading: heading.to_string(),
        lines,
    }
}

/// Resolve the language table and format the document for rendering.
#[instrument(skip(doc, translations), fields(invoice_number = %doc.invoice_number, language = %doc.language))]
pub fn present(doc: &InvoiceDocument, translations: &Translations) -> Result<RenderedInvoice> {
    let tr = translations.resolve(&doc.language)?;
    let currency = doc.currency;
    let body = build_breakdown(&doc.line_items, doc.shipping.as_ref());

    let vat_label = tr.get("vat")?;

    let info = vec![
        (tr.get("order_date")?.to_string(), doc.order_date.clone()),
        (tr.get("order_number")?.to_string(), doc.order_number.clone()),
        (tr.get("ordered_by")?.to_string(), doc.customer.name.clone()),
        (tr.get("sold_by")?.to_string(), doc.seller.name.clone()),
        (
            vat_label.to_string(),
            doc.seller.vat_number.clone().unwrap_or_default(),
        ),
        (
            tr.get("invoice_number")?.to_string(),
            doc.invoice_number.clone(),
        ),
        (tr.get("invoice_date")?.to_string(), doc.invoice_date.clone()),
    ];

    let item_headers = [
        tr.get("description")?.to_string(),
        tr.get("qty")?.to_string(),
        tr.get("unit_price_ht")?.to_string(),
        format!("{} %", tr.get("vat_rate")?),
        tr.get("unit_price_ttc")?.to_string(),
        tr.get("total_ttc")?.to_string(),
    ];

    let mut item_rows = Vec::with_capacity(body.rows.len());
    for row in &body.rows {
        let label = match &row.kind {
            RowKind::Item { description, .. } => description.clone(),
            RowKind::Shipping => tr.get("delivery")?.to_string(),
            RowKind::ShippingDiscount => tr.get("shipping_discount")?.to_string(),
        };
        item_rows.push([
            label,
            row.quantity.to_string(),
            format_amount(row.unit_price_excl, currency),
            format_rate(row.tax_rate),
            format_amount(row.unit_price_incl, currency),
            format_amount(row.total_incl, currency),
        ]);
        if let RowKind::Item {
            reference: Some(reference),
            ..
        } = &row.kind
        {
            item_rows.push([
                format!("ASIN: {reference}"),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ]);
        }
    }

    let totals_headers = [
        format!("{} %", tr.get("totals_vat_rate")?),
        tr.get("totals_total_ht")?.to_string(),
        tr.get("totals_vat")?.to_string(),
    ];
    let totals_rows = body
        .tax_breakdown
        .iter()
        .map(|(rate, bucket)| {
            [
                format_rate(*rate),
                format_amount(bucket.taxable, currency),
                format_amount(bucket.tax, currency),
            ]
        })
        .collect();

    Ok(RenderedInvoice {
        title: tr.get("invoice")?.to_string(),
        shipped_from: tr.get("shipped_from")?.to_string(),
        info,
        billing: address_block(tr.get("billing_address")?, &doc.customer, vat_label),
        shipping: address_block(tr.get("shipping_address")?, &doc.customer, vat_label),
        commercial: match &doc.commercial {
            Some(party) => Some(address_block(tr.get("commercial_address")?, party, vat_label)),
            None => None,
        },
        seller: address_block(tr.get("sold_by")?, &doc.seller, vat_label),
        item_headers,
        item_rows,
        totals_headers,
        totals_rows,
        total_label: tr.get("totals_total")?.to_string(),
        invoice_total_label: tr.get("totals_invoice_total")?.to_string(),
        grand_total: format_amount(body.grand_total, currency),
        customer_service: tr.get("customer_service")?.to_string(),
        legal: tr.get("legal")?.to_string(),
        filename: doc.download_filename(),
    })
}

/// The opaque document-producing collaborator: consumes formatted content
/// blocks and returns the paginated output bytes.
pub trait DocumentRenderer {
    fn render(&self, invoice: &RenderedInvoice) -> Result<Vec<u8>>;
}
