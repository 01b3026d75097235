//! # facture-rs
//!
//! A localized, multi-currency VAT invoice builder.
//!
//! The crate is split into a pure computation layer and a presentation layer:
//! line and shipping amounts are accumulated at full [`rust_decimal::Decimal`]
//! precision and only rounded to two decimals when formatted for display, so
//! the per-rate tax buckets always sum exactly to the grand total.
//!
//! ## Example
//!
//! ```no_run
//! use facture_rs::{Currency, Session, Translations};
//! use facture_rs::line_item;
//! use facture_rs::render::PdfRenderer;
//! use rust_decimal::Decimal;
//!
//! fn main() -> facture_rs::Result<()> {
//!     let translations = Translations::builtin()?;
//!     let mut session = Session::new();
//!
//!     session.add_item(
//!         line_item::Builder {
//!             description: Some("USB-C cable".to_string()),
//!             quantity: Some(2),
//!             unit_price: Some(Decimal::new(4599, 2)),
//!             tax_rate: Some(Decimal::new(200, 1)),
//!             ..Default::default()
//!         }
//!         .build(),
//!     );
//!
//!     let invoice = facture_rs::invoice::Builder {
//!         invoice_number: Some("INV-0042".to_string()),
//!         currency: Some(Currency::Eur),
//!         language: Some("FR".to_string()),
//!         ..Default::default()
//!     };
//!
//!     let generated = session.generate(invoice, &translations, &PdfRenderer::default())?;
//!     std::fs::write(generated.filename(), generated.bytes())?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
extern crate tracing;

pub mod breakdown;
pub mod currency;
pub mod entities;
pub mod error;
pub mod locale;
pub mod money;
pub mod render;
pub mod session;

pub use breakdown::{InvoiceBreakdown, Row, RowKind, TaxBreakdown, TaxBucket};
pub use currency::Currency;
pub use entities::*;
pub use error::{Error, Result};
pub use locale::{LanguageTable, Translations, DEFAULT_LANGUAGE};
pub use render::{DocumentRenderer, PdfRenderer, RenderedInvoice};
pub use session::{GeneratedInvoice, LogEntry, ProductSummary, Session};

// Re-export the arithmetic primitives for callers that only need the numbers.
pub use money::{compute_line, compute_shipping, format_amount, LineAmounts, ShippingAmounts};
