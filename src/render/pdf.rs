//! A4 PDF renderer built on `printpdf`'s built-in Helvetica fonts.

use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};

use crate::error::{Error, Result};
use crate::render::{AddressBlock, DocumentRenderer, RenderedInvoice};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const TOP: f32 = PAGE_HEIGHT - MARGIN;
const BOTTOM: f32 = 25.0;

// Items-table column x positions (mm).
const X_DESC: f32 = MARGIN;
const X_QTY: f32 = 82.0;
const X_HT: f32 = 97.0;
const X_RATE: f32 = 122.0;
const X_TTC: f32 = 142.0;
const X_TOTAL: f32 = 170.0;

/// Renders a [`RenderedInvoice`] to paginated A4 PDF bytes.
#[derive(Clone, Debug, Default)]
pub struct PdfRenderer;

struct Page<'a> {
    doc: &'a printpdf::PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl Page<'_> {
    fn text(&self, text: &str, size: f32, x: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.font };
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }

    fn divider(&self) {
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN), Mm(self.y)), false),
                (Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(self.y)), false),
            ],
            is_closed: false,
        });
    }

    fn advance(&mut self, mm: f32) {
        self.y -= mm;
        if self.y < BOTTOM {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP;
        }
    }

    fn block(&mut self, block: &AddressBlock, x: f32) {
        self.text(&block.heading, 10.0, x, true);
        self.advance(5.0);
        for line in &block.lines {
            self.text(line, 9.0, x, false);
            self.advance(4.5);
        }
    }
}

impl DocumentRenderer for PdfRenderer {
    #[instrument(skip(self, invoice), fields(filename = %invoice.filename))]
    fn render(&self, invoice: &RenderedInvoice) -> Result<Vec<u8>> {
        let (doc, page1, layer1) = PdfDocument::new(
            &invoice.title,
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Layer 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| Error::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| Error::Pdf(e.to_string()))?;
        let mut page = Page {
            doc: &doc,
            layer: doc.get_page(page1).get_layer(layer1),
            font,
            bold,
            y: TOP,
        };

        // Header
        page.text(&invoice.title, 18.0, MARGIN, true);
        page.advance(7.0);
        page.text(&invoice.shipped_from, 9.0, MARGIN, false);
        page.advance(8.0);

        // Order/invoice identifiers
        for (label, value) in &invoice.info {
            page.text(label, 10.0, MARGIN, true);
            page.text(value, 10.0, 100.0, false);
            page.advance(5.0);
        }
        page.advance(3.0);
        page.divider();
        page.advance(7.0);

        // Address blocks, two columns per row like the form layout.
        let top = page.y;
        page.block(&invoice.billing, MARGIN);
        let left_bottom = page.y;
        page.y = top;
        page.block(&invoice.shipping, 110.0);
        page.y = page.y.min(left_bottom);
        page.advance(5.0);

        let top = page.y;
        if let Some(commercial) = &invoice.commercial {
            page.block(commercial, MARGIN);
        }
        let left_bottom = page.y;
        page.y = top;
        page.block(&invoice.seller, 110.0);
        page.y = page.y.min(left_bottom);
        page.advance(7.0);

        // Items table
        let headers = &invoice.item_headers;
        page.text(&headers[0], 8.5, X_DESC, true);
        page.text(&headers[1], 8.5, X_QTY, true);
        page.text(&headers[2], 8.5, X_HT, true);
        page.text(&headers[3], 8.5, X_RATE, true);
        page.text(&headers[4], 8.5, X_TTC, true);
        page.text(&headers[5], 8.5, X_TOTAL, true);
        page.advance(2.5);
        page.divider();
        page.advance(5.5);

        for row in &invoice.item_rows {
            page.text(&row[0], 9.0, X_DESC, false);
            page.text(&row[1], 9.0, X_QTY, false);
            page.text(&row[2], 9.0, X_HT, false);
            page.text(&row[3], 9.0, X_RATE, false);
            page.text(&row[4], 9.0, X_TTC, false);
            page.text(&row[5], 9.0, X_TOTAL, false);
            page.advance(5.5);
        }
        page.divider();
        page.advance(7.0);

        // Tax breakdown
        let headers = &invoice.totals_headers;
        page.text(&headers[0], 9.0, X_HT, true);
        page.text(&headers[1], 9.0, X_RATE + 8.0, true);
        page.text(&headers[2], 9.0, X_TOTAL, true);
        page.advance(5.5);
        for row in &invoice.totals_rows {
            page.text(&row[0], 9.0, X_HT, false);
            page.text(&row[1], 9.0, X_RATE + 8.0, false);
            page.text(&row[2], 9.0, X_TOTAL, false);
            page.advance(5.5);
        }
        page.text(&invoice.total_label, 9.0, X_RATE + 8.0, true);
        page.text(&invoice.grand_total, 9.0, X_TOTAL, false);
        page.advance(5.5);
        page.text(&invoice.invoice_total_label, 9.0, X_RATE + 8.0, true);
        page.text(&invoice.grand_total, 9.0, X_TOTAL, true);
        page.advance(10.0);

        // Footer
        page.text(&invoice.customer_service, 7.5, MARGIN, false);
        page.advance(5.0);
        page.divider();
        page.advance(4.0);
        page.text(&invoice.legal, 7.5, MARGIN, false);
        drop(page);

        let mut writer = BufWriter::new(Vec::<u8>::new());
        doc.save(&mut writer)
            .map_err(|e| Error::Pdf(e.to_string()))?;
        let bytes = writer
            .into_inner()
            .map_err(|e| Error::Pdf(e.to_string()))?;
        debug!(bytes = bytes.len(), "rendered invoice pdf");
        Ok(bytes)
    }
}
