pub mod invoice;
pub mod line_item;
pub mod party;
pub mod shipping;

pub use invoice::InvoiceDocument;
pub use line_item::LineItem;
pub use party::Party;
pub use shipping::ShippingCharge;
