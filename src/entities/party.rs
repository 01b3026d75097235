use serde::{Deserialize, Serialize};

/// A party involved in the invoice: the customer, the seller of record, or
/// the commercial entity. Free-text address blocks, not validated.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub address_lines: Vec<String>,
    pub vat_number: Option<String>,
}

impl Party {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_address_line(mut self, line: impl Into<String>) -> Self {
        self.address_lines.push(line.into());
        self
    }

    #[must_use]
    pub fn with_vat_number(mut self, vat: impl Into<String>) -> Self {
        self.vat_number = Some(vat.into());
        self
    }
}
