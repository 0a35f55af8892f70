use std::fmt;

use serde::Serialize;

/// National taxpayer number identifying a customer
#[derive(Serialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TaxId(String);

impl TaxId {
    pub fn new(tax_id: impl Into<String>) -> Self {
        return Self(tax_id.into().trim().to_string());
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
