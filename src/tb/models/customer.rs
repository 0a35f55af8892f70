use crate::ids::TaxId;

use chrono::NaiveDate;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub district: String,
    pub city_state: String,
}

/// Registered bank customer. Immutable once registered.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub tax_id: TaxId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: Address,
}
