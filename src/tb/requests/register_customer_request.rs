use crate::ids::TaxId;
use crate::models::{Address, Customer};

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterCustomerRequest {
    pub name: String,
    pub birth_date: NaiveDate,
    pub tax_id: TaxId,
    pub address: Address,
}

impl From<RegisterCustomerRequest> for Customer {
    fn from(request: RegisterCustomerRequest) -> Self {
        return Customer {
            tax_id: request.tax_id,
            name: request.name,
            birth_date: request.birth_date,
            address: request.address,
        };
    }
}
