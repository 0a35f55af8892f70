use super::RegistryError;

use crate::ids::TaxId;
use crate::models::Customer;

/// Customers in registration order, keyed by tax ID
#[derive(Debug, Default)]
pub struct CustomerRegistry {
    customers: Vec<Customer>,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, customer: Customer) -> Result<&Customer, RegistryError> {
        if self.lookup(&customer.tax_id).is_some() {
            return Err(RegistryError::DuplicateCustomer(customer.tax_id));
        }

        log::debug!("Registering customer: {}", customer.tax_id);

        let index = self.customers.len();
        self.customers.push(customer);

        return Ok(&self.customers[index]);
    }

    pub fn lookup(&self, tax_id: &TaxId) -> Option<&Customer> {
        return self.customers.iter().find(|customer| &customer.tax_id == tax_id);
    }

    pub fn list(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
