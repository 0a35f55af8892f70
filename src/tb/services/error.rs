use crate::ids::{AccountNumber, TaxId};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Tax ID {0} is already registered!")]
    DuplicateCustomer(TaxId),

    #[error("Customer not found! Register the customer first.")]
    CustomerNotFound(TaxId),

    #[error("Account not found!")]
    AccountNotFound(AccountNumber),
}
