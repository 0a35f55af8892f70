mod account_service;
mod bank_service;
mod customer_service;
mod error;

pub use account_service::AccountRegistry;
pub use bank_service::{Bank, BankError};
pub use customer_service::CustomerRegistry;
pub use error::RegistryError;
