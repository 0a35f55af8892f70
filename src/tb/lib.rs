mod config;
pub mod console;
pub mod ids;
pub mod input;
pub mod models;
mod money;
pub mod requests;
mod result;
pub mod rules;
pub mod services;
pub mod statement;

pub use config::BankConfig;
pub use money::{Money, MoneyError};
pub use result::Result;
pub use services::Bank;

pub fn build_bank(config: BankConfig) -> Bank {
    log::debug!("Building bank with {config:?}");

    return Bank::new(config);
}
