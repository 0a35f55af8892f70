use tb::{BankConfig, Money, Result};

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Logs to stderr at `warn` by default, overridable through `RUST_LOG`
pub fn configure_logging() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}

pub fn build_bank_config(per_withdrawal_limit: Money, daily_withdrawal_limit: u32) -> BankConfig {
    return BankConfig {
        per_withdrawal_limit,
        daily_withdrawal_limit,
    };
}
