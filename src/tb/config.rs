use crate::Money;

/// Limits applied to every account opened by the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankConfig {
    pub per_withdrawal_limit: Money,
    pub daily_withdrawal_limit: u32,
}

impl BankConfig {
    pub const DEFAULT_PER_WITHDRAWAL_LIMIT: Money = Money::from_units(500);
    pub const DEFAULT_DAILY_WITHDRAWAL_LIMIT: u32 = 3;
}

impl Default for BankConfig {
    fn default() -> Self {
        return Self {
            per_withdrawal_limit: Self::DEFAULT_PER_WITHDRAWAL_LIMIT,
            daily_withdrawal_limit: Self::DEFAULT_DAILY_WITHDRAWAL_LIMIT,
        };
    }
}
