use thiserror::Error;

pub const WITHDRAWAL_LIMIT: i64 = 500;
pub const MAX_WITHDRAWALS: u32 = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimpleAccountError {
    #[error("Operation failed! You don't have enough balance.")]
    InsufficientFunds,

    #[error("Operation failed! The withdrawal amount exceeds the limit of R$ {}.00.", WITHDRAWAL_LIMIT)]
    ExceedsLimit,

    #[error("Operation failed! Maximum number of withdrawals ({}) exceeded.", MAX_WITHDRAWALS)]
    TooManyWithdrawals,

    #[error("Operation failed! The amount entered is invalid.")]
    InvalidAmount,

    #[error("Operation failed! Balance out of range.")]
    Overflow,
}

/// Single implicit account in whole currency units. Keeps running totals and the raw
/// amounts of each movement, no typed log.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SimpleAccount {
    balance: i64,
    deposits: Vec<i64>,
    withdrawals: Vec<i64>,
    withdrawals_made: u32,
}

impl SimpleAccount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn deposits(&self) -> &[i64] {
        &self.deposits
    }

    pub fn withdrawals(&self) -> &[i64] {
        &self.withdrawals
    }

    pub fn withdrawals_made(&self) -> u32 {
        self.withdrawals_made
    }

    pub fn deposit(&mut self, amount: i64) -> Result<i64, SimpleAccountError> {
        if amount <= 0 {
            return Err(SimpleAccountError::InvalidAmount);
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(SimpleAccountError::Overflow)?;
        self.deposits.push(amount);

        Ok(self.balance)
    }

    /// Checks funds, then the per-withdrawal limit, then the withdrawal count, then the amount
    pub fn withdraw(&mut self, amount: i64) -> Result<i64, SimpleAccountError> {
        if amount > self.balance {
            return Err(SimpleAccountError::InsufficientFunds);
        }

        if amount > WITHDRAWAL_LIMIT {
            return Err(SimpleAccountError::ExceedsLimit);
        }

        if self.withdrawals_made >= MAX_WITHDRAWALS {
            return Err(SimpleAccountError::TooManyWithdrawals);
        }

        if amount <= 0 {
            return Err(SimpleAccountError::InvalidAmount);
        }

        self.balance -= amount;
        self.withdrawals.push(amount);
        self.withdrawals_made += 1;

        Ok(self.balance)
    }

    pub fn statement(&self) -> String {
        let mut lines = vec![];

        if self.deposits.is_empty() && self.withdrawals.is_empty() {
            lines.push("No movements were made.".to_string());
        }

        for amount in self.deposits.iter() {
            lines.push(format!("Deposit:    R$ {amount}.00"));
        }

        for amount in self.withdrawals.iter() {
            lines.push(format!("Withdrawal: R$ {amount}.00"));
        }

        lines.push(String::new());
        lines.push(format!("Balance:    R$ {}.00", self.balance));

        return lines.join("\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_account(balance: i64) -> SimpleAccount {
        let mut account = SimpleAccount::new();
        if balance > 0 {
            account.deposit(balance).unwrap();
        }
        account
    }

    #[test]
    fn deposit() {
        let mut account = SimpleAccount::new();

        assert_eq!(account.deposit(100), Ok(100));
        assert_eq!(account.deposit(50), Ok(150));
        assert_eq!(account.deposits(), &[100, 50]);

        assert_eq!(account.deposit(0), Err(SimpleAccountError::InvalidAmount));
        assert_eq!(account.deposit(-10), Err(SimpleAccountError::InvalidAmount));
        assert_eq!(account.balance(), 150);
    }

    #[test]
    fn withdraw() {
        let mut account = build_account(1000);

        assert_eq!(account.withdraw(300), Ok(700));
        assert_eq!(account.withdrawals(), &[300]);
        assert_eq!(account.withdrawals_made(), 1);
    }

    #[test]
    fn withdraw_check_order() {
        // funds are checked before the limit
        let mut account = build_account(100);
        assert_eq!(
            account.withdraw(600),
            Err(SimpleAccountError::InsufficientFunds)
        );

        let mut account = build_account(2000);
        assert_eq!(account.withdraw(501), Err(SimpleAccountError::ExceedsLimit));

        for _ in 0..MAX_WITHDRAWALS {
            account.withdraw(100).unwrap();
        }

        assert_eq!(
            account.withdraw(600),
            Err(SimpleAccountError::ExceedsLimit)
        );
        assert_eq!(
            account.withdraw(0),
            Err(SimpleAccountError::TooManyWithdrawals)
        );

        let mut account = build_account(10);
        assert_eq!(
            account.withdraw(-5),
            Err(SimpleAccountError::InvalidAmount)
        );
        assert_eq!(account.balance(), 10);
        assert_eq!(account.withdrawals_made(), 0);
    }

    #[test]
    fn statement() {
        assert_eq!(
            SimpleAccount::new().statement(),
            "No movements were made.\n\nBalance:    R$ 0.00"
        );

        let mut account = build_account(150);
        account.withdraw(20).unwrap();

        assert_eq!(
            account.statement(),
            "Deposit:    R$ 150.00\nWithdrawal: R$ 20.00\n\nBalance:    R$ 130.00"
        );
    }
}
