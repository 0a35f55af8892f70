use crate::models::Transaction;
use crate::{Money, MoneyError};

use chrono::NaiveDateTime;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Invalid amount! Try again with an amount above 0.")]
    InvalidAmount(Money),

    #[error("You have reached the daily withdrawal limit ({0}). Try again in 24 hours!")]
    WithdrawalLimitReached(u32),

    #[error("The limit per withdrawal is R$ {0}. Request a smaller amount!")]
    AmountExceedsPerWithdrawalLimit(Money),

    #[error("Insufficient funds! Your current balance is R$ {0}")]
    InsufficientFunds(Money),

    #[error("Balance out of range: {0}")]
    OutOfRange(#[from] MoneyError),
}

#[derive(Debug, Clone, Copy)]
pub struct DepositParams {
    pub balance: Money,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepositOutcome {
    pub balance: Money,
    /// Entry to append to the account's log
    pub entry: Transaction,
}

#[derive(Debug, Clone, Copy)]
pub struct WithdrawalParams {
    pub balance: Money,
    pub amount: Money,
    pub per_withdrawal_limit: Money,
    pub withdrawals_today: u32,
    pub daily_withdrawal_limit: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawalOutcome {
    pub balance: Money,
    /// Entry to append to the account's log
    pub entry: Transaction,
    pub withdrawals_today: u32,
}

/// Validates a deposit and computes its outcome. Nothing is mutated.
pub fn deposit(
    params: DepositParams,
    at: NaiveDateTime,
) -> Result<DepositOutcome, TransactionError> {
    let DepositParams { balance, amount } = params;

    if !amount.is_positive() {
        return Err(TransactionError::InvalidAmount(amount));
    }

    let balance = balance.checked_add(&amount)?;

    Ok(DepositOutcome {
        balance,
        entry: Transaction::deposit(amount, at),
    })
}

/// Validates a withdrawal and computes its outcome. Nothing is mutated.
///
/// Checks run in a fixed order and the first failure wins:
/// daily count, per-withdrawal ceiling, funds, and only then amount positivity.
pub fn withdraw(
    params: WithdrawalParams,
    at: NaiveDateTime,
) -> Result<WithdrawalOutcome, TransactionError> {
    let WithdrawalParams {
        balance,
        amount,
        per_withdrawal_limit,
        withdrawals_today,
        daily_withdrawal_limit,
    } = params;

    if withdrawals_today >= daily_withdrawal_limit {
        return Err(TransactionError::WithdrawalLimitReached(
            daily_withdrawal_limit,
        ));
    }

    if amount > per_withdrawal_limit {
        return Err(TransactionError::AmountExceedsPerWithdrawalLimit(
            per_withdrawal_limit,
        ));
    }

    if amount > balance {
        return Err(TransactionError::InsufficientFunds(balance));
    }

    if !amount.is_positive() {
        return Err(TransactionError::InvalidAmount(amount));
    }

    let balance = balance.checked_sub(&amount)?;

    Ok(WithdrawalOutcome {
        balance,
        entry: Transaction::withdrawal(amount, at),
        withdrawals_today: withdrawals_today + 1,
    })
}
