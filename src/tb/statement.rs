use crate::ids::AccountNumber;
use crate::models::{Transaction, TransactionKind};
use crate::{Money, MoneyError};

use serde::Serialize;

/// Totals and counts over an account's transaction log
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Statement {
    pub balance: Money,
    pub transactions: Vec<Transaction>,
    pub total_deposited: Money,
    pub total_withdrawn: Money,
    pub deposit_count: usize,
    pub withdrawal_count: usize,
}

/// Statement of a specific account, as returned to callers
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AccountStatement {
    pub branch_code: &'static str,
    pub account_number: AccountNumber,

    #[serde(flatten)]
    pub statement: Statement,
}

pub fn build_statement(balance: Money, log: &[Transaction]) -> Result<Statement, MoneyError> {
    let mut total_deposited = Money::ZERO;
    let mut total_withdrawn = Money::ZERO;
    let mut deposit_count = 0;
    let mut withdrawal_count = 0;

    for tx in log {
        match tx.kind {
            TransactionKind::Deposit => {
                total_deposited = total_deposited.checked_add(&tx.amount)?;
                deposit_count += 1;
            }
            TransactionKind::Withdrawal => {
                total_withdrawn = total_withdrawn.checked_add(&tx.amount)?;
                withdrawal_count += 1;
            }
        }
    }

    Ok(Statement {
        balance,
        transactions: log.to_vec(),
        total_deposited,
        total_withdrawn,
        deposit_count,
        withdrawal_count,
    })
}
