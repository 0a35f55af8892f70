use crate::Money;

use chrono::NaiveDateTime;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

/// A single entry of an account's transaction log
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub amount: Money,
    pub timestamp: NaiveDateTime,
}

impl Transaction {
    pub fn deposit(amount: Money, timestamp: NaiveDateTime) -> Self {
        return Self {
            kind: TransactionKind::Deposit,
            amount,
            timestamp,
        };
    }

    pub fn withdrawal(amount: Money, timestamp: NaiveDateTime) -> Self {
        return Self {
            kind: TransactionKind::Withdrawal,
            amount,
            timestamp,
        };
    }
}

/// Append-only, chronologically ordered
pub type TransactionLog = Vec<Transaction>;
